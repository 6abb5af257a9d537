#[macro_use] extern crate prettytable;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;

mod bytecode;
mod emitter;
mod error;
mod generator;
mod listing;
mod operand;

use crate::emitter::Emitter;
use crate::error::Result;

/// Overwritten on every run.
const OUTPUT_PATH: &str = "output.bin";

fn main() -> Result<()> {
  let env = env_logger::Env::default()
    .filter_or("CHIP8AS_LOG", "info")
    .write_style_or("CHIP8AS_LOG_STYLE", "auto");
  env_logger::init_from_env(env);

  #[cfg(feature = "trace_emission")]
  info!("Emission tracing ENABLED");

  let mut emitter = Emitter::create(OUTPUT_PATH)?;
  generator::generate(&mut emitter)?;
  let written = emitter.position();
  let (_output, listing) = emitter.finish()?;

  info!("wrote {} instructions ({} bytes) to {}", listing.len(), written, OUTPUT_PATH);

  #[cfg(feature = "trace_emission")]
  println!("{}", listing);

  Ok(())
}
