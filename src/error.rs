//! Error types for program emission. The encoder itself cannot fail; only the destination can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssembleError {
  /// The output could not be created. Nothing has been emitted yet.
  #[error("cannot open output {}: {source}", .path.display())]
  Acquire {
    path: PathBuf,
    source: io::Error,
  },

  #[error("write failed after {offset} bytes: {source}")]
  Write {
    offset: usize,
    source: io::Error,
  },
}

pub type Result<T> = std::result::Result<T, AssembleError>;
