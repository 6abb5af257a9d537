/*!
  The emission sink. An `Emitter` owns its destination from creation until `finish`, and
  appends each opcode to it as two bytes, least significant byte first, in call order.

  Dropping an `Emitter` on an error path releases the destination as well, so a failed run
  never leaves the output open.
*/

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::bytecode::{encode_instruction, to_bytes, Instruction, Opcode, OPCODE_SIZE};
use crate::error::{AssembleError, Result};
use crate::listing::{Listing, ListingEntry};

/// Anything the program generator can drive opcodes into.
pub trait Emit {
  fn emit(&mut self, opcode: Opcode) -> Result<()>;

  fn emit_instruction(&mut self, instruction: Instruction) -> Result<()> {
    self.emit(encode_instruction(instruction))
  }
}

pub struct Emitter<W: Write> {
  destination : W,
  position    : usize, // Bytes written so far
  listing     : Listing,
}

impl Emitter<BufWriter<File>> {
  /// Creates (or truncates) the file at `path`. Failing here is fatal for the run, and
  /// happens before anything is emitted.
  pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| AssembleError::Acquire {
      path: path.to_path_buf(),
      source,
    })?;
    info!("writing program to {}", path.display());
    Ok(Emitter::new(BufWriter::new(file)))
  }
}

impl<W: Write> Emitter<W> {
  pub fn new(destination: W) -> Emitter<W> {
    Emitter {
      destination,
      position : 0,
      listing  : Listing::new(),
    }
  }

  pub fn position(&self) -> usize {
    self.position
  }

  /// Flushes the destination and hands it back with the listing of everything emitted.
  pub fn finish(mut self) -> Result<(W, Listing)> {
    let offset = self.position;
    self.destination
        .flush()
        .map_err(|source| AssembleError::Write { offset, source })?;
    debug!("flushed {} bytes", offset);
    Ok((self.destination, self.listing))
  }

  fn write_word(&mut self, opcode: Opcode, instruction: Option<Instruction>) -> Result<()> {
    let offset = self.position;
    let bytes  = to_bytes(opcode);

    self.destination
        .write_all(&bytes)
        .map_err(|source| AssembleError::Write { offset, source })?;

    trace!("{:#06x}: {:04X} -> {:02X} {:02X}", offset, opcode, bytes[0], bytes[1]);
    self.position += OPCODE_SIZE;
    self.listing.push(ListingEntry { offset, opcode, instruction });
    Ok(())
  }
}

impl<W: Write> Emit for Emitter<W> {
  fn emit(&mut self, opcode: Opcode) -> Result<()> {
    self.write_word(opcode, None)
  }

  fn emit_instruction(&mut self, instruction: Instruction) -> Result<()> {
    self.write_word(encode_instruction(instruction), Some(instruction))
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use std::io;

  /// Accepts `capacity` bytes, then refuses every write.
  struct FullWriter {
    written  : Vec<u8>,
    capacity : usize,
  }

  impl Write for FullWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      let room = self.capacity - self.written.len();
      if room == 0 {
        return Err(io::Error::new(io::ErrorKind::Other, "destination full"));
      }
      let n = room.min(buf.len());
      self.written.extend_from_slice(&buf[..n]);
      Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn emits_low_byte_first(){
    let mut emitter = Emitter::new(Vec::new());
    emitter.emit(0x6000).unwrap();
    emitter.emit(0xB2A3).unwrap();
    let (bytes, _) = emitter.finish().unwrap();
    assert_eq!(bytes, vec![0x00, 0x60, 0xA3, 0xB2]);
  }

  #[test]
  fn bytes_appear_in_call_order(){
    let mut emitter = Emitter::new(Vec::new());
    for opcode in [0x1234u16, 0xABCD, 0x0001].iter() {
      emitter.emit(*opcode).unwrap();
    }
    assert_eq!(emitter.position(), 6);
    let (bytes, _) = emitter.finish().unwrap();
    assert_eq!(bytes, vec![0x34, 0x12, 0xCD, 0xAB, 0x01, 0x00]);
  }

  #[test]
  fn emit_instruction_encodes_and_records(){
    let mut emitter = Emitter::new(Vec::new());
    emitter.emit_instruction(Instruction::load_immediate(20, 300)).unwrap();
    emitter.emit(0xF029).unwrap();

    let (bytes, listing) = emitter.finish().unwrap();
    assert_eq!(bytes, vec![0x2C, 0x64, 0x29, 0xF0]);

    let entries = listing.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].offset, 0);
    assert_eq!(entries[0].opcode, 0x642C);
    assert_eq!(entries[0].instruction, Some(Instruction::load_immediate(4, 44)));
    assert_eq!(entries[1].offset, 2);
    assert_eq!(entries[1].instruction, None);
  }

  #[test]
  fn write_failure_reports_offset(){
    let mut emitter = Emitter::new(FullWriter { written: Vec::new(), capacity: 3 });
    emitter.emit(0x6000).unwrap();

    match emitter.emit(0x6101) {
      Err(AssembleError::Write { offset, .. }) => assert_eq!(offset, 2),
      other => panic!("expected a write error, got {:?}", other),
    }
    // The failed word is not counted.
    assert_eq!(emitter.position(), 2);
    let (writer, listing) = emitter.finish().unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(writer.written, vec![0x00, 0x60, 0x01]);
  }

  #[test]
  fn create_fails_for_missing_directory(){
    let path = std::env::temp_dir()
      .join(format!("chip8as-missing-{}", std::process::id()))
      .join("output.bin");

    match Emitter::create(&path) {
      Err(AssembleError::Acquire { path: reported, .. }) => assert_eq!(reported, path),
      Err(e) => panic!("expected an acquire error, got {}", e),
      Ok(_) => panic!("created a file inside a missing directory"),
    }
  }

  #[test]
  fn create_truncates_existing_file(){
    let path = std::env::temp_dir().join(format!("chip8as-emitter-{}.bin", std::process::id()));
    std::fs::write(&path, vec![0xFFu8; 32]).unwrap();

    let mut emitter = Emitter::create(&path).unwrap();
    emitter.emit(0xB2A3).unwrap();
    drop(emitter.finish().unwrap());

    let contents = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(contents, vec![0xA3, 0xB2]);
  }
}
