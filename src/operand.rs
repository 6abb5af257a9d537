//! Operand fields of a CHIP-8 instruction word: register indices, small immediates, bytes and
//! 12-bit addresses, with some convenience functions.
//!
//! Every constructor masks its input to the width of the field it will occupy. Out-of-range
//! values wrap around instead of being rejected, which makes the encoder total over `u16`.

use std::ops::Add;
use std::fmt::{Display, Formatter};

// Operands arrive as `u16`, the same width as an opcode, so any field can be built from any input.
pub type OperandNumberType = u16;

pub const NIBBLE_MASK  : OperandNumberType = 0x000F;
pub const BYTE_MASK    : OperandNumberType = 0x00FF;
pub const ADDRESS_MASK : OperandNumberType = 0x0FFF;

/// Where a CHIP-8 interpreter loads a program into memory.
pub const PROGRAM_START: OperandNumberType = 0x200;

/// One of the sixteen general purpose registers `V0`..`VF`.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct Register(u8);

/// A 4-bit immediate, e.g. the row count of a sprite.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct Nibble(u8);

/// An 8-bit immediate.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct Byte(u8);

/// A 12-bit memory address.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct Address(u16);

impl Register {
  /// Keeps the low 4 bits of `index`, so `Register::new(20)` is `V4`.
  pub fn new(index: OperandNumberType) -> Register {
    Register((index & NIBBLE_MASK) as u8)
  }

  /// The register index as it sits in an opcode field.
  pub fn field(&self) -> OperandNumberType {
    self.0 as OperandNumberType
  }
}

impl Nibble {
  pub fn new(value: OperandNumberType) -> Nibble {
    Nibble((value & NIBBLE_MASK) as u8)
  }

  pub fn field(&self) -> OperandNumberType {
    self.0 as OperandNumberType
  }
}

impl Byte {
  /// Keeps the low 8 bits of `value`, so `Byte::new(300)` is `44`.
  pub fn new(value: OperandNumberType) -> Byte {
    Byte((value & BYTE_MASK) as u8)
  }

  pub fn field(&self) -> OperandNumberType {
    self.0 as OperandNumberType
  }
}

impl Address {
  pub fn new(address: OperandNumberType) -> Address {
    Address(address & ADDRESS_MASK)
  }

  pub fn field(&self) -> OperandNumberType {
    self.0
  }
}


impl Display for Register {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "V{:X}", self.0)
  }
}

impl Display for Nibble {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Display for Byte {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "0x{:02X}", self.0)
  }
}

impl Display for Address {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "0x{:03X}", self.0)
  }
}

// Advance an address, wrapping inside the 12-bit address space.
impl Add<OperandNumberType> for Address {
  type Output = Address;
  fn add(self, rhs: OperandNumberType) -> Address {
    Address::new(self.0.wrapping_add(rhs))
  }
}
