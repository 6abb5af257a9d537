use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use strum::{Display as StrumDisplay, IntoStaticStr};
use num_enum::{TryFromPrimitive, IntoPrimitive};

use crate::bytecode::Opcode;
use crate::operand::{Address, Byte, Nibble, OperandNumberType, Register};

/**
  Instruction classes the assembler knows how to emit.

  The discriminant of each variant is its class tag: the fixed bits of the opcode, which are
  OR-ed with the operand fields to build a complete instruction word. `LoadFontAddress` has
  fixed bits in its low byte as well as in its high nibble, so its tag is `0xF029` rather
  than `0xF000`.
*/
#[derive(
StrumDisplay, IntoStaticStr, TryFromPrimitive, IntoPrimitive,
Clone,        Copy,          Eq, PartialEq,  Debug,            Hash
)]
#[repr(u16)]
pub enum Operation {
  LoadImmediate   = 0x6000, // 6XKK: Vx = kk
  LoadFontAddress = 0xF029, // FX29: I = sprite address of digit Vx
  Draw            = 0xD000, // DXYN: draw n rows at (Vx, Vy)
  Jump            = 0xB000, // BNNN: jump to nnn + V0
}

// Classes with fixed bits outside the high nibble must be tried first.
const TAG_MASKS: [Opcode; 2] = [0xF0FF, 0xF000];

/// Holds the unencoded components of an instruction. Operands are already masked to their
/// field widths, so every `Instruction` encodes to exactly one opcode.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Instruction {
  /// [6:4][X:4][KK:8]
  LoadImmediate {
    register: Register,
    value: Byte
  },
  /// [F:4][X:4][29:8]
  LoadFontAddress {
    register: Register
  },
  /// [D:4][X:4][Y:4][N:4]
  Draw {
    x: Register,
    y: Register,
    height: Nibble
  },
  /// [B:4][NNN:12]
  Jump {
    address: Address
  },
}

impl Operation {
  pub fn tag(&self) -> Opcode {
    Into::<Opcode>::into(*self)
  }

  /// Classifies an opcode by its class tag. Operand fields are ignored.
  pub fn from_opcode(opcode: Opcode) -> Option<Operation> {
    TAG_MASKS
      .iter()
      .find_map(|mask| Operation::try_from(opcode & mask).ok())
  }
}

impl Instruction {
  pub fn load_immediate(register: OperandNumberType, value: OperandNumberType) -> Instruction {
    Instruction::LoadImmediate {
      register : Register::new(register),
      value    : Byte::new(value)
    }
  }

  pub fn load_font_address(register: OperandNumberType) -> Instruction {
    Instruction::LoadFontAddress {
      register: Register::new(register)
    }
  }

  pub fn draw(x: OperandNumberType, y: OperandNumberType, height: OperandNumberType) -> Instruction {
    Instruction::Draw {
      x      : Register::new(x),
      y      : Register::new(y),
      height : Nibble::new(height)
    }
  }

  pub fn jump(address: OperandNumberType) -> Instruction {
    Instruction::Jump {
      address: Address::new(address)
    }
  }

  pub fn operation(&self) -> Operation {
    match self {
      Instruction::LoadImmediate { .. }   => Operation::LoadImmediate,
      Instruction::LoadFontAddress { .. } => Operation::LoadFontAddress,
      Instruction::Draw { .. }            => Operation::Draw,
      Instruction::Jump { .. }            => Operation::Jump,
    }
  }
}

impl Display for Instruction {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let name: &'static str = self.operation().into();
    match self {

      Instruction::LoadImmediate { register, value } => {
        write!(f, "{}({}, {})", name, register, value)
      }

      Instruction::LoadFontAddress { register } => {
        write!(f, "{}({})", name, register)
      }

      Instruction::Draw { x, y, height } => {
        write!(f, "{}({}, {}, {})", name, x, y, height)
      }

      Instruction::Jump { address } => {
        write!(f, "{}({})", name, address)
      }

    }
  }
}
