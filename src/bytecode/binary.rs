/*!
  This module is responsible for encoding instructions into 16-bit opcodes.

  Every encoder masks its operands to the width of their fields before shifting them into
  place: `load_immediate(20, 300)` is `load_immediate(4, 44)`. None of these functions can
  fail.
*/

use super::{Instruction, Operation};
use crate::operand::{OperandNumberType, ADDRESS_MASK, BYTE_MASK, NIBBLE_MASK};

// If you change this you must also change `to_bytes` and `OPCODE_SIZE`.
pub type Opcode = u16;

/// Size in bytes of one encoded instruction.
pub const OPCODE_SIZE: usize = 2;

/// `6XKK`: sets `VX` to `KK`.
pub fn load_immediate(register: OperandNumberType, value: OperandNumberType) -> Opcode {
  // [6:4][X:4][KK:8]
  Operation::LoadImmediate.tag()
    | ((register & NIBBLE_MASK) << 8)
    |  (value    & BYTE_MASK)
}

/// `FX29`: points `I` at the font sprite for the hex digit held in `VX`.
pub fn load_font_address(register: OperandNumberType) -> Opcode {
  // [F:4][X:4][29:8]
  Operation::LoadFontAddress.tag() | ((register & NIBBLE_MASK) << 8)
}

/// `DXYN`: draws an `N` row sprite from `I` at (`VX`, `VY`).
pub fn draw(x: OperandNumberType, y: OperandNumberType, height: OperandNumberType) -> Opcode {
  // [D:4][X:4][Y:4][N:4]
  Operation::Draw.tag()
    | ((x & NIBBLE_MASK) << 8)
    | ((y & NIBBLE_MASK) << 4)
    |  (height & NIBBLE_MASK)
}

/// `BNNN`: jumps to `NNN + V0`.
pub fn jump(address: OperandNumberType) -> Opcode {
  // [B:4][NNN:12]
  Operation::Jump.tag() | (address & ADDRESS_MASK)
}

/// Encodes the instruction into a single opcode.
pub fn encode_instruction(instruction: Instruction) -> Opcode {
  match instruction {

    Instruction::LoadImmediate { register, value } => {
      load_immediate(register.field(), value.field())
    }

    Instruction::LoadFontAddress { register } => {
      load_font_address(register.field())
    }

    Instruction::Draw { x, y, height } => {
      draw(x.field(), y.field(), height.field())
    }

    Instruction::Jump { address } => {
      jump(address.field())
    }

  }
}

/// The byte order of the output stream: least significant byte first.
pub fn to_bytes(opcode: Opcode) -> [u8; OPCODE_SIZE] {
  opcode.to_le_bytes()
}
