/*!

  CHIP-8 instructions are a single 16-bit word. The high nibble selects the instruction
  class, and the remaining twelve bits hold operand fields whose layout depends on the class:

    6XKK   X: register (4 bits)   KK: byte (8 bits)
    FX29   X: register (4 bits)
    DXYN   X, Y: registers (4 bits each)   N: sprite height (4 bits)
    BNNN   NNN: address (12 bits)

  Words are stored least significant byte first in the output stream.

  `Instruction` holds the unencoded components of an instruction; `binary` turns them into
  opcodes. There is no decoder.

*/

mod binary;
mod instruction;

pub use binary::{encode_instruction, to_bytes, Opcode, OPCODE_SIZE};
pub use instruction::{Instruction, Operation};
