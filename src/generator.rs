/*!
  Generates the font grid program: the sixteen built-in hex digit sprites laid out four to a
  row, followed by a jump to `JUMP_TARGET`.

  For every digit the program loads the digit into `V0`, points `I` at its font sprite, loads
  the sprite position into `V1`/`V2` and draws five rows. After the last digit `V0` is cleared,
  which makes the final `BNNN` jump land exactly on `JUMP_TARGET`.
*/

use crate::bytecode::Instruction;
use crate::emitter::Emit;
use crate::error::Result;
use crate::operand::OperandNumberType;

pub const DIGIT_COUNT    : OperandNumberType = 16;
pub const COLUMNS        : OperandNumberType = 4;
pub const ORIGIN_X       : OperandNumberType = 2;
pub const ORIGIN_Y       : OperandNumberType = 2;
pub const COLUMN_ADVANCE : OperandNumberType = 8;
/// Nominal row height of the grid. Rows are actually advanced by a single pixel, so glyphs
/// on consecutive rows overlap.
// ToDo: Decide whether the row step should be `ROW_ADVANCE` and update the expected output.
#[allow(dead_code)]
pub const ROW_ADVANCE    : OperandNumberType = 6;
pub const ROW_STEP       : OperandNumberType = 1;
/// Rows of a built-in font sprite.
pub const GLYPH_HEIGHT   : OperandNumberType = 5;
pub const JUMP_TARGET    : OperandNumberType = 0x2A3;

const DIGIT_REGISTER : OperandNumberType = 0;
const X_REGISTER     : OperandNumberType = 1;
const Y_REGISTER     : OperandNumberType = 2;

/// Where one digit is drawn.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Cell {
  pub digit : OperandNumberType,
  pub x     : OperandNumberType,
  pub y     : OperandNumberType,
}

/// Walks the grid cell by cell: `x` advances by `COLUMN_ADVANCE` and wraps back to
/// `ORIGIN_X` once it passes the fourth column.
#[derive(Clone, Debug)]
pub struct FontGrid {
  digit : OperandNumberType,
  x     : OperandNumberType,
  y     : OperandNumberType,
}

impl FontGrid {
  pub fn new() -> FontGrid {
    FontGrid {
      digit : 0,
      x     : ORIGIN_X,
      y     : ORIGIN_Y,
    }
  }
}

impl Iterator for FontGrid {
  type Item = Cell;

  fn next(&mut self) -> Option<Cell> {
    if self.digit >= DIGIT_COUNT {
      return None;
    }
    let cell = Cell { digit: self.digit, x: self.x, y: self.y };

    self.digit += 1;
    self.x += COLUMN_ADVANCE;
    if self.x > COLUMNS * COLUMN_ADVANCE {
      self.x  = ORIGIN_X;
      self.y += ROW_STEP;
      debug!("row full after digit {:X}, next row at y = {}", cell.digit, self.y);
    }
    Some(cell)
  }
}

/// Drives the whole program into `sink`. Stops at the first failed emission.
pub fn generate<S: Emit>(sink: &mut S) -> Result<()> {
  for cell in FontGrid::new() {
    debug!("digit {:X} at ({}, {})", cell.digit, cell.x, cell.y);
    sink.emit_instruction(Instruction::load_immediate(DIGIT_REGISTER, cell.digit))?;
    sink.emit_instruction(Instruction::load_font_address(DIGIT_REGISTER))?;
    sink.emit_instruction(Instruction::load_immediate(X_REGISTER, cell.x))?;
    sink.emit_instruction(Instruction::load_immediate(Y_REGISTER, cell.y))?;
    sink.emit_instruction(Instruction::draw(X_REGISTER, Y_REGISTER, GLYPH_HEIGHT))?;
  }

  sink.emit_instruction(Instruction::load_immediate(DIGIT_REGISTER, 0))?;
  sink.emit_instruction(Instruction::jump(JUMP_TARGET))
}
