//! A record of every word written to an emitter, rendered as a table: where it lands in
//! interpreter memory, the opcode, its bytes in output order and the instruction it encodes.

use std::fmt::{Display, Formatter};

use prettytable::{format as TableFormat, Table};

use crate::bytecode::{to_bytes, Instruction, Opcode, Operation};
use crate::operand::{Address, OperandNumberType, PROGRAM_START};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ListingEntry {
  /// Byte offset in the output stream.
  pub offset      : usize,
  pub opcode      : Opcode,
  /// `None` when the word was emitted as a bare opcode.
  pub instruction : Option<Instruction>,
}

#[derive(Clone, Debug, Default)]
pub struct Listing {
  entries: Vec<ListingEntry>
}

impl ListingEntry {
  /// The address the word is loaded at when the program starts at `PROGRAM_START`.
  pub fn address(&self) -> Address {
    Address::new(PROGRAM_START) + self.offset as OperandNumberType
  }

  fn describe(&self) -> String {
    match (&self.instruction, Operation::from_opcode(self.opcode)) {
      (Some(instruction), _) => format!("{}", instruction),
      (None, Some(operation)) => format!("{}(..)", operation),
      (None, None) => "?".to_string(),
    }
  }
}

impl Listing {
  pub fn new() -> Listing {
    Listing::default()
  }

  pub fn push(&mut self, entry: ListingEntry) {
    self.entries.push(entry);
  }

  pub fn entries(&self) -> &[ListingEntry] {
    &self.entries
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn to_table(&self) -> Table {
    let mut table = Table::new();

    table.set_format(*TABLE_DISPLAY_FORMAT);
    table.set_titles(row![ubr->"Address", ubr->"Opcode", ubr->"Bytes", ubl->"Instruction"]);

    for entry in self.entries() {
      let bytes = to_bytes(entry.opcode);
      table.add_row(
        row![
          r->format!("{}", entry.address()),
          r->format!("{:04X}", entry.opcode),
          r->format!("{:02X} {:02X}", bytes[0], bytes[1]),
          entry.describe()
        ]
      );
    }
    table
  }
}

lazy_static! {
  static ref TABLE_DISPLAY_FORMAT: TableFormat::TableFormat =
    TableFormat::FormatBuilder::new()
      .column_separator('│')
      .borders(' ')
      .separator(
        TableFormat::LinePosition::Title,
        TableFormat::LineSeparator::new('─', '┼', ' ', ' ')
      )
      .separator(
        TableFormat::LinePosition::Bottom,
        TableFormat::LineSeparator::new('─', '┴', ' ', ' ')
      )
      .padding(1, 1)
      .build();
}

impl Display for Listing {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.to_table())
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  fn entry(offset: usize, opcode: Opcode, instruction: Option<Instruction>) -> ListingEntry {
    ListingEntry { offset, opcode, instruction }
  }

  #[test]
  fn addresses_start_at_program_start(){
    assert_eq!(entry(0, 0x6000, None).address(), Address::new(0x200));
    assert_eq!(entry(162, 0xB2A3, None).address(), Address::new(0x2A2));
  }

  #[test]
  fn describe_prefers_instruction(){
    let jump = Instruction::jump(0x2A3);
    assert_eq!(entry(0, 0xB2A3, Some(jump)).describe(), "Jump(0x2A3)");
    assert_eq!(entry(0, 0xB2A3, None).describe(), "Jump(..)");
    assert_eq!(entry(0, 0x00E0, None).describe(), "?");
  }

  #[test]
  fn table_has_a_row_per_entry(){
    let mut listing = Listing::new();
    assert_eq!(listing.len(), 0);
    listing.push(entry(0, 0x6000, Some(Instruction::load_immediate(0, 0))));
    listing.push(entry(2, 0xF029, Some(Instruction::load_font_address(0))));
    assert_eq!(listing.len(), 2);
    assert_eq!(listing.to_table().len(), 2);

    let text = listing.to_string();
    assert!(text.contains("0x200"));
    assert!(text.contains("F029"));
    assert!(text.contains("29 F0"));
    assert!(text.contains("LoadFontAddress(V0)"));
  }
}
