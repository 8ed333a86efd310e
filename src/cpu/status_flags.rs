/* seven independent condition bits; each is touched only by the opcodes
 * that define it in the modeled subset, so nothing here sets carry */
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusFlags {
	pub negative: bool,
	pub overflow: bool,
	pub break_command: bool,
	pub decimal: bool,
	pub interrupt_disable: bool,
	pub zero: bool,
	pub carry: bool,
}

impl StatusFlags {
	pub fn new() -> StatusFlags {
		StatusFlags::default()
	}
}

/**
 * The BIT comparison over an accumulator and a memory byte. Returns the
 * (negative, overflow, zero) triple: negative mirrors bit 7 of the memory
 * byte, overflow mirrors bit 6, and zero reports whether the AND of the
 * two values is empty.
 */
pub fn bit_test(accumulator: u8, mem_val: u8) -> (bool, bool, bool) {
	(
		mem_val & 0x80 != 0,
		mem_val & 0x40 != 0,
		accumulator & mem_val == 0,
	)
}
