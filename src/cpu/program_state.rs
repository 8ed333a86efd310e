use crate::cpu;
use crate::cpu::{CoreMemory, StatusFlags, RESET_VECTOR_LOCATION};

/**
 * Everything the executor mutates: registers, status flags, the call
 * stack, and the stall latch, along with exclusive ownership of the
 * address space. One of these exists per machine and every operation
 * takes it by exclusive reference; there is no ambient state anywhere.
 */
pub struct ProgramState {
	pub accumulator: u8,
	pub index_x: u8,
	pub index_y: u8,
	/* tracked but never used for addressing; pushes go to call_stack */
	pub s_register: u8,
	pub program_counter: u16,
	pub flags: StatusFlags,
	/* return addresses and register snapshots, in push order; nothing in
	 * the modeled subset ever pops */
	pub call_stack: Vec<u16>,
	/* one-shot: when set, the next tick performs no fetch and clears it */
	pub stall: bool,
	/* diagnostic count of zero padding bytes stepped over */
	pub skipped_padding: u64,
	memory: CoreMemory,
}

impl ProgramState {
	/**
	 * Wraps a fully mapped address space. The program counter comes from
	 * the little-endian reset vector at 0xFFFC, which is only meaningful
	 * once the mapper has placed the final PRG window.
	 */
	pub fn new(memory: CoreMemory) -> ProgramState {
		let mut result = ProgramState {
			accumulator: 0x00,
			index_x: 0x00,
			index_y: 0x00,
			s_register: 0xff,
			program_counter: 0x00,
			flags: StatusFlags::new(),
			call_stack: Vec::new(),
			stall: false,
			skipped_padding: 0,
			memory,
		};

		result.program_counter = result.read_mem16(RESET_VECTOR_LOCATION);

		result
	}

	pub fn update_zero_neg_flags(&mut self, new_val: u8) {
		self.flags.zero = new_val == 0;
		self.flags.negative = new_val & 0x80 != 0;
	}

	/* reads the byte at the program counter and steps past it */
	pub fn fetch_byte(&mut self) -> u8 {
		let value = self.read_mem(self.program_counter);
		self.program_counter = self.program_counter.wrapping_add(1);
		value
	}

	/* reads a little-endian absolute operand and steps past both bytes */
	pub fn fetch_addr(&mut self) -> u16 {
		let lo_byte = self.fetch_byte();
		let hi_byte = self.fetch_byte();
		cpu::addr(lo_byte, hi_byte)
	}

	pub fn write_mem(&mut self, addr: u16, data: u8) {
		self.memory.write(addr, data);
	}

	pub fn read_mem(&self, addr: u16) -> u8 {
		self.memory.read(addr)
	}

	pub fn read_mem16(&self, addr: u16) -> u16 {
		self.memory.read16(addr)
	}
}
