/* the state of the cpu at a given time, plus the fetch-decode-execute engine */
mod core_memory;
mod instruction;
mod program_state;
mod status_flags;

#[cfg(test)]
mod tests;

pub use core_memory::CoreMemory;
pub use instruction::{from_opcode, Instruction, RealizedInstruction};
pub use program_state::ProgramState;
pub use status_flags::{bit_test, StatusFlags};

use crate::error::EmulatorError;

pub const MEMORY_SIZE: usize = 1 << 16;

/// Where the little-endian CPU start address lives once mapping is done.
pub const RESET_VECTOR_LOCATION: u16 = 0xfffc;

/// The last addressable byte; fetching from here means the program ran off
/// the end of mapped memory.
pub const TOP_OF_MEMORY: u16 = 0xffff;

/**
 * Converts a pair of bytes into a u16 to look up an address in memory.
 * The 6502 is little-endian, so this expects the low-order byte first.
 * addr(0xCD, 0xAB) returns 0xABCD.
 */
fn addr(lo_byte: u8, hi_byte: u8) -> u16 {
	((hi_byte as u16) << 8) + (lo_byte as u16)
}

/**
 * Zero-page address operations take a single byte and result in an
 * address on the first page of memory. In effect this is just a cast,
 * but wrapping it as a function makes the goal clearer.
 */
fn zero_page_addr(b1: u8) -> u16 {
	b1 as u16
}

/**
 * Runs one tick of the executor. In order: signal EndOfMemory when the
 * program counter sits at the top of memory; burn the tick if the stall
 * latch is set; step over zero-valued padding bytes; then fetch one opcode
 * and dispatch it. Opcodes outside the implemented subset are reported and
 * ignored without consuming their operands, so a subsequent fetch can land
 * mid-instruction. That misalignment is observed behavior and kept.
 */
pub fn transition(state: &mut ProgramState) -> Result<(), EmulatorError> {
	if state.program_counter == TOP_OF_MEMORY {
		return Err(EmulatorError::EndOfMemory);
	}

	if state.stall {
		state.stall = false;
		return Ok(());
	}

	/* zero bytes between code sections are padding, not instructions */
	let mut skipped = 0u64;
	while state.program_counter < TOP_OF_MEMORY && state.read_mem(state.program_counter) == 0 {
		state.program_counter += 1;
		skipped += 1;
	}
	if skipped > 0 {
		state.skipped_padding += skipped;
		log::debug!(
			"skipped {skipped} padding bytes; next fetch at {:#06x}",
			state.program_counter
		);
	}
	if state.program_counter == TOP_OF_MEMORY {
		/* the skip ran off the end; the next tick reports it */
		return Ok(());
	}

	let fetch_addr = state.program_counter;
	let opcode = state.read_mem(fetch_addr);
	state.program_counter = state.program_counter.wrapping_add(1);
	log::trace!("opcode {opcode:#04x} at {fetch_addr:#06x}");

	match from_opcode(opcode) {
		Some(realized) => realized.apply(state),
		None => log::warn!("unsupported opcode {opcode:#04x} at {fetch_addr:#06x}"),
	}

	Ok(())
}
