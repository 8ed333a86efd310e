use crate::cpu::{bit_test, zero_page_addr, ProgramState};

use AddressingMode::*;
use Instruction::*;

/* only the modes the modeled subset actually decodes */
#[derive(Debug, PartialEq, Eq)]
pub enum AddressingMode {
    Implied,
    Immediate,
    ZeroPage,
    Relative,
    Absolute,
    AbsoluteX,
    IndirectY,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Instruction {
    /* load/store */
    LDA, /* loads value into A; sets zero/negative */
    LDX, /* loads value into X; sets zero/negative */
    LDY, /* loads value into Y; sets zero/negative */
    STA, /* stores A into an address */
    STX, /* stores X into an address */

    /* branches */
    BEQ, /* Branch if Equal */
    BPL, /* Branch if Plus */

    /* decrements */
    DEY, /* Decrement Y */

    /* bitwise */
    AND, /* Bitwise AND */
    BIT, /* Bit Test */

    /* flag sets/clears */
    CLD, /* Clear Decimal */
    SEI, /* Set Interrupt Disable */

    /* stack */
    TXS, /* Transfer X to Stack Pointer */

    /* jumps */
    JMP, /* Jump */
    JSR, /* Jump to Subroutine */

    /* others */
    NOP, /* No-op */
}

/* an instruction paired with the addressing mode its opcode implies */
#[derive(Debug, PartialEq, Eq)]
pub struct RealizedInstruction {
    pub instruction: Instruction,
    pub mode: AddressingMode,
}

/**
 * The opcode table. Absent entries are genuinely unsupported and come back
 * as None; the executor reports them without consuming operand bytes.
 */
pub fn from_opcode(opcode: u8) -> Option<RealizedInstruction> {
    let (instruction, mode) = match opcode {
        0x10 => (BPL, Relative),
        0x20 => (JSR, Absolute),
        0x29 => (AND, Immediate),
        0x2c => (BIT, Absolute),
        0x4c => (JMP, Absolute),
        0x78 => (SEI, Implied),
        0x85 => (STA, ZeroPage),
        0x86 => (STX, ZeroPage),
        0x88 => (DEY, Implied),
        0x8d => (STA, Absolute),
        0x9a => (TXS, Implied),
        0xa0 => (LDY, Immediate),
        0xa2 => (LDX, Immediate),
        0xa9 => (LDA, Immediate),
        0xad => (LDA, Absolute),
        0xb1 => (LDA, IndirectY),
        0xbd => (LDA, AbsoluteX),
        0xd8 => (CLD, Implied),
        0xea => (NOP, Implied),
        0xf0 => (BEQ, Relative),
        _ => return None,
    };

    Some(RealizedInstruction { instruction, mode })
}

impl RealizedInstruction {
    /**
     * Executes one decoded instruction. The program counter sits just past
     * the opcode byte on entry; each arm consumes exactly the operand bytes
     * its historical behavior consumed, including the cases where that
     * behavior is wrong (the two branch arms and the indexed load — see the
     * comments there). Those are kept bit-for-bit rather than corrected.
     */
    pub fn apply(&self, state: &mut ProgramState) {
        match self.instruction {
            AND => {
                let value = state.fetch_byte();
                state.accumulator &= value;
                state.update_zero_neg_flags(state.accumulator);
            }
            BEQ => {
                /* the offset is biased by -127 instead of sign-extended,
                 * and the operand byte is stepped over even when the branch
                 * is taken; carried behavior */
                let offset = state.read_mem(state.program_counter);
                if state.flags.zero {
                    state.program_counter = state
                        .program_counter
                        .wrapping_add(offset as u16)
                        .wrapping_sub(127);
                }
                state.program_counter = state.program_counter.wrapping_add(1);
            }
            BIT => {
                let target = state.fetch_addr();
                let mem_val = state.read_mem(target);
                let (negative, overflow, zero) = bit_test(state.accumulator, mem_val);
                state.flags.negative = negative;
                state.flags.overflow = overflow;
                state.flags.zero = zero;
            }
            BPL => {
                /* the offset is added unsigned rather than sign-extended,
                 * and a taken branch never steps past its operand byte;
                 * carried behavior */
                if !state.flags.negative {
                    let offset = state.read_mem(state.program_counter);
                    state.program_counter = state.program_counter.wrapping_add(offset as u16);
                } else {
                    state.program_counter = state.program_counter.wrapping_add(1);
                }
            }
            CLD => {
                state.flags.decimal = false;
            }
            DEY => {
                state.index_y = state.index_y.wrapping_sub(1);
                state.update_zero_neg_flags(state.index_y);
            }
            JMP => {
                state.program_counter = state.fetch_addr();
            }
            JSR => {
                /* the return address is recorded on the call stack; no
                 * opcode in the subset ever comes back for it */
                let return_addr = state.program_counter.wrapping_add(2);
                let target = state.fetch_addr();
                state.call_stack.push(return_addr);
                state.program_counter = target;
            }
            LDA => match self.mode {
                Immediate => {
                    state.accumulator = state.fetch_byte();
                    state.update_zero_neg_flags(state.accumulator);
                }
                Absolute => {
                    let target = state.fetch_addr();
                    state.accumulator = state.read_mem(target);
                    state.update_zero_neg_flags(state.accumulator);
                }
                AbsoluteX => {
                    /* the index is added to the loaded value instead of
                     * the address; carried behavior */
                    let target = state.fetch_addr();
                    state.accumulator = state.read_mem(target).wrapping_add(state.index_x);
                    state.update_zero_neg_flags(state.accumulator);
                }
                IndirectY => {
                    /* decoded but not implemented: no effect, and no
                     * operand byte is consumed */
                }
                _ => unreachable!("LDA has no {:?} form", self.mode),
            },
            LDX => {
                state.index_x = state.fetch_byte();
                state.update_zero_neg_flags(state.index_x);
            }
            LDY => {
                state.index_y = state.fetch_byte();
                state.update_zero_neg_flags(state.index_y);
            }
            NOP => {
                /* the two-cycle no-op is modeled by latching a one-tick
                 * stall; the next tick clears it without fetching */
                state.stall = true;
            }
            SEI => {
                state.flags.interrupt_disable = true;
            }
            STA => {
                let target = match self.mode {
                    ZeroPage => zero_page_addr(state.fetch_byte()),
                    Absolute => state.fetch_addr(),
                    _ => unreachable!("STA has no {:?} form", self.mode),
                };
                state.write_mem(target, state.accumulator);
            }
            STX => {
                let target = zero_page_addr(state.fetch_byte());
                state.write_mem(target, state.index_x);
            }
            TXS => {
                /* modeled as a call-stack push rather than a real write
                 * to the stack pointer register */
                state.call_stack.push(state.index_x as u16);
            }
        }
    }
}
