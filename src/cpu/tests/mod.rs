use crate::cpu::{CoreMemory, ProgramState};

mod instruction_tests;

fn state_for_testing() -> ProgramState {
    /* blank memory; the reset vector reads as zero, so tests place the
     * program counter themselves */
    ProgramState::new(CoreMemory::new())
}
