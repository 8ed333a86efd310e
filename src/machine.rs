use crate::cpu::{CoreMemory, ProgramState};
use crate::error::EmulatorError;
use crate::mapper;
use crate::rom::Rom;
use crate::scheduler::FrameScheduler;

/**
 * One whole emulated machine: the mapped address space, the CPU state, and
 * the frame scheduler, owned together. All entry points take &mut self;
 * nothing is shared between instances.
 */
pub struct Machine {
    state: ProgramState,
    scheduler: FrameScheduler,
    mapped_prg_len: usize,
    /* latched controller value; accepted but not yet wired to any
     * address-space effect */
    input_latch: u8,
}

impl Machine {
    /**
     * Builds a machine from a raw iNES image: parse the header, validate
     * the declared lengths, build the mapping, then derive the program
     * counter from the reset vector of the mapped space. Any failure along
     * the way surfaces as one error with no machine left behind.
     */
    pub fn from_ines(rom_data: &[u8]) -> Result<Machine, EmulatorError> {
        let rom = Rom::parse(rom_data)?;

        let mut memory = CoreMemory::new();
        let mapper = mapper::load_mapper(rom.mapper_id)?;
        let mapped_prg_len = mapper.map(&rom, &mut memory)?;
        log::info!(
            "mapper {}: placed {mapped_prg_len} PRG bytes, {} CHR bytes",
            rom.mapper_id,
            rom.chr_data.len()
        );

        let state = ProgramState::new(memory);
        log::info!("reset vector -> {:#06x}", state.program_counter);

        Ok(Machine {
            state,
            scheduler: FrameScheduler::new(),
            mapped_prg_len,
            input_latch: 0,
        })
    }

    pub fn mapped_prg_len(&self) -> usize {
        self.mapped_prg_len
    }

    /// Runs one frame. The input value is the controller state for the
    /// frame; it is latched and otherwise ignored for now.
    pub fn frame(&mut self, input: u8) {
        self.input_latch = input;
        self.scheduler.run_frame(&mut self.state);
    }

    /// Runs one frame paced to the 60 Hz wall clock.
    pub fn frame_timed(&mut self, input: u8) {
        self.input_latch = input;
        self.scheduler.run_frame_timed(&mut self.state);
    }

    pub fn halted(&self) -> bool {
        self.scheduler.halted()
    }

    pub fn input(&self) -> u8 {
        self.input_latch
    }
}
