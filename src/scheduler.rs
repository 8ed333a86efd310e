use std::thread;
use std::time::{Duration, Instant};

use crate::cpu::{transition, ProgramState};

/* 21.477 MHz master clock sliced into 60 Hz frames */
pub const MASTER_CYCLES_PER_FRAME: u32 = 357_955;
/* the CPU runs off the master clock divided by twelve */
pub const CPU_CLOCK_DIVIDER: u32 = 12;

const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / 60);

/**
 * Paces the executor: each frame performs one initial tick and then one
 * tick on every twelfth master-clock iteration. Nothing else is driven off
 * this clock. Once the executor runs off the end of memory the scheduler
 * latches halted and later frames do nothing.
 */
pub struct FrameScheduler {
    halted: bool,
}

impl FrameScheduler {
    pub fn new() -> FrameScheduler {
        FrameScheduler { halted: false }
    }

    pub fn halted(&self) -> bool {
        self.halted
    }

    /* runs one frame's worth of ticks to completion; atomic to the caller */
    pub fn run_frame(&mut self, state: &mut ProgramState) {
        if self.halted {
            return;
        }

        if self.tick(state) {
            return;
        }
        for cycle in 1..=MASTER_CYCLES_PER_FRAME {
            if cycle % CPU_CLOCK_DIVIDER == 0 && self.tick(state) {
                return;
            }
        }
    }

    /**
     * Like run_frame, but sleeps away whatever remains of the frame's
     * 1/60 s wall-clock slice so a simple loop in the caller runs at the
     * hardware rate.
     */
    pub fn run_frame_timed(&mut self, state: &mut ProgramState) {
        let start_time = Instant::now();
        self.run_frame(state);
        thread::sleep(FRAME_DURATION.saturating_sub(start_time.elapsed()));
    }

    /* one executor tick; true means we just halted */
    fn tick(&mut self, state: &mut ProgramState) -> bool {
        match transition(state) {
            Ok(()) => false,
            Err(err) => {
                log::warn!("execution halted: {err}");
                self.halted = true;
                true
            }
        }
    }
}
