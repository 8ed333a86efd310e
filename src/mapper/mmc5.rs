use crate::cpu::CoreMemory;
use crate::error::EmulatorError;
use crate::mapper::{Mapper, CHR_WINDOW, CHR_WINDOW_SIZE};
use crate::rom::Rom;

/* the PRG mode register image sits at this fixed offset into PRG; carts
 * shorter than the offset read as mode 0 */
const PRG_MODE_OFFSET: usize = 0x5100;

const PRG_WINDOW: u16 = 0x8000;
const PRG_WINDOW_SIZE: usize = 1 << 15;

/**
 * Mapper 5 (MMC5), heavily constrained: only PRG mode 0 is handled, one
 * flat 32k window at 0x8000 copied straight from PRG offset zero. The
 * other three modes and all of the chip's expansion features come back as
 * UnsupportedMapperMode.
 */
pub struct Mmc5;

impl Mapper for Mmc5 {
    fn map(&self, rom: &Rom, memory: &mut CoreMemory) -> Result<usize, EmulatorError> {
        let mode = rom.prg_data.get(PRG_MODE_OFFSET).copied().unwrap_or(0);
        if mode != 0 {
            return Err(EmulatorError::UnsupportedMapperMode(mode));
        }

        let take = rom.prg_data.len().min(PRG_WINDOW_SIZE);
        memory.load(PRG_WINDOW, &rom.prg_data[..take]);

        let chr_take = rom.chr_data.len().min(CHR_WINDOW_SIZE);
        memory.load(CHR_WINDOW, &rom.chr_data[..chr_take]);

        Ok(take)
    }
}
