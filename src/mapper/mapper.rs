use crate::cpu::CoreMemory;
use crate::error::EmulatorError;
use crate::rom::Rom;

pub trait Mapper {
    /**
     * Copies the cartridge banks into their windows in the flat address
     * space. Runs exactly once, at load time, before the reset vector is
     * read. Returns the number of PRG bytes placed.
     */
    fn map(&self, rom: &Rom, memory: &mut CoreMemory) -> Result<usize, EmulatorError>;
}
