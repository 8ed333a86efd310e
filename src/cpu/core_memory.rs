use crate::cpu::MEMORY_SIZE;

/**
 * The flat 64k address space the CPU sees. The mapper writes the cartridge
 * banks in once at load time; after that the executor reads and writes it
 * one instruction at a time. Owned exclusively by the ProgramState.
 */
pub struct CoreMemory {
    memory: Box<[u8; MEMORY_SIZE]>,
}

impl CoreMemory {
    pub fn new() -> CoreMemory {
        CoreMemory {
            memory: Box::new([0; MEMORY_SIZE]),
        }
    }

    pub fn read(&self, address: u16) -> u8 {
        self.memory[address as usize]
    }

    /* little-endian 16-bit read, low byte first */
    pub fn read16(&self, address: u16) -> u16 {
        let lo_byte = self.read(address) as u16;
        let hi_byte = self.read(address.wrapping_add(1)) as u16;

        lo_byte | (hi_byte << 8)
    }

    pub fn write(&mut self, address: u16, value: u8) {
        self.memory[address as usize] = value;
    }

    /**
     * Places a bank slice starting at the given address. Only the mappers
     * call this, and only during initialization; the slice must fit below
     * the top of memory.
     */
    pub fn load(&mut self, start: u16, data: &[u8]) {
        let start = start as usize;
        self.memory[start..start + data.len()].copy_from_slice(data);
    }
}
