use crate::cpu::CoreMemory;
use crate::error::EmulatorError;
use crate::mapper::{Mapper, CHR_WINDOW, CHR_WINDOW_SIZE};
use crate::rom::Rom;

/* 0x6000-0x7fff is the PRG RAM window; nothing backs it, so it simply
 * stays zero-filled */
const PRG_WINDOWS: [u16; 2] = [0x8000, 0xc000];
const PRG_WINDOW_SIZE: usize = 1 << 14;

/**
 * Mapper 0. Two fixed 16k PRG windows and one 8k CHR window. A board with
 * only 16k of PRG carries a single bank that appears in both windows, which
 * matters because the reset vector at the top of the second window must
 * resolve either way.
 */
pub struct Nrom;

impl Mapper for Nrom {
    fn map(&self, rom: &Rom, memory: &mut CoreMemory) -> Result<usize, EmulatorError> {
        let prg = &rom.prg_data;
        let mirrored = prg.len() == PRG_WINDOW_SIZE;

        let mut src = 0;
        let mut placed = 0;
        for window in PRG_WINDOWS {
            /* the mirror restarts the copy from the start of the bank;
             * otherwise the source offset carries across windows */
            if mirrored {
                src = 0;
            }
            if src >= prg.len() {
                break; /* out of PRG before the windows ran out */
            }
            let take = (prg.len() - src).min(PRG_WINDOW_SIZE);
            memory.load(window, &prg[src..src + take]);
            src += take;
            placed += take;
        }

        let chr_take = rom.chr_data.len().min(CHR_WINDOW_SIZE);
        memory.load(CHR_WINDOW, &rom.chr_data[..chr_take]);

        Ok(placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rom::{HeaderFormat, TvSystem};

    fn rom_with(prg_data: Vec<u8>, chr_data: Vec<u8>) -> Rom {
        Rom {
            prg_data,
            chr_data,
            header_format: HeaderFormat::INes,
            mapper_id: 0,
            prg_ram_size: 1 << 13,
            tv_system: TvSystem::Ntsc,
            vertical_mirroring: false,
            battery: false,
            trainer: false,
            four_screen: false,
            vs_unisystem: false,
            playchoice_10: false,
        }
    }

    #[test]
    fn places_32k_across_both_windows() {
        let prg: Vec<u8> = (0..(2 * PRG_WINDOW_SIZE)).map(|i| (i % 251) as u8).collect();
        let mut memory = CoreMemory::new();
        let placed = Nrom.map(&rom_with(prg.clone(), vec![]), &mut memory).unwrap();

        assert_eq!(placed, 2 * PRG_WINDOW_SIZE);
        for i in 0..PRG_WINDOW_SIZE {
            assert_eq!(memory.read(0x8000 + i as u16), prg[i]);
            assert_eq!(memory.read(0xc000_u16.wrapping_add(i as u16)), prg[PRG_WINDOW_SIZE + i]);
        }
    }

    #[test]
    fn mirrors_a_16k_bank_into_both_windows() {
        let prg: Vec<u8> = (0..PRG_WINDOW_SIZE).map(|i| (i % 239) as u8).collect();
        let mut memory = CoreMemory::new();
        let placed = Nrom.map(&rom_with(prg.clone(), vec![]), &mut memory).unwrap();

        assert_eq!(placed, 2 * PRG_WINDOW_SIZE); // both windows written
        for i in 0..PRG_WINDOW_SIZE {
            assert_eq!(memory.read(0x8000 + i as u16), prg[i]);
            assert_eq!(memory.read(0xc000_u16.wrapping_add(i as u16)), prg[i]);
        }
    }

    #[test]
    fn copies_chr_once_into_the_low_window() {
        let chr: Vec<u8> = (0..CHR_WINDOW_SIZE).map(|i| (i % 97) as u8).collect();
        let mut memory = CoreMemory::new();
        Nrom.map(&rom_with(vec![0x42; PRG_WINDOW_SIZE], chr.clone()), &mut memory)
            .unwrap();

        for i in 0..CHR_WINDOW_SIZE {
            assert_eq!(memory.read(i as u16), chr[i]);
        }
    }

    #[test]
    fn leaves_prg_ram_window_zero_filled() {
        let mut memory = CoreMemory::new();
        Nrom.map(&rom_with(vec![0x42; PRG_WINDOW_SIZE], vec![]), &mut memory)
            .unwrap();

        for addr in 0x6000..0x8000_u16 {
            assert_eq!(memory.read(addr), 0);
        }
    }
}
