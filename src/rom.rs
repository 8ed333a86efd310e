use crate::error::EmulatorError;

const HEADER_SIZE: usize = 16;
const TRAINER_SIZE: usize = 512;
const PRG_UNIT: usize = 1 << 14; /* header counts PRG in 16k units */
const CHR_UNIT: usize = 1 << 13; /* and CHR in 8k units */
const PRG_RAM_UNIT: usize = 1 << 13;

/* which dialect of the header we're looking at; detection happens once at
 * parse time and is stored so downstream code never re-derives it */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFormat {
    /// NES 2.0, flagged by bits 2-3 of header byte 7 reading binary 10.
    Nes2,
    /// Standard iNES.
    INes,
    /// Archaic iNES: pre-standard dumps, often with garbage in bytes 12-15.
    Archaic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TvSystem {
    Ntsc,
    Pal,
}

pub struct Rom {
    pub prg_data: Vec<u8>,
    pub chr_data: Vec<u8>,
    pub header_format: HeaderFormat,
    pub mapper_id: u8,
    pub prg_ram_size: usize,
    pub tv_system: TvSystem,
    /* flags 6 */
    pub vertical_mirroring: bool,
    pub battery: bool,
    pub trainer: bool,
    pub four_screen: bool,
    /* flags 7 */
    pub vs_unisystem: bool,
    pub playchoice_10: bool,
}

impl Rom {
    /**
     * Parses an iNES image out of a raw byte buffer. Pure: produces a Rom
     * and nothing else. Fails with InvalidRom when the buffer is shorter
     * than the header plus the PRG/CHR lengths the header declares.
     */
    pub fn parse(rom_data: &[u8]) -> Result<Rom, EmulatorError> {
        if rom_data.len() < HEADER_SIZE {
            return Err(EmulatorError::InvalidRom(format!(
                "image is {} bytes; the header alone is {HEADER_SIZE}",
                rom_data.len()
            )));
        }

        if &rom_data[0..4] != b"NES\x1A" {
            return Err(EmulatorError::InvalidRom(format!(
                "bad magic {:?}; expected NES<EOF>",
                &rom_data[0..4]
            )));
        }

        let header_format = Self::classify_header(rom_data[7], rom_data[12]);

        let prg_size = rom_data[4] as usize * PRG_UNIT;
        /* zero here means the cart carries CHR RAM instead of ROM; the
         * graphics side isn't modeled, so the CHR bank is simply empty */
        let chr_size = rom_data[5] as usize * CHR_UNIT;

        let flags6 = rom_data[6];
        let flags7 = rom_data[7];
        let mapper_id = (flags6 >> 4) | (flags7 & 0xf0);
        let trainer = flags6 & 0x04 != 0;

        /* byte 8 is PRG RAM size in 8k units; zero means one 8k bank for
         * compatibility with images that predate the field */
        let prg_ram_size = match rom_data[8] as usize {
            0 => PRG_RAM_UNIT,
            n => n * PRG_RAM_UNIT,
        };

        let tv_system = if rom_data[9] & 0x01 != 0 {
            TvSystem::Pal
        } else {
            TvSystem::Ntsc
        };

        let prg_start = HEADER_SIZE + if trainer { TRAINER_SIZE } else { 0 };
        let chr_start = prg_start + prg_size;
        let total = chr_start + chr_size;

        if rom_data.len() < total {
            return Err(EmulatorError::InvalidRom(format!(
                "header declares {total} bytes but the image holds {}",
                rom_data.len()
            )));
        }

        if trainer {
            /* the 512 trainer bytes sit between header and PRG; we step
             * over them but never map them anywhere */
            log::warn!("trainer present at offset {HEADER_SIZE}; not mapped");
        }

        let rom = Rom {
            prg_data: rom_data[prg_start..chr_start].to_vec(),
            chr_data: rom_data[chr_start..total].to_vec(),
            header_format,
            mapper_id,
            prg_ram_size,
            tv_system,
            vertical_mirroring: flags6 & 0x01 != 0,
            battery: flags6 & 0x02 != 0,
            trainer,
            four_screen: flags6 & 0x08 != 0,
            vs_unisystem: flags7 & 0x01 != 0,
            playchoice_10: flags7 & 0x02 != 0,
        };

        log::info!(
            "header: {:?}, mapper {}, PRG {} bytes, CHR {} bytes, PRG RAM {} bytes, {:?}",
            rom.header_format,
            rom.mapper_id,
            rom.prg_data.len(),
            rom.chr_data.len(),
            rom.prg_ram_size,
            rom.tv_system
        );
        log::info!(
            "flags: mirroring={} battery={} trainer={} four_screen={} vs={} playchoice={}",
            rom.vertical_mirroring,
            rom.battery,
            rom.trainer,
            rom.four_screen,
            rom.vs_unisystem,
            rom.playchoice_10
        );

        Ok(rom)
    }

    /* three-way dialect split off bytes 7 and 12: NES 2.0 announces itself
     * in byte 7 bits 2-3; archaic dumps either claim the reserved value or
     * leave junk in the zero-fill tail */
    fn classify_header(byte7: u8, byte12: u8) -> HeaderFormat {
        match byte7 & 0x0c {
            0x08 => HeaderFormat::Nes2,
            0x04 => HeaderFormat::Archaic,
            _ if byte12 != 0 => HeaderFormat::Archaic,
            _ => HeaderFormat::INes,
        }
    }
}
