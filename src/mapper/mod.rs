mod mapper;
mod mmc5;
mod nrom;

pub use mapper::Mapper;

use crate::error::EmulatorError;
use mmc5::Mmc5;
use nrom::Nrom;

/* CHR tiles land at the bottom of the address space for the (absent)
 * picture unit to find */
pub(crate) const CHR_WINDOW: u16 = 0x0000;
pub(crate) const CHR_WINDOW_SIZE: usize = 1 << 13;

pub fn load_mapper(mapper_num: u8) -> Result<Box<dyn Mapper>, EmulatorError> {
    match mapper_num {
        0 => Ok(Box::new(Nrom)), /* nrom */
        5 => Ok(Box::new(Mmc5)), /* mmc5, PRG mode 0 only */
        id => Err(EmulatorError::UnsupportedMapper(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_load() {
        assert!(load_mapper(0).is_ok());
        assert!(load_mapper(5).is_ok());
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(
            load_mapper(1).err(),
            Some(EmulatorError::UnsupportedMapper(1))
        );
    }
}
