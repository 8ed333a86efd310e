use std::error::Error;
use std::fmt;

/* every failure the emulator can produce; initialization errors are fatal,
 * per-tick errors are reported and execution continues (or halts cleanly
 * for EndOfMemory) */
#[derive(Debug, PartialEq, Eq)]
pub enum EmulatorError {
    /// The buffer is too short for the sizes its header declares, or is not
    /// an iNES image at all.
    InvalidRom(String),
    /// Mapper id outside the supported set {0, 5}.
    UnsupportedMapper(u8),
    /// Mapper 5 PRG mode other than 0.
    UnsupportedMapperMode(u8),
    /// The program counter reached 0xFFFF; there is nothing left to fetch.
    EndOfMemory,
}

impl fmt::Display for EmulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmulatorError::InvalidRom(reason) => write!(f, "invalid ROM: {reason}"),
            EmulatorError::UnsupportedMapper(id) => write!(f, "unsupported mapper {id}"),
            EmulatorError::UnsupportedMapperMode(mode) => {
                write!(f, "unsupported mapper 5 PRG mode {mode}")
            }
            EmulatorError::EndOfMemory => write!(f, "program counter reached end of memory"),
        }
    }
}

impl Error for EmulatorError {}
