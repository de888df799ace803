use std::fmt;

use crate::cpu::AddressingMode;

/// Fatal failures raised by the bus while servicing a CPU access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// An address in $8000-$FFFF points past the end of the program image.
    /// `image_len` is 0 when no image has been loaded.
    ProgramImageUnderrun { address: u16, image_len: usize },
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BusError::ProgramImageUnderrun { address, image_len } => write!(
                f,
                "address ${:04X} maps past the end of the program image ({} bytes)",
                address, image_len
            ),
        }
    }
}

impl std::error::Error for BusError {}

/// Errors that abort a single `Cpu::step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// No descriptor is registered for the fetched byte.
    UnknownOpcode(u8),
    Bus(BusError),
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CpuError::UnknownOpcode(opcode) => write!(f, "unknown opcode 0x{:02X}", opcode),
            CpuError::Bus(err) => write!(f, "bus error: {}", err),
        }
    }
}

impl std::error::Error for CpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CpuError::Bus(err) => Some(err),
            CpuError::UnknownOpcode(_) => None,
        }
    }
}

impl From<BusError> for CpuError {
    fn from(err: BusError) -> Self {
        CpuError::Bus(err)
    }
}

/// Opcode table integrity failures. Only raised while building a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    DuplicateOpcode(u8),
    DuplicateMnemonicMode {
        mnemonic: &'static str,
        mode: AddressingMode,
    },
    /// The handler kind cannot be driven by the addressing mode, e.g. a
    /// store handler registered with immediate addressing.
    ModeMismatch {
        opcode: u8,
        mnemonic: &'static str,
        mode: AddressingMode,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::DuplicateOpcode(opcode) => {
                write!(f, "opcode 0x{:02X} is registered twice", opcode)
            }
            ConfigError::DuplicateMnemonicMode { mnemonic, mode } => {
                write!(f, "{} {} is registered twice", mnemonic, mode)
            }
            ConfigError::ModeMismatch {
                opcode,
                mnemonic,
                mode,
            } => write!(
                f,
                "opcode 0x{:02X} ({}) cannot use {} addressing with its handler",
                opcode, mnemonic, mode
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug)]
pub enum SnapshotError {
    Encoding(bincode::Error),
    RamSize { expected: usize, found: usize },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SnapshotError::Encoding(err) => write!(f, "snapshot encoding failed: {}", err),
            SnapshotError::RamSize { expected, found } => write!(
                f,
                "snapshot RAM is {} bytes, expected {}",
                found, expected
            ),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Encoding(err) => Some(err.as_ref()),
            SnapshotError::RamSize { .. } => None,
        }
    }
}

impl From<bincode::Error> for SnapshotError {
    fn from(err: bincode::Error) -> Self {
        SnapshotError::Encoding(err)
    }
}
