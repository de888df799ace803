//! Opcode table: maps an opcode byte to its instruction descriptor.

use std::fmt;

use super::addressing::AddressingMode;
use super::Registers;
use crate::error::{ConfigError, CpuError};

/// Semantic operation of an instruction. Handlers only see registers; the
/// engine performs the bus access the handler kind asks for.
#[derive(Debug, Clone, Copy)]
pub enum Handler {
    /// No operand.
    Implied(fn(&mut Registers)),
    /// Consumes the operand value.
    Read(fn(&mut Registers, u8)),
    /// Produces the byte stored at the effective address.
    Write(fn(&Registers) -> u8),
    /// Reads the effective address and writes back the returned byte.
    Modify(fn(&mut Registers, u8) -> u8),
}

impl Handler {
    fn accepts(&self, mode: AddressingMode) -> bool {
        match self {
            Handler::Implied(_) => mode == AddressingMode::Implied,
            Handler::Read(_) => mode != AddressingMode::Implied,
            Handler::Write(_) | Handler::Modify(_) => mode.is_memory(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    pub handler: Handler,
    pub description: &'static str,
}

impl Descriptor {
    pub const fn new(
        opcode: u8,
        mnemonic: &'static str,
        mode: AddressingMode,
        handler: Handler,
        description: &'static str,
    ) -> Self {
        Descriptor {
            opcode,
            mnemonic,
            mode,
            handler,
            description,
        }
    }

    /// Opcode plus operand bytes.
    pub fn size_bytes(&self) -> u16 {
        1 + self.mode.operand_len()
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:02x} {} {:<7} {}",
            self.opcode, self.mnemonic, self.mode, self.description
        )
    }
}

pub struct OpcodeTable {
    by_opcode: [Option<Descriptor>; 256],
    count: usize,
}

impl OpcodeTable {
    pub fn new() -> Self {
        OpcodeTable {
            by_opcode: [None; 256],
            count: 0,
        }
    }

    pub fn from_descriptors(descriptors: &[Descriptor]) -> Result<Self, ConfigError> {
        let mut table = Self::new();
        for descriptor in descriptors {
            table.register(*descriptor)?;
        }
        Ok(table)
    }

    pub fn register(&mut self, descriptor: Descriptor) -> Result<(), ConfigError> {
        let slot = descriptor.opcode as usize;
        if self.by_opcode[slot].is_some() {
            return Err(ConfigError::DuplicateOpcode(descriptor.opcode));
        }
        if self
            .find_by_mnemonic_and_mode(descriptor.mnemonic, descriptor.mode)
            .is_some()
        {
            return Err(ConfigError::DuplicateMnemonicMode {
                mnemonic: descriptor.mnemonic,
                mode: descriptor.mode,
            });
        }
        if !descriptor.handler.accepts(descriptor.mode) {
            return Err(ConfigError::ModeMismatch {
                opcode: descriptor.opcode,
                mnemonic: descriptor.mnemonic,
                mode: descriptor.mode,
            });
        }
        self.by_opcode[slot] = Some(descriptor);
        self.count += 1;
        Ok(())
    }

    #[inline]
    pub fn find_by_opcode(&self, opcode: u8) -> Result<&Descriptor, CpuError> {
        self.by_opcode[opcode as usize]
            .as_ref()
            .ok_or(CpuError::UnknownOpcode(opcode))
    }

    // Linear scan, only used by tooling and tests
    pub fn find_by_mnemonic_and_mode(
        &self,
        mnemonic: &str,
        mode: AddressingMode,
    ) -> Option<&Descriptor> {
        self.iter()
            .find(|d| d.mode == mode && d.mnemonic.eq_ignore_ascii_case(mnemonic))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.by_opcode.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for OpcodeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OpcodeTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, descriptor) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", descriptor)?;
        }
        Ok(())
    }
}
