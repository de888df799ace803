//! Operand resolution for each addressing mode.
//!
//! `resolve` is called with `pc` pointing at the first byte after the
//! opcode. It never mutates CPU state; the caller advances the program
//! counter by the returned length once the whole step has succeeded.

use std::fmt;

use super::opcodes::Handler;
use super::{CpuBus, Registers};
use crate::error::BusError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Implied,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
}

impl AddressingMode {
    pub const ALL: [AddressingMode; 8] = [
        AddressingMode::Implied,
        AddressingMode::Immediate,
        AddressingMode::ZeroPage,
        AddressingMode::ZeroPageX,
        AddressingMode::ZeroPageY,
        AddressingMode::Absolute,
        AddressingMode::AbsoluteX,
        AddressingMode::AbsoluteY,
    ];

    /// Operand bytes following the opcode.
    pub fn operand_len(self) -> u16 {
        match self {
            AddressingMode::Implied => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY => 1,
            AddressingMode::Absolute | AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => 2,
        }
    }

    /// True for modes that produce an effective address in memory.
    pub fn is_memory(self) -> bool {
        !matches!(self, AddressingMode::Implied | AddressingMode::Immediate)
    }

    pub fn short_name(self) -> &'static str {
        match self {
            AddressingMode::Implied => "implied",
            AddressingMode::Immediate => "imm",
            AddressingMode::ZeroPage => "zp",
            AddressingMode::ZeroPageX => "zpx",
            AddressingMode::ZeroPageY => "zpy",
            AddressingMode::Absolute => "abs",
            AddressingMode::AbsoluteX => "absx",
            AddressingMode::AbsoluteY => "absy",
        }
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.short_name())
    }
}

/// A handler bound to its operand. The resolver does every bus read the
/// instruction needs, so executing an `Operation` can no longer fail.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    Implied(fn(&mut Registers)),
    Read(fn(&mut Registers, u8), u8),
    Write(fn(&Registers) -> u8, u16),
    Modify(fn(&mut Registers, u8) -> u8, u16, u8),
}

#[derive(Debug, Clone, Copy)]
pub struct Resolved {
    pub operation: Operation,
    pub len: u16,
}

/// Index registers visible to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Index {
    pub x: u8,
    pub y: u8,
}

/// Effective address of the operand. Immediate mode points at the operand
/// byte inside the instruction stream; implied mode has no operand and
/// yields `pc` without touching the bus.
pub fn effective_address(
    bus: &mut dyn CpuBus,
    pc: u16,
    index: Index,
    mode: AddressingMode,
) -> Result<u16, BusError> {
    Ok(match mode {
        AddressingMode::Implied | AddressingMode::Immediate => pc,
        AddressingMode::ZeroPage => bus.read(pc)? as u16,
        // Indexed zero page stays inside page zero
        AddressingMode::ZeroPageX => bus.read(pc)?.wrapping_add(index.x) as u16,
        AddressingMode::ZeroPageY => bus.read(pc)?.wrapping_add(index.y) as u16,
        AddressingMode::Absolute => bus.read_word(pc)?,
        AddressingMode::AbsoluteX => bus.read_word(pc)?.wrapping_add(index.x as u16),
        AddressingMode::AbsoluteY => bus.read_word(pc)?.wrapping_add(index.y as u16),
    })
}

/// Binds `handler` to its operand. Stores get the address only and never
/// read their destination.
pub fn resolve(
    bus: &mut dyn CpuBus,
    pc: u16,
    index: Index,
    mode: AddressingMode,
    handler: Handler,
) -> Result<Resolved, BusError> {
    let operation = match handler {
        Handler::Implied(f) => Operation::Implied(f),
        Handler::Read(f) => {
            let address = effective_address(bus, pc, index, mode)?;
            Operation::Read(f, bus.read(address)?)
        }
        Handler::Write(f) => Operation::Write(f, effective_address(bus, pc, index, mode)?),
        Handler::Modify(f) => {
            let address = effective_address(bus, pc, index, mode)?;
            Operation::Modify(f, address, bus.read(address)?)
        }
    };

    Ok(Resolved {
        operation,
        len: mode.operand_len(),
    })
}
