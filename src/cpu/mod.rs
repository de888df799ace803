use bitflags::bitflags;

use crate::bus::PRG_START;
use crate::debug_flags;
use crate::error::{BusError, ConfigError, CpuError};

pub mod addressing;
pub mod instructions;
pub mod opcodes;

pub use addressing::{AddressingMode, Index, Operation, Resolved};
pub use opcodes::{Descriptor, Handler, OpcodeTable};


bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StatusFlags: u8 {
        const CARRY = 0b00000001;
        const ZERO = 0b00000010;
        const INTERRUPT_DISABLE = 0b00000100;
        const DECIMAL = 0b00001000; // Ignored by the 2A03
        const BREAK = 0b00010000;
        const OVERFLOW = 0b01000000;
        const NEGATIVE = 0b10000000;
    }
}

/// Registers an instruction handler may touch. The program counter is
/// owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub a: u8, // Accumulator
    pub x: u8, // X register
    pub y: u8, // Y register
    pub status: StatusFlags,
}

impl Default for Registers {
    fn default() -> Self {
        Registers {
            a: 0,
            x: 0,
            y: 0,
            status: StatusFlags::empty(),
        }
    }
}

impl Registers {
    pub fn set_zero_negative(&mut self, value: u8) {
        self.status.set(StatusFlags::ZERO, value == 0);
        self.status.set(StatusFlags::NEGATIVE, value & 0x80 != 0);
    }

    fn index(&self) -> Index {
        Index {
            x: self.x,
            y: self.y,
        }
    }
}

pub struct Cpu {
    regs: Registers,
    pc: u16,
    instructions: OpcodeTable,
    steps: u64,
}

impl Cpu {
    /// CPU with the standard instruction set.
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self::with_table(OpcodeTable::from_descriptors(
            instructions::INSTRUCTIONS,
        )?))
    }

    pub fn with_table(instructions: OpcodeTable) -> Self {
        Cpu {
            regs: Registers::default(),
            // No reset vector lookup, execution starts at the top of PRG.
            pc: PRG_START,
            instructions,
            steps: 0,
        }
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.pc = pc;
    }

    pub fn a(&self) -> u8 {
        self.regs.a
    }

    pub fn x(&self) -> u8 {
        self.regs.x
    }

    pub fn y(&self) -> u8 {
        self.regs.y
    }

    pub fn status(&self) -> StatusFlags {
        self.regs.status
    }

    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    pub fn instructions(&self) -> &OpcodeTable {
        &self.instructions
    }

    /// Instructions executed since construction.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub(crate) fn set_steps(&mut self, steps: u64) {
        self.steps = steps;
    }

    /// Executes exactly one instruction.
    ///
    /// On error nothing is committed: registers, PC and RAM are as they
    /// were before the call.
    pub fn step(&mut self, bus: &mut dyn CpuBus) -> Result<(), CpuError> {
        let result = self.execute_instruction(bus);
        if let Err(err) = &result {
            log::error!("Halting at PC: 0x{:04X}: {}", self.pc, err);
        }
        result
    }

    /// Steps until an error or until `max_steps` instructions have run.
    /// Returns the number of instructions executed.
    pub fn run(&mut self, bus: &mut dyn CpuBus, max_steps: u64) -> Result<u64, CpuError> {
        for executed in 0..max_steps {
            if let Err(err) = self.step(bus) {
                log::debug!("Stopped after {} instructions", executed);
                return Err(err);
            }
        }
        Ok(max_steps)
    }

    fn execute_instruction(&mut self, bus: &mut dyn CpuBus) -> Result<(), CpuError> {
        let opcode_pc = self.pc;
        let opcode = bus.read(opcode_pc)?;
        let descriptor = *self.instructions.find_by_opcode(opcode)?;

        let operand_pc = opcode_pc.wrapping_add(1);
        let resolved = addressing::resolve(
            bus,
            operand_pc,
            self.regs.index(),
            descriptor.mode,
            descriptor.handler,
        )?;

        if debug_flags::cpu_trace() {
            log::trace!(
                "{:04X}  {:02X}  {} {:<7} A:{:02X} X:{:02X} Y:{:02X} P:{:02X}",
                opcode_pc,
                opcode,
                descriptor.mnemonic,
                descriptor.mode,
                self.regs.a,
                self.regs.x,
                self.regs.y,
                self.regs.status.bits()
            );
        }

        match resolved.operation {
            Operation::Implied(f) => f(&mut self.regs),
            Operation::Read(f, value) => f(&mut self.regs, value),
            Operation::Write(f, addr) => bus.write(addr, f(&self.regs)),
            Operation::Modify(f, addr, value) => {
                let result = f(&mut self.regs, value);
                bus.write(addr, result);
            }
        }

        self.pc = operand_pc.wrapping_add(resolved.len);
        self.steps += 1;
        Ok(())
    }
}

pub trait CpuBus {
    /// Fails only for fatal mapping errors; unmapped regions read as a
    /// defined value.
    fn read(&mut self, addr: u16) -> Result<u8, BusError>;
    fn write(&mut self, addr: u16, data: u8);

    /// Little-endian word built from two byte reads. `addr + 1` goes
    /// through the normal address mapping, so the last byte of a mirror
    /// block pairs with the first byte of the next mirror copy.
    fn read_word(&mut self, addr: u16) -> Result<u16, BusError> {
        let low = self.read(addr)? as u16;
        let high = self.read(addr.wrapping_add(1))? as u16;
        Ok((high << 8) | low)
    }
}
