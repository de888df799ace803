use serde::{Deserialize, Serialize};

use crate::bus::Bus;
use crate::cpu::{Cpu, StatusFlags};
use crate::error::SnapshotError;
use crate::memory::RAM_SIZE;

/// Register file, program counter and work RAM of one CPU/bus pair.
/// Encoded in memory only; where the bytes go is up to the host.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CpuSnapshot {
    pub cpu_a: u8,
    pub cpu_x: u8,
    pub cpu_y: u8,
    pub cpu_pc: u16,
    pub cpu_status: u8,
    pub cpu_steps: u64,

    pub ram: Vec<u8>,
}

impl CpuSnapshot {
    pub fn capture(cpu: &Cpu, bus: &Bus<'_>) -> Self {
        let regs = cpu.registers();
        CpuSnapshot {
            cpu_a: regs.a,
            cpu_x: regs.x,
            cpu_y: regs.y,
            cpu_pc: cpu.pc(),
            cpu_status: regs.status.bits(),
            cpu_steps: cpu.steps(),
            ram: bus.memory().get_ram().to_vec(),
        }
    }

    /// Writes the snapshot back. The program image attached to the bus is
    /// not part of the snapshot and stays as it is.
    pub fn restore(&self, cpu: &mut Cpu, bus: &mut Bus<'_>) -> Result<(), SnapshotError> {
        let ram: [u8; RAM_SIZE] = self.ram.as_slice().try_into().map_err(|_| {
            SnapshotError::RamSize {
                expected: RAM_SIZE,
                found: self.ram.len(),
            }
        })?;

        let regs = cpu.registers_mut();
        regs.a = self.cpu_a;
        regs.x = self.cpu_x;
        regs.y = self.cpu_y;
        regs.status = StatusFlags::from_bits_truncate(self.cpu_status);
        cpu.set_pc(self.cpu_pc);
        cpu.set_steps(self.cpu_steps);
        bus.memory_mut().set_ram(ram);
        Ok(())
    }

    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn decode(data: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(data)?)
    }
}
