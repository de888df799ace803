use crate::cpu::CpuBus;
use crate::debug_flags;
use crate::error::BusError;
use crate::memory::Memory;

pub const PRG_START: u16 = 0x8000;

// CPU address map as seen by this core:
// $0000-$07FF  RAM (first 256 bytes are the zero page)
// $0800-$1FFF  three mirrors of RAM
// $2000-$7FFF  I/O registers, expansion ROM, SRAM (not handled here)
// $8000-$FFFF  program image
pub struct Bus<'a> {
    memory: Memory,
    program: Option<&'a [u8]>,
    unsupported_reads: u64,
    last_unsupported: Option<u16>,
}

impl<'a> Bus<'a> {
    pub fn new() -> Self {
        Bus {
            memory: Memory::new(),
            program: None,
            unsupported_reads: 0,
            last_unsupported: None,
        }
    }

    pub fn with_program(program: &'a [u8]) -> Self {
        let mut bus = Self::new();
        bus.load_program(program);
        bus
    }

    /// Attaches the program image mapped at $8000. Replaces any image
    /// loaded earlier; RAM is left untouched.
    pub fn load_program(&mut self, program: &'a [u8]) {
        self.program = Some(program);
    }

    pub fn program_len(&self) -> usize {
        self.program.map_or(0, |p| p.len())
    }

    /// Number of reads that landed in $2000-$7FFF and returned 0.
    pub fn unsupported_reads(&self) -> u64 {
        self.unsupported_reads
    }

    pub fn last_unsupported(&self) -> Option<u16> {
        self.last_unsupported
    }

    pub fn ram(&self) -> &[u8] {
        self.memory.as_slice()
    }

    pub(crate) fn memory(&self) -> &Memory {
        &self.memory
    }

    pub(crate) fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    fn read_prg(&self, addr: u16) -> Result<u8, BusError> {
        let offset = (addr - PRG_START) as usize;
        let program = self.program.unwrap_or(&[]);
        program
            .get(offset)
            .copied()
            .ok_or(BusError::ProgramImageUnderrun {
                address: addr,
                image_len: program.len(),
            })
    }

    fn read_unsupported(&mut self, addr: u16) -> u8 {
        self.unsupported_reads += 1;
        self.last_unsupported = Some(addr);
        if !debug_flags::quiet() {
            if self.unsupported_reads == 1 || debug_flags::unmapped() {
                log::warn!("Read from unsupported address region ${:04X}, returning 0", addr);
            } else {
                log::debug!("Read from unsupported address region ${:04X}", addr);
            }
        }
        0
    }
}

impl Default for Bus<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuBus for Bus<'_> {
    fn read(&mut self, addr: u16) -> Result<u8, BusError> {
        match addr {
            0x0000..=0x1FFF => Ok(self.memory.read(addr)),
            0x2000..=0x7FFF => Ok(self.read_unsupported(addr)),
            PRG_START..=0xFFFF => self.read_prg(addr),
        }
    }

    fn write(&mut self, addr: u16, data: u8) {
        match addr {
            0x0000..=0x1FFF => self.memory.write(addr, data),
            // I/O space belongs to other devices, program memory is ROM
            _ => {}
        }
    }
}
