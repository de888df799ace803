//! Instruction core of the NES CPU (a 6502 without decimal mode).
//!
//! A [`Cpu`] executes one instruction per [`Cpu::step`] against anything
//! implementing [`CpuBus`]. [`Bus`] is the standard address map: 2 KiB of
//! mirrored RAM at $0000-$1FFF and a borrowed program image at $8000.
//!
//! ```
//! use nes_cpu_core::{Bus, Cpu};
//!
//! let program = [0xA9, 0x34, 0x29, 0x38]; // LDA #$34; AND #$38
//! let mut bus = Bus::with_program(&program);
//! let mut cpu = Cpu::new()?;
//! cpu.run(&mut bus, 2)?;
//! assert_eq!(cpu.a(), 0x34 & 0x38);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bus;
pub mod cpu;
mod debug_flags;
pub mod error;
pub mod memory;
pub mod save_state;

pub use bus::Bus;
pub use cpu::{AddressingMode, Cpu, CpuBus, Descriptor, Handler, OpcodeTable, Registers, StatusFlags};
pub use error::{BusError, ConfigError, CpuError, SnapshotError};
pub use save_state::CpuSnapshot;
