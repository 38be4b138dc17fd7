//! Sharp SM83 CPU, DMG memory bus and MBC1 cartridge emulation.
//!
//! ```no_run
//! use sm83boy_core::Machine;
//!
//! let rom = std::fs::read("cpu_instrs.gb").unwrap();
//! let mut gb = Machine::new(rom);
//! gb.run_cycles(4_194_304).unwrap();
//! println!("{}", String::from_utf8_lossy(gb.serial_output()));
//! ```

pub mod config;
pub mod cpu;
pub mod error;
pub mod interrupt;
pub mod machine;

pub use config::MachineConfig;
pub use cpu::{Bus, Cpu, RunState};
pub use error::{Error, Result};
pub use interrupt::{Interrupt, InterruptFlags};
pub use machine::{BankingMode, BusSnapshot, Cartridge, CartridgeHeader, Machine, MbcKind, MemoryBus};
