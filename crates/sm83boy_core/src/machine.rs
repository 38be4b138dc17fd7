//! Everything around the CPU: bus, timer, serial port and cartridge, plus the
//! [`Machine`] facade that wires them to a [`Cpu`](crate::cpu::Cpu).

mod bus;
mod cartridge;
mod serial;
mod system;
mod timer;

pub use bus::{BusSnapshot, MemoryBus};
pub use cartridge::{BankState, BankingMode, Cartridge, CartridgeHeader, MbcKind};
pub use system::Machine;
