use crate::interrupt::InterruptFlags;
use crate::machine::cartridge::BankState;

use super::MemoryBus;

/// Side-effect free view of bus state for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusSnapshot {
    pub boot_rom_enabled: bool,
    pub ie: u8,
    pub if_flags: InterruptFlags,
    pub div: u8,
    pub tima: u8,
    pub tma: u8,
    pub tac: u8,
    /// `None` when no cartridge is attached.
    pub banks: Option<BankState>,
}

impl MemoryBus {
    pub fn snapshot(&self) -> BusSnapshot {
        BusSnapshot {
            boot_rom_enabled: self.boot_rom_enabled,
            ie: self.ie,
            if_flags: self.if_reg,
            div: self.timer.div(),
            tima: self.timer.tima(),
            tma: self.timer.tma(),
            tac: self.timer.tac(),
            banks: self.cartridge.as_ref().map(|cart| cart.bank_state()),
        }
    }
}
