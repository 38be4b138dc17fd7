//! The DMG memory bus.
//!
//! Owns work RAM, high RAM, the I/O register file, IE/IF, the timer, the
//! serial latch and the cartridge. Video RAM and OAM are plain storage here;
//! their timing belongs to the PPU, which is not part of this crate.

use crate::interrupt::{Interrupt, InterruptFlags};

use super::cartridge::{Cartridge, CartridgeHeader};
use super::serial::Serial;
use super::timer::Timer;

mod init;
mod mmio;
mod snapshot;
mod traits;

pub use snapshot::BusSnapshot;

const VRAM_SIZE: usize = 0x2000;
const WRAM_SIZE: usize = 0x2000;
const OAM_SIZE: usize = 0xA0;
const IO_SIZE: usize = 0x80;
const HRAM_SIZE: usize = 0x7F;

pub struct MemoryBus {
    vram: [u8; VRAM_SIZE],
    wram: [u8; WRAM_SIZE],
    oam: [u8; OAM_SIZE],
    /// Backing store for I/O registers that are kept verbatim (joypad select,
    /// sound, LCD). Registers with behaviour live in their own components.
    io: [u8; IO_SIZE],
    hram: [u8; HRAM_SIZE],
    ie: u8,
    if_reg: InterruptFlags,
    timer: Timer,
    serial: Serial,
    cartridge: Option<Cartridge>,
    boot_rom: Option<Vec<u8>>,
    boot_rom_enabled: bool,
}

impl Default for MemoryBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus {
    /// A bus in the DMG post-boot state, with no cartridge attached.
    pub fn new() -> Self {
        let mut bus = Self::power_on(None);
        bus.set_post_boot_state();
        bus
    }

    /// A bus at power-on with `boot_rom` mapped over $0000 until the program
    /// writes to $FF50.
    pub fn with_boot_rom(boot_rom: Vec<u8>) -> Self {
        Self::power_on(Some(boot_rom))
    }

    fn power_on(boot_rom: Option<Vec<u8>>) -> Self {
        Self {
            vram: [0; VRAM_SIZE],
            wram: [0; WRAM_SIZE],
            oam: [0; OAM_SIZE],
            io: [0; IO_SIZE],
            hram: [0; HRAM_SIZE],
            ie: 0,
            if_reg: InterruptFlags::empty(),
            timer: Timer::new(),
            serial: Serial::default(),
            cartridge: None,
            boot_rom_enabled: boot_rom.is_some(),
            boot_rom,
        }
    }

    /// Attach `cartridge`, replacing any previous one.
    pub fn load_cartridge(&mut self, cartridge: Cartridge) {
        if self.cartridge.is_some() {
            log::debug!("replacing attached cartridge");
        }
        self.cartridge = Some(cartridge);
    }

    pub fn cartridge(&self) -> Option<&Cartridge> {
        self.cartridge.as_ref()
    }

    pub fn cartridge_mut(&mut self) -> Option<&mut Cartridge> {
        self.cartridge.as_mut()
    }

    pub fn header(&self) -> Option<&CartridgeHeader> {
        self.cartridge.as_ref().map(Cartridge::header)
    }

    pub fn boot_rom_enabled(&self) -> bool {
        self.boot_rom_enabled
    }

    /// OR `interrupt` into IF.
    pub fn request_interrupt(&mut self, interrupt: Interrupt) {
        self.if_reg.insert(interrupt.flag());
    }

    pub fn interrupt_flags(&self) -> InterruptFlags {
        self.if_reg
    }

    pub fn interrupt_enable(&self) -> u8 {
        self.ie
    }

    /// Bytes the guest has sent over the serial port so far.
    pub fn serial_output(&self) -> &[u8] {
        self.serial.output()
    }

    pub fn take_serial_output(&mut self) -> Vec<u8> {
        self.serial.take_output()
    }

    /// Clear RAM and I/O back to power-on values and re-arm the boot ROM
    /// overlay if one is installed. The cartridge stays attached; its bank
    /// registers are reset.
    pub fn reset(&mut self) {
        self.vram.fill(0);
        self.wram.fill(0);
        self.oam.fill(0);
        self.io.fill(0);
        self.hram.fill(0);
        self.ie = 0;
        self.if_reg = InterruptFlags::empty();
        self.timer = Timer::new();
        self.serial.reset();
        self.boot_rom_enabled = self.boot_rom.is_some();
        if let Some(cart) = self.cartridge.as_mut() {
            cart.reset();
        }
    }

    /// Advance the timer by `cycles` T-cycles.
    pub(crate) fn advance(&mut self, cycles: u32) {
        for _ in 0..cycles / 4 {
            self.timer.tick_mcycle(&mut self.if_reg);
        }
    }

    /// Cartridge space with nothing attached is a host wiring bug, not guest
    /// behaviour.
    fn cart(&self) -> &Cartridge {
        match self.cartridge.as_ref() {
            Some(cart) => cart,
            None => panic!("cartridge address space accessed with no cartridge attached"),
        }
    }

    fn cart_mut(&mut self) -> &mut Cartridge {
        match self.cartridge.as_mut() {
            Some(cart) => cart,
            None => panic!("cartridge address space accessed with no cartridge attached"),
        }
    }
}
