use super::super::MemoryBus;
use super::{io_register_mapped, ECHO_OFFSET};

impl MemoryBus {
    /// Read a byte as the CPU would see it. Unmapped and disabled regions
    /// read $FF.
    ///
    /// # Panics
    ///
    /// Panics on a cartridge address while no cartridge is attached.
    pub fn read_byte(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x7FFF => {
                if let Some(byte) = self.boot_rom_byte(addr) {
                    return byte;
                }
                self.cart().read_rom(addr)
            }
            0x8000..=0x9FFF => self.vram[(addr - 0x8000) as usize],
            0xA000..=0xBFFF => self.cart().read_ram(addr),
            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize],
            0xE000..=0xFDFF => self.wram[(addr - ECHO_OFFSET - 0xC000) as usize],
            0xFE00..=0xFE9F => self.oam[(addr - 0xFE00) as usize],
            0xFEA0..=0xFEFF => 0xFF,
            0xFF00..=0xFF7F => self.read_io(addr),
            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize],
            0xFFFF => self.ie,
        }
    }

    fn boot_rom_byte(&self, addr: u16) -> Option<u8> {
        if !self.boot_rom_enabled {
            return None;
        }
        self.boot_rom.as_ref()?.get(addr as usize).copied()
    }

    fn read_io(&self, addr: u16) -> u8 {
        if !io_register_mapped(addr) {
            return 0xFF;
        }
        match addr {
            // No buttons are wired up, so both input groups read released.
            0xFF00 => 0xC0 | (self.io[0x00] & 0x30) | 0x0F,
            0xFF01 => self.serial.sb(),
            0xFF02 => self.serial.sc(),
            0xFF04 => self.timer.div(),
            0xFF05 => self.timer.tima(),
            0xFF06 => self.timer.tma(),
            0xFF07 => self.timer.tac(),
            0xFF0F => self.if_reg.bits() | 0xE0,
            // The boot ROM latch is write-only.
            0xFF50 => 0xFF,
            _ => self.io[(addr - 0xFF00) as usize],
        }
    }
}
