use crate::interrupt::InterruptFlags;

use super::super::MemoryBus;
use super::{io_register_mapped, ECHO_OFFSET};

impl MemoryBus {
    /// Write a byte as the CPU would. Writes to read-only or unmapped
    /// regions are dropped.
    ///
    /// # Panics
    ///
    /// Panics on a cartridge address while no cartridge is attached.
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        match addr {
            // ROM is never written; the MBC decodes these as register writes.
            0x0000..=0x7FFF => self.cart_mut().write_mbc_register(addr, value),
            0x8000..=0x9FFF => self.vram[(addr - 0x8000) as usize] = value,
            0xA000..=0xBFFF => self.cart_mut().write_ram(addr, value),
            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize] = value,
            0xE000..=0xFDFF => self.wram[(addr - ECHO_OFFSET - 0xC000) as usize] = value,
            0xFE00..=0xFE9F => self.oam[(addr - 0xFE00) as usize] = value,
            0xFEA0..=0xFEFF => {}
            0xFF00..=0xFF7F => self.write_io(addr, value),
            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize] = value,
            0xFFFF => self.ie = value,
        }
    }

    fn write_io(&mut self, addr: u16, value: u8) {
        if !io_register_mapped(addr) {
            return;
        }
        match addr {
            // Only the group select bits are writable.
            0xFF00 => self.io[0x00] = value & 0x30,
            0xFF01 => self.serial.write_sb(value),
            0xFF02 => self.serial.write_sc(value, &mut self.if_reg),
            0xFF04 => self.timer.write_div(),
            0xFF05 => self.timer.write_tima(value),
            0xFF06 => self.timer.write_tma(value),
            0xFF07 => self.timer.write_tac(value),
            0xFF0F => self.if_reg = InterruptFlags::from_bits_truncate(value),
            0xFF50 => {
                if value != 0 && self.boot_rom_enabled {
                    log::debug!("boot ROM overlay disabled by write 0x{value:02X} to $FF50");
                    self.boot_rom_enabled = false;
                }
            }
            _ => self.io[(addr - 0xFF00) as usize] = value,
        }
    }
}
