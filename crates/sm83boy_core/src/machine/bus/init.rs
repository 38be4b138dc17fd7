use crate::interrupt::InterruptFlags;

use super::MemoryBus;

/// I/O register values at PC=$0100 on DMG, per Pan Docs "Power Up Sequence".
/// Registers with their own component (serial, timer, IF) are set separately.
const DMG_POST_BOOT_IO: [(u16, u8); 30] = [
    // Joypad: nothing selected.
    (0xFF00, 0x30),
    // Sound.
    (0xFF10, 0x80),
    (0xFF11, 0xBF),
    (0xFF12, 0xF3),
    (0xFF13, 0xFF),
    (0xFF14, 0xBF),
    (0xFF16, 0x3F),
    (0xFF17, 0x00),
    (0xFF18, 0xFF),
    (0xFF19, 0xBF),
    (0xFF1A, 0x7F),
    (0xFF1B, 0xFF),
    (0xFF1C, 0x9F),
    (0xFF1D, 0xFF),
    (0xFF1E, 0xBF),
    (0xFF20, 0xFF),
    (0xFF21, 0x00),
    (0xFF22, 0x00),
    (0xFF23, 0xBF),
    (0xFF24, 0x77),
    (0xFF25, 0xF3),
    (0xFF26, 0xF1),
    // LCD.
    (0xFF40, 0x91),
    (0xFF41, 0x85),
    (0xFF42, 0x00),
    (0xFF43, 0x00),
    (0xFF44, 0x00),
    (0xFF45, 0x00),
    (0xFF46, 0xFF),
    (0xFF47, 0xFC),
];

impl MemoryBus {
    /// Put I/O registers where the DMG boot ROM leaves them and unmap the
    /// boot ROM overlay.
    ///
    /// OBP0/OBP1/WY/WX are uninitialised on hardware and left at 0. Work RAM
    /// and high RAM are untouched, so the result is deterministic.
    pub fn set_post_boot_state(&mut self) {
        for (addr, value) in DMG_POST_BOOT_IO {
            self.io[(addr - 0xFF00) as usize] = value;
        }
        self.serial.init_dmg();
        self.timer.init_dmg();

        // VBlank is already requested when the boot ROM hands over.
        self.if_reg = InterruptFlags::VBLANK;
        self.ie = 0x00;

        if self.boot_rom_enabled {
            log::debug!("boot ROM overlay disabled by post-boot init");
        }
        self.boot_rom_enabled = false;
    }
}
