/// MBC1 banking mode, selected by writes to $6000-$7FFF.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BankingMode {
    /// Mode 0: the upper register selects the RAM bank.
    #[default]
    Simple,
    /// Mode 1: the upper register extends the ROM bank number and RAM is
    /// pinned to bank 0.
    Advanced,
}

/// MBC1 register state.
///
/// The controller exposes four write-only registers in ROM space:
/// - $0000-$1FFF: RAM enable ($0A in the low nibble enables)
/// - $2000-$3FFF: lower five ROM bank bits (0 is promoted to 1)
/// - $4000-$5FFF: upper two bits
/// - $6000-$7FFF: banking mode
pub(super) struct Mbc1 {
    ram_enabled: bool,
    lower: u8,
    upper: u8,
    mode: BankingMode,
}

impl Mbc1 {
    pub(super) fn new() -> Self {
        Self {
            ram_enabled: false,
            lower: 1,
            upper: 0,
            mode: BankingMode::Simple,
        }
    }

    pub(super) fn write_register(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => {
                self.ram_enabled = value & 0x0F == 0x0A;
            }
            0x2000..=0x3FFF => {
                self.lower = match value & 0x1F {
                    0 => 1,
                    bits => bits,
                };
            }
            0x4000..=0x5FFF => {
                self.upper = value & 0x03;
            }
            0x6000..=0x7FFF => {
                self.mode = if value & 0x01 != 0 {
                    BankingMode::Advanced
                } else {
                    BankingMode::Simple
                };
            }
            _ => return,
        }
        log::debug!(
            "MBC1 write 0x{addr:04X}=0x{value:02X}: rom_bank={} ram_bank={} ram_enabled={} mode={:?}",
            self.rom_bank(),
            self.ram_bank(),
            self.ram_enabled,
            self.mode,
        );
    }

    pub(super) fn rom_bank(&self) -> u16 {
        match self.mode {
            BankingMode::Simple => self.lower as u16,
            BankingMode::Advanced => ((self.upper as u16) << 5) | self.lower as u16,
        }
    }

    pub(super) fn ram_bank(&self) -> u8 {
        match self.mode {
            BankingMode::Simple => self.upper,
            BankingMode::Advanced => 0,
        }
    }

    pub(super) fn ram_enabled(&self) -> bool {
        self.ram_enabled
    }

    pub(super) fn mode(&self) -> BankingMode {
        self.mode
    }
}
