//! Cartridge ROM/RAM and the mapper that banks it into the CPU address space.

mod header;
mod mbc1;

#[cfg(test)]
mod tests;

pub use header::{CartridgeHeader, MbcKind};
pub use mbc1::BankingMode;

use mbc1::Mbc1;

const ROM_BANK_SIZE: usize = 0x4000;
const RAM_BANK_SIZE: usize = 0x2000;

/// Bank registers as seen by the CPU, for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BankState {
    /// Bank mapped at $4000-$7FFF.
    pub rom_bank: u16,
    /// Bank mapped at $A000-$BFFF.
    pub ram_bank: u8,
    pub ram_enabled: bool,
    pub mode: BankingMode,
}

enum Mapper {
    /// No MBC: 32 KiB mapped flat, optional RAM that is always enabled.
    RomOnly,
    Mbc1(Mbc1),
}

/// A loaded cartridge image.
///
/// ROM bytes never change after construction; only the mapper registers and
/// external RAM are mutable.
pub struct Cartridge {
    rom: Vec<u8>,
    ram: Vec<u8>,
    header: CartridgeHeader,
    mapper: Mapper,
}

impl Cartridge {
    /// Build a cartridge using the RAM size declared in the header.
    pub fn new(rom: Vec<u8>) -> Self {
        Self::with_ram_size(rom, None)
    }

    /// Build a cartridge, optionally replacing the header-declared RAM size.
    pub fn with_ram_size(rom: Vec<u8>, ram_size_override: Option<usize>) -> Self {
        let header = CartridgeHeader::parse(&rom);
        let ram_size = ram_size_override.unwrap_or(header.ram_size);
        let mapper = match header.mbc {
            MbcKind::RomOnly => Mapper::RomOnly,
            MbcKind::Mbc1 => Mapper::Mbc1(Mbc1::new()),
        };

        log::info!(
            "cartridge '{}': {:?}, ROM {} KiB ({} bytes present), RAM {} bytes",
            header.title,
            header.mbc,
            header.rom_size / 1024,
            rom.len(),
            ram_size,
        );
        if !header.header_checksum_valid() {
            log::warn!(
                "header checksum mismatch: stored 0x{:02X}, computed 0x{:02X}",
                header.header_checksum,
                header.computed_checksum,
            );
        }

        Self {
            rom,
            ram: vec![0xFF; ram_size],
            header,
            mapper,
        }
    }

    pub fn header(&self) -> &CartridgeHeader {
        &self.header
    }

    pub fn mbc_kind(&self) -> MbcKind {
        self.header.mbc
    }

    pub fn rom(&self) -> &[u8] {
        &self.rom
    }

    /// External RAM contents, e.g. for battery saves.
    pub fn ram(&self) -> &[u8] {
        &self.ram
    }

    pub fn ram_mut(&mut self) -> &mut [u8] {
        &mut self.ram
    }

    /// Read from $0000-$7FFF. Offsets past the end of the image read $FF.
    pub fn read_rom(&self, addr: u16) -> u8 {
        let bank = if addr < 0x4000 {
            0
        } else {
            self.rom_bank() as usize
        };
        let index = bank * ROM_BANK_SIZE + (addr as usize & (ROM_BANK_SIZE - 1));
        self.rom.get(index).copied().unwrap_or(0xFF)
    }

    /// Read from $A000-$BFFF. Disabled or missing RAM reads $FF.
    pub fn read_ram(&self, addr: u16) -> u8 {
        match self.ram_index(addr) {
            Some(index) => self.ram[index],
            None => 0xFF,
        }
    }

    /// Write to $A000-$BFFF. Ignored while RAM is disabled.
    pub fn write_ram(&mut self, addr: u16, value: u8) {
        if let Some(index) = self.ram_index(addr) {
            self.ram[index] = value;
        }
    }

    /// Any CPU write into $0000-$7FFF lands here.
    pub fn write_mbc_register(&mut self, addr: u16, value: u8) {
        match &mut self.mapper {
            Mapper::RomOnly => {}
            Mapper::Mbc1(mbc) => mbc.write_register(addr, value),
        }
    }

    /// Restore power-on bank registers. ROM and RAM contents are kept.
    pub fn reset(&mut self) {
        if let Mapper::Mbc1(mbc) = &mut self.mapper {
            *mbc = Mbc1::new();
        }
    }

    pub fn rom_bank(&self) -> u16 {
        match &self.mapper {
            Mapper::RomOnly => 1,
            Mapper::Mbc1(mbc) => mbc.rom_bank(),
        }
    }

    pub fn ram_bank(&self) -> u8 {
        match &self.mapper {
            Mapper::RomOnly => 0,
            Mapper::Mbc1(mbc) => mbc.ram_bank(),
        }
    }

    pub fn ram_enabled(&self) -> bool {
        match &self.mapper {
            Mapper::RomOnly => !self.ram.is_empty(),
            Mapper::Mbc1(mbc) => mbc.ram_enabled(),
        }
    }

    pub fn banking_mode(&self) -> BankingMode {
        match &self.mapper {
            Mapper::RomOnly => BankingMode::Simple,
            Mapper::Mbc1(mbc) => mbc.mode(),
        }
    }

    pub fn bank_state(&self) -> BankState {
        BankState {
            rom_bank: self.rom_bank(),
            ram_bank: self.ram_bank(),
            ram_enabled: self.ram_enabled(),
            mode: self.banking_mode(),
        }
    }

    fn ram_index(&self, addr: u16) -> Option<usize> {
        if !self.ram_enabled() {
            return None;
        }
        let offset = (addr as usize).checked_sub(0xA000)?;
        if offset >= RAM_BANK_SIZE {
            return None;
        }
        let index = self.ram_bank() as usize * RAM_BANK_SIZE + offset;
        (index < self.ram.len()).then_some(index)
    }
}
