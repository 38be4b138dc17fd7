use super::*;

const BANKS: usize = 32;

/// 512 KiB MBC1 image with every byte of bank `n` set to `n`.
fn mbc1_rom(ram_code: u8) -> Vec<u8> {
    let mut rom = vec![0u8; BANKS * ROM_BANK_SIZE];
    for (bank, chunk) in rom.chunks_mut(ROM_BANK_SIZE).enumerate() {
        chunk.fill(bank as u8);
    }
    write_header(&mut rom, b"BANKTEST", 0x01, 0x04, ram_code);
    rom
}

fn write_header(rom: &mut [u8], title: &[u8], cart_type: u8, rom_code: u8, ram_code: u8) {
    rom[0x0134..0x0144].fill(0);
    rom[0x0134..0x0134 + title.len()].copy_from_slice(title);
    rom[0x0147] = cart_type;
    rom[0x0148] = rom_code;
    rom[0x0149] = ram_code;
    let checksum = rom[0x0134..=0x014C]
        .iter()
        .fold(0u8, |x, &b| x.wrapping_sub(b).wrapping_sub(1));
    rom[0x014D] = checksum;
}

#[test]
fn header_fields_are_decoded() {
    let cart = Cartridge::new(mbc1_rom(0x03));
    let header = cart.header();
    assert_eq!(header.title, "BANKTEST");
    assert_eq!(header.mbc, MbcKind::Mbc1);
    assert_eq!(header.cartridge_type, 0x01);
    assert_eq!(header.rom_size, 512 * 1024);
    assert_eq!(header.ram_size, 32 * 1024);
    assert!(header.header_checksum_valid());
    assert!(!header.supports_cgb());
    assert_eq!(cart.ram().len(), 32 * 1024);
}

#[test]
fn corrupted_header_checksum_is_reported() {
    let mut rom = mbc1_rom(0x00);
    rom[0x014D] = rom[0x014D].wrapping_add(1);
    let cart = Cartridge::new(rom);
    assert!(!cart.header().header_checksum_valid());
}

#[test]
fn ram_size_codes_follow_the_fixed_table() {
    for (code, size) in [(0x00, 0), (0x01, 2048), (0x02, 8192), (0x03, 32768), (0x04, 0)] {
        let cart = Cartridge::new(mbc1_rom(code));
        assert_eq!(cart.header().ram_size, size, "code {code:#04x}");
    }
}

#[test]
fn ram_size_override_replaces_header_value() {
    let cart = Cartridge::with_ram_size(mbc1_rom(0x00), Some(0x2000));
    assert_eq!(cart.header().ram_size, 0);
    assert_eq!(cart.ram().len(), 0x2000);
}

#[test]
fn switchable_bank_follows_lower_register() {
    let mut cart = Cartridge::new(mbc1_rom(0x00));
    assert_eq!(cart.read_rom(0x4000), 1, "power-on bank is 1");
    for bank in 1..=31u8 {
        cart.write_mbc_register(0x2000, bank);
        assert_eq!(cart.read_rom(0x4000), bank);
        assert_eq!(cart.read_rom(0x7FFF), bank);
        assert_eq!(cart.rom_bank(), bank as u16);
    }
}

#[test]
fn bank_zero_aliases_to_bank_one() {
    let mut cart = Cartridge::new(mbc1_rom(0x00));
    cart.write_mbc_register(0x2000, 5);
    cart.write_mbc_register(0x3FFF, 0x00);
    assert_eq!(cart.rom_bank(), 1);
    assert_eq!(cart.read_rom(0x4000), 1);

    // Only the low five bits are latched, so $20 is also bank 0.
    cart.write_mbc_register(0x2000, 0x20);
    assert_eq!(cart.read_rom(0x4000), 1);
}

#[test]
fn fixed_window_always_reads_bank_zero() {
    let mut cart = Cartridge::new(mbc1_rom(0x00));
    cart.write_mbc_register(0x2000, 7);
    cart.write_mbc_register(0x6000, 1);
    cart.write_mbc_register(0x4000, 1);
    assert_eq!(cart.read_rom(0x0000), 0);
    assert_eq!(cart.read_rom(0x3FFF), 0);
}

#[test]
fn advanced_mode_composes_upper_bits_into_rom_bank() {
    let mut cart = Cartridge::new(mbc1_rom(0x03));
    cart.write_mbc_register(0x2000, 0x02);
    cart.write_mbc_register(0x4000, 0x01);
    assert_eq!(cart.rom_bank(), 2, "simple mode ignores the upper bits for ROM");
    assert_eq!(cart.ram_bank(), 1);

    cart.write_mbc_register(0x6000, 0x01);
    assert_eq!(cart.banking_mode(), BankingMode::Advanced);
    assert_eq!(cart.rom_bank(), 0x22);
    assert_eq!(cart.ram_bank(), 0);
    // Bank $22 is past the end of a 32-bank image.
    assert_eq!(cart.read_rom(0x4000), 0xFF);
}

#[test]
fn ram_is_banked_by_upper_register_in_simple_mode() {
    let mut cart = Cartridge::new(mbc1_rom(0x03));
    cart.write_mbc_register(0x0000, 0x0A);
    for bank in 0..4u8 {
        cart.write_mbc_register(0x4000, bank);
        cart.write_ram(0xA000, 0x10 + bank);
    }
    for bank in 0..4u8 {
        cart.write_mbc_register(0x4000, bank);
        assert_eq!(cart.read_ram(0xA000), 0x10 + bank);
    }
    assert_eq!(cart.ram()[3 * RAM_BANK_SIZE], 0x13);
}

#[test]
fn disabled_ram_reads_open_bus_and_ignores_writes() {
    let mut cart = Cartridge::new(mbc1_rom(0x02));
    cart.write_mbc_register(0x0000, 0x0A);
    cart.write_ram(0xA000, 0x42);
    cart.write_ram(0xBFFF, 0x24);

    cart.write_mbc_register(0x0000, 0x00);
    assert!(!cart.ram_enabled());
    for addr in [0xA000u16, 0xA123, 0xBFFF] {
        assert_eq!(cart.read_ram(addr), 0xFF);
    }
    cart.write_ram(0xA000, 0x99);
    cart.write_ram(0xBFFF, 0x99);

    // Any low nibble other than $A disables, whatever the high nibble.
    cart.write_mbc_register(0x1FFF, 0xFA);
    assert!(cart.ram_enabled());
    assert_eq!(cart.read_ram(0xA000), 0x42);
    assert_eq!(cart.read_ram(0xBFFF), 0x24);
}

#[test]
fn small_ram_reads_open_bus_past_its_end() {
    let mut cart = Cartridge::new(mbc1_rom(0x01));
    cart.write_mbc_register(0x0000, 0x0A);
    cart.write_ram(0xA7FF, 0x55);
    cart.write_ram(0xA800, 0x66);
    assert_eq!(cart.read_ram(0xA7FF), 0x55);
    assert_eq!(cart.read_ram(0xA800), 0xFF);
}

#[test]
fn register_writes_never_touch_rom_contents() {
    let mut cart = Cartridge::new(mbc1_rom(0x00));
    let before = cart.rom().to_vec();
    for addr in (0x0000..0x8000u16).step_by(0x0800) {
        cart.write_mbc_register(addr, 0x5A);
    }
    assert_eq!(cart.rom(), &before[..]);
}

#[test]
fn reset_restores_power_on_banking() {
    let mut cart = Cartridge::new(mbc1_rom(0x03));
    cart.write_mbc_register(0x0000, 0x0A);
    cart.write_mbc_register(0x2000, 0x09);
    cart.write_mbc_register(0x4000, 0x02);
    cart.write_mbc_register(0x6000, 0x01);
    cart.write_ram(0xA000, 0x77);

    cart.reset();
    assert_eq!(
        cart.bank_state(),
        BankState {
            rom_bank: 1,
            ram_bank: 0,
            ram_enabled: false,
            mode: BankingMode::Simple,
        }
    );
    assert_eq!(cart.read_rom(0x4000), 1);
    assert_eq!(cart.ram()[0], 0x77, "RAM contents survive reset");
}

#[test]
fn rom_only_maps_32k_flat_and_ignores_register_writes() {
    let mut rom: Vec<u8> = (0..0x8000u32).map(|i| (i >> 8) as u8).collect();
    write_header(&mut rom, b"FLAT", 0x00, 0x00, 0x00);
    let mut cart = Cartridge::new(rom.clone());
    assert_eq!(cart.mbc_kind(), MbcKind::RomOnly);

    cart.write_mbc_register(0x2000, 0x03);
    assert_eq!(cart.read_rom(0x4000), rom[0x4000]);
    assert_eq!(cart.read_rom(0x7FFF), rom[0x7FFF]);
    assert_eq!(cart.read_ram(0xA000), 0xFF, "no RAM declared");
}

#[test]
fn rom_only_with_ram_is_always_enabled() {
    let mut rom = vec![0u8; 0x8000];
    write_header(&mut rom, b"RAMCART", 0x08, 0x00, 0x02);
    let mut cart = Cartridge::new(rom);
    assert!(cart.ram_enabled());
    cart.write_mbc_register(0x0000, 0x00);
    cart.write_ram(0xB000, 0xAB);
    assert_eq!(cart.read_ram(0xB000), 0xAB);
}

#[test]
fn unsupported_mapper_falls_back_to_rom_only() {
    let mut rom = vec![0u8; 0x8000];
    write_header(&mut rom, b"MBC3", 0x13, 0x00, 0x00);
    let cart = Cartridge::new(rom);
    assert_eq!(cart.mbc_kind(), MbcKind::RomOnly);
    assert_eq!(cart.header().cartridge_type, 0x13);
}

#[test]
fn short_image_yields_minimal_header() {
    let cart = Cartridge::new(vec![0x3C; 0x20]);
    let header = cart.header();
    assert_eq!(header.title, "");
    assert_eq!(header.mbc, MbcKind::RomOnly);
    assert_eq!(header.ram_size, 0);
    assert_eq!(cart.read_rom(0x0010), 0x3C);
    assert_eq!(cart.read_rom(0x0100), 0xFF);
    assert_eq!(cart.read_rom(0x4000), 0xFF);
}

#[test]
fn title_stops_at_first_unprintable_byte() {
    let mut rom = vec![0u8; 0x8000];
    write_header(&mut rom, b"ZELDA", 0x00, 0x00, 0x00);
    rom[0x0143] = 0x80;
    rom[0x013A] = 0x01;
    let header = CartridgeHeader::parse(&rom);
    assert_eq!(header.title, "ZELDA");
    assert!(header.supports_cgb());
}
