/// Mapper family decoded from the cartridge type byte at $0147.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MbcKind {
    RomOnly,
    Mbc1,
}

impl MbcKind {
    /// Decode a cartridge type byte. Types outside the supported set return
    /// `None`.
    pub fn from_cartridge_type(code: u8) -> Option<Self> {
        match code {
            0x00 | 0x08 | 0x09 => Some(MbcKind::RomOnly),
            0x01..=0x03 => Some(MbcKind::Mbc1),
            _ => None,
        }
    }
}

/// External RAM size by the $0149 code. Larger codes are not used by MBC1
/// carts and map to no RAM.
const RAM_SIZES: [usize; 4] = [0, 2048, 8192, 32768];

const TITLE: std::ops::RangeInclusive<usize> = 0x0134..=0x0143;
const CGB_FLAG: usize = 0x0143;
const CARTRIDGE_TYPE: usize = 0x0147;
const ROM_SIZE: usize = 0x0148;
const RAM_SIZE: usize = 0x0149;
const HEADER_CHECKSUM: usize = 0x014D;
const HEADER_END: usize = 0x0150;

/// Fields from the header block at $0134-$014F.
///
/// Images too short to contain a header are treated as if the missing bytes
/// were zero, which yields an untitled ROM-only cartridge with no RAM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartridgeHeader {
    pub title: String,
    pub cgb_flag: u8,
    pub cartridge_type: u8,
    pub mbc: MbcKind,
    /// Declared ROM size in bytes (`32 KiB << code`).
    pub rom_size: usize,
    /// Declared external RAM size in bytes.
    pub ram_size: usize,
    pub header_checksum: u8,
    pub computed_checksum: u8,
}

impl CartridgeHeader {
    pub fn parse(rom: &[u8]) -> Self {
        if rom.len() < HEADER_END {
            log::warn!(
                "ROM image is {} bytes, shorter than the cartridge header; missing bytes read as zero",
                rom.len()
            );
        }
        let byte = |addr: usize| rom.get(addr).copied().unwrap_or(0);

        let title = TITLE
            .map(byte)
            .take_while(|b| b.is_ascii_graphic() || *b == b' ')
            .map(char::from)
            .collect::<String>()
            .trim_end()
            .to_string();

        let cartridge_type = byte(CARTRIDGE_TYPE);
        let mbc = MbcKind::from_cartridge_type(cartridge_type).unwrap_or_else(|| {
            log::warn!(
                "unsupported cartridge type 0x{cartridge_type:02X}, falling back to ROM only"
            );
            MbcKind::RomOnly
        });

        let rom_code = byte(ROM_SIZE);
        let rom_size = if rom_code <= 8 {
            0x8000usize << rom_code
        } else {
            log::warn!("unknown ROM size code 0x{rom_code:02X}, using image length");
            rom.len()
        };

        let ram_code = byte(RAM_SIZE);
        let ram_size = RAM_SIZES.get(ram_code as usize).copied().unwrap_or_else(|| {
            log::warn!("unsupported RAM size code 0x{ram_code:02X}, assuming no RAM");
            0
        });

        let computed_checksum = (0x0134..=0x014C)
            .map(byte)
            .fold(0u8, |x, b| x.wrapping_sub(b).wrapping_sub(1));

        Self {
            title,
            cgb_flag: byte(CGB_FLAG),
            cartridge_type,
            mbc,
            rom_size,
            ram_size,
            header_checksum: byte(HEADER_CHECKSUM),
            computed_checksum,
        }
    }

    /// Whether the byte at $014D matches the checksum of $0134-$014C.
    pub fn header_checksum_valid(&self) -> bool {
        self.header_checksum == self.computed_checksum
    }

    /// CGB flag bit 7: the game knows about CGB features.
    pub fn supports_cgb(&self) -> bool {
        self.cgb_flag & 0x80 != 0
    }
}
