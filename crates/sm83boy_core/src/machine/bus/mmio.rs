//! Address decoding for CPU reads and writes.
//!
//! | range         | target                                   |
//! |---------------|------------------------------------------|
//! | $0000-$7FFF   | cartridge ROM / MBC registers, boot ROM  |
//! | $8000-$9FFF   | video RAM                                |
//! | $A000-$BFFF   | cartridge RAM                            |
//! | $C000-$DFFF   | work RAM                                 |
//! | $E000-$FDFF   | echo of $C000-$DDFF                      |
//! | $FE00-$FE9F   | OAM                                      |
//! | $FEA0-$FEFF   | unusable                                 |
//! | $FF00-$FF7F   | I/O registers                            |
//! | $FF80-$FFFE   | high RAM                                 |
//! | $FFFF         | IE                                       |
mod read;
mod write;

/// Distance between echo RAM and the work RAM it mirrors.
const ECHO_OFFSET: u16 = 0x2000;

/// Whether a register in $FF00-$FF7F exists on DMG. Everything else in that
/// page is open bus.
fn io_register_mapped(addr: u16) -> bool {
    matches!(
        addr,
        0xFF00..=0xFF02
            | 0xFF04..=0xFF07
            | 0xFF0F
            | 0xFF10..=0xFF26
            | 0xFF30..=0xFF3F
            | 0xFF40..=0xFF4B
            | 0xFF50
    )
}
