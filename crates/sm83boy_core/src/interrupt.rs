use bitflags::bitflags;

bitflags! {
    /// Interrupt request / enable bits as laid out in IF ($FF0F) and IE ($FFFF).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 1 << 0;
        const LCD_STAT = 1 << 1;
        const TIMER = 1 << 2;
        const SERIAL = 1 << 3;
        const JOYPAD = 1 << 4;
    }
}

/// A single maskable interrupt source.
///
/// Declaration order is dispatch priority: VBlank wins over everything,
/// Joypad loses to everything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interrupt {
    VBlank = 0,
    LcdStat = 1,
    Timer = 2,
    Serial = 3,
    Joypad = 4,
}

impl Interrupt {
    pub const ALL: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    #[inline]
    pub fn flag(self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(self.bit())
    }

    /// Fixed handler address: $40, $48, $50, $58 or $60.
    #[inline]
    pub const fn vector(self) -> u16 {
        0x0040 + (self as u16) * 8
    }

    pub fn from_vector(vector: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.vector() == vector)
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Pick the interrupt that would be dispatched out of `pending`.
    pub fn highest_priority(pending: InterruptFlags) -> Option<Self> {
        if pending.is_empty() {
            return None;
        }
        Self::from_index(pending.bits().trailing_zeros() as u8)
    }
}
