//! Divider and programmable timer (DIV, TIMA, TMA, TAC).
//!
//! A 16-bit system counter advances once per M-cycle and DIV exposes bits
//! 13..6 of it. TIMA counts falling edges of `enabled && counter[bit]`, with
//! the bit chosen by TAC. An overflow leaves TIMA at $00 for one M-cycle;
//! the reload from TMA and the interrupt request happen on the next tick.
mod io;

use crate::interrupt::InterruptFlags;

#[derive(Clone, Debug, Default)]
pub(crate) struct Timer {
    counter: u16,
    tima: u8,
    tma: u8,
    /// Low three bits of TAC.
    tac: u8,
    /// TIMA overflowed on the previous tick; reload and IRQ are due.
    overflow: bool,
}

impl Timer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register state the DMG boot ROM leaves behind: DIV reads $AB at $0100.
    pub(crate) fn init_dmg(&mut self) {
        *self = Self {
            counter: 0xAB << 6,
            ..Self::default()
        };
    }

    #[inline]
    fn enabled(&self) -> bool {
        self.tac & 0x04 != 0
    }

    /// Counter bit selected by TAC[1:0]: 00 -> 7 (4096 Hz), 01 -> 1
    /// (262144 Hz), 10 -> 3 (65536 Hz), 11 -> 5 (16384 Hz).
    #[inline]
    fn counter_bit(&self) -> bool {
        let bit = match self.tac & 0x03 {
            0x00 => 7,
            0x01 => 1,
            0x02 => 3,
            _ => 5,
        };
        self.counter & (1 << bit) != 0
    }

    /// Input to the TIMA edge detector.
    #[inline]
    fn timer_input(&self) -> bool {
        self.enabled() && self.counter_bit()
    }

    fn increment_tima(&mut self) {
        let (next, overflow) = self.tima.overflowing_add(1);
        self.tima = next;
        if overflow {
            self.overflow = true;
        }
    }

    /// Advance by one M-cycle (4 T-cycles).
    pub(crate) fn tick_mcycle(&mut self, if_reg: &mut InterruptFlags) {
        if self.overflow {
            self.overflow = false;
            self.tima = self.tma;
            if_reg.insert(InterruptFlags::TIMER);
        }

        let before = self.timer_input();
        self.counter = self.counter.wrapping_add(1);
        if before && !self.timer_input() {
            self.increment_tima();
        }
    }
}
