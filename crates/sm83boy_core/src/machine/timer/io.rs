use super::Timer;

impl Timer {
    pub(crate) fn div(&self) -> u8 {
        (self.counter >> 6) as u8
    }

    pub(crate) fn tima(&self) -> u8 {
        self.tima
    }

    pub(crate) fn tma(&self) -> u8 {
        self.tma
    }

    /// TAC as read by the CPU; bits 7..3 are unused and read back as 1.
    pub(crate) fn tac(&self) -> u8 {
        self.tac | 0b1111_1000
    }

    /// Any write to DIV clears the whole system counter. If the selected
    /// bit was high this is a falling edge and TIMA ticks once.
    pub(crate) fn write_div(&mut self) {
        if self.timer_input() {
            self.increment_tima();
        }
        self.counter = 0;
    }

    /// Writing TIMA in the M-cycle after an overflow cancels the pending
    /// reload and interrupt.
    pub(crate) fn write_tima(&mut self, value: u8) {
        self.overflow = false;
        self.tima = value;
    }

    /// TMA is read at reload time, so a write in the overflow window also
    /// sets the value TIMA is about to be loaded with.
    pub(crate) fn write_tma(&mut self, value: u8) {
        self.tma = value;
    }

    /// Disabling the timer or switching input bit while the old input was
    /// high produces a falling edge, and TIMA ticks once.
    pub(crate) fn write_tac(&mut self, value: u8) {
        let before = self.timer_input();
        self.tac = value & 0x07;
        if before && !self.timer_input() {
            self.increment_tima();
        }
    }
}
