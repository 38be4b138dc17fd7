use crate::interrupt::InterruptFlags;

/// Serial port registers SB ($FF01) and SC ($FF02).
///
/// No link partner is modelled. A transfer started with the internal clock
/// (SC bits 7 and 0 set) completes immediately: the outgoing byte is captured
/// in `output`, SB shifts in $FF from the idle line, and the Serial interrupt
/// is requested.
#[derive(Clone, Debug, Default)]
pub(crate) struct Serial {
    sb: u8,
    sc: u8,
    output: Vec<u8>,
}

impl Serial {
    pub(crate) fn init_dmg(&mut self) {
        self.sb = 0x00;
        self.sc = 0x7E;
    }

    pub(crate) fn sb(&self) -> u8 {
        self.sb
    }

    /// Only bits 7 and 0 are implemented on DMG.
    pub(crate) fn sc(&self) -> u8 {
        self.sc | 0x7E
    }

    pub(crate) fn write_sb(&mut self, value: u8) {
        self.sb = value;
    }

    pub(crate) fn write_sc(&mut self, value: u8, if_reg: &mut InterruptFlags) {
        self.sc = value;
        if self.sc & 0x81 == 0x81 {
            self.output.push(self.sb);
            self.sb = 0xFF;
            self.sc &= !0x80;
            if_reg.insert(InterruptFlags::SERIAL);
        }
    }

    pub(crate) fn output(&self) -> &[u8] {
        &self.output
    }

    pub(crate) fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output)
    }

    /// Clear the registers. Captured output is kept.
    pub(crate) fn reset(&mut self) {
        self.sb = 0;
        self.sc = 0;
    }
}
