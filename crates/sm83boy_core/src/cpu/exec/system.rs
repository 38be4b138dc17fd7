use crate::cpu::{Bus, Cpu, RunState};

impl Cpu {
    pub(in crate::cpu) fn exec_halt(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        if !self.ime && !bus.pending_interrupts().is_empty() {
            // HALT bug: with IME clear and an interrupt already pending the
            // CPU does not halt, and the next opcode fetch does not
            // increment PC, so the following byte is executed twice.
            log::debug!("HALT bug triggered at PC=0x{:04X}", self.regs.pc.wrapping_sub(1));
            self.halt_bug = true;
            return 4;
        }

        self.state = RunState::Halted;
        4
    }

    pub(in crate::cpu) fn exec_stop(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        // STOP is a 2-byte instruction; the second byte is ignored.
        let _padding = self.fetch8(bus);
        log::debug!("STOP at PC=0x{:04X}", self.regs.pc.wrapping_sub(2));
        self.state = RunState::Stopped;
        4
    }

    pub(in crate::cpu) fn exec_di(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.ime = false;
        self.ime_enable_pending = false;
        4
    }

    pub(in crate::cpu) fn exec_ei(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        // IME becomes 1 after the *next* instruction completes.
        self.ime_enable_pending = true;
        4
    }
}
