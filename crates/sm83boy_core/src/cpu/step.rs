use crate::error::{Error, Result};

use super::{dispatch, Bus, Cpu, RunState};

/// Cycles reported for a step in which the CPU sits in HALT or STOP.
const IDLE_CYCLES: u32 = 4;

impl Cpu {
    /// Execute a single instruction and return the number of T-cycles taken.
    ///
    /// The fetched instruction always completes, and the bus is ticked for
    /// its cost, before interrupts are sampled. If IME is set and a line in
    /// `IE & IF` is pending, the interrupt is dispatched within the same call
    /// and its 20 cycles are added to the result.
    pub fn step(&mut self, bus: &mut dyn Bus) -> Result<u32> {
        match self.state {
            RunState::Stopped => return Ok(IDLE_CYCLES),
            RunState::Halted => return Ok(self.step_halted(bus)),
            RunState::Running => {}
        }

        // EI takes effect after the instruction that follows it. Latch the
        // request before executing so that EI itself does not count.
        let enable_ime_after = self.ime_enable_pending;

        let pc = self.regs.pc;
        let halt_bug = self.halt_bug;
        let opcode = self.fetch8(bus);
        let Some(handler) = dispatch::unprefixed(opcode) else {
            self.regs.pc = pc;
            self.halt_bug = halt_bug;
            log::error!(
                "invalid opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                sp = self.regs.sp,
                af = self.regs.af(),
                bc = self.regs.bc(),
                de = self.regs.de(),
                hl = self.regs.hl(),
            );
            return Err(Error::InvalidOpcode { opcode, pc });
        };

        log::trace!("PC=0x{pc:04X} op=0x{opcode:02X}");
        let cycles = handler(self, bus, opcode);
        bus.tick(cycles);

        if enable_ime_after && self.ime_enable_pending {
            self.ime = true;
            self.ime_enable_pending = false;
        }

        Ok(cycles + self.service_interrupt(bus))
    }

    /// One idle slot of HALT. Any line in `IE & IF` ends the halt; the
    /// interrupt is only dispatched if IME is set.
    fn step_halted(&mut self, bus: &mut dyn Bus) -> u32 {
        bus.tick(IDLE_CYCLES);
        if self.poll_pending_interrupt(bus).is_none() {
            return IDLE_CYCLES;
        }

        self.state = RunState::Running;
        IDLE_CYCLES + self.service_interrupt(bus)
    }
}
