use crate::error::{Error, Result};
use crate::interrupt::Interrupt;

use super::{Bus, Cpu, RunState};

/// T-cycles spent pushing PC and jumping to the vector.
pub(super) const INTERRUPT_SERVICE_CYCLES: u32 = 20;

impl Cpu {
    /// Highest-priority interrupt in `IE & IF`, whether or not IME allows it.
    pub(super) fn poll_pending_interrupt(&self, bus: &mut dyn Bus) -> Option<Interrupt> {
        Interrupt::highest_priority(bus.pending_interrupts())
    }

    /// Dispatch the highest-priority pending interrupt if IME allows it.
    ///
    /// Returns the cycles charged for the dispatch, or 0 when nothing was
    /// serviced. The bus is ticked for the dispatch time.
    pub(super) fn service_interrupt(&mut self, bus: &mut dyn Bus) -> u32 {
        if !self.ime {
            return 0;
        }
        let Some(interrupt) = self.poll_pending_interrupt(bus) else {
            return 0;
        };

        self.ime = false;
        self.ime_enable_pending = false;
        self.state = RunState::Running;

        // A HALT that hit the halt bug returns to the HALT opcode itself.
        let pc = if self.halt_bug {
            self.halt_bug = false;
            self.regs.pc.wrapping_sub(1)
        } else {
            self.regs.pc
        };
        self.push_u16(bus, pc);
        bus.acknowledge_interrupt(interrupt);
        self.regs.pc = interrupt.vector();

        log::debug!(
            "interrupt {:?}: vector=0x{:04X} return=0x{:04X} sp=0x{:04X}",
            interrupt,
            interrupt.vector(),
            pc,
            self.regs.sp,
        );

        bus.tick(INTERRUPT_SERVICE_CYCLES);
        INTERRUPT_SERVICE_CYCLES
    }

    /// Request the interrupt whose handler lives at `vector`.
    ///
    /// This only raises the IF bit; dispatch happens at the end of the next
    /// `step`, under the usual IME/IE rules. A halted CPU wakes on that step.
    pub fn trigger_interrupt(&mut self, bus: &mut dyn Bus, vector: u16) -> Result<()> {
        let interrupt = Interrupt::from_vector(vector).ok_or(Error::InvalidInterruptVector(vector))?;
        bus.request_interrupt(interrupt);
        Ok(())
    }
}
