use crate::cpu::Bus;
use crate::interrupt::{Interrupt, InterruptFlags};

use super::MemoryBus;

impl Bus for MemoryBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.read_byte(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.write_byte(addr, value)
    }

    fn tick(&mut self, cycles: u32) {
        self.advance(cycles);
    }

    fn interrupt_enable(&mut self) -> u8 {
        self.ie
    }

    fn interrupt_flags(&mut self) -> InterruptFlags {
        self.if_reg
    }

    fn request_interrupt(&mut self, interrupt: Interrupt) {
        self.if_reg.insert(interrupt.flag());
    }

    fn acknowledge_interrupt(&mut self, interrupt: Interrupt) {
        self.if_reg.remove(interrupt.flag());
    }
}
