mod access;
mod alu;
mod cb;
mod dispatch;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;

pub use access::{Reg16, Reg8, RegisterAccess, UnknownRegister};
pub use regs::{Flag, Registers};

use crate::interrupt::{Interrupt, InterruptFlags};

/// Abstraction over the memory bus as seen from the CPU.
///
/// Only `read8`/`write8` are mandatory. The interrupt helpers default to
/// going through IE ($FFFF) and IF ($FF0F) so that a flat 64 KiB test bus
/// behaves like the real one; `MemoryBus` overrides them to touch its
/// registers directly.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Advance bus-side peripherals (the timer) by `cycles` T-cycles.
    fn tick(&mut self, _cycles: u32) {}

    fn interrupt_enable(&mut self) -> u8 {
        self.read8(0xFFFF)
    }

    fn interrupt_flags(&mut self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(self.read8(0xFF0F))
    }

    /// `IE & IF`, restricted to the five interrupt lines.
    fn pending_interrupts(&mut self) -> InterruptFlags {
        let ie = InterruptFlags::from_bits_truncate(self.interrupt_enable());
        self.interrupt_flags() & ie
    }

    fn request_interrupt(&mut self, interrupt: Interrupt) {
        let iflags = self.read8(0xFF0F);
        self.write8(0xFF0F, iflags | interrupt.bit());
    }

    /// Clear the IF bit of an interrupt that is being dispatched.
    fn acknowledge_interrupt(&mut self, interrupt: Interrupt) {
        let iflags = self.read8(0xFF0F);
        self.write8(0xFF0F, iflags & !interrupt.bit());
    }
}

/// CPU run state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Running,
    /// Entered by HALT. The bus keeps ticking; any line in `IE & IF` wakes
    /// the CPU whether or not IME is set.
    Halted,
    /// Entered by STOP. Nothing inside the core wakes the CPU again.
    Stopped,
}

/// Sharp SM83 core.
///
/// Instructions are executed whole by [`Cpu::step`]; interrupts are sampled
/// after the instruction has finished.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    ime: bool,
    state: RunState,
    /// Set by HALT when it hits the halt bug: the next opcode fetch does not
    /// advance PC.
    halt_bug: bool,
    /// EI was executed; IME turns on once the following instruction is done.
    ime_enable_pending: bool,
}

impl Cpu {
    #[inline]
    pub fn ime(&self) -> bool {
        self.ime
    }

    #[inline]
    pub fn set_ime(&mut self, value: bool) {
        self.ime = value;
        if !value {
            self.ime_enable_pending = false;
        }
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.state == RunState::Stopped
    }

    #[inline]
    pub(crate) fn get_flag(&self, flag: Flag) -> bool {
        self.regs.flag(flag)
    }

    #[inline]
    pub(crate) fn set_flag(&mut self, flag: Flag, value: bool) {
        self.regs.set_flag(flag, value);
    }

    #[inline]
    pub(crate) fn clear_flags(&mut self) {
        self.regs.clear_flags();
    }
}
