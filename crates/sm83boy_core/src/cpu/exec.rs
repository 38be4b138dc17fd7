//! Unprefixed instruction handlers.
//!
//! Every handler has the same shape, `fn(&mut Cpu, &mut dyn Bus, u8) -> u32`:
//! it receives the opcode that selected it (so one handler can serve a whole
//! row of the opcode table), executes the instruction completely and returns
//! its cost in T-cycles. `dispatch` binds them into the opcode tables.

mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn exec_nop(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        4
    }

    /// 0xCB prefix: fetch the second byte and run it through the CB table.
    pub(in crate::cpu) fn exec_prefix_cb(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let cb = self.fetch8(bus);
        let handler = super::dispatch::cb_prefixed(cb);
        handler(self, bus, cb)
    }
}
