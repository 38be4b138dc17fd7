//! CB-prefixed instructions: rotates, shifts, SWAP and the BIT/RES/SET
//! families. The second opcode byte encodes `x` (bits 7-6) for the family,
//! `y` (bits 5-3) for the operation or bit number, and `z` (bits 2-0) for
//! the operand register with 6 meaning (HL).

use super::{Bus, Cpu, Flag};

impl Cpu {
    /// RLC/RRC/RL/RR/SLA/SRA/SWAP/SRL r (CB 0x00-0x3F).
    pub(in crate::cpu) fn exec_cb_shift(&mut self, bus: &mut dyn Bus, cb: u8) -> u32 {
        debug_assert!(cb < 0x40);
        let z = cb & 0x07;
        let value = self.read_reg8(bus, z);
        let carry = self.get_flag(Flag::C);

        let (result, carry_out) = match (cb >> 3) & 0x07 {
            0 => Self::rot_rlc(value),
            1 => Self::rot_rrc(value),
            2 => Self::rot_rl(value, carry),
            3 => Self::rot_rr(value, carry),
            // SLA
            4 => (value << 1, value & 0x80 != 0),
            // SRA keeps bit 7.
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            // SWAP never sets C.
            6 => (value.rotate_left(4), false),
            // SRL
            _ => (value >> 1, value & 0x01 != 0),
        };

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, carry_out);
        self.write_reg8(bus, z, result);

        if z == 6 { 16 } else { 8 }
    }

    /// BIT b, r (CB 0x40-0x7F). C is preserved, H set, N cleared.
    pub(in crate::cpu) fn exec_cb_bit(&mut self, bus: &mut dyn Bus, cb: u8) -> u32 {
        debug_assert!((0x40..0x80).contains(&cb));
        let bit = (cb >> 3) & 0x07;
        let z = cb & 0x07;
        let value = self.read_reg8(bus, z);

        self.set_flag(Flag::Z, value & (1 << bit) == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, true);

        if z == 6 { 12 } else { 8 }
    }

    /// RES b, r (CB 0x80-0xBF). Flags untouched.
    pub(in crate::cpu) fn exec_cb_res(&mut self, bus: &mut dyn Bus, cb: u8) -> u32 {
        debug_assert!((0x80..0xC0).contains(&cb));
        let bit = (cb >> 3) & 0x07;
        let z = cb & 0x07;
        let value = self.read_reg8(bus, z) & !(1 << bit);
        self.write_reg8(bus, z, value);

        if z == 6 { 16 } else { 8 }
    }

    /// SET b, r (CB 0xC0-0xFF). Flags untouched.
    pub(in crate::cpu) fn exec_cb_set(&mut self, bus: &mut dyn Bus, cb: u8) -> u32 {
        debug_assert!(cb >= 0xC0);
        let bit = (cb >> 3) & 0x07;
        let z = cb & 0x07;
        let value = self.read_reg8(bus, z) | (1 << bit);
        self.write_reg8(bus, z, value);

        if z == 6 { 16 } else { 8 }
    }
}
