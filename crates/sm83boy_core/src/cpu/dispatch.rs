//! Opcode dispatch tables.
//!
//! Both tables are built once, on first use, and indexed directly by the
//! opcode byte. Empty slots in the unprefixed table are the opcode holes
//! that lock up real hardware.

use lazy_static::lazy_static;

use super::{Bus, Cpu};

/// Executes one instruction and returns its cost in T-cycles.
pub(super) type OpHandler = fn(&mut Cpu, &mut dyn Bus, u8) -> u32;

lazy_static! {
    static ref UNPREFIXED: [Option<OpHandler>; 256] = build_unprefixed();
    static ref CB_PREFIXED: [OpHandler; 256] = build_cb_prefixed();
}

#[inline]
pub(super) fn unprefixed(opcode: u8) -> Option<OpHandler> {
    UNPREFIXED[opcode as usize]
}

#[inline]
pub(super) fn cb_prefixed(opcode: u8) -> OpHandler {
    CB_PREFIXED[opcode as usize]
}

fn bind(table: &mut [Option<OpHandler>; 256], opcodes: &[u8], handler: OpHandler) {
    for &opcode in opcodes {
        debug_assert!(table[opcode as usize].is_none(), "opcode {opcode:#04x} bound twice");
        table[opcode as usize] = Some(handler);
    }
}

fn build_unprefixed() -> [Option<OpHandler>; 256] {
    let mut t: [Option<OpHandler>; 256] = [None; 256];

    bind(&mut t, &[0x00], Cpu::exec_nop);
    bind(&mut t, &[0x10], Cpu::exec_stop);
    bind(&mut t, &[0x76], Cpu::exec_halt);
    bind(&mut t, &[0xF3], Cpu::exec_di);
    bind(&mut t, &[0xFB], Cpu::exec_ei);
    bind(&mut t, &[0xCB], Cpu::exec_prefix_cb);

    // 8-bit loads.
    bind(&mut t, &[0x06, 0x0E, 0x16, 0x1E, 0x26, 0x2E, 0x36, 0x3E], Cpu::exec_ld_r_d8);
    let ld_r_r: Vec<u8> = (0x40..=0x7F).filter(|&op| op != 0x76).collect();
    bind(&mut t, &ld_r_r, Cpu::exec_ld_r_r);
    bind(&mut t, &[0x02, 0x12, 0x22, 0x32], Cpu::exec_ld_indirect_a);
    bind(&mut t, &[0x0A, 0x1A, 0x2A, 0x3A], Cpu::exec_ld_a_indirect);
    bind(&mut t, &[0xE0, 0xF0], Cpu::exec_ldh_a8);
    bind(&mut t, &[0xE2, 0xF2], Cpu::exec_ldh_c);
    bind(&mut t, &[0xEA, 0xFA], Cpu::exec_ld_a16_a);

    // 16-bit loads.
    bind(&mut t, &[0x01, 0x11, 0x21, 0x31], Cpu::exec_ld_rr_d16);
    bind(&mut t, &[0x08], Cpu::exec_ld_a16_sp);
    bind(&mut t, &[0xF8], Cpu::exec_ld_hl_sp_r8);
    bind(&mut t, &[0xF9], Cpu::exec_ld_sp_hl);
    bind(&mut t, &[0xC5, 0xD5, 0xE5, 0xF5], Cpu::exec_push);
    bind(&mut t, &[0xC1, 0xD1, 0xE1, 0xF1], Cpu::exec_pop);

    // 8-bit arithmetic and logic.
    let alu_r: Vec<u8> = (0x80..=0xBF).collect();
    bind(&mut t, &alu_r, Cpu::exec_alu_reg);
    bind(&mut t, &[0xC6, 0xCE, 0xD6, 0xDE, 0xE6, 0xEE, 0xF6, 0xFE], Cpu::exec_alu_imm);
    bind(&mut t, &[0x04, 0x0C, 0x14, 0x1C, 0x24, 0x2C, 0x34, 0x3C], Cpu::exec_inc8);
    bind(&mut t, &[0x05, 0x0D, 0x15, 0x1D, 0x25, 0x2D, 0x35, 0x3D], Cpu::exec_dec8);
    bind(&mut t, &[0x07, 0x0F, 0x17, 0x1F], Cpu::exec_rotate_a);
    bind(&mut t, &[0x27], Cpu::exec_daa);
    bind(&mut t, &[0x2F], Cpu::exec_cpl);
    bind(&mut t, &[0x37], Cpu::exec_scf);
    bind(&mut t, &[0x3F], Cpu::exec_ccf);

    // 16-bit arithmetic.
    bind(&mut t, &[0x03, 0x13, 0x23, 0x33], Cpu::exec_inc16);
    bind(&mut t, &[0x0B, 0x1B, 0x2B, 0x3B], Cpu::exec_dec16);
    bind(&mut t, &[0x09, 0x19, 0x29, 0x39], Cpu::exec_add_hl_rr);
    bind(&mut t, &[0xE8], Cpu::exec_add_sp_r8);

    // Jumps, calls and returns.
    bind(&mut t, &[0x18], Cpu::exec_jr);
    bind(&mut t, &[0x20, 0x28, 0x30, 0x38], Cpu::exec_jr_cc);
    bind(&mut t, &[0xC3], Cpu::exec_jp_a16);
    bind(&mut t, &[0xC2, 0xCA, 0xD2, 0xDA], Cpu::exec_jp_cc);
    bind(&mut t, &[0xE9], Cpu::exec_jp_hl);
    bind(&mut t, &[0xCD], Cpu::exec_call_a16);
    bind(&mut t, &[0xC4, 0xCC, 0xD4, 0xDC], Cpu::exec_call_cc);
    bind(&mut t, &[0xC9], Cpu::exec_ret);
    bind(&mut t, &[0xC0, 0xC8, 0xD0, 0xD8], Cpu::exec_ret_cc);
    bind(&mut t, &[0xD9], Cpu::exec_reti);
    bind(&mut t, &[0xC7, 0xCF, 0xD7, 0xDF, 0xE7, 0xEF, 0xF7, 0xFF], Cpu::exec_rst);

    t
}

fn build_cb_prefixed() -> [OpHandler; 256] {
    let mut t: [OpHandler; 256] = [Cpu::exec_cb_shift as OpHandler; 256];
    for (cb, slot) in t.iter_mut().enumerate() {
        *slot = match cb >> 6 {
            0 => Cpu::exec_cb_shift,
            1 => Cpu::exec_cb_bit,
            2 => Cpu::exec_cb_res,
            _ => Cpu::exec_cb_set,
        };
    }
    t
}
