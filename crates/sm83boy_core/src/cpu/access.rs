//! Named register and flag access for harnesses and debuggers.
//!
//! Instruction handlers work on [`Registers`](super::Registers) directly;
//! this layer exists so that code outside the core can address any register
//! or flag by name, including names parsed from text.

use std::str::FromStr;

use super::{Cpu, Flag};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg8 {
    A,
    F,
    B,
    C,
    D,
    E,
    H,
    L,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg16 {
    AF,
    BC,
    DE,
    HL,
    SP,
    PC,
}

/// Returned by the `FromStr` impls for unknown names.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown register or flag name '{0}'")]
pub struct UnknownRegister(pub String);

pub trait RegisterAccess {
    fn flag(&self, flag: Flag) -> bool;
    fn store_flag(&mut self, flag: Flag, value: bool);
    fn reg8(&self, reg: Reg8) -> u8;
    fn store_reg8(&mut self, reg: Reg8, value: u8);
    fn reg16(&self, reg: Reg16) -> u16;
    fn store_reg16(&mut self, reg: Reg16, value: u16);
}

impl RegisterAccess for Cpu {
    fn flag(&self, flag: Flag) -> bool {
        self.regs.flag(flag)
    }

    fn store_flag(&mut self, flag: Flag, value: bool) {
        self.regs.set_flag(flag, value);
    }

    fn reg8(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::A => self.regs.a,
            Reg8::F => self.regs.f,
            Reg8::B => self.regs.b,
            Reg8::C => self.regs.c,
            Reg8::D => self.regs.d,
            Reg8::E => self.regs.e,
            Reg8::H => self.regs.h,
            Reg8::L => self.regs.l,
        }
    }

    /// Writing F stores all eight bits, so a harness can seed the low nibble.
    fn store_reg8(&mut self, reg: Reg8, value: u8) {
        match reg {
            Reg8::A => self.regs.a = value,
            Reg8::F => self.regs.f = value,
            Reg8::B => self.regs.b = value,
            Reg8::C => self.regs.c = value,
            Reg8::D => self.regs.d = value,
            Reg8::E => self.regs.e = value,
            Reg8::H => self.regs.h = value,
            Reg8::L => self.regs.l = value,
        }
    }

    fn reg16(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::AF => self.regs.af(),
            Reg16::BC => self.regs.bc(),
            Reg16::DE => self.regs.de(),
            Reg16::HL => self.regs.hl(),
            Reg16::SP => self.regs.sp,
            Reg16::PC => self.regs.pc,
        }
    }

    fn store_reg16(&mut self, reg: Reg16, value: u16) {
        match reg {
            Reg16::AF => {
                let [a, f] = value.to_be_bytes();
                self.regs.a = a;
                self.regs.f = f;
            }
            Reg16::BC => self.regs.set_bc(value),
            Reg16::DE => self.regs.set_de(value),
            Reg16::HL => self.regs.set_hl(value),
            Reg16::SP => self.regs.sp = value,
            Reg16::PC => self.regs.pc = value,
        }
    }
}

impl FromStr for Flag {
    type Err = UnknownRegister;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "z" | "zero" => Ok(Flag::Z),
            "n" | "subtract" => Ok(Flag::N),
            "h" | "half_carry" | "halfcarry" => Ok(Flag::H),
            "c" | "carry" => Ok(Flag::C),
            _ => Err(UnknownRegister(s.to_string())),
        }
    }
}

impl FromStr for Reg8 {
    type Err = UnknownRegister;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Reg8::A),
            "F" => Ok(Reg8::F),
            "B" => Ok(Reg8::B),
            "C" => Ok(Reg8::C),
            "D" => Ok(Reg8::D),
            "E" => Ok(Reg8::E),
            "H" => Ok(Reg8::H),
            "L" => Ok(Reg8::L),
            _ => Err(UnknownRegister(s.to_string())),
        }
    }
}

impl FromStr for Reg16 {
    type Err = UnknownRegister;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AF" => Ok(Reg16::AF),
            "BC" => Ok(Reg16::BC),
            "DE" => Ok(Reg16::DE),
            "HL" => Ok(Reg16::HL),
            "SP" => Ok(Reg16::SP),
            "PC" => Ok(Reg16::PC),
            _ => Err(UnknownRegister(s.to_string())),
        }
    }
}
