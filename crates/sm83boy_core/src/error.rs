use thiserror::Error;

/// Errors surfaced by the emulation core.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// One of the unprefixed opcode holes (D3, DB, DD, E3, E4, EB, EC, ED,
    /// F4, FC, FD) was fetched. PC still points at the opcode.
    #[error("invalid opcode 0x{opcode:02X} at PC=0x{pc:04X}")]
    InvalidOpcode { opcode: u8, pc: u16 },

    #[error("0x{0:04X} is not an interrupt vector")]
    InvalidInterruptVector(u16),
}

pub type Result<T> = std::result::Result<T, Error>;
