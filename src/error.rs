//! Error type surfaced by [`Cpu::execute`](crate::Cpu::execute).
//!
//! Register overflow and address wraparound are hardware behaviour and never
//! reach this type. The only fault is an opcode the table does not define,
//! and only when the configured policy asks for it.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// The byte at `pc` has no entry in the opcode table.
    #[error("illegal opcode ${opcode:02X} at ${pc:04X}")]
    IllegalOpcode { opcode: u8, pc: u16 },
}
