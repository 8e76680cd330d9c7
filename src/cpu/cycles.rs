/*!
cycles.rs - Cycle timing rules for the 6502 CPU core.

Purpose
=======
Provides:
  - `AccessClass`        : How an instruction touches its operand, which
                           decides whether an indexed page cross costs extra.
  - `page_penalty(..)`   : +1 for read-class instructions whose indexed
                           effective address left the base page.
  - `branch_penalty(..)` : +1 when a branch is taken, +1 more when the
                           target lies on a different page than the
                           instruction following the branch.

Base cycle counts live next to each opcode in `table.rs`. For store and
read-modify-write instructions the indexed variants already carry their
worst-case count, so `page_penalty` never charges them again.
*/

use crate::cpu::addressing::crosses_page;

/// Operand access pattern of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessClass {
    /// Reads the operand only (LDA, ADC, CMP, BIT, ...).
    Read,
    /// Writes the operand only (STA, STX, STY).
    Write,
    /// Reads, modifies and writes back (ASL, INC, ...).
    ReadModifyWrite,
    /// No data operand (flow control, stack, transfers, flags).
    Other,
}

/// Extra cycles for an indexed access that crossed a page.
#[inline]
pub fn page_penalty(class: AccessClass, page_crossed: bool) -> u32 {
    match (class, page_crossed) {
        (AccessClass::Read, true) => 1,
        _ => 0,
    }
}

/// Extra cycles for a conditional branch. `next_pc` is the address of the
/// instruction after the branch, `target` the branch destination.
#[inline]
pub fn branch_penalty(taken: bool, next_pc: u16, target: u16) -> u32 {
    if !taken {
        return 0;
    }
    if crosses_page(next_pc, target) { 2 } else { 1 }
}
