/*!
logical.rs - Logical family handler: AND, ORA, EOR, BIT.

AND/ORA/EOR combine the operand into A and set Z/N from the result.
BIT leaves A untouched: Z from A & M, N and V copied from M bits 7 and 6.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::{and, bit, eor, ora};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Operation;
use crate::memory::Memory;

use super::read_operand;

pub(super) fn handle<C: CpuRegs>(
    op: Operation,
    operand: Operand,
    cpu: &mut C,
    mem: &mut Memory,
    _cycles: &mut u32,
) -> bool {
    let helper: fn(&mut C, u8) = match op {
        Operation::And => and,
        Operation::Ora => ora,
        Operation::Eor => eor,
        Operation::Bit => bit,
        _ => return false,
    };
    let Some(v) = read_operand(operand, cpu, mem) else {
        return false;
    };
    helper(cpu, v);
    true
}
