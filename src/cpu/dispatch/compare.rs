/*!
compare.rs - Compare family handler (CMP / CPX / CPY)

Flag semantics (register R, operand M):
  C = (R >= M)
  Z = (R == M)
  N = bit 7 of (R - M) (8-bit wrap)

V is never touched.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::compare;
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
    let register = match op {
        Operation::Cmp => cpu.a(),
        Operation::Cpx => cpu.x(),
        Operation::Cpy => cpu.y(),
        _ => return false,
    };
    let Some(v) = read_operand(operand, cpu, mem) else {
        return false;
    };
    compare(cpu, register, v);
    true
}
