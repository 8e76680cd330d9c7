/*!
branches.rs - Conditional branch family handler

  BPL (N=0)  BMI (N=1)  BVC (V=0)  BVS (V=1)
  BCC (C=0)  BCS (C=1)  BNE (Z=0)  BEQ (Z=1)

Cycle Accounting
================
Base 2 from the table. `branch_cond` adds +1 when taken and +1 more when the
target is on a different page than the instruction after the branch.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::branch_cond;
use crate::cpu::flags::Status;
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Operation;
use crate::memory::Memory;

pub(super) fn handle<C: CpuRegs>(
    op: Operation,
    operand: Operand,
    cpu: &mut C,
    _mem: &mut Memory,
    cycles: &mut u32,
) -> bool {
    let (flag, want) = match op {
        Operation::Bpl => (Status::NEGATIVE, false),
        Operation::Bmi => (Status::NEGATIVE, true),
        Operation::Bvc => (Status::OVERFLOW, false),
        Operation::Bvs => (Status::OVERFLOW, true),
        Operation::Bcc => (Status::CARRY, false),
        Operation::Bcs => (Status::CARRY, true),
        Operation::Bne => (Status::ZERO, false),
        Operation::Beq => (Status::ZERO, true),
        _ => return false,
    };
    let Operand::Relative(offset) = operand else {
        return false;
    };
    let take = cpu.is_flag_set(flag) == want;
    *cycles += branch_cond(cpu, offset, take);
    true
}
