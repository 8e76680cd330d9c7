/*!
control_flow.rs - Control-flow / system family handler

Overview
========
  JMP abs / JMP (ind)  target already resolved by the addressing layer
                       (indirect vector page-wrap quirk included)
  JSR abs              push the address of the JSR's last byte, jump
  RTS                  pull the return address, continue one past it
  RTI                  pull status, then PC (no +1)
  BRK                  consume the padding byte, 7 cycles, nothing else

Behavior Details
================
- JSR pushes (PC - 1) high byte first. With PC past the 3-byte JSR that is
  the address of its final operand byte; RTS undoes it with +1.
- RTI restores N V D I Z C from the pulled byte; B and bit 5 are dropped.
- No interrupt sequence exists in this core, so BRK pushes nothing, reads
  no vector and leaves the flags alone. Execution continues after the
  padding byte.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::{plp, pop_word, push_word};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Operation;
use crate::memory::Memory;

#[inline]
fn op_jsr<C: CpuRegs>(cpu: &mut C, mem: &mut Memory, target: u16) {
    let ret = cpu.pc().wrapping_sub(1);
    push_word(cpu, mem, ret);
    cpu.set_pc(target);
}

#[inline]
fn op_rts<C: CpuRegs>(cpu: &mut C, mem: &Memory) {
    let ret = pop_word(cpu, mem);
    cpu.set_pc(ret.wrapping_add(1));
}

#[inline]
fn op_rti<C: CpuRegs>(cpu: &mut C, mem: &Memory) {
    plp(cpu, mem);
    let pc = pop_word(cpu, mem);
    cpu.set_pc(pc);
}

#[inline]
fn op_brk<C: CpuRegs>(cpu: &mut C) {
    let pc = cpu.pc();
    cpu.set_pc(pc.wrapping_add(1));
    log::debug!("BRK at ${:04X}", pc.wrapping_sub(1));
}

pub(super) fn handle<C: CpuRegs>(
    op: Operation,
    operand: Operand,
    cpu: &mut C,
    mem: &mut Memory,
    _cycles: &mut u32,
) -> bool {
    match (op, operand) {
        (Operation::Jmp, Operand::Address(target)) => cpu.set_pc(target),
        (Operation::Jsr, Operand::Address(target)) => op_jsr(cpu, mem, target),
        (Operation::Rts, _) => op_rts(cpu, mem),
        (Operation::Rti, _) => op_rti(cpu, mem),
        (Operation::Brk, _) => op_brk(cpu),
        _ => return false,
    }
    true
}
