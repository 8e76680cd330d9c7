/*!
load_store.rs - Load / Store family handler (part of the dispatch chain)

Overview
========
Loads (set Z/N; indexed reads may have been charged a page-cross cycle by
the orchestrator):
    LDA, LDX, LDY
Stores (no flags; the target is never read):
    STA, STX, STY
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::{lda, ldx, ldy};
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
    match op {
        Operation::Lda | Operation::Ldx | Operation::Ldy => {
            let Some(v) = read_operand(operand, cpu, mem) else {
                return false;
            };
            match op {
                Operation::Lda => lda(cpu, v),
                Operation::Ldx => ldx(cpu, v),
                _ => ldy(cpu, v),
            }
        }
        Operation::Sta | Operation::Stx | Operation::Sty => {
            let Operand::Address(addr) = operand else {
                return false;
            };
            let v = match op {
                Operation::Sta => cpu.a(),
                Operation::Stx => cpu.x(),
                _ => cpu.y(),
            };
            mem.write(addr, v);
        }
        _ => return false,
    }
    true
}
