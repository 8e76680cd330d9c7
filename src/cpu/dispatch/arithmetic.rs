/*!
arithmetic.rs - ADC / SBC family handler

Binary arithmetic only. The decimal flag is stored and reported but never
changes how ADC or SBC compute; SBC is ADC of the one's complement.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::{adc, sbc};
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
    if !matches!(op, Operation::Adc | Operation::Sbc) {
        return false;
    }
    let Some(v) = read_operand(operand, cpu, mem) else {
        return false;
    };
    if op == Operation::Adc {
        adc(cpu, v);
    } else {
        sbc(cpu, v);
    }
    true
}
