/*!
misc.rs - Transfers, stack, register inc/dec, flag and NOP handler

Overview
========
Transfers:  TAX, TAY, TXA, TYA, TSX, TXS (TXS sets no flags)
Stack:      PHA, PHP, PLA, PLP
Registers:  INX, INY, DEX, DEY
Flags:      CLC, SEC, CLI, SEI, CLV, CLD, SED
NOP:        nothing but cycles

All implied-mode, single-byte instructions.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::{
    dex, dey, inx, iny, pha, php, pla, plp, tax, tay, tsx, txa, txs, tya,
};
use crate::cpu::flags::Status;
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Operation;
use crate::memory::Memory;

pub(super) fn handle<C: CpuRegs>(
    op: Operation,
    _operand: Operand,
    cpu: &mut C,
    mem: &mut Memory,
    _cycles: &mut u32,
) -> bool {
    match op {
        Operation::Tax => tax(cpu),
        Operation::Tay => tay(cpu),
        Operation::Txa => txa(cpu),
        Operation::Tya => tya(cpu),
        Operation::Tsx => tsx(cpu),
        Operation::Txs => txs(cpu),

        Operation::Pha => pha(cpu, mem),
        Operation::Php => php(cpu, mem),
        Operation::Pla => pla(cpu, mem),
        Operation::Plp => plp(cpu, mem),

        Operation::Inx => inx(cpu),
        Operation::Iny => iny(cpu),
        Operation::Dex => dex(cpu),
        Operation::Dey => dey(cpu),

        Operation::Clc => cpu.assign_flag(Status::CARRY, false),
        Operation::Sec => cpu.assign_flag(Status::CARRY, true),
        Operation::Cli => cpu.assign_flag(Status::IRQ_DISABLE, false),
        Operation::Sei => cpu.assign_flag(Status::IRQ_DISABLE, true),
        Operation::Clv => cpu.assign_flag(Status::OVERFLOW, false),
        Operation::Cld => cpu.assign_flag(Status::DECIMAL, false),
        Operation::Sed => cpu.assign_flag(Status::DECIMAL, true),

        Operation::Nop => {}
        _ => return false,
    }
    true
}
