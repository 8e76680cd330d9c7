/*!
rmw.rs - Read-Modify-Write family handler (shifts, rotates, INC/DEC)

Overview
========
  ASL / LSR / ROL / ROR : accumulator or memory; C takes the bit shifted out
  INC / DEC             : memory only; Z/N from the result, C untouched

Indexed memory forms already carry their worst-case cycle count in the
decode table, so nothing is added here.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::{Location, asl, dec, inc, lsr, rol, ror};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Operation;
use crate::memory::Memory;

use super::location;

pub(super) fn handle<C: CpuRegs>(
    op: Operation,
    operand: Operand,
    cpu: &mut C,
    mem: &mut Memory,
    _cycles: &mut u32,
) -> bool {
    let shift: fn(&mut C, &mut Memory, Location) = match op {
        Operation::Asl => asl,
        Operation::Lsr => lsr,
        Operation::Rol => rol,
        Operation::Ror => ror,
        Operation::Inc | Operation::Dec => {
            let Operand::Address(addr) = operand else {
                return false;
            };
            if op == Operation::Inc {
                inc(cpu, mem, addr);
            } else {
                dec(cpu, mem, addr);
            }
            return true;
        }
        _ => return false,
    };
    let Some(loc) = location(operand) else {
        return false;
    };
    shift(cpu, mem, loc);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::flags::Status;
    use crate::cpu::state::CpuState;

    fn run(op: Operation, operand: Operand, cpu: &mut CpuState, mem: &mut Memory) -> bool {
        let mut cycles = 0;
        handle(op, operand, cpu, mem, &mut cycles)
    }

    #[test]
    fn asl_accumulator() {
        let mut cpu = CpuState::new();
        let mut mem = Memory::new();
        cpu.a = 0x7C;
        assert!(run(Operation::Asl, Operand::Accumulator, &mut cpu, &mut mem));
        assert_eq!(cpu.a, 0xF8);
        assert!(cpu.is_flag_set(Status::NEGATIVE));
        assert!(!cpu.is_flag_set(Status::CARRY));
    }

    #[test]
    fn lsr_accumulator() {
        let mut cpu = CpuState::new();
        let mut mem = Memory::new();
        cpu.a = 0x8D;
        assert!(run(Operation::Lsr, Operand::Accumulator, &mut cpu, &mut mem));
        assert_eq!(cpu.a, 0x46);
        assert!(cpu.is_flag_set(Status::CARRY));
        assert!(!cpu.is_flag_set(Status::NEGATIVE));
    }

    #[test]
    fn ror_memory_pulls_in_carry() {
        let mut cpu = CpuState::new();
        let mut mem = Memory::new();
        mem.write(0x0300, 0x02);
        cpu.assign_flag(Status::CARRY, true);
        assert!(run(Operation::Ror, Operand::Address(0x0300), &mut cpu, &mut mem));
        assert_eq!(mem.read(0x0300), 0x81);
        assert!(!cpu.is_flag_set(Status::CARRY));
        assert!(cpu.is_flag_set(Status::NEGATIVE));
    }

    #[test]
    fn inc_dec_keep_carry() {
        let mut cpu = CpuState::new();
        let mut mem = Memory::new();
        cpu.assign_flag(Status::CARRY, true);
        mem.write(0x10, 0x7F);
        assert!(run(Operation::Inc, Operand::Address(0x10), &mut cpu, &mut mem));
        assert_eq!(mem.read(0x10), 0x80);
        assert!(cpu.is_flag_set(Status::NEGATIVE));
        assert!(cpu.is_flag_set(Status::CARRY));
        assert!(run(Operation::Dec, Operand::Address(0x10), &mut cpu, &mut mem));
        assert_eq!(mem.read(0x10), 0x7F);
    }

    #[test]
    fn inc_requires_memory_operand() {
        let mut cpu = CpuState::new();
        let mut mem = Memory::new();
        assert!(!run(Operation::Inc, Operand::Accumulator, &mut cpu, &mut mem));
    }
}
