/*!
dispatch - Orchestrator for a single 6502 instruction step

Overview
========
Coordinates one fetch / decode / execute cycle:
1. Fetch the opcode and advance PC.
2. Decode through `table::decode`; undocumented opcodes go to
   `finalize::illegal_opcode` under the configured policy.
3. Resolve the operand for the instruction's addressing mode.
4. Hand the operation to the family handler chain (load/store, logical,
   arithmetic, compare, branches, rmw, control_flow, misc).
5. Finalize: base cycles + page-cross penalty + any handler extras.

Handler Contract
================
`handle(op, operand, cpu, mem, cycles) -> bool`
- true  => operation executed; `*cycles` may have been increased
- false => not this family's operation (or operand shape it does not take)

Handlers never fetch: PC already points past the whole instruction when they
run. Control-flow handlers overwrite PC.
*/

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod finalize;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;

use crate::config::CpuConfig;
use crate::cpu::addressing::{Operand, fetch_byte, resolve};
use crate::cpu::cycles::page_penalty;
use crate::cpu::execute::Location;
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::{Operation, decode};
use crate::error::CpuError;
use crate::memory::Memory;

/// Execute one instruction and return the cycles it consumed.
pub(crate) fn step<C: CpuRegs>(
    cpu: &mut C,
    mem: &mut Memory,
    config: &CpuConfig,
) -> Result<u32, CpuError> {
    let pc = cpu.pc();
    let opcode = fetch_byte(cpu, mem);
    let Some(instr) = decode(opcode) else {
        return finalize::illegal_opcode(opcode, pc, cpu, config.illegal_opcodes);
    };

    let resolved = resolve(instr.mode, cpu, mem, config.operand_order);
    let mut cycles = instr.cycles as u32
        + page_penalty(instr.operation.access_class(), resolved.page_crossed);

    if run_families(instr.operation, resolved.operand, cpu, mem, &mut cycles) {
        return Ok(finalize::finish(&instr, opcode, pc, cycles, cpu));
    }

    // The decode table and the family handlers disagree.
    finalize::unclaimed(opcode, pc, cpu)
}

fn run_families<C: CpuRegs>(
    op: Operation,
    operand: Operand,
    cpu: &mut C,
    mem: &mut Memory,
    cycles: &mut u32,
) -> bool {
    load_store::handle(op, operand, cpu, mem, cycles)
        || logical::handle(op, operand, cpu, mem, cycles)
        || arithmetic::handle(op, operand, cpu, mem, cycles)
        || compare::handle(op, operand, cpu, mem, cycles)
        || branches::handle(op, operand, cpu, mem, cycles)
        || rmw::handle(op, operand, cpu, mem, cycles)
        || control_flow::handle(op, operand, cpu, mem, cycles)
        || misc::handle(op, operand, cpu, mem, cycles)
}

// ---------------------------------------------------------------------------
// Operand access shared by the families
// ---------------------------------------------------------------------------

/// Value a read-class instruction operates on.
#[inline]
pub(super) fn read_operand<C: CpuRegs>(operand: Operand, cpu: &C, mem: &Memory) -> Option<u8> {
    match operand {
        Operand::Immediate(v) => Some(v),
        Operand::Address(addr) => Some(mem.read(addr)),
        Operand::Accumulator => Some(cpu.a()),
        Operand::None | Operand::Relative(_) => None,
    }
}

/// Target of a read-modify-write instruction.
#[inline]
pub(super) fn location(operand: Operand) -> Option<Location> {
    match operand {
        Operand::Accumulator => Some(Location::Accumulator),
        Operand::Address(addr) => Some(Location::Memory(addr)),
        _ => None,
    }
}
