/*!
finalize.rs - Instruction finalization & undocumented opcode handling.

Overview
========
This module consolidates the exits of `dispatch::step`:
  1. `finish`: the normal exit. Emits the per-instruction trace line and
     returns the externally reported cycle count.
  2. `illegal_opcode`: an opcode with no table entry. Behaviour follows
     `IllegalOpcodePolicy`:
        - `Fault`: PC is rewound onto the opcode, no cycles are charged and
          `CpuError::IllegalOpcode` is returned. Execution can continue once
          the caller has patched memory or moved PC.
        - `Nop`: the opcode byte is consumed and 2 cycles are charged.
  3. `unclaimed`: a decoded operation no family handler accepted. This is
     an internal inconsistency and is reported like a faulting opcode.

Non-Responsibilities
====================
- Does NOT compute base cycles or penalties (the orchestrator did that).
- Does NOT attempt to emulate undocumented opcode semantics.
*/

use crate::config::IllegalOpcodePolicy;
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Instruction;
use crate::error::CpuError;

/// Cycles charged for an undocumented opcode skipped under `Nop`.
pub(crate) const ILLEGAL_NOP_CYCLES: u32 = 2;

pub(crate) fn finish<C: CpuRegs>(
    instr: &Instruction,
    opcode: u8,
    pc: u16,
    cycles: u32,
    cpu: &C,
) -> u32 {
    log::trace!(
        "${pc:04X}  {opcode:02X}  {:<3} {:?}  cyc={cycles}  A={:02X} X={:02X} Y={:02X} SP={:04X} P={:02X}",
        instr.mnemonic(),
        instr.mode,
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.sp(),
        cpu.status().bits(),
    );
    cycles
}

/// Apply the configured policy to an undocumented opcode. PC points past
/// the opcode on entry.
pub(crate) fn illegal_opcode<C: CpuRegs>(
    opcode: u8,
    pc: u16,
    cpu: &mut C,
    policy: IllegalOpcodePolicy,
) -> Result<u32, CpuError> {
    match policy {
        IllegalOpcodePolicy::Fault => {
            log::warn!("illegal opcode ${opcode:02X} at ${pc:04X}");
            cpu.set_pc(pc);
            Err(CpuError::IllegalOpcode { opcode, pc })
        }
        IllegalOpcodePolicy::Nop => {
            log::warn!("illegal opcode ${opcode:02X} at ${pc:04X} skipped as NOP");
            Ok(ILLEGAL_NOP_CYCLES)
        }
    }
}

pub(crate) fn unclaimed<C: CpuRegs>(opcode: u8, pc: u16, cpu: &mut C) -> Result<u32, CpuError> {
    log::error!("decoded opcode ${opcode:02X} at ${pc:04X} has no handler");
    cpu.set_pc(pc);
    Err(CpuError::IllegalOpcode { opcode, pc })
}
