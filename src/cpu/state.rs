/*!
state.rs - Architectural 6502 CPU state (registers + flags) and
inline-friendly helpers.

Overview
========
`CpuState` is the single owner of all architecturally visible registers and
the execution control booleans. It intentionally excludes:
  - Memory (see `crate::memory`)
  - Instruction decode / dispatch logic
  - Cycle accounting
Those live in the dispatch and execute layers.

Power-on / Reset State
======================
  A = X = Y = 0
  PC = $FFFC
  SP = $0100
  P  = all flags clear

The stack pointer is stored as 16 bits but only its low byte selects the
slot; pushes and pulls always address page 1 and wrap inside it.

Interrupt Hooks
===============
`irq_pending` / `nmi_pending` are plain latches for the embedding machine.
The core stores and reports them; servicing them is outside this crate.
*/

use crate::cpu::flags::{FlagEffect, Status};

/// Base address of the hardware stack page.
pub const STACK_PAGE: u16 = 0x0100;
/// PC value after power-on / reset.
pub const RESET_PC: u16 = 0xFFFC;
/// SP value after power-on / reset.
pub const RESET_SP: u16 = 0x0100;

/// Register / flag container for the 6502 CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u16,
    pub pc: u16,
    pub status: Status,
    pub irq_pending: bool,
    pub nmi_pending: bool,
}

impl Default for CpuState {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: RESET_SP,
            pc: RESET_PC,
            status: Status::empty(),
            irq_pending: false,
            nmi_pending: false,
        }
    }
}

impl CpuState {
    // ---------------------------------------------------------------------
    // Construction / Reset
    // ---------------------------------------------------------------------

    /// Create a new CPU state using power-on defaults.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return every register and latch to the power-on state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ---------------------------------------------------------------------
    // Program Counter Helpers
    // ---------------------------------------------------------------------

    /// Advance PC by `delta` (wrapping at 16 bits).
    #[inline]
    pub fn advance_pc(&mut self, delta: u16) {
        self.pc = self.pc.wrapping_add(delta);
    }

    // ---------------------------------------------------------------------
    // Flag Operations
    // ---------------------------------------------------------------------

    #[inline]
    pub fn is_flag_set(&self, flag: Status) -> bool {
        self.status.contains(flag)
    }

    #[inline]
    pub fn assign_flag(&mut self, flag: Status, value: bool) {
        self.status.set(flag.stored(), value);
    }

    #[inline]
    pub fn evaluate(&mut self, effect: FlagEffect) {
        self.status.evaluate(effect);
    }

    // ---------------------------------------------------------------------
    // Stack Helpers
    // ---------------------------------------------------------------------

    /// Address of the stack slot SP currently designates.
    #[inline]
    pub fn stack_addr(&self) -> u16 {
        STACK_PAGE | (self.sp & 0x00FF)
    }
}
