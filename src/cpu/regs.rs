/*!
regs.rs - CpuRegs trait: the register + flag surface used by the
instruction semantic helpers in `execute.rs`.

The trait does NOT include memory access, stack push/pop or instruction
fetch. Those stay explicit at call sites (`&mut Memory`) so a helper's
signature shows whether it touches memory at all.

Static dispatch only (`fn op<C: CpuRegs>(cpu: &mut C)`), so the generic
helpers compile down to direct field access on `CpuState`.
*/

use crate::cpu::flags::{FlagEffect, Status};
use crate::cpu::state::{CpuState, STACK_PAGE};

pub trait CpuRegs {
    // ---------------------------------------------------------------------
    // Read accessors
    // ---------------------------------------------------------------------
    fn a(&self) -> u8;
    fn x(&self) -> u8;
    fn y(&self) -> u8;
    fn sp(&self) -> u16;
    fn pc(&self) -> u16;
    fn status(&self) -> Status;

    // ---------------------------------------------------------------------
    // Mutators
    // ---------------------------------------------------------------------
    fn set_a(&mut self, v: u8);
    fn set_x(&mut self, v: u8);
    fn set_y(&mut self, v: u8);
    fn set_sp(&mut self, v: u16);
    fn set_pc(&mut self, v: u16);
    fn set_status(&mut self, v: Status);

    /// Apply a flag effect to the status register.
    fn evaluate(&mut self, effect: FlagEffect);

    // ---------------------------------------------------------------------
    // Composites
    // ---------------------------------------------------------------------

    #[inline]
    fn is_flag_set(&self, flag: Status) -> bool {
        self.status().contains(flag)
    }

    #[inline]
    fn assign_flag(&mut self, flag: Status, value: bool) {
        let mut s = self.status();
        s.set(flag, value);
        self.set_status(s);
    }

    #[inline]
    fn update_zn(&mut self, result: u8) {
        self.evaluate(FlagEffect::Result(result));
    }

    /// Low byte of SP, the value TSX observes.
    #[inline]
    fn sp_low(&self) -> u8 {
        self.sp() as u8
    }

    /// Point SP at `$0100 | v` (TXS).
    #[inline]
    fn set_sp_low(&mut self, v: u8) {
        self.set_sp(STACK_PAGE | v as u16);
    }
}

impl CpuRegs for CpuState {
    #[inline]
    fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    fn sp(&self) -> u16 {
        self.sp
    }
    #[inline]
    fn pc(&self) -> u16 {
        self.pc
    }
    #[inline]
    fn status(&self) -> Status {
        self.status
    }

    #[inline]
    fn set_a(&mut self, v: u8) {
        self.a = v;
    }
    #[inline]
    fn set_x(&mut self, v: u8) {
        self.x = v;
    }
    #[inline]
    fn set_y(&mut self, v: u8) {
        self.y = v;
    }
    #[inline]
    fn set_sp(&mut self, v: u16) {
        self.sp = v;
    }
    #[inline]
    fn set_pc(&mut self, v: u16) {
        self.pc = v;
    }
    #[inline]
    fn set_status(&mut self, v: Status) {
        self.status = v.stored();
    }

    #[inline]
    fn evaluate(&mut self, effect: FlagEffect) {
        self.status.evaluate(effect);
    }
}
