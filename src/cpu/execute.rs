/*!
execute.rs - 6502 instruction semantic helpers (ALU, flags, stack, RMW)

Purpose
=======
Side-effect logic shared by every dispatch family. Each helper is generic
over `CpuRegs` and takes `&Memory` / `&mut Memory` only when the
instruction actually touches memory, so the signature documents the
instruction's reach.

Flags are never poked bit by bit here: each helper computes its data
result, then describes the flag outcome as a `FlagEffect` for the status
register to evaluate.

Scope (crate-visible)
---------------------
Stack:
    push, pop, push_word, pop_word, pha, pla, php, plp
Loads / transfers:
    lda/ldx/ldy, tax/tay/txa/tya, tsx/txs
Logical:
    and/ora/eor/bit
Arithmetic (binary only; D is ignored):
    adc, sbc
Compare:
    compare
Increment / decrement:
    inx/iny/dex/dey, inc/dec on a `Location`
Shifts / rotates:
    asl/lsr/rol/ror on a `Location`
Branch:
    branch_cond
*/

use crate::cpu::cycles::branch_penalty;
use crate::cpu::flags::{FlagEffect, Status};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::STACK_PAGE;
use crate::memory::Memory;

// ---------------------------------------------------------------------------
// Stack helpers
// ---------------------------------------------------------------------------
//
//   Push: write at $0100 | SP.lo, then SP.lo -= 1
//   Pull: SP.lo += 1, then read at $0100 | SP.lo

#[inline]
pub(crate) fn push<C: CpuRegs>(cpu: &mut C, mem: &mut Memory, v: u8) {
    let sp = cpu.sp_low();
    mem.write(STACK_PAGE | sp as u16, v);
    cpu.set_sp_low(sp.wrapping_sub(1));
}

#[inline]
pub(crate) fn pop<C: CpuRegs>(cpu: &mut C, mem: &Memory) -> u8 {
    let sp = cpu.sp_low().wrapping_add(1);
    cpu.set_sp_low(sp);
    mem.read(STACK_PAGE | sp as u16)
}

/// High byte first, so the low byte sits at the lower address.
#[inline]
pub(crate) fn push_word<C: CpuRegs>(cpu: &mut C, mem: &mut Memory, v: u16) {
    push(cpu, mem, (v >> 8) as u8);
    push(cpu, mem, (v & 0xFF) as u8);
}

#[inline]
pub(crate) fn pop_word<C: CpuRegs>(cpu: &mut C, mem: &Memory) -> u16 {
    let lo = pop(cpu, mem) as u16;
    let hi = pop(cpu, mem) as u16;
    (hi << 8) | lo
}

#[inline]
pub(crate) fn pha<C: CpuRegs>(cpu: &mut C, mem: &mut Memory) {
    let a = cpu.a();
    push(cpu, mem, a);
}

#[inline]
pub(crate) fn pla<C: CpuRegs>(cpu: &mut C, mem: &Memory) {
    let v = pop(cpu, mem);
    lda(cpu, v);
}

/// Pushes with B and bit 5 set.
#[inline]
pub(crate) fn php<C: CpuRegs>(cpu: &mut C, mem: &mut Memory) {
    let v = cpu.status().to_stack_byte();
    push(cpu, mem, v);
}

#[inline]
pub(crate) fn plp<C: CpuRegs>(cpu: &mut C, mem: &Memory) {
    let v = pop(cpu, mem);
    cpu.set_status(Status::from_stack_byte(v));
}

// ---------------------------------------------------------------------------
// Loads / Transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldx<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_x(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldy<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_y(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn tax<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    ldx(cpu, v);
}

#[inline]
pub(crate) fn tay<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    ldy(cpu, v);
}

#[inline]
pub(crate) fn txa<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x();
    lda(cpu, v);
}

#[inline]
pub(crate) fn tya<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y();
    lda(cpu, v);
}

#[inline]
pub(crate) fn tsx<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.sp_low();
    ldx(cpu, v);
}

/// No flags.
#[inline]
pub(crate) fn txs<C: CpuRegs>(cpu: &mut C) {
    cpu.set_sp_low(cpu.x());
}

// ---------------------------------------------------------------------------
// Logical / Bit
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and<C: CpuRegs>(cpu: &mut C, v: u8) {
    let v = cpu.a() & v;
    lda(cpu, v);
}

#[inline]
pub(crate) fn ora<C: CpuRegs>(cpu: &mut C, v: u8) {
    let v = cpu.a() | v;
    lda(cpu, v);
}

#[inline]
pub(crate) fn eor<C: CpuRegs>(cpu: &mut C, v: u8) {
    let v = cpu.a() ^ v;
    lda(cpu, v);
}

#[inline]
pub(crate) fn bit<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.evaluate(FlagEffect::BitTest {
        a: cpu.a(),
        operand: v,
    });
}

// ---------------------------------------------------------------------------
// ADC / SBC
// ---------------------------------------------------------------------------

pub(crate) fn adc<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = cpu.a();
    let carry_in = cpu.is_flag_set(Status::CARRY) as u16;
    let sum16 = a as u16 + v as u16 + carry_in;
    let result = sum16 as u8;

    cpu.set_a(result);
    cpu.evaluate(FlagEffect::Arithmetic {
        a,
        operand: v,
        result,
        carry: sum16 > 0xFF,
    });
}

/// A - M - !C, computed as A + !M + C.
#[inline]
pub(crate) fn sbc<C: CpuRegs>(cpu: &mut C, v: u8) {
    adc(cpu, v ^ 0xFF);
}

// ---------------------------------------------------------------------------
// Compare
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn compare<C: CpuRegs>(cpu: &mut C, register: u8, v: u8) {
    cpu.evaluate(FlagEffect::Compare {
        register,
        operand: v,
    });
}

// ---------------------------------------------------------------------------
// Increment / Decrement (register)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inx<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x().wrapping_add(1);
    ldx(cpu, v);
}

#[inline]
pub(crate) fn iny<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y().wrapping_add(1);
    ldy(cpu, v);
}

#[inline]
pub(crate) fn dex<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x().wrapping_sub(1);
    ldx(cpu, v);
}

#[inline]
pub(crate) fn dey<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y().wrapping_sub(1);
    ldy(cpu, v);
}

// ---------------------------------------------------------------------------
// Read-Modify-Write
// ---------------------------------------------------------------------------

/// Target of a read-modify-write instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Location {
    Accumulator,
    Memory(u16),
}

/// Read the target, apply `transform`, write the result back and return it.
pub(crate) fn rmw<C: CpuRegs, F>(cpu: &mut C, mem: &mut Memory, loc: Location, transform: F) -> u8
where
    F: FnOnce(&mut C, u8) -> u8,
{
    let old = match loc {
        Location::Accumulator => cpu.a(),
        Location::Memory(addr) => mem.read(addr),
    };
    let new = transform(cpu, old);
    match loc {
        Location::Accumulator => cpu.set_a(new),
        Location::Memory(addr) => mem.write(addr, new),
    }
    new
}

pub(crate) fn asl<C: CpuRegs>(cpu: &mut C, mem: &mut Memory, loc: Location) {
    rmw(cpu, mem, loc, |c, old| {
        let result = old << 1;
        c.evaluate(FlagEffect::Shift {
            result,
            carry: old & 0x80 != 0,
        });
        result
    });
}

pub(crate) fn lsr<C: CpuRegs>(cpu: &mut C, mem: &mut Memory, loc: Location) {
    rmw(cpu, mem, loc, |c, old| {
        let result = old >> 1;
        c.evaluate(FlagEffect::Shift {
            result,
            carry: old & 0x01 != 0,
        });
        result
    });
}

pub(crate) fn rol<C: CpuRegs>(cpu: &mut C, mem: &mut Memory, loc: Location) {
    rmw(cpu, mem, loc, |c, old| {
        let result = (old << 1) | c.is_flag_set(Status::CARRY) as u8;
        c.evaluate(FlagEffect::Shift {
            result,
            carry: old & 0x80 != 0,
        });
        result
    });
}

pub(crate) fn ror<C: CpuRegs>(cpu: &mut C, mem: &mut Memory, loc: Location) {
    rmw(cpu, mem, loc, |c, old| {
        let carry_in = if c.is_flag_set(Status::CARRY) { 0x80 } else { 0 };
        let result = (old >> 1) | carry_in;
        c.evaluate(FlagEffect::Shift {
            result,
            carry: old & 0x01 != 0,
        });
        result
    });
}

pub(crate) fn inc<C: CpuRegs>(cpu: &mut C, mem: &mut Memory, addr: u16) {
    let r = rmw(cpu, mem, Location::Memory(addr), |_, old| old.wrapping_add(1));
    cpu.update_zn(r);
}

pub(crate) fn dec<C: CpuRegs>(cpu: &mut C, mem: &mut Memory, addr: u16) {
    let r = rmw(cpu, mem, Location::Memory(addr), |_, old| old.wrapping_sub(1));
    cpu.update_zn(r);
}

// ---------------------------------------------------------------------------
// Branch helpers
// ---------------------------------------------------------------------------

/// Apply a resolved branch. PC must already point past the offset byte.
/// Returns extra cycles: 0 not taken, 1 taken, 2 taken across a page.
pub(crate) fn branch_cond<C: CpuRegs>(cpu: &mut C, offset: i8, take: bool) -> u32 {
    let next = cpu.pc();
    if !take {
        return 0;
    }
    let target = next.wrapping_add(offset as i16 as u16);
    cpu.set_pc(target);
    branch_penalty(true, next, target)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::CpuState;

    fn setup() -> (CpuState, Memory) {
        (CpuState::new(), Memory::new())
    }

    #[test]
    fn adc_overflow_and_carry() {
        let (mut cpu, _) = setup();
        cpu.a = 0x50;
        adc(&mut cpu, 0x50);
        assert_eq!(cpu.a, 0xA0);
        assert!(cpu.is_flag_set(Status::OVERFLOW));
        assert!(!cpu.is_flag_set(Status::CARRY));
        cpu.a = 0xF0;
        adc(&mut cpu, 0x20);
        assert_eq!(cpu.a, 0x10);
        assert!(cpu.is_flag_set(Status::CARRY));
        assert!(!cpu.is_flag_set(Status::OVERFLOW));
    }

    #[test]
    fn adc_uses_carry_in() {
        let (mut cpu, _) = setup();
        cpu.a = 0xFF;
        cpu.assign_flag(Status::CARRY, true);
        adc(&mut cpu, 0x00);
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.is_flag_set(Status::ZERO));
        assert!(cpu.is_flag_set(Status::CARRY));
    }

    #[test]
    fn adc_ignores_decimal_mode() {
        let (mut cpu, _) = setup();
        cpu.assign_flag(Status::DECIMAL, true);
        cpu.a = 0x09;
        adc(&mut cpu, 0x01);
        assert_eq!(cpu.a, 0x0A);
    }

    #[test]
    fn sbc_borrow_semantics() {
        let (mut cpu, _) = setup();
        cpu.a = 0x10;
        cpu.assign_flag(Status::CARRY, true);
        sbc(&mut cpu, 0x01);
        assert_eq!(cpu.a, 0x0F);
        assert!(cpu.is_flag_set(Status::CARRY));

        // Borrow pending: one extra subtracted.
        cpu.a = 0x10;
        cpu.assign_flag(Status::CARRY, false);
        sbc(&mut cpu, 0x01);
        assert_eq!(cpu.a, 0x0E);

        // Underflow clears carry.
        cpu.a = 0x00;
        cpu.assign_flag(Status::CARRY, true);
        sbc(&mut cpu, 0x01);
        assert_eq!(cpu.a, 0xFF);
        assert!(!cpu.is_flag_set(Status::CARRY));
        assert!(cpu.is_flag_set(Status::NEGATIVE));
    }

    #[test]
    fn sbc_signed_overflow() {
        let (mut cpu, _) = setup();
        cpu.a = 0x80;
        cpu.assign_flag(Status::CARRY, true);
        sbc(&mut cpu, 0x01);
        assert_eq!(cpu.a, 0x7F);
        assert!(cpu.is_flag_set(Status::OVERFLOW));
    }

    #[test]
    fn stack_push_pop_wraps_in_page_one() {
        let (mut cpu, mut mem) = setup(); // SP = $0100
        push(&mut cpu, &mut mem, 0xAB);
        assert_eq!(mem.read(0x0100), 0xAB);
        assert_eq!(cpu.sp, 0x01FF);
        assert_eq!(pop(&mut cpu, &mem), 0xAB);
        assert_eq!(cpu.sp, 0x0100);
    }

    #[test]
    fn push_word_layout() {
        let (mut cpu, mut mem) = setup();
        cpu.sp = 0x01FD;
        push_word(&mut cpu, &mut mem, 0xBEEF);
        assert_eq!(mem.read(0x01FD), 0xBE);
        assert_eq!(mem.read(0x01FC), 0xEF);
        assert_eq!(pop_word(&mut cpu, &mem), 0xBEEF);
        assert_eq!(cpu.sp, 0x01FD);
    }

    #[test]
    fn php_plp_round_trip() {
        let (mut cpu, mut mem) = setup();
        cpu.sp = 0x01FF;
        cpu.status = Status::CARRY | Status::NEGATIVE | Status::DECIMAL;
        php(&mut cpu, &mut mem);
        assert_eq!(mem.read(0x01FF), 0b1011_1001);
        cpu.status = Status::empty();
        plp(&mut cpu, &mem);
        assert_eq!(cpu.status, Status::CARRY | Status::NEGATIVE | Status::DECIMAL);
    }

    #[test]
    fn pla_sets_zn() {
        let (mut cpu, mut mem) = setup();
        cpu.sp = 0x01FF;
        push(&mut cpu, &mut mem, 0x00);
        cpu.a = 0x55;
        pla(&mut cpu, &mem);
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.is_flag_set(Status::ZERO));
    }

    #[test]
    fn transfers_and_stack_pointer() {
        let (mut cpu, _) = setup();
        cpu.x = 0xFD;
        txs(&mut cpu);
        assert_eq!(cpu.sp, 0x01FD);
        assert_eq!(cpu.status, Status::empty());
        cpu.x = 0;
        tsx(&mut cpu);
        assert_eq!(cpu.x, 0xFD);
        assert!(cpu.is_flag_set(Status::NEGATIVE));
    }

    #[test]
    fn rmw_accumulator_and_memory() {
        let (mut cpu, mut mem) = setup();
        cpu.a = 0x7C;
        asl(&mut cpu, &mut mem, Location::Accumulator);
        assert_eq!(cpu.a, 0xF8);
        assert!(!cpu.is_flag_set(Status::CARRY));
        assert!(cpu.is_flag_set(Status::NEGATIVE));

        mem.write(0x0200, 0x8D);
        lsr(&mut cpu, &mut mem, Location::Memory(0x0200));
        assert_eq!(mem.read(0x0200), 0x46);
        assert!(cpu.is_flag_set(Status::CARRY));
        assert!(!cpu.is_flag_set(Status::NEGATIVE));
    }

    #[test]
    fn rotates_through_carry() {
        let (mut cpu, mut mem) = setup();
        cpu.a = 0x80;
        rol(&mut cpu, &mut mem, Location::Accumulator);
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.is_flag_set(Status::CARRY));
        assert!(cpu.is_flag_set(Status::ZERO));
        ror(&mut cpu, &mut mem, Location::Accumulator);
        assert_eq!(cpu.a, 0x80);
        assert!(!cpu.is_flag_set(Status::CARRY));
    }

    #[test]
    fn inc_dec_memory_wrap() {
        let (mut cpu, mut mem) = setup();
        mem.write(0x10, 0xFF);
        inc(&mut cpu, &mut mem, 0x10);
        assert_eq!(mem.read(0x10), 0x00);
        assert!(cpu.is_flag_set(Status::ZERO));
        dec(&mut cpu, &mut mem, 0x10);
        assert_eq!(mem.read(0x10), 0xFF);
        assert!(cpu.is_flag_set(Status::NEGATIVE));
    }

    #[test]
    fn branch_cond_page_cross() {
        let (mut cpu, _) = setup();
        cpu.pc = 0x80FF;
        assert_eq!(branch_cond(&mut cpu, 0x02, true), 2);
        assert_eq!(cpu.pc, 0x8101);
        cpu.pc = 0x8010;
        assert_eq!(branch_cond(&mut cpu, -0x10, true), 1);
        assert_eq!(cpu.pc, 0x8000);
        assert_eq!(branch_cond(&mut cpu, 0x40, false), 0);
        assert_eq!(cpu.pc, 0x8000);
    }

    #[test]
    fn logical_and_bit() {
        let (mut cpu, _) = setup();
        lda(&mut cpu, 0x10);
        and(&mut cpu, 0x00);
        assert!(cpu.is_flag_set(Status::ZERO));
        ora(&mut cpu, 0x80);
        assert_eq!(cpu.a, 0x80);
        assert!(cpu.is_flag_set(Status::NEGATIVE));
        eor(&mut cpu, 0xFF);
        assert_eq!(cpu.a, 0x7F);
        bit(&mut cpu, 0x40);
        assert!(cpu.is_flag_set(Status::OVERFLOW));
        assert!(!cpu.is_flag_set(Status::ZERO));
        assert_eq!(cpu.a, 0x7F);
    }
}
