/*!
addressing.rs - 6502 addressing modes and operand resolution

Overview
========
Provides:
- Instruction stream byte/word fetch
- Effective address calculation for every documented addressing mode
- Page-cross reporting for the indexed modes (cycle penalty input)
- The NMOS JMP (indirect) page-wrap quirk

Scope & Responsibilities
=======================
- Pure operand resolution: consume operand bytes at PC, advance PC, compute
  the effective address. Nothing here reads the *operand value* of a
  memory-mode instruction; handlers do that so stores never read.
- No cycle arithmetic. `Resolved::page_crossed` is reported for every
  indexed mode and `cycles.rs` decides whether it costs anything.

Caller Assumptions
==================
- PC points at the first operand byte (opcode already consumed).
- Callers advance PC exclusively via these helpers.

Byte Order
==========
Words taken from the instruction stream follow the configured
`OperandOrder`. Zero-page pointers for (ind,X) and (ind),Y are always read
low byte first, with the second byte wrapping inside page zero.
*/

use crate::config::OperandOrder;
use crate::cpu::regs::CpuRegs;
use crate::memory::Memory;

/// Documented 6502 addressing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    /// JMP ($nnnn) only.
    Indirect,
    /// ($nn,X)
    IndirectX,
    /// ($nn),Y
    IndirectY,
    Relative,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY
            | AddressingMode::Relative => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// What an instruction operates on once its operand bytes are consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    None,
    Accumulator,
    Immediate(u8),
    Address(u16),
    Relative(i8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub operand: Operand,
    pub page_crossed: bool,
}

impl Resolved {
    fn plain(operand: Operand) -> Self {
        Self {
            operand,
            page_crossed: false,
        }
    }

    fn indexed(base: u16, addr: u16) -> Self {
        Self {
            operand: Operand::Address(addr),
            page_crossed: crosses_page(base, addr),
        }
    }
}

/// True when `a` and `b` lie on different 256-byte pages.
#[inline]
pub fn crosses_page(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Resolve the operand for `mode`, consuming its operand bytes.
pub fn resolve<C: CpuRegs>(
    mode: AddressingMode,
    cpu: &mut C,
    mem: &Memory,
    order: OperandOrder,
) -> Resolved {
    match mode {
        AddressingMode::Implied => Resolved::plain(Operand::None),
        AddressingMode::Accumulator => Resolved::plain(Operand::Accumulator),
        AddressingMode::Immediate => Resolved::plain(Operand::Immediate(fetch_byte(cpu, mem))),
        AddressingMode::ZeroPage => Resolved::plain(Operand::Address(addr_zp(cpu, mem))),
        AddressingMode::ZeroPageX => Resolved::plain(Operand::Address(addr_zp_x(cpu, mem))),
        AddressingMode::ZeroPageY => Resolved::plain(Operand::Address(addr_zp_y(cpu, mem))),
        AddressingMode::Absolute => Resolved::plain(Operand::Address(addr_abs(cpu, mem, order))),
        AddressingMode::AbsoluteX => {
            let (base, addr) = addr_abs_x(cpu, mem, order);
            Resolved::indexed(base, addr)
        }
        AddressingMode::AbsoluteY => {
            let (base, addr) = addr_abs_y(cpu, mem, order);
            Resolved::indexed(base, addr)
        }
        AddressingMode::Indirect => {
            Resolved::plain(Operand::Address(addr_indirect(cpu, mem, order)))
        }
        AddressingMode::IndirectX => Resolved::plain(Operand::Address(addr_ind_x(cpu, mem))),
        AddressingMode::IndirectY => {
            let (base, addr) = addr_ind_y(cpu, mem);
            Resolved::indexed(base, addr)
        }
        AddressingMode::Relative => Resolved::plain(Operand::Relative(fetch_byte(cpu, mem) as i8)),
    }
}

// -------------------------
// Instruction stream fetch
// -------------------------

/// Fetch next byte from the instruction stream, incrementing PC.
#[inline]
pub fn fetch_byte<C: CpuRegs>(cpu: &mut C, mem: &Memory) -> u8 {
    let pc = cpu.pc();
    let v = mem.read(pc);
    cpu.set_pc(pc.wrapping_add(1));
    v
}

/// Fetch next word in `order`, incrementing PC twice.
#[inline]
pub fn fetch_word<C: CpuRegs>(cpu: &mut C, mem: &Memory, order: OperandOrder) -> u16 {
    let first = fetch_byte(cpu, mem);
    let second = fetch_byte(cpu, mem);
    order.word(first, second)
}

// -------------------------
// Per-mode helpers
// -------------------------

#[inline]
pub fn addr_zp<C: CpuRegs>(cpu: &mut C, mem: &Memory) -> u16 {
    fetch_byte(cpu, mem) as u16
}

#[inline]
pub fn addr_zp_x<C: CpuRegs>(cpu: &mut C, mem: &Memory) -> u16 {
    fetch_byte(cpu, mem).wrapping_add(cpu.x()) as u16
}

#[inline]
pub fn addr_zp_y<C: CpuRegs>(cpu: &mut C, mem: &Memory) -> u16 {
    fetch_byte(cpu, mem).wrapping_add(cpu.y()) as u16
}

#[inline]
pub fn addr_abs<C: CpuRegs>(cpu: &mut C, mem: &Memory, order: OperandOrder) -> u16 {
    fetch_word(cpu, mem, order)
}

/// Returns `(base, effective)`.
#[inline]
pub fn addr_abs_x<C: CpuRegs>(cpu: &mut C, mem: &Memory, order: OperandOrder) -> (u16, u16) {
    let base = fetch_word(cpu, mem, order);
    (base, base.wrapping_add(cpu.x() as u16))
}

/// Returns `(base, effective)`.
#[inline]
pub fn addr_abs_y<C: CpuRegs>(cpu: &mut C, mem: &Memory, order: OperandOrder) -> (u16, u16) {
    let base = fetch_word(cpu, mem, order);
    (base, base.wrapping_add(cpu.y() as u16))
}

#[inline]
pub fn addr_ind_x<C: CpuRegs>(cpu: &mut C, mem: &Memory) -> u16 {
    let zp = fetch_byte(cpu, mem).wrapping_add(cpu.x());
    read_word_zp(mem, zp)
}

/// Returns `(base, effective)`.
#[inline]
pub fn addr_ind_y<C: CpuRegs>(cpu: &mut C, mem: &Memory) -> (u16, u16) {
    let zp = fetch_byte(cpu, mem);
    let base = read_word_zp(mem, zp);
    (base, base.wrapping_add(cpu.y() as u16))
}

#[inline]
pub fn addr_indirect<C: CpuRegs>(cpu: &mut C, mem: &Memory, order: OperandOrder) -> u16 {
    let vector = fetch_word(cpu, mem, order);
    read_word_indirect_bug(mem, vector, order)
}

// -------------------------
// Low-level word helpers
// -------------------------

/// Read a little-endian pointer from zero page; the high byte comes from
/// `(base + 1) & 0xFF`, never from page one.
#[inline]
pub fn read_word_zp(mem: &Memory, base: u8) -> u16 {
    let lo = mem.read(base as u16);
    let hi = mem.read(base.wrapping_add(1) as u16);
    u16::from_le_bytes([lo, hi])
}

/// NMOS JMP (indirect) quirk: the second vector byte is fetched from the
/// same page, so a vector at $xxFF pairs with $xx00.
#[inline]
pub fn read_word_indirect_bug(mem: &Memory, addr: u16, order: OperandOrder) -> u16 {
    let second = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
    order.word(mem.read(addr), mem.read(second))
}
