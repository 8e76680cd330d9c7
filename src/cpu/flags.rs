/*!
flags.rs - Processor status register and the flag evaluator.

6502 Status Register Bit Layout
===============================
Bit: 7 6 5 4 3 2 1 0
     N V 1 B D I Z C

`Status` holds only N, V, D, I, Z and C. B and bit 5 are not flags: they
exist solely in the byte PHP pushes (`BREAK_BIT` / `UNUSED_BIT`, both set
there) and are discarded again by PLP / RTI. Any `Status` built with
`from_bits_retain` carrying those bits is masked back to the six flags by
every register setter.

Flag Evaluator
==============
Instruction handlers describe the flag-relevant outcome of an operation as a
`FlagEffect` and hand it to `Status::evaluate` once the data effect has been
applied. Each variant touches exactly the flags its instruction class
affects; every other flag is left as it was.

| Effect       | N | Z | C | V |
|--------------|---|---|---|---|
| Result       | x | x |   |   |
| Arithmetic   | x | x | x | x |
| Compare      | x | x | x |   |
| Shift        | x | x | x |   |
| BitTest      | x | x |   | x |
*/

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const IRQ_DISABLE = 0b0000_0100;
        // Toggled by SED/CLD only; ADC/SBC stay binary.
        const DECIMAL = 0b0000_1000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::empty()
    }
}

/// Bit 4 of a pushed status byte.
pub const BREAK_BIT: u8 = 0b0001_0000;
/// Bit 5 of a pushed status byte; reads as 1 on hardware.
pub const UNUSED_BIT: u8 = 0b0010_0000;

/// Flag-relevant outcome of one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagEffect {
    /// Loads, transfers, logical ops, INC/DEC: Z and N from the result.
    Result(u8),
    /// ADC, and SBC with `operand` already complemented.
    Arithmetic {
        a: u8,
        operand: u8,
        result: u8,
        carry: bool,
    },
    /// CMP/CPX/CPY: `register - operand` with the result discarded.
    Compare { register: u8, operand: u8 },
    /// ASL/LSR/ROL/ROR: `carry` is the bit shifted out.
    Shift { result: u8, carry: bool },
    /// BIT: Z from `a & operand`, N and V copied from operand bits 7 and 6.
    BitTest { a: u8, operand: u8 },
}

impl Status {
    /// Build from a pulled stack byte (PLP / RTI): B and bit 5 are dropped.
    #[inline]
    pub fn from_stack_byte(byte: u8) -> Self {
        Status::from_bits_truncate(byte)
    }

    /// Drop any bit outside the six register flags.
    #[inline]
    pub fn stored(self) -> Self {
        self & Status::all()
    }

    /// Byte pushed by PHP: stored flags plus B and bit 5.
    #[inline]
    pub fn to_stack_byte(self) -> u8 {
        self.stored().bits() | BREAK_BIT | UNUSED_BIT
    }

    #[inline]
    pub fn carry(self) -> bool {
        self.contains(Status::CARRY)
    }
    #[inline]
    pub fn zero(self) -> bool {
        self.contains(Status::ZERO)
    }
    #[inline]
    pub fn irq_disable(self) -> bool {
        self.contains(Status::IRQ_DISABLE)
    }
    #[inline]
    pub fn decimal(self) -> bool {
        self.contains(Status::DECIMAL)
    }
    #[inline]
    pub fn overflow(self) -> bool {
        self.contains(Status::OVERFLOW)
    }
    #[inline]
    pub fn negative(self) -> bool {
        self.contains(Status::NEGATIVE)
    }

    #[inline]
    fn update_zn(&mut self, result: u8) {
        self.set(Status::ZERO, result == 0);
        self.set(Status::NEGATIVE, result & 0x80 != 0);
    }

    /// Apply the flag rules for a completed operation.
    pub fn evaluate(&mut self, effect: FlagEffect) {
        match effect {
            FlagEffect::Result(r) => self.update_zn(r),
            FlagEffect::Arithmetic {
                a,
                operand,
                result,
                carry,
            } => {
                self.update_zn(result);
                self.set(Status::CARRY, carry);
                // Operands share a sign and the result does not.
                self.set(Status::OVERFLOW, (!(a ^ operand)) & (a ^ result) & 0x80 != 0);
            }
            FlagEffect::Compare { register, operand } => {
                self.update_zn(register.wrapping_sub(operand));
                self.set(Status::CARRY, register >= operand);
            }
            FlagEffect::Shift { result, carry } => {
                self.update_zn(result);
                self.set(Status::CARRY, carry);
            }
            FlagEffect::BitTest { a, operand } => {
                self.set(Status::ZERO, a & operand == 0);
                self.set(Status::NEGATIVE, operand & 0x80 != 0);
                self.set(Status::OVERFLOW, operand & 0x40 != 0);
            }
        }
    }
}
