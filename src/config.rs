/*!
config.rs - Construction-time options for the CPU core.

Two behaviours differ between the documented instruction set and the
programs this core runs, so they are selected here instead of hard-coded:

- `IllegalOpcodePolicy`: what happens when the fetched byte has no table
  entry (fault back to the embedder, or treat it as a 2-cycle no-op).
- `OperandOrder`: byte order of 16-bit words taken from the instruction
  stream (absolute operands, JSR/JMP targets) and of the JMP indirect
  vector. Zero-page pointers used by (ind,X) / (ind),Y are always read low
  byte first and are not affected.

With the `serde` feature enabled every type here derives
`Serialize`/`Deserialize`, so an embedder can keep CPU options next to the
rest of its machine configuration.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Handling of opcode bytes with no table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IllegalOpcodePolicy {
    /// Return `CpuError::IllegalOpcode` and leave PC on the offending byte.
    #[default]
    Fault,
    /// Skip the opcode byte and charge 2 cycles.
    Nop,
}

/// Byte order of 16-bit operands in the instruction stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OperandOrder {
    /// High byte first (`AD BC A1` loads from $BCA1).
    #[default]
    HighFirst,
    /// Low byte first, as on real silicon (`AD A1 BC` loads from $BCA1).
    LowFirst,
}

impl OperandOrder {
    /// Combine two bytes in stream order into a word.
    #[inline]
    pub fn word(self, first: u8, second: u8) -> u16 {
        match self {
            OperandOrder::HighFirst => u16::from_be_bytes([first, second]),
            OperandOrder::LowFirst => u16::from_le_bytes([first, second]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CpuConfig {
    pub illegal_opcodes: IllegalOpcodePolicy,
    pub operand_order: OperandOrder,
}

impl CpuConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_illegal_opcodes(mut self, policy: IllegalOpcodePolicy) -> Self {
        self.illegal_opcodes = policy;
        self
    }

    pub fn with_operand_order(mut self, order: OperandOrder) -> Self {
        self.operand_order = order;
        self
    }

    /// Real-hardware byte order with illegal opcodes treated as no-ops.
    pub fn hardware() -> Self {
        Self {
            illegal_opcodes: IllegalOpcodePolicy::Nop,
            operand_order: OperandOrder::LowFirst,
        }
    }
}
