#![doc = r#"
NMOS 6502 CPU core.

Instruction-level emulation of the documented 6502 instruction set over a
flat 64 KiB memory, returning the cycle cost of every executed instruction.
The crate models the processor only: buses, devices, loaders and pacing
loops belong to the embedding machine.

Modules:
- config: construction-time options (illegal opcode policy, operand byte order)
- cpu: CPU core (facade + state + decode table + dispatch + execute modules)
- error: `CpuError`, returned by stepping
- memory: flat 64 KiB address space

Logging goes through the `log` facade; no logger is installed here.

In tests, shared builders are available under `crate::test_utils`.
"#]

pub mod config;
pub mod cpu;
pub mod error;
pub mod memory;

// Re-export commonly used types at the crate root for convenience.
pub use config::{CpuConfig, IllegalOpcodePolicy, OperandOrder};
pub use cpu::core::Cpu;
pub use cpu::flags::Status;
pub use error::CpuError;
pub use memory::Memory;

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
