/*!
cpu::mod - Public facade for the 6502 CPU core.

Layout:

```text
    state.rs        - Register file + execution latches.
    flags.rs        - `Status` bitflags and the `FlagEffect` evaluator.
    regs.rs         - `CpuRegs` trait the semantic helpers are generic over.
    addressing.rs   - Addressing modes, operand resolution, page-cross reports.
    cycles.rs       - Page-cross and branch penalty rules.
    table.rs        - 256-entry opcode decode table.
    execute.rs      - Instruction semantic helpers (ALU, stack, RMW, branch).
    dispatch/       - One step: fetch, decode, resolve, family handlers.
    core/           - The `Cpu` facade.
```

Usage:
```rust
use nmos6502::Cpu;

let mut cpu = Cpu::new();
cpu.memory_mut().load(0x0200, &[0xA9, 0x42]); // LDA #$42
cpu.set_pc(0x0200);
assert_eq!(cpu.step(), Ok(2));
assert_eq!(cpu.a(), 0x42);
```
*/

pub mod addressing;
pub mod core;
pub mod cycles;
pub(crate) mod dispatch;
pub(crate) mod execute;
pub mod flags;
pub mod regs;
pub mod state;
pub mod table;

pub use crate::cpu::core::Cpu;
pub use crate::cpu::flags::{FlagEffect, Status};
pub use crate::cpu::regs::CpuRegs;
pub use crate::cpu::state::CpuState;
pub use crate::cpu::table::{Instruction, Operation};
