//! Shared test utilities for setting up a CPU with a program in memory.
//!
//! There is no loader in the crate; these helpers do what an embedder
//! would: copy bytes into memory and point PC at them.

#![allow(dead_code)]

use crate::config::CpuConfig;
use crate::cpu::core::Cpu;

/// Default-config CPU with `program` loaded at `origin` and PC on its first byte.
pub fn cpu_with_program(origin: u16, program: &[u8]) -> Cpu {
    cpu_with_config(CpuConfig::default(), origin, program)
}

pub fn cpu_with_config(config: CpuConfig, origin: u16, program: &[u8]) -> Cpu {
    let mut cpu = Cpu::with_config(config);
    cpu.memory_mut().load(origin, program);
    cpu.set_pc(origin);
    cpu
}

/// Step `n` instructions, summing cycles. Panics on a dispatcher error.
pub fn step_n(cpu: &mut Cpu, n: usize) -> u32 {
    (0..n)
        .map(|i| match cpu.step() {
            Ok(c) => c,
            Err(e) => panic!("step {i} failed: {e}"),
        })
        .sum()
}
