/*!
core::Cpu - 6502 CPU facade owning registers, memory and configuration.

Design
======
- `Cpu` stores `state: CpuState`, `memory: Memory` and `config: CpuConfig`.
- Public API: construction, reset, stepping (`execute`, `step`, `run`),
  register and flag accessors, memory access and the IRQ/NMI latches.
- Execution delegates to the generic dispatcher operating on `CpuState`
  through the `CpuRegs` trait.

Loading programs is the embedder's job: write bytes through `memory_mut()`
and point PC at them with `set_pc`.
*/

use crate::config::CpuConfig;
use crate::cpu::flags::Status;
use crate::cpu::state::CpuState;
use crate::error::CpuError;
use crate::memory::Memory;

#[derive(Debug, Clone, Default)]
pub struct Cpu {
    state: CpuState,
    memory: Memory,
    config: CpuConfig,
}

impl Cpu {
    /// Construct a new CPU with power-up defaults and the default config.
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    pub fn with_config(config: CpuConfig) -> Self {
        log::debug!("cpu created with {config:?}");
        Self {
            state: CpuState::new(),
            memory: Memory::new(),
            config,
        }
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Return immutable reference to internal state (for inspection / testing).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Registers back to power-on values, memory cleared.
    pub fn reset(&mut self) {
        self.state.reset();
        self.memory.reset();
        log::debug!(
            "cpu reset: PC=${:04X} SP=${:04X}",
            self.state.pc,
            self.state.sp
        );
    }

    // ---------------------------------------------------------------------
    // Execution
    // ---------------------------------------------------------------------

    /// Execute exactly one instruction and return the cycles it took.
    ///
    /// `cycle_hint` is accepted for embedders that pace by cycle budget; the
    /// core always runs one whole instruction regardless of its value.
    pub fn execute(&mut self, _cycle_hint: u32) -> Result<u32, CpuError> {
        crate::cpu::dispatch::step(&mut self.state, &mut self.memory, &self.config)
    }

    /// `execute(0)`.
    pub fn step(&mut self) -> Result<u32, CpuError> {
        self.execute(0)
    }

    /// Run `max_instructions` instructions and return the total cycles
    /// consumed. The first dispatcher error ends the run.
    pub fn run(&mut self, max_instructions: usize) -> Result<u64, CpuError> {
        let mut total = 0u64;
        for _ in 0..max_instructions {
            total += self.step()? as u64;
        }
        Ok(total)
    }

    // ---------------------------------------------------------------------
    // Register accessors
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn sp(&self) -> u16 {
        self.state.sp
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    pub fn status(&self) -> Status {
        self.state.status
    }

    pub fn set_a(&mut self, v: u8) {
        self.state.a = v;
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.x = v;
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.y = v;
    }
    pub fn set_sp(&mut self, v: u16) {
        self.state.sp = v;
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.pc = v;
    }
    /// Bits outside the six flags (B, bit 5) are dropped.
    pub fn set_status(&mut self, v: Status) {
        self.state.status = v.stored();
    }

    // ---------------------------------------------------------------------
    // Flag helpers
    // ---------------------------------------------------------------------
    pub fn flag(&self, flag: Status) -> bool {
        self.state.is_flag_set(flag)
    }

    pub fn set_flag(&mut self, flag: Status, on: bool) {
        self.state.assign_flag(flag, on);
    }

    // ---------------------------------------------------------------------
    // Interrupt latches (stored only; never serviced by the core)
    // ---------------------------------------------------------------------
    pub fn set_irq_pending(&mut self, pending: bool) {
        self.state.irq_pending = pending;
    }
    pub fn set_nmi_pending(&mut self, pending: bool) {
        self.state.nmi_pending = pending;
    }
    pub fn irq_pending(&self) -> bool {
        self.state.irq_pending
    }
    pub fn nmi_pending(&self) -> bool {
        self.state.nmi_pending
    }
}
