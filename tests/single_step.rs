//! Single-instruction state tests in the `SingleStepTests` JSON layout.
//!
//! Each case gives the full register file plus the RAM bytes that matter
//! before and after one instruction, and the cycles that instruction costs.
//! Cases are inline so the suite needs no external data. They run with
//! `CpuConfig::hardware()` (low-byte-first operands), which is the byte
//! order the upstream vectors use.
//!
//! `p` is compared with B and bit 5 masked off: those bits only exist in the
//! byte PHP pushes, not in the register.

use nmos6502::{Cpu, CpuConfig, Status};
use serde::Deserialize;

/// JSON test case format.
#[derive(Deserialize)]
struct TestCase {
    name: String,
    initial: CpuState,
    #[serde(rename = "final")]
    final_state: CpuState,
    cycles: u32,
}

/// JSON CPU state format.
#[derive(Deserialize)]
struct CpuState {
    pc: u16,
    s: u8,
    a: u8,
    x: u8,
    y: u8,
    p: u8,
    ram: Vec<(u16, u8)>,
}

const REGISTER_ONLY_BITS: u8 = 0x30;

const CASES: &str = r#"[
  {
    "name": "ad lda abs negative",
    "initial": { "pc": 512, "s": 255, "a": 0, "x": 0, "y": 0, "p": 32,
                 "ram": [[512, 173], [513, 52], [514, 18], [4660, 128]] },
    "final":   { "pc": 515, "s": 255, "a": 128, "x": 0, "y": 0, "p": 160,
                 "ram": [[4660, 128]] },
    "cycles": 4
  },
  {
    "name": "b1 lda ind y page cross",
    "initial": { "pc": 512, "s": 255, "a": 0, "x": 0, "y": 1, "p": 32,
                 "ram": [[512, 177], [513, 66], [66, 255], [67, 3], [1024, 127]] },
    "final":   { "pc": 514, "s": 255, "a": 127, "x": 0, "y": 1, "p": 32,
                 "ram": [] },
    "cycles": 6
  },
  {
    "name": "20 jsr",
    "initial": { "pc": 768, "s": 255, "a": 0, "x": 0, "y": 0, "p": 32,
                 "ram": [[768, 32], [769, 0], [770, 64]] },
    "final":   { "pc": 16384, "s": 253, "a": 0, "x": 0, "y": 0, "p": 32,
                 "ram": [[511, 3], [510, 2]] },
    "cycles": 6
  },
  {
    "name": "60 rts",
    "initial": { "pc": 16384, "s": 253, "a": 0, "x": 0, "y": 0, "p": 32,
                 "ram": [[16384, 96], [510, 2], [511, 3]] },
    "final":   { "pc": 771, "s": 255, "a": 0, "x": 0, "y": 0, "p": 32,
                 "ram": [] },
    "cycles": 6
  },
  {
    "name": "6c jmp indirect page wrap",
    "initial": { "pc": 512, "s": 255, "a": 0, "x": 0, "y": 0, "p": 32,
                 "ram": [[512, 108], [513, 255], [514, 16], [4351, 52], [4096, 18], [4352, 238]] },
    "final":   { "pc": 4660, "s": 255, "a": 0, "x": 0, "y": 0, "p": 32,
                 "ram": [] },
    "cycles": 5
  },
  {
    "name": "08 php",
    "initial": { "pc": 512, "s": 255, "a": 0, "x": 0, "y": 0, "p": 227,
                 "ram": [[512, 8]] },
    "final":   { "pc": 513, "s": 254, "a": 0, "x": 0, "y": 0, "p": 227,
                 "ram": [[511, 243]] },
    "cycles": 3
  },
  {
    "name": "28 plp",
    "initial": { "pc": 512, "s": 254, "a": 0, "x": 0, "y": 0, "p": 32,
                 "ram": [[512, 40], [511, 255]] },
    "final":   { "pc": 513, "s": 255, "a": 0, "x": 0, "y": 0, "p": 239,
                 "ram": [] },
    "cycles": 4
  },
  {
    "name": "69 adc signed overflow",
    "initial": { "pc": 512, "s": 255, "a": 80, "x": 0, "y": 0, "p": 32,
                 "ram": [[512, 105], [513, 80]] },
    "final":   { "pc": 514, "s": 255, "a": 160, "x": 0, "y": 0, "p": 224,
                 "ram": [] },
    "cycles": 2
  },
  {
    "name": "e9 sbc borrow out",
    "initial": { "pc": 512, "s": 255, "a": 80, "x": 0, "y": 0, "p": 33,
                 "ram": [[512, 233], [513, 240]] },
    "final":   { "pc": 514, "s": 255, "a": 96, "x": 0, "y": 0, "p": 32,
                 "ram": [] },
    "cycles": 2
  },
  {
    "name": "d0 bne taken across page",
    "initial": { "pc": 765, "s": 255, "a": 0, "x": 0, "y": 0, "p": 32,
                 "ram": [[765, 208], [766, 5]] },
    "final":   { "pc": 772, "s": 255, "a": 0, "x": 0, "y": 0, "p": 32,
                 "ram": [] },
    "cycles": 4
  },
  {
    "name": "fe inc abs x",
    "initial": { "pc": 512, "s": 255, "a": 0, "x": 1, "y": 0, "p": 32,
                 "ram": [[512, 254], [513, 255], [514, 16], [4352, 127]] },
    "final":   { "pc": 515, "s": 255, "a": 0, "x": 1, "y": 0, "p": 160,
                 "ram": [[4352, 128]] },
    "cycles": 7
  },
  {
    "name": "ba tsx",
    "initial": { "pc": 512, "s": 128, "a": 0, "x": 0, "y": 0, "p": 32,
                 "ram": [[512, 186]] },
    "final":   { "pc": 513, "s": 128, "a": 0, "x": 128, "y": 0, "p": 160,
                 "ram": [] },
    "cycles": 2
  },
  {
    "name": "91 sta ind y page cross pays nothing extra",
    "initial": { "pc": 512, "s": 255, "a": 90, "x": 0, "y": 1, "p": 32,
                 "ram": [[512, 145], [513, 16], [16, 255], [17, 4]] },
    "final":   { "pc": 514, "s": 255, "a": 90, "x": 0, "y": 1, "p": 32,
                 "ram": [[1280, 90]] },
    "cycles": 6
  }
]"#;

/// Set up the CPU from the initial test state.
fn setup(cpu: &mut Cpu, state: &CpuState) {
    for &(addr, value) in &state.ram {
        cpu.memory_mut().write(addr, value);
    }
    cpu.set_pc(state.pc);
    cpu.set_sp(0x0100 | state.s as u16);
    cpu.set_a(state.a);
    cpu.set_x(state.x);
    cpu.set_y(state.y);
    cpu.set_status(Status::from_stack_byte(state.p));
}

/// Compare the CPU state against expected, returning a list of mismatches.
fn compare(cpu: &Cpu, expected: &CpuState) -> Vec<String> {
    let mut errors = Vec::new();

    if cpu.pc() != expected.pc {
        errors.push(format!("PC: got ${:04X}, want ${:04X}", cpu.pc(), expected.pc));
    }
    let s = cpu.sp() as u8;
    if s != expected.s {
        errors.push(format!("S: got ${s:02X}, want ${:02X}", expected.s));
    }
    if cpu.a() != expected.a {
        errors.push(format!("A: got ${:02X}, want ${:02X}", cpu.a(), expected.a));
    }
    if cpu.x() != expected.x {
        errors.push(format!("X: got ${:02X}, want ${:02X}", cpu.x(), expected.x));
    }
    if cpu.y() != expected.y {
        errors.push(format!("Y: got ${:02X}, want ${:02X}", cpu.y(), expected.y));
    }

    let actual_p = cpu.status().bits();
    let expected_p = expected.p & !REGISTER_ONLY_BITS;
    if actual_p != expected_p {
        errors.push(format!(
            "P: got ${actual_p:02X} ({actual_p:08b}), want ${expected_p:02X} ({expected_p:08b})"
        ));
    }

    for &(addr, expected_val) in &expected.ram {
        let actual_val = cpu.memory().read(addr);
        if actual_val != expected_val {
            errors.push(format!(
                "RAM[${addr:04X}]: got ${actual_val:02X}, want ${expected_val:02X}"
            ));
        }
    }

    errors
}

#[test]
fn inline_single_step_cases() {
    let tests: Vec<TestCase> = serde_json::from_str(CASES).expect("fixture parses");
    assert!(!tests.is_empty());

    let mut failures = Vec::new();
    for test in &tests {
        let mut cpu = Cpu::with_config(CpuConfig::hardware());
        setup(&mut cpu, &test.initial);

        let mut errors = match cpu.step() {
            Ok(cycles) if cycles == test.cycles => Vec::new(),
            Ok(cycles) => vec![format!("cycles: got {cycles}, want {}", test.cycles)],
            Err(e) => vec![format!("step failed: {e}")],
        };
        errors.extend(compare(&cpu, &test.final_state));

        if !errors.is_empty() {
            failures.push(format!("{}: {}", test.name, errors.join("; ")));
        }
    }

    assert!(failures.is_empty(), "{} failing:\n{}", failures.len(), failures.join("\n"));
}
