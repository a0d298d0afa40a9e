use crate::test::{compile_ok, emit_c_string, emit_source_string};
use crate::{Instruction, Stack};

#[test]
fn parses() {
    let program = compile_ok("2 1\nT00 A 2\nTER\n");
    assert_eq!(program.states[0], Instruction::PrefixSum { target: Stack::A, next: 1 });
}

#[test]
fn round_trips() {
    let program = compile_ok("2 1\nT00 A 2\nTER\n");
    assert_eq!(emit_source_string(&program), "2 1\nT00 A 2\nTER\n");
}

#[test]
fn consumes_the_length_cell_after_the_scan() {
    // The length cell k is not pushed back: top[target] is decremented once
    // after the in-place transform, so the net stack count drops by one.
    let program = compile_ok("2 1\nT00 A 2\nTER\n");
    let c = emit_c_string(&program);
    assert!(c.contains("ptr[k - i - 1] += ptr[k - i];"));
    assert!(c.contains("--top[0];"));
}
