use crate::test::{compile_ok, emit_c_string, emit_source_string};
use crate::{Instruction, Stack};

#[test]
fn parses() {
    let program = compile_ok("2 1\nT01 A 2\nTER\n");
    assert_eq!(program.states[0], Instruction::SuffixSum { target: Stack::A, next: 1 });
}

#[test]
fn round_trips() {
    let program = compile_ok("2 1\nT01 A 2\nTER\n");
    assert_eq!(emit_source_string(&program), "2 1\nT01 A 2\nTER\n");
}

#[test]
fn consumes_the_length_cell_after_the_scan() {
    let program = compile_ok("2 1\nT01 A 2\nTER\n");
    let c = emit_c_string(&program);
    assert!(c.contains("ptr[i] += ptr[i - 1];"));
    assert!(c.contains("--top[0];"));
}

#[test]
fn requires_k_cells_beneath_the_length() {
    let program = compile_ok("2 1\nT01 A 2\nTER\n");
    let c = emit_c_string(&program);
    assert!(c.contains("if (top[0] - 1 - stack[0] < k)\n      return 3;"));
}
