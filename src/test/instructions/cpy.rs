use crate::test::{compile_ok, emit_c_string, emit_source_string};
use crate::{Instruction, Stack};

#[test]
fn parses() {
    let program = compile_ok("2 1\nCPY A B 2\nTER\n");
    assert_eq!(
        program.states[0],
        Instruction::Copy { target: Stack::A, from: Stack::B, next: 1 }
    );
}

#[test]
fn round_trips() {
    let program = compile_ok("2 1\nCPY A B 2\nTER\n");
    assert_eq!(emit_source_string(&program), "2 1\nCPY A B 2\nTER\n");
}

#[test]
fn empty_source_is_a_non_destructive_read_error() {
    let program = compile_ok("2 1\nCPY A B 2\nTER\n");
    let c = emit_c_string(&program);
    assert!(c.contains("if (top[1] == stack[1])\n    return 3;"));
}
