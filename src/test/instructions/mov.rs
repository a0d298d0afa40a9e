use crate::test::{compile_ok, emit_c_string, emit_source_string};
use crate::{Instruction, Stack};

#[test]
fn parses() {
    let program = compile_ok("2 1\nMOV A B 2\nTER\n");
    assert_eq!(
        program.states[0],
        Instruction::Move { target: Stack::A, from: Stack::B, next: 1 }
    );
}

#[test]
fn round_trips() {
    let program = compile_ok("2 1\nMOV A B 2\nTER\n");
    assert_eq!(emit_source_string(&program), "2 1\nMOV A B 2\nTER\n");
}

#[test]
fn pops_from_before_pushing_to_target() {
    let program = compile_ok("2 1\nMOV A B 2\nTER\n");
    let c = emit_c_string(&program);
    let pop_idx = c.find("--top[1];").unwrap();
    let push_idx = c.find("*top[0] = *top[1];").unwrap();
    assert!(pop_idx < push_idx);
}
