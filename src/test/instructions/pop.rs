use crate::test::{compile_ok, diagnostic_messages, emit_source_string};
use crate::{Instruction, Stack};

#[test]
fn parses() {
    let program = compile_ok("2 1\nPOP C 2\nTER\n");
    assert_eq!(program.states[0], Instruction::Pop { target: Stack::C, next: 1 });
}

#[test]
fn round_trips() {
    let program = compile_ok("2 1\nPOP A 2\nTER\n");
    assert_eq!(emit_source_string(&program), "2 1\nPOP A 2\nTER\n");
}

#[test]
fn rejects_out_of_bounds_successor() {
    let msgs = diagnostic_messages("2 1\nPOP A 3\nTER\n");
    assert_eq!(msgs, vec!["state out of bounds"]);
}

#[test]
fn rejects_state_zero_with_hint() {
    let msgs = diagnostic_messages("2 1\nPOP A 0\nTER\n");
    assert_eq!(msgs, vec!["invalid state; did you mean state 1?"]);
}
