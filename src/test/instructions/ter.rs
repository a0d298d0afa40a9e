use crate::test::{compile_ok, diagnostic_messages, emit_source_string};
use crate::Instruction;

#[test]
fn parses() {
    let program = compile_ok("1 1\nTER\n");
    assert_eq!(program.states, vec![Instruction::Terminate]);
    assert_eq!(program.init, 0);
}

#[test]
fn round_trips() {
    let program = compile_ok("1 1\nTER\n");
    assert_eq!(emit_source_string(&program), "1 1\nTER\n");
}

#[test]
fn rejects_trailing_garbage_on_the_line() {
    let msgs = diagnostic_messages("1 1\nTER garbage\n");
    assert_eq!(msgs, vec!["expected newline"]);
}
