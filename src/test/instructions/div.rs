use crate::test::{compile_ok, emit_c_string, emit_source_string};
use crate::{Instruction, Stack};

#[test]
fn parses() {
    let program = compile_ok("2 1\nDIV A B C 2\nTER\n");
    assert_eq!(
        program.states[0],
        Instruction::Div { target: Stack::A, left: Stack::B, right: Stack::C, next: 1 }
    );
}

#[test]
fn round_trips() {
    let program = compile_ok("2 1\nDIV A B C 2\nTER\n");
    assert_eq!(emit_source_string(&program), "2 1\nDIV A B C 2\nTER\n");
}

#[test]
fn checks_the_divisor_before_dividing() {
    let program = compile_ok("2 1\nDIV A B C 2\nTER\n");
    let c = emit_c_string(&program);
    let zero_check = c.find("if (top[2][-1] == 0)").unwrap();
    let exit_four = c.find("return 4;").unwrap();
    let division = c.find("top[1][-1] / top[2][-1];").unwrap();
    assert!(zero_check < exit_four);
    assert!(exit_four < division);
}
