use crate::test::{compile_ok, emit_c_string, emit_source_string};
use crate::{Instruction, Stack};

#[test]
fn parses() {
    let program = compile_ok("2 1\nMOD A B C 2\nTER\n");
    assert_eq!(
        program.states[0],
        Instruction::Mod { target: Stack::A, left: Stack::B, right: Stack::C, next: 1 }
    );
}

#[test]
fn round_trips() {
    let program = compile_ok("2 1\nMOD A B C 2\nTER\n");
    assert_eq!(emit_source_string(&program), "2 1\nMOD A B C 2\nTER\n");
}

#[test]
fn zero_divisor_exits_four() {
    let program = compile_ok("2 1\nMOD A B C 2\nTER\n");
    let c = emit_c_string(&program);
    assert!(c.contains("if (top[2][-1] == 0)\n    return 4;"));
    assert!(c.contains("top[1][-1] % top[2][-1];"));
}
