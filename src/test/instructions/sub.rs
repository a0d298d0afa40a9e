use crate::test::{compile_ok, emit_c_string, emit_source_string};
use crate::{Instruction, Stack};

#[test]
fn parses() {
    let program = compile_ok("2 1\nSUB A B C 2\nTER\n");
    assert_eq!(
        program.states[0],
        Instruction::Sub { target: Stack::A, left: Stack::B, right: Stack::C, next: 1 }
    );
}

#[test]
fn round_trips() {
    let program = compile_ok("2 1\nSUB A B C 2\nTER\n");
    assert_eq!(emit_source_string(&program), "2 1\nSUB A B C 2\nTER\n");
}

#[test]
fn avoids_negative_intermediates() {
    let program = compile_ok("2 1\nSUB A B C 2\nTER\n");
    let c = emit_c_string(&program);
    assert!(c.contains("(UINT64_C(998244353) + top[1][-1] - top[2][-1]) % UINT32_C(998244353)"));
}
