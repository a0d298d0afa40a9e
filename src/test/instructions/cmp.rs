use crate::test::{compile_ok, emit_c_string, emit_source_string};
use crate::{Instruction, Stack};

#[test]
fn surface_order_is_right_left_alternative_consequent() {
    // "CMP B A 3 2" with N >= 3: right=B, left=A, alternative=(3-1), consequent=(2-1).
    let program = compile_ok("3 1\nCMP B A 3 2\nTER\nTER\n");
    assert_eq!(
        program.states[0],
        Instruction::Less { left: Stack::A, right: Stack::B, consequent: 1, alternative: 2 }
    );
}

#[test]
fn round_trips_preserving_surface_order() {
    let program = compile_ok("3 1\nCMP B A 3 2\nTER\nTER\n");
    assert_eq!(emit_source_string(&program), "3 1\nCMP B A 3 2\nTER\nTER\n");
}

#[test]
fn branches_on_left_less_than_right() {
    let program = compile_ok("3 1\nCMP B A 3 2\nTER\nTER\n");
    let c = emit_c_string(&program);
    assert!(c.contains("if (top[0][-1] < top[1][-1])\n    goto state_1;\n  else\n    goto state_2;"));
}
