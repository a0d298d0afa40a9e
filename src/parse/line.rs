//! Per-mnemonic line parsers, dispatched by mnemonic token.
//!
//! Operand orders mirror the reference parser's dispatch table exactly,
//! including `CMP`'s surface order (`right left alternative consequent`)
//! which differs from its semantic field order.

use crate::instr::Instruction;
use crate::parse::cursor::Cursor;

/// Parses one instruction line's operands, given its mnemonic has already
/// been consumed. `n` is the total state count, for `expect_state` bounds.
pub fn parse_operands(cursor: &mut Cursor, n: usize, mnemonic: &str) -> Option<Instruction> {
    match mnemonic {
        "TER" => {
            if !cursor.expect_newline() {
                return None;
            }
            Some(Instruction::Terminate)
        }
        "PUS" => {
            if !cursor.expect_space() {
                return None;
            }
            let target = cursor.expect_stack()?;
            if !cursor.expect_space() {
                return None;
            }
            let val = cursor.expect_value()?;
            if !cursor.expect_space() {
                return None;
            }
            let next = cursor.expect_state(n)?;
            if !cursor.expect_newline() {
                return None;
            }
            Some(Instruction::Push { target, val, next })
        }
        "POP" => {
            if !cursor.expect_space() {
                return None;
            }
            let target = cursor.expect_stack()?;
            if !cursor.expect_space() {
                return None;
            }
            let next = cursor.expect_state(n)?;
            if !cursor.expect_newline() {
                return None;
            }
            Some(Instruction::Pop { target, next })
        }
        "MOV" => {
            if !cursor.expect_space() {
                return None;
            }
            let target = cursor.expect_stack()?;
            if !cursor.expect_space() {
                return None;
            }
            let from = cursor.expect_stack()?;
            if !cursor.expect_space() {
                return None;
            }
            let next = cursor.expect_state(n)?;
            if !cursor.expect_newline() {
                return None;
            }
            Some(Instruction::Move { target, from, next })
        }
        "CPY" => {
            if !cursor.expect_space() {
                return None;
            }
            let target = cursor.expect_stack()?;
            if !cursor.expect_space() {
                return None;
            }
            let from = cursor.expect_stack()?;
            if !cursor.expect_space() {
                return None;
            }
            let next = cursor.expect_state(n)?;
            if !cursor.expect_newline() {
                return None;
            }
            Some(Instruction::Copy { target, from, next })
        }
        "ADD" | "SUB" | "MUL" | "DIV" | "MOD" => {
            if !cursor.expect_space() {
                return None;
            }
            let target = cursor.expect_stack()?;
            if !cursor.expect_space() {
                return None;
            }
            let left = cursor.expect_stack()?;
            if !cursor.expect_space() {
                return None;
            }
            let right = cursor.expect_stack()?;
            if !cursor.expect_space() {
                return None;
            }
            let next = cursor.expect_state(n)?;
            if !cursor.expect_newline() {
                return None;
            }
            Some(match mnemonic {
                "ADD" => Instruction::Add { target, left, right, next },
                "SUB" => Instruction::Sub { target, left, right, next },
                "MUL" => Instruction::Mul { target, left, right, next },
                "DIV" => Instruction::Div { target, left, right, next },
                "MOD" => Instruction::Mod { target, left, right, next },
                _ => unreachable!(),
            })
        }
        "EMP" => {
            if !cursor.expect_space() {
                return None;
            }
            let target = cursor.expect_stack()?;
            if !cursor.expect_space() {
                return None;
            }
            let consequent = cursor.expect_state(n)?;
            if !cursor.expect_space() {
                return None;
            }
            let alternative = cursor.expect_state(n)?;
            if !cursor.expect_newline() {
                return None;
            }
            Some(Instruction::Empty { target, consequent, alternative })
        }
        "CMP" => {
            if !cursor.expect_space() {
                return None;
            }
            let right = cursor.expect_stack()?;
            if !cursor.expect_space() {
                return None;
            }
            let left = cursor.expect_stack()?;
            if !cursor.expect_space() {
                return None;
            }
            let alternative = cursor.expect_state(n)?;
            if !cursor.expect_space() {
                return None;
            }
            let consequent = cursor.expect_state(n)?;
            if !cursor.expect_newline() {
                return None;
            }
            Some(Instruction::Less { left, right, consequent, alternative })
        }
        "T00" | "T01" => {
            if !cursor.expect_space() {
                return None;
            }
            let target = cursor.expect_stack()?;
            if !cursor.expect_space() {
                return None;
            }
            let next = cursor.expect_state(n)?;
            if !cursor.expect_newline() {
                return None;
            }
            Some(if mnemonic == "T00" {
                Instruction::PrefixSum { target, next }
            } else {
                Instruction::SuffixSum { target, next }
            })
        }
        _ => None,
    }
}
