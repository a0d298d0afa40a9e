//! Source-to-program compilation: the driver algorithm and its result.

mod cursor;
mod line;

use crate::constants::MAX_STATES;
use crate::diagnostic::Diagnostic;
use crate::instr::Instruction;
use crate::program::Program;

use cursor::Cursor;

/// The outcome of [`compile`]: a (possibly partial) program plus every
/// diagnostic produced while parsing it.
pub struct CompileResult {
    pub diagnostics: Vec<Diagnostic>,
    pub program: Program,
}

const KNOWN_MNEMONICS: &[&str] = &[
    "TER", "PUS", "POP", "MOV", "CPY", "ADD", "SUB", "MUL", "DIV", "MOD", "EMP", "CMP", "T00",
    "T01",
];

/// Parses `source` into a program, recovering from malformed lines by
/// skipping to the next `'\n'` and continuing. Header errors (invalid or
/// out-of-range state count, invalid initial state) abandon parsing
/// immediately, matching the reference driver.
pub fn compile(source: &str) -> CompileResult {
    let mut cursor = Cursor::new(source);

    cursor.skip_space();
    let n = match cursor.expect_state_count(MAX_STATES) {
        Some(n) => n,
        None => {
            return CompileResult {
                diagnostics: cursor.diagnostics,
                program: Program::new(vec![Instruction::Terminate], 0),
            }
        }
    };

    let mut states = vec![Instruction::Terminate; n];

    if !cursor.expect_space() {
        return CompileResult { diagnostics: cursor.diagnostics, program: Program::new(states, 0) };
    }
    let init = match cursor.expect_state(n) {
        Some(i) => i,
        None => {
            return CompileResult {
                diagnostics: cursor.diagnostics,
                program: Program::new(states, 0),
            }
        }
    };
    if !cursor.expect_newline() {
        return CompileResult { diagnostics: cursor.diagnostics, program: Program::new(states, init) };
    }

    for slot in states.iter_mut() {
        cursor.skip_separator();
        match parse_line(&mut cursor, n) {
            Some(instr) => *slot = instr,
            None => cursor.skip_line(),
        }
    }

    cursor.expect_eof();

    CompileResult { diagnostics: cursor.diagnostics, program: Program::new(states, init) }
}

fn parse_line(cursor: &mut Cursor, n: usize) -> Option<Instruction> {
    let (mnemonic, begin, end) = cursor.expect_mnemonic()?;
    if !KNOWN_MNEMONICS.contains(&mnemonic) {
        cursor.unknown_mnemonic(begin, end);
        return None;
    }
    line::parse_operands(cursor, n, mnemonic)
}
