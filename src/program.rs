//! A whole compiled program: its states and its entry point.

use std::io::{self, Write};

use crate::codegen;
use crate::instr::Instruction;

/// An ordered sequence of instructions plus an entry state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    pub states: Vec<Instruction>,
    pub init: usize,
}

impl Program {
    pub fn new(states: Vec<Instruction>, init: usize) -> Program {
        Program { states, init }
    }

    /// Writes `"<N> <init+1>\n"` followed by every state's canonical form.
    pub fn emit_source(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} {}", self.states.len(), self.init + 1)?;
        for state in &self.states {
            state.emit_source(out)?;
        }
        Ok(())
    }

    /// Lowers the whole program to a self-contained C99 translation unit.
    ///
    /// Panics if the program's stack requirement overflows the three named
    /// stacks (0..2) — unreachable for any program built by [`crate::parse::compile`].
    pub fn emit_c(&self, out: &mut dyn Write) -> io::Result<()> {
        let max_stack = self.states.iter().map(Instruction::max_stack).max().unwrap_or(0);
        assert!(max_stack < crate::constants::STACK_COUNT, "too many stacks");
        let stack_count = max_stack + 1;

        codegen::emit_prologue(out, stack_count, self.init)?;
        for (i, state) in self.states.iter().enumerate() {
            writeln!(out, "state_{i}:")?;
            state.emit_c(out)?;
        }
        codegen::emit_epilogue(out)
    }
}
