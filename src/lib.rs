//! `stackc` compiles a small stack-machine assembly language into C.
//!
//! # The language
//!
//! A program is a header line `N init` (state count, 1-based initial
//! state) followed by exactly `N` instruction lines. Each line names one
//! of fourteen instruction kinds and its operands:
//!
//! ```text
//! TER                          halt; drain stack A to output
//! PUS target val next          push val onto target
//! POP target next              discard the top of target
//! MOV target from next         pop from, push onto target
//! CPY target from next         push a copy of from's top onto target
//! ADD target left right next   push (left + right) mod M
//! SUB target left right next   push (left - right) mod M
//! MUL target left right next   push (left * right) mod M
//! DIV target left right next   push left / right (right == 0 halts, exit 4)
//! MOD target left right next   push left % right (right == 0 halts, exit 4)
//! EMP target consequent alternative     branch on target being empty
//! CMP right left alternative consequent branch on left < right
//! T00 target next              pop length k, prefix-sum the k cells beneath
//! T01 target next              pop length k, suffix-sum the k cells beneath
//! ```
//!
//! `target`/`from`/`left`/`right` name one of the three stacks `A`, `B`,
//! `C`; `next`/`consequent`/`alternative` are 1-based state references.
//! Values and arithmetic results are taken modulo `998244353`.
//!
//! # Using this crate
//!
//! [`parse::compile`] turns source text into a [`program::Program`] plus
//! any [`diagnostic::Diagnostic`]s. A clean `Program` can then be lowered
//! to C with [`program::Program::emit_c`], or re-emitted as canonical
//! source with [`program::Program::emit_source`].

pub mod codegen;
pub mod constants;
pub mod diagnostic;
pub mod instr;
pub mod parse;
pub mod program;
pub mod stack;

pub use diagnostic::{print_diagnostics, Diagnostic};
pub use instr::Instruction;
pub use parse::{compile, CompileResult};
pub use program::Program;
pub use stack::Stack;
