//! The closed set of instruction kinds and their emission behavior.

use std::io::{self, Write};

use crate::constants::{MODULUS, STACK_CAPACITY};
use crate::stack::Stack;

/// One state of the program: an opcode plus its operands and successors.
///
/// State indices referenced by `next`/`consequent`/`alternative` are always
/// 0-based; textual forms (source and generated labels) translate to/from
/// 1-based or label form at the edges, never in the middle of the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `TER` — halts the machine; stack A is then drained to output.
    Terminate,
    /// `PUS target val next` — pushes `val` onto `target`.
    Push { target: Stack, val: u32, next: usize },
    /// `POP target next` — discards the top of `target`.
    Pop { target: Stack, next: usize },
    /// `MOV target from next` — pops `from`, pushes onto `target`.
    Move { target: Stack, from: Stack, next: usize },
    /// `CPY target from next` — pushes a copy of the top of `from` onto `target`.
    Copy { target: Stack, from: Stack, next: usize },
    /// `ADD target left right next` — pushes `(left + right) mod M`.
    Add { target: Stack, left: Stack, right: Stack, next: usize },
    /// `SUB target left right next` — pushes `(left - right) mod M`.
    Sub { target: Stack, left: Stack, right: Stack, next: usize },
    /// `MUL target left right next` — pushes `(left * right) mod M`.
    Mul { target: Stack, left: Stack, right: Stack, next: usize },
    /// `DIV target left right next` — pushes `left / right`; zero divisor halts with exit 4.
    Div { target: Stack, left: Stack, right: Stack, next: usize },
    /// `MOD target left right next` — pushes `left % right`; zero divisor halts with exit 4.
    Mod { target: Stack, left: Stack, right: Stack, next: usize },
    /// `EMP target consequent alternative` — branches on whether `target` is empty.
    Empty { target: Stack, consequent: usize, alternative: usize },
    /// `CMP right left alternative consequent` — branches on `left < right`.
    ///
    /// Surface operand order is `right left alternative consequent`; this is
    /// preserved verbatim by the parser and `emit_source` even though the
    /// fields here are named by meaning rather than by position.
    Less { left: Stack, right: Stack, consequent: usize, alternative: usize },
    /// `T00 target next` — pops a length `k`, then prefix-sums the `k` cells beneath it.
    PrefixSum { target: Stack, next: usize },
    /// `T01 target next` — pops a length `k`, then suffix-sums the `k` cells beneath it.
    SuffixSum { target: Stack, next: usize },
}

impl Instruction {
    /// Largest stack index this instruction touches; used to size the
    /// generated `stack`/`top` arrays.
    pub fn max_stack(&self) -> usize {
        use Instruction::*;
        match *self {
            Terminate => 0,
            Push { target, .. } | Pop { target, .. } | Empty { target, .. } => target.index(),
            Move { target, from, .. } | Copy { target, from, .. } => {
                target.index().max(from.index())
            }
            Add { target, left, right, .. }
            | Sub { target, left, right, .. }
            | Mul { target, left, right, .. }
            | Div { target, left, right, .. }
            | Mod { target, left, right, .. } => target.index().max(left.index()).max(right.index()),
            Less { left, right, .. } => left.index().max(right.index()),
            PrefixSum { target, .. } | SuffixSum { target, .. } => target.index(),
        }
    }

    /// Writes the canonical textual form, terminated by `'\n'`.
    ///
    /// `next`/`consequent`/`alternative` are written as 1-based state
    /// numbers, matching the source grammar.
    pub fn emit_source(&self, out: &mut dyn Write) -> io::Result<()> {
        use Instruction::*;
        match *self {
            Terminate => writeln!(out, "TER"),
            Push { target, val, next } => writeln!(out, "PUS {} {} {}", target, val, next + 1),
            Pop { target, next } => writeln!(out, "POP {} {}", target, next + 1),
            Move { target, from, next } => writeln!(out, "MOV {} {} {}", target, from, next + 1),
            Copy { target, from, next } => writeln!(out, "CPY {} {} {}", target, from, next + 1),
            Add { target, left, right, next } => {
                writeln!(out, "ADD {} {} {} {}", target, left, right, next + 1)
            }
            Sub { target, left, right, next } => {
                writeln!(out, "SUB {} {} {} {}", target, left, right, next + 1)
            }
            Mul { target, left, right, next } => {
                writeln!(out, "MUL {} {} {} {}", target, left, right, next + 1)
            }
            Div { target, left, right, next } => {
                writeln!(out, "DIV {} {} {} {}", target, left, right, next + 1)
            }
            Mod { target, left, right, next } => {
                writeln!(out, "MOD {} {} {} {}", target, left, right, next + 1)
            }
            Empty { target, consequent, alternative } => {
                writeln!(out, "EMP {} {} {}", target, consequent + 1, alternative + 1)
            }
            Less { left, right, consequent, alternative } => writeln!(
                out,
                "CMP {} {} {} {}",
                right,
                left,
                alternative + 1,
                consequent + 1
            ),
            PrefixSum { target, next } => writeln!(out, "T00 {} {}", target, next + 1),
            SuffixSum { target, next } => writeln!(out, "T01 {} {}", target, next + 1),
        }
    }

    /// Writes the C fragment implementing this instruction within the
    /// labeled-goto frame built by [`crate::codegen`].
    pub fn emit_c(&self, out: &mut dyn Write) -> io::Result<()> {
        use Instruction::*;
        let cap = STACK_CAPACITY;
        match *self {
            Terminate => writeln!(out, "  goto end;"),
            Push { target, val, next } => {
                let t = target.index();
                writeln!(out, "  if (top[{t}] == stack[{t}] + {cap})")?;
                writeln!(out, "    return 1;")?;
                writeln!(out, "  *top[{t}]++ = UINT32_C({val});")?;
                writeln!(out, "  goto state_{next};")
            }
            Pop { target, next } => {
                let t = target.index();
                writeln!(out, "  if (top[{t}] == stack[{t}])")?;
                writeln!(out, "    return 2;")?;
                writeln!(out, "  --top[{t}];")?;
                writeln!(out, "  goto state_{next};")
            }
            Move { target, from, next } => {
                let t = target.index();
                let f = from.index();
                writeln!(out, "  if (top[{t}] == stack[{t}] + {cap})")?;
                writeln!(out, "    return 1;")?;
                writeln!(out, "  if (top[{f}] == stack[{f}])")?;
                writeln!(out, "    return 2;")?;
                writeln!(out, "  --top[{f}];")?;
                writeln!(out, "  *top[{t}] = *top[{f}];")?;
                writeln!(out, "  ++top[{t}];")?;
                writeln!(out, "  goto state_{next};")
            }
            Copy { target, from, next } => {
                let t = target.index();
                let f = from.index();
                writeln!(out, "  if (top[{t}] == stack[{t}] + {cap})")?;
                writeln!(out, "    return 1;")?;
                writeln!(out, "  if (top[{f}] == stack[{f}])")?;
                writeln!(out, "    return 3;")?;
                writeln!(out, "  *top[{t}] = top[{f}][-1];")?;
                writeln!(out, "  ++top[{t}];")?;
                writeln!(out, "  goto state_{next};")
            }
            Add { target, left, right, next } => {
                let t = target.index();
                let l = left.index();
                let r = right.index();
                writeln!(out, "  if (top[{t}] == stack[{t}] + {cap})")?;
                writeln!(out, "    return 1;")?;
                writeln!(
                    out,
                    "  if (top[{l}] == stack[{l}] || top[{r}] == stack[{r}])"
                )?;
                writeln!(out, "    return 3;")?;
                writeln!(
                    out,
                    "  *top[{t}] = (uint_least32_t) (((uint_least64_t) top[{l}][-1] + top[{r}][-1]) % UINT32_C({MODULUS}));"
                )?;
                writeln!(out, "  ++top[{t}];")?;
                writeln!(out, "  goto state_{next};")
            }
            Sub { target, left, right, next } => {
                let t = target.index();
                let l = left.index();
                let r = right.index();
                writeln!(out, "  if (top[{t}] == stack[{t}] + {cap})")?;
                writeln!(out, "    return 1;")?;
                writeln!(
                    out,
                    "  if (top[{l}] == stack[{l}] || top[{r}] == stack[{r}])"
                )?;
                writeln!(out, "    return 3;")?;
                writeln!(
                    out,
                    "  *top[{t}] = (uint_least32_t) ((UINT64_C({MODULUS}) + top[{l}][-1] - top[{r}][-1]) % UINT32_C({MODULUS}));"
                )?;
                writeln!(out, "  ++top[{t}];")?;
                writeln!(out, "  goto state_{next};")
            }
            Mul { target, left, right, next } => {
                let t = target.index();
                let l = left.index();
                let r = right.index();
                writeln!(out, "  if (top[{t}] == stack[{t}] + {cap})")?;
                writeln!(out, "    return 1;")?;
                writeln!(
                    out,
                    "  if (top[{l}] == stack[{l}] || top[{r}] == stack[{r}])"
                )?;
                writeln!(out, "    return 3;")?;
                writeln!(
                    out,
                    "  *top[{t}] = (uint_least32_t) (((uint_least64_t) top[{l}][-1] * top[{r}][-1]) % UINT32_C({MODULUS}));"
                )?;
                writeln!(out, "  ++top[{t}];")?;
                writeln!(out, "  goto state_{next};")
            }
            Div { target, left, right, next } => {
                let t = target.index();
                let l = left.index();
                let r = right.index();
                writeln!(out, "  if (top[{t}] == stack[{t}] + {cap})")?;
                writeln!(out, "    return 1;")?;
                writeln!(
                    out,
                    "  if (top[{l}] == stack[{l}] || top[{r}] == stack[{r}])"
                )?;
                writeln!(out, "    return 3;")?;
                writeln!(out, "  if (top[{r}][-1] == 0)")?;
                writeln!(out, "    return 4;")?;
                writeln!(out, "  *top[{t}] = top[{l}][-1] / top[{r}][-1];")?;
                writeln!(out, "  ++top[{t}];")?;
                writeln!(out, "  goto state_{next};")
            }
            Mod { target, left, right, next } => {
                let t = target.index();
                let l = left.index();
                let r = right.index();
                writeln!(out, "  if (top[{t}] == stack[{t}] + {cap})")?;
                writeln!(out, "    return 1;")?;
                writeln!(
                    out,
                    "  if (top[{l}] == stack[{l}] || top[{r}] == stack[{r}])"
                )?;
                writeln!(out, "    return 3;")?;
                writeln!(out, "  if (top[{r}][-1] == 0)")?;
                writeln!(out, "    return 4;")?;
                writeln!(out, "  *top[{t}] = top[{l}][-1] % top[{r}][-1];")?;
                writeln!(out, "  ++top[{t}];")?;
                writeln!(out, "  goto state_{next};")
            }
            Empty { target, consequent, alternative } => {
                let t = target.index();
                writeln!(out, "  if (top[{t}] == stack[{t}])")?;
                writeln!(out, "    goto state_{consequent};")?;
                writeln!(out, "  else")?;
                writeln!(out, "    goto state_{alternative};")
            }
            Less { left, right, consequent, alternative } => {
                let l = left.index();
                let r = right.index();
                writeln!(
                    out,
                    "  if (top[{l}] == stack[{l}] || top[{r}] == stack[{r}])"
                )?;
                writeln!(out, "    return 3;")?;
                writeln!(out, "  if (top[{l}][-1] < top[{r}][-1])")?;
                writeln!(out, "    goto state_{consequent};")?;
                writeln!(out, "  else")?;
                writeln!(out, "    goto state_{alternative};")
            }
            PrefixSum { target, next } => emit_scan(out, target, next, "ptr[k - i - 1] += ptr[k - i];"),
            SuffixSum { target, next } => emit_scan(out, target, next, "ptr[i] += ptr[i - 1];"),
        }
    }
}

/// Shared body for `T00`/`T01`: pop a length `k`, require `k` cells beneath
/// it, apply `step` in place over those cells, then drop the `k` cell.
fn emit_scan(out: &mut dyn Write, target: Stack, next: usize, step: &str) -> io::Result<()> {
    let t = target.index();
    writeln!(out, "  if (top[{t}] == stack[{t}])")?;
    writeln!(out, "    return 3;")?;
    writeln!(out, "  {{")?;
    writeln!(out, "    uint_least32_t k = top[{t}][-1];")?;
    writeln!(out, "    if (top[{t}] - 1 - stack[{t}] < k)")?;
    writeln!(out, "      return 3;")?;
    writeln!(out, "    uint_least32_t* ptr = top[{t}] - 1 - k;")?;
    writeln!(out, "    for (uint_least32_t i = 1; i < k; ++i)")?;
    writeln!(out, "      {step}")?;
    writeln!(out, "    --top[{t}];")?;
    writeln!(out, "  }}")?;
    writeln!(out, "  goto state_{next};")
}
