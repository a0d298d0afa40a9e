//! The C frame shared by every generated program: includes, stack arrays,
//! the input prologue, and the output epilogue.

use std::io::{self, Write};

use crate::constants::{MODULUS, STACK_CAPACITY};

/// Writes the translation unit's header, stack storage, and the input
/// prologue that reads stdin onto stack 0 and jumps to the initial state.
///
/// `stack_count` is `1 + max_stack` over the whole program (at least 1).
pub fn emit_prologue(out: &mut dyn Write, stack_count: usize, init: usize) -> io::Result<()> {
    let cap = STACK_CAPACITY;
    writeln!(out, "#include <inttypes.h>")?;
    writeln!(out, "#include <stdio.h>")?;
    writeln!(out, "#include <stdlib.h>")?;
    writeln!(out)?;
    writeln!(out, "int main(void) {{")?;
    writeln!(out, "  static uint_least32_t stack[{stack_count}][{cap}];")?;
    writeln!(out, "  uint_least32_t* top[] = {{")?;
    for i in 0..stack_count {
        writeln!(out, "    stack[{i}],")?;
    }
    writeln!(out, "  }};")?;
    writeln!(out, "  for (uint_least32_t* ptr = *stack + {cap}; ;) {{")?;
    writeln!(out, "    uint_least32_t val;")?;
    writeln!(out, "    switch (scanf(\"%\" SCNuLEAST32, &val)) {{")?;
    writeln!(out, "      case 1:")?;
    writeln!(out, "        if (ptr == *stack)")?;
    writeln!(out, "          return 1;")?;
    writeln!(out, "        *--ptr = val % UINT32_C({MODULUS});")?;
    writeln!(out, "        break;")?;
    writeln!(out, "      case 0:")?;
    writeln!(out, "        return 4;")?;
    writeln!(out, "      case EOF:")?;
    writeln!(out, "        while (ptr != *stack + {cap})")?;
    writeln!(out, "          *(*top)++ = *ptr++;")?;
    writeln!(out, "        goto state_{init};")?;
    writeln!(out, "    }}")?;
    writeln!(out, "  }}")
}

/// Writes the `end:` label that drains stack A (top-down) to stdout.
pub fn emit_epilogue(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "end:")?;
    writeln!(out, "  while (*top != *stack)")?;
    writeln!(out, "    printf(\"%\" PRIuLEAST32 \"\\n\", *--*top);")?;
    writeln!(out, "  return 0;")?;
    writeln!(out, "}}")
}
