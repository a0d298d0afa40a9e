//! Named constants of the stack machine and its compiled form.

/// Prime modulus applied to `PUS` values and to `ADD`/`SUB`/`MUL` results.
pub const MODULUS: u32 = 998_244_353;

/// Per-stack capacity in cells, mirrored into the generated C as `CAP`.
pub const STACK_CAPACITY: u32 = 1_000_000;

/// Upper bound on the number of states a program may declare.
pub const MAX_STATES: u32 = 100_000;

/// Number of distinct stacks the language defines (A, B, C).
pub const STACK_COUNT: usize = 3;
