// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

//! # scalc
//!
//! A stack based (RPN) desk calculator. Every line is either an expression, like
//! `5 1 2 + 4 * + 3 -`, or a colon command, like `:p 3`. The operand stack and the
//! memory registers `A`..=`Z` persist for the whole session, and the top of the stack
//! is printed after each expression.
//!
//! Lines come from the [`sline`] prompt when standard input is a terminal, and from a
//! file or pipe otherwise. See [`app::InputSource`].
//!
//! ```
//! use scalc::{Calculator, EvalContext, LineOutcome, NoHistory};
//!
//! let mut calculator = Calculator::new(2);
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let mut context = EvalContext { out: &mut out, err: &mut err, history: &NoHistory };
//!
//! let outcome = calculator.eval_line("6 7 *", &mut context).unwrap();
//! assert_eq!(outcome, LineOutcome::Continue);
//! assert_eq!(out, b"42.00\n");
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]
// Deny unwrap in production library code (but allow in tests).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod app;
pub mod calc;

// Re-export.
pub use app::*;
pub use calc::*;

/// Version of this crate, shown by `-v` and `:ver`.
pub const SCALC_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Capacity of one input line in bytes, for both the prompt and file input.
pub const SCALC_EXPR_SIZE: usize = 64;
