// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

//! The desk calculator, independent of where its input comes from.
//!
//! | Module             | Holds                                                   |
//! |--------------------|---------------------------------------------------------|
//! | `errors`           | [`CalcError`], one variant per message shown to the user |
//! | `operations`       | [`Operation`] registry: `+ - * / ^ ln sqrt ! %`          |
//! | `operand_stack`    | [`OperandStack`], bounded by [`STACK_SIZE`]              |
//! | `memory_registers` | [`MemoryRegisters`] `A`..=`Z`                            |
//! | `commands`         | [`Command`] registry for `:`-prefixed lines              |
//! | `history_source`   | [`HistorySource`], what `:dmp` reads from                |
//! | `calculator`       | [`Calculator::eval_line`]                                |

// Attach.
pub mod calculator;
pub mod commands;
pub mod errors;
pub mod history_source;
pub mod memory_registers;
pub mod operand_stack;
pub mod operations;

// Re-export.
pub use calculator::*;
pub use commands::*;
pub use errors::*;
pub use history_source::*;
pub use memory_registers::*;
pub use operand_stack::*;
pub use operations::*;
