// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

// Attach.
pub mod errors;
pub mod key_decoder;
pub mod line_state;
pub mod readline;
pub mod readline_history;

// Re-export.
pub use errors::*;
pub use key_decoder::*;
pub use line_state::*;
pub use readline::*;
pub use readline_history::*;
