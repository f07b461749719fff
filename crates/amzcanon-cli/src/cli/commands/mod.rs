//! CLI command handlers, one per file.

mod canonicalize;
mod check;
mod completions;
mod extract;

pub use canonicalize::run_canonicalize;
pub use check::run_check;
pub use completions::run_completions;
pub use extract::run_extract;
