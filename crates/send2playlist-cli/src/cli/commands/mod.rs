//! CLI command handlers, one per file.

mod add;
mod completions;
mod man;
mod title;

pub use add::run_add;
pub use completions::run_completions;
pub use man::run_man;
pub use title::run_title;
