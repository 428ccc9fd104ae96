//! CLI command handlers, one per file.

mod dir;
mod origin;
mod show;

pub use dir::run_dir;
pub use origin::run_origin;
pub use show::run_show;

/// Placeholder printed for an absent location.
const ABSENT: &str = "-";
