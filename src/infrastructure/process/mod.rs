//! Process launcher implementations.

mod detached;
mod dry_run;

pub use detached::DetachedLauncher;
pub use dry_run::DryRunLauncher;
