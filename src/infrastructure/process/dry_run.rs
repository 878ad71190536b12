//! Launcher that resolves but never starts anything.

use crate::domain::ports::CommandLauncher;
use crate::error::SrmResult;

/// Accepts every command without running it (`--dry-run`).
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunLauncher;

impl CommandLauncher for DryRunLauncher {
    fn launch(&self, _argv: &[String]) -> SrmResult<()> {
        Ok(())
    }
}
