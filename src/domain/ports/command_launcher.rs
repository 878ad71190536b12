//! Command launcher port - starts the command behind a menu entry.

use crate::error::SrmResult;

/// Starts a tokenised command without waiting for it.
///
/// `argv[0]` is the program, the rest are its arguments. Implementations
/// must return as soon as the process is started; the child's exit status
/// is never observed.
pub trait CommandLauncher {
    fn launch(&self, argv: &[String]) -> SrmResult<()>;
}
