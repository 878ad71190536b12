//! Detached process launcher
//!
//! Starts the selected command and returns immediately. The child gets its
//! own process group so it survives the launcher window closing, and its
//! stdout is discarded so nothing leaks into the launcher's menu input.

use std::process::{Command, Stdio};

use crate::domain::ports::CommandLauncher;
use crate::error::{MenuError, SrmResult};

/// Spawns commands without waiting for them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedLauncher;

impl DetachedLauncher {
    pub fn new() -> Self {
        Self
    }

    fn command(program: &str, args: &[String]) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        cmd
    }
}

impl CommandLauncher for DetachedLauncher {
    fn launch(&self, argv: &[String]) -> SrmResult<()> {
        let (program, args) = argv.split_first().ok_or_else(|| MenuError::EmptyCommand {
            key: String::new(),
        })?;

        // Child handle dropped without wait; it is reparented when srm exits.
        Self::command(program, args)
            .spawn()
            .map(drop)
            .map_err(|source| MenuError::Launch {
                program: program.clone(),
                source,
            })
    }
}
