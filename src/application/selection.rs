//! Selection Use Case
//!
//! The launcher re-invokes srm with the chosen line as arguments. The words
//! are joined back into a key, looked up in the menu, and the resulting
//! command is started. When nothing matches, the menu text is written out
//! instead so the launcher can display it.

use std::io::Write;

use crate::domain::entities::Menu;
use crate::domain::ports::CommandLauncher;
use crate::error::{MenuError, SrmResult};

/// A resolved menu entry, ready to launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Joined selection key
    pub key: String,
    /// Command split on whitespace
    pub argv: Vec<String>,
}

/// What [`SelectionUseCase::run_menu`] ended up doing
#[derive(Debug)]
pub enum RunOutcome {
    /// The selected command was started
    Launched(Selection),
    /// No entry matched; the menu was printed instead
    MenuShown { reason: MenuError },
}

/// Join invocation arguments into a lookup key.
pub fn selection_key(args: &[String]) -> String {
    args.join(" ")
}

/// Resolve arguments to a command without launching it.
pub fn resolve_selection(menu: &Menu, args: &[String]) -> SrmResult<Selection> {
    let key = selection_key(args);
    let argv: Vec<String> = menu
        .lookup(&key)?
        .split_whitespace()
        .map(str::to_string)
        .collect();

    if argv.is_empty() {
        return Err(MenuError::EmptyCommand { key });
    }
    Ok(Selection { key, argv })
}

/// Selection use case - resolves a selection and hands it to a launcher
pub struct SelectionUseCase<L>
where
    L: CommandLauncher,
{
    launcher: L,
}

impl<L> SelectionUseCase<L>
where
    L: CommandLauncher,
{
    pub fn new(launcher: L) -> Self {
        Self { launcher }
    }

    /// Look up the selection and start its command.
    ///
    /// Lookup misses are returned as errors; see [`MenuError::is_lookup_miss`].
    pub fn run_selected_item(&self, menu: &Menu, args: &[String]) -> SrmResult<Selection> {
        let selection = resolve_selection(menu, args)?;
        self.launcher.launch(&selection.argv)?;
        Ok(selection)
    }

    /// Launch the selection, or print the menu to `out` when it does not resolve.
    pub fn run_menu<W: Write>(
        &self,
        menu: &Menu,
        args: &[String],
        out: &mut W,
    ) -> SrmResult<RunOutcome> {
        match self.run_selected_item(menu, args) {
            Ok(selection) => Ok(RunOutcome::Launched(selection)),
            Err(reason) if reason.is_lookup_miss() => {
                writeln!(out, "{menu}")?;
                Ok(RunOutcome::MenuShown { reason })
            }
            Err(e) => Err(e),
        }
    }
}
