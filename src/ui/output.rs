//! Stderr diagnostics
//!
//! Stdout is reserved for the menu text read by the launcher, so every
//! message here goes to stderr and is gated by [`Verbosity`].

use std::path::Path;

use crate::application::Selection;
use crate::config::{ConfigWarning, Verbosity};
use crate::error::MenuError;

pub fn print_config_warnings(verbosity: Verbosity, warnings: &[ConfigWarning]) {
    if verbosity < Verbosity::Normal {
        return;
    }

    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

pub fn print_config_source(verbosity: Verbosity, source: &Path) {
    if verbosity >= Verbosity::Verbose {
        eprintln!("Config: {}", source.display());
    }
}

pub fn print_arguments(verbosity: Verbosity, args: &[String]) {
    if verbosity >= Verbosity::Debug {
        eprintln!("Arguments: {:?}", args);
    }
}

/// Report a resolved selection; dry runs are reported unless quiet.
pub fn print_selection(verbosity: Verbosity, selection: &Selection, dry_run: bool) {
    if dry_run && verbosity > Verbosity::Quiet {
        eprintln!("Would run: {}", selection.argv.join(" "));
    } else if verbosity >= Verbosity::Verbose {
        eprintln!("Launched '{}': {}", selection.key, selection.argv.join(" "));
    }

    if verbosity >= Verbosity::Debug {
        eprintln!("Argv: {:?}", selection.argv);
    }
}

pub fn print_menu_fallback(verbosity: Verbosity, reason: &MenuError) {
    if verbosity >= Verbosity::Verbose {
        eprintln!("Showing menu ({})", reason);
    }
}

pub fn print_init_result(verbosity: Verbosity, path: &Path) {
    if verbosity > Verbosity::Quiet {
        eprintln!("✓ Wrote sample config to {}", path.display());
    }
}
