//! srm CLI
//!
//! Usage: srm [OPTIONS] [SELECTION]...
//!
//! With no selection the menu is printed; with a selection matching a menu
//! line, that line's command is launched in the background.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use srm::application::{import_menu_from_config, write_sample_config, RunOutcome, SelectionUseCase};
use srm::config::{resolve_verbosity, search_dirs, Verbosity};
use srm::domain::ports::ConfigRepository;
use srm::infrastructure::{DetachedLauncher, DryRunLauncher, FileConfigRepository};
use srm::presentation::Cli;
use srm::ui::output;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbosity = resolve_verbosity(cli.quiet, cli.verbose);
    output::print_arguments(verbosity, &cli.selection);

    if cli.init {
        return cmd_init(&cli, verbosity);
    }

    cmd_run(&cli, verbosity)
}

fn cmd_run(cli: &Cli, verbosity: Verbosity) -> Result<()> {
    let repository = match &cli.config {
        Some(file) => FileConfigRepository::with_file(file),
        None => FileConfigRepository::discover(cli.config_dir.clone()),
    };
    let loaded = repository
        .load()
        .context("failed to load menu configuration")?;

    output::print_config_source(verbosity, &loaded.source);
    output::print_config_warnings(verbosity, &loaded.warnings);

    let menu = import_menu_from_config(loaded.config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = if cli.dry_run {
        SelectionUseCase::new(DryRunLauncher).run_menu(&menu, &cli.selection, &mut out)
    } else {
        SelectionUseCase::new(DetachedLauncher::new()).run_menu(&menu, &cli.selection, &mut out)
    }?;
    out.flush()?;

    match outcome {
        RunOutcome::Launched(selection) => {
            output::print_selection(verbosity, &selection, cli.dry_run)
        }
        RunOutcome::MenuShown { reason } => output::print_menu_fallback(verbosity, &reason),
    }

    Ok(())
}

fn cmd_init(cli: &Cli, verbosity: Verbosity) -> Result<()> {
    let dir = search_dirs(cli.config_dir.as_deref())
        .into_iter()
        .next()
        .context("could not determine a config directory; pass --config-dir")?;

    let path = write_sample_config(&dir, cli.init_format)
        .with_context(|| format!("failed to write sample config into {}", dir.display()))?;

    output::print_init_result(verbosity, &path);
    Ok(())
}
