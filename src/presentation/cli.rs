//! CLI Argument Parsing
//!
//! srm is meant to be used as a rofi script (or behind dmenu): called with no
//! arguments it prints the menu, called with a menu line it runs that line.
//! Everything after the options is treated as the selection, except that a
//! first word of exactly `-h`, `--help`, `-V` or `--version` is still taken by
//! clap and a leading `--` is consumed as the end-of-options marker.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ConfigFormat;

/// srm - grouped, numbered command menus for rofi and dmenu
#[derive(Parser, Debug)]
#[command(name = "srm")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Without a selection, or with one that matches no entry, the menu is printed.\n\nA menu line that starts with an option of srm itself (for example \"-h\") is\nonly looked up after \"--\": srm -- -h\n\nrofi example:  rofi -show power -modi power:srm"
)]
pub struct Cli {
    /// Read this config file instead of searching for srm_config.*
    #[arg(short, long, value_name = "FILE", conflicts_with = "config_dir")]
    pub config: Option<PathBuf>,

    /// Directory searched for srm_config.{yaml,yml,json,toml}
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Resolve the selection and report it without launching
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Write a sample config into the config directory and exit
    #[arg(long)]
    pub init: bool,

    /// File format written by --init
    #[arg(long, value_enum, default_value_t = ConfigFormat::Yaml)]
    pub init_format: ConfigFormat,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Suppress warnings on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Menu line to run; words are joined with single spaces
    #[arg(value_name = "SELECTION", trailing_var_arg = true, allow_hyphen_values = true)]
    pub selection: Vec<String>,
}
