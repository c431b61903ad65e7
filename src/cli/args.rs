//! CLI argument definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::hierarchy::Mode;

#[derive(Parser)]
#[command(name = "sonority")]
#[command(about = "Syllabify words by the Sonority Sequencing Principle")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Syllabify words given on the command line
    Word {
        /// Words to syllabify
        #[arg(required = true)]
        words: Vec<String>,

        /// Sonority hierarchy
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Custom sonority table (JSON array of tiers)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Separator placed between syllables
        #[arg(short, long)]
        separator: Option<String>,

        /// Show the sonority rank of every phoneme
        #[arg(short, long)]
        ranks: bool,
    },

    /// Syllabify a text file and write a timestamped report
    File {
        /// Input text file
        input: PathBuf,

        /// Report file (defaults to the configured output path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the report instead of writing it
        #[arg(long)]
        stdout: bool,

        /// Sonority hierarchy
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Custom sonority table (JSON array of tiers)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Separator placed between syllables
        #[arg(short, long)]
        separator: Option<String>,
    },

    /// Display or export the active sonority table
    Table {
        /// Sonority hierarchy
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Custom sonority table to validate and display
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Write the table as JSON to this file
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// Show or update user settings
    Settings {
        /// Set default sonority hierarchy
        #[arg(long)]
        set_mode: Option<Mode>,

        /// Set default custom table file
        #[arg(long)]
        set_table: Option<PathBuf>,

        /// Forget the default custom table
        #[arg(long)]
        clear_table: bool,

        /// Set default syllable separator
        #[arg(long)]
        set_separator: Option<String>,

        /// Set default report path
        #[arg(long)]
        set_output: Option<PathBuf>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
