//! Defines the command-line arguments and subcommands for the recast CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "recast",
    version,
    about = "A data-driven structural source-to-source translator."
)]
pub struct RecastArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate a file between two registered languages.
    Translate {
        /// The file to translate, or "-" for stdin.
        #[arg(default_value = "-")]
        file: PathBuf,
        /// The source language profile name.
        #[arg(long)]
        from: String,
        /// The target language profile name.
        #[arg(long)]
        to: String,
        /// A YAML file of additional `name -> role table` profiles.
        #[arg(long)]
        profiles: Option<PathBuf>,
    },
    /// Show the classified token stream as JSON.
    Tokens {
        /// The file to tokenize, or "-" for stdin.
        #[arg(default_value = "-")]
        file: PathBuf,
        /// The source language profile name.
        #[arg(long)]
        from: String,
        /// A YAML file of additional `name -> role table` profiles.
        #[arg(long)]
        profiles: Option<PathBuf>,
    },
    /// Show the translation tree as JSON.
    Ast {
        /// The file to parse, or "-" for stdin.
        #[arg(default_value = "-")]
        file: PathBuf,
        /// The source language profile name.
        #[arg(long)]
        from: String,
        /// A YAML file of additional `name -> role table` profiles.
        #[arg(long)]
        profiles: Option<PathBuf>,
    },
    /// List all registered language profiles.
    Languages {
        /// A YAML file of additional `name -> role table` profiles.
        #[arg(long)]
        profiles: Option<PathBuf>,
    },
}
