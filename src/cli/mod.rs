//! The recast command-line interface.
//!
//! This module is the entry point for all CLI commands and orchestrates the
//! core library functions. Pipeline errors are rendered as miette reports;
//! everything else (I/O, profile files) gets a plain one-line message.

use std::io::Read;
use std::path::Path;
use std::{fs, io, process};

use clap::Parser;

use crate::ast;
use crate::cli::args::{Command, RecastArgs};
use crate::engine;
use crate::errors::{print_error, RecastError, SourceContext};
use crate::profiles::{build_default_registry, ProfileRegistry};
use crate::syntax::{classifier, lexer};

pub mod args;

enum CliFailure {
    Recast(RecastError),
    Other(String),
}

impl From<RecastError> for CliFailure {
    fn from(error: RecastError) -> Self {
        Self::Recast(error)
    }
}

impl From<io::Error> for CliFailure {
    fn from(error: io::Error) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<serde_json::Error> for CliFailure {
    fn from(error: serde_json::Error) -> Self {
        Self::Other(error.to_string())
    }
}

/// The main entry point for the CLI.
pub fn run() {
    let args = RecastArgs::parse();

    let result = match args.command {
        Command::Translate {
            file,
            from,
            to,
            profiles,
        } => handle_translate(&file, &from, &to, profiles.as_deref()),
        Command::Tokens {
            file,
            from,
            profiles,
        } => handle_tokens(&file, &from, profiles.as_deref()),
        Command::Ast {
            file,
            from,
            profiles,
        } => handle_ast(&file, &from, profiles.as_deref()),
        Command::Languages { profiles } => handle_languages(profiles.as_deref()),
    };

    match result {
        Ok(()) => {}
        Err(CliFailure::Recast(error)) => {
            print_error(error);
            process::exit(1);
        }
        Err(CliFailure::Other(message)) => {
            eprintln!("Error: {message}");
            process::exit(1);
        }
    }
}

fn handle_translate(
    file: &Path,
    from: &str,
    to: &str,
    profiles: Option<&Path>,
) -> Result<(), CliFailure> {
    let registry = build_registry(profiles)?;
    let code = read_input(file)?;
    let translated = engine::translate(&code, from, to, &registry)?;
    println!("{translated}");
    Ok(())
}

fn handle_tokens(file: &Path, from: &str, profiles: Option<&Path>) -> Result<(), CliFailure> {
    let registry = build_registry(profiles)?;
    let code = read_input(file)?;
    let profile = registry.get(from)?;
    let tokens = classifier::classify_all(&lexer::lex(&code), profile)?;
    println!("{}", serde_json::to_string_pretty(&tokens)?);
    Ok(())
}

fn handle_ast(file: &Path, from: &str, profiles: Option<&Path>) -> Result<(), CliFailure> {
    let registry = build_registry(profiles)?;
    let code = read_input(file)?;
    let profile = registry.get(from)?;
    let tokens = classifier::classify_all(&lexer::lex(&code), profile)?;
    let context = SourceContext::from_input(from, &code);
    let tree = ast::build(&tokens, &context)?;
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}

fn handle_languages(profiles: Option<&Path>) -> Result<(), CliFailure> {
    let registry = build_registry(profiles)?;
    for name in registry.names() {
        println!("{name}");
    }
    Ok(())
}

/// Built-in profiles plus any user-supplied YAML tables. Adding a language is
/// pure data registration.
fn build_registry(profiles: Option<&Path>) -> Result<ProfileRegistry, CliFailure> {
    let mut registry = build_default_registry();
    if let Some(path) = profiles {
        let text = fs::read_to_string(path)?;
        let replaced = registry
            .merge_yaml_str(&text)
            .map_err(|e| CliFailure::Other(format!("invalid profile file {}: {e}", path.display())))?;
        for name in replaced {
            eprintln!(
                "note: profile '{name}' replaces an existing definition; \
                 its role table is used as-is, roles are not merged"
            );
        }
    }
    Ok(registry)
}

fn read_input(file: &Path) -> Result<String, CliFailure> {
    if file.as_os_str() == "-" {
        let mut code = String::new();
        io::stdin().read_to_string(&mut code)?;
        Ok(code)
    } else {
        Ok(fs::read_to_string(file)?)
    }
}
