//! CLI argument parsing with clap derive.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::eval::Operation;
use crate::subject::Encoding;

/// Evaluate SQL regular-expression functions over text and bytes
#[derive(Parser)]
#[command(name = "sqlre")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SQLRE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Whether the pattern matches anywhere in the subject
    Contains(SubjectArgs),
    /// Whether the pattern matches the whole subject
    Match(SubjectArgs),
    /// Extract one match (or its capture group)
    #[command(alias = "substr")]
    Extract(ExtractArgs),
    /// Extract every match (or its capture group)
    ExtractAll(SubjectArgs),
    /// Replace every match with a template
    Replace(ReplaceArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments shared by every pattern function.
#[derive(clap::Args)]
pub struct SubjectArgs {
    /// Regular expression
    #[arg(short = 'e', long, value_name = "REGEX", allow_hyphen_values = true)]
    pub pattern: String,

    /// Value to match against (any bytes on Unix)
    #[arg(
        value_name = "SUBJECT",
        required_unless_present = "input",
        conflicts_with = "input",
        allow_hyphen_values = true
    )]
    pub subject: Option<OsString>,

    /// Read subjects from a file, one per line
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Treat pattern and subject as BYTES instead of STRING
    #[arg(long)]
    pub bytes: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

impl SubjectArgs {
    pub fn encoding(&self) -> Encoding {
        if self.bytes { Encoding::RawBytes } else { Encoding::Utf8Text }
    }

    /// The command-line subject as given by the OS, without re-encoding.
    pub fn subject_bytes(&self) -> Option<&[u8]> {
        self.subject.as_deref().map(OsStr::as_encoded_bytes)
    }
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub common: SubjectArgs,

    /// 1-based position to start searching from
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub position: i64,

    /// Which match to return, counting from the position
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub occurrence: i64,
}

#[derive(clap::Args)]
pub struct ReplaceArgs {
    #[command(flatten)]
    pub common: SubjectArgs,

    /// Replacement template (`\1`..`\9` reference groups, `\0` the match)
    #[arg(short = 'r', long, value_name = "TEMPLATE", allow_hyphen_values = true)]
    pub replacement: String,

    /// Fail if the result would exceed this many bytes
    #[arg(long, value_name = "BYTES")]
    pub max_output_bytes: Option<usize>,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Command {
    /// The pattern-function arguments, or `None` for non-evaluating commands.
    pub fn subject_args(&self) -> Option<&SubjectArgs> {
        match self {
            Command::Contains(args) | Command::Match(args) | Command::ExtractAll(args) => {
                Some(args)
            }
            Command::Extract(args) => Some(&args.common),
            Command::Replace(args) => Some(&args.common),
            Command::Completions(_) => None,
        }
    }

    /// Build the operation, using `default_max_output` when no budget was given.
    pub fn operation(&self, default_max_output: Option<usize>) -> Option<Operation> {
        Some(match self {
            Command::Contains(_) => Operation::Contains,
            Command::Match(_) => Operation::Match,
            Command::Extract(args) => {
                Operation::Extract { position: args.position, occurrence: args.occurrence }
            }
            Command::ExtractAll(_) => Operation::ExtractAll,
            Command::Replace(args) => Operation::Replace {
                template: args.replacement.as_bytes().to_vec(),
                max_output_bytes: args.max_output_bytes.or(default_max_output),
            },
            Command::Completions(_) => return None,
        })
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
