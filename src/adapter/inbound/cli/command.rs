//! Command-line interface definitions.
//!
//! Startup flags use the `--name=value` form and may appear in any order.
//! Arguments that are not recognised flags, or recognised flags with an
//! empty value, are reported and dropped before the rest reaches `clap`, so
//! a stray flag never aborts a session. Repeating a flag is allowed.

use clap::{ArgAction, CommandFactory, Parser};
use std::path::PathBuf;

use crate::infrastructure::config::settings::DEFAULT_CONFIG_FILE;

/// Interactive flashcard trainer
#[derive(Parser, Debug)]
#[command(name = "flashcards")]
#[command(version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Import cards from this file before the session starts (repeatable)
    #[arg(long = "import_from", value_name = "PATH", action = ArgAction::Append)]
    pub import_from: Vec<PathBuf>,

    /// Export cards to this file when the session exits (last one wins)
    #[arg(long = "export_to", value_name = "PATH")]
    pub export_to: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Parsed command line together with the arguments that were set aside.
#[derive(Debug)]
pub struct ParsedArgs {
    pub cli: Cli,
    /// Arguments that name no known flag.
    pub unknown: Vec<String>,
    /// Known flags given without a value.
    pub empty: Vec<String>,
}

impl Cli {
    /// Parse process arguments, setting aside unrecognised flags and flags
    /// with an empty value.
    ///
    /// `--help` and `--version` still exit the process the way `clap` does.
    pub fn parse_lenient<I>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = String>,
    {
        let split = split_unknown(args);
        ParsedArgs {
            cli: Cli::parse_from(split.known),
            unknown: split.unknown,
            empty: split.empty,
        }
    }
}

/// Raw arguments partitioned for [`Cli::parse_lenient`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SplitArgs {
    /// Program name and every recognised flag with its value.
    pub known: Vec<String>,
    /// Flag names `clap` does not define.
    pub unknown: Vec<String>,
    /// Recognised value flags whose value is empty or missing.
    pub empty: Vec<String>,
}

/// Partition raw arguments into ones `clap` accepts and the rest.
///
/// The first argument is the program name and is always kept. A known
/// option given as `--flag value` keeps its following value with it.
pub fn split_unknown<I>(args: I) -> SplitArgs
where
    I: IntoIterator<Item = String>,
{
    let mut command = Cli::command();
    command.build();

    let mut args = args.into_iter();
    let mut split = SplitArgs {
        known: args.next().into_iter().collect(),
        ..SplitArgs::default()
    };

    while let Some(arg) = args.next() {
        let (name, inline_value) = match arg.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (arg.as_str(), None),
        };

        let matched = command.get_arguments().find(|candidate| {
            if let Some(long) = name.strip_prefix("--") {
                candidate.get_long() == Some(long)
            } else if let Some(short) = name.strip_prefix('-') {
                let mut chars = short.chars();
                matches!((chars.next(), chars.next()), (Some(c), None) if candidate.get_short() == Some(c))
            } else {
                false
            }
        });

        let Some(candidate) = matched else {
            split.unknown.push(name.to_string());
            continue;
        };

        if !candidate.get_action().takes_values() {
            split.known.push(arg.clone());
            continue;
        }

        let value = match inline_value {
            Some(value) => Some(value.to_string()),
            None => args.next(),
        };
        match value {
            Some(value) if !value.is_empty() => {
                split.known.push(format!("{name}={value}"));
            }
            _ => split.empty.push(name.to_string()),
        }
    }

    split
}
