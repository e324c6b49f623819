//! Command line parsing.

use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "\
boxquote - box printing quotations

Usage:
  boxquote [OPTIONS] quote <ORDER.json> [--json]
  boxquote [OPTIONS] catalog

Commands:
  quote      Price an order and print the quotation text
  catalog    Print the option catalog as JSON

Options:
  -c, --config <PATH>   Config file (default: ./boxquote.toml)
      --json            Print the full quotation as JSON
  -h, --help            Show this help message

Environment:
  RUST_LOG                     Log filter (default: info)
  BOXQUOTE_TABLES_DIR          Directory of <table>.json files
  BOXQUOTE_PRINTING_TABLE      Printing table name
  BOXQUOTE_ADDON_TABLE         Add-on table name
  BOXQUOTE_DOUBLE_SIDE_TABLE   Double side printing table name
  BOXQUOTE_QUANTITY_NOTE       Quantity note in the quotation header";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("unknown argument '{0}'")]
    Unknown(String),

    #[error("quote needs an order file")]
    MissingOrder,

    #[error("no command given")]
    MissingCommand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quote { order: PathBuf, json: bool },
    Catalog,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub config: Option<PathBuf>,
    pub command: Command,
}

/// Parses arguments, program name excluded.
pub fn parse<I>(args: I) -> Result<Cli, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut config = None;
    let mut json = false;
    let mut positional = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                config = Some(PathBuf::from(path));
            }
            "--json" => json = true,
            "--help" | "-h" => {
                return Ok(Cli {
                    config,
                    command: Command::Help,
                })
            }
            _ if arg.starts_with('-') => return Err(ArgsError::Unknown(arg)),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        Some("quote") => Command::Quote {
            order: positional.next().map(PathBuf::from).ok_or(ArgsError::MissingOrder)?,
            json,
        },
        Some("catalog") => Command::Catalog,
        Some("help") => Command::Help,
        Some(other) => return Err(ArgsError::Unknown(other.to_string())),
        None => return Err(ArgsError::MissingCommand),
    };

    if let Some(extra) = positional.next() {
        return Err(ArgsError::Unknown(extra));
    }

    Ok(Cli { config, command })
}
