//! Command-line parsing.
//!
//! A raw line is split into a command word and the remaining arguments. The
//! word selects an argument parser from [`COMMAND_TABLE`], which tokenizes
//! the arguments, converts each field and builds the [`Command`].

pub mod syntax;
pub mod tokenizer;
pub mod util;

mod add;
mod delete;
mod edit;
mod filter;
mod generate;

use crate::command::*;
use crate::error::ParseError;

type ArgumentParser = fn(&str) -> Result<Command, ParseError>;

/// Command words and their argument parsers; no-argument commands ignore
/// anything after the word
const COMMAND_TABLE: [(&str, ArgumentParser); 9] = [
    (ADD_WORD, add::parse),
    (EDIT_WORD, edit::parse),
    (DELETE_WORD, delete::parse),
    (CLEAR_WORD, |_| Ok(Command::Clear)),
    (EXIT_WORD, |_| Ok(Command::Exit)),
    (FILTER_WORD, filter::parse),
    (GENERATE_WORD, generate::parse),
    (HELP_WORD, |_| Ok(Command::Help)),
    (LIST_WORD, |_| Ok(Command::List)),
];

/// Parse one line of user input into a command
pub fn parse_command(raw: &str) -> Result<Command, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::invalid_format(HELP_USAGE));
    }

    let (word, args) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));

    let parser = COMMAND_TABLE
        .iter()
        .find(|(known, _)| *known == word)
        .map(|(_, parser)| *parser)
        .ok_or(ParseError::UnknownCommand)?;

    let command = parser(args)?;
    tracing::debug!("Parsed {:?} from {:?}", command, raw);
    Ok(command)
}
