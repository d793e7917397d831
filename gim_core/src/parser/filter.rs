//! Arguments of `filter KEYWORD [MORE_KEYWORDS]...`.

use crate::command::{Command, FILTER_USAGE};
use crate::error::ParseError;
use crate::NameContainsKeywords;

pub fn parse(args: &str) -> Result<Command, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::invalid_format(FILTER_USAGE));
    }

    Ok(Command::Filter(NameContainsKeywords::new(keywords)))
}
