//! Arguments of `delete INDEX`.

use super::util::parse_index;
use crate::command::{Command, DELETE_USAGE};
use crate::error::ParseError;

pub fn parse(args: &str) -> Result<Command, ParseError> {
    parse_index(args)
        .map(Command::Delete)
        .map_err(|e| ParseError::with_cause(DELETE_USAGE, e))
}
