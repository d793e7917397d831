//! Arguments of `generate INDEX[, INDEX]... l/LEVEL`.

use super::syntax::Field;
use super::tokenizer::{tokenize, ArgumentMultimap};
use super::util::{parse_indices, parse_optional};
use crate::command::{Command, GENERATE_USAGE};
use crate::error::{FieldError, ParseError};
use crate::Level;

pub fn parse(args: &str) -> Result<Command, ParseError> {
    let level_prefix = Field::Level.prefix();
    let map = tokenize(args, &[level_prefix]);

    if !map.contains_all(&[level_prefix]) {
        return Err(ParseError::invalid_format(GENERATE_USAGE));
    }

    build(&map).map_err(|e| ParseError::with_cause(GENERATE_USAGE, e))
}

fn build(map: &ArgumentMultimap) -> Result<Command, FieldError> {
    map.verify_no_duplicate_prefixes(&[Field::Level.prefix()])?;

    let indices = parse_indices(map.preamble())?;
    let level: Level = parse_optional(map, Field::Level)?
        .ok_or_else(|| FieldError::InvalidLevel(String::new()))?;

    Ok(Command::Generate { indices, level })
}
