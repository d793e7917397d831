//! Arguments of `add n/NAME w/WEIGHT [s/SETS] [r/REPS] [d/DATE]`.

use super::syntax::{prefixes_for, Field};
use super::tokenizer::{tokenize, ArgumentMultimap};
use super::util::parse_optional;
use crate::command::{Command, ADD_USAGE};
use crate::error::{FieldError, ParseError};
use crate::{Date, Exercise, Name, Weight};

const FIELDS: [Field; 5] = [Field::Name, Field::Weight, Field::Sets, Field::Reps, Field::Date];
const REQUIRED: [Field; 2] = [Field::Name, Field::Weight];

pub fn parse(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &prefixes_for(&FIELDS));

    if !map.contains_all(&prefixes_for(&REQUIRED)) || !map.preamble().is_empty() {
        return Err(ParseError::invalid_format(ADD_USAGE));
    }

    build(&map).map_err(|e| ParseError::with_cause(ADD_USAGE, e))
}

fn build(map: &ArgumentMultimap) -> Result<Command, FieldError> {
    map.verify_no_duplicate_prefixes(&prefixes_for(&FIELDS))?;

    let name: Name = parse_optional(map, Field::Name)?
        .ok_or_else(|| FieldError::InvalidName(String::new()))?;
    let weight: Weight = parse_optional(map, Field::Weight)?
        .ok_or_else(|| FieldError::InvalidWeight(String::new()))?;
    let sets = parse_optional(map, Field::Sets)?.unwrap_or_default();
    let reps = parse_optional(map, Field::Reps)?.unwrap_or_default();
    let date = parse_optional(map, Field::Date)?.unwrap_or_else(Date::today);

    Ok(Command::Add(Exercise::new(name, weight, sets, reps, date)))
}
