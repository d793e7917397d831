//! Arguments of `edit INDEX [n/NAME] [w/WEIGHT] [s/SETS] [r/REPS] [d/DATE]`.

use super::syntax::{prefixes_for, Field};
use super::tokenizer::{tokenize, ArgumentMultimap};
use super::util::{parse_index, parse_optional};
use crate::command::{Command, EDIT_USAGE};
use crate::error::{FieldError, ParseError};
use crate::EditExerciseDescriptor;

const FIELDS: [Field; 5] = [Field::Name, Field::Weight, Field::Sets, Field::Reps, Field::Date];

pub fn parse(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &prefixes_for(&FIELDS));
    build(&map).map_err(|e| ParseError::with_cause(EDIT_USAGE, e))
}

fn build(map: &ArgumentMultimap) -> Result<Command, FieldError> {
    let index = parse_index(map.preamble())?;
    map.verify_no_duplicate_prefixes(&prefixes_for(&FIELDS))?;

    let descriptor = EditExerciseDescriptor {
        name: parse_optional(map, Field::Name)?,
        weight: parse_optional(map, Field::Weight)?,
        sets: parse_optional(map, Field::Sets)?,
        reps: parse_optional(map, Field::Reps)?,
        date: parse_optional(map, Field::Date)?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(FieldError::NothingToEdit);
    }

    Ok(Command::Edit { index, descriptor })
}
