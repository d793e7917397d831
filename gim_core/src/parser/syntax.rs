//! Field vocabulary of the command language.
//!
//! Every field kind maps to exactly one prefix token. Parsers look prefixes
//! up here; the tokenizer only ever sees the resulting [`Prefix`] values.

use std::fmt;

/// Marker token that introduces a field value, e.g. `n/`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(token: &'static str) -> Self {
        Prefix(token)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }

    pub fn len(self) -> usize {
        self.0.len()
    }

    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Kinds of prefixed fields a command can carry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Weight,
    Sets,
    Reps,
    Date,
    Level,
}

/// Indexed by `Field` discriminant
const FIELD_PREFIXES: [(Field, Prefix); 6] = [
    (Field::Name, Prefix::new("n/")),
    (Field::Weight, Prefix::new("w/")),
    (Field::Sets, Prefix::new("s/")),
    (Field::Reps, Prefix::new("r/")),
    (Field::Date, Prefix::new("d/")),
    (Field::Level, Prefix::new("l/")),
];

impl Field {
    pub fn prefix(self) -> Prefix {
        FIELD_PREFIXES[self as usize].1
    }
}

/// Prefixes for a set of fields, in the same order
pub fn prefixes_for(fields: &[Field]) -> Vec<Prefix> {
    fields.iter().map(|field| field.prefix()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_prefixes_are_distinct() {
        let all = prefixes_for(&[
            Field::Name,
            Field::Weight,
            Field::Sets,
            Field::Reps,
            Field::Date,
            Field::Level,
        ]);
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn test_table_order_matches_fields() {
        for (position, (field, _)) in FIELD_PREFIXES.iter().enumerate() {
            assert_eq!(*field as usize, position);
        }
    }

    #[test]
    fn test_field_lookup() {
        assert_eq!(Field::Name.prefix().as_str(), "n/");
        assert_eq!(Field::Level.prefix().to_string(), "l/");
    }
}
