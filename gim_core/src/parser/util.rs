//! Conversions from raw field text to typed values.

use super::syntax::Field;
use super::tokenizer::ArgumentMultimap;
use crate::error::FieldError;
use crate::Index;
use std::str::FromStr;

/// Parse a one-based index; leading `+`, zero and overflow are rejected
pub fn parse_index(raw: &str) -> Result<Index, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::InvalidIndex(trimmed.to_string()));
    }

    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(|| FieldError::InvalidIndex(trimmed.to_string()))
}

/// Parse a list of indices separated by commas and/or whitespace
pub fn parse_indices(raw: &str) -> Result<Vec<Index>, FieldError> {
    let indices = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_index)
        .collect::<Result<Vec<_>, _>>()?;

    if indices.is_empty() {
        return Err(FieldError::EmptyIndexList);
    }
    Ok(indices)
}

/// Parse the last value of `field`, if present
pub fn parse_optional<T>(map: &ArgumentMultimap, field: Field) -> Result<Option<T>, FieldError>
where
    T: FromStr<Err = FieldError>,
{
    map.value(field.prefix())
        .map(|raw| raw.parse::<T>())
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenizer::tokenize;
    use crate::Sets;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index(" 1 ").unwrap().one_based(), 1);
        assert_eq!(parse_index("42").unwrap().zero_based(), 41);
    }

    #[test]
    fn test_parse_index_rejects_bad_input() {
        for raw in ["", "0", "-1", "+1", "1.5", "a", "1 2", "99999999999999999999999"] {
            assert!(parse_index(raw).is_err(), "expected {raw:?} to be rejected");
        }
    }

    #[test]
    fn test_parse_indices_mixed_separators() {
        let indices: Vec<usize> = parse_indices("1, 2 3,4")
            .unwrap()
            .into_iter()
            .map(Index::one_based)
            .collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_parse_indices_rejects_empty_and_malformed() {
        assert_eq!(parse_indices(" , "), Err(FieldError::EmptyIndexList));
        assert_eq!(parse_indices(""), Err(FieldError::EmptyIndexList));
        assert_eq!(
            parse_indices("1, x"),
            Err(FieldError::InvalidIndex("x".into()))
        );
    }

    #[test]
    fn test_parse_optional() {
        let map = tokenize("s/3", &[Field::Sets.prefix(), Field::Reps.prefix()]);
        let sets: Option<Sets> = parse_optional(&map, Field::Sets).unwrap();
        assert_eq!(sets.map(Sets::get), Some(3));

        let reps: Option<crate::Reps> = parse_optional(&map, Field::Reps).unwrap();
        assert!(reps.is_none());
    }
}
