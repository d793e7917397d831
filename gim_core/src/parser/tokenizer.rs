//! Splits command arguments into a preamble and prefixed field values.
//!
//! In `1 n/Bench w/80` the preamble is `1`, `n/` maps to `Bench` and `w/`
//! maps to `80`. A prefix only starts a field at the beginning of the input
//! or right after whitespace, so `n/` inside `push/n/pull` is plain text.

use super::syntax::Prefix;
use crate::error::FieldError;
use std::collections::HashMap;

/// Field values keyed by prefix, plus the text before the first prefix
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|prefix| self.values.contains_key(prefix))
    }

    /// Fail if any of `prefixes` was given more than once
    pub fn verify_no_duplicate_prefixes(&self, prefixes: &[Prefix]) -> Result<(), FieldError> {
        let duplicated: Vec<String> = prefixes
            .iter()
            .filter(|prefix| self.all_values(**prefix).len() > 1)
            .map(|prefix| prefix.to_string())
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(FieldError::DuplicatePrefixes(duplicated))
        }
    }
}

/// Tokenize `args` against the recognised `prefixes`
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| {
            find_prefix_positions(args, *prefix)
                .into_iter()
                .map(move |position| (position, *prefix))
        })
        .collect();
    positions.sort_by_key(|(position, _)| *position);

    let preamble_end = positions.first().map_or(args.len(), |(position, _)| *position);
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.len();
        let value_end = positions
            .get(i + 1)
            .map_or(args.len(), |(position, _)| *position);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}

/// Byte offsets where `prefix` starts a field
fn find_prefix_positions(args: &str, prefix: Prefix) -> Vec<usize> {
    if prefix.is_empty() {
        return Vec::new();
    }

    args.match_indices(prefix.as_str())
        .map(|(position, _)| position)
        .filter(|&position| {
            args[..position]
                .chars()
                .next_back()
                .map_or(true, char::is_whitespace)
        })
        .collect()
}
