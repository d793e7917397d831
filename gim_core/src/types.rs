//! Core domain types for the exercise tracker.
//!
//! This module defines the fundamental values used throughout the system:
//! - Exercise records and their validated fields
//! - One-based indices into the displayed list
//! - Difficulty levels for workout generation
//! - Name keyword predicates for filtering

use crate::date::Date;
use crate::error::FieldError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").expect("name regex is valid"));

static WEIGHT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("weight regex is valid"));

// ============================================================================
// Index
// ============================================================================

/// A user-facing, one-based position in the displayed exercise list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    /// Create from a one-based position, rejecting zero
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        (one_based >= 1).then_some(Index(one_based))
    }

    /// Create from a zero-based position
    pub fn from_zero_based(zero_based: usize) -> Self {
        Index(zero_based + 1)
    }

    pub fn one_based(self) -> usize {
        self.0
    }

    pub fn zero_based(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Exercise fields
// ============================================================================

/// Exercise name: alphanumeric words separated by spaces
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison used to group records of the same exercise
    pub fn matches(&self, other: &Name) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl FromStr for Name {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if NAME_REGEX.is_match(trimmed) {
            Ok(Name(trimmed.to_string()))
        } else {
            Err(FieldError::InvalidName(s.to_string()))
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Weight lifted, kept as the decimal string the user entered
///
/// Records loaded from disk are not re-validated, so numeric access goes
/// through [`Weight::value`], which can fail.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(String);

impl Weight {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the stored weight; only finite values are accepted
    pub fn value(&self) -> Result<f64, crate::error::ParseError> {
        match self.0.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(crate::error::ParseError::InvalidNumber(self.0.clone())),
        }
    }
}

impl FromStr for Weight {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let weight = Weight(trimmed.to_string());
        if WEIGHT_REGEX.is_match(trimmed) && weight.value().is_ok() {
            Ok(weight)
        } else {
            Err(FieldError::InvalidWeight(s.to_string()))
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Number of sets performed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sets(u32);

impl Default for Sets {
    fn default() -> Self {
        Sets(1)
    }
}

impl Sets {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for Sets {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u32>() {
            Ok(n) if n > 0 => Ok(Sets(n)),
            _ => Err(FieldError::InvalidSets(s.to_string())),
        }
    }
}

/// Number of repetitions per set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reps(u32);

impl Default for Reps {
    fn default() -> Self {
        Reps(1)
    }
}

impl Reps {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for Reps {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u32>() {
            Ok(n) if n > 0 => Ok(Reps(n)),
            _ => Err(FieldError::InvalidReps(s.to_string())),
        }
    }
}

// ============================================================================
// Exercise
// ============================================================================

/// A single logged exercise
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exercise {
    pub name: Name,
    pub weight: Weight,
    pub sets: Sets,
    pub reps: Reps,
    pub date: Date,
}

impl Exercise {
    pub fn new(name: Name, weight: Weight, sets: Sets, reps: Reps, date: Date) -> Self {
        Self {
            name,
            weight,
            sets,
            reps,
            date,
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Weight: {}kg; Sets: {}; Reps: {}; Date: {}",
            self.name,
            self.weight,
            self.sets.get(),
            self.reps.get(),
            self.date
        )
    }
}

/// Replacement values for an edit; `None` keeps the current value
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditExerciseDescriptor {
    pub name: Option<Name>,
    pub weight: Option<Weight>,
    pub sets: Option<Sets>,
    pub reps: Option<Reps>,
    pub date: Option<Date>,
}

impl EditExerciseDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.weight.is_some()
            || self.sets.is_some()
            || self.reps.is_some()
            || self.date.is_some()
    }

    /// Build the edited copy of `exercise`
    pub fn apply(&self, exercise: &Exercise) -> Exercise {
        Exercise {
            name: self.name.clone().unwrap_or_else(|| exercise.name.clone()),
            weight: self.weight.clone().unwrap_or_else(|| exercise.weight.clone()),
            sets: self.sets.unwrap_or(exercise.sets),
            reps: self.reps.unwrap_or(exercise.reps),
            date: self.date.clone().unwrap_or_else(|| exercise.date.clone()),
        }
    }
}

// ============================================================================
// Level and predicates
// ============================================================================

/// Difficulty of a generated workout
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Level {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Level::Easy),
            "medium" => Ok(Level::Medium),
            "hard" => Ok(Level::Hard),
            _ => Err(FieldError::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Easy => "easy",
            Level::Medium => "medium",
            Level::Hard => "hard",
        };
        f.write_str(s)
    }
}

/// Matches exercises whose name contains any keyword as a whole word
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameContainsKeywords {
    keywords: Vec<String>,
}

impl NameContainsKeywords {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn test(&self, exercise: &Exercise) -> bool {
        self.keywords.iter().any(|keyword| {
            exercise
                .name
                .as_str()
                .split_whitespace()
                .any(|word| word.eq_ignore_ascii_case(keyword))
        })
    }
}
