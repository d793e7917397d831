//! In-memory exercise tracker and the filtered view commands operate on.

use crate::error::ParseError;
use crate::{Error, Exercise, Index, Name, NameContainsKeywords, Result};
use serde::{Deserialize, Serialize};

/// The full list of logged exercises, in insertion order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseTracker {
    #[serde(default)]
    exercises: Vec<Exercise>,
}

impl ExerciseTracker {
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self { exercises }
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn contains(&self, exercise: &Exercise) -> bool {
        self.exercises.contains(exercise)
    }

    pub fn add(&mut self, exercise: Exercise) {
        self.exercises.push(exercise);
    }

    pub fn set(&mut self, position: usize, exercise: Exercise) {
        self.exercises[position] = exercise;
    }

    pub fn remove(&mut self, position: usize) -> Exercise {
        self.exercises.remove(position)
    }

    pub fn clear(&mut self) {
        self.exercises.clear();
    }

    /// Heaviest record logged under `name` (case-insensitive)
    pub fn personal_record(&self, name: &Name) -> std::result::Result<Option<&Exercise>, ParseError> {
        let mut best: Option<(&Exercise, f64)> = None;
        for exercise in self.exercises.iter().filter(|e| e.name.matches(name)) {
            let weight = exercise.weight.value()?;
            if best.map_or(true, |(_, heaviest)| weight > heaviest) {
                best = Some((exercise, weight));
            }
        }
        Ok(best.map(|(exercise, _)| exercise))
    }
}

/// Tracker plus the active name filter
#[derive(Clone, Debug, Default)]
pub struct Model {
    tracker: ExerciseTracker,
    filter: Option<NameContainsKeywords>,
}

impl Model {
    pub fn new(tracker: ExerciseTracker) -> Self {
        Self {
            tracker,
            filter: None,
        }
    }

    pub fn tracker(&self) -> &ExerciseTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut ExerciseTracker {
        &mut self.tracker
    }

    /// `None` shows every exercise
    pub fn update_filter(&mut self, filter: Option<NameContainsKeywords>) {
        self.filter = filter;
    }

    /// Tracker positions of the displayed exercises
    fn displayed_positions(&self) -> Vec<usize> {
        self.tracker
            .exercises()
            .iter()
            .enumerate()
            .filter(|(_, exercise)| self.filter.as_ref().map_or(true, |f| f.test(exercise)))
            .map(|(position, _)| position)
            .collect()
    }

    /// Exercises currently displayed, in display order
    pub fn displayed(&self) -> Vec<&Exercise> {
        self.displayed_positions()
            .into_iter()
            .map(|position| &self.tracker.exercises()[position])
            .collect()
    }

    /// Tracker position for a displayed one-based index
    pub fn resolve(&self, index: Index) -> Result<usize> {
        let positions = self.displayed_positions();
        positions
            .get(index.zero_based())
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index: index.one_based(),
                len: positions.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Date, Reps, Sets};

    fn exercise(name: &str, weight: &str) -> Exercise {
        Exercise::new(
            name.parse().unwrap(),
            weight.parse().unwrap(),
            Sets::default(),
            Reps::default(),
            Date::parse("01/01/2022").unwrap(),
        )
    }

    fn sample_model() -> Model {
        Model::new(ExerciseTracker::new(vec![
            exercise("Squat", "100"),
            exercise("Bench Press", "80"),
            exercise("squat", "120"),
        ]))
    }

    #[test]
    fn test_personal_record_is_heaviest_same_name() {
        let model = sample_model();
        let name: Name = "SQUAT".parse().unwrap();
        let pr = model.tracker().personal_record(&name).unwrap().unwrap();
        assert_eq!(pr.weight.as_str(), "120");

        let unknown: Name = "Deadlift".parse().unwrap();
        assert!(model.tracker().personal_record(&unknown).unwrap().is_none());
    }

    #[test]
    fn test_filter_changes_index_resolution() {
        let mut model = sample_model();
        assert_eq!(model.resolve(Index::from_one_based(2).unwrap()).unwrap(), 1);

        model.update_filter(Some(NameContainsKeywords::new(vec!["squat".into()])));
        assert_eq!(model.displayed().len(), 2);
        assert_eq!(model.resolve(Index::from_one_based(2).unwrap()).unwrap(), 2);

        model.update_filter(None);
        assert_eq!(model.displayed().len(), 3);
    }

    #[test]
    fn test_resolve_out_of_range() {
        let model = sample_model();
        let err = model.resolve(Index::from_one_based(4).unwrap()).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 4, len: 3 }));
    }
}
