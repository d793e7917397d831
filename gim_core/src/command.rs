//! Typed commands and their execution against a [`Model`].

use crate::generator::Generator;
use crate::model::Model;
use crate::{EditExerciseDescriptor, Error, Exercise, Index, Level, NameContainsKeywords, Result};

pub const ADD_WORD: &str = "add";
pub const EDIT_WORD: &str = "edit";
pub const DELETE_WORD: &str = "delete";
pub const CLEAR_WORD: &str = "clear";
pub const EXIT_WORD: &str = "exit";
pub const FILTER_WORD: &str = "filter";
pub const GENERATE_WORD: &str = "generate";
pub const HELP_WORD: &str = "help";
pub const LIST_WORD: &str = "list";

pub const ADD_USAGE: &str = "add: Adds an exercise to the exercise tracker. \
Parameters: n/NAME w/WEIGHT [s/SETS] [r/REPS] [d/DATE]\n\
Example: add n/Bench Press w/80 s/3 r/8 d/15/10/2022";

pub const EDIT_USAGE: &str = "edit: Edits the exercise identified by the index number used in the displayed list. \
Parameters: INDEX (must be a positive integer) [n/NAME] [w/WEIGHT] [s/SETS] [r/REPS] [d/DATE]\n\
Example: edit 1 w/85 r/6";

pub const DELETE_USAGE: &str = "delete: Deletes the exercise identified by the index number used in the displayed list. \
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

pub const FILTER_USAGE: &str = "filter: Shows exercises whose names contain any of the given keywords (case-insensitive). \
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: filter squat bench";

pub const GENERATE_USAGE: &str = "generate: Suggests a workout for the exercises at the given indices, based on their personal records. \
Parameters: INDEX[, INDEX]... l/LEVEL (easy, medium or hard)\n\
Example: generate 1, 2 l/easy";

pub const HELP_USAGE: &str = "help: Shows the available commands.\n\
Example: help";

const SUMMARY_USAGES: [&str; 6] = [
    ADD_USAGE,
    EDIT_USAGE,
    DELETE_USAGE,
    FILTER_USAGE,
    GENERATE_USAGE,
    HELP_USAGE,
];

/// A fully validated command, ready to execute
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add(Exercise),
    Edit {
        index: Index,
        descriptor: EditExerciseDescriptor,
    },
    Delete(Index),
    Clear,
    Exit,
    Filter(NameContainsKeywords),
    Generate {
        indices: Vec<Index>,
        level: Level,
    },
    Help,
    List,
}

/// Outcome of executing a command
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub exit: bool,
    /// The tracker changed and should be saved
    pub mutated: bool,
}

impl CommandResult {
    fn message(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            ..Default::default()
        }
    }

    fn mutation(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            mutated: true,
            ..Default::default()
        }
    }
}

impl Command {
    /// The command word this command is invoked with
    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => ADD_WORD,
            Command::Edit { .. } => EDIT_WORD,
            Command::Delete(_) => DELETE_WORD,
            Command::Clear => CLEAR_WORD,
            Command::Exit => EXIT_WORD,
            Command::Filter(_) => FILTER_WORD,
            Command::Generate { .. } => GENERATE_WORD,
            Command::Help => HELP_WORD,
            Command::List => LIST_WORD,
        }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult> {
        tracing::info!("Executing {} command", self.word());

        match self {
            Command::Add(exercise) => {
                if model.tracker().contains(exercise) {
                    return Err(Error::DuplicateExercise);
                }
                model.tracker_mut().add(exercise.clone());
                Ok(CommandResult::mutation(format!(
                    "New exercise added: {}",
                    exercise
                )))
            }

            Command::Edit { index, descriptor } => {
                let position = model.resolve(*index)?;
                let current = &model.tracker().exercises()[position];
                let edited = descriptor.apply(current);
                if &edited != current && model.tracker().contains(&edited) {
                    return Err(Error::DuplicateExercise);
                }
                model.tracker_mut().set(position, edited.clone());
                Ok(CommandResult::mutation(format!(
                    "Edited exercise: {}",
                    edited
                )))
            }

            Command::Delete(index) => {
                let position = model.resolve(*index)?;
                let removed = model.tracker_mut().remove(position);
                Ok(CommandResult::mutation(format!(
                    "Deleted exercise: {}",
                    removed
                )))
            }

            Command::Clear => {
                model.tracker_mut().clear();
                model.update_filter(None);
                Ok(CommandResult::mutation("Exercise tracker has been cleared!"))
            }

            Command::Filter(predicate) => {
                model.update_filter(Some(predicate.clone()));
                Ok(CommandResult::message(format!(
                    "{} exercises listed!\n{}",
                    model.displayed().len(),
                    render_list(model)
                )))
            }

            Command::List => {
                model.update_filter(None);
                Ok(CommandResult::message(format!(
                    "Listed all exercises\n{}",
                    render_list(model)
                )))
            }

            Command::Generate { indices, level } => generate(model, indices, *level),

            Command::Help => Ok(CommandResult {
                feedback: help_message(),
                show_help: true,
                ..Default::default()
            }),

            Command::Exit => Ok(CommandResult {
                feedback: "Exiting exercise tracker as requested ...".into(),
                exit: true,
                ..Default::default()
            }),
        }
    }
}

/// One suggestion per distinct exercise name, in index order
fn generate(model: &Model, indices: &[Index], level: Level) -> Result<CommandResult> {
    let generator = Generator::for_level(level);
    let displayed = model.displayed();
    let mut seen: Vec<&crate::Name> = Vec::new();
    let mut lines = Vec::new();

    for index in indices {
        let exercise = displayed
            .get(index.zero_based())
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index: index.one_based(),
                len: displayed.len(),
            })?;

        if seen.iter().any(|name| name.matches(&exercise.name)) {
            continue;
        }
        seen.push(&exercise.name);

        let record = model
            .tracker()
            .personal_record(&exercise.name)?
            .unwrap_or(exercise);
        lines.push(generator.suggest(record)?);
    }

    tracing::debug!("Generated {} {} suggestions", lines.len(), level);
    Ok(CommandResult::message(lines.join("\n")))
}

fn render_list(model: &Model) -> String {
    model
        .displayed()
        .iter()
        .enumerate()
        .map(|(i, exercise)| format!("{}. {}", Index::from_zero_based(i), exercise))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summary of every command with arguments, plus the no-argument commands
pub fn help_message() -> String {
    let mut message = SUMMARY_USAGES.join("\n\n");
    message.push_str(&format!(
        "\n\n{}, {}, {}: take no arguments",
        CLEAR_WORD, LIST_WORD, EXIT_WORD
    ));
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExerciseTracker;
    use crate::{Date, Reps, Sets};

    fn exercise(name: &str, weight: &str, date: &str) -> Exercise {
        Exercise::new(
            name.parse().unwrap(),
            weight.parse().unwrap(),
            Sets::default(),
            Reps::default(),
            Date::parse(date).unwrap(),
        )
    }

    fn index(one_based: usize) -> Index {
        Index::from_one_based(one_based).unwrap()
    }

    fn sample_model() -> Model {
        Model::new(ExerciseTracker::new(vec![
            exercise("Squat", "100", "01/01/2022"),
            exercise("Bench", "60", "01/01/2022"),
            exercise("Squat", "110", "08/01/2022"),
        ]))
    }

    #[test]
    fn test_add_appends_and_rejects_duplicates() {
        let mut model = Model::default();
        let squat = exercise("Squat", "100", "01/01/2022");

        let result = Command::Add(squat.clone()).execute(&mut model).unwrap();
        assert!(result.mutated);
        assert_eq!(model.tracker().exercises(), [squat.clone()]);

        let err = Command::Add(squat).execute(&mut model).unwrap_err();
        assert!(matches!(err, Error::DuplicateExercise));
    }

    #[test]
    fn test_edit_replaces_fields() {
        let mut model = sample_model();
        let descriptor = EditExerciseDescriptor {
            weight: Some("65".parse().unwrap()),
            ..Default::default()
        };
        Command::Edit {
            index: index(2),
            descriptor,
        }
        .execute(&mut model)
        .unwrap();

        assert_eq!(model.tracker().exercises()[1].weight.as_str(), "65");
        assert_eq!(model.tracker().exercises()[1].name.as_str(), "Bench");
    }

    #[test]
    fn test_delete_uses_filtered_view() {
        let mut model = sample_model();
        Command::Filter(NameContainsKeywords::new(vec!["squat".into()]))
            .execute(&mut model)
            .unwrap();

        Command::Delete(index(2)).execute(&mut model).unwrap();

        let weights: Vec<&str> = model
            .tracker()
            .exercises()
            .iter()
            .map(|e| e.weight.as_str())
            .collect();
        assert_eq!(weights, vec!["100", "60"]);
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut model = sample_model();
        let err = Command::Delete(index(9)).execute(&mut model).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 9, len: 3 }));
        assert_eq!(model.tracker().exercises().len(), 3);
    }

    #[test]
    fn test_clear_and_list() {
        let mut model = sample_model();
        let result = Command::Clear.execute(&mut model).unwrap();
        assert!(result.mutated);
        assert!(model.tracker().exercises().is_empty());

        let result = Command::List.execute(&mut model).unwrap();
        assert!(!result.mutated);
        assert!(result.feedback.starts_with("Listed all exercises"));
    }

    #[test]
    fn test_filter_reports_count() {
        let mut model = sample_model();
        let result = Command::Filter(NameContainsKeywords::new(vec!["bench".into()]))
            .execute(&mut model)
            .unwrap();
        assert!(result.feedback.starts_with("1 exercises listed!"));
        assert!(result.feedback.contains("1. Bench"));
    }

    #[test]
    fn test_generate_uses_personal_record() {
        let mut model = sample_model();
        let result = Command::Generate {
            indices: vec![index(1), index(2), index(3)],
            level: Level::Medium,
        }
        .execute(&mut model)
        .unwrap();

        assert_eq!(
            result.feedback,
            "Squat: 77.00kg 3sets x 8reps\nBench: 42.00kg 3sets x 8reps"
        );
        assert!(!result.mutated);
    }

    #[test]
    fn test_generate_out_of_range() {
        let mut model = sample_model();
        let err = Command::Generate {
            indices: vec![index(1), index(4)],
            level: Level::Easy,
        }
        .execute(&mut model)
        .unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 4, .. }));
    }

    #[test]
    fn test_help_and_exit_flags() {
        let mut model = Model::default();
        let help = Command::Help.execute(&mut model).unwrap();
        assert!(help.show_help);
        assert!(help.feedback.contains(GENERATE_USAGE));

        let exit = Command::Exit.execute(&mut model).unwrap();
        assert!(exit.exit);
        assert!(!exit.show_help);
    }
}
