#![forbid(unsafe_code)]

//! Core domain model and business logic for the Gim exercise tracker.
//!
//! This crate provides:
//! - Domain types (exercises, indices, difficulty levels)
//! - Date validation
//! - Workout generators
//! - Command parsing and execution
//! - Persistence and configuration

pub mod types;
pub mod error;
pub mod date;
pub mod generator;
pub mod parser;
pub mod command;
pub mod model;
pub mod storage;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, FieldError, ParseError, Result};
pub use types::*;
pub use date::{is_valid_date, Date};
pub use generator::Generator;
pub use parser::parse_command;
pub use command::{Command, CommandResult};
pub use model::{ExerciseTracker, Model};
pub use config::Config;
