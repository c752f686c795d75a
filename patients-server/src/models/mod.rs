//! Domain models with validation at construction
//!
//! Request bodies are parsed into these types before anything touches the
//! database. Invalid input returns ValidationError, not panic.

pub mod patient;
pub mod validation;

pub use patient::{NewPatient, Patient};
pub use validation::ValidationError;
