//! Pure domain logic: validators, the option catalog, configuration records.

pub mod catalog;
pub mod config;
pub mod error;
pub mod validation;

pub use catalog::{Platform, Ui5LibSource, ViewType};
pub use config::{BoolFlag, FinalConfiguration, PromptAnswers, ResolvedFields};
pub use error::{AppError, FieldError};
