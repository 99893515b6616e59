use dialoguer::{Confirm, Input, Select};

use crate::domain::AppError;

/// Interactive prompt surface used by the resolution driver.
///
/// Production code talks to the terminal through dialoguer; tests
/// substitute a scripted implementation that records which fields were
/// asked and plays back canned answers.
pub trait Prompter {
    /// Free-text question with a live validator. The default is offered
    /// when the user just presses enter.
    fn input(
        &mut self,
        message: &str,
        default: &str,
        validate: fn(&str) -> bool,
        hint: &str,
    ) -> Result<String, AppError>;

    /// Single choice from an ordered list; returns the selected index.
    fn select(&mut self, message: &str, items: &[&str], default: usize)
    -> Result<usize, AppError>;

    /// Yes/no question.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, AppError>;
}

/// Terminal-backed prompter.
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn input(
        &mut self,
        message: &str,
        default: &str,
        validate: fn(&str) -> bool,
        hint: &str,
    ) -> Result<String, AppError> {
        Input::new()
            .with_prompt(message)
            .default(default.to_string())
            .validate_with(
                |value: &String| if validate(value) { Ok(()) } else { Err(hint.to_string()) },
            )
            .interact_text()
            .map_err(|e| AppError::Prompt(e.to_string()))
    }

    fn select(
        &mut self,
        message: &str,
        items: &[&str],
        default: usize,
    ) -> Result<usize, AppError> {
        Select::new()
            .with_prompt(message)
            .items(items)
            .default(default)
            .interact()
            .map_err(|e| AppError::Prompt(e.to_string()))
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(|e| AppError::Prompt(e.to_string()))
    }
}
