//! Shared in-crate test doubles.

use std::collections::VecDeque;

use crate::app::prompter::Prompter;
use crate::domain::AppError;

/// Prompter double that records every question and plays back scripted
/// answers. When a script runs dry it falls back to the prompt's default,
/// which mirrors a user pressing enter everywhere.
#[derive(Debug, Default)]
pub(crate) struct ScriptedPrompter {
    inputs: VecDeque<String>,
    selections: VecDeque<usize>,
    confirms: VecDeque<bool>,
    /// Prompt messages in the order they were shown.
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, answer: &str) -> Self {
        self.inputs.push_back(answer.to_string());
        self
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selections.push_back(index);
        self
    }

    pub fn with_confirm(mut self, answer: bool) -> Self {
        self.confirms.push_back(answer);
        self
    }

    pub fn prompt_count(&self) -> usize {
        self.asked.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(
        &mut self,
        message: &str,
        default: &str,
        validate: fn(&str) -> bool,
        _hint: &str,
    ) -> Result<String, AppError> {
        self.asked.push(message.to_string());
        let answer = self.inputs.pop_front().unwrap_or_else(|| default.to_string());
        assert!(validate(&answer), "scripted answer '{answer}' fails the field validator");
        Ok(answer)
    }

    fn select(
        &mut self,
        message: &str,
        items: &[&str],
        default: usize,
    ) -> Result<usize, AppError> {
        self.asked.push(message.to_string());
        let index = self.selections.pop_front().unwrap_or(default);
        assert!(index < items.len(), "scripted selection {index} out of range");
        Ok(index)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, AppError> {
        self.asked.push(message.to_string());
        Ok(self.confirms.pop_front().unwrap_or(default))
    }
}
