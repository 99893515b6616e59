//! Orchestration: flag parsing, field resolution, prompting, generation.

pub mod flags;
pub mod generate;
pub mod prompter;
pub mod resolve;
