//! ui5gen: scaffold new OpenUI5/SAPUI5 projects.
//!
//! Configuration is collected from two competing sources, command-line
//! flags and interactive prompts, reconciled into one validated record,
//! and then drives scaffold rendering, package-manifest assembly, and
//! version-control bootstrapping.

pub mod app;
pub mod domain;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

use app::prompter::ConsolePrompter;

pub use app::flags::RawFlags;
pub use domain::config::FinalConfiguration;
pub use domain::error::AppError;

/// Resolve the configuration (prompting interactively for anything the
/// flags did not settle) and scaffold the project under `target_root`.
///
/// Returns the destination directory of the generated project.
pub fn generate(flags: &RawFlags, target_root: &Path) -> Result<PathBuf, AppError> {
    let mut prompter = ConsolePrompter;
    let config = app::resolve::resolve(flags, &mut prompter)?;
    app::generate::execute(&config, target_root)
}
