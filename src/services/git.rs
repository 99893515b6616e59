//! Version-control bootstrap for the generated project.

use std::path::Path;
use std::process::Command;

use crate::domain::error::AppError;

/// Initialize a git repository in the destination and commit the scaffold.
///
/// Callers treat failures as non-fatal: a missing git binary or unset
/// committer identity must not undo a successfully generated project.
pub fn bootstrap(dest: &Path) -> Result<(), AppError> {
    run(dest, &["init", "--quiet"])?;
    run(dest, &["add", "."])?;
    run(dest, &["commit", "--quiet", "--allow-empty", "-m", "Initialize repository with easy-ui5"])?;
    Ok(())
}

fn run(cwd: &Path, args: &[&str]) -> Result<(), AppError> {
    let command = format!("git {}", args.join(" "));
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|e| AppError::Git { command: command.clone(), details: e.to_string() })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(AppError::Git {
            command,
            details: if stderr.is_empty() { "unknown error".to_string() } else { stderr },
        });
    }
    Ok(())
}
