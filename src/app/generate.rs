//! Post-resolution pipeline: fix the destination, persist settings, render
//! the scaffold, assemble package.json, and bootstrap git.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::json;

use crate::domain::config::FinalConfiguration;
use crate::domain::error::AppError;
use crate::services::settings::Settings;
use crate::services::{git, manifest, settings, templates};

/// Destination root for the project, fixed once from the resolved
/// configuration before anything is persisted.
pub fn destination_root(config: &FinalConfiguration, target_root: &Path) -> PathBuf {
    if config.newdir {
        target_root.join(config.directory_name())
    } else {
        target_root.to_path_buf()
    }
}

/// Write the project for a final configuration. Returns the destination
/// directory.
pub fn execute(config: &FinalConfiguration, target_root: &Path) -> Result<PathBuf, AppError> {
    let dest = destination_root(config, target_root);

    if settings::setup_completed(&dest)? {
        return Err(AppError::ProjectExists(dest.display().to_string()));
    }
    fs::create_dir_all(&dest)?;

    // Settings land before any scaffold file so an interrupted run leaves
    // a store without the completion marker and stays re-enterable.
    let mut store = Settings::new(config);
    store.save(&dest)?;

    templates::write_project(config, &dest)?;
    if config.codeassist {
        write_code_assist_configs(&dest)?;
    }
    manifest::write_package_json(config, &dest)?;

    store.mark_setup_completed();
    store.save(&dest)?;

    // A missing git binary or unset committer identity must not fail the
    // generation.
    if let Err(error) = git::bootstrap(&dest) {
        eprintln!("Skipping git bootstrap: {error}");
    }

    Ok(dest)
}

fn write_code_assist_configs(dest: &Path) -> Result<(), AppError> {
    let tsconfig = json!({
        "compilerOptions": {
            "module": "none",
            "noEmit": true,
            "checkJs": true,
            "allowJs": true,
            "types": ["@sapui5/ts-types"]
        }
    });
    let eslintrc = json!({
        "plugins": ["@sap/ui5-jsdocs"],
        "extends": ["plugin:@sap/ui5-jsdocs/recommended", "eslint:recommended"]
    });

    write_json(&dest.join("tsconfig.json"), &tsconfig)?;
    write_json(&dest.join(".eslintrc"), &eslintrc)?;
    Ok(())
}

fn write_json(path: &Path, value: &serde_json::Value) -> Result<(), AppError> {
    let body = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    fs::write(path, body)?;
    Ok(())
}
