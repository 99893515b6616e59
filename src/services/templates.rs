//! Project scaffold rendering.
//!
//! The template tree is embedded in the binary and rendered through
//! minijinja with the serialized configuration as context. View templates
//! exist once per view technology; only the file matching the resolved
//! view type is emitted.

use std::fs;
use std::path::Path;

use include_dir::{Dir, DirEntry, include_dir};
use minijinja::{Environment, UndefinedBehavior, Value, context};

use crate::domain::catalog::{Ui5LibSource, ViewType};
use crate::domain::config::FinalConfiguration;
use crate::domain::error::AppError;

static PROJECT_TEMPLATES: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/templates/project");

/// A scaffold file after template expansion, path relative to the
/// destination root.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub path: String,
    pub content: String,
}

/// UI5 bootstrap URL for index.html, derived from the library source.
fn bootstrap_src(source: Ui5LibSource) -> &'static str {
    match source {
        Ui5LibSource::CdnOpenUi5 => "https://sdk.openui5.org/resources/sap-ui-core.js",
        Ui5LibSource::CdnSapUi5 => "https://ui5.sap.com/resources/sap-ui-core.js",
        Ui5LibSource::LocalOpenUi5 | Ui5LibSource::LocalSapUi5 => "resources/sap-ui-core.js",
    }
}

/// Render the full scaffold for a configuration without touching the
/// filesystem.
pub fn render_project(config: &FinalConfiguration) -> Result<Vec<RenderedFile>, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    let context = context! {
        appId => config.app_id(),
        bootstrapSrc => bootstrap_src(config.ui5libs),
        ..Value::from_serialize(config)
    };

    let mut files = Vec::new();
    collect(&PROJECT_TEMPLATES, config.viewtype, &env, &context, &mut files)?;
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Render and write the scaffold into the destination directory.
pub fn write_project(config: &FinalConfiguration, dest: &Path) -> Result<(), AppError> {
    for file in render_project(config)? {
        let target = dest.join(&file.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(target, file.content)?;
    }
    Ok(())
}

fn collect(
    dir: &Dir<'_>,
    view_type: ViewType,
    env: &Environment<'_>,
    context: &Value,
    files: &mut Vec<RenderedFile>,
) -> Result<(), AppError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(subdir) => collect(subdir, view_type, env, context, files)?,
            DirEntry::File(file) => {
                let path = file.path().to_string_lossy().replace('\\', "/");
                if !emitted_for_view_type(&path, view_type) {
                    continue;
                }
                let source = file.contents_utf8().ok_or_else(|| AppError::Template {
                    path: path.clone(),
                    details: "embedded template is not valid UTF-8".to_string(),
                })?;
                let content = env.render_str(source, context).map_err(|e| {
                    AppError::Template { path: path.clone(), details: e.to_string() }
                })?;
                files.push(RenderedFile { path, content });
            }
        }
    }
    Ok(())
}

/// View templates are per-technology; everything else is always emitted.
fn emitted_for_view_type(path: &str, view_type: ViewType) -> bool {
    match path.rsplit_once("MainView.view.") {
        Some((_, extension)) => extension == view_type.file_extension(),
        None => true,
    }
}
