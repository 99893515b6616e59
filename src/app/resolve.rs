//! Field resolution: decides per field whether a command-line value can be
//! used as-is or whether the interactive prompt has to run, then merges
//! both sources into the final configuration.
//!
//! Evaluation order is fixed (project name, namespace, platform, view
//! type, UI5 lib source, newdir, codeassist) because the UI5 lib source's
//! skip decision, choice list, and default all depend on the platform
//! value resolved or answered before it.

use crate::app::flags::RawFlags;
use crate::app::prompter::Prompter;
use crate::domain::catalog::{Platform, Ui5LibSource, ViewType};
use crate::domain::config::{BoolFlag, FinalConfiguration, PromptAnswers, ResolvedFields};
use crate::domain::error::{AppError, FieldError};
use crate::domain::validation::{is_valid_namespace, is_valid_project_name};

/// Outcome of a single field resolver.
///
/// `None` means the flag was absent (prompt silently); `Some(Err(_))`
/// means a value was supplied but cannot be used (prompt with a warning);
/// `Some(Ok(_))` skips the prompt.
type Resolution<T> = Option<Result<T, FieldError>>;

fn resolve_project_name(raw: Option<&str>) -> Resolution<String> {
    let value = raw.filter(|v| !v.is_empty())?;
    if is_valid_project_name(value) {
        Some(Ok(value.to_string()))
    } else {
        Some(Err(FieldError::Validation { value: value.to_string() }))
    }
}

fn resolve_namespace(raw: Option<&str>) -> Resolution<String> {
    let value = raw.filter(|v| !v.is_empty())?;
    if is_valid_namespace(value) {
        Some(Ok(value.to_string()))
    } else {
        Some(Err(FieldError::Validation { value: value.to_string() }))
    }
}

fn resolve_platform(raw: Option<&str>) -> Resolution<Platform> {
    let key = raw.filter(|v| !v.is_empty())?;
    Some(Platform::from_alias(key))
}

fn resolve_view_type(raw: Option<&str>) -> Resolution<ViewType> {
    let value = raw.filter(|v| !v.is_empty())?;
    match ViewType::from_name(value) {
        Some(view_type) => Some(Ok(view_type)),
        None => Some(Err(FieldError::Validation { value: value.to_string() })),
    }
}

/// Resolves the UI5 lib source against the already-resolved platform.
///
/// An unknown alias is reported as such before the cross-field check runs;
/// a known alias that is incompatible with the Launchpad platform is a
/// constraint violation even though the alias itself is valid.
fn resolve_ui5_lib_source(raw: Option<&str>, platform: Platform) -> Resolution<Ui5LibSource> {
    let key = raw.filter(|v| !v.is_empty())?;
    let source = match Ui5LibSource::from_alias(key) {
        Ok(source) => source,
        Err(error) => return Some(Err(error)),
    };
    if platform == Platform::LaunchpadSrv && source != Ui5LibSource::CdnSapUi5 {
        return Some(Err(FieldError::ConstraintViolation {
            value: source.label().to_string(),
            other_field: "platform",
        }));
    }
    Some(Ok(source))
}

fn resolve_bool(raw: Option<&str>) -> Resolution<bool> {
    let value = raw.filter(|v| !v.is_empty())?;
    match BoolFlag::parse(Some(value)).as_bool() {
        Some(flag) => Some(Ok(flag)),
        None => Some(Err(FieldError::Validation { value: value.to_string() })),
    }
}

/// Diagnostic for a supplied-but-unusable flag value. Observability only;
/// the fallback to prompting has already been decided.
fn report_fallback(field: &str, error: &FieldError) {
    match error {
        // Only the library source carries a cross-field constraint, and its
        // message names the field differently than the plain-invalid one.
        FieldError::ConstraintViolation { .. } => {
            eprintln!("Invalid UI5 lib source parameter for selected platform. Will ask for it...");
        }
        FieldError::Validation { .. } | FieldError::UnknownAlias { .. } => {
            eprintln!("Invalid {field} provided, will ask for it...");
        }
    }
}

/// Resolution driver: parse outcome in, final configuration out.
///
/// For each field in the fixed order, a flag value that resolves cleanly
/// skips its prompt; anything else falls through to the prompter. Bad
/// input never aborts; the only fatal path is the merge invariant at the
/// end.
pub fn resolve<P: Prompter>(
    flags: &RawFlags,
    prompter: &mut P,
) -> Result<FinalConfiguration, AppError> {
    let mut resolved = ResolvedFields::default();
    let mut answers = PromptAnswers::default();

    match resolve_project_name(flags.projectname.as_deref()) {
        Some(Ok(value)) => resolved.projectname = Some(value),
        outcome => {
            if let Some(Err(error)) = &outcome {
                report_fallback("project name", error);
            }
            answers.projectname = Some(prompter.input(
                "How do you want to name this project?",
                "myUI5App",
                is_valid_project_name,
                "Please use alpha numeric characters only for the project name.",
            )?);
        }
    }

    match resolve_namespace(flags.namespace_ui5.as_deref()) {
        Some(Ok(value)) => resolved.namespace_ui5 = Some(value),
        outcome => {
            if let Some(Err(error)) = &outcome {
                report_fallback("namespace", error);
            }
            answers.namespace_ui5 = Some(prompter.input(
                "Which namespace do you want to use?",
                "com.myorg",
                is_valid_namespace,
                "Please use alpha numeric characters and dots only for the namespace.",
            )?);
        }
    }

    let platform = match resolve_platform(flags.platform.as_deref()) {
        Some(Ok(platform)) => {
            resolved.platform = Some(platform);
            platform
        }
        outcome => {
            if let Some(Err(error)) = &outcome {
                report_fallback("platform", error);
            }
            let items: Vec<&str> = Platform::ALL.iter().map(|p| p.label()).collect();
            let index = prompter.select(
                "On which platform would you like to host the application?",
                &items,
                0,
            )?;
            let platform = Platform::ALL[index];
            answers.platform = Some(platform);
            platform
        }
    };

    match resolve_view_type(flags.viewtype.as_deref()) {
        Some(Ok(view_type)) => resolved.viewtype = Some(view_type),
        outcome => {
            if let Some(Err(error)) = &outcome {
                report_fallback("view type", error);
            }
            let items: Vec<&str> = ViewType::ALL.iter().map(|v| v.name()).collect();
            let index = prompter.select("Which view type do you want to use?", &items, 0)?;
            answers.viewtype = Some(ViewType::ALL[index]);
        }
    }

    match resolve_ui5_lib_source(flags.ui5libs.as_deref(), platform) {
        Some(Ok(source)) => resolved.ui5libs = Some(source),
        outcome => {
            if let Some(Err(error)) = &outcome {
                report_fallback("UI5 library source", error);
            }
            // The Launchpad service only works with the SAPUI5 CDN, so the
            // choice list collapses accordingly.
            let choices: Vec<Ui5LibSource> = if platform == Platform::LaunchpadSrv {
                vec![Ui5LibSource::CdnSapUi5]
            } else {
                Ui5LibSource::ALL.to_vec()
            };
            let items: Vec<&str> = choices.iter().map(|s| s.label()).collect();
            let index =
                prompter.select("Where should your UI5 libs be served from?", &items, 0)?;
            answers.ui5libs = Some(choices[index]);
        }
    }

    match resolve_bool(flags.newdir.as_deref()) {
        Some(Ok(value)) => resolved.newdir = Some(value),
        outcome => {
            if let Some(Err(error)) = &outcome {
                report_fallback("bool parameter", error);
            }
            answers.newdir = Some(
                prompter.confirm("Would you like to create a new directory for the project?", true)?,
            );
        }
    }

    match resolve_bool(flags.codeassist.as_deref()) {
        Some(Ok(value)) => resolved.codeassist = Some(value),
        outcome => {
            if let Some(Err(error)) = &outcome {
                report_fallback("bool parameter", error);
            }
            answers.codeassist = Some(prompter.confirm(
                "Would you like to add JavaScript code assist libraries to the project?",
                true,
            )?);
        }
    }

    FinalConfiguration::merge(answers, resolved)
}
