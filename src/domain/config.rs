//! Configuration records produced by flag resolution and prompting.

use serde::{Deserialize, Serialize};

use super::catalog::{Platform, Ui5LibSource, ViewType};
use super::error::AppError;

/// Tri-state boolean carried by the `newdir` and `codeassist` flags.
///
/// Command-line booleans arrive as raw strings because "supplied false"
/// and "not supplied" must stay distinguishable; only the literal strings
/// "true" and "false" (case-insensitive) coerce to a boolean, everything
/// else is `Unset` and forces a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoolFlag {
    #[default]
    Unset,
    True,
    False,
}

impl BoolFlag {
    pub fn parse(raw: Option<&str>) -> BoolFlag {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("true") => BoolFlag::True,
            Some(value) if value.eq_ignore_ascii_case("false") => BoolFlag::False,
            _ => BoolFlag::Unset,
        }
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            BoolFlag::True => Some(true),
            BoolFlag::False => Some(false),
            BoolFlag::Unset => None,
        }
    }
}

/// Canonical values recovered from command-line flags, one slot per field.
/// `None` means the flag was absent or invalid and the field was prompted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedFields {
    pub projectname: Option<String>,
    pub namespace_ui5: Option<String>,
    pub platform: Option<Platform>,
    pub viewtype: Option<ViewType>,
    pub ui5libs: Option<Ui5LibSource>,
    pub newdir: Option<bool>,
    pub codeassist: Option<bool>,
}

/// Values collected interactively, present only for fields that were
/// actually prompted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptAnswers {
    pub projectname: Option<String>,
    pub namespace_ui5: Option<String>,
    pub platform: Option<Platform>,
    pub viewtype: Option<ViewType>,
    pub ui5libs: Option<Ui5LibSource>,
    pub newdir: Option<bool>,
    pub codeassist: Option<bool>,
}

/// The single authoritative configuration record consumed by the writing
/// steps. Constructed once by [`FinalConfiguration::merge`] and treated as
/// read-only afterwards.
///
/// Serde names are the persistence and template contract; they must not
/// change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalConfiguration {
    pub projectname: String,
    #[serde(rename = "namespaceUI5")]
    pub namespace_ui5: String,
    pub platform: Platform,
    pub viewtype: ViewType,
    pub ui5libs: Ui5LibSource,
    pub newdir: bool,
    pub codeassist: bool,
    #[serde(rename = "namespaceURI")]
    pub namespace_uri: String,
}

impl FinalConfiguration {
    /// Merge prompt answers with flag-resolved values.
    ///
    /// Answers win whenever present and non-empty; otherwise the resolved
    /// flag value is used. A field with neither is a logic defect
    /// (prompting should have covered it) and fails the merge.
    pub fn merge(answers: PromptAnswers, resolved: ResolvedFields) -> Result<Self, AppError> {
        fn pick<T>(
            answer: Option<T>,
            resolved: Option<T>,
            field: &'static str,
        ) -> Result<T, AppError> {
            answer.or(resolved).ok_or(AppError::ConfigurationIncomplete { field })
        }

        let non_empty = |value: Option<String>| value.filter(|s| !s.is_empty());

        let projectname =
            pick(non_empty(answers.projectname), resolved.projectname, "projectname")?;
        let namespace_ui5 =
            pick(non_empty(answers.namespace_ui5), resolved.namespace_ui5, "namespaceUI5")?;
        let platform = pick(answers.platform, resolved.platform, "platform")?;
        let viewtype = pick(answers.viewtype, resolved.viewtype, "viewtype")?;
        let ui5libs = pick(answers.ui5libs, resolved.ui5libs, "ui5libs")?;
        let newdir = pick(answers.newdir, resolved.newdir, "newdir")?;
        let codeassist = pick(answers.codeassist, resolved.codeassist, "codeassist")?;

        let namespace_uri = namespace_ui5.replace('.', "/");

        Ok(Self {
            projectname,
            namespace_ui5,
            platform,
            viewtype,
            ui5libs,
            newdir,
            codeassist,
            namespace_uri,
        })
    }

    /// Directory name used when `newdir` is set.
    pub fn directory_name(&self) -> String {
        format!("{}.{}", self.namespace_ui5, self.projectname)
    }

    /// Fully qualified application id, e.g. `com.myorg.myUI5App`.
    pub fn app_id(&self) -> String {
        format!("{}.{}", self.namespace_ui5, self.projectname)
    }
}
