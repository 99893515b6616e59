//! Option catalog for the enumerated fields.
//!
//! Each enum carries its canonical display string (the value the final
//! configuration holds and the prompt shows) and, where the command line
//! accepts one, a short alias key. The alias tables are total and
//! injective: every declared key maps to exactly one canonical value and
//! lookups never silently default.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::FieldError;

/// Target platform for hosting the generated application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "Static webserver")]
    StaticWebserver,
    #[serde(rename = "Application Router @ Cloud Foundry")]
    AppRouterCf,
    #[serde(rename = "SAP HTML5 Application Repository service for SAP BTP")]
    AppRepBtp,
    #[serde(rename = "SAP Launchpad service")]
    LaunchpadSrv,
    #[serde(rename = "Application Router @ SAP HANA XS Advanced")]
    AppRouterHanaXs,
    #[serde(rename = "SAP NetWeaver")]
    Netweaver,
}

impl Platform {
    /// Display order. The first entry is the prompt default.
    pub const ALL: [Platform; 6] = [
        Platform::StaticWebserver,
        Platform::AppRouterCf,
        Platform::AppRepBtp,
        Platform::LaunchpadSrv,
        Platform::AppRouterHanaXs,
        Platform::Netweaver,
    ];

    /// Canonical display string.
    pub fn label(self) -> &'static str {
        match self {
            Platform::StaticWebserver => "Static webserver",
            Platform::AppRouterCf => "Application Router @ Cloud Foundry",
            Platform::AppRepBtp => "SAP HTML5 Application Repository service for SAP BTP",
            Platform::LaunchpadSrv => "SAP Launchpad service",
            Platform::AppRouterHanaXs => "Application Router @ SAP HANA XS Advanced",
            Platform::Netweaver => "SAP NetWeaver",
        }
    }

    /// Short alias key accepted on the command line.
    pub fn alias(self) -> &'static str {
        match self {
            Platform::StaticWebserver => "staticWebserver",
            Platform::AppRouterCf => "appRouterCf",
            Platform::AppRepBtp => "appRepBtp",
            Platform::LaunchpadSrv => "launchpadSrv",
            Platform::AppRouterHanaXs => "appRouterHanaXs",
            Platform::Netweaver => "netweaver",
        }
    }

    /// Look up a platform by its command-line alias key.
    pub fn from_alias(key: &str) -> Result<Platform, FieldError> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.alias() == key)
            .ok_or_else(|| FieldError::UnknownAlias { key: key.to_string() })
    }

    /// Whether the platform needs the Cloud Foundry / MTA build toolchain.
    pub fn uses_mta_tooling(self) -> bool {
        !matches!(self, Platform::StaticWebserver | Platform::Netweaver)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the UI5 libraries are served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ui5LibSource {
    #[serde(rename = "Content delivery network (OpenUI5)")]
    CdnOpenUi5,
    #[serde(rename = "Content delivery network (SAPUI5)")]
    CdnSapUi5,
    #[serde(rename = "Local resources (OpenUI5)")]
    LocalOpenUi5,
    #[serde(rename = "Local resources (SAPUI5)")]
    LocalSapUi5,
}

impl Ui5LibSource {
    /// Display order. The first entry is the prompt default.
    pub const ALL: [Ui5LibSource; 4] = [
        Ui5LibSource::CdnOpenUi5,
        Ui5LibSource::CdnSapUi5,
        Ui5LibSource::LocalOpenUi5,
        Ui5LibSource::LocalSapUi5,
    ];

    /// Canonical display string.
    pub fn label(self) -> &'static str {
        match self {
            Ui5LibSource::CdnOpenUi5 => "Content delivery network (OpenUI5)",
            Ui5LibSource::CdnSapUi5 => "Content delivery network (SAPUI5)",
            Ui5LibSource::LocalOpenUi5 => "Local resources (OpenUI5)",
            Ui5LibSource::LocalSapUi5 => "Local resources (SAPUI5)",
        }
    }

    /// Short alias key accepted on the command line.
    pub fn alias(self) -> &'static str {
        match self {
            Ui5LibSource::CdnOpenUi5 => "cdnOpenUi5",
            Ui5LibSource::CdnSapUi5 => "cdnSapUi5",
            Ui5LibSource::LocalOpenUi5 => "localOpenUi5",
            Ui5LibSource::LocalSapUi5 => "localSapUi5",
        }
    }

    /// Look up a library source by its command-line alias key.
    pub fn from_alias(key: &str) -> Result<Ui5LibSource, FieldError> {
        Ui5LibSource::ALL
            .into_iter()
            .find(|source| source.alias() == key)
            .ok_or_else(|| FieldError::UnknownAlias { key: key.to_string() })
    }
}

impl fmt::Display for Ui5LibSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// View technology for the generated main view.
///
/// No alias keys: the command line must supply the exact name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewType {
    XML,
    JSON,
    JS,
    HTML,
}

impl ViewType {
    /// Display order. The first entry is the prompt default.
    pub const ALL: [ViewType; 4] = [ViewType::XML, ViewType::JSON, ViewType::JS, ViewType::HTML];

    pub fn name(self) -> &'static str {
        match self {
            ViewType::XML => "XML",
            ViewType::JSON => "JSON",
            ViewType::JS => "JS",
            ViewType::HTML => "HTML",
        }
    }

    /// File extension of the view artifact for this type.
    pub fn file_extension(self) -> &'static str {
        match self {
            ViewType::XML => "xml",
            ViewType::JSON => "json",
            ViewType::JS => "js",
            ViewType::HTML => "html",
        }
    }

    /// Exact-match lookup; there is no alias indirection for view types.
    pub fn from_name(name: &str) -> Option<ViewType> {
        ViewType::ALL.into_iter().find(|view_type| view_type.name() == name)
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
