//! package.json assembly for the generated project.
//!
//! The script and dependency tables vary with the target platform: CF-like
//! platforms get the MTA build toolchain, HANA XS Advanced swaps the
//! deploy transport, NetWeaver deploys over the ABAP stack, and code
//! assist pulls in the UI5 typing packages.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::{Map, Value, json};

use crate::domain::catalog::Platform;
use crate::domain::config::FinalConfiguration;
use crate::domain::error::AppError;

pub const PACKAGE_FILE: &str = "package.json";

fn set(map: &mut Map<String, Value>, key: &str, value: &str) {
    map.insert(key.to_string(), Value::String(value.to_string()));
}

/// Build the package.json document for the resolved configuration.
pub fn build(config: &FinalConfiguration) -> Value {
    let mut scripts = Map::new();
    set(&mut scripts, "start", "ui5 serve --config=uimodule/ui5.yaml  --open index.html");
    set(&mut scripts, "build:ui", "run-s ");
    set(&mut scripts, "test", "run-s lint karma");
    set(&mut scripts, "karma-ci", "karma start karma-ci.conf.js");
    set(&mut scripts, "clearCoverage", "shx rm -rf coverage");
    set(&mut scripts, "karma", "run-s clearCoverage karma-ci");
    set(&mut scripts, "lint", "eslint .");

    let mut dev_dependencies = Map::new();
    set(&mut dev_dependencies, "shx", "^0.3.3");
    set(&mut dev_dependencies, "@ui5/cli", "^2.14.1");
    set(&mut dev_dependencies, "ui5-middleware-livereload", "^0.5.8");
    set(&mut dev_dependencies, "karma", "^6.3.9");
    set(&mut dev_dependencies, "karma-chrome-launcher", "^3.1.0");
    set(&mut dev_dependencies, "karma-coverage", "^2.1.0");
    set(&mut dev_dependencies, "karma-ui5", "^2.3.4");
    set(&mut dev_dependencies, "npm-run-all", "^4.1.5");
    set(&mut dev_dependencies, "eslint", "^7.32.0");

    let mut ui5_dependencies = vec!["ui5-middleware-livereload".to_string()];

    if config.platform.uses_mta_tooling() {
        set(&mut dev_dependencies, "ui5-middleware-cfdestination", "^0.7.3");
        set(&mut dev_dependencies, "ui5-task-zipper", "^0.4.7");
        set(&mut dev_dependencies, "cross-var", "^1.1.0");
        set(&mut dev_dependencies, "mbt", "^1.2.7");
        ui5_dependencies.push("ui5-middleware-cfdestination".to_string());
        ui5_dependencies.push("ui5-task-zipper".to_string());

        match config.platform {
            Platform::AppRouterCf | Platform::AppRepBtp | Platform::LaunchpadSrv => {
                set(&mut scripts, "build:mta", "mbt build");
                set(
                    &mut scripts,
                    "deploy:cf",
                    &format!(
                        "cross-var cf deploy mta_archives/{}_$npm_package_version.mtar",
                        config.projectname
                    ),
                );
                set(&mut scripts, "deploy", "run-s build:mta deploy:cf");
            }
            Platform::AppRouterHanaXs => {
                set(&mut scripts, "build:mta", "mbt build -p=xsa");
                set(
                    &mut scripts,
                    "deploy:cf",
                    &format!(
                        "cross-var xs deploy mta_archives/{}_$npm_package_version.mtar",
                        config.projectname
                    ),
                );
                set(&mut scripts, "deploy", "run-s build:mta deploy:xs");
            }
            Platform::StaticWebserver | Platform::Netweaver => {}
        }

        if config.platform == Platform::LaunchpadSrv {
            set(&mut scripts, "start", "ui5 serve --config=uimodule/ui5.yaml  --open test/flpSandbox.html");
        }
    }

    if config.platform == Platform::Netweaver {
        set(&mut dev_dependencies, "ui5-task-nwabap-deployer", "*");
        set(&mut dev_dependencies, "ui5-middleware-route-proxy", "*");
        ui5_dependencies.push("ui5-task-nwabap-deployer".to_string());
        ui5_dependencies.push("ui5-middleware-route-proxy".to_string());
        set(&mut scripts, "deploy", "run-s build:ui");
    }

    if config.codeassist {
        set(&mut dev_dependencies, "@sap/eslint-plugin-ui5-jsdocs", "^2.0.5");
        // keep in sync with the minUI5Version in the manifest template
        set(&mut dev_dependencies, "@sapui5/ts-types", "^1.96.0");
    }

    json!({
        "name": config.projectname,
        "version": "0.0.1",
        "scripts": scripts,
        "devDependencies": dev_dependencies,
        "ui5": { "dependencies": ui5_dependencies }
    })
}

/// Write package.json into the destination directory.
pub fn write_package_json(config: &FinalConfiguration, dest: &Path) -> Result<(), AppError> {
    let body = serde_json::to_string_pretty(&build(config)).map_err(io::Error::other)?;
    fs::write(dest.join(PACKAGE_FILE), body)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Ui5LibSource, ViewType};

    fn config_for(platform: Platform, codeassist: bool) -> FinalConfiguration {
        FinalConfiguration {
            projectname: "MyApp".to_string(),
            namespace_ui5: "com.acme".to_string(),
            platform,
            viewtype: ViewType::XML,
            ui5libs: Ui5LibSource::CdnOpenUi5,
            newdir: true,
            codeassist,
            namespace_uri: "com/acme".to_string(),
        }
    }

    #[test]
    fn static_webserver_gets_the_base_toolchain_only() {
        let package = build(&config_for(Platform::StaticWebserver, false));

        assert_eq!(package["name"], "MyApp");
        assert_eq!(package["scripts"]["start"], "ui5 serve --config=uimodule/ui5.yaml  --open index.html");
        assert!(package["scripts"].get("build:mta").is_none());
        assert!(package["devDependencies"].get("mbt").is_none());
        assert_eq!(package["ui5"]["dependencies"], json!(["ui5-middleware-livereload"]));
    }

    #[test]
    fn cloud_foundry_platforms_add_the_mta_toolchain() {
        let package = build(&config_for(Platform::AppRouterCf, false));

        assert_eq!(package["scripts"]["build:mta"], "mbt build");
        assert_eq!(
            package["scripts"]["deploy:cf"],
            "cross-var cf deploy mta_archives/MyApp_$npm_package_version.mtar"
        );
        assert_eq!(package["scripts"]["deploy"], "run-s build:mta deploy:cf");
        assert_eq!(package["devDependencies"]["mbt"], "^1.2.7");
        assert!(
            package["ui5"]["dependencies"]
                .as_array()
                .unwrap()
                .contains(&json!("ui5-task-zipper"))
        );
    }

    #[test]
    fn launchpad_starts_in_the_flp_sandbox() {
        let package = build(&config_for(Platform::LaunchpadSrv, false));
        assert_eq!(
            package["scripts"]["start"],
            "ui5 serve --config=uimodule/ui5.yaml  --open test/flpSandbox.html"
        );
        assert_eq!(package["scripts"]["deploy"], "run-s build:mta deploy:cf");
    }

    #[test]
    fn hana_xs_advanced_deploys_over_xs() {
        let package = build(&config_for(Platform::AppRouterHanaXs, false));
        assert_eq!(package["scripts"]["build:mta"], "mbt build -p=xsa");
        assert_eq!(package["scripts"]["deploy"], "run-s build:mta deploy:xs");
    }

    #[test]
    fn netweaver_uses_the_abap_deployer() {
        let package = build(&config_for(Platform::Netweaver, false));

        assert_eq!(package["devDependencies"]["ui5-task-nwabap-deployer"], "*");
        assert_eq!(package["scripts"]["deploy"], "run-s build:ui");
        assert!(package["scripts"].get("build:mta").is_none());
    }

    #[test]
    fn code_assist_adds_typing_packages() {
        let package = build(&config_for(Platform::StaticWebserver, true));
        assert_eq!(package["devDependencies"]["@sapui5/ts-types"], "^1.96.0");
        assert_eq!(package["devDependencies"]["@sap/eslint-plugin-ui5-jsdocs"], "^2.0.5");

        let package = build(&config_for(Platform::StaticWebserver, false));
        assert!(package["devDependencies"].get("@sapui5/ts-types").is_none());
    }
}
