use clap::Parser;

/// Sparse record of command-line flag values, one slot per configurable
/// field.
///
/// Parsing is permissive: unknown flags and stray positionals are skipped
/// and declared flags are honored wherever they appear, mirroring how the
/// generator is invoked by wrappers that pass extra arguments through.
/// Fields that end up as booleans are kept as raw strings here because
/// three states must survive parsing: supplied-true, supplied-false, and
/// not supplied.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "ui5gen", version, about = "Scaffold a new OpenUI5/SAPUI5 project")]
pub struct RawFlags {
    /// Project name (letters and digits, must contain a letter)
    #[arg(short = 'n', long)]
    pub projectname: Option<String>,

    /// Project namespace, e.g. com.myorg
    #[arg(short = 's', long = "namespaceUI5")]
    pub namespace_ui5: Option<String>,

    /// Target platform alias key, e.g. staticWebserver or launchpadSrv
    #[arg(short = 'p', long)]
    pub platform: Option<String>,

    /// View type: XML, JSON, JS or HTML
    #[arg(short = 'v', long)]
    pub viewtype: Option<String>,

    /// UI5 library source alias key, e.g. cdnOpenUi5
    #[arg(short = 'l', long)]
    pub ui5libs: Option<String>,

    /// Create a new directory for the project ("true" or "false")
    #[arg(short = 'd', long)]
    pub newdir: Option<String>,

    /// Add JavaScript code assist libraries ("true" or "false")
    #[arg(short = 'c', long)]
    pub codeassist: Option<String>,
}

/// Declared flag names; must stay in sync with the derive above.
const FIELDS: [(&str, char); 7] = [
    ("projectname", 'n'),
    ("namespaceUI5", 's'),
    ("platform", 'p'),
    ("viewtype", 'v'),
    ("ui5libs", 'l'),
    ("newdir", 'd'),
    ("codeassist", 'c'),
];

impl RawFlags {
    /// Parse the process arguments in partial mode. Help and version
    /// requests are handled by clap (printing and exiting).
    pub fn parse_cli() -> RawFlags {
        RawFlags::parse_from(partial_argv(std::env::args()))
    }

    /// Permissive parse of a raw argument vector (first element is the
    /// program name). Unknown flags never fail the parse and never eat
    /// the flags that follow them; a declared flag with no value attached
    /// leaves its field unset.
    pub fn parse_partial<I, S>(argv: I) -> RawFlags
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // The filtered argv contains only declared tokens, so the only
        // parse errors left are help/version requests.
        RawFlags::try_parse_from(partial_argv(argv)).unwrap_or_default()
    }
}

fn long_field(name: &str) -> Option<&'static str> {
    FIELDS.iter().find(|(long, _)| *long == name).map(|(long, _)| *long)
}

fn short_field(short: char) -> Option<&'static str> {
    FIELDS.iter().find(|(_, c)| *c == short).map(|(long, _)| *long)
}

/// A token that opens another flag cannot serve as a value.
fn flag_like(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}

/// Reduce an argument vector to the tokens clap is allowed to see:
/// declared flags with their values, plus help/version. Everything else
/// (unknown flags, stray positionals, repeated flags) is dropped; for a
/// repeated flag the first occurrence wins.
fn partial_argv<I, S>(argv: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut tokens = argv.into_iter().map(Into::into);
    let mut kept: Vec<String> = Vec::new();
    let mut seen: Vec<&'static str> = Vec::new();

    if let Some(program) = tokens.next() {
        kept.push(program);
    }

    let tokens: Vec<String> = tokens.collect();
    let mut index = 0;
    while index < tokens.len() {
        let token = &tokens[index];

        if token == "--help" || token == "-h" || token == "--version" || token == "-V" {
            kept.push(token.clone());
            index += 1;
            continue;
        }

        let field = if let Some(rest) = token.strip_prefix("--") {
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            long_field(name)
        } else if let Some(rest) = token.strip_prefix('-') {
            rest.chars().next().and_then(short_field)
        } else {
            None
        };

        let Some(field) = field else {
            // Unknown flag or stray positional: skip this token only.
            index += 1;
            continue;
        };

        let attached = token.contains('=') || (token.starts_with('-') && !token.starts_with("--") && token.len() > 2);

        if seen.contains(&field) {
            // Drop the repeat and its value, if it carries one.
            let has_value = !attached && tokens.get(index + 1).is_some_and(|v| !flag_like(v));
            index += if has_value { 2 } else { 1 };
            continue;
        }

        if attached {
            kept.push(token.clone());
            seen.push(field);
            index += 1;
            continue;
        }

        match tokens.get(index + 1) {
            Some(value) if !flag_like(value) => {
                kept.push(token.clone());
                kept.push(value.clone());
                seen.push(field);
                index += 2;
            }
            // Flag with no value attached: the field stays unset.
            _ => index += 1,
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> RawFlags {
        let argv = std::iter::once("ui5gen").chain(args.iter().copied());
        RawFlags::parse_partial(argv)
    }

    #[test]
    fn long_and_short_forms_are_equivalent() {
        let long = parse(&["--projectname", "MyApp", "--namespaceUI5", "com.acme"]);
        let short = parse(&["-n", "MyApp", "-s", "com.acme"]);

        assert_eq!(long.projectname.as_deref(), Some("MyApp"));
        assert_eq!(long.namespace_ui5.as_deref(), Some("com.acme"));
        assert_eq!(short.projectname, long.projectname);
        assert_eq!(short.namespace_ui5, long.namespace_ui5);
    }

    #[test]
    fn equals_and_attached_value_forms_are_accepted() {
        let flags = parse(&["--projectname=MyApp", "-scom.acme"]);
        assert_eq!(flags.projectname.as_deref(), Some("MyApp"));
        assert_eq!(flags.namespace_ui5.as_deref(), Some("com.acme"));
    }

    #[test]
    fn absent_flags_stay_none() {
        let flags = parse(&["-n", "MyApp"]);
        assert_eq!(flags.platform, None);
        assert_eq!(flags.newdir, None);
        assert_eq!(flags.codeassist, None);
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let flags = parse(&["--skip-cache", "-n", "MyApp", "--force"]);
        assert_eq!(flags.projectname.as_deref(), Some("MyApp"));
    }

    #[test]
    fn flags_after_unknown_tokens_survive() {
        let flags = parse(&[
            "--unknown",
            "value",
            "-n",
            "MyApp",
            "--also-unknown",
            "-s",
            "com.acme",
            "stray",
            "-v",
            "XML",
        ]);
        assert_eq!(flags.projectname.as_deref(), Some("MyApp"));
        assert_eq!(flags.namespace_ui5.as_deref(), Some("com.acme"));
        assert_eq!(flags.viewtype.as_deref(), Some("XML"));
    }

    #[test]
    fn flag_with_no_value_attached_stays_unset() {
        let flags = parse(&["-n", "-s", "com.acme"]);
        assert_eq!(flags.projectname, None);
        assert_eq!(flags.namespace_ui5.as_deref(), Some("com.acme"));

        let flags = parse(&["-s", "com.acme", "-n"]);
        assert_eq!(flags.projectname, None);
        assert_eq!(flags.namespace_ui5.as_deref(), Some("com.acme"));
    }

    #[test]
    fn repeated_flags_keep_the_first_occurrence() {
        let flags = parse(&["-n", "First", "-n", "Second", "-s", "com.acme"]);
        assert_eq!(flags.projectname.as_deref(), Some("First"));
        assert_eq!(flags.namespace_ui5.as_deref(), Some("com.acme"));

        // A bare repeat must not swallow the flag that follows it.
        let flags = parse(&["-n", "First", "-n", "-s", "com.acme"]);
        assert_eq!(flags.projectname.as_deref(), Some("First"));
        assert_eq!(flags.namespace_ui5.as_deref(), Some("com.acme"));
    }

    #[test]
    fn boolean_fields_are_parsed_as_raw_strings() {
        let flags = parse(&["-d", "true", "-c", "FALSE"]);
        assert_eq!(flags.newdir.as_deref(), Some("true"));
        assert_eq!(flags.codeassist.as_deref(), Some("FALSE"));

        let flags = parse(&["-d", "maybe"]);
        assert_eq!(flags.newdir.as_deref(), Some("maybe"));
    }

    #[test]
    fn every_field_accepts_a_value() {
        let flags = parse(&[
            "-n",
            "MyApp",
            "-s",
            "com.acme",
            "-p",
            "staticWebserver",
            "-v",
            "XML",
            "-l",
            "cdnOpenUi5",
            "-d",
            "true",
            "-c",
            "false",
        ]);
        assert_eq!(flags.platform.as_deref(), Some("staticWebserver"));
        assert_eq!(flags.viewtype.as_deref(), Some("XML"));
        assert_eq!(flags.ui5libs.as_deref(), Some("cdnOpenUi5"));
        assert_eq!(flags.newdir.as_deref(), Some("true"));
        assert_eq!(flags.codeassist.as_deref(), Some("false"));
    }
}
