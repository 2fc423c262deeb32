//! Command-line argument parsing.
//!
//! ```text
//! stackit [--api-url URL] [--route PATH] [--version|-V] [--logout] [--help|-h]
//! ```

use crate::router::Route;

/// Flags that shape a TUI run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub api_url: Option<String>,
    pub route: Option<Route>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Print the version and exit
    Version,
    /// Print usage and exit
    Help,
    /// Delete the stored session and exit
    Logout,
    /// Run the TUI application (default)
    RunTui(RunOptions),
    /// Arguments could not be parsed
    Invalid(String),
}

pub const USAGE: &str = "\
Usage: stackit [OPTIONS]

Options:
  --api-url URL   Forum API base URL (default: $STACKIT_API_URL or http://localhost:8000)
  --route PATH    Page to open: /, /ask, /login, /register or /questions/<id>
  --logout        Forget the stored session and exit
  -V, --version   Print version
  -h, --help      Print this help";

/// Parse command-line arguments, program name first.
///
/// ```
/// use stackit::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["stackit".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        // Accept both `--flag value` and `--flag=value`
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--logout" => return CliCommand::Logout,
            "--api-url" => match inline.or_else(|| args.next()) {
                Some(url) if !url.trim().is_empty() => options.api_url = Some(url),
                _ => return CliCommand::Invalid("--api-url requires a URL".to_string()),
            },
            "--route" => {
                let Some(path) = inline.or_else(|| args.next()) else {
                    return CliCommand::Invalid("--route requires a path".to_string());
                };
                match Route::parse(&path) {
                    Some(route) => options.route = Some(route),
                    None => return CliCommand::Invalid(format!("unknown route: {}", path)),
                }
            }
            other => return CliCommand::Invalid(format!("unknown argument: {}", other)),
        }
    }

    CliCommand::RunTui(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["stackit".to_string()];
        all.extend(args.iter().map(|a| a.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_and_logout() {
        assert_eq!(parse(&["-h"]), CliCommand::Help);
        assert_eq!(parse(&["--logout"]), CliCommand::Logout);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::RunTui(RunOptions::default()));
    }

    #[test]
    fn test_parse_api_url_and_route() {
        let expected = CliCommand::RunTui(RunOptions {
            api_url: Some("http://forum:8000".to_string()),
            route: Some(Route::Question(42)),
        });
        assert_eq!(
            parse(&["--api-url", "http://forum:8000", "--route", "/questions/42"]),
            expected
        );
        assert_eq!(
            parse(&["--api-url=http://forum:8000", "--route=/questions/42"]),
            expected
        );
    }

    #[test]
    fn test_parse_missing_value() {
        assert!(matches!(parse(&["--api-url"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--route"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_unknown_route_and_flag() {
        assert_eq!(
            parse(&["--route", "/nowhere"]),
            CliCommand::Invalid("unknown route: /nowhere".to_string())
        );
        assert!(matches!(parse(&["--unknown"]), CliCommand::Invalid(_)));
    }
}
