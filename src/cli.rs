//! Command-line interface for docsig.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// Root walked when no paths are given
pub const DEFAULT_ROOT: &str = "docs";

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Files or directories to format (`-` for stdin)
    pub inputs: Vec<PathBuf>,

    /// Parameter indent width
    pub indent: Option<usize>,

    /// Declaration prefix
    pub trigger: Option<String>,

    /// Tokens to strip from declarations (replaces the configured list)
    pub strip: Vec<String>,

    /// File-name substring selecting documents
    pub name_pattern: Option<String>,

    /// Exclude patterns for files/directories (glob patterns)
    pub exclude: Vec<String>,

    /// Honour `<!-- docsig: off/on -->` regions
    pub directives: bool,

    /// Number of parallel jobs (0 = auto, 1 = sequential)
    pub jobs: usize,

    /// Output to stdout instead of in-place
    pub stdout: bool,

    /// Config file path
    pub config: Option<PathBuf>,

    /// Enable debug output
    pub debug: bool,

    /// Silent mode (errors only)
    pub silent: bool,
}

impl CliArgs {
    /// Whether input should be read from stdin
    #[must_use]
    pub fn use_stdin(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].as_os_str() == "-"
    }
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("docsig")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reflows function-signature lines in markdown documentation")
        .arg(
            Arg::new("inputs")
                .help("Files or directories to format, or - for stdin [default: docs]")
                .value_name("PATH")
                .num_args(1..)
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("indent")
                .short('i')
                .long("indent")
                .help("Spaces before each parameter [default: 4]")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("trigger")
                .short('t')
                .long("trigger")
                .help("Prefix marking a declaration line [default: \"function \"]")
                .value_name("TEXT"),
        )
        .arg(
            Arg::new("strip")
                .long("strip")
                .help("Token removed from declarations (can be repeated) [default: \"struct \"]")
                .value_name("TOKEN")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("name-pattern")
                .short('n')
                .long("name-pattern")
                .help("Substring a file name must contain [default: .md]")
                .value_name("TEXT"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .help("Exclude files/directories matching pattern (glob syntax, can be repeated)")
                .value_name("PATTERN")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("directives")
                .long("directives")
                .help("Skip regions between <!-- docsig: off --> and <!-- docsig: on -->")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .help("Number of parallel jobs (0=auto, 1=sequential) [default: 1]")
                .value_name("NUM")
                .default_value("1")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("stdout")
                .short('s')
                .long("stdout")
                .help("Output to stdout instead of modifying files in-place")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file (overrides auto-discovery)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output (config, per-file counts)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Silent mode (errors only)")
                .action(ArgAction::SetTrue)
                .conflicts_with("debug"),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    let inputs = matches
        .get_many::<PathBuf>("inputs")
        .map(|vals| vals.cloned().collect())
        .unwrap_or_else(|| vec![PathBuf::from(DEFAULT_ROOT)]);

    CliArgs {
        inputs,
        indent: matches.get_one::<usize>("indent").copied(),
        trigger: matches.get_one::<String>("trigger").cloned(),
        strip: matches
            .get_many::<String>("strip")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        name_pattern: matches.get_one::<String>("name-pattern").cloned(),
        exclude: matches
            .get_many::<String>("exclude")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        directives: matches.get_flag("directives"),
        jobs: matches.get_one::<usize>("jobs").copied().unwrap_or(1),
        stdout: matches.get_flag("stdout"),
        config: matches.get_one::<PathBuf>("config").cloned(),
        debug: matches.get_flag("debug"),
        silent: matches.get_flag("silent"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_builds() {
        let cmd = build_cli();
        assert_eq!(cmd.get_name(), "docsig");
        cmd.debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = parse_args_from(vec!["docsig"]);
        assert_eq!(args.inputs, vec![PathBuf::from("docs")]);
        assert_eq!(args.indent, None);
        assert_eq!(args.trigger, None);
        assert!(args.strip.is_empty());
        assert_eq!(args.name_pattern, None);
        assert!(args.exclude.is_empty());
        assert!(!args.directives);
        assert_eq!(args.jobs, 1);
        assert!(!args.stdout);
        assert!(!args.debug);
        assert!(!args.silent);
        assert!(!args.use_stdin());
    }

    #[test]
    fn test_multiple_inputs() {
        let args = parse_args_from(vec!["docsig", "docs", "README.md"]);
        assert_eq!(
            args.inputs,
            vec![PathBuf::from("docs"), PathBuf::from("README.md")]
        );
    }

    #[test]
    fn test_stdin_marker() {
        let args = parse_args_from(vec!["docsig", "-"]);
        assert!(args.use_stdin());
    }

    #[test]
    fn test_formatting_overrides() {
        let args = parse_args_from(vec![
            "docsig",
            "-i",
            "2",
            "--trigger",
            "fn ",
            "--strip",
            "mut ",
            "--strip",
            "ref ",
            "-n",
            ".markdown",
            "docs",
        ]);
        assert_eq!(args.indent, Some(2));
        assert_eq!(args.trigger.as_deref(), Some("fn "));
        assert_eq!(args.strip, vec!["mut ", "ref "]);
        assert_eq!(args.name_pattern.as_deref(), Some(".markdown"));
    }

    #[test]
    fn test_exclude_multiple() {
        let args = parse_args_from(vec![
            "docsig",
            "-e",
            "vendor",
            "--exclude",
            "CHANGELOG*",
            "docs/",
        ]);
        assert_eq!(args.exclude, vec!["vendor", "CHANGELOG*"]);
    }

    #[test]
    fn test_jobs_and_flags() {
        let args = parse_args_from(vec!["docsig", "-j", "0", "-s", "-D", "docs"]);
        assert_eq!(args.jobs, 0);
        assert!(args.stdout);
        assert!(args.debug);
    }

    #[test]
    fn test_silent_conflicts_with_debug() {
        let result = build_cli().try_get_matches_from(vec!["docsig", "-S", "-D"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_directives_flag() {
        let args = parse_args_from(vec!["docsig", "--directives", "docs"]);
        assert!(args.directives);
    }

    #[test]
    fn test_config_path() {
        let args = parse_args_from(vec!["docsig", "-c", "cfg/docsig.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("cfg/docsig.toml")));
    }
}
