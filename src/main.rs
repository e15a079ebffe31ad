//! docsig - Reflows function-signature lines in markdown documentation

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io::{self, Write};

use docsig::discover::collect_files;
use docsig::process::{format_document, run, OutputMode};
use docsig::{parse_args, CliArgs, Config, DeclarationFormatter, Result};
use log::LevelFilter;

fn main() -> Result<()> {
    let args = parse_args();
    init_logging(&args);

    let config = build_config(&args)?;
    let formatter = DeclarationFormatter::from_config(&config);

    if args.use_stdin() {
        return process_stdin(&formatter);
    }

    let files = collect_files(&args.inputs, &config);
    if files.is_empty() {
        log::info!("No markdown files found to format.");
        return Ok(());
    }

    let mode = if args.stdout {
        OutputMode::Stdout
    } else {
        OutputMode::InPlace
    };
    let summary = run(&files, &formatter, mode, args.jobs)?;

    log::info!(
        "Formatted {} files ({} declarations reflowed).",
        summary.files,
        summary.rewritten
    );
    Ok(())
}

/// Route `log` output to stderr; `RUST_LOG` still overrides the flags
fn init_logging(args: &CliArgs) {
    let level = if args.debug {
        LevelFilter::Debug
    } else if args.silent {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();
}

/// Build configuration from config files and CLI overrides
fn build_config(args: &CliArgs) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        log::debug!("Using explicit config file: {}", config_path.display());
        Config::from_toml_file(config_path)?
    } else {
        let cwd = std::env::current_dir().unwrap_or_default();
        Config::from_discovered_files(&cwd)
    };

    if let Some(indent) = args.indent {
        config.indent = indent;
    }
    if let Some(trigger) = &args.trigger {
        config.trigger.clone_from(trigger);
    }
    if !args.strip.is_empty() {
        config.strip.clone_from(&args.strip);
    }
    if let Some(name_pattern) = &args.name_pattern {
        config.name_pattern.clone_from(name_pattern);
    }
    config.exclude.extend(args.exclude.iter().cloned());
    if args.directives {
        config.directives = true;
    }

    log::debug!("Configuration: {config:?}");

    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}

/// Process input from stdin, output to stdout
fn process_stdin(formatter: &DeclarationFormatter) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let stats = format_document(stdin.lock(), &mut stdout, formatter)?;
    stdout.flush()?;

    log::debug!(
        "stdin: {} lines, {} declarations reflowed",
        stats.lines,
        stats.rewritten
    );
    Ok(())
}
