//! HL CLI
//!
//! Command-line interface for the HL checker.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use hl_core::diagnostics::{Diagnostic, DiagnosticsOutput};
use hl_core::{CheckReport, HlConfig, Interpreter, LoadError, SourceFile, FAILURE_MESSAGE};
use log::debug;

#[derive(Parser)]
#[command(name = "hl")]
#[command(author, version, about = "Syntax checker for the HL mini-language", long_about = None)]
struct Cli {
    /// Path to the .hl source file
    file: String,

    /// Output format (human, json)
    #[arg(short, long, default_value = "human")]
    format: String,

    /// Directory to write NOSPACES.TXT and RES_SYM.TXT to (overrides hl.toml)
    #[arg(short, long)]
    out_dir: Option<String>,

    /// Config file (defaults to hl.toml next to the source file)
    #[arg(short, long)]
    config: Option<String>,

    /// Skip writing the artifact files
    #[arg(long)]
    no_artifacts: bool,

    /// On failure, show which line was rejected and why
    #[arg(long)]
    explain: bool,

    /// Verbose mode - log each statement as it is validated
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // A missing source is reported before any config problem.
    let source = match SourceFile::load(&cli.file) {
        Ok(source) => source,
        Err(e) => return report_load_error(&cli, &e),
    };
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => return report_load_error(&cli, &e),
    };
    debug!("artifact settings: {:?}", config.artifacts);

    let interpreter = Interpreter::new(config);
    match interpreter.check_loaded(source) {
        Ok(report) => report_check(&cli, &report),
        Err(e) => report_load_error(&cli, &e),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn load_config(cli: &Cli) -> Result<HlConfig, LoadError> {
    let mut config = match &cli.config {
        Some(path) => HlConfig::load(Path::new(path))?,
        None => HlConfig::discover(Path::new(&cli.file))?,
    };
    if let Some(dir) = &cli.out_dir {
        config.artifacts.output_dir = dir.into();
    }
    if cli.no_artifacts {
        config.artifacts.enabled = false;
    }
    Ok(config)
}

fn report_check(cli: &Cli, report: &CheckReport) -> ExitCode {
    match cli.format.as_str() {
        "json" => print_json(&report.to_output()),
        _ => {
            println!("{}", report.verdict_message());

            if cli.explain {
                if let Some(source_report) = report.source_report() {
                    eprintln!("{:?}", miette::Report::new(source_report));
                    eprintln!(
                        "{}: could not validate `{}`",
                        "error".red().bold(),
                        cli.file
                    );
                } else {
                    eprintln!(
                        "{} `{}` validated successfully",
                        "Finished".green().bold(),
                        cli.file
                    );
                }
            }
        }
    }

    if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn report_load_error(cli: &Cli, error: &LoadError) -> ExitCode {
    match cli.format.as_str() {
        "json" => {
            let output = DiagnosticsOutput {
                version: "1.0".to_string(),
                status: "error".to_string(),
                verdict: FAILURE_MESSAGE.to_string(),
                errors: Diagnostic::from_load(error, &cli.file).into_iter().collect(),
                artifacts: None,
            };
            print_json(&output);
            if output.errors.is_empty() {
                eprintln!("{} {}", "error:".red().bold(), error);
            }
        }
        _ => match error {
            LoadError::SourceNotFound { .. } => println!("{}: {}", FAILURE_MESSAGE, error),
            _ => println!("An unexpected error occurred: {}", error),
        },
    }
    ExitCode::from(2)
}

fn print_json(output: &DiagnosticsOutput) {
    match serde_json::to_string_pretty(output) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("{} Failed to serialize output: {}", "error:".red().bold(), e),
    }
}
