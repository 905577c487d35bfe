//! `groupform` opens the create-group form in the terminal.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Report, Result, WrapErr};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use groupform::{DEFAULT_TITLE, GroupForm, GroupSchema, UiOptions};

#[derive(Debug, Parser)]
#[command(
    name = "groupform",
    version,
    about = "Draft a group in an interactive terminal form"
)]
struct Cli {
    /// Title shown at the top of the card
    #[arg(long = "title", value_name = "TEXT", default_value = DEFAULT_TITLE)]
    title: String,

    /// Prefill values: file path, inline JSON object, or "-" for stdin
    #[arg(short = 'd', long = "defaults", value_name = "SPEC")]
    defaults: Option<String>,

    /// Print every submitted group as JSON after the form closes
    #[arg(long = "print")]
    print: bool,

    /// Print the validation schema and exit
    #[arg(long = "print-schema")]
    print_schema: bool,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// How long notifications stay on screen, in milliseconds
    #[arg(long = "toast-ms", value_name = "MS", default_value_t = 4000)]
    toast_ms: u64,

    /// Quit without confirmation even when the form has unsubmitted edits
    #[arg(long = "no-confirm-exit")]
    no_confirm_exit: bool,

    /// Hide the key help line
    #[arg(long = "no-help")]
    no_help: bool,

    /// Only validate on submit, never while editing
    #[arg(long = "no-revalidate")]
    no_revalidate: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }

    if cli.print_schema {
        let schema = GroupSchema::new().map_err(|err| Report::msg(format!("{err:#}")))?;
        println!("{}", serde_json::to_string_pretty(schema.document())?);
        return Ok(());
    }

    let options = UiOptions::default()
        .with_toast_duration(Duration::from_millis(cli.toast_ms))
        .with_confirm_exit(!cli.no_confirm_exit)
        .with_help(!cli.no_help)
        .with_revalidate(!cli.no_revalidate);

    let mut form = GroupForm::new()
        .with_title(cli.title.clone())
        .with_options(options);
    if let Some(spec) = cli.defaults.as_deref() {
        form = form.with_defaults(load_defaults(spec)?);
    }

    tracing::info!(title = %cli.title, "opening group form");
    let submissions = form
        .run()
        .map_err(|err| Report::msg(format!("{err:#}")))?;
    tracing::info!(count = submissions.len(), "group form closed");

    if cli.print {
        for draft in &submissions {
            println!("{}", serde_json::to_string(draft)?);
        }
    }
    Ok(())
}

/// Logs go to a file so they never draw over the form.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_defaults(spec: &str) -> Result<Value> {
    if spec == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("failed to read defaults from stdin")?;
        return parse_defaults(&buffer, "stdin");
    }

    match fs::read_to_string(spec) {
        Ok(contents) => parse_defaults(&contents, spec),
        Err(err) if err.kind() == io::ErrorKind::NotFound => parse_defaults(spec, "inline defaults"),
        Err(err) => Err(Report::new(err).wrap_err(format!("failed to read defaults from {spec}"))),
    }
}

fn parse_defaults(contents: &str, origin: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(contents)
        .wrap_err_with(|| format!("failed to parse defaults from {origin} as JSON"))?;
    if !value.is_object() {
        return Err(Report::msg(format!(
            "defaults from {origin} must be a JSON object"
        )));
    }
    Ok(value)
}
