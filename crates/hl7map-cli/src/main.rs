use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use hl7map::{message_to_json, process_dir, JsonStyle, Naming, PipelineConfig};

#[derive(Debug, Parser)]
#[command(
    name = "hl7map",
    version,
    about = "Convert HL7 v2 (ER7) messages to JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert one message to JSON
    Convert(ConvertArgs),
    /// Convert every message in a directory into a staging directory
    Ingest(IngestArgs),
}

#[derive(Debug, Args)]
struct ConvertArgs {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Use short names (PID_5) instead of long names (PATIENT_NAME)
    #[arg(long)]
    short_names: bool,
    /// Single-line output
    #[arg(long)]
    compact: bool,
    /// Keep keys in message order instead of sorting them
    #[arg(long)]
    unsorted: bool,
}

#[derive(Debug, Args)]
struct IngestArgs {
    /// Directory holding raw messages
    #[arg(long, env = "HL7MAP_SOURCE_DIR", value_name = "DIR")]
    source: PathBuf,
    /// Directory receiving JSON documents
    #[arg(long, env = "HL7MAP_STAGING_DIR", value_name = "DIR")]
    staging: PathBuf,
    /// Leave source files in place after conversion
    #[arg(long)]
    keep_source: bool,
    /// Use short names (PID_5) instead of long names (PATIENT_NAME)
    #[arg(long)]
    short_names: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Convert(args) => run_convert(&args),
        Command::Ingest(args) => run_ingest(&args),
    };
    if let Err(e) = result {
        error!("{e:#}");
        std::process::exit(1);
    }
}

const fn naming(short_names: bool) -> Naming {
    if short_names {
        Naming::Short
    } else {
        Naming::Long
    }
}

fn run_convert(args: &ConvertArgs) -> Result<()> {
    let raw = read_input(args.input.as_deref())?;
    let style = JsonStyle {
        pretty: !args.compact,
        sort_keys: !args.unsorted,
    };
    let mut json = message_to_json(&raw, naming(args.short_names), style)
        .context("failed to convert message")?;
    json.push('\n');
    write_output(args.output.as_deref(), json.as_bytes())
}

fn run_ingest(args: &IngestArgs) -> Result<()> {
    let config = PipelineConfig {
        naming: naming(args.short_names),
        keep_source: args.keep_source,
        ..PipelineConfig::new(&args.staging)
    };
    let report = process_dir(&args.source, &config)
        .with_context(|| format!("failed to ingest {}", args.source.display()))?;

    info!(
        staged = report.staged.len(),
        failed = report.failed.len(),
        "ingest complete"
    );
    if !report.is_success() {
        for err in &report.failed {
            error!("{err}");
        }
        bail!("{} message(s) failed to ingest", report.failed.len());
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&Path>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}
