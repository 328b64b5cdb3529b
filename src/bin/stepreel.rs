use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "stepreel", version)]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the step trace of one input as JSON.
    Trace(TraceArgs),
    /// Print the playback state of one input at a frame as JSON.
    Project(ProjectArgs),
    /// Build a full reel (durations, traces, timeline) from a config file.
    Reel(ReelArgs),
}

#[derive(Args, Debug)]
struct TraceOpts {
    /// Characters to scan.
    #[arg(long)]
    input: String,

    /// Output frame rate (whole frames per second).
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Trailing frames after the last event.
    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    tail_frames: i64,
}

#[derive(Args, Debug)]
struct TraceArgs {
    #[command(flatten)]
    trace: TraceOpts,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ProjectArgs {
    #[command(flatten)]
    trace: TraceOpts,

    /// Trace-local frame (0-based).
    #[arg(long, allow_negative_numbers = true)]
    frame: i64,
}

#[derive(Args, Debug)]
struct ReelArgs {
    /// Reel config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Trace(args) => cmd_trace(args),
        Command::Project(args) => cmd_project(args),
        Command::Reel(args) => cmd_reel(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_trace(opts: &TraceOpts) -> anyhow::Result<stepreel::Trace> {
    let fps = stepreel::Fps::whole(opts.fps)?;
    let durations = stepreel::scale_durations(fps)?;
    Ok(stepreel::trace_str(&opts.input, &durations, opts.tail_frames)?)
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let trace = run_trace(&args.trace)?;
    write_json(&trace, args.out.as_deref())
}

fn cmd_project(args: ProjectArgs) -> anyhow::Result<()> {
    let trace = run_trace(&args.trace)?;
    let state = stepreel::project(&trace, args.frame)?;
    write_json(&state, None)
}

fn cmd_reel(args: ReelArgs) -> anyhow::Result<()> {
    let cfg = stepreel::ReelConfig::from_path(&args.config)?;
    let reel = stepreel::build_reel(&cfg)?;
    write_json(&reel, args.out.as_deref())
}

fn write_json<T: serde::Serialize>(value: &T, out: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output JSON")?;
    let Some(path) = out else {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{json}").context("write stdout")?;
        return Ok(());
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, json).with_context(|| format!("write json '{}'", path.display()))?;

    eprintln!("wrote {}", path.display());
    Ok(())
}
