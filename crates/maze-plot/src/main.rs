// File: crates/maze-plot/src/main.rs
// Summary: CLI that loads maze benchmark CSVs and renders the line or comparison chart to PNG.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bench_series::{load_rows, LoadOptions, SeriesSet, UnrecognizedPolicy};
use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{theme, Chart, RenderOptions};
use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use maze_plot::charts::{self, BAR_TITLE, LINE_TITLE};
use maze_plot::{default_output, ensure_window_support, prepare_comparison};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Maze benchmark chart renderer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plot generation time against maze size, one line per build/algorithm
    Line(LineArgs),
    /// Compare the last measurement of two runs as grouped bars with % difference
    Compare(CompareArgs),
}

#[derive(Args, Debug)]
struct LineArgs {
    /// Benchmark CSV to plot
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    input: PathBuf,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Reference run ("Original" bars); percentages are relative to it
    #[arg(long, value_hint = ValueHint::FilePath)]
    baseline: PathBuf,

    /// Run being evaluated ("New" bars)
    #[arg(long, value_hint = ValueHint::FilePath)]
    candidate: PathBuf,

    /// Fail unless every label has a percentage (present in both runs, nonzero baseline)
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Output PNG (default: target/out/<input>_<kind>.png)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    out: Option<PathBuf>,

    /// Color theme (light, dark, solarized-light, high-contrast-dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Image width in pixels
    #[arg(long, default_value_t = WIDTH)]
    width: i32,

    /// Image height in pixels
    #[arg(long, default_value_t = HEIGHT)]
    height: i32,

    /// Inputs have no header row; columns are MazeType,Time (ms),Width,Height
    #[arg(long, action = ArgAction::SetTrue)]
    no_headers: bool,

    /// Drop rows whose MazeType matches no label instead of failing
    #[arg(long, action = ArgAction::SetTrue)]
    skip_unrecognized: bool,

    /// Also display the chart in a window (requires the `window` feature)
    #[arg(long, action = ArgAction::SetTrue)]
    show: bool,

    /// Enable debug logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

impl CommonArgs {
    fn load_options(&self) -> LoadOptions {
        LoadOptions { has_headers: !self.no_headers }
    }

    fn policy(&self) -> UnrecognizedPolicy {
        if self.skip_unrecognized {
            UnrecognizedPolicy::Skip
        } else {
            UnrecognizedPolicy::Error
        }
    }

    fn render_options(&self) -> RenderOptions {
        if !theme::presets().iter().any(|t| t.name.eq_ignore_ascii_case(&self.theme)) {
            warn!(theme = %self.theme, "unknown theme, using light");
        }
        RenderOptions {
            width: self.width,
            height: self.height,
            theme: theme::find(&self.theme),
            ..RenderOptions::default()
        }
    }

    fn check(&self) -> Result<()> {
        ensure_window_support(self.show)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbose = match &cli.command {
        Command::Line(args) => args.common.verbose,
        Command::Compare(args) => args.common.verbose,
    };
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    match cli.command {
        Command::Line(args) => handle_line(args),
        Command::Compare(args) => handle_compare(args),
    }
}

fn handle_line(args: LineArgs) -> Result<()> {
    args.common.check()?;
    let set = load_series(&args.input, &args.common)?;
    let chart = charts::line_chart(&set);
    let out = args
        .common
        .out
        .clone()
        .unwrap_or_else(|| default_output(&args.input, "line"));
    finish(chart, &args.common, &out, LINE_TITLE)
}

fn handle_compare(args: CompareArgs) -> Result<()> {
    args.common.check()?;
    let baseline = load_series(&args.baseline, &args.common)?;
    let candidate = load_series(&args.candidate, &args.common)?;

    let cmp = prepare_comparison(&baseline, &candidate, args.strict).with_context(|| {
        format!("comparing '{}' with '{}'", args.baseline.display(), args.candidate.display())
    })?;

    let chart = charts::comparison_chart(&cmp);
    let out = args
        .common
        .out
        .clone()
        .unwrap_or_else(|| default_output(&args.candidate, "compare"));
    finish(chart, &args.common, &out, BAR_TITLE)
}

fn load_series(path: &Path, common: &CommonArgs) -> Result<SeriesSet> {
    let rows = load_rows(path, &common.load_options())
        .with_context(|| format!("failed to load benchmark CSV '{}'", path.display()))?;
    let set = SeriesSet::from_rows(&rows, common.policy())
        .with_context(|| format!("failed to classify rows of '{}'", path.display()))?;
    info!(
        path = %path.display(),
        rows = rows.len(),
        skipped = set.skipped(),
        "loaded benchmark series"
    );
    for (label, series) in set.iter() {
        if series.is_empty() {
            debug!(label = label.as_str(), "no rows");
        }
    }
    Ok(set)
}

fn finish(chart: Chart, common: &CommonArgs, out: &Path, title: &str) -> Result<()> {
    let opts = common.render_options();
    chart
        .render_to_png(&opts, out)
        .with_context(|| format!("failed to write chart '{}'", out.display()))?;
    info!("Wrote {}", out.display());
    if common.show {
        show(chart, opts, title)?;
    }
    Ok(())
}

#[cfg(feature = "window")]
fn show(chart: Chart, opts: RenderOptions, title: &str) -> Result<()> {
    maze_plot::window::show(chart, opts, title)
}

#[cfg(not(feature = "window"))]
fn show(_chart: Chart, _opts: RenderOptions, _title: &str) -> Result<()> {
    anyhow::bail!("window support not compiled in")
}
