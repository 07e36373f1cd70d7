//! crumbline CLI
//!
//! Prints the indentation-based breadcrumb trail for a cursor position
//! in a file, the way an editor status line would show it.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crumbline_core::{
    format_list, format_report, OutputFormat, RopeBuffer, Settings, TrailConfig, TrailExtractor,
    TrailReport,
};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Indentation-based breadcrumb trails for cursor positions
#[derive(Parser)]
#[command(name = "crumbline")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Breadcrumb trail for a cursor position, derived from indentation alone")]
#[command(long_about = r#"
crumbline: Indentation-Based Breadcrumb Trails

Walks upward from a cursor line and collects the first line found at
each strictly decreasing indentation level, approximating the nesting
hierarchy of indentation-based source text (Python, YAML, ...) without
a parser. The joined trail is fitted into a character budget by a fair
trimming pass that spreads cuts evenly across the breadcrumbs.

Output formats:
  - summary (default on pipes) - the bare joined trail
  - ansi (default on a tty)    - crumbs colored by nesting depth
  - json / yaml                - full report with per-crumb positions

Examples:
  crumbline src/app.py --line 120            # trail for line 120
  crumbline src/app.py -l 120 --list         # one crumb per line
  crumbline - -l 10 < snippet.yaml           # read buffer from stdin
  crumbline app.py -l 42 --format json       # machine-readable report
  crumbline app.py -l 42 --config conf.json  # layered settings file
"#)]
pub struct Args {
    /// File to read; "-" reads from stdin
    pub file: PathBuf,

    /// Cursor line (1-indexed)
    #[arg(short, long)]
    pub line: usize,

    /// Cursor column (accepted for host symmetry; the trail depends
    /// only on the line)
    #[arg(short, long, default_value_t = 0)]
    pub column: usize,

    /// Output format (default: ansi on a tty, summary otherwise)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormatArg>,

    /// List one breadcrumb per line with its source position
    #[arg(long)]
    pub list: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Settings file with defaults and per-document overrides (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not fit the trail into the total length budget
    #[arg(long)]
    pub no_shorten: bool,

    /// Override the tab size
    #[arg(long)]
    pub tab_size: Option<usize>,

    /// Override the breadcrumb pattern (regex with a `name` group)
    #[arg(long)]
    pub pattern: Option<String>,

    /// Override the separator between breadcrumbs
    #[arg(long)]
    pub separator: Option<String>,

    /// Override the per-breadcrumb character limit
    #[arg(long)]
    pub crumb_limit: Option<usize>,

    /// Override the total trail character budget
    #[arg(long)]
    pub total_limit: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Ansi,
    Summary,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Ansi => OutputFormat::Ansi,
            OutputFormatArg::Summary => OutputFormat::Summary,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = resolve_config(&args)?;
    let report = compute_report(&args, &config)?;

    if args.verbose {
        eprintln!(
            "{}: line {} col {}, {} breadcrumb(s)",
            report.path.display(),
            args.line,
            args.column,
            report.depth()
        );
    }

    let format = effective_format(&args);
    let output = if args.list {
        format_list(&report, matches!(format, OutputFormat::Ansi))
    } else {
        format_report(&report, format).context("Failed to format trail")?
    };

    // An empty trail in summary mode prints nothing, like an editor
    // erasing its status entry. Same when the statusbar setting is off.
    let suppress = matches!(format, OutputFormat::Summary)
        && !args.list
        && (report.is_empty() || !config.statusbar);

    if let Some(ref path) = args.output {
        fs::write(path, &output).context("Failed to write output file")?;
    } else if !suppress {
        println!("{}", output);
    }

    Ok(())
}

/// Resolve the effective configuration: settings file (per-document
/// overrides included), then command-line overrides on top.
fn resolve_config(args: &Args) -> Result<TrailConfig> {
    let settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let doc_path = (args.file != PathBuf::from("-")).then_some(args.file.as_path());
    let mut config = settings.config_for(doc_path);

    if let Some(tab_size) = args.tab_size {
        config.tab_size = tab_size;
    }
    if let Some(ref pattern) = args.pattern {
        config.pattern = pattern.clone();
    }
    if let Some(ref separator) = args.separator {
        config.separator = separator.clone();
    }
    if let Some(limit) = args.crumb_limit {
        config.fragment_length_limit = limit;
    }
    if let Some(limit) = args.total_limit {
        config.total_length_limit = limit;
    }

    Ok(config)
}

fn compute_report(args: &Args, config: &TrailConfig) -> Result<TrailReport> {
    let buffer = if args.file == PathBuf::from("-") {
        RopeBuffer::from_reader(io::stdin().lock()).context("Failed to read stdin")?
    } else {
        let file = fs::File::open(&args.file)
            .with_context(|| format!("Failed to open {}", args.file.display()))?;
        RopeBuffer::from_reader(io::BufReader::new(file))
            .with_context(|| format!("Failed to read {}", args.file.display()))?
    };

    let row = args
        .line
        .checked_sub(1)
        .context("Line numbers are 1-indexed")?;

    let extractor = TrailExtractor::new(config.clone()).context("Invalid configuration")?;
    let crumbs = extractor.trail(&buffer, row, !args.no_shorten);

    Ok(TrailReport::new(
        args.file.clone(),
        row,
        crumbs,
        &config.separator,
    ))
}

fn effective_format(args: &Args) -> OutputFormat {
    match args.format {
        Some(format) => format.into(),
        None => {
            if atty::is(atty::Stream::Stdout) {
                OutputFormat::Ansi
            } else {
                OutputFormat::Summary
            }
        }
    }
}
