use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};

use simplex::{MarkerSpec, Match, MatchResult, Options, Simplex};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Expression to match, e.g. "name=value"
    #[arg(value_name = "EXPRESSION")]
    expression: String,

    /// File to read (stdin if omitted)
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Report every occurrence instead of the first
    #[arg(short = 'g', long)]
    global: bool,

    /// Symmetric field markers, e.g. "<>" or "{{}}"
    #[arg(short = 'm', long, value_name = "SPEC", conflicts_with_all = ["left", "right"])]
    markers: Option<String>,

    /// Left field marker
    #[arg(long, value_name = "MARKER")]
    left: Option<String>,

    /// Right field marker
    #[arg(long, value_name = "MARKER")]
    right: Option<String>,

    /// Match whitespace in the expression exactly
    #[arg(short = 's', long)]
    strict_whitespace: bool,

    /// Convert numeric and boolean values
    #[arg(short = 't', long)]
    infer_types: bool,

    /// Regex-style option flags (g, s, t)
    #[arg(long, value_name = "FLAGS")]
    flags: Option<String>,

    /// Options as JSON, e.g. '{"global": true, "fieldMarkers": "<>"}'
    #[arg(long, value_name = "JSON", conflicts_with = "flags")]
    options: Option<String>,

    /// Match each input line separately
    #[arg(short = 'l', long)]
    lines: bool,

    /// Print the compiled pattern and field order, then exit
    #[arg(long)]
    show_pattern: bool,

    #[command(flatten)]
    log: LogArgs,
}

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
struct LogArgs {
    /// Silence log messages
    #[arg(short, long)]
    quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging
    #[arg(long)]
    ts: bool,
}

impl LogArgs {
    fn setup_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => stderrlog::LogLevelNum::Warn,
            1 => stderrlog::LogLevelNum::Info,
            2 => stderrlog::LogLevelNum::Debug,
            _ => stderrlog::LogLevelNum::Trace,
        };
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(log_level)
            .timestamp(if self.ts {
                stderrlog::Timestamp::Second
            } else {
                stderrlog::Timestamp::Off
            })
            .init()
            .context("Failed to initialise logging")
    }
}

impl Args {
    /// Combine the option sources: JSON or flags first, then explicit switches.
    fn to_options(&self) -> Options {
        let mut options = match (&self.options, &self.flags) {
            (Some(json), _) => Options::from_json(json),
            (None, Some(flags)) => Options::from_flags(flags),
            (None, None) => Options::default(),
        };
        options.global |= self.global;
        options.strict_whitespace |= self.strict_whitespace;
        options.infer_types |= self.infer_types;
        if let Some(markers) = &self.markers {
            options.field_markers = MarkerSpec::from(markers.as_str());
        } else if self.left.is_some() || self.right.is_some() {
            options.field_markers = MarkerSpec::Sides {
                left: self.left.clone(),
                right: self.right.clone(),
            };
        }
        options
    }
}

fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {path}")),
        None => {
            let mut contents = String::new();
            io::stdin()
                .read_to_string(&mut contents)
                .context("Failed to read stdin")?;
            Ok(contents)
        }
    }
}

fn match_input(simplex: &Simplex, input: &str) -> Vec<MatchResult> {
    simplex
        .match_text(input)
        .map(Match::into_vec)
        .unwrap_or_default()
}

fn run(args: Args) -> Result<bool> {
    let options = args.to_options();
    log::debug!("options: {options:?}");
    let simplex = Simplex::with_options(&args.expression, options)
        .with_context(|| format!("Invalid expression {:?}", args.expression))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.show_pattern {
        writeln!(out, "{}", simplex.pattern())?;
        writeln!(out, "{}", simplex.field_names().join(" "))?;
        return Ok(true);
    }

    let input = read_input(args.file.as_deref())?;
    let results: Vec<MatchResult> = if args.lines {
        input
            .lines()
            .flat_map(|line| match_input(&simplex, line))
            .collect()
    } else {
        match_input(&simplex, &input)
    };

    for result in &results {
        serde_json::to_writer(&mut out, result)?;
        writeln!(out)?;
    }
    log::info!("{} match(es)", results.len());
    Ok(!results.is_empty())
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.log.setup_logging()?;
    if !run(args)? {
        std::process::exit(1);
    }
    Ok(())
}
