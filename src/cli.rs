//! CLI interface for stride.
//!
//! Each invocation processes a batch of sensor packages and prints one
//! summary per package on stdout. Failures go to stderr.
//!
//! - `stride demo` (the default): the built-in demo feed.
//! - `stride compute <CODE> <VALUES>...`: a single package from the arguments.

mod format;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::feed::{self, OnError, Package};
use crate::model::Labels;

use format::{format_failure, format_summary};

/// Stride: workout statistics from sensor packages.
#[derive(Debug, Parser)]
#[command(name = "stride", version, after_long_help = PACKAGE_HELP)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Label wording for text output. Overrides `labels` in the config file.
    #[arg(long, global = true, value_enum)]
    labels: Option<LabelsArg>,

    /// Report failed packages and continue instead of stopping at the first.
    #[arg(long, global = true)]
    keep_going: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

const PACKAGE_HELP: &str = r"Packages:
  RUN  action duration weight
  WLK  action duration weight height
  SWM  action duration weight length_pool count_pool

  action is steps (RUN, WLK) or strokes (SWM); duration is in hours,
  weight in kg, height in cm, length_pool in meters.

Examples:
  stride
  stride compute RUN 15000 1 75
  stride --labels corrected --format json compute SWM 720 1 80 25 40";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process the built-in demo feed.
    Demo,

    /// Process one package given on the command line.
    Compute {
        /// Activity code: RUN, WLK or SWM.
        code: String,

        /// Readings, in the order the activity code expects.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}

/// How summaries are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per workout.
    Text,
    /// One JSON object per line.
    Json,
}

/// CLI-facing label wording, mapped to the domain `Labels`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LabelsArg {
    /// Labels exactly as the established output prints them.
    Verbatim,
    /// Labels with spelling and punctuation fixed.
    Corrected,
}

impl LabelsArg {
    fn to_domain(self) -> Labels {
        match self {
            Self::Verbatim => Labels::Verbatim,
            Self::Corrected => Labels::Corrected,
        }
    }
}

/// Output settings after merging flags over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Settings {
    format: OutputFormat,
    labels: Labels,
    on_error: OnError,
}

impl Settings {
    fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            format: cli.format,
            labels: cli.labels.map_or(config.labels, LabelsArg::to_domain),
            on_error: if cli.keep_going {
                OnError::Skip
            } else {
                config.on_error
            },
        }
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config) -> Result<(), String> {
    let cli = Cli::parse();
    let settings = Settings::resolve(&cli, config);

    let packages = match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => feed::demo_packages(),
        Command::Compute { code, values } => vec![Package::new(code, values)],
    };

    cmd_process(&packages, settings)
}

fn cmd_process(packages: &[Package], settings: Settings) -> Result<(), String> {
    let mut output_error = None;

    let result = feed::process(packages, settings.on_error, |summary| {
        if output_error.is_some() {
            return;
        }
        match format_summary(summary, settings.format, settings.labels) {
            Ok(line) => println!("{line}"),
            Err(e) => output_error = Some(e),
        }
    });

    if let Some(e) = output_error {
        return Err(e);
    }

    let failures = result.map_err(|failure| format_failure(&failure))?;
    if failures.is_empty() {
        return Ok(());
    }

    for failure in &failures {
        eprintln!("Skipped {}", format_failure(failure));
    }
    Err(format!(
        "{} of {} package(s) failed",
        failures.len(),
        packages.len()
    ))
}
