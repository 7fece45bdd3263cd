// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info};
use std::io::Write;
use std::path::PathBuf;

use crate::app_config::Config;
use crate::video_skip::ServiceOffsets;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod filter_deriver;
mod image_utils;
mod predicates;
mod subtitle_processor;
mod video_skip;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a VideoSkip filter document from subtitles (default command)
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Generate shell completions for subskip
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Subtitles input file (SRT)
    #[arg(value_name = "SUBTITLES")]
    subtitles: PathBuf,

    /// File containing screenshot, for synchronization
    #[arg(value_name = "SCREENSHOT")]
    screenshot: PathBuf,

    /// The timestamp of the screenshot, as a decimal number of seconds
    #[arg(value_name = "SCREENSHOT_TIME")]
    screenshot_time: f64,

    /// Output file, to be used with VideoSkip
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Subtitles offset, as a decimal number of seconds. Use this when the
    /// subtitles file does not align perfectly with the streaming service.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    subs_offset: f64,

    /// Filtering margin, as a decimal number of seconds. This is how long
    /// before the start of the filtered subtitles to start muting, and how
    /// long to keep muting afterwards.
    #[arg(long, default_value_t = 0.0)]
    margin: f64,

    /// Per-service playback offsets, e.g. "google=0.2,netflix=1.3"
    #[arg(long, default_value = "")]
    service_offsets: ServiceOffsets,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subskip - derive VideoSkip content filters from subtitles
///
/// Scans an SRT subtitle file with a content predicate and packages the
/// matching time ranges, a synchronization screenshot and per-service
/// offsets into a single VideoSkip document.
#[derive(Parser, Debug)]
#[command(name = "subskip")]
#[command(version = "1.0.0")]
#[command(about = "Derive VideoSkip content filters from subtitles")]
#[command(long_about = "subskip scans an SRT subtitle file with a content predicate and packages the
matching time ranges, a synchronization screenshot and per-service offsets
into a single document for the VideoSkip browser extension.

EXAMPLES:
    subskip movie.srt shot.png 83.5 movie.skips        # Basic invocation
    subskip --margin 0.5 movie.srt shot.png 83.5 out   # Widen every filter by 0.5s
    subskip --subs-offset -1.2 movie.srt shot.png 83.5 out
    subskip --service-offsets google=0.2,netflix=1.3 movie.srt shot.png 83.5 out
    subskip completions bash > subskip.bash            # Generate bash completions")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Subtitles input file (SRT)
    #[arg(value_name = "SUBTITLES")]
    subtitles: Option<PathBuf>,

    /// File containing screenshot, for synchronization
    #[arg(value_name = "SCREENSHOT")]
    screenshot: Option<PathBuf>,

    /// The timestamp of the screenshot, as a decimal number of seconds
    #[arg(value_name = "SCREENSHOT_TIME")]
    screenshot_time: Option<f64>,

    /// Output file, to be used with VideoSkip
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Subtitles offset, as a decimal number of seconds
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    subs_offset: f64,

    /// Filtering margin, as a decimal number of seconds
    #[arg(long, default_value_t = 0.0)]
    margin: f64,

    /// Per-service playback offsets, e.g. "google=0.2,netflix=1.3"
    #[arg(long, default_value = "")]
    service_offsets: ServiceOffsets,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // The level is raised or lowered again per the parsed options
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subskip", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Generate(args)) => run_generate(args),
        None => {
            // Default behavior - the generate arguments at top level
            let missing = |name: &str| anyhow!("{} is required when no subcommand is specified", name);

            let generate_args = GenerateArgs {
                subtitles: cli.subtitles.ok_or_else(|| missing("SUBTITLES"))?,
                screenshot: cli.screenshot.ok_or_else(|| missing("SCREENSHOT"))?,
                screenshot_time: cli.screenshot_time.ok_or_else(|| missing("SCREENSHOT_TIME"))?,
                output: cli.output.ok_or_else(|| missing("OUTPUT"))?,
                subs_offset: cli.subs_offset,
                margin: cli.margin,
                service_offsets: cli.service_offsets,
                log_level: cli.log_level,
            };
            run_generate(generate_args)
        }
    }
}

fn run_generate(options: GenerateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.into());
    }

    let config = Config {
        subs_offset: options.subs_offset,
        margin: options.margin,
        service_offsets: options.service_offsets,
        screenshot_time: options.screenshot_time,
        log_level: options
            .log_level
            .map(Into::into)
            .unwrap_or_default(),
    };

    info!(
        "Generating filters from {:?} (offset {}s, margin {}s)",
        options.subtitles, config.subs_offset, config.margin
    );

    let controller = Controller::with_config(config);
    controller.run(&options.subtitles, &options.screenshot, &options.output)
}
