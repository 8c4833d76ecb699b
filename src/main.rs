// SPDX-License-Identifier: PMPL-1.0-or-later
//! sitebot CLI - accessibility and style consistency checks for captured pages

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use sitebot::color::{contrast_ratio, parse_color, Rgb};
use sitebot::config::{self, Config, AA_LARGE_TEXT, AA_NORMAL_TEXT};
use sitebot::report::{generate_batch_report, generate_report, OutputFormat};
use sitebot::scanner;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Accessibility and design-consistency analysis over captured DOM snapshots
#[derive(Parser)]
#[command(name = "sitebot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Log level (overrides `log.level` from the configuration)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one snapshot file
    Check {
        /// Snapshot JSON captured from the page
        snapshot: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Analyze every snapshot under a directory
    Scan {
        /// Directory to scan
        dir: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compute the contrast ratio of two colors
    Contrast {
        /// Text color (hex, rgb() or a named color)
        foreground: String,

        /// Background color
        background: String,

        /// Minimum passing ratio
        #[arg(long, default_value_t = AA_NORMAL_TEXT)]
        threshold: f64,
    },

    /// Initialize configuration file
    Init {
        /// Output format
        #[arg(long, default_value = "yaml")]
        format: ConfigFormatArg,
    },

    /// Show current configuration
    Show,
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Output format
    #[arg(long, default_value = "text")]
    format: FormatArg,

    /// Output file (stdout if not specified)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Judge contrast against the 3:1 large-text minimum
    #[arg(long)]
    large_text: bool,
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for CI
    Sarif,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Sarif => OutputFormat::Sarif,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ConfigFormatArg {
    Yaml,
    Toml,
}

fn init_logging(verbose: bool, level: &str) {
    let filter = if verbose {
        EnvFilter::new("sitebot=debug")
    } else {
        EnvFilter::try_new(format!("sitebot={}", level)).unwrap_or_else(|_| EnvFilter::new("sitebot=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Log level chosen on the command line, if any
fn command_line_log_level(cli: &Cli) -> Option<String> {
    cli.log_level
        .clone()
        .or_else(|| cli.verbose.then(|| "debug".to_string()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // the command line fixes the level, so config loading is logged too
    let early_level = command_line_log_level(&cli);
    if let Some(ref level) = early_level {
        init_logging(cli.verbose, level);
    }

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let config = config::load_config(&config_path)
        .with_context(|| format!("loading configuration from {}", config_path.display()))?;

    if early_level.is_none() {
        init_logging(false, &config.log.level);
    }

    match cli.command {
        Commands::Check { snapshot, output } => {
            let config = apply_output_args(config, &output);
            let report = scanner::scan_file(&snapshot, &config)
                .with_context(|| format!("analyzing {}", snapshot.display()))?;
            let rendered = generate_report(&report, output.format.into());
            write_output(&rendered, output.output.as_deref())?;

            if report.has_blocking() {
                std::process::exit(1);
            }
        }

        Commands::Scan { dir, output } => {
            let config = apply_output_args(config, &output);
            let reports = scanner::scan_directory(&dir, &config)?;
            let rendered = generate_batch_report(&reports, output.format.into());
            write_output(&rendered, output.output.as_deref())?;

            if reports.iter().any(|r| r.has_blocking()) {
                std::process::exit(1);
            }
        }

        Commands::Contrast { foreground, background, threshold } => {
            let background = solid_color(&background, Rgb::WHITE)?;
            let foreground = solid_color(&foreground, background)?;
            let ratio = contrast_ratio(foreground, background);
            let verdict = if ratio >= threshold { "PASS" } else { "FAIL" };
            println!(
                "{} on {}: {:.2}:1 ({} at {}:1)",
                foreground, background, ratio, verdict, threshold
            );

            if ratio < threshold {
                std::process::exit(1);
            }
        }

        Commands::Init { format } => {
            let path = match format {
                ConfigFormatArg::Toml => config_path.with_extension("toml"),
                ConfigFormatArg::Yaml => config_path.clone(),
            };
            if path.exists() {
                bail!("{} already exists", path.display());
            }
            config::write_default_config(&path)?;
            println!("Created configuration file: {}", path.display());
        }

        Commands::Show => show_config(&config),
    }

    Ok(())
}

fn apply_output_args(mut config: Config, args: &OutputArgs) -> Config {
    if args.large_text {
        config.contrast.threshold = AA_LARGE_TEXT;
    }
    config
}

/// Parse a color and flatten any translucency onto `below`
fn solid_color(value: &str, below: Rgb) -> anyhow::Result<Rgb> {
    match parse_color(value)? {
        Some(color) if color.is_opaque() => Ok(color.rgb),
        Some(color) => Ok(color.over(below)),
        None => bail!("unsupported color syntax: {}", value),
    }
}

fn show_config(config: &Config) {
    println!("\nCurrent Configuration:");
    println!("======================\n");

    println!("Contrast:");
    println!("  Threshold: {}:1", config.contrast.threshold);
    println!();

    println!("Call to action:");
    println!("  Minimum size: {}x{}", config.cta.min_width, config.cta.min_height);
    println!("  Fold cutoff: {}", config.cta.fold_cutoff);
    println!("  Bold weight: {}", config.cta.bold_weight);
    println!();

    println!("Rating:");
    println!("  Good below: {} issues", config.rating.good_below);
    println!("  Fair up to: {} issues", config.rating.fair_max);
    println!();

    println!("Checks:");
    println!("  Consistency: {}", config.checks.consistency);
    println!("  Hierarchy: {}", config.checks.hierarchy);
    println!("  Alt text: {}", config.checks.alt_text);
    println!("  Keyboard: {}", config.checks.keyboard);
    println!("  Document: {}", config.checks.document);
    println!();

    println!("General:");
    println!("  Workers: {}", config.workers);
    println!("  Log level: {}", config.log.level);
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
