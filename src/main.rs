//! resume-report: resume vs. job match report viewer
//!
//! Renders a resume analysis record as a terminal overlay or exports it as
//! HTML, Markdown, JSON or a colored summary.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use resume_report::{
    cli,
    config::{AppConfig, CliOverrides, ViewConfig, CONFIG_FILE_NAMES},
    reports::ReportFormat,
    score::ScorePolicy,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput:",
        "\n  Analysis record JSON (matchScore, verdict, summary, skills, keywords)",
        "\n\nOutput Formats:",
        "\n  tui, html, markdown, json, summary",
        "\n\nScore Tiers:",
        "\n  excellent >= 80, good >= 60, fair >= 40, poor otherwise"
    )
}

#[derive(Parser)]
#[command(name = "resume-report")]
#[command(version, long_version = build_long_version())]
#[command(about = "Resume vs. job match report viewer", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Error occurred

EXAMPLES:
    # Open the interactive overlay
    resume-report view analysis.json

    # Export a standalone HTML page
    resume-report view analysis.json -o html -O report.html

    # Read from stdin and print a summary
    cat analysis.json | resume-report view - -o summary

    # Inspect the styling of a score
    resume-report tier 72")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "RESUME_REPORT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `view` subcommand
#[derive(Parser)]
struct ViewArgs {
    /// Path to the analysis record (`-` for stdin)
    report: PathBuf,

    /// Output format, overriding the config file (auto: tui if interactive, summary otherwise)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file (default: stdout)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// How to treat scores outside 0-100
    #[arg(long, value_enum)]
    score_policy: Option<ScorePolicy>,

    /// Color theme for the overlay
    #[arg(long, value_parser = ["dark", "light", "high-contrast"])]
    theme: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show an analysis report in the terminal or export it
    View(ViewArgs),

    /// Print the tier, colors and arc fill for a score
    Tier {
        /// Match score to classify
        #[arg(allow_negative_numbers = true)]
        score: i32,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .resume-report.yaml in the current directory
    Init,
    /// Generate JSON Schema for the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stderr keeps stdout clean for reports
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match cli.command {
        Commands::View(args) => {
            let overrides = CliOverrides {
                format: args.output,
                output_file: args.output_file,
                no_color: cli.no_color,
                theme: args.theme,
                score_policy: args.score_policy,
            };
            let (settings, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            if let Some(path) = &loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }

            let config = ViewConfig {
                report_path: args.report,
                settings,
                quiet: cli.quiet,
            };

            let exit_code = cli::run_view(config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Tier { score, json } => cli::run_tier(score, json),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "resume-report", &mut io::stdout());
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    resume_report::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    ::dirs::config_dir().map(|p| p.join("resume-report").display().to_string()),
                    ::dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match resume_report::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(CONFIG_FILE_NAMES[0]);
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = resume_report::config::generate_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
            ConfigAction::Schema { output } => {
                let schema = resume_report::config::generate_json_schema()
                    .context("failed to generate schema")?;
                match output {
                    Some(path) => {
                        std::fs::write(&path, &schema)
                            .with_context(|| format!("failed to write {}", path.display()))?;
                        eprintln!("Schema written to {}", path.display());
                    }
                    None => {
                        println!("{schema}");
                    }
                }
                Ok(())
            }
        },
    }
}
