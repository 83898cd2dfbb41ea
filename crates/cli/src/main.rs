mod commands;
mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scanboard")]
#[command(about = "Summaries, filters and CSV export for cloud security scan findings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a scanner report: headline numbers, charts and findings
    Analyze {
        /// JSON array or newline-delimited JSON report
        path: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Output format (default: from config, else text)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Maximum findings to list
        #[arg(short, long)]
        limit: Option<usize>,

        /// Path to config file (default: .scanboard.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Suppress banner, charts and summary
        #[arg(short, long)]
        quiet: bool,
    },
    /// Write the filtered findings to a CSV file
    Export {
        /// JSON array or newline-delimited JSON report
        path: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Destination file (default: security_report_<date>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to config file (default: .scanboard.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List known compliance frameworks
    Frameworks {
        /// Path to config file (default: .scanboard.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Generate a default .scanboard.toml config file
    Init,
}

#[derive(Args, Clone, Default)]
struct FilterArgs {
    /// Compliance framework, e.g. cis_2.0_aws (case, '-' and '_' insensitive)
    #[arg(long)]
    framework: Option<String>,

    /// Exact region, e.g. us-east-1
    #[arg(long)]
    region: Option<String>,

    /// "all", "FAIL", or a severity such as Critical
    #[arg(short, long)]
    status: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn from_config(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

fn init_logging(verbose: u8, no_color: bool) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color);

    match cli.command {
        Commands::Analyze {
            path,
            filters,
            format,
            limit,
            config,
            quiet,
        } => commands::analyze::run(&path, &filters, format, limit, config, quiet, cli.no_color),
        Commands::Export {
            path,
            filters,
            output,
            config,
        } => commands::export::run(&path, &filters, output, config),
        Commands::Frameworks { config } => commands::frameworks::run(config),
        Commands::Init => commands::init::run(),
    }
}
