use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use planweave::cli::CommandContext;
use planweave::cli::commands;
use planweave::cli::ui::Output;
use planweave::config::OutputFormat;

#[derive(Parser)]
#[command(name = "planweave")]
#[command(
    version,
    about = "Assemble and order business-plan document structures"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, global = true, help = "Use this config file instead of the resolution chain")]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Inject missing special sections and order the structure
    Enhance {
        #[arg(help = "Structure JSON file ('-' for stdin)")]
        input: PathBuf,
        #[arg(short = 'f', long, help = "Output format: json, yaml, outline")]
        format: Option<OutputFormat>,
    },

    /// Order sections without synthesizing anything
    Order {
        #[arg(help = "Structure JSON file ('-' for stdin)")]
        input: PathBuf,
        #[arg(short = 'f', long, help = "Output format: json, yaml, outline")]
        format: Option<OutputFormat>,
    },

    /// Print the enhanced structure grouped by document
    Outline {
        #[arg(help = "Structure JSON file ('-' for stdin)")]
        input: PathBuf,
    },

    /// Merge uploaded document sections with the special sections
    Upload {
        #[arg(help = "Upload analysis JSON file ('-' for stdin)")]
        input: PathBuf,
        #[arg(short = 'f', long, help = "Output format: json, yaml, outline")]
        format: Option<OutputFormat>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "toml",
            help = "Output format: toml, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Initialize project configuration
    Init {
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mPlanWeave encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Output::new().error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let output = Output::quiet(cli.quiet);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Enhance { input, format } => {
            let context = CommandContext::load(config_path, format)?;
            commands::enhance::run(&input, &context, &output)?;
        }
        Commands::Order { input, format } => {
            let context = CommandContext::load(config_path, format)?;
            commands::order::run(&input, &context, &output)?;
        }
        Commands::Outline { input } => {
            let context = CommandContext::load(config_path, Some(OutputFormat::Outline))?;
            commands::outline::run(&input, &context, &output)?;
        }
        Commands::Upload { input, format } => {
            let context = CommandContext::load(config_path, format)?;
            commands::upload::run(&input, &context, &output)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                let context = CommandContext::load(config_path, None)?;
                commands::config::show(&context, &format)?;
            }
            ConfigAction::Path => {
                commands::config::path()?;
            }
            ConfigAction::Init { force } => {
                commands::config::init(force, &output)?;
            }
        },
    }

    Ok(())
}
