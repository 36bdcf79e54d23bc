use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use profile_bridge_cli::{OutputFormat, commands};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "profile-bridge")]
#[command(author, version, long_about = None)]
#[command(
    about = "Replay browser-profile imports as named notifications",
    long_about = "profile-bridge packages imported bookmarks, history, passwords, favicons, \
                  cookies and autofill entries into generic payloads and emits them as named \
                  notifications, one JSON document per line."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format for informational commands
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        default_value = "pretty",
        env = "PROFILE_BRIDGE_FORMAT"
    )]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an import bundle through the notification adapter
    Replay {
        /// Path to the import bundle (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write notifications to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print each notification
        #[arg(long)]
        pretty: bool,
    },

    /// List notification names and payload fields
    Categories,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Replay {
            file,
            output,
            pretty,
        } => commands::replay::execute(&file, output.as_deref(), pretty),
        Commands::Categories => commands::categories::execute(cli.format),
        Commands::Completion { shell } => {
            commands::completion::execute(shell, &mut Cli::command(), &mut io::stdout())
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new(
            "profile_bridge=debug,profile_bridge_cli=debug,profile_bridge_core=debug,profile_bridge_writer=debug",
        )
    } else {
        EnvFilter::new(
            "profile_bridge=info,profile_bridge_cli=info,profile_bridge_core=warn,profile_bridge_writer=warn",
        )
    };

    // stdout carries the notification stream
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
