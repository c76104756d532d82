use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::generate;
use colored::*;
use piboard_core::board::BoardContext;
use piboard_core::error::BoardResult;
use std::io;
use std::path::PathBuf;

use piboard_manager::commands;

#[derive(Parser)]
#[command(name = "piboard")]
#[command(about = "piboard - Raspberry Pi board identification")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase output verbosity (show debug messages)
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    /// Suppress informational output
    #[arg(short = 'Q', long = "quiet-all", global = true)]
    quiet_all: bool,

    /// Read board information from this file instead of /proc/cpuinfo
    /// (also settable with PIBOARD_CPUINFO)
    #[arg(long = "cpuinfo", value_name = "PATH", global = true)]
    cpuinfo: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the detected board and its processor cores
    Info {
        /// Print the description as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Decode one or more revision codes (hex, 0x prefix optional)
    Decode {
        #[arg(value_name = "CODE", required = true)]
        codes: Vec<String>,
    },

    /// List the processor cores found in the system info file
    Cores,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize structured logging based on verbosity flags
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet_all {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    log::debug!("piboard CLI v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_command(cli.command, cli.cpuinfo) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_board(cpuinfo: Option<PathBuf>) -> BoardContext {
    match cpuinfo {
        Some(path) => BoardContext::from_path(path),
        None => BoardContext::detect(),
    }
}

fn run_command(command: Commands, cpuinfo: Option<PathBuf>) -> BoardResult<()> {
    match command {
        Commands::Info { json } => commands::board::run_info(&load_board(cpuinfo), json),

        Commands::Decode { codes } => commands::board::run_decode(&codes),

        Commands::Cores => commands::board::run_cores(&load_board(cpuinfo)),

        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "piboard", &mut io::stdout());
            Ok(())
        }
    }
}
