use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "devdash", version, about = "DevDash CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily check-in: streak update and a motivational quote
    Motivation,
    /// Weekly goal management
    Goal {
        #[command(subcommand)]
        action: commands::goal::GoalAction,
    },
    /// Weekly challenge viewer
    Challenge {
        #[command(subcommand)]
        action: commands::challenge::ChallengeAction,
    },
    /// Portfolio project management
    Portfolio {
        #[command(subcommand)]
        action: commands::portfolio::PortfolioAction,
    },
    /// Restore the profile wholesale from a JSON file
    Restore {
        /// Path to the backup JSON document
        file: PathBuf,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Motivation => commands::motivation::run(),
        Commands::Goal { action } => commands::goal::run(action),
        Commands::Challenge { action } => commands::challenge::run(action),
        Commands::Portfolio { action } => commands::portfolio::run(action),
        Commands::Restore { file } => commands::restore::run(&file),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "devdash", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
