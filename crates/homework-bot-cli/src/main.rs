use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "homework-bot", version, about = "Homework review status notifier")]
struct Cli {
    /// Also append log lines to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll the review status API and notify on changes
    Run(commands::run::RunArgs),
    /// Verify that required environment variables are set
    Check,
    /// Send a message through the Telegram bot
    Send {
        /// Message text
        text: String,
    },
    /// List known review statuses
    Verdicts {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // Credentials may live in a local .env file.
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let guard = match logging::init(cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Check => commands::check::run(),
        Commands::Send { text } => commands::send::run(&text),
        Commands::Verdicts { json } => commands::verdicts::run(json),
    };

    // Flush the file writer before exiting.
    drop(guard);

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
