mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "orario", version, about = "A localized terminal clock")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Run the clock in the terminal until Ctrl+C
    Run {
        /// Language code override (e.g. en-US, de, fr)
        #[arg(long)]
        lang: Option<String>,
    },
    /// Print the current time and date once
    Once {
        /// Language code override (e.g. en-US, de, fr)
        #[arg(long)]
        lang: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Run { lang } => commands::run::execute(lang),
        Commands::Once { lang } => commands::once::execute(lang),
    }
}
