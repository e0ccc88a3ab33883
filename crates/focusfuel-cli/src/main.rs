use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "focusfuel-cli", version, about = "FocusFuel CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Energy slot logging
    Slots {
        #[command(subcommand)]
        action: commands::slots::SlotsAction,
    },
    /// Derived schedule preview
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
    /// Landing-page copy
    Landing {
        #[command(subcommand)]
        action: commands::landing::LandingAction,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Slots { action } => commands::slots::run(action),
        Commands::Schedule { action } => commands::schedule::run(action),
        Commands::Landing { action } => commands::landing::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
