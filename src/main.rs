use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Hand-landmark gesture pointer: replay and simulation tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON tuning file. Flags typed on the command line still win.
    #[arg(global = true, short = 'c', long = "config")]
    config_file: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a recorded landmark session through the gesture pipeline.
    Replay(cmd::replay::ReplayArgs),
    /// Write a synthetic demo recording.
    Simulate(cmd::simulate::SimulateArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("🖐️  Kinetic starting");

    let result = match &cli.command {
        Commands::Replay(args) => {
            // Overrides live on the subcommand's matches, not the root.
            let sub_matches = matches
                .subcommand_matches("replay")
                .expect("clap routed to replay without its matches");
            cmd::replay::run(args, cli.config_file.as_deref(), sub_matches)
        }
        Commands::Simulate(args) => cmd::simulate::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
