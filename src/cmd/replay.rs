use crate::reports;
use clap::{ArgMatches, Args};
use kinetic::arbiter::{ActionSink, ClickButton, GestureArbiter};
use kinetic::conditioner::ScreenPoint;
use kinetic::config::Config;
use kinetic::error::KinResult;
use kinetic::replay::{load_recording, run_session};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// Recording CSV (see `kinetic simulate`).
    pub input: PathBuf,

    #[command(flatten)]
    pub config: Config,

    /// Print the summary as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Executor stand-in: logs what a real pointer driver would do.
#[derive(Default)]
struct TraceSink;

impl ActionSink for TraceSink {
    fn move_to(&mut self, point: ScreenPoint) {
        debug!("move_to ({}, {})", point.x, point.y);
    }

    fn click(&mut self, button: ClickButton) {
        info!("🖱️  {} click", button);
    }

    fn scroll(&mut self, delta: i32) {
        debug!("scroll {}", delta);
    }
}

pub fn run(args: &ReplayArgs, config_path: Option<&Path>, matches: &ArgMatches) -> KinResult<()> {
    let config = match config_path {
        Some(path) => {
            info!("⚖️  Loading config from: {}", path.display());
            let mut file_config = Config::load_from_file(path)?;
            file_config.merge_from_cli(&args.config, matches);
            file_config
        }
        None => args.config.clone(),
    };

    let mut arbiter = GestureArbiter::new(&config)?;

    info!("📂 Loading recording: {}", args.input.display());
    let frames = load_recording(&args.input)?;

    let summary = run_session(&mut arbiter, &frames, &mut TraceSink);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        reports::print_session_report(&args.input.display().to_string(), &summary);
    }
    Ok(())
}
