use clap::Args;
use kinetic::error::KinResult;
use kinetic::replay::save_recording;
use kinetic::synth::Script;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[arg(short, long)]
    pub out: PathBuf,

    #[arg(short = 'S', long, default_value_t = 7)]
    pub seed: u64,

    #[arg(long, default_value_t = 30.0)]
    pub fps: f64,

    /// Uniform landmark noise, in normalized units.
    #[arg(long, default_value_t = 0.003)]
    pub jitter: f32,
}

pub fn run(args: &SimulateArgs) -> KinResult<()> {
    let frames = Script::demo(args.fps, args.jitter, args.seed).render()?;
    save_recording(&args.out, &frames)?;
    info!(
        "💾 Wrote {} frames to {}",
        frames.len(),
        args.out.display()
    );
    Ok(())
}
