use std::path::PathBuf;

use clap::Parser;

/// Terminal preview of the particle morph animation.
#[derive(Parser, Debug)]
#[command(name = "particle-morph-harness", version, about)]
pub struct Args {
    /// Settings file (TOML). Missing keys take defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Noise seed. Falls back to the settings' seed, then the clock.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Target frames per second.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Log filter override (e.g. `particle_morph=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Where logs go; the terminal itself is busy drawing.
    #[arg(long, default_value = "particle-morph.log")]
    pub log_file: PathBuf,
}

pub fn parse() -> Args {
    Args::parse()
}
