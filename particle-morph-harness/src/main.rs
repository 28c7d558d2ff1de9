mod cli;
mod view;

use std::error::Error;
use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use particle_morph::{AnimationSession, Settings, settings};

use crate::view::{Camera, TerminalRenderer};

const DEFAULT_LOG_DIRECTIVE: &str = "particle_morph=info";

fn main() -> Result<(), Box<dyn Error>> {
    let args = cli::parse();
    init_logging(&args)?;

    let settings = match &args.config {
        Some(path) => settings::load_from_path(path).inspect_err(|e| {
            error!("failed to load settings: {e}");
        })?,
        None => Settings::default(),
    };

    let seed = args.seed.or(settings.noise_seed).unwrap_or_else(clock_seed);
    info!(seed, fps = args.fps, "starting harness");

    enable_raw_mode()?;
    crossterm::execute!(io::stdout(), EnterAlternateScreen)?;

    let result = run(settings, seed, args.fps);

    disable_raw_mode()?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)?;

    if let Err(e) = &result {
        error!("harness stopped: {e}");
    }

    result
}

fn init_logging(args: &cli::Args) -> Result<(), Box<dyn Error>> {
    let directive = args.log_level.as_deref().unwrap_or(DEFAULT_LOG_DIRECTIVE);
    let file = File::create(&args.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or_default()
}

fn run(settings: Settings, seed: u32, fps: u32) -> Result<(), Box<dyn Error>> {
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut renderer = TerminalRenderer::new(terminal, Camera::default());

    let frame_interval = Duration::from_secs(1) / fps;
    let start = Instant::now();
    let mut session = AnimationSession::new(settings, seed, start.elapsed())?;

    loop {
        if let Some(event) = session.on_frame_tick(start.elapsed())? {
            debug!(?event, "morph event");
        }

        renderer.set_rotation(session.rotation());
        session.render(&mut renderer)?;

        let elapsed = start.elapsed();
        let frames_done = (elapsed.as_secs_f32() / frame_interval.as_secs_f32()).ceil() as u32;
        let next_tick = start + frame_interval * frames_done.max(1);
        let timeout = next_tick.saturating_duration_since(Instant::now());

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                {
                    break;
                }
            }
        }
    }

    info!(frames = session.frames(), "harness finished");
    Ok(())
}
