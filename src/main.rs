use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event};
use gridsnake::config::{FRAME_INTERVAL_MS, THEME};
use gridsnake::error::AppError;
use gridsnake::keys::{map_key_event, KeyCommand};
use gridsnake::logging::init_logging;
use gridsnake::renderer::{self, FrameLayout};
use gridsnake::session::Session;
use gridsnake::settings::{Overrides, Settings};
use gridsnake::terminal_runtime::{install_panic_hook, TerminalSession};
use ratatui::layout::Rect;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Settings file (JSON). Defaults to the platform config directory.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Viewport units per grid cell edge (15 units per terminal row, minimum 15).
    #[arg(long = "cell-size")]
    cell_size: Option<u32>,

    /// Seed for food placement, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    /// File that receives log output.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace.
    #[arg(long = "log-level")]
    log_level: Option<String>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let settings = Settings::load(
        cli.settings.as_deref(),
        Overrides {
            cell_size: cli.cell_size,
            seed: cli.seed,
            log_file: cli.log_file,
            log_level: cli.log_level,
        },
    )?;
    init_logging(&settings)?;

    install_panic_hook();

    let result = run(&settings);
    if let Err(error) = &result {
        log::error!("client stopped: {error}");
    }
    result
}

fn run(settings: &Settings) -> Result<(), AppError> {
    let mut terminal = TerminalSession::enter()?;
    let viewport = viewport_for(terminal.area()?);
    let mut session = match settings.seed {
        Some(seed) => Session::new_with_seed(viewport, settings.cell_px, seed),
        None => Session::new(viewport, settings.cell_px),
    };

    loop {
        let snapshot = session.snapshot();
        terminal
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &snapshot, &THEME))?;

        let now = Instant::now();
        let frame_budget = Duration::from_millis(FRAME_INTERVAL_MS);
        let timeout = session
            .time_until_tick(now)
            .map_or(frame_budget, |until_tick| until_tick.min(frame_budget));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match map_key_event(key) {
                    KeyCommand::Quit => break,
                    KeyCommand::Game(raw) => session.submit(raw, Instant::now()),
                },
                Event::Resize(width, height) => {
                    let (width, height) = viewport_for(Rect::new(0, 0, width, height));
                    session.on_viewport_change(width, height);
                }
                _ => {}
            }
        }

        let _ = session.poll(Instant::now());
    }

    log::info!("client exiting");
    Ok(())
}

fn viewport_for(area: Rect) -> (u32, u32) {
    FrameLayout::new(area, &THEME).viewport()
}
