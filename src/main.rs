//! Terminal runner (default binary).
//!
//! Uses crossterm for keyboard, mouse and resize events and the framebuffer
//! renderer from `tui_diagonal::term`. The frame is rebuilt whenever the
//! session revision changes.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use tui_diagonal::config::AppConfig;
use tui_diagonal::core::GameSession;
use tui_diagonal::input::{
    handle_key_event, should_quit, Gesture, PointerTracker, SwipeClassifier,
};
use tui_diagonal::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Poll interval while no deferred clearance is pending.
const IDLE_POLL_MS: u64 = 250;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AppConfig::from_env()?.apply_args(&args)?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to a file; the terminal itself is the game screen.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let env = env_logger::Env::default().default_filter_or(config.log_level.as_str());
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("install logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut session = GameSession::new();
    if config.autostart {
        session.start();
    }

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut view = GameView::new();
    view.resize(viewport);
    info!("starting with viewport {}x{}, surface {}px", w, h, view.surface_side());

    let mut pointer = PointerTracker::new(SwipeClassifier::new(config.swipe_min));
    let mut fb = FrameBuffer::new(w, h);
    let mut drawn_revision: Option<u64> = None;
    let mut last_tick = Instant::now();

    loop {
        // Feed whole elapsed milliseconds to the session; keep the remainder.
        let elapsed_ms = last_tick.elapsed().as_millis().min(u32::MAX as u128) as u32;
        if elapsed_ms > 0 {
            last_tick += Duration::from_millis(elapsed_ms as u64);
            session.advance(elapsed_ms);
        }

        // Render.
        if drawn_revision != Some(session.revision()) {
            view.render_into(&session.snapshot(), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            drawn_revision = Some(session.revision());
        }

        // Input with timeout until the next deferred clearance.
        let timeout = session
            .next_deadline_ms()
            .map(|ms| ms.max(1))
            .unwrap_or(IDLE_POLL_MS);
        if !event::poll(Duration::from_millis(timeout))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    let changed = session.apply_action(action);
                    debug!("key {:?} -> {:?} ({})", key.code, action, changed);
                }
            }
            Event::Mouse(ev) => match pointer.handle_mouse_event(ev) {
                Some(Gesture::Tap { column, row }) => {
                    if let Some(action) = view.hit_test(&session.snapshot(), viewport, column, row) {
                        let changed = session.apply_action(action);
                        debug!("button {:?} ({})", action, changed);
                    }
                }
                Some(Gesture::Swipe {
                    direction,
                    column,
                    row,
                }) => {
                    // Only drags that start on the board count.
                    if view.layout(viewport).surface_contains(column, row) {
                        let moved = session.attempt_move(direction);
                        debug!("swipe {} ({})", direction.as_str(), moved);
                    }
                }
                None => {}
            },
            Event::Resize(w, h) => {
                viewport = Viewport::new(w, h);
                view.resize(viewport);
                pointer.reset();
                info!("resized to {}x{}, surface {}px", w, h, view.surface_side());
                // The surrounding layout moves too, so always repaint everything.
                term.invalidate();
                drawn_revision = None;
            }
            _ => {}
        }
    }
}
