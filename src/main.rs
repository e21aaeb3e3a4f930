//! Terminal 2048 runner (default binary).
//!
//! Reads one key at a time with crossterm, turns it into a `GameAction`, runs
//! one turn on the engine and redraws. Logging goes to a file (if configured)
//! because stdout belongs to the alternate screen.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use tui_2048::core::GameState;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{ControlsView, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::KeyMapping;

/// Play 2048 in the terminal
#[derive(Parser, Debug)]
#[command(name = "tui-2048", version, about, long_about = None)]
struct Args {
    /// RNG seed for tile spawns (random when omitted)
    #[arg(long, env = "TUI_2048_SEED")]
    seed: Option<u64>,

    /// Which way the arrow keys slide the tiles
    /// ("natural" or "rotated")
    #[arg(long, value_parser = parse_keymap, default_value = "natural", env = "TUI_2048_KEYMAP")]
    keymap: KeyMapping,

    /// Write logs to this file (filter with RUST_LOG, default "info")
    #[arg(long, value_name = "FILE", env = "TUI_2048_LOG_FILE")]
    log_file: Option<PathBuf>,
}

fn parse_keymap(s: &str) -> Result<KeyMapping, String> {
    KeyMapping::from_str(s)
        .ok_or_else(|| format!("unknown keymap '{s}' (expected 'natural' or 'rotated')"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let mapping = args.keymap;
    info!(seed, keymap = mapping.as_str(), "starting tui-2048");

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, seed, mapping));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))
}

fn run(term: &mut TerminalRenderer, seed: u64, mapping: KeyMapping) -> Result<()> {
    let mut game_state = GameState::new(seed);
    game_state.start();

    let view = GameView::default();
    let controls = ControlsView { mapping };
    let mut snap = game_state.snapshot();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        game_state.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into_with_controls(&snap, Some(&controls), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // One key is one turn; the next key is not read until it completes.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(score = game_state.score(), "quit");
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key, mapping) {
                    let changed = game_state.apply_action(action);
                    debug!(action = action.as_str(), changed, "input");
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
