mod ai;
mod config;
mod debug;
mod game;
mod game_modes;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

use config::Config;
use game::{InputState, KeyMap, OpponentControl};
use ui::{GlyphAtlas, GAME_GLYPHS, SCORE_TEXT_SIZE};

fn main() -> Result<()> {
    let config = config::load_config().context("loading configuration")?;

    debug::init(&config.debug)
        .with_context(|| format!("opening debug log {}", config.debug.log_path.display()))?;
    info!(
        path = %config::get_config_path().display(),
        opponent = ?config.opponent.control,
        "session start"
    );

    // Built before touching the terminal so a failure prints cleanly
    let atlas = GlyphAtlas::new(GAME_GLYPHS, SCORE_TEXT_SIZE).context("loading score font")?;

    // Setup terminal
    enable_raw_mode().context("entering raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;

    // Without release events every key press counts as a one-frame tap
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    info!(release_events, "terminal ready");

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    // Run game
    let result = run_game(&mut terminal, &config, &atlas, release_events);

    let restored = restore_terminal(&mut terminal, release_events);

    // A game error outranks a restore error
    result?;
    restored.context("restoring terminal")
}

/// Undo the terminal setup. Every step runs; the first failure is returned.
fn restore_terminal<W: io::Write>(
    terminal: &mut Terminal<CrosstermBackend<W>>,
    release_events: bool,
) -> io::Result<()> {
    let popped = if release_events {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
    } else {
        Ok(())
    };
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();

    popped.and(raw).and(screen).and(cursor)
}

fn run_game<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    atlas: &GlyphAtlas,
    release_events: bool,
) -> Result<()> {
    let mut input = InputState::new(KeyMap::from_config(&config.keybindings), release_events);

    match config.opponent.control {
        OpponentControl::Scripted => game_modes::run_game_vs_ai(terminal, config, atlas, &mut input),
        OpponentControl::Keyboard => game_modes::run_game_local(terminal, config, atlas, &mut input),
    }
}
