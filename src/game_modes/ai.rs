use anyhow::Result;
use ratatui::{backend::Backend, Terminal};

use crate::ai::JitterBot;
use crate::config::Config;
use crate::game::InputState;
use crate::ui::GlyphAtlas;

use super::common::{run_frames, OpponentDriver};

/// Run single-player game against the scripted opponent
pub fn run_game_vs_ai<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    atlas: &GlyphAtlas,
    input: &mut InputState,
) -> Result<()> {
    let keys = &config.keybindings;
    let hint = format!(
        "{}/{}: Move  {}: Quit",
        keys.player_up, keys.player_down, keys.quit
    );

    // One random source for the whole session
    let bot = JitterBot::new();

    run_frames(
        terminal,
        config,
        atlas,
        input,
        OpponentDriver::Bot(Box::new(bot)),
        &hint,
    )
}
