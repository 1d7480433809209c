use anyhow::Result;
use ratatui::{backend::Backend, Terminal};

use crate::config::Config;
use crate::game::InputState;
use crate::ui::GlyphAtlas;

use super::common::{run_frames, OpponentDriver};

/// Run local 2-player game: both paddles on one keyboard
pub fn run_game_local<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    atlas: &GlyphAtlas,
    input: &mut InputState,
) -> Result<()> {
    let keys = &config.keybindings;
    let hint = format!(
        "{}/{}: Left  {}/{}: Right  {}: Quit",
        keys.player_up, keys.player_down, keys.opponent_up, keys.opponent_down, keys.quit
    );

    run_frames(terminal, config, atlas, input, OpponentDriver::Keyboard, &hint)
}
