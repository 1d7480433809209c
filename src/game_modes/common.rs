//! Frame loop shared by the two-player and vs-computer modes
//!
//! Each frame polls input, moves both paddles, advances the ball and redraws. Once a side has
//! won, the simulation stops but the loop keeps drawing the end screen and listening for quit.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::{backend::Backend, Terminal};
use tracing::info;

use crate::ai::Bot;
use crate::config::Config;
use crate::game::{self, GameState, InputAction, InputState, PhysicsEvents, Vector2};
use crate::game::state::Paddle;
use crate::ui::{self, GlyphAtlas, Palette};

/// Who moves the right-hand paddle
pub enum OpponentDriver {
    Bot(Box<dyn Bot>),
    Keyboard,
}

impl OpponentDriver {
    fn drive(&mut self, state: &mut GameState, input: &InputState) {
        match self {
            OpponentDriver::Bot(bot) => bot.drive(&mut state.opponent, &state.ball),
            OpponentDriver::Keyboard => steer(
                &mut state.opponent,
                input,
                InputAction::OpponentUp,
                InputAction::OpponentDown,
            ),
        }
    }

    fn name(&self) -> &str {
        match self {
            OpponentDriver::Bot(bot) => bot.name(),
            OpponentDriver::Keyboard => "Keyboard",
        }
    }
}

/// Up wins when both keys are held
fn steer(paddle: &mut Paddle, input: &InputState, up: InputAction, down: InputAction) {
    if input.pressed(up) {
        game::move_paddle(paddle, Vector2::UP);
    } else if input.pressed(down) {
        game::move_paddle(paddle, Vector2::DOWN);
    }
}

/// Advance the game by one frame: paddles first, then the ball
pub fn step(state: &mut GameState, input: &InputState, opponent: &mut OpponentDriver) -> PhysicsEvents {
    if state.game_over() {
        return PhysicsEvents::default();
    }

    steer(
        &mut state.player,
        input,
        InputAction::PlayerUp,
        InputAction::PlayerDown,
    );
    opponent.drive(state, input);

    game::update(state)
}

/// Run the frame loop until the user quits
pub fn run_frames<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    atlas: &GlyphAtlas,
    input: &mut InputState,
    mut opponent: OpponentDriver,
    hint: &str,
) -> Result<()> {
    let palette = Palette::from_config(&config.display);
    let frame_duration = frame_duration(config.display.target_fps);
    let mut state = GameState::with_colors(
        config.opponent.control,
        config.display.paddle_color,
        config.display.ball_color,
    );

    info!(opponent = opponent.name(), "game start");

    loop {
        let now = Instant::now();

        input.poll()?;
        if input.quit_requested() {
            info!(
                player = state.score.player,
                opponent = state.score.opponent,
                "quit"
            );
            return Ok(());
        }

        step(&mut state, input, &mut opponent);

        terminal.draw(|f| ui::render(f, &state, atlas, &palette, hint))?;

        // Frame rate limiting
        limit_frame_rate(now, frame_duration);
    }
}

// Capped at 1000 fps so the frame never rounds down to zero
const MAX_FPS: u64 = 1000;

pub fn frame_duration(target_fps: u64) -> Duration {
    Duration::from_micros(1_000_000 / target_fps.clamp(1, MAX_FPS))
}

/// Sleep for whatever is left of the frame
pub fn limit_frame_rate(frame_start: Instant, frame_duration: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < frame_duration {
        std::thread::sleep(frame_duration - elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::JitterBot;
    use crate::config::KeyBindings;
    use crate::game::state::{Side, OPPONENT_START, PLAYER_START};
    use crate::game::{KeyMap, OpponentControl};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    fn input_with(codes: &[KeyCode]) -> InputState {
        let mut input = InputState::new(KeyMap::from_config(&KeyBindings::default()), true);
        for code in codes {
            input.handle_key(KeyEvent::new_with_kind(
                *code,
                KeyModifiers::NONE,
                KeyEventKind::Press,
            ));
        }
        input
    }

    #[test]
    fn test_step_moves_player_then_ball() {
        let mut state = GameState::new(OpponentControl::Keyboard);
        let input = input_with(&[KeyCode::Char('w')]);

        step(&mut state, &input, &mut OpponentDriver::Keyboard);

        assert_eq!(state.player.position, Vector2::new(25.0, PLAYER_START.y + 15.0));
        assert_eq!(state.opponent.position, OPPONENT_START);
        assert_eq!(state.ball.position.x, 676.0);
    }

    #[test]
    fn test_up_takes_precedence_over_down() {
        let mut state = GameState::new(OpponentControl::Keyboard);
        let input = input_with(&[KeyCode::Down, KeyCode::Up]);

        step(&mut state, &input, &mut OpponentDriver::Keyboard);

        assert_eq!(state.opponent.position.y, OPPONENT_START.y + 15.0);
    }

    #[test]
    fn test_bot_drives_opponent() {
        let mut state = GameState::new(OpponentControl::Scripted);
        let mut driver = OpponentDriver::Bot(Box::new(JitterBot::seeded(3)));

        step(&mut state, &input_with(&[]), &mut driver);

        let offset = state.opponent.position.y - PLAYER_START.y;
        assert!((0.0..2.0).contains(&offset));
    }

    #[test]
    fn test_step_is_frozen_after_game_over() {
        let mut state = GameState::new(OpponentControl::Keyboard);
        state.winner = Some(Side::Player);
        let input = input_with(&[KeyCode::Char('w'), KeyCode::Up]);

        let events = step(&mut state, &input, &mut OpponentDriver::Keyboard);

        assert!(!events.any());
        assert_eq!(state.player.position, PLAYER_START);
        assert_eq!(state.opponent.position, OPPONENT_START);
    }

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(50), Duration::from_millis(20));
        assert_eq!(frame_duration(0), Duration::from_secs(1));
        assert_eq!(frame_duration(60), Duration::from_micros(16_666));
    }

    #[test]
    fn test_frame_duration_never_zero() {
        assert_eq!(frame_duration(1000), Duration::from_millis(1));
        assert_eq!(frame_duration(5000), Duration::from_millis(1));
        assert!(!frame_duration(u64::MAX).is_zero());
    }
}
