// Jitter bot - tracks the ball with a small random offset

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

use super::Bot;
use crate::game::state::{Ball, Paddle, FIELD_HEIGHT, PADDLE_HALF_HEIGHT};

/// Upper bound (exclusive) of the offset added to the ball's height
const MAX_JITTER: f32 = 2.0;

/// Places the paddle at the ball's height plus a uniform offset in `[0, MAX_JITTER)`.
///
/// Placements that would push the paddle out of the field are skipped for that frame, so the
/// paddle waits at its last position while the ball is near a wall.
pub struct JitterBot {
    rng: StdRng,
    jitter: Uniform<f32>,
}

impl JitterBot {
    /// Bot seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic bot for reproducible runs
    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            jitter: Uniform::new(0.0, MAX_JITTER),
        }
    }
}

impl Default for JitterBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Bot for JitterBot {
    fn drive(&mut self, paddle: &mut Paddle, ball: &Ball) {
        let y = ball.position.y + self.jitter.sample(&mut self.rng);

        if y + PADDLE_HALF_HEIGHT > FIELD_HEIGHT || y - PADDLE_HALF_HEIGHT < 0.0 {
            return;
        }

        paddle.position.y = y;
    }

    fn name(&self) -> &str {
        "Jitter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::{GameState, OpponentControl, OPPONENT_START};
    use crate::game::Vector2;

    #[test]
    fn test_tracks_ball_within_jitter() {
        let mut bot = JitterBot::seeded(7);
        let mut state = GameState::new(OpponentControl::Scripted);

        for step in 0..200 {
            state.ball.position = Vector2::new(900.0, 150.0 + step as f32 * 2.0);
            bot.drive(&mut state.opponent, &state.ball);

            let offset = state.opponent.position.y - state.ball.position.y;
            assert!((0.0..MAX_JITTER).contains(&offset), "offset {} out of range", offset);
            assert_eq!(state.opponent.position.x, OPPONENT_START.x);
        }
    }

    #[test]
    fn test_ignores_targets_outside_field() {
        let mut bot = JitterBot::seeded(1);
        let mut state = GameState::new(OpponentControl::Scripted);

        state.ball.position = Vector2::new(900.0, 20.0);
        bot.drive(&mut state.opponent, &state.ball);
        assert_eq!(state.opponent.position, OPPONENT_START);

        state.ball.position = Vector2::new(900.0, 700.0);
        bot.drive(&mut state.opponent, &state.ball);
        assert_eq!(state.opponent.position, OPPONENT_START);
    }

    #[test]
    fn test_same_seed_same_moves() {
        let mut first = JitterBot::seeded(42);
        let mut second = JitterBot::seeded(42);
        let mut a = GameState::new(OpponentControl::Scripted);
        let mut b = GameState::new(OpponentControl::Scripted);

        for _ in 0..50 {
            first.drive(&mut a.opponent, &a.ball);
            second.drive(&mut b.opponent, &b.ball);
            assert_eq!(a.opponent.position, b.opponent.position);
        }
    }
}
