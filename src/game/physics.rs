use tracing::{debug, info};

use super::state::{
    Aabb, Ball, GameState, Paddle, Side, BALL_HALF_SIZE, BALL_SIZE, FIELD_HEIGHT, FIELD_WIDTH,
    OPPONENT_START, PADDLE_BASE_SPEED, PADDLE_HALF_HEIGHT, PLAYER_START,
};
use super::vector::Vector2;

/// What happened to the ball during one update
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PhysicsEvents {
    pub wall_collision: bool,
    pub paddle_collision: Option<Side>,
    pub goal_scored: Option<Side>,
}

impl PhysicsEvents {
    #[cfg(test)]
    pub fn any(&self) -> bool {
        self.wall_collision || self.paddle_collision.is_some() || self.goal_scored.is_some()
    }
}

/// Advance the ball by one frame.
///
/// Collisions are predicted against the position the ball would reach this frame. Only the
/// first matching case is handled, in this order: top/bottom wall, player paddle, opponent
/// paddle, player goal line, opponent goal line. Does nothing once the game is over.
pub fn update(state: &mut GameState) -> PhysicsEvents {
    let mut events = PhysicsEvents::default();
    if state.game_over() {
        return events;
    }

    let target = state.ball.target();
    let projected = Aabb::new(target, BALL_SIZE, BALL_SIZE);

    if target.y + BALL_HALF_SIZE > FIELD_HEIGHT || target.y - BALL_HALF_SIZE < 0.0 {
        state.ball.move_direction = state.ball.move_direction.flip_y();
        events.wall_collision = true;
    } else if projected.overlaps(&state.player.shape()) {
        bounce_off_paddle(&mut state.ball, &state.player);
        events.paddle_collision = Some(Side::Player);
    } else if projected.overlaps(&state.opponent.shape()) {
        bounce_off_paddle(&mut state.ball, &state.opponent);
        events.paddle_collision = Some(Side::Opponent);
    } else if target.x - BALL_HALF_SIZE <= 0.0 {
        point(state, Side::Opponent);
        events.goal_scored = Some(Side::Opponent);
    } else if target.x + BALL_HALF_SIZE >= FIELD_WIDTH {
        point(state, Side::Player);
        events.goal_scored = Some(Side::Player);
    }

    // A fresh serve starts from the exact center on the next frame
    if events.goal_scored.is_none() {
        state.ball.position = state.ball.position + state.ball.move_direction * state.ball.speed;
    }

    events
}

/// Strike offset of the ball relative to the paddle, scaled by the paddle's height on the field
pub fn deflection_factor(paddle: &Paddle, ball: &Ball) -> f32 {
    -((paddle.position.y - ball.position.y) / paddle.position.y)
}

fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle) {
    let factor = deflection_factor(paddle, ball);

    ball.move_direction = ball.move_direction.flip_x() + Vector2::new(0.0, factor);
    ball.speed *= factor;

    debug!(factor, speed = ball.speed, "paddle bounce");
}

/// Award a point to `scorer` and reset the ball and both paddles for the next serve.
///
/// The serve heads left after a player point and right after an opponent point.
pub fn point(state: &mut GameState, scorer: Side) {
    let serve = match scorer {
        Side::Player => Vector2::LEFT,
        Side::Opponent => Vector2::RIGHT,
    };
    state.ball.reset(serve);

    state.player.reset(PLAYER_START, PADDLE_BASE_SPEED);
    state
        .opponent
        .reset(OPPONENT_START, state.opponent_control.reset_speed());

    state.score.increment(scorer);
    info!(
        ?scorer,
        player = state.score.player,
        opponent = state.score.opponent,
        "point scored"
    );

    if state.score.reached_threshold() && state.winner.is_none() {
        state.winner = Some(scorer);
        info!(winner = scorer.number(), "game over");
    }
}

/// Move a paddle one step along `direction`; a step that would push the paddle past the top or
/// bottom of the field is dropped.
pub fn move_paddle(paddle: &mut Paddle, direction: Vector2) {
    let projected = paddle.position + direction * paddle.speed;

    if projected.y + PADDLE_HALF_HEIGHT > FIELD_HEIGHT || projected.y - PADDLE_HALF_HEIGHT < 0.0 {
        return;
    }

    paddle.position = projected;
}
