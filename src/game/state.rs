use serde::{Deserialize, Serialize};

use super::vector::Vector2;

// Field dimensions in game units; the renderer scales these onto the terminal
pub const FIELD_WIDTH: f32 = 1366.0;
pub const FIELD_HEIGHT: f32 = 768.0;

pub const BALL_SIZE: f32 = 25.0;
pub const BALL_HALF_SIZE: f32 = BALL_SIZE / 2.0;
pub const BALL_BASE_SPEED: f32 = 7.0;

pub const PADDLE_WIDTH: f32 = 25.0;
pub const PADDLE_HEIGHT: f32 = 200.0;
pub const PADDLE_HALF_WIDTH: f32 = PADDLE_WIDTH / 2.0;
pub const PADDLE_HALF_HEIGHT: f32 = PADDLE_HEIGHT / 2.0;
pub const PADDLE_MARGIN: f32 = 25.0; // Paddle center distance from its goal line
pub const PADDLE_BASE_SPEED: f32 = 15.0;

pub const WINNING_SCORE: u32 = 10;

pub const FIELD_CENTER: Vector2 = Vector2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);
pub const PLAYER_START: Vector2 = Vector2::new(PADDLE_MARGIN, FIELD_HEIGHT / 2.0);
pub const OPPONENT_START: Vector2 = Vector2::new(FIELD_WIDTH - PADDLE_MARGIN, FIELD_HEIGHT / 2.0);

pub type Rgb = [u8; 3];

pub const DEFAULT_PADDLE_COLOR: Rgb = [203, 75, 22];
pub const DEFAULT_BALL_COLOR: Rgb = [211, 1, 2];

/// Axis-aligned rectangle described by its center and half extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vector2,
    pub half_width: f32,
    pub half_height: f32,
}

impl Aabb {
    pub fn new(center: Vector2, width: f32, height: f32) -> Self {
        Self {
            center,
            half_width: width / 2.0,
            half_height: height / 2.0,
        }
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.half_width
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.half_width
    }

    pub fn bottom(&self) -> f32 {
        self.center.y - self.half_height
    }

    pub fn top(&self) -> f32 {
        self.center.y + self.half_height
    }

    /// Strict overlap: rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.bottom() < other.top()
            && self.top() > other.bottom()
    }
}

/// Side of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// Number shown on the end screen ("PLAYER 1 WINS")
    pub fn number(&self) -> u8 {
        match self {
            Side::Player => 1,
            Side::Opponent => 2,
        }
    }
}

/// Who moves the opponent paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentControl {
    /// Scripted tracker places the paddle directly each frame
    #[default]
    Scripted,
    /// Second human on the same keyboard
    Keyboard,
}

impl OpponentControl {
    /// Opponent paddle speed restored after every point
    pub fn reset_speed(&self) -> f32 {
        match self {
            OpponentControl::Scripted => 0.0,
            OpponentControl::Keyboard => PADDLE_BASE_SPEED,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Paddle {
    pub position: Vector2,
    pub move_direction: Vector2,
    pub speed: f32,
    pub color: Rgb,
}

impl Paddle {
    pub fn new(position: Vector2, color: Rgb) -> Self {
        Self {
            position,
            move_direction: Vector2::ZERO,
            speed: PADDLE_BASE_SPEED,
            color,
        }
    }

    pub fn shape(&self) -> Aabb {
        Aabb::new(self.position, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    pub fn reset(&mut self, position: Vector2, speed: f32) {
        self.position = position;
        self.move_direction = Vector2::ZERO;
        self.speed = speed;
    }
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub position: Vector2,
    pub move_direction: Vector2,
    pub speed: f32,
    pub color: Rgb,
}

impl Ball {
    pub fn new(color: Rgb) -> Self {
        Self {
            position: FIELD_CENTER,
            move_direction: Vector2::LEFT,
            speed: BALL_BASE_SPEED,
            color,
        }
    }

    /// Where the ball will be after one more step at its current velocity
    pub fn target(&self) -> Vector2 {
        self.position + self.move_direction * self.speed
    }

    pub fn shape(&self) -> Aabb {
        Aabb::new(self.position, BALL_SIZE, BALL_SIZE)
    }

    /// Serve from the center of the field
    pub fn reset(&mut self, direction: Vector2) {
        self.position = FIELD_CENTER;
        self.move_direction = direction;
        self.speed = BALL_BASE_SPEED;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn reached_threshold(&self) -> bool {
        self.player >= WINNING_SCORE || self.opponent >= WINNING_SCORE
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub winner: Option<Side>,
    pub opponent_control: OpponentControl,
}

impl GameState {
    #[cfg(test)]
    pub fn new(opponent_control: OpponentControl) -> Self {
        Self::with_colors(opponent_control, DEFAULT_PADDLE_COLOR, DEFAULT_BALL_COLOR)
    }

    pub fn with_colors(opponent_control: OpponentControl, paddle_color: Rgb, ball_color: Rgb) -> Self {
        Self {
            player: Paddle::new(PLAYER_START, paddle_color),
            opponent: Paddle::new(OPPONENT_START, paddle_color),
            ball: Ball::new(ball_color),
            score: Score::default(),
            winner: None,
            opponent_control,
        }
    }

    pub fn game_over(&self) -> bool {
        self.winner.is_some()
    }
}
