// Pong configuration types
// Every section falls back to the built-in defaults when missing from the file

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::game::state::{OpponentControl, Rgb, DEFAULT_BALL_COLOR, DEFAULT_PADDLE_COLOR};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub opponent: OpponentConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // Left paddle (always human)
    pub player_up: String,
    pub player_down: String,

    // Right paddle, only read when the opponent is keyboard-controlled
    pub opponent_up: String,
    pub opponent_down: String,

    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            player_up: "W".to_string(),
            player_down: "S".to_string(),
            opponent_up: "Up".to_string(),
            opponent_down: "Down".to_string(),
            quit: "Q".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Target frames per second; one simulation step runs per frame
    pub target_fps: u64,

    pub background_color: Rgb,
    pub paddle_color: Rgb,
    pub ball_color: Rgb,
    pub center_line_color: Rgb,
    pub score_color: Rgb,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            background_color: [0, 43, 54],
            paddle_color: DEFAULT_PADDLE_COLOR,
            ball_color: DEFAULT_BALL_COLOR,
            center_line_color: [7, 54, 66],
            score_color: [42, 161, 152],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OpponentConfig {
    // "scripted" (play against the computer) or "keyboard" (two players)
    pub control: OpponentControl,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_path: PathBuf,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: PathBuf::from("/tmp/pong-debug.log"),
        }
    }
}
