use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashSet;
use std::io;
use std::time::Duration;
use tracing::warn;

use crate::config::KeyBindings;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    Quit,
    PlayerUp,
    PlayerDown,
    OpponentUp,
    OpponentDown,
}

/// Parse a key name from the config file ("Up", "Esc", "W", ...)
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let code = match name.to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code)
}

/// Letters match regardless of shift state
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<(KeyCode, InputAction)>,
}

impl KeyMap {
    /// Build the key map from config; unknown key names keep their default binding
    pub fn from_config(keys: &KeyBindings) -> Self {
        let defaults = KeyBindings::default();
        let entries = [
            (&keys.player_up, &defaults.player_up, InputAction::PlayerUp),
            (&keys.player_down, &defaults.player_down, InputAction::PlayerDown),
            (&keys.opponent_up, &defaults.opponent_up, InputAction::OpponentUp),
            (&keys.opponent_down, &defaults.opponent_down, InputAction::OpponentDown),
            (&keys.quit, &defaults.quit, InputAction::Quit),
        ];

        let mut bindings = Vec::with_capacity(entries.len() + 1);
        for (name, fallback, action) in entries {
            let code = parse_key(name).or_else(|| {
                warn!(key = %name, ?action, "unknown key name, using default");
                parse_key(fallback)
            });
            if let Some(code) = code {
                bindings.push((normalize(code), action));
            }
        }
        bindings.push((KeyCode::Esc, InputAction::Quit));

        Self { bindings }
    }

    pub fn action_for(&self, code: KeyCode) -> Option<InputAction> {
        let code = normalize(code);
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == code)
            .map(|(_, action)| *action)
    }
}

/// Held-key state for the current frame.
///
/// Terminals that report key releases keep a key held from press to release. Everywhere else
/// each press (or auto-repeat) counts as held for the frame it arrives in.
pub struct InputState {
    keymap: KeyMap,
    held: HashSet<InputAction>,
    quit_requested: bool,
    release_events: bool,
}

impl InputState {
    pub fn new(keymap: KeyMap, release_events: bool) -> Self {
        Self {
            keymap,
            held: HashSet::new(),
            quit_requested: false,
            release_events,
        }
    }

    /// Drain all pending terminal events without blocking
    pub fn poll(&mut self) -> io::Result<()> {
        if !self.release_events {
            self.held.clear();
        }

        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }

        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit_requested = true;
            return;
        }

        let Some(action) = self.keymap.action_for(key.code) else {
            return;
        };

        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if action == InputAction::Quit {
                    self.quit_requested = true;
                } else {
                    self.held.insert(action);
                }
            }
            KeyEventKind::Release => {
                self.held.remove(&action);
            }
        }
    }

    pub fn pressed(&self, action: InputAction) -> bool {
        self.held.contains(&action)
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
    }

    fn default_input(release_events: bool) -> InputState {
        InputState::new(KeyMap::from_config(&KeyBindings::default()), release_events)
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!(parse_key("Up"), Some(KeyCode::Up));
        assert_eq!(parse_key("ESC"), Some(KeyCode::Esc));
        assert_eq!(parse_key("space"), Some(KeyCode::Char(' ')));
        assert_eq!(parse_key("W"), Some(KeyCode::Char('w')));
        assert_eq!(parse_key("PageUp"), None);
        assert_eq!(parse_key(""), None);
    }

    #[test]
    fn test_default_bindings() {
        let keymap = KeyMap::from_config(&KeyBindings::default());

        assert_eq!(keymap.action_for(KeyCode::Char('w')), Some(InputAction::PlayerUp));
        assert_eq!(keymap.action_for(KeyCode::Char('S')), Some(InputAction::PlayerDown));
        assert_eq!(keymap.action_for(KeyCode::Up), Some(InputAction::OpponentUp));
        assert_eq!(keymap.action_for(KeyCode::Down), Some(InputAction::OpponentDown));
        assert_eq!(keymap.action_for(KeyCode::Char('q')), Some(InputAction::Quit));
        assert_eq!(keymap.action_for(KeyCode::Esc), Some(InputAction::Quit));
        assert_eq!(keymap.action_for(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_unknown_key_name_keeps_default() {
        let keys = KeyBindings {
            player_up: "NotAKey".to_string(),
            ..KeyBindings::default()
        };

        let keymap = KeyMap::from_config(&keys);

        assert_eq!(keymap.action_for(KeyCode::Char('w')), Some(InputAction::PlayerUp));
    }

    #[test]
    fn test_key_held_until_release() {
        let mut input = default_input(true);

        input.handle_key(key(KeyCode::Char('w'), KeyEventKind::Press));
        assert!(input.pressed(InputAction::PlayerUp));

        input.handle_key(key(KeyCode::Char('w'), KeyEventKind::Release));
        assert!(!input.pressed(InputAction::PlayerUp));
    }

    #[test]
    fn test_quit_keys() {
        let mut input = default_input(false);
        assert!(!input.quit_requested());

        input.handle_key(key(KeyCode::Char('q'), KeyEventKind::Press));
        assert!(input.quit_requested());

        let mut input = default_input(false);
        input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(input.quit_requested());
    }
}
