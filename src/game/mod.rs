pub mod input;
pub mod physics;
pub mod state;
pub mod vector;

pub use input::{InputAction, InputState, KeyMap};
pub use physics::{move_paddle, update, PhysicsEvents};
pub use state::{GameState, OpponentControl};
pub use vector::Vector2;
