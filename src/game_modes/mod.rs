mod ai;
mod common;
mod local;

pub use ai::run_game_vs_ai;
pub use local::run_game_local;
