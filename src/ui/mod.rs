pub mod braille;
pub mod font;
pub mod render;
pub mod surface;

pub use font::{GlyphAtlas, GAME_GLYPHS};
pub use render::{render, Palette, SCORE_TEXT_SIZE};
