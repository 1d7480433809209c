// Drawing contract between the game and whatever displays it

use super::font::GlyphAtlas;
use crate::game::state::{Aabb, Rgb};
use crate::game::Vector2;

/// A target the scene can be drawn on, addressed in field units (y up)
pub trait Surface {
    /// Fill the whole surface with `color`
    fn clear(&mut self, color: Rgb);

    fn fill_rect(&mut self, rect: Aabb, color: Rgb);

    /// Draw `text` with its first baseline starting at `origin`
    fn draw_text(&mut self, atlas: &GlyphAtlas, origin: Vector2, text: &str, color: Rgb) {
        for rect in atlas.layout(origin, text) {
            self.fill_rect(rect, color);
        }
    }
}
