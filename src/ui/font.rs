// Bitmap glyph atlas for score and end-screen text

use std::collections::HashMap;
use std::fmt;

use crate::game::state::Aabb;
use crate::game::Vector2;

/// Every glyph the game draws: score digits plus the end-screen letters
pub const GAME_GLYPHS: &str = "0123456789GAMEOVRPLYWINS ";

const GLYPH_COLUMNS: usize = 5;
const GLYPH_ROWS: usize = 7;
const ADVANCE_COLUMNS: f32 = 6.0; // One blank column between glyphs
const LINE_ROWS: f32 = 10.0;

// 5x7 bitmaps, top row first, bit 4 is the leftmost column
const FONT: &[(char, [u8; GLYPH_ROWS])] = &[
    ('0', [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
    ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('2', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
    ('3', [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
    ('4', [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
    ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
    ('6', [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
    ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
    ('8', [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
    ('9', [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
    ('A', [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('E', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
    ('G', [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111]),
    ('I', [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('L', [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
    ('M', [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
    ('N', [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001]),
    ('O', [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('P', [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('R', [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
    ('S', [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
    ('V', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
    ('W', [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010]),
    ('Y', [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100]),
    (' ', [0; GLYPH_ROWS]),
];

#[derive(Debug, Clone, PartialEq)]
pub enum AtlasError {
    /// Requested glyph is not in the built-in font
    MissingGlyph(char),
    /// Text size must be a positive, finite number of field units
    InvalidSize(f32),
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtlasError::MissingGlyph(c) => write!(f, "font has no glyph for {:?}", c),
            AtlasError::InvalidSize(size) => write!(f, "invalid text size {}", size),
        }
    }
}

impl std::error::Error for AtlasError {}

/// Glyphs rasterized at one text size, measured in field units
#[derive(Debug, Clone)]
pub struct GlyphAtlas {
    glyphs: HashMap<char, [u8; GLYPH_ROWS]>,
    pixel: f32,
}

impl GlyphAtlas {
    /// Build an atlas holding exactly `glyph_set`, with glyphs `size` field units tall
    pub fn new(glyph_set: &str, size: f32) -> Result<Self, AtlasError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(AtlasError::InvalidSize(size));
        }

        let mut glyphs = HashMap::new();
        for c in glyph_set.chars() {
            let bitmap = FONT
                .iter()
                .find(|(glyph, _)| *glyph == c)
                .map(|(_, bitmap)| *bitmap)
                .ok_or(AtlasError::MissingGlyph(c))?;
            glyphs.insert(c, bitmap);
        }

        Ok(Self {
            glyphs,
            pixel: size / GLYPH_ROWS as f32,
        })
    }

    #[cfg(test)]
    pub fn contains(&self, c: char) -> bool {
        self.glyphs.contains_key(&c)
    }

    /// Height of a glyph from baseline to its top row
    pub fn text_height(&self) -> f32 {
        GLYPH_ROWS as f32 * self.pixel
    }

    /// Distance between successive baselines
    pub fn line_height(&self) -> f32 {
        LINE_ROWS * self.pixel
    }

    /// Width of a single line of text
    pub fn line_width(&self, line: &str) -> f32 {
        let count = line.chars().count() as f32;
        if count == 0.0 {
            return 0.0;
        }
        (count * ADVANCE_COLUMNS - 1.0) * self.pixel
    }

    /// Rectangles covering the lit pixels of `text`, with the first baseline starting at
    /// `origin`. Newlines step the baseline down; characters outside the atlas are skipped.
    pub fn layout(&self, origin: Vector2, text: &str) -> Vec<Aabb> {
        let mut rects = Vec::new();
        let mut baseline = origin.y;

        for line in text.lines() {
            let mut x = origin.x;
            for c in line.chars() {
                if let Some(bitmap) = self.glyphs.get(&c) {
                    self.push_glyph(&mut rects, bitmap, Vector2::new(x, baseline));
                }
                x += ADVANCE_COLUMNS * self.pixel;
            }
            baseline -= self.line_height();
        }

        rects
    }

    // Each horizontal run of lit pixels becomes one rectangle
    fn push_glyph(&self, rects: &mut Vec<Aabb>, bitmap: &[u8; GLYPH_ROWS], origin: Vector2) {
        for (row, bits) in bitmap.iter().enumerate() {
            let center_y = origin.y + ((GLYPH_ROWS - row) as f32 - 0.5) * self.pixel;
            let mut column = 0;
            while column < GLYPH_COLUMNS {
                if !lit(*bits, column) {
                    column += 1;
                    continue;
                }
                let start = column;
                while column < GLYPH_COLUMNS && lit(*bits, column) {
                    column += 1;
                }
                let run = (column - start) as f32;
                let center_x = origin.x + (start as f32 + run / 2.0) * self.pixel;
                rects.push(Aabb::new(
                    Vector2::new(center_x, center_y),
                    run * self.pixel,
                    self.pixel,
                ));
            }
        }
    }
}

fn lit(bits: u8, column: usize) -> bool {
    bits & (1 << (GLYPH_COLUMNS - 1 - column)) != 0
}
