// Braille canvas for high-resolution terminal rendering
// Each terminal cell contains a 2×4 grid of Braille dots
// This gives us 2× horizontal and 4× vertical resolution
use super::surface::Surface;
use crate::game::state::{Aabb, Rgb, FIELD_HEIGHT, FIELD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cell {
    pub dots: u8,
    pub color: Rgb,
}

pub struct BrailleCanvas {
    width: usize,  // Width in terminal cells
    height: usize, // Height in terminal cells
    cells: Vec<Cell>,
    background: Rgb,
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
            background: [0, 0, 0],
        }
    }

    /// Set a dot at pixel coordinates
    /// pixel_x: 0 to (width * 2 - 1)
    /// pixel_y: 0 to (height * 4 - 1), top row first
    pub fn set_pixel(&mut self, pixel_x: usize, pixel_y: usize, color: Rgb) {
        let cell_x = pixel_x / 2;
        let cell_y = pixel_y / 4;

        if cell_x >= self.width || cell_y >= self.height {
            return;
        }

        // Braille dot numbering:
        // 1 4
        // 2 5
        // 3 6
        // 7 8
        let dot_index = match (pixel_x % 2, pixel_y % 4) {
            (0, 0) => 0,
            (0, 1) => 1,
            (0, 2) => 2,
            (0, 3) => 6,
            (1, 0) => 3,
            (1, 1) => 4,
            (1, 2) => 5,
            (1, 3) => 7,
            _ => unreachable!(),
        };

        // One foreground color per cell: the last shape drawn wins
        let cell = &mut self.cells[cell_y * self.width + cell_x];
        cell.dots |= 1 << dot_index;
        cell.color = color;
    }

    pub fn cell(&self, cell_x: usize, cell_y: usize) -> Option<Cell> {
        if cell_x >= self.width || cell_y >= self.height {
            return None;
        }
        Some(self.cells[cell_y * self.width + cell_x])
    }

    /// Convert dot pattern to Braille character
    /// Braille Unicode: U+2800 + dot pattern; empty cells become spaces
    pub fn to_char(&self, cell_x: usize, cell_y: usize) -> char {
        match self.cell(cell_x, cell_y) {
            Some(cell) if cell.dots != 0 => {
                char::from_u32(0x2800 + cell.dots as u32).unwrap_or(' ')
            }
            _ => ' ',
        }
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get width in pixels (2 per cell)
    pub fn pixel_width(&self) -> usize {
        self.width * 2
    }

    /// Get height in pixels (4 per cell)
    pub fn pixel_height(&self) -> usize {
        self.height * 4
    }

    /// Pixel span covered by a field interval; never empty so thin shapes stay visible
    fn span(start: f32, end: f32, scale: f32, limit: usize) -> (usize, usize) {
        let first = (start * scale).floor().max(0.0) as usize;
        let last = ((end * scale).ceil().max(0.0) as usize).max(first + 1);
        (first.min(limit), last.min(limit))
    }
}

impl Surface for BrailleCanvas {
    fn clear(&mut self, color: Rgb) {
        self.cells.fill(Cell::default());
        self.background = color;
    }

    fn fill_rect(&mut self, rect: Aabb, color: Rgb) {
        let scale_x = self.pixel_width() as f32 / FIELD_WIDTH;
        let scale_y = self.pixel_height() as f32 / FIELD_HEIGHT;

        // Field y grows upward, terminal rows grow downward
        let (x0, x1) = Self::span(rect.left(), rect.right(), scale_x, self.pixel_width());
        let (y0, y1) = Self::span(
            FIELD_HEIGHT - rect.top(),
            FIELD_HEIGHT - rect.bottom(),
            scale_y,
            self.pixel_height(),
        );

        for py in y0..y1 {
            for px in x0..x1 {
                self.set_pixel(px, py, color);
            }
        }
    }
}
