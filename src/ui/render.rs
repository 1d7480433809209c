use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::braille::BrailleCanvas;
use super::font::GlyphAtlas;
use super::surface::Surface;
use crate::config::DisplayConfig;
use crate::game::state::{Aabb, Rgb, Side, FIELD_CENTER, FIELD_HEIGHT, FIELD_WIDTH};
use crate::game::{GameState, Vector2};

pub const SCORE_TEXT_SIZE: f32 = 54.0;
const CENTER_LINE_WIDTH: f32 = 10.0;

// Gap between the top of the field and the top of the score digits
const SCORE_TOP_MARGIN: f32 = 50.0;
const PLAYER_SCORE_X: f32 = FIELD_WIDTH / 2.0 - 80.0;
const OPPONENT_SCORE_X: f32 = FIELD_WIDTH / 2.0 + 50.0;

/// Colors for everything that isn't an entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Rgb,
    pub center_line: Rgb,
    pub score: Rgb,
}

impl Palette {
    pub fn from_config(display: &DisplayConfig) -> Self {
        Self {
            background: display.background_color,
            center_line: display.center_line_color,
            score: display.score_color,
        }
    }
}

/// Draw one frame of the game onto `surface`.
///
/// While playing this is the center line, both paddles, the ball and the scores. Once the game
/// is over only the scores and the end screen are drawn.
pub fn draw_scene<S: Surface>(
    surface: &mut S,
    state: &GameState,
    atlas: &GlyphAtlas,
    palette: &Palette,
) {
    surface.clear(palette.background);

    if let Some(winner) = state.winner {
        draw_scores(surface, state, atlas, palette);
        draw_game_over(surface, winner, atlas, palette);
        return;
    }

    surface.fill_rect(
        Aabb::new(FIELD_CENTER, CENTER_LINE_WIDTH, FIELD_HEIGHT),
        palette.center_line,
    );
    surface.fill_rect(state.opponent.shape(), state.opponent.color);
    surface.fill_rect(state.player.shape(), state.player.color);
    surface.fill_rect(state.ball.shape(), state.ball.color);

    draw_scores(surface, state, atlas, palette);
}

fn draw_scores<S: Surface>(surface: &mut S, state: &GameState, atlas: &GlyphAtlas, palette: &Palette) {
    let baseline = FIELD_HEIGHT - SCORE_TOP_MARGIN - atlas.text_height();
    surface.draw_text(
        atlas,
        Vector2::new(PLAYER_SCORE_X, baseline),
        &state.score.player.to_string(),
        palette.score,
    );
    surface.draw_text(
        atlas,
        Vector2::new(OPPONENT_SCORE_X, baseline),
        &state.score.opponent.to_string(),
        palette.score,
    );
}

pub fn end_screen_lines(winner: Side) -> [String; 2] {
    ["GAME OVER".to_string(), format!("PLAYER {} WINS", winner.number())]
}

// Each line is centered horizontally; lines stack downward from the field center
fn draw_game_over<S: Surface>(surface: &mut S, winner: Side, atlas: &GlyphAtlas, palette: &Palette) {
    let mut baseline = FIELD_CENTER.y;
    for line in end_screen_lines(winner) {
        let x = FIELD_CENTER.x - atlas.line_width(&line) / 2.0;
        surface.draw_text(atlas, Vector2::new(x, baseline), &line, palette.score);
        baseline -= atlas.line_height();
    }
}

/// Draw the game into a ratatui frame, with a one-line key hint along the bottom
pub fn render(
    frame: &mut Frame,
    state: &GameState,
    atlas: &GlyphAtlas,
    palette: &Palette,
    hint: &str,
) {
    let area = frame.area();
    let mut canvas = BrailleCanvas::new(area.width as usize, area.height as usize);

    draw_scene(&mut canvas, state, atlas, palette);

    let paragraph = Paragraph::new(canvas_lines(&canvas))
        .style(Style::default().bg(to_color(canvas.background())));
    frame.render_widget(paragraph, area);

    draw_controls(frame, area, hint);
}

/// One line per cell row; neighbouring cells with the same color share a span
fn canvas_lines(canvas: &BrailleCanvas) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(canvas.height());

    for y in 0..canvas.height() {
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_color: Option<Rgb> = None;

        for x in 0..canvas.width() {
            let color = canvas.cell(x, y).map(|cell| cell.color).unwrap_or_default();
            if run_color.is_some_and(|current| current != color) {
                spans.push(styled_run(std::mem::take(&mut run), run_color));
            }
            run_color = Some(color);
            run.push(canvas.to_char(x, y));
        }
        if !run.is_empty() {
            spans.push(styled_run(run, run_color));
        }

        lines.push(Line::from(spans));
    }

    lines
}

fn styled_run(text: String, color: Option<Rgb>) -> Span<'static> {
    let color = color.unwrap_or_default();
    Span::styled(text, Style::default().fg(to_color(color)))
}

fn to_color([r, g, b]: Rgb) -> Color {
    Color::Rgb(r, g, b)
}

fn draw_controls(frame: &mut Frame, area: Rect, hint: &str) {
    if area.height == 0 {
        return;
    }

    let controls = Paragraph::new(hint.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    let controls_area = Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    };

    frame.render_widget(controls, controls_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::OpponentControl;
    use crate::ui::font::GAME_GLYPHS;

    /// Surface that remembers every draw call
    #[derive(Default)]
    struct RecordingSurface {
        clears: Vec<Rgb>,
        rects: Vec<(Aabb, Rgb)>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, color: Rgb) {
            self.clears.push(color);
        }

        fn fill_rect(&mut self, rect: Aabb, color: Rgb) {
            self.rects.push((rect, color));
        }
    }

    fn palette() -> Palette {
        Palette::from_config(&DisplayConfig::default())
    }

    fn atlas() -> GlyphAtlas {
        GlyphAtlas::new(GAME_GLYPHS, SCORE_TEXT_SIZE).unwrap()
    }

    #[test]
    fn test_playing_frame_draws_every_entity() {
        let state = GameState::new(OpponentControl::Scripted);
        let palette = palette();
        let mut surface = RecordingSurface::default();

        draw_scene(&mut surface, &state, &atlas(), &palette);

        assert_eq!(surface.clears, vec![palette.background]);
        let (line, line_color) = surface.rects[0];
        assert_eq!(line_color, palette.center_line);
        assert_eq!(line.center, FIELD_CENTER);
        assert_eq!(line.half_height, FIELD_HEIGHT / 2.0);

        assert_eq!(surface.rects[1], (state.opponent.shape(), state.opponent.color));
        assert_eq!(surface.rects[2], (state.player.shape(), state.player.color));
        assert_eq!(surface.rects[3], (state.ball.shape(), state.ball.color));

        // Both "0" scores sit in the top band of the field
        let score_rects = &surface.rects[4..];
        assert!(!score_rects.is_empty());
        assert!(score_rects.iter().all(|(rect, color)| {
            *color == palette.score
                && rect.bottom() >= FIELD_HEIGHT - SCORE_TOP_MARGIN - SCORE_TEXT_SIZE - 0.01
        }));
    }

    #[test]
    fn test_score_digits_stay_inside_field() {
        let state = GameState::new(OpponentControl::Scripted);
        let mut surface = RecordingSurface::default();

        draw_scene(&mut surface, &state, &atlas(), &palette());

        let top = surface.rects[4..]
            .iter()
            .map(|(rect, _)| rect.top())
            .fold(f32::MIN, f32::max);
        assert!(top <= FIELD_HEIGHT - SCORE_TOP_MARGIN + 0.01);
        assert!(top < FIELD_HEIGHT);
    }

    #[test]
    fn test_game_over_frame_shows_end_screen_only() {
        let mut state = GameState::new(OpponentControl::Scripted);
        state.winner = Some(Side::Opponent);
        let palette = palette();
        let mut surface = RecordingSurface::default();

        draw_scene(&mut surface, &state, &atlas(), &palette);

        assert!(surface.rects.iter().all(|(_, color)| *color == palette.score));
        assert!(!surface.rects.iter().any(|(rect, _)| *rect == state.ball.shape()));
        // End screen text straddles the vertical center line
        assert!(surface
            .rects
            .iter()
            .any(|(rect, _)| rect.top() <= FIELD_CENTER.y + SCORE_TEXT_SIZE && rect.left() < FIELD_CENTER.x));
    }

    #[test]
    fn test_end_screen_names_winner() {
        assert_eq!(end_screen_lines(Side::Player), ["GAME OVER", "PLAYER 1 WINS"]);
        assert_eq!(end_screen_lines(Side::Opponent)[1], "PLAYER 2 WINS");
    }

    #[test]
    fn test_canvas_lines_group_colors() {
        let mut canvas = BrailleCanvas::new(4, 1);
        canvas.set_pixel(0, 0, [9, 9, 9]);
        canvas.set_pixel(2, 0, [9, 9, 9]);
        canvas.set_pixel(6, 0, [1, 1, 1]);

        let lines = canvas_lines(&canvas);

        assert_eq!(lines.len(), 1);
        // Cells 0-1 lit, cell 2 empty (default color), cell 3 lit in another color
        assert_eq!(lines[0].spans.len(), 3);
        assert_eq!(lines[0].spans[0].content, "⠁⠁");
    }
}
