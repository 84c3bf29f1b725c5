//! Filled 2D primitives and the entity draw routines built on them

use glam::Vec2;

use super::glyphs::{GLYPH_COLUMNS, GLYPH_ROWS, glyph};
use super::raster::put_pixel;
use crate::sim::{Ball, Colour, Paddle, Score};

/// Fill a disc centred on `center`
///
/// Covers integer offsets in `[-r, r)` on both axes whose squared length is at
/// most `r²`, so the right and bottom rims are one pixel thinner.
pub fn fill_disc(pixels: &mut [u8], center: Vec2, radius: f32, colour: Colour) {
    let r = radius as i32;
    for dy in -r..r {
        for dx in -r..r {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            put_pixel(
                pixels,
                (center.x + dx as f32) as i32,
                (center.y + dy as f32) as i32,
                colour,
            );
        }
    }
}

/// Fill a `width x height` rectangle whose top-left corner is `(x, y)`
pub fn fill_rect(pixels: &mut [u8], x: i32, y: i32, width: i32, height: i32, colour: Colour) {
    for row in y..y + height {
        for col in x..x + width {
            put_pixel(pixels, col, row, colour);
        }
    }
}

pub fn draw_ball(pixels: &mut [u8], ball: &Ball) {
    fill_disc(pixels, ball.position, ball.radius(), ball.colour);
}

/// Paddle rectangle, centred on its position
pub fn draw_paddle(pixels: &mut [u8], paddle: &Paddle) {
    let dims = &paddle.dimensions;
    fill_rect(
        pixels,
        (paddle.position.x - dims.half_width()) as i32,
        (paddle.position.y - dims.half_height()) as i32,
        dims.width as i32,
        dims.height as i32,
        paddle.colour,
    );
}

/// Score digit, centred on the score's position
pub fn draw_score(pixels: &mut [u8], score: &Score) {
    let scale = score.scale;
    let origin_x = score.position.x as i32 - scale * GLYPH_COLUMNS as i32 / 2;
    let origin_y = score.position.y as i32 - scale * GLYPH_ROWS as i32 / 2;

    for (index, &cell) in glyph(score.number).iter().enumerate() {
        if cell == 0 {
            continue;
        }
        let col = (index % GLYPH_COLUMNS) as i32;
        let row = (index / GLYPH_COLUMNS) as i32;
        fill_rect(
            pixels,
            origin_x + col * scale,
            origin_y + row * scale,
            scale,
            scale,
            score.colour,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::raster::new_buffer;

    fn lit(pixels: &[u8], x: i32, y: i32) -> bool {
        let i = ((y * WINDOW_WIDTH + x) * 4) as usize;
        pixels[i] != 0 || pixels[i + 1] != 0 || pixels[i + 2] != 0
    }

    fn lit_count(pixels: &[u8]) -> usize {
        pixels
            .chunks_exact(4)
            .filter(|p| p[0] != 0 || p[1] != 0 || p[2] != 0)
            .count()
    }

    #[test]
    fn test_disc_is_asymmetric_at_rim() {
        let mut pixels = new_buffer();
        fill_disc(&mut pixels, Vec2::new(100.0, 100.0), 10.0, Colour::WHITE);

        assert!(lit(&pixels, 100, 100));
        assert!(lit(&pixels, 90, 100));
        assert!(lit(&pixels, 100, 90));
        // Offsets stop short of +r
        assert!(!lit(&pixels, 110, 100));
        assert!(!lit(&pixels, 100, 110));
        // Corners are outside the disc
        assert!(!lit(&pixels, 91, 91));
    }

    #[test]
    fn test_paddle_is_centred() {
        let mut pixels = new_buffer();
        let paddle = Paddle::player(Vec2::new(50.0, 300.0), Colour::WHITE);
        draw_paddle(&mut pixels, &paddle);

        assert_eq!(lit_count(&pixels), 10 * 75);
        // Origin is (45, 262.5) truncated to (45, 262)
        assert!(lit(&pixels, 45, 262));
        assert!(lit(&pixels, 54, 336));
        assert!(!lit(&pixels, 44, 300));
        assert!(!lit(&pixels, 55, 300));
        assert!(!lit(&pixels, 50, 337));
    }

    #[test]
    fn test_paddle_clips_at_window_edge() {
        let mut pixels = new_buffer();
        let paddle = Paddle::player(Vec2::new(0.0, 20.0), Colour::WHITE);
        draw_paddle(&mut pixels, &paddle);

        // Only the on-screen 5 columns of the rows from y = 0 to 57 remain
        assert_eq!(lit_count(&pixels), 5 * 58);
    }

    #[test]
    fn test_score_one() {
        let mut pixels = new_buffer();
        let mut score = Score::tally(1, Vec2::new(50.0, 500.0), Colour::WHITE);
        score.position = Vec2::new(100.0, 100.0);
        draw_score(&mut pixels, &score);

        // "1" fills 8 of 15 cells, each 10x10
        assert_eq!(lit_count(&pixels), 8 * 100);
        // Origin is (85, 75); top-left cell filled, top-right empty
        assert!(lit(&pixels, 85, 75));
        assert!(!lit(&pixels, 84, 75));
        assert!(!lit(&pixels, 105, 75));
        // Bottom row is fully filled
        assert!(lit(&pixels, 114, 124));
        assert!(!lit(&pixels, 114, 125));
    }

    #[test]
    fn test_score_zero_has_hollow_middle() {
        let mut pixels = new_buffer();
        let mut score = Score::tally(0, Vec2::ZERO, Colour::WHITE);
        score.position = Vec2::new(200.0, 200.0);
        draw_score(&mut pixels, &score);

        assert_eq!(lit_count(&pixels), 12 * 100);
        // Centre column of the middle rows stays dark
        assert!(!lit(&pixels, 200, 200));
    }
}
