//! 3x5 bitmap digits

/// Columns per glyph
pub const GLYPH_COLUMNS: usize = 3;
/// Rows per glyph
pub const GLYPH_ROWS: usize = 5;

/// Digits 0-9, each 15 cells row-major (1 = filled)
pub const DIGITS: [[u8; GLYPH_COLUMNS * GLYPH_ROWS]; 10] = [
    [1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1], // 0
    [1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 1, 1], // 1
    [1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1], // 2
    [1, 1, 1, 0, 0, 1, 0, 1, 1, 0, 0, 1, 1, 1, 1], // 3
    [1, 0, 1, 1, 0, 1, 1, 1, 1, 0, 0, 1, 0, 0, 1], // 4
    [1, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0, 1, 1, 1, 1], // 5
    [0, 1, 1, 1, 0, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1], // 6
    [1, 1, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1, 0], // 7
    [1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1], // 8
    [1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 0, 1, 1, 1, 0], // 9
];

/// Cells of `digit`, wrapping anything above 9
#[inline]
pub fn glyph(digit: u8) -> &'static [u8; GLYPH_COLUMNS * GLYPH_ROWS] {
    &DIGITS[(digit % 10) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_are_distinct() {
        for a in 0..10 {
            for b in (a + 1)..10 {
                assert_ne!(DIGITS[a], DIGITS[b], "digits {a} and {b} share a glyph");
            }
        }
    }

    #[test]
    fn test_eight_has_two_holes() {
        let empty = glyph(8).iter().filter(|&&c| c == 0).count();
        assert_eq!(empty, 2);
    }
}
