//! Built-in 5x7 bitmaps for the palette glyphs.
//!
//! Each row is five bits wide, most significant bit on the left. Glyphs
//! outside the palette fall back to a filled box so a bad index is visible
//! rather than silently blank.

/// Bitmap width in cells.
pub const GLYPH_COLS: u32 = 5;
/// Bitmap height in cells.
pub const GLYPH_ROWS: u32 = 7;

const MISSING: [u8; 7] = [
    0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111,
];

/// Row bitmap for a glyph.
pub fn bitmap(glyph: char) -> [u8; 7] {
    match glyph {
        '~' => [0, 0, 0b01000, 0b10101, 0b00010, 0, 0],
        '≈' => [0, 0b01000, 0b10101, 0b00010, 0b01000, 0b10101, 0b00010],
        '∼' => [0, 0, 0, 0b01101, 0b10010, 0, 0],
        '⌐' => [0, 0, 0b11111, 0b10000, 0b10000, 0, 0],
        '¬' => [0, 0, 0b11111, 0b00001, 0b00001, 0, 0],
        '∩' => [0, 0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0],
        '∪' => [0, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110, 0],
        '°' => [0b01100, 0b10010, 0b01100, 0, 0, 0, 0],
        '·' => [0, 0, 0, 0b00100, 0, 0, 0],
        '`' => [0b01000, 0b00100, 0, 0, 0, 0, 0],
        ',' => [0, 0, 0, 0, 0b00110, 0b00100, 0b01000],
        '.' => [0, 0, 0, 0, 0, 0b01100, 0b01100],
        ':' => [0, 0b01100, 0b01100, 0, 0b01100, 0b01100, 0],
        ';' => [0, 0b01100, 0b01100, 0, 0b01100, 0b00100, 0b01000],
        '▴' => [0, 0, 0b00100, 0b01110, 0b11111, 0, 0],
        '▾' => [0, 0, 0b11111, 0b01110, 0b00100, 0, 0],
        '◆' => [0, 0b00100, 0b01110, 0b11111, 0b01110, 0b00100, 0],
        '◇' => [0, 0b00100, 0b01010, 0b10001, 0b01010, 0b00100, 0],
        ' ' => [0; 7],
        _ => MISSING,
    }
}

/// Whether cell `(col, row)` of a glyph is lit.
#[inline]
pub fn lit(rows: &[u8; 7], col: u32, row: u32) -> bool {
    col < GLYPH_COLS && row < GLYPH_ROWS && rows[row as usize] & (1 << (GLYPH_COLS - 1 - col)) != 0
}
