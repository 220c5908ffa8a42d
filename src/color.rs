//! Fixed color symbol table
//!
//! Single-character symbols map to RGBA values: `.` for transparency, lower
//! case for the base colors, upper case for their light variants. The table is
//! closed; any other character is invalid input, never a fallback color.

use image::Rgba;

/// Transparent pixel, also used as the canvas background.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Look up the RGBA value for a color symbol.
///
/// Returns `None` for any character outside the fixed table. Callers treat a
/// miss as a hard error.
pub fn lookup(symbol: char) -> Option<Rgba<u8>> {
    let rgba = match symbol {
        '.' => [0, 0, 0, 0],
        // base colors
        'l' => [0, 0, 0, 255],
        'r' => [255, 0, 0, 255],
        'g' => [0, 255, 0, 255],
        'b' => [0, 0, 255, 255],
        'y' => [255, 255, 0, 255],
        'p' => [128, 0, 128, 255],
        'c' => [0, 255, 255, 255],
        'w' => [255, 255, 255, 255],
        // light variants
        'L' => [85, 85, 85, 255],
        'R' => [255, 128, 128, 255],
        'G' => [128, 255, 128, 255],
        'B' => [128, 128, 255, 255],
        'Y' => [255, 255, 128, 255],
        'P' => [255, 128, 255, 255],
        'C' => [128, 255, 255, 255],
        'W' => [170, 170, 170, 255],
        _ => return None,
    };
    Some(Rgba(rgba))
}
