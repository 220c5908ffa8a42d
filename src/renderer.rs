//! Per-sprite rasterization into RGBA buffers.

use crate::color;
use crate::models::SpriteDef;
use image::RgbaImage;
use thiserror::Error;

/// Error when rasterizing a single sprite definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A character with no color table entry. `x`/`y` are the 0-based column
    /// and row of the offending character.
    #[error("invalid color symbol '{symbol}' at column {x}, row {y}")]
    InvalidSymbol { symbol: char, x: usize, y: usize },
}

/// Rasterize a sprite definition into an RGBA buffer.
///
/// Height is the row count and width the widest row in chars; positions past
/// the end of a shorter row stay transparent. Every character present must
/// resolve through the color table or rasterization fails without producing
/// an image. An empty definition rasterizes to a 1x1 transparent buffer.
pub fn render_sprite(def: &SpriteDef) -> Result<RgbaImage, RenderError> {
    let width = def.width();
    let height = def.height();
    if width == 0 || height == 0 {
        return Ok(RgbaImage::from_pixel(1, 1, color::TRANSPARENT));
    }

    let mut image = RgbaImage::from_pixel(width as u32, height as u32, color::TRANSPARENT);
    for (y, row) in def.rows.iter().enumerate() {
        for (x, symbol) in row.chars().enumerate() {
            let rgba =
                color::lookup(symbol).ok_or(RenderError::InvalidSymbol { symbol, x, y })?;
            image.put_pixel(x as u32, y as u32, rgba);
        }
    }
    Ok(image)
}
