//! Sprite sheet composition - packs sprite variants into a square grid.

use crate::color::TRANSPARENT;
use crate::models::SpriteDef;
use crate::renderer::{render_sprite, RenderError};
use image::RgbaImage;
use thiserror::Error;

/// Error when composing a sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    /// The sprite list for a sheet has no entries.
    #[error("no sprite definitions provided")]
    EmptyInput,
    /// The first sprite has no rows, so no cell size can be derived.
    #[error("first sprite has no rows")]
    EmptySprite,
    /// A sprite is not the uniform square size shared by the sheet.
    #[error("sprite {index} is {width}x{rows}, expected {expected}x{expected}")]
    DimensionMismatch { index: usize, expected: usize, rows: usize, width: usize },
    /// Rasterization failure, naming the offending character.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Smallest grid side whose square holds `n` cells.
pub fn grid_side(n: usize) -> usize {
    // f64 sqrt can land one short of the true root for large n
    let mut side = (n as f64).sqrt() as usize;
    while side * side < n {
        side += 1;
    }
    side
}

/// Compose sprite variants into one square sheet.
///
/// The cell size `d` is the first sprite's row count; every sprite must be
/// exactly `d x d`. Sprites are placed row-major in input order on a
/// `ceil(sqrt(n))`-cell square grid. Trailing cells and `.` pixels stay fully
/// transparent; cell pixels are copied source-replace, never alpha-blended.
/// Returns either a complete sheet or an error, never a partial one.
pub fn compose(sprites: &[SpriteDef]) -> Result<RgbaImage, SheetError> {
    if sprites.is_empty() {
        return Err(SheetError::EmptyInput);
    }

    let side = sprites[0].height();
    if side == 0 {
        return Err(SheetError::EmptySprite);
    }
    for (index, def) in sprites.iter().enumerate() {
        if def.height() != side {
            return Err(SheetError::DimensionMismatch {
                index,
                expected: side,
                rows: def.height(),
                width: def.width(),
            });
        }
        if let Some(width) = def.rows.iter().map(|row| row.chars().count()).find(|&w| w != side)
        {
            return Err(SheetError::DimensionMismatch {
                index,
                expected: side,
                rows: def.height(),
                width,
            });
        }
    }

    let grid = grid_side(sprites.len());
    let canvas_size = (grid * side) as u32;
    let mut canvas = RgbaImage::from_pixel(canvas_size, canvas_size, TRANSPARENT);

    for (i, def) in sprites.iter().enumerate() {
        let cell = render_sprite(def)?;
        let dest_x = ((i % grid) * side) as u32;
        let dest_y = ((i / grid) * side) as u32;

        for y in 0..cell.height() {
            for x in 0..cell.width() {
                canvas.put_pixel(dest_x + x, dest_y + y, *cell.get_pixel(x, y));
            }
        }
    }

    Ok(canvas)
}
