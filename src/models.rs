//! Input data model: sprite definitions keyed by output sheet name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single sprite variant: rows of color symbols, top to bottom.
///
/// Deserializes directly from a JSON array of strings. Rows are sequences of
/// Unicode scalar values; widths and column positions count chars, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpriteDef {
    pub rows: Vec<String>,
}

impl SpriteDef {
    pub fn new<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { rows: rows.into_iter().map(Into::into).collect() }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Widest row, in chars.
    pub fn width(&self) -> usize {
        self.rows.iter().map(|row| row.chars().count()).max().unwrap_or(0)
    }

    /// True when the sprite is exactly `side` rows of `side` chars each.
    pub fn is_square(&self, side: usize) -> bool {
        self.height() == side && self.rows.iter().all(|row| row.chars().count() == side)
    }
}

/// All sheets in one input: output key -> ordered sprite variants.
///
/// `BTreeMap` keeps key iteration deterministic across runs.
pub type SpriteMap = BTreeMap<String, Vec<SpriteDef>>;
