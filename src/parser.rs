//! JSON input loading.

use crate::models::SpriteMap;
use std::io::Read;
use thiserror::Error;

/// Error when the input is not a valid sheet description.
#[derive(Debug, Error)]
#[error("invalid input JSON: {0}")]
pub struct ParseError(#[from] serde_json::Error);

/// Parse the key -> sprite list mapping from a JSON reader.
pub fn parse_input<R: Read>(reader: R) -> Result<SpriteMap, ParseError> {
    Ok(serde_json::from_reader(reader)?)
}
