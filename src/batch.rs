//! Parallel sheet generation across output keys.
//!
//! Each key's sheet is an independent pure computation over its own sprite
//! list, so keys are distributed over a scoped-thread worker pool pulling
//! from a shared work index. One key's failure never blocks the others.

use crate::models::{SpriteDef, SpriteMap};
use crate::output::{save_png, scale_image, sheet_output_path, OutputError};
use crate::spritesheet::{compose, SheetError};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use thiserror::Error;

/// Error when generating the sheet for one key.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Sheet(#[from] SheetError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Outcome of one key's generation: the written path, or why it failed.
#[derive(Debug)]
pub struct KeyResult {
    pub key: String,
    pub result: Result<PathBuf, GenerateError>,
}

/// Number of workers when `--jobs` is not given.
pub fn default_jobs() -> usize {
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

/// Compose, scale, and write one sheet.
fn generate_sheet(sprites: &[SpriteDef], path: &Path, scale: u8) -> Result<(), GenerateError> {
    let sheet = compose(sprites)?;
    let sheet = scale_image(sheet, scale);
    save_png(&sheet, path)?;
    Ok(())
}

/// Generate every sheet in the map, one PNG per key, under `out_dir`.
///
/// Keys are processed by up to `jobs` workers; results come back in key order
/// regardless of completion order. Every key runs to a result even when other
/// keys fail, so callers can report all failures at once.
pub fn generate_all(sheets: &SpriteMap, out_dir: &Path, scale: u8, jobs: usize) -> Vec<KeyResult> {
    let entries: Vec<(&String, &Vec<SpriteDef>)> = sheets.iter().collect();
    if entries.is_empty() {
        return Vec::new();
    }

    let jobs = jobs.clamp(1, entries.len());
    let results: Mutex<Vec<(usize, KeyResult)>> = Mutex::new(Vec::with_capacity(entries.len()));
    let next_idx = AtomicUsize::new(0);

    std::thread::scope(|s| {
        for _ in 0..jobs {
            s.spawn(|| loop {
                let idx = next_idx.fetch_add(1, Ordering::SeqCst);
                if idx >= entries.len() {
                    break;
                }

                let (key, sprites) = entries[idx];
                let path = sheet_output_path(out_dir, key);
                let result = generate_sheet(sprites, &path, scale).map(|()| path);
                results.lock().unwrap().push((idx, KeyResult { key: key.clone(), result }));
            });
        }
    });

    let mut results = results.into_inner().unwrap();
    results.sort_by_key(|(idx, _)| *idx);
    results.into_iter().map(|(_, key_result)| key_result).collect()
}
