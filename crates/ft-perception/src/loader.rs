//! CSV cover-marker loader.
//!
//! The engine-side scene scan that produces the cover inventory is out of
//! scope here; its output is expected as a CSV export, one row per marker:
//!
//! ```csv
//! x,y,z,crouch
//! 10.0,0.0,-4.5,0
//! 12.5,0.0,8.0,1
//! ```
//!
//! **`crouch`** is `0` (full-height cover) or `1` (low cover).
//!
//! `CoverId`s are assigned in row order, so a marker's id is stable across
//! runs as long as the export is.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ft_core::{CoverId, Vec3};

use crate::cover::CoverNode;
use crate::error::PerceptionError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CoverRecord {
    x: f32,
    y: f32,
    z: f32,
    crouch: u8,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the static cover inventory from a CSV file.
pub fn load_cover_nodes_csv(path: &Path) -> Result<Vec<CoverNode>, PerceptionError> {
    let file = std::fs::File::open(path).map_err(PerceptionError::Io)?;
    load_cover_nodes_reader(file)
}

/// Like [`load_cover_nodes_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedding a small
/// inventory directly in a binary.
pub fn load_cover_nodes_reader<R: Read>(reader: R) -> Result<Vec<CoverNode>, PerceptionError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut nodes = Vec::new();

    for (i, result) in csv_reader.deserialize::<CoverRecord>().enumerate() {
        let row = result.map_err(|e| PerceptionError::Parse(e.to_string()))?;
        let crouch = match row.crouch {
            0 => false,
            1 => true,
            other => {
                return Err(PerceptionError::Parse(format!(
                    "invalid crouch flag {other} in row {i}: expected 0 or 1"
                )));
            }
        };
        nodes.push(CoverNode {
            id: CoverId(i as u32),
            position: Vec3::new(row.x, row.y, row.z),
            crouch,
        });
    }

    Ok(nodes)
}
