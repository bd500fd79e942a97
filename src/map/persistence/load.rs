//! Reading maps from disk.

use std::path::Path;

use tracing::info;

use crate::map::Map;

use super::codec::{decode, MapFormat};
use super::error::Result;

/// Map name derived from a file path (its stem).
pub fn map_name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("Unknown")
        .to_string()
}

/// Load a `.map` or `.cmp` file. The format follows the extension and the
/// map is named after the file stem. Loaded maps start locked.
pub fn load_map(path: &Path) -> Result<Map> {
    let bytes = std::fs::read(path)?;
    let map = decode(map_name_from_path(path), &bytes, MapFormat::from_path(path))?;
    info!(
        "Map loaded from {:?} ({}x{})",
        path,
        map.width(),
        map.height()
    );
    Ok(map)
}
