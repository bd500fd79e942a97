//! Writing maps to disk.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::map::Map;

use super::codec::{encode, MapFormat};
use super::error::Result;
use super::load::map_name_from_path;

/// Sibling path the new contents are staged in before replacing `path`.
pub(crate) fn staging_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("map");
    path.with_file_name(format!(".{}.tmp", file_name))
}

/// Write `bytes` next to `path` and rename over it, so a failed write never
/// clobbers the previous file.
fn write_replacing(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let staging = staging_path(path);
    let result = File::create(&staging)
        .and_then(|mut file| {
            file.write_all(bytes)?;
            file.sync_all()
        })
        .and_then(|()| std::fs::rename(&staging, path));

    if result.is_err()
        && staging.is_file()
        && let Err(e) = std::fs::remove_file(&staging)
    {
        warn!("Failed to remove staging file {:?}: {}", staging, e);
    }
    result
}

/// Save `map` to `path` in the format its extension selects. On success the
/// map takes the file's stem as its name and is no longer modified.
pub fn save_map(map: &mut Map, path: &Path) -> Result<()> {
    let bytes = encode(map, MapFormat::from_path(path))?;
    if let Err(e) = write_replacing(path, &bytes) {
        error!("Failed to write map to {:?}: {}", path, e);
        return Err(e.into());
    }

    map.name = map_name_from_path(path);
    map.set_modified(false);
    info!("Map saved to {:?}", path);
    Ok(())
}
