//! Binary encoding of the `.map` and `.cmp` formats.
//!
//! Both formats are little-endian: `u16` width, `u16` height, then one
//! 6-byte record per cell in row-major order (visual id, passability with
//! 0 = passable, object id). A `.cmp` file starts with the ASCII magic
//! `CMAP` and deflates every record after the dimensions.

use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use flate2::read::{DeflateDecoder, ZlibDecoder};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use tracing::{debug, warn};

use crate::map::grid::Grid;
use crate::map::{Map, Tile};

use super::error::{FormatError, Result};

/// Magic prefix of the compressed format
pub const CMAP_MAGIC: &[u8; 4] = b"CMAP";

const DIMENSIONS_LEN: u64 = 4;
const RECORD_LEN: u64 = 6;
/// Upper bound on records reserved before any have been read
const INITIAL_RECORD_CAPACITY: u64 = 1 << 16;

/// On-disk layout, chosen by the caller from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapFormat {
    Raw,
    Compressed,
}

impl MapFormat {
    /// `.cmp` (any case) selects the compressed layout, everything else is raw.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("cmp") => MapFormat::Compressed,
            _ => MapFormat::Raw,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            MapFormat::Raw => "map",
            MapFormat::Compressed => "cmp",
        }
    }
}

/// Reader that counts consumed bytes so truncation can be reported precisely.
struct RecordReader<R> {
    inner: R,
    consumed: u64,
    expected: u64,
}

impl<R: Read> RecordReader<R> {
    fn new(inner: R, consumed: u64, expected: u64) -> Self {
        Self {
            inner,
            consumed,
            expected,
        }
    }

    fn read_u16(&mut self) -> Result<u16> {
        let mut buf = [0u8; 2];
        match self.inner.read_exact(&mut buf) {
            Ok(()) => {
                self.consumed += 2;
                Ok(u16::from_le_bytes(buf))
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(FormatError::Truncated {
                expected: self.expected,
                actual: self.consumed,
            }),
            Err(e) => Err(FormatError::Io(e)),
        }
    }

    fn read_tile(&mut self) -> Result<Tile> {
        let visual_id = self.read_u16()?;
        let passability = self.read_u16()?;
        let object_id = self.read_u16()?;
        Ok(Tile::new(visual_id, passability == 0, object_id))
    }
}

/// Whether `bytes` open with a valid zlib header (deflate method, check bits).
fn has_zlib_header(bytes: &[u8]) -> bool {
    match bytes {
        [cmf, flg, ..] => cmf & 0x0f == 8 && (u16::from(*cmf) << 8 | u16::from(*flg)) % 31 == 0,
        _ => false,
    }
}

/// Decode a map. The result is locked and unmodified; nothing is returned
/// unless every declared cell was read.
pub fn decode(name: impl Into<String>, bytes: &[u8], format: MapFormat) -> Result<Map> {
    let mut rest = bytes;
    let mut header_len = 0u64;

    if format == MapFormat::Compressed {
        let found = &bytes[..bytes.len().min(CMAP_MAGIC.len())];
        if found != CMAP_MAGIC {
            return Err(FormatError::BadHeader {
                found: found.to_vec(),
            });
        }
        rest = &bytes[CMAP_MAGIC.len()..];
        header_len = CMAP_MAGIC.len() as u64;
    }

    let mut dimensions = RecordReader::new(rest, header_len, header_len + DIMENSIONS_LEN);
    let width = dimensions.read_u16()?;
    let height = dimensions.read_u16()?;
    let rest = &rest[DIMENSIONS_LEN as usize..];

    let cell_count = u64::from(width) * u64::from(height);
    let expected = header_len + DIMENSIONS_LEN + cell_count * RECORD_LEN;
    let consumed = header_len + DIMENSIONS_LEN;

    // Raw lengths are known up front, so a short file fails before any allocation
    if format == MapFormat::Raw && (rest.len() as u64) < cell_count * RECORD_LEN {
        return Err(FormatError::Truncated {
            expected,
            actual: consumed + rest.len() as u64,
        });
    }

    let records: Box<dyn Read + '_> = match format {
        MapFormat::Raw => Box::new(rest),
        MapFormat::Compressed if has_zlib_header(rest) => Box::new(ZlibDecoder::new(rest)),
        MapFormat::Compressed => {
            debug!("cmp payload has no zlib header, reading raw deflate");
            Box::new(DeflateDecoder::new(rest))
        }
    };
    let mut reader = RecordReader::new(records, consumed, expected);

    // Inflated size is unknown until the stream ends; grow with what was read
    let mut tiles = Vec::with_capacity(cell_count.min(INITIAL_RECORD_CAPACITY) as usize);
    for _ in 0..cell_count {
        tiles.push(reader.read_tile()?);
    }
    let cells = Grid::from_row_major(u32::from(width), u32::from(height), tiles);

    if format == MapFormat::Raw && rest.len() as u64 > cell_count * RECORD_LEN {
        warn!(
            trailing = rest.len() as u64 - cell_count * RECORD_LEN,
            "Ignoring trailing bytes after map data"
        );
    }

    debug!(width, height, ?format, "Decoded map");
    Ok(Map::from_grid(name, cells))
}

/// Encode a map with its current dimensions, row by row.
pub fn encode(map: &Map, format: MapFormat) -> Result<Vec<u8>> {
    let (width, height) = map.size();
    let (Ok(width16), Ok(height16)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(FormatError::DimensionsTooLarge { width, height });
    };

    let mut records =
        Vec::with_capacity(width as usize * height as usize * RECORD_LEN as usize);
    for (_, tile) in map.tiles() {
        records.extend_from_slice(&tile.visual_id.to_le_bytes());
        records.extend_from_slice(&u16::from(!tile.passable).to_le_bytes());
        records.extend_from_slice(&tile.object_id.to_le_bytes());
    }

    let mut out = Vec::with_capacity(records.len() + 8);
    if format == MapFormat::Compressed {
        out.extend_from_slice(CMAP_MAGIC);
    }
    out.extend_from_slice(&width16.to_le_bytes());
    out.extend_from_slice(&height16.to_le_bytes());

    match format {
        MapFormat::Raw => out.extend_from_slice(&records),
        MapFormat::Compressed => {
            let mut encoder = ZlibEncoder::new(out, Compression::default());
            encoder.write_all(&records)?;
            out = encoder.finish()?;
        }
    }

    debug!(width, height, ?format, bytes = out.len(), "Encoded map");
    Ok(out)
}
