use serde::{Deserialize, Serialize};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Base graphic; 0 means no graphic
    pub visual_id: u16,
    pub passable: bool,
    /// Overlay object; 0 means no object
    pub object_id: u16,
}

impl Tile {
    /// What an unset cell reads as.
    pub const DEFAULT: Tile = Tile {
        visual_id: 0,
        passable: true,
        object_id: 0,
    };

    pub const fn new(visual_id: u16, passable: bool, object_id: u16) -> Self {
        Self {
            visual_id,
            passable,
            object_id,
        }
    }

    pub fn with_visual(self, visual_id: u16) -> Self {
        Self { visual_id, ..self }
    }

    pub fn with_passable(self, passable: bool) -> Self {
        Self { passable, ..self }
    }

    pub fn with_object(self, object_id: u16) -> Self {
        Self { object_id, ..self }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Grid coordinate of a cell (column, row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct TilePos {
    pub x: u32,
    pub y: u32,
}

impl TilePos {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Position shifted by a non-negative offset, `None` on overflow.
    pub fn offset(self, dx: u32, dy: u32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl From<(u32, u32)> for TilePos {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}
