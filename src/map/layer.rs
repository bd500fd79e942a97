use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::Tile;

/// One editable attribute of a tile.
///
/// Values are carried as `u16`; passability uses 0 = passable, 1 = impassable
/// to match the file format and copied selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Layer {
    #[default]
    Tile,
    Pass,
    Object,
}

bitflags! {
    /// Set of layers, e.g. which selections are active for paste.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LayerMask: u8 {
        const TILE = 0b001;
        const PASS = 0b010;
        const OBJECT = 0b100;
    }
}

impl Layer {
    /// Paste order: tiles, then passability, then objects
    pub fn all() -> &'static [Layer] {
        &[Layer::Tile, Layer::Pass, Layer::Object]
    }

    pub fn mask(&self) -> LayerMask {
        match self {
            Layer::Tile => LayerMask::TILE,
            Layer::Pass => LayerMask::PASS,
            Layer::Object => LayerMask::OBJECT,
        }
    }

    pub fn read(&self, tile: Tile) -> u16 {
        match self {
            Layer::Tile => tile.visual_id,
            Layer::Pass => u16::from(!tile.passable),
            Layer::Object => tile.object_id,
        }
    }

    /// `tile` with this layer's attribute replaced by `value`.
    pub fn write(&self, tile: Tile, value: u16) -> Tile {
        match self {
            Layer::Tile => tile.with_visual(value),
            Layer::Pass => tile.with_passable(value == 0),
            Layer::Object => tile.with_object(value),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Layer::Tile => "Tiles",
            Layer::Pass => "Passability",
            Layer::Object => "Objects",
        }
    }
}

impl LayerMask {
    /// Layers in the mask, in paste order.
    pub fn layers(self) -> impl Iterator<Item = Layer> {
        Layer::all()
            .iter()
            .copied()
            .filter(move |layer| self.contains(layer.mask()))
    }
}
