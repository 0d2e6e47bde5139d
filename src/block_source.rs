use quartz_nbt::NbtCompound;
use serde::{Deserialize, Serialize};
use crate::block_position::BlockPosition;
use crate::bounding_box::BoundingBox;
use crate::material::{Material, MaterialDatum};

/// A block as a world reports it, before canonicalization.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RawBlock {
    pub material: Material,
    pub data: u8,
}

impl RawBlock {
    pub fn new(material: Material, data: u8) -> Self {
        RawBlock { material, data }
    }

    /// Canonical form: the data is cut down to its 4 meaningful bits.
    pub fn to_material(&self) -> MaterialDatum {
        MaterialDatum::new(self.material, self.data)
    }
}

/// Read access to the blocks of one world.
pub trait BlockSource {
    fn world_name(&self) -> &str;

    fn block_at(&self, position: BlockPosition) -> RawBlock;

    /// Tile entity data stored at `position`, if any.
    fn tile_entity_at(&self, _position: BlockPosition) -> Option<NbtCompound> {
        None
    }
}

/// A region picked by a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub world: String,
    pub bounds: BoundingBox,
}

impl Selection {
    pub fn new(world: impl Into<String>, a: BlockPosition, b: BlockPosition) -> Self {
        Selection {
            world: world.into(),
            bounds: BoundingBox::new(a, b),
        }
    }

    pub fn minimum_point(&self) -> BlockPosition {
        self.bounds.min
    }

    pub fn maximum_point(&self) -> BlockPosition {
        self.bounds.max
    }
}
