use std::collections::HashMap;
use quartz_nbt::NbtCompound;
use crate::block_position::BlockPosition;
use crate::block_source::{BlockSource, RawBlock};
use crate::bounding_box::BoundingBox;
use crate::material::Material;

/// A fixed-size box of legacy blocks, as stored in a `.schematic` file.
///
/// Positions are world coordinates; the box starts at `origin`. Reads outside
/// the box return air.
#[derive(Debug, Clone)]
pub struct SchematicWorld {
    pub name: String,
    pub origin: BlockPosition,
    pub size: (i32, i32, i32),
    pub(crate) blocks: Vec<u16>,
    pub(crate) data: Vec<u8>,
    pub(crate) tile_entities: HashMap<BlockPosition, NbtCompound>,
}

impl SchematicWorld {
    pub fn new(name: impl Into<String>, size: (i32, i32, i32)) -> Self {
        SchematicWorld::with_origin(name, BlockPosition::ORIGIN, size)
    }

    pub fn with_origin(name: impl Into<String>, origin: BlockPosition, size: (i32, i32, i32)) -> Self {
        let volume = size.0.max(0) as usize * size.1.max(0) as usize * size.2.max(0) as usize;
        SchematicWorld {
            name: name.into(),
            origin,
            size,
            blocks: vec![0; volume],
            data: vec![0; volume],
            tile_entities: HashMap::new(),
        }
    }

    pub fn get_bounding_box(&self) -> BoundingBox {
        BoundingBox::from_position_and_size(self.origin, self.size)
    }

    pub fn volume(&self) -> usize {
        self.blocks.len()
    }

    /// Index into the block arrays, y major, then z, then x.
    pub(crate) fn index(&self, position: BlockPosition) -> Option<usize> {
        let local = position - self.origin;
        let (width, height, length) = self.size;
        if local.x < 0 || local.y < 0 || local.z < 0
            || local.x >= width || local.y >= height || local.z >= length {
            return None;
        }
        Some(((local.y * length + local.z) * width + local.x) as usize)
    }

    /// Returns false when `position` lies outside the world.
    pub fn set_block(&mut self, position: BlockPosition, material: Material, data: u8) -> bool {
        match self.index(position) {
            Some(index) => {
                self.blocks[index] = material.id();
                self.data[index] = data & 0x0F;
                true
            }
            None => false,
        }
    }

    pub fn set_tile_entity(&mut self, position: BlockPosition, tag: NbtCompound) -> bool {
        if self.index(position).is_none() {
            return false;
        }
        self.tile_entities.insert(position, tag);
        true
    }

    pub fn tile_entity_count(&self) -> usize {
        self.tile_entities.len()
    }

    pub fn count_non_air(&self) -> usize {
        self.blocks.iter().filter(|&&id| id != Material::AIR.id()).count()
    }
}

impl BlockSource for SchematicWorld {
    fn world_name(&self) -> &str {
        &self.name
    }

    fn block_at(&self, position: BlockPosition) -> RawBlock {
        match self.index(position) {
            Some(index) => RawBlock::new(Material(self.blocks[index]), self.data[index]),
            None => RawBlock::new(Material::AIR, 0),
        }
    }

    fn tile_entity_at(&self, position: BlockPosition) -> Option<NbtCompound> {
        self.tile_entities.get(&position).cloned()
    }
}
