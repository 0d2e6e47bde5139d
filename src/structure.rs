use std::fmt;
use std::path::PathBuf;
use quartz_nbt::NbtCompound;
use serde::{Serialize, Serializer};
use crate::block_position::BlockPosition;
use crate::material::MaterialDatum;
use crate::metadata::Bo3Settings;

/// A tile entity extracted to its own file next to the BO3.
#[derive(Debug, Clone, PartialEq)]
pub struct TileEntityRef {
    /// Path of the `.nbt` file relative to the structures directory.
    pub path: String,
    pub tag: NbtCompound,
}

/// One `Block(...)` line: a block placed at an offset from the center.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockFunction {
    pub offset: BlockPosition,
    pub material: MaterialDatum,
    pub tile_entity: Option<TileEntityRef>,
}

impl BlockFunction {
    pub fn new(offset: BlockPosition, material: MaterialDatum) -> Self {
        BlockFunction { offset, material, tile_entity: None }
    }

    pub fn rotate(&self) -> Self {
        BlockFunction {
            offset: self.offset.rotate(),
            material: self.material.rotate(),
            tile_entity: self.tile_entity.clone(),
        }
    }
}

impl fmt::Display for BlockFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block({},{}", self.offset, self.material)?;
        if let Some(tile_entity) = &self.tile_entity {
            write!(f, ",{}", tile_entity.path)?;
        }
        f.write_str(")")
    }
}

/// One accepted block of a check, with or without its data.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MaterialSetEntry {
    pub material: MaterialDatum,
    pub check_data: bool,
}

impl MaterialSetEntry {
    pub fn new(material: MaterialDatum, check_data: bool) -> Self {
        MaterialSetEntry { material, check_data }
    }

    pub fn rotate(&self) -> Self {
        MaterialSetEntry::new(self.material.rotate(), self.check_data)
    }
}

impl fmt::Display for MaterialSetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.check_data {
            write!(f, "{}", self.material)
        } else {
            write!(f, "{}", self.material.material)
        }
    }
}

/// One `BlockCheck(...)` line: the block at the offset must match one of the entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockCheck {
    pub offset: BlockPosition,
    pub to_check: Vec<MaterialSetEntry>,
}

impl BlockCheck {
    pub fn new(offset: BlockPosition, to_check: Vec<MaterialSetEntry>) -> Self {
        BlockCheck { offset, to_check }
    }

    pub fn rotate(&self) -> Self {
        BlockCheck {
            offset: self.offset.rotate(),
            to_check: self.to_check.iter().map(MaterialSetEntry::rotate).collect(),
        }
    }
}

impl fmt::Display for BlockCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.to_check
            .iter()
            .map(|entry| entry.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "BlockCheck({},{})", self.offset, entries)
    }
}

/// An exported structure: settings plus blocks and checks for each of the
/// four rotations, index `i` being turned `i * 90` degrees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureDocument {
    pub name: String,
    pub settings: Bo3Settings,
    #[serde(serialize_with = "serialize_counts")]
    pub blocks: [Vec<BlockFunction>; 4],
    #[serde(serialize_with = "serialize_counts")]
    pub block_checks: [Vec<BlockCheck>; 4],
    pub path: PathBuf,
}

fn serialize_counts<T, S>(lists: &[Vec<T>; 4], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let counts: Vec<usize> = lists.iter().map(Vec::len).collect();
    counts.serialize(serializer)
}

impl StructureDocument {
    pub fn new(name: String, path: PathBuf) -> Self {
        StructureDocument {
            name,
            settings: Bo3Settings::default(),
            blocks: Default::default(),
            block_checks: Default::default(),
            path,
        }
    }

    /// Fills rotations 1 to 3 from rotation 0.
    pub fn rotate_blocks_and_checks(&mut self) {
        for i in 1..4 {
            self.blocks[i] = self.blocks[i - 1].iter().map(BlockFunction::rotate).collect();
            self.block_checks[i] = self.block_checks[i - 1].iter().map(BlockCheck::rotate).collect();
        }
    }

    pub fn tile_entity_count(&self) -> usize {
        self.blocks[0].iter().filter(|block| block.tile_entity.is_some()).count()
    }
}
