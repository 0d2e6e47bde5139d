use std::io::Read;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use quartz_nbt::{NbtCompound, NbtList, NbtTag};
use quartz_nbt::io::Flavor;
use crate::block_position::BlockPosition;
use crate::error::{ExportError, Result};
use crate::schematic_world::SchematicWorld;

fn schematic_error(what: &str, e: impl std::fmt::Display) -> ExportError {
    ExportError::Schematic(format!("{}: {}", what, e))
}

/// Writes `world` as a gzip compressed MCEdit `.schematic`.
pub fn to_schematic(world: &SchematicWorld) -> Result<Vec<u8>> {
    let mut root = NbtCompound::new();

    let (width, height, length) = world.size;
    root.insert("Width", NbtTag::Short(width as i16));
    root.insert("Height", NbtTag::Short(height as i16));
    root.insert("Length", NbtTag::Short(length as i16));
    root.insert("Materials", NbtTag::String("Alpha".to_string()));

    root.insert("Blocks", NbtTag::ByteArray(world.blocks.iter().map(|&id| id as u8 as i8).collect()));
    root.insert("Data", NbtTag::ByteArray(world.data.iter().map(|&data| data as i8).collect()));

    // Ids above 255 keep their high nibble in AddBlocks, two blocks per byte.
    if world.blocks.iter().any(|&id| id > 255) {
        let mut add_blocks = vec![0u8; (world.blocks.len() + 1) / 2];
        for (index, &id) in world.blocks.iter().enumerate() {
            let high = ((id >> 8) & 0x0F) as u8;
            if index & 1 == 0 {
                add_blocks[index >> 1] |= high;
            } else {
                add_blocks[index >> 1] |= high << 4;
            }
        }
        root.insert("AddBlocks", NbtTag::ByteArray(add_blocks.into_iter().map(|b| b as i8).collect()));
    }

    let mut tile_entities = NbtList::new();
    let mut positions: Vec<_> = world.tile_entities.keys().copied().collect();
    positions.sort_by_key(|p| (p.y, p.z, p.x));
    for position in positions {
        let mut tag = world.tile_entities[&position].clone();
        let local = position - world.origin;
        tag.insert("x", NbtTag::Int(local.x));
        tag.insert("y", NbtTag::Int(local.y));
        tag.insert("z", NbtTag::Int(local.z));
        tile_entities.push(NbtTag::Compound(tag));
    }
    root.insert("TileEntities", NbtTag::List(tile_entities));
    root.insert("Entities", NbtTag::List(NbtList::new()));

    root.insert("WEOriginX", NbtTag::Int(world.origin.x));
    root.insert("WEOriginY", NbtTag::Int(world.origin.y));
    root.insert("WEOriginZ", NbtTag::Int(world.origin.z));

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    quartz_nbt::io::write_nbt(&mut encoder, Some("Schematic"), &root, Flavor::Uncompressed)
        .map_err(|e| schematic_error("Failed to encode schematic", e))?;
    encoder.finish().map_err(|e| schematic_error("Failed to compress schematic", e))
}

/// Reads a gzip compressed MCEdit `.schematic` into a world called `name`.
pub fn from_schematic(name: &str, data: &[u8]) -> Result<SchematicWorld> {
    let mut decoder = GzDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed)
        .map_err(|e| schematic_error("Failed to decompress schematic", e))?;

    let (root, _) = quartz_nbt::io::read_nbt(&mut std::io::Cursor::new(decompressed), Flavor::Uncompressed)
        .map_err(|e| schematic_error("Failed to parse schematic", e))?;

    let width = root.get::<_, i16>("Width").map_err(|e| schematic_error("Failed to get Width", e))? as i32;
    let height = root.get::<_, i16>("Height").map_err(|e| schematic_error("Failed to get Height", e))? as i32;
    let length = root.get::<_, i16>("Length").map_err(|e| schematic_error("Failed to get Length", e))? as i32;

    if let Ok(materials) = root.get::<_, &str>("Materials") {
        if materials != "Alpha" {
            return Err(ExportError::Schematic(format!("Unsupported block ids '{}'", materials)));
        }
    }

    let origin = BlockPosition::new(
        root.get::<_, i32>("WEOriginX").unwrap_or(0),
        root.get::<_, i32>("WEOriginY").unwrap_or(0),
        root.get::<_, i32>("WEOriginZ").unwrap_or(0),
    );
    let mut world = SchematicWorld::with_origin(name, origin, (width, height, length));

    let blocks = root.get::<_, &[i8]>("Blocks").map_err(|e| schematic_error("Failed to get Blocks", e))?;
    let block_data = root.get::<_, &[i8]>("Data").map_err(|e| schematic_error("Failed to get Data", e))?;
    if blocks.len() != world.volume() || block_data.len() != world.volume() {
        return Err(ExportError::Schematic(format!(
            "Expected {} blocks but got {} ids and {} data values",
            world.volume(), blocks.len(), block_data.len()
        )));
    }
    let add_blocks = root.get::<_, &[i8]>("AddBlocks").unwrap_or(&[]);

    for index in 0..world.volume() {
        let low = blocks[index] as u8 as u16;
        let high = match add_blocks.get(index >> 1) {
            Some(&add) if index & 1 == 0 => (add as u8 & 0x0F) as u16,
            Some(&add) => ((add as u8 & 0xF0) >> 4) as u16,
            None => 0,
        };
        world.blocks[index] = (high << 8) | low;
        world.data[index] = block_data[index] as u8 & 0x0F;
    }

    if let Ok(tile_entities) = root.get::<_, &NbtList>("TileEntities") {
        for tag in tile_entities.iter() {
            if let NbtTag::Compound(compound) = tag {
                let local = BlockPosition::new(
                    compound.get::<_, i32>("x").map_err(|e| schematic_error("Failed to get tile entity x", e))?,
                    compound.get::<_, i32>("y").map_err(|e| schematic_error("Failed to get tile entity y", e))?,
                    compound.get::<_, i32>("z").map_err(|e| schematic_error("Failed to get tile entity z", e))?,
                );
                world.set_tile_entity(world.origin + local, compound.clone());
            }
        }
    }

    Ok(world)
}
