use log::debug;
use crate::block_position::BlockPosition;
use crate::block_source::BlockSource;
use crate::bounding_box::BoundingBox;
use crate::material_filter::filter_material;
use crate::structure::{BlockFunction, TileEntityRef};
use crate::tile_entity::PendingTileEntity;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockListOptions {
    pub include_air: bool,
    pub include_tile_entities: bool,
    pub preserve_leaf_flags: bool,
}

/// Blocks of a region, ready to become `Block(...)` lines.
#[derive(Debug, Clone, Default)]
pub struct BlockList {
    pub blocks: Vec<BlockFunction>,
    /// Tile entities still to be written, in the same order as their blocks.
    pub pending: Vec<PendingTileEntity>,
    pub has_leaves: bool,
}

/// Reads every block in `bounds` relative to `center`.
///
/// Blocks come out in iteration order: x outermost, then y, then z. Tile
/// entities are numbered from 1 in that same order and referenced as
/// `<structure_name>/<ordinal>-<type>.nbt`; nothing is written to disk here.
pub fn build_blocks(
    source: &dyn BlockSource,
    bounds: &BoundingBox,
    center: BlockPosition,
    structure_name: &str,
    options: BlockListOptions,
) -> BlockList {
    // Grows with what is found, never with the volume of the box.
    let mut list = BlockList::default();

    for position in bounds.iter_positions() {
        let filtered = filter_material(
            source.block_at(position).to_material(),
            options.preserve_leaf_flags,
        );
        list.has_leaves |= filtered.is_leaves;

        if !options.include_air && filtered.datum.material.is_air() {
            continue;
        }

        let mut block = BlockFunction::new(position - center, filtered.datum);

        if options.include_tile_entities {
            if let Some(tag) = source.tile_entity_at(position) {
                let pending = PendingTileEntity::new(list.pending.len() + 1, tag);
                debug!("Found tile entity {} at {}", pending.file_name, position);
                block.tile_entity = Some(TileEntityRef {
                    path: format!("{}/{}", structure_name, pending.file_name),
                    tag: pending.tag.clone(),
                });
                list.pending.push(pending);
            }
        }

        list.blocks.push(block);
    }

    list
}
