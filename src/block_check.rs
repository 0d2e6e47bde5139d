use crate::block_position::BlockPosition;
use crate::block_source::BlockSource;
use crate::structure::{BlockCheck, MaterialSetEntry};

/// Builds a check for each position, requiring the block currently found there.
///
/// Data is only compared for blocks whose data survives rotation; for
/// directional blocks the data is a facing and any facing is accepted.
pub fn build_block_checks(
    source: &dyn BlockSource,
    center: BlockPosition,
    positions: &[BlockPosition],
) -> Vec<BlockCheck> {
    positions
        .iter()
        .map(|&position| {
            let material = source.block_at(position).to_material();
            let entry = MaterialSetEntry::new(material, material.is_rotation_invariant());
            BlockCheck::new(position - center, vec![entry])
        })
        .collect()
}
