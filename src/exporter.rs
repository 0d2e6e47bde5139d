use std::fs;
use std::path::Path;
use log::info;
use crate::block_check::build_block_checks;
use crate::block_list::{build_blocks, BlockListOptions};
use crate::block_position::BlockPosition;
use crate::block_source::{BlockSource, Selection};
use crate::error::{ExportError, Result};
use crate::formats::bo3::to_bo3_string;
use crate::metadata::ConfigMode;
use crate::structure::StructureDocument;
use crate::tile_entity::write_tile_entities;

/// Everything needed for one export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub name: String,
    pub author: String,
    pub description: Option<String>,
    pub selection: Option<Selection>,
    pub center: Option<BlockPosition>,
    /// Positions that must still hold their current block when the structure is placed.
    pub block_checks: Vec<BlockPosition>,
    pub include_air: bool,
    pub include_tile_entities: bool,
    pub preserve_leaf_flags: bool,
}

impl ExportRequest {
    pub fn new(name: impl Into<String>) -> Self {
        ExportRequest {
            name: name.into(),
            author: "Unknown".to_string(),
            description: None,
            selection: None,
            center: None,
            block_checks: Vec::new(),
            include_air: false,
            include_tile_entities: false,
            preserve_leaf_flags: false,
        }
    }
}

pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', ':', '\0'])
}

/// Exports the selected region to `<structures_dir>/<name>.bo3`, with tile
/// entities in `<structures_dir>/<name>/`.
///
/// An existing BO3 of the same name is overwritten. The returned document is
/// already on disk.
pub fn export(
    request: &ExportRequest,
    source: &dyn BlockSource,
    structures_dir: &Path,
) -> Result<StructureDocument> {
    let selection = request.selection.as_ref().ok_or(ExportError::MissingSelection)?;
    let center = request.center.ok_or(ExportError::MissingCenter)?;
    if !is_valid_name(&request.name) {
        return Err(ExportError::InvalidName(request.name.clone()));
    }
    if selection.world != source.world_name() {
        return Err(ExportError::WorldMismatch {
            expected: selection.world.clone(),
            actual: source.world_name().to_string(),
        });
    }

    let _span = tracing::info_span!("export", name = %request.name).entered();
    info!(
        "Exporting {} from {} ({} to {}, center {})",
        request.name, selection.world, selection.minimum_point(), selection.maximum_point(), center
    );

    let bo3_path = structures_dir.join(format!("{}.bo3", request.name));
    let mut document = StructureDocument::new(request.name.clone(), bo3_path);

    let options = BlockListOptions {
        include_air: request.include_air,
        include_tile_entities: request.include_tile_entities,
        preserve_leaf_flags: request.preserve_leaf_flags,
    };
    let block_list = build_blocks(source, &selection.bounds, center, &request.name, options);
    document.blocks[0] = block_list.blocks;
    document.block_checks[0] = build_block_checks(source, center, &request.block_checks);
    document.rotate_blocks_and_checks();

    document.settings.tree = block_list.has_leaves;
    document.settings.author = request.author.clone();
    if let Some(description) = &request.description {
        document.settings.description = description.clone();
    }
    // The generator must not rewrite the file on each load.
    document.settings.settings_mode = ConfigMode::WriteDisable;

    if request.include_tile_entities {
        write_tile_entities(&structures_dir.join(&request.name), &block_list.pending)?;
    }

    fs::create_dir_all(structures_dir).map_err(|e| ExportError::io(structures_dir, e))?;
    fs::write(&document.path, to_bo3_string(&document, ConfigMode::WriteAll))
        .map_err(|e| ExportError::io(&document.path, e))?;

    info!(
        "Wrote {} with {} blocks, {} checks and {} tile entities",
        document.path.display(),
        document.blocks[0].len(),
        document.block_checks[0].len(),
        block_list.pending.len()
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Material, MaterialDatum};
    use crate::schematic_world::SchematicWorld;

    fn request_for(world: &SchematicWorld) -> ExportRequest {
        let bounds = world.get_bounding_box();
        ExportRequest {
            selection: Some(Selection::new(world.name.clone(), bounds.min, bounds.max)),
            center: Some(BlockPosition::ORIGIN),
            ..ExportRequest::new("test")
        }
    }

    #[test]
    fn test_missing_selection_and_center() {
        let dir = tempfile::tempdir().unwrap();
        let world = SchematicWorld::new("world", (1, 1, 1));

        let request = ExportRequest { selection: None, ..request_for(&world) };
        let error = export(&request, &world, dir.path()).unwrap_err();
        assert!(matches!(error, ExportError::MissingSelection));
        assert!(error.is_precondition());

        let request = ExportRequest { center: None, ..request_for(&world) };
        assert!(matches!(export(&request, &world, dir.path()), Err(ExportError::MissingCenter)));

        // nothing was written
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_invalid_name() {
        let dir = tempfile::tempdir().unwrap();
        let world = SchematicWorld::new("world", (1, 1, 1));
        for name in ["", "..", "a/b", "a\\b"] {
            let request = ExportRequest { name: name.to_string(), ..request_for(&world) };
            assert!(matches!(export(&request, &world, dir.path()), Err(ExportError::InvalidName(_))));
        }
    }

    #[test]
    fn test_world_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let world = SchematicWorld::new("world", (1, 1, 1));
        let mut request = request_for(&world);
        request.selection.as_mut().unwrap().world = "nether".to_string();

        assert!(matches!(export(&request, &world, dir.path()), Err(ExportError::WorldMismatch { .. })));
    }

    #[test]
    fn test_leaves_make_a_tree() {
        let dir = tempfile::tempdir().unwrap();
        let mut world = SchematicWorld::new("world", (1, 1, 1));
        world.set_block(BlockPosition::ORIGIN, Material::LEAVES, 5);

        let document = export(&request_for(&world), &world, dir.path()).unwrap();

        assert_eq!(document.blocks[0].len(), 1);
        assert_eq!(document.blocks[0][0].material, MaterialDatum::new(Material::LEAVES, 4));
        assert!(document.settings.tree);
        assert_eq!(document.settings.settings_mode, ConfigMode::WriteDisable);
        assert_eq!(document.path, dir.path().join("test.bo3"));

        let text = fs::read_to_string(dir.path().join("test.bo3")).unwrap();
        assert!(text.contains("Tree: true"));
        assert!(text.contains("Block(0,0,0,LEAVES:4)"));
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("test.bo3"), "old contents").unwrap();
        let mut world = SchematicWorld::new("world", (1, 1, 1));
        world.set_block(BlockPosition::ORIGIN, Material::STONE, 0);

        export(&request_for(&world), &world, dir.path()).unwrap();

        let text = fs::read_to_string(dir.path().join("test.bo3")).unwrap();
        assert!(!text.contains("old contents"));
        assert!(text.contains("Block(0,0,0,STONE)"));
    }

    #[test]
    fn test_tile_entity_folder_only_with_option() {
        let dir = tempfile::tempdir().unwrap();
        let world = SchematicWorld::new("world", (1, 1, 1));

        export(&request_for(&world), &world, dir.path()).unwrap();
        assert!(!dir.path().join("test").exists());

        let request = ExportRequest { include_tile_entities: true, ..request_for(&world) };
        export(&request, &world, dir.path()).unwrap();
        assert!(dir.path().join("test").is_dir());
    }
}
