use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use log::debug;
use quartz_nbt::io::{write_nbt, Flavor};
use quartz_nbt::NbtCompound;
use crate::error::{ExportError, Result};

/// A tile entity waiting to be written to `<structure folder>/<file_name>`.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTileEntity {
    pub file_name: String,
    pub tag: NbtCompound,
}

impl PendingTileEntity {
    pub fn new(ordinal: usize, tag: NbtCompound) -> Self {
        let file_name = format!("{}-{}.nbt", ordinal, tile_entity_name(&tag));
        PendingTileEntity { file_name, tag }
    }
}

/// File system friendly name for a tile entity, taken from its `id` tag.
pub fn tile_entity_name(tag: &NbtCompound) -> String {
    match tag.get::<_, &str>("id") {
        Ok(id) => id
            .replace("minecraft:", "")
            .replace([':', '/', '\\'], "_"),
        Err(_) => "Unknown".to_string(),
    }
}

/// Writes every pending tile entity into `folder`, creating it first.
///
/// Stops at the first failure; files written before it stay on disk.
pub fn write_tile_entities(folder: &Path, pending: &[PendingTileEntity]) -> Result<()> {
    fs::create_dir_all(folder).map_err(|e| ExportError::io(folder, e))?;

    for tile_entity in pending {
        let path = folder.join(&tile_entity.file_name);
        debug!("Writing tile entity {}", path.display());

        let file = File::create(&path).map_err(|e| ExportError::io(&path, e))?;
        let mut writer = BufWriter::new(file);
        write_nbt(&mut writer, None, &tile_entity.tag, Flavor::GzCompressed)
            .map_err(|source| ExportError::Nbt { path: path.clone(), source })?;
        writer.flush().map_err(|e| ExportError::io(&path, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartz_nbt::io::read_nbt;
    use quartz_nbt::NbtTag;

    fn tag_with_id(id: &str) -> NbtCompound {
        let mut tag = NbtCompound::new();
        tag.insert("id", NbtTag::String(id.to_string()));
        tag
    }

    #[test]
    fn test_names() {
        assert_eq!(tile_entity_name(&tag_with_id("minecraft:chest")), "chest");
        assert_eq!(tile_entity_name(&tag_with_id("Chest")), "Chest");
        assert_eq!(tile_entity_name(&tag_with_id("mymod:machine")), "mymod_machine");
        assert_eq!(tile_entity_name(&NbtCompound::new()), "Unknown");

        let mut numeric_id = NbtCompound::new();
        numeric_id.insert("id", NbtTag::Int(54));
        assert_eq!(tile_entity_name(&numeric_id), "Unknown");
    }

    #[test]
    fn test_file_names() {
        assert_eq!(PendingTileEntity::new(1, tag_with_id("minecraft:chest")).file_name, "1-chest.nbt");
        assert_eq!(PendingTileEntity::new(1, NbtCompound::new()).file_name, "1-Unknown.nbt");
        assert_eq!(PendingTileEntity::new(12, tag_with_id("Sign")).file_name, "12-Sign.nbt");
    }

    #[test]
    fn test_write_tile_entities() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("house");
        let mut tag = tag_with_id("minecraft:chest");
        tag.insert("Lock", NbtTag::String("SecretKey".to_string()));

        write_tile_entities(&folder, &[PendingTileEntity::new(1, tag.clone())]).unwrap();

        let file = File::open(folder.join("1-chest.nbt")).unwrap();
        let (read_back, _) = read_nbt(&mut std::io::BufReader::new(file), Flavor::GzCompressed).unwrap();
        assert_eq!(read_back, tag);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the folder should go makes directory creation fail.
        let blocker = dir.path().join("house");
        fs::write(&blocker, b"").unwrap();

        let result = write_tile_entities(&blocker, &[PendingTileEntity::new(1, NbtCompound::new())]);
        assert!(matches!(result, Err(ExportError::Io { .. })));
    }
}
