use std::collections::BTreeMap;
use std::fmt::Write;
use serde_json::json;
use crate::material::Material;
use crate::structure::StructureDocument;

fn material_counts(document: &StructureDocument) -> BTreeMap<Material, usize> {
    let mut counts = BTreeMap::new();
    for block in &document.blocks[0] {
        *counts.entry(block.material.material).or_insert(0) += 1;
    }
    counts
}

/// Human readable summary of an exported structure.
pub fn format_structure(document: &StructureDocument) -> String {
    let mut output = String::new();
    let settings = &document.settings;

    let _ = writeln!(output, "BO3: {}", document.name);
    let _ = writeln!(output, "  File: {}", document.path.display());
    let _ = writeln!(output, "  Author: {}", settings.author);
    let _ = writeln!(output, "  Tree: {}", settings.tree);
    let _ = writeln!(output, "  Blocks: {}", document.blocks[0].len());
    let _ = writeln!(output, "  Block checks: {}", document.block_checks[0].len());
    let _ = writeln!(output, "  Tile entities: {}", document.tile_entity_count());
    let _ = writeln!(output, "  Materials:");
    for (material, count) in material_counts(document) {
        let _ = writeln!(output, "    {}: {}", material, count);
    }

    output
}

pub fn format_json_structure(document: &StructureDocument) -> serde_json::Result<String> {
    let materials: BTreeMap<String, usize> = material_counts(document)
        .into_iter()
        .map(|(material, count)| (material.to_string(), count))
        .collect();

    let summary = json!({
        "document": serde_json::to_value(document)?,
        "tile_entities": document.tile_entity_count(),
        "materials": materials,
    });
    serde_json::to_string_pretty(&summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use crate::block_position::BlockPosition;
    use crate::material::MaterialDatum;
    use crate::structure::BlockFunction;

    fn document() -> StructureDocument {
        let mut document = StructureDocument::new("hut".to_string(), PathBuf::from("objects/hut.bo3"));
        for x in 0..3 {
            document.blocks[0].push(BlockFunction::new(BlockPosition::new(x, 0, 0), MaterialDatum::new(Material::STONE, 0)));
        }
        document.blocks[0].push(BlockFunction::new(BlockPosition::new(0, 1, 0), MaterialDatum::new(Material::WOOL, 3)));
        document.rotate_blocks_and_checks();
        document
    }

    #[test]
    fn test_format_structure() {
        let text = format_structure(&document());
        assert!(text.contains("BO3: hut"));
        assert!(text.contains("Blocks: 4"));
        assert!(text.contains("    STONE: 3"));
        assert!(text.contains("    WOOL: 1"));
    }

    #[test]
    fn test_format_json_structure() {
        let value: serde_json::Value = serde_json::from_str(&format_json_structure(&document()).unwrap()).unwrap();
        assert_eq!(value["document"]["name"], "hut");
        assert_eq!(value["document"]["blocks"], json!([4, 4, 4, 4]));
        assert_eq!(value["materials"]["STONE"], 3);
        assert_eq!(value["document"]["settings"]["source_blocks"], json!(["AIR"]));
    }
}
