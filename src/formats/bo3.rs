use std::fmt::Write;
use crate::metadata::ConfigMode;
use crate::structure::StructureDocument;

const RULE: &str = "#######################################################################";

/// Renders the document as a BO3 file.
///
/// Only the unrotated blocks and checks are written; the terrain generator
/// derives the other rotations itself when loading. With
/// [`ConfigMode::WriteAll`] every setting is preceded by a comment.
pub fn to_bo3_string(document: &StructureDocument, mode: ConfigMode) -> String {
    let comments = mode == ConfigMode::WriteAll;
    let mut out = String::new();

    out.push_str("[BO3]\n");
    if comments {
        section(&mut out, &format!("{} - BO3 object", document.name));
    }

    for (key, value, comment) in document.settings.entries() {
        if comments {
            let _ = writeln!(out, "# {}", comment);
        }
        let _ = writeln!(out, "{}: {}", key, value);
        if comments {
            out.push('\n');
        }
    }

    if comments {
        section(&mut out, "Blocks");
        out.push_str("# Block(x,y,z,id[:data][,nbtfile]) places a block relative to the center.\n\n");
    } else {
        out.push('\n');
    }
    for block in &document.blocks[0] {
        let _ = writeln!(out, "{}", block);
    }

    if comments {
        section(&mut out, "BlockChecks");
        out.push_str("# BlockCheck(x,y,z,id[:data][,id[:data]...]) requires one of the blocks at the position.\n\n");
    } else {
        out.push('\n');
    }
    for check in &document.block_checks[0] {
        let _ = writeln!(out, "{}", check);
    }

    out
}

fn section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    let _ = writeln!(out, "# {}", title);
    out.push_str(RULE);
    out.push_str("\n\n");
}
