use std::path::PathBuf;
use log::info;
use crate::block_position::BlockPosition;
use crate::block_source::{BlockSource, Selection};
use crate::error::{ExportError, Result};
use crate::exporter::{export, ExportRequest};
use crate::structure::StructureDocument;

pub const USAGE: &str = "/exportbo3 <name> [includeair] [tileentities] [noleavesfix]";

/// What the exporter knows about one player: their selection, the center
/// block they marked and the checks they asked for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerSession {
    pub player: String,
    pub selection: Option<Selection>,
    pub center: Option<BlockPosition>,
    pub block_checks: Vec<BlockPosition>,
}

impl PlayerSession {
    pub fn new(player: impl Into<String>) -> Self {
        PlayerSession { player: player.into(), ..PlayerSession::default() }
    }

    pub fn select(&mut self, selection: Selection) {
        self.selection = Some(selection);
    }

    pub fn mark_center(&mut self, position: BlockPosition) {
        self.center = Some(position);
    }

    /// Adds a check position, ignoring duplicates.
    pub fn add_block_check(&mut self, position: BlockPosition) {
        if !self.block_checks.contains(&position) {
            self.block_checks.push(position);
        }
    }
}

/// Flags accepted after the name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportFlags {
    pub include_air: bool,
    pub include_tile_entities: bool,
    pub no_leaves_fix: bool,
}

impl ExportFlags {
    /// Flags are case-insensitive and may be written with leading dashes.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let mut flags = ExportFlags::default();
        for arg in args {
            let arg = arg.as_ref();
            match arg.trim_start_matches('-').to_ascii_lowercase().as_str() {
                "includeair" | "include-air" | "air" => flags.include_air = true,
                "tileentities" | "tile-entities" | "includetileentities" => flags.include_tile_entities = true,
                "noleavesfix" | "no-leaves-fix" => flags.no_leaves_fix = true,
                _ => return Err(ExportError::Usage(format!("Unknown option '{}'. Usage: {}", arg, USAGE))),
            }
        }
        Ok(flags)
    }
}

/// The `exportbo3` command.
#[derive(Debug, Clone)]
pub struct ExportCommand {
    pub structures_dir: PathBuf,
    pub description: Option<String>,
}

impl ExportCommand {
    pub fn new(structures_dir: impl Into<PathBuf>) -> Self {
        ExportCommand { structures_dir: structures_dir.into(), description: None }
    }

    /// Builds the export request for `args` without running it.
    pub fn request<S: AsRef<str>>(&self, session: &PlayerSession, args: &[S]) -> Result<ExportRequest> {
        let (name, rest) = args
            .split_first()
            .ok_or_else(|| ExportError::Usage(format!("Usage: {}", USAGE)))?;
        let flags = ExportFlags::parse(rest)?;

        Ok(ExportRequest {
            name: name.as_ref().to_string(),
            author: session.player.clone(),
            description: self.description.clone(),
            selection: session.selection.clone(),
            center: session.center,
            block_checks: session.block_checks.clone(),
            include_air: flags.include_air,
            include_tile_entities: flags.include_tile_entities,
            preserve_leaf_flags: flags.no_leaves_fix,
        })
    }

    /// Runs the command and returns the exported document.
    pub fn execute<S: AsRef<str>>(
        &self,
        session: &PlayerSession,
        args: &[S],
        source: &dyn BlockSource,
    ) -> Result<StructureDocument> {
        let request = self.request(session, args)?;
        info!("{} issued exportbo3 {}", session.player, request.name);
        export(&request, source, &self.structures_dir)
    }

    /// Runs the command and turns the outcome into a message for the player.
    pub fn execute_for_player<S: AsRef<str>>(
        &self,
        session: &PlayerSession,
        args: &[S],
        source: &dyn BlockSource,
    ) -> String {
        match self.execute(session, args, source) {
            Ok(document) => success_message(&document),
            Err(e) if e.is_precondition() => e.to_string(),
            Err(e) => format!("Failed to create BO3: {}", e),
        }
    }
}

pub fn success_message(document: &StructureDocument) -> String {
    let tile_entities = document.tile_entity_count();
    let mut message = format!("Created BO3 {} with {} blocks", document.name, document.blocks[0].len());
    if tile_entities > 0 {
        message.push_str(&format!(" and {} tile entities", tile_entities));
    }
    message
}
