mod block_position;
mod bounding_box;
mod material;
mod rotation;
mod error;
mod block_source;
mod material_filter;
mod metadata;
mod structure;
mod tile_entity;
mod block_list;
mod block_check;
mod schematic_world;
mod formats;
mod exporter;
mod config;
mod command;
mod print_utils;

// Public re-exports
pub use block_position::BlockPosition;
pub use bounding_box::BoundingBox;
pub use material::{Material, MaterialDatum};
pub use rotation::rotate_data;
pub use error::{ExportError, Result};
pub use block_source::{BlockSource, RawBlock, Selection};
pub use material_filter::{filter_material, FilteredMaterial};
pub use metadata::{Bo3Settings, ConfigMode, OutsideSourceBlock, SpawnHeight};
pub use structure::{BlockCheck, BlockFunction, MaterialSetEntry, StructureDocument, TileEntityRef};
pub use tile_entity::{tile_entity_name, write_tile_entities, PendingTileEntity};
pub use block_list::{build_blocks, BlockList, BlockListOptions};
pub use block_check::build_block_checks;
pub use schematic_world::SchematicWorld;
pub use formats::{bo3, schematic};
pub use exporter::{export, is_valid_name, ExportRequest};
pub use config::Config;
pub use command::{success_message, ExportCommand, ExportFlags, PlayerSession, USAGE};
pub use print_utils::{format_json_structure, format_structure};
