pub mod bo3;
pub mod schematic;
