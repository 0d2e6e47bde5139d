use std::fmt;
use serde::{Deserialize, Serialize};
use crate::material::{Material, MaterialDatum};

/// How the terrain generator treats the settings file when it loads it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigMode {
    WriteAll,
    WriteWithoutComments,
    WriteDisable,
}

impl fmt::Display for ConfigMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigMode::WriteAll => "WriteAll",
            ConfigMode::WriteWithoutComments => "WriteWithoutComments",
            ConfigMode::WriteDisable => "WriteDisable",
        };
        f.write_str(name)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnHeight {
    RandomY,
    HighestBlock,
    HighestSolidBlock,
}

impl fmt::Display for SpawnHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpawnHeight::RandomY => "randomY",
            SpawnHeight::HighestBlock => "highestBlock",
            SpawnHeight::HighestSolidBlock => "highestSolidBlock",
        };
        f.write_str(name)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutsideSourceBlock {
    DontPlace,
    PlaceAnyway,
}

impl fmt::Display for OutsideSourceBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutsideSourceBlock::DontPlace => "dontPlace",
            OutsideSourceBlock::PlaceAnyway => "placeAnyway",
        };
        f.write_str(name)
    }
}

/// Header settings of a BO3 file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Bo3Settings {
    pub author: String,
    pub description: String,
    pub version: i32,
    pub settings_mode: ConfigMode,
    pub tree: bool,
    pub frequency: i32,
    pub rarity: f64,
    pub rotate_randomly: bool,
    pub spawn_height: SpawnHeight,
    pub min_height: i32,
    pub max_height: i32,
    pub max_branch_depth: i32,
    pub excluded_biomes: Vec<String>,
    pub source_blocks: Vec<MaterialDatum>,
    pub max_percentage_outside_source_block: i32,
    pub outside_source_block: OutsideSourceBlock,
}

impl Default for Bo3Settings {
    fn default() -> Self {
        Bo3Settings {
            author: "Unknown".to_string(),
            description: "No description given".to_string(),
            version: 3,
            settings_mode: ConfigMode::WriteAll,
            tree: false,
            frequency: 1,
            rarity: 100.0,
            rotate_randomly: false,
            spawn_height: SpawnHeight::HighestBlock,
            min_height: 0,
            max_height: 256,
            max_branch_depth: 10,
            excluded_biomes: vec!["All".to_string()],
            source_blocks: vec![MaterialDatum::new(Material::AIR, 0)],
            max_percentage_outside_source_block: 100,
            outside_source_block: OutsideSourceBlock::PlaceAnyway,
        }
    }
}

impl Bo3Settings {
    /// `(key, value, comment)` for every setting, in file order.
    pub fn entries(&self) -> Vec<(&'static str, String, &'static str)> {
        let source_blocks = self.source_blocks
            .iter()
            .map(|datum| datum.to_string())
            .collect::<Vec<_>>()
            .join(",");

        vec![
            ("Author", self.author.clone(), "The creator of this object"),
            ("Description", self.description.clone(), "A short description of this object"),
            ("Version", self.version.to_string(), "Version of the object format, leave this alone"),
            ("SettingsMode", self.settings_mode.to_string(),
             "WriteAll rewrites this file with comments on load, WriteWithoutComments drops them, WriteDisable leaves the file alone"),
            ("Tree", self.tree.to_string(), "Whether saplings may grow into this object"),
            ("Frequency", self.frequency.to_string(), "Spawn attempts per chunk"),
            ("Rarity", format!("{:?}", self.rarity), "Chance for each spawn attempt, from 0.0 to 100.0"),
            ("RotateRandomly", self.rotate_randomly.to_string(), "Place the object in a random rotation"),
            ("SpawnHeight", self.spawn_height.to_string(), "randomY, highestBlock or highestSolidBlock"),
            ("MinHeight", self.min_height.to_string(), "Lowest y the object is placed at"),
            ("MaxHeight", self.max_height.to_string(), "Highest y the object is placed at"),
            ("MaxBranchDepth", self.max_branch_depth.to_string(), "How deep branches of branches may go"),
            ("ExcludedBiomes", self.excluded_biomes.join(","), "Biomes the object never spawns in when placed through a custom structure"),
            ("SourceBlocks", source_blocks, "Blocks the object may replace"),
            ("MaxPercentageOutsideSourceBlock", self.max_percentage_outside_source_block.to_string(),
             "Cancel placement when more than this percentage of blocks is outside the source blocks"),
            ("OutsideSourceBlock", self.outside_source_block.to_string(), "dontPlace or placeAnyway for blocks outside the source blocks"),
        ]
    }
}
