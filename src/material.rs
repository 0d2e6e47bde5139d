use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::rotation;

/// Names of the legacy block ids, indexed by id.
const MATERIAL_NAMES: [&str; 176] = [
    "AIR", "STONE", "GRASS", "DIRT", "COBBLESTONE", "WOOD", "SAPLING", "BEDROCK",
    "WATER", "STATIONARY_WATER", "LAVA", "STATIONARY_LAVA", "SAND", "GRAVEL", "GOLD_ORE", "IRON_ORE",
    "COAL_ORE", "LOG", "LEAVES", "SPONGE", "GLASS", "LAPIS_ORE", "LAPIS_BLOCK", "DISPENSER",
    "SANDSTONE", "NOTE_BLOCK", "BED_BLOCK", "POWERED_RAIL", "DETECTOR_RAIL", "PISTON_STICKY_BASE", "WEB", "LONG_GRASS",
    "DEAD_BUSH", "PISTON_BASE", "PISTON_EXTENSION", "WOOL", "PISTON_MOVING_PIECE", "YELLOW_FLOWER", "RED_ROSE", "BROWN_MUSHROOM",
    "RED_MUSHROOM", "GOLD_BLOCK", "IRON_BLOCK", "DOUBLE_STEP", "STEP", "BRICK", "TNT", "BOOKSHELF",
    "MOSSY_COBBLESTONE", "OBSIDIAN", "TORCH", "FIRE", "MOB_SPAWNER", "WOOD_STAIRS", "CHEST", "REDSTONE_WIRE",
    "DIAMOND_ORE", "DIAMOND_BLOCK", "WORKBENCH", "CROPS", "SOIL", "FURNACE", "BURNING_FURNACE", "SIGN_POST",
    "WOODEN_DOOR", "LADDER", "RAILS", "COBBLESTONE_STAIRS", "WALL_SIGN", "LEVER", "STONE_PLATE", "IRON_DOOR_BLOCK",
    "WOOD_PLATE", "REDSTONE_ORE", "GLOWING_REDSTONE_ORE", "REDSTONE_TORCH_OFF", "REDSTONE_TORCH_ON", "STONE_BUTTON", "SNOW", "ICE",
    "SNOW_BLOCK", "CACTUS", "CLAY", "SUGAR_CANE_BLOCK", "JUKEBOX", "FENCE", "PUMPKIN", "NETHERRACK",
    "SOUL_SAND", "GLOWSTONE", "PORTAL", "JACK_O_LANTERN", "CAKE_BLOCK", "DIODE_BLOCK_OFF", "DIODE_BLOCK_ON", "STAINED_GLASS",
    "TRAP_DOOR", "MONSTER_EGGS", "SMOOTH_BRICK", "HUGE_MUSHROOM_1", "HUGE_MUSHROOM_2", "IRON_FENCE", "THIN_GLASS", "MELON_BLOCK",
    "PUMPKIN_STEM", "MELON_STEM", "VINE", "FENCE_GATE", "BRICK_STAIRS", "SMOOTH_STAIRS", "MYCEL", "WATER_LILY",
    "NETHER_BRICK", "NETHER_FENCE", "NETHER_BRICK_STAIRS", "NETHER_WARTS", "ENCHANTMENT_TABLE", "BREWING_STAND", "CAULDRON", "ENDER_PORTAL",
    "ENDER_PORTAL_FRAME", "ENDER_STONE", "DRAGON_EGG", "REDSTONE_LAMP_OFF", "REDSTONE_LAMP_ON", "WOOD_DOUBLE_STEP", "WOOD_STEP", "COCOA",
    "SANDSTONE_STAIRS", "EMERALD_ORE", "ENDER_CHEST", "TRIPWIRE_HOOK", "TRIPWIRE", "EMERALD_BLOCK", "SPRUCE_WOOD_STAIRS", "BIRCH_WOOD_STAIRS",
    "JUNGLE_WOOD_STAIRS", "COMMAND", "BEACON", "COBBLE_WALL", "FLOWER_POT", "CARROT", "POTATO", "WOOD_BUTTON",
    "SKULL", "ANVIL", "TRAPPED_CHEST", "GOLD_PLATE", "IRON_PLATE", "REDSTONE_COMPARATOR_OFF", "REDSTONE_COMPARATOR_ON", "DAYLIGHT_DETECTOR",
    "REDSTONE_BLOCK", "QUARTZ_ORE", "HOPPER", "QUARTZ_BLOCK", "QUARTZ_STAIRS", "ACTIVATOR_RAIL", "DROPPER", "STAINED_CLAY",
    "STAINED_GLASS_PANE", "LEAVES_2", "LOG_2", "ACACIA_STAIRS", "DARK_OAK_STAIRS", "SLIME_BLOCK", "BARRIER", "IRON_TRAPDOOR",
    "PRISMARINE", "SEA_LANTERN", "HAY_BLOCK", "CARPET", "HARD_CLAY", "COAL_BLOCK", "PACKED_ICE", "DOUBLE_PLANT",
];

/// A legacy block type, identified by its numeric id.
///
/// Ids without a known name are kept as-is and render as their number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Material(pub u16);

impl Material {
    pub const AIR: Material = Material(0);
    pub const STONE: Material = Material(1);
    pub const GRASS: Material = Material(2);
    pub const DIRT: Material = Material(3);
    pub const WOOD: Material = Material(5);
    pub const DISPENSER: Material = Material(23);
    pub const LOG: Material = Material(17);
    pub const LEAVES: Material = Material(18);
    pub const BED_BLOCK: Material = Material(26);
    pub const POWERED_RAIL: Material = Material(27);
    pub const DETECTOR_RAIL: Material = Material(28);
    pub const PISTON_STICKY_BASE: Material = Material(29);
    pub const PISTON_BASE: Material = Material(33);
    pub const PISTON_EXTENSION: Material = Material(34);
    pub const WOOL: Material = Material(35);
    pub const TORCH: Material = Material(50);
    pub const WOOD_STAIRS: Material = Material(53);
    pub const CHEST: Material = Material(54);
    pub const FURNACE: Material = Material(61);
    pub const BURNING_FURNACE: Material = Material(62);
    pub const SIGN_POST: Material = Material(63);
    pub const WOODEN_DOOR: Material = Material(64);
    pub const LADDER: Material = Material(65);
    pub const RAILS: Material = Material(66);
    pub const COBBLESTONE_STAIRS: Material = Material(67);
    pub const WALL_SIGN: Material = Material(68);
    pub const LEVER: Material = Material(69);
    pub const IRON_DOOR_BLOCK: Material = Material(71);
    pub const REDSTONE_TORCH_OFF: Material = Material(75);
    pub const REDSTONE_TORCH_ON: Material = Material(76);
    pub const STONE_BUTTON: Material = Material(77);
    pub const PUMPKIN: Material = Material(86);
    pub const JACK_O_LANTERN: Material = Material(91);
    pub const DIODE_BLOCK_OFF: Material = Material(93);
    pub const DIODE_BLOCK_ON: Material = Material(94);
    pub const TRAP_DOOR: Material = Material(96);
    pub const HUGE_MUSHROOM_1: Material = Material(99);
    pub const HUGE_MUSHROOM_2: Material = Material(100);
    pub const VINE: Material = Material(106);
    pub const FENCE_GATE: Material = Material(107);
    pub const BRICK_STAIRS: Material = Material(108);
    pub const SMOOTH_STAIRS: Material = Material(109);
    pub const NETHER_BRICK_STAIRS: Material = Material(114);
    pub const ENDER_PORTAL_FRAME: Material = Material(120);
    pub const COCOA: Material = Material(127);
    pub const SANDSTONE_STAIRS: Material = Material(128);
    pub const ENDER_CHEST: Material = Material(130);
    pub const TRIPWIRE_HOOK: Material = Material(131);
    pub const SPRUCE_WOOD_STAIRS: Material = Material(134);
    pub const BIRCH_WOOD_STAIRS: Material = Material(135);
    pub const JUNGLE_WOOD_STAIRS: Material = Material(136);
    pub const WOOD_BUTTON: Material = Material(143);
    pub const SKULL: Material = Material(144);
    pub const ANVIL: Material = Material(145);
    pub const TRAPPED_CHEST: Material = Material(146);
    pub const REDSTONE_COMPARATOR_OFF: Material = Material(149);
    pub const REDSTONE_COMPARATOR_ON: Material = Material(150);
    pub const HOPPER: Material = Material(154);
    pub const QUARTZ_BLOCK: Material = Material(155);
    pub const QUARTZ_STAIRS: Material = Material(156);
    pub const ACTIVATOR_RAIL: Material = Material(157);
    pub const DROPPER: Material = Material(158);
    pub const LEAVES_2: Material = Material(161);
    pub const LOG_2: Material = Material(162);
    pub const ACACIA_STAIRS: Material = Material(163);
    pub const DARK_OAK_STAIRS: Material = Material(164);
    pub const IRON_TRAPDOOR: Material = Material(167);
    pub const HAY_BLOCK: Material = Material(170);

    pub fn id(&self) -> u16 {
        self.0
    }

    pub fn name(&self) -> Option<&'static str> {
        MATERIAL_NAMES.get(self.0 as usize).copied()
    }

    /// Looks a material up by name or numeric id.
    ///
    /// Names are matched case-insensitively and may carry a `minecraft:` prefix.
    pub fn from_name(name: &str) -> Option<Material> {
        let name = name.trim();
        let name = name.strip_prefix("minecraft:").unwrap_or(name);
        if let Ok(id) = name.parse::<u16>() {
            return Some(Material(id));
        }
        MATERIAL_NAMES
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(name))
            .map(|id| Material(id as u16))
    }

    pub fn is_air(&self) -> bool {
        *self == Material::AIR
    }

    pub fn is_leaves(&self) -> bool {
        *self == Material::LEAVES || *self == Material::LEAVES_2
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// A block type together with its 4-bit auxiliary data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MaterialDatum {
    pub material: Material,
    pub data: u8,
}

impl MaterialDatum {
    pub fn new(material: Material, data: u8) -> Self {
        MaterialDatum { material, data: data & 0x0F }
    }

    pub fn with_data(&self, data: u8) -> Self {
        MaterialDatum::new(self.material, data)
    }

    /// The same block turned 90 degrees, see [`rotation::rotate_data`].
    pub fn rotate(&self) -> Self {
        self.with_data(rotation::rotate_data(self.material, self.data))
    }

    /// Whether turning the block leaves its data untouched, meaning the data
    /// describes a sub-type instead of a facing.
    pub fn is_rotation_invariant(&self) -> bool {
        self.rotate() == *self
    }
}

impl fmt::Display for MaterialDatum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data == 0 {
            write!(f, "{}", self.material)
        } else {
            write!(f, "{}:{}", self.material, self.data)
        }
    }
}

impl FromStr for MaterialDatum {
    type Err = String;

    /// Parses `NAME`, `NAME:data`, `id` or `id:data`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix("minecraft:").unwrap_or(s);
        let (name, data) = match s.rsplit_once(':') {
            Some((name, data)) => {
                let data = data.parse::<u8>()
                    .map_err(|e| format!("Invalid block data in '{}': {}", s, e))?;
                if data > 15 {
                    return Err(format!("Block data out of range in '{}'", s));
                }
                (name, data)
            }
            None => (s, 0),
        };
        let material = Material::from_name(name)
            .ok_or_else(|| format!("Unknown material '{}'", name))?;
        Ok(MaterialDatum::new(material, data))
    }
}

impl Serialize for MaterialDatum {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MaterialDatum {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_table_matches_constants() {
        assert_eq!(Material::AIR.name(), Some("AIR"));
        assert_eq!(Material::LEAVES.name(), Some("LEAVES"));
        assert_eq!(Material::CHEST.name(), Some("CHEST"));
        assert_eq!(Material::SIGN_POST.name(), Some("SIGN_POST"));
        assert_eq!(Material::HOPPER.name(), Some("HOPPER"));
        assert_eq!(Material::LEAVES_2.name(), Some("LEAVES_2"));
        assert_eq!(Material::HAY_BLOCK.name(), Some("HAY_BLOCK"));
        assert_eq!(Material(175).name(), Some("DOUBLE_PLANT"));
        assert_eq!(Material(176).name(), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Material::from_name("stone"), Some(Material::STONE));
        assert_eq!(Material::from_name("minecraft:CHEST"), Some(Material::CHEST));
        assert_eq!(Material::from_name("200"), Some(Material(200)));
        assert_eq!(Material::from_name("not_a_block"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(MaterialDatum::new(Material::STONE, 0).to_string(), "STONE");
        assert_eq!(MaterialDatum::new(Material::WOOL, 14).to_string(), "WOOL:14");
        assert_eq!(MaterialDatum::new(Material(300), 2).to_string(), "300:2");
    }

    #[test]
    fn test_data_is_masked_to_nibble() {
        assert_eq!(MaterialDatum::new(Material::WOOL, 0x1E).data, 14);
    }

    #[test]
    fn test_parse() {
        assert_eq!("WOOL:14".parse::<MaterialDatum>(), Ok(MaterialDatum::new(Material::WOOL, 14)));
        assert_eq!("minecraft:dirt".parse::<MaterialDatum>(), Ok(MaterialDatum::new(Material::DIRT, 0)));
        assert!("WOOL:16".parse::<MaterialDatum>().is_err());
        assert!("nope".parse::<MaterialDatum>().is_err());
    }

    #[test]
    fn test_rotation_invariance() {
        assert!(MaterialDatum::new(Material::WOOL, 14).is_rotation_invariant());
        assert!(MaterialDatum::new(Material::STONE, 0).is_rotation_invariant());
        assert!(!MaterialDatum::new(Material::WOOD_STAIRS, 0).is_rotation_invariant());
        assert!(!MaterialDatum::new(Material::TORCH, 1).is_rotation_invariant());
    }
}
