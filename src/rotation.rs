//! Legacy block data rotation.
//!
//! Turns the data of directional blocks by 90 degrees in the same sense as
//! [`BlockPosition::rotate`](crate::block_position::BlockPosition::rotate):
//! east becomes north, north becomes west, west becomes south and south becomes east.

use crate::material::Material;

/// Returns `data` for `material` turned by 90 degrees. Data of blocks that
/// have no facing is returned unchanged.
pub fn rotate_data(material: Material, data: u8) -> u8 {
    match material {
        Material::TORCH | Material::REDSTONE_TORCH_OFF | Material::REDSTONE_TORCH_ON => {
            rotate_attached(data)
        }
        Material::STONE_BUTTON | Material::WOOD_BUTTON => {
            (data & 0x8) | rotate_attached(data & 0x7)
        }
        Material::LEVER => (data & 0x8) | rotate_lever(data & 0x7),
        Material::WOOD_STAIRS
        | Material::COBBLESTONE_STAIRS
        | Material::BRICK_STAIRS
        | Material::SMOOTH_STAIRS
        | Material::NETHER_BRICK_STAIRS
        | Material::SANDSTONE_STAIRS
        | Material::SPRUCE_WOOD_STAIRS
        | Material::BIRCH_WOOD_STAIRS
        | Material::JUNGLE_WOOD_STAIRS
        | Material::QUARTZ_STAIRS
        | Material::ACACIA_STAIRS
        | Material::DARK_OAK_STAIRS => (data & 0xC) | rotate_stairs(data & 0x3),
        Material::LADDER
        | Material::WALL_SIGN
        | Material::FURNACE
        | Material::BURNING_FURNACE
        | Material::CHEST
        | Material::ENDER_CHEST
        | Material::TRAPPED_CHEST
        | Material::DISPENSER
        | Material::DROPPER
        | Material::HOPPER
        | Material::SKULL
        | Material::PISTON_BASE
        | Material::PISTON_STICKY_BASE
        | Material::PISTON_EXTENSION => (data & 0x8) | rotate_facing(data & 0x7),
        Material::SIGN_POST => (data + 12) % 16,
        Material::WOODEN_DOOR | Material::IRON_DOOR_BLOCK => {
            // Only the lower half stores a facing, the upper half stores the hinge.
            if data & 0x8 == 0 {
                (data & 0xC) | rotate_quarter(data & 0x3)
            } else {
                data
            }
        }
        Material::PUMPKIN
        | Material::JACK_O_LANTERN
        | Material::BED_BLOCK
        | Material::FENCE_GATE
        | Material::DIODE_BLOCK_OFF
        | Material::DIODE_BLOCK_ON
        | Material::REDSTONE_COMPARATOR_OFF
        | Material::REDSTONE_COMPARATOR_ON
        | Material::COCOA
        | Material::TRIPWIRE_HOOK
        | Material::ANVIL
        | Material::ENDER_PORTAL_FRAME => (data & 0xC) | rotate_quarter(data & 0x3),
        Material::TRAP_DOOR | Material::IRON_TRAPDOOR => {
            (data & 0xC) | rotate_trapdoor(data & 0x3)
        }
        Material::RAILS => rotate_rail(data),
        Material::POWERED_RAIL | Material::DETECTOR_RAIL | Material::ACTIVATOR_RAIL => {
            (data & 0x8) | rotate_straight_rail(data & 0x7)
        }
        Material::LOG | Material::LOG_2 | Material::HAY_BLOCK => rotate_axis(data),
        Material::QUARTZ_BLOCK => match data {
            3 => 4,
            4 => 3,
            other => other,
        },
        Material::VINE => (data >> 1) | ((data & 0x1) << 3),
        Material::HUGE_MUSHROOM_1 | Material::HUGE_MUSHROOM_2 => rotate_mushroom(data),
        _ => data,
    }
}

// 1 east, 2 west, 3 south, 4 north
fn rotate_attached(data: u8) -> u8 {
    match data {
        1 => 4,
        4 => 2,
        2 => 3,
        3 => 1,
        other => other,
    }
}

// Wall positions like torches, 5/6 on the ground and 7/0 on the ceiling per axis.
fn rotate_lever(data: u8) -> u8 {
    match data {
        5 => 6,
        6 => 5,
        7 => 0,
        0 => 7,
        other => rotate_attached(other),
    }
}

// 0 east, 1 west, 2 south, 3 north
fn rotate_stairs(data: u8) -> u8 {
    match data {
        0 => 3,
        3 => 1,
        1 => 2,
        _ => 0,
    }
}

// 2 north, 3 south, 4 west, 5 east
fn rotate_facing(data: u8) -> u8 {
    match data {
        5 => 2,
        2 => 4,
        4 => 3,
        3 => 5,
        other => other,
    }
}

fn rotate_quarter(data: u8) -> u8 {
    (data + 3) % 4
}

// 0 south, 1 north, 2 east, 3 west
fn rotate_trapdoor(data: u8) -> u8 {
    match data {
        2 => 1,
        1 => 3,
        3 => 0,
        _ => 2,
    }
}

// 0/1 flat per axis, 2-5 ascending east, west, north, south
fn rotate_straight_rail(data: u8) -> u8 {
    match data {
        0 => 1,
        1 => 0,
        2 => 4,
        4 => 3,
        3 => 5,
        5 => 2,
        other => other,
    }
}

// Curves: 6 south-east, 7 south-west, 8 north-west, 9 north-east
fn rotate_rail(data: u8) -> u8 {
    match data {
        6 => 9,
        9 => 8,
        8 => 7,
        7 => 6,
        other => rotate_straight_rail(other),
    }
}

fn rotate_axis(data: u8) -> u8 {
    match data & 0xC {
        0x4 => (data & 0x3) | 0x8,
        0x8 => (data & 0x3) | 0x4,
        _ => data,
    }
}

// Cap pieces laid out as a 3x3 grid, 1 north-west through 9 south-east.
fn rotate_mushroom(data: u8) -> u8 {
    match data {
        1 => 7,
        7 => 9,
        9 => 3,
        3 => 1,
        2 => 4,
        4 => 8,
        8 => 6,
        6 => 2,
        other => other,
    }
}
