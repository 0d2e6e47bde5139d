use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPosition {
    pub const ORIGIN: BlockPosition = BlockPosition { x: 0, y: 0, z: 0 };

    pub fn new(x: i32, y: i32, z: i32) -> Self {
        BlockPosition { x, y, z }
    }

    pub fn to_tuple(&self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }

    /// Turns the offset 90 degrees around the y axis: `(x, y, z) -> (z, y, -x)`.
    pub fn rotate(&self) -> Self {
        BlockPosition::new(self.z, self.y, -self.x)
    }
}

impl Add for BlockPosition {
    type Output = BlockPosition;

    fn add(self, other: BlockPosition) -> BlockPosition {
        BlockPosition::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for BlockPosition {
    type Output = BlockPosition;

    fn sub(self, other: BlockPosition) -> BlockPosition {
        BlockPosition::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl fmt::Display for BlockPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

impl FromStr for BlockPosition {
    type Err = String;

    /// Parses `x,y,z`, whitespace around the numbers is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(format!("Expected x,y,z but got '{}'", s));
        }
        let parse = |part: &str| {
            part.parse::<i32>()
                .map_err(|e| format!("Invalid coordinate '{}': {}", part, e))
        };
        Ok(BlockPosition::new(parse(parts[0])?, parse(parts[1])?, parse(parts[2])?))
    }
}
