use serde::{Deserialize, Serialize};
use crate::block_position::BlockPosition;

/// Closed box of block coordinates, both corners inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: BlockPosition,
    pub max: BlockPosition,
}

impl BoundingBox {
    /// Builds the box spanned by two arbitrary corners.
    pub fn new(a: BlockPosition, b: BlockPosition) -> Self {
        BoundingBox {
            min: BlockPosition::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: BlockPosition::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    pub fn from_position_and_size(position: BlockPosition, size: (i32, i32, i32)) -> Self {
        let far = BlockPosition::new(
            position.x + size.0 - 1,
            position.y + size.1 - 1,
            position.z + size.2 - 1,
        );
        BoundingBox::new(position, far)
    }

    pub fn contains(&self, point: BlockPosition) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
            point.y >= self.min.y && point.y <= self.max.y &&
            point.z >= self.min.z && point.z <= self.max.z
    }

    /// Width, height and length; wide enough for corners at the ends of the i32 range.
    pub fn get_dimensions(&self) -> (i64, i64, i64) {
        (
            self.max.x as i64 - self.min.x as i64 + 1,
            self.max.y as i64 - self.min.y as i64 + 1,
            self.max.z as i64 - self.min.z as i64 + 1,
        )
    }

    /// Number of positions in the box, saturating at `u64::MAX`.
    pub fn volume(&self) -> u64 {
        let (width, height, length) = self.get_dimensions();
        (width as u64)
            .checked_mul(height as u64)
            .and_then(|area| area.checked_mul(length as u64))
            .unwrap_or(u64::MAX)
    }

    /// Every position in the box, x outermost and z innermost.
    pub fn iter_positions(&self) -> impl Iterator<Item = BlockPosition> {
        let (min, max) = (self.min, self.max);
        (min.x..=max.x).flat_map(move |x| {
            (min.y..=max.y).flat_map(move |y| {
                (min.z..=max.z).map(move |z| BlockPosition::new(x, y, z))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_are_normalized() {
        let bounds = BoundingBox::new(BlockPosition::new(5, -1, 3), BlockPosition::new(2, 4, 3));
        assert_eq!(bounds.min, BlockPosition::new(2, -1, 3));
        assert_eq!(bounds.max, BlockPosition::new(5, 4, 3));
        assert_eq!(bounds.get_dimensions(), (4, 6, 1));
        assert_eq!(bounds.volume(), 24);
    }

    #[test]
    fn test_extreme_corners() {
        let bounds = BoundingBox::new(
            BlockPosition::new(i32::MIN, i32::MIN, i32::MIN),
            BlockPosition::new(i32::MAX, i32::MAX, i32::MAX),
        );
        assert_eq!(bounds.get_dimensions(), (1 << 32, 1 << 32, 1 << 32));
        assert_eq!(bounds.volume(), u64::MAX);

        let world_sized = BoundingBox::new(
            BlockPosition::new(-30_000_000, 0, -30_000_000),
            BlockPosition::new(30_000_000, 255, 30_000_000),
        );
        assert_eq!(world_sized.volume(), 60_000_001 * 256 * 60_000_001);
    }

    #[test]
    fn test_iteration_order() {
        let bounds = BoundingBox::new(BlockPosition::new(0, 0, 0), BlockPosition::new(1, 1, 1));
        let positions: Vec<_> = bounds.iter_positions().map(|p| p.to_tuple()).collect();
        assert_eq!(positions, vec![
            (0, 0, 0), (0, 0, 1), (0, 1, 0), (0, 1, 1),
            (1, 0, 0), (1, 0, 1), (1, 1, 0), (1, 1, 1),
        ]);
    }

    #[test]
    fn test_iteration_covers_volume() {
        let bounds = BoundingBox::from_position_and_size(BlockPosition::new(-3, 10, 7), (4, 2, 5));
        assert_eq!(bounds.iter_positions().count() as u64, bounds.volume());
        assert!(bounds.iter_positions().all(|p| bounds.contains(p)));
        assert!(!bounds.contains(BlockPosition::new(1, 10, 7)));
    }
}
