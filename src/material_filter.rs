use crate::material::MaterialDatum;

/// Result of running one block through [`filter_material`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FilteredMaterial {
    pub datum: MaterialDatum,
    pub is_leaves: bool,
}

/// Prepares a block for placement by the terrain generator.
///
/// Leaves are reported through `is_leaves` so the caller can flag the whole
/// structure as a tree. Unless `preserve_leaf_flags` is set, the two low data
/// bits of leaves are cleared so generated leaves start out in their default
/// decay state.
pub fn filter_material(datum: MaterialDatum, preserve_leaf_flags: bool) -> FilteredMaterial {
    if !datum.material.is_leaves() {
        return FilteredMaterial { datum, is_leaves: false };
    }

    let datum = if preserve_leaf_flags {
        datum
    } else {
        datum.with_data(datum.data & !0b11)
    };
    FilteredMaterial { datum, is_leaves: true }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;

    #[test]
    fn test_leaf_flags_cleared() {
        for data in 0..16u8 {
            let filtered = filter_material(MaterialDatum::new(Material::LEAVES, data), false);
            assert!(filtered.is_leaves);
            assert_eq!(filtered.datum.data, data & 0b1100);
        }
        let filtered = filter_material(MaterialDatum::new(Material::LEAVES, 5), false);
        assert_eq!(filtered.datum.data, 4);
    }

    #[test]
    fn test_leaf_flags_preserved() {
        for data in 0..16u8 {
            let datum = MaterialDatum::new(Material::LEAVES_2, data);
            let filtered = filter_material(datum, true);
            assert!(filtered.is_leaves);
            assert_eq!(filtered.datum, datum);
        }
    }

    #[test]
    fn test_other_blocks_pass_through() {
        let datum = MaterialDatum::new(Material::WOOD_STAIRS, 3);
        assert_eq!(filter_material(datum, false), FilteredMaterial { datum, is_leaves: false });
    }
}
