use std::ops::Range;

use nalgebra::Vector2;

use crate::interfaces::{BondDirection, Region};

/// A site of the square lattice, tagged by integer coordinates.
///
/// Inside the unit cell `x` is always 0; the strip is periodic along x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticeSite {
    pub x: i32,
    pub y: i32,
}

impl LatticeSite {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn region(&self) -> Region {
        Region::of(self.y)
    }

    /// Neighbour one step along `direction`.
    pub fn shifted(&self, direction: BondDirection) -> Self {
        let (dx, dy) = direction.unit_vector();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Directed nearest-neighbour bond `to <- from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub to: LatticeSite,
    pub from: LatticeSite,
    pub direction: BondDirection,
}

impl Bond {
    pub fn forward(from: LatticeSite, direction: BondDirection) -> Self {
        Self {
            to: from.shifted(direction),
            from,
            direction,
        }
    }
}

/// Transverse coordinates of a cell of `width` sites.
///
/// Uses floor division so the range is `floor(-W/2) .. floor(W/2)`. For odd
/// widths the extra site lands on the y < 0 side and the interface is off-centre.
/// Callers convert the width with `i32::try_from` first; see `JunctionBuilder::build`.
pub fn transverse_range(width: i32) -> Range<i32> {
    (-width).div_euclid(2)..width.div_euclid(2)
}

/// Translation vector of the strip, in lattice units.
pub fn translation_vector() -> Vector2<i32> {
    let (dx, dy) = BondDirection::Longitudinal.unit_vector();
    Vector2::new(dx, dy)
}
