// Definitions that are used throughout all modules

use serde::{Deserialize, Serialize};

// Which degrees of freedom each lattice site carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelVariant {
    /// Particle-hole only (2 orbitals per site)
    #[default]
    ParticleHole,
    /// Particle-hole times spin, with Rashba and Zeeman terms (4 orbitals per site)
    Spinful,
}

impl ModelVariant {
    pub fn orbitals_per_site(&self) -> usize {
        match self {
            ModelVariant::ParticleHole => 2,
            ModelVariant::Spinful => 4,
        }
    }
}

// Side of the phase step a site lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// y < 0, pairing phase -phi/2
    Left,
    /// y >= 0, pairing phase +phi/2
    Right,
}

impl Region {
    /// The interface is the sign of the integer transverse coordinate.
    pub fn of(y: i32) -> Self {
        if y < 0 { Region::Left } else { Region::Right }
    }
}

// Lattice direction of a nearest-neighbour bond
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondDirection {
    /// Along x, the translation-invariant axis
    Longitudinal,
    /// Along y, across the strip
    Transverse,
}

impl BondDirection {
    pub fn unit_vector(&self) -> (i32, i32) {
        match self {
            BondDirection::Longitudinal => (1, 0),
            BondDirection::Transverse => (0, 1),
        }
    }
}
