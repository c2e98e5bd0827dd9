use log::debug;

use super::bloch_model::BlochModel;
use super::lattice::{Bond, LatticeSite, translation_vector, transverse_range};
use crate::config::DEFAULT_WIDTH;
use crate::error::Error;
use crate::interfaces::{BondDirection, ModelVariant};

/// Builder for the x-periodic junction cell
pub struct JunctionBuilder {
    width: usize,
    variant: ModelVariant,
}

impl Default for JunctionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl JunctionBuilder {
    /// Create a new JunctionBuilder
    pub fn new() -> Self {
        JunctionBuilder {
            width: DEFAULT_WIDTH,
            variant: ModelVariant::default(),
        }
    }

    /// Set the number of sites across the strip
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the per-site degrees of freedom
    pub fn with_variant(mut self, variant: ModelVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Build the finalized Bloch model
    pub fn build(self) -> Result<BlochModel, Error> {
        if self.width == 0 {
            return Err(Error::InvalidWidth(self.width));
        }

        // Site coordinates are i32, so wider cells cannot be laid out
        let width = i32::try_from(self.width).map_err(|_| Error::InvalidWidth(self.width))?;
        let range = transverse_range(width);
        if self.width % 2 == 1 {
            debug!(
                "odd width {}: cell spans y in {:?}, interface is off-centre",
                self.width, range
            );
        }

        let sites: Vec<LatticeSite> = range.map(|y| LatticeSite::new(0, y)).collect();

        // Transverse bonds stay inside the cell, longitudinal ones reach the periodic image
        let transverse_bonds = sites
            .windows(2)
            .map(|pair| Bond::forward(pair[0], BondDirection::Transverse))
            .collect();
        let longitudinal_bonds = sites
            .iter()
            .map(|site| Bond::forward(*site, BondDirection::Longitudinal))
            .collect();

        debug!(
            "built {:?} junction: {} sites, {} orbitals per site",
            self.variant,
            sites.len(),
            self.variant.orbitals_per_site()
        );

        Ok(BlochModel {
            width: self.width,
            variant: self.variant,
            sites,
            transverse_bonds,
            longitudinal_bonds,
            translation: translation_vector(),
        })
    }
}

/// Particle-hole junction of the given width, periodic along x
pub fn make_infinite_junction(width: usize) -> Result<BlochModel, Error> {
    make_infinite_junction_with(width, ModelVariant::ParticleHole)
}

/// Junction of the given width and variant, periodic along x
pub fn make_infinite_junction_with(
    width: usize,
    variant: ModelVariant,
) -> Result<BlochModel, Error> {
    JunctionBuilder::new()
        .with_width(width)
        .with_variant(variant)
        .build()
}
