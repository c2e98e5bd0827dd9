use serde::{Deserialize, Serialize};

/// Dispersion E(k) for every phase of a sweep.
///
/// `dispersions[i][j]` holds the ascending band energies at `phases[i]`, `momenta[j]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispersionTable {
    pub phases: Vec<f64>,
    pub momenta: Vec<f64>,
    pub dispersions: Vec<Vec<Vec<f64>>>,
}

impl DispersionTable {
    /// Number of phase rows
    pub fn len(&self) -> usize {
        self.dispersions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dispersions.is_empty()
    }

    /// Bands per momentum, 0 for an empty table
    pub fn num_bands(&self) -> usize {
        self.dispersions
            .first()
            .and_then(|row| row.first())
            .map_or(0, Vec::len)
    }

    /// Momentum-resolved spectrum at a phase index
    pub fn spectrum_at(&self, phase_index: usize) -> Option<&[Vec<f64>]> {
        self.dispersions.get(phase_index).map(Vec::as_slice)
    }

    /// Band `band` across all momenta at a phase index
    pub fn band(&self, phase_index: usize, band: usize) -> Option<Vec<f64>> {
        let row = self.dispersions.get(phase_index)?;
        row.iter().map(|energies| energies.get(band).copied()).collect()
    }
}
