//! Current-phase relation from a dispersion sweep.
//!
//! The zero-temperature ground-state energy per phase is the sum of all negative
//! quasiparticle energies, averaged over the sampled momenta. Its phase derivative,
//! scaled by 2e/hbar, is the supercurrent.

use log::debug;
use serde::{Deserialize, Serialize};

use super::gradient::gradient;
use crate::config::CURRENT_SCALE;
use crate::dispersion::DispersionTable;
use crate::error::Error;

/// Supercurrent at each phase of the sweep, index-aligned with the phases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CprResult {
    pub currents: Vec<f64>,
}

impl CprResult {
    pub fn len(&self) -> usize {
        self.currents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currents.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.currents
    }

    /// Largest |I| over the sweep
    pub fn critical_current(&self) -> f64 {
        self.currents.iter().fold(0.0_f64, |acc, i| acc.max(i.abs()))
    }
}

/// Sum of negative energies over all momenta and bands, divided by the number of momenta.
pub fn ground_state_energy(row: &[Vec<f64>]) -> Result<f64, Error> {
    if row.is_empty() {
        return Err(Error::DegenerateInput(
            "dispersion row has no momentum samples".into(),
        ));
    }
    let filled: f64 = row
        .iter()
        .flat_map(|energies| energies.iter())
        .filter(|e| **e < 0.0)
        .sum();
    Ok(filled / row.len() as f64)
}

fn check_lengths(phases: &[f64], dispersions: &[Vec<Vec<f64>>]) -> Result<(), Error> {
    if phases.len() != dispersions.len() {
        return Err(Error::ShapeMismatch {
            left: "phases",
            left_len: phases.len(),
            right: "dispersions",
            right_len: dispersions.len(),
        });
    }
    if phases.is_empty() {
        return Err(Error::DegenerateInput("phase sweep is empty".into()));
    }
    Ok(())
}

/// Ground-state energy at every phase.
pub fn ground_state_energies(
    phases: &[f64],
    dispersions: &[Vec<Vec<f64>>],
) -> Result<Vec<f64>, Error> {
    check_lengths(phases, dispersions)?;
    dispersions
        .iter()
        .map(|row| ground_state_energy(row))
        .collect()
}

/// dE/dphi in energy units per radian, without the 2e/hbar factor.
pub fn phase_derivative(phases: &[f64], dispersions: &[Vec<Vec<f64>>]) -> Result<Vec<f64>, Error> {
    let energies = ground_state_energies(phases, dispersions)?;
    gradient(&energies, phases)
}

/// Supercurrent I(phi) = (2e/hbar) dE/dphi.
pub fn current_from_dispersion(
    phases: &[f64],
    dispersions: &[Vec<Vec<f64>>],
) -> Result<CprResult, Error> {
    let derivative = phase_derivative(phases, dispersions)?;
    let currents: Vec<f64> = derivative.iter().map(|d| CURRENT_SCALE * d).collect();
    debug!("extracted current at {} phases", currents.len());
    Ok(CprResult { currents })
}

/// Supercurrent for a whole dispersion table.
pub fn extract(table: &DispersionTable) -> Result<CprResult, Error> {
    current_from_dispersion(&table.phases, &table.dispersions)
}
