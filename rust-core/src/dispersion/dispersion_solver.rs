//! Phase x momentum sweep of the Bloch spectrum.
//!
//! Each (phase, k) pair is an independent dense Hermitian eigenproblem. With the
//! `parallel` feature the double loop runs on rayon; indexed collection keeps the
//! table in sweep order regardless of completion order.

use log::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::dispersion_table::DispersionTable;
use crate::error::Error;
use crate::hamiltonian::PhysicalParameters;
use crate::interfaces::ModelVariant;
use crate::junction::{BlochModel, make_infinite_junction_with};

/// Dispersion of `model` for every phase in `phases` and momentum in `momenta`.
pub fn solve(
    model: &BlochModel,
    phases: &[f64],
    momenta: &[f64],
    params: &PhysicalParameters,
) -> Result<DispersionTable, Error> {
    if phases.is_empty() {
        return Err(Error::DegenerateInput("phase sweep is empty".into()));
    }
    if momenta.is_empty() {
        return Err(Error::DegenerateInput("momentum sweep is empty".into()));
    }
    if model.variant() == ModelVariant::ParticleHole && params.has_spin_terms() {
        warn!("Rashba/Zeeman parameters are set but the particle-hole model ignores them");
    }

    info!(
        "Sweeping {} phases x {} momenta ({} bands, width {})",
        phases.len(),
        momenta.len(),
        model.num_bands(),
        model.width()
    );

    let dispersions = sweep_phases(model, phases, momenta, params)?;

    Ok(DispersionTable {
        phases: phases.to_vec(),
        momenta: momenta.to_vec(),
        dispersions,
    })
}

#[cfg(feature = "parallel")]
fn sweep_phases(
    model: &BlochModel,
    phases: &[f64],
    momenta: &[f64],
    params: &PhysicalParameters,
) -> Result<Vec<Vec<Vec<f64>>>, Error> {
    phases
        .par_iter()
        .enumerate()
        .map(|(i, &phase)| {
            let run_params = params.with_phase(phase);
            let row = momenta
                .par_iter()
                .map(|&k| model.evaluate(k, &run_params))
                .collect::<Result<Vec<_>, _>>();
            debug!("phase {}/{} (phi = {:.4}) done", i + 1, phases.len(), phase);
            row
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn sweep_phases(
    model: &BlochModel,
    phases: &[f64],
    momenta: &[f64],
    params: &PhysicalParameters,
) -> Result<Vec<Vec<Vec<f64>>>, Error> {
    phases
        .iter()
        .enumerate()
        .map(|(i, &phase)| {
            let run_params = params.with_phase(phase);
            let row = momenta
                .iter()
                .map(|&k| model.evaluate(k, &run_params))
                .collect::<Result<Vec<_>, _>>();
            debug!("phase {}/{} (phi = {:.4}) done", i + 1, phases.len(), phase);
            row
        })
        .collect()
}

/// Build a junction of `width` and sweep its dispersion over phase and momentum.
pub fn compute_dispersion_vs_phase(
    width: usize,
    phases: &[f64],
    momenta: &[f64],
    params: &PhysicalParameters,
    variant: ModelVariant,
) -> Result<DispersionTable, Error> {
    let model = make_infinite_junction_with(width, variant)?;
    solve(&model, phases, momenta, params)
}
