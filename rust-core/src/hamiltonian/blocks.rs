//! Onsite and hopping blocks of the junction Hamiltonian.
//!
//! Every function here is pure: (site or bond direction, parameters) in, a small
//! dense block out. The onsite block carries the phase step across y = 0:
//!
//! ```text
//! H_onsite(y) = (4t - mu) Γz + Δ (cos θ(y) Γx - sin θ(y) Γy) [+ Σ h_i τ0⊗σ_i]
//! θ(y)        = -φ/2 for y < 0, +φ/2 for y >= 0
//! ```

use nalgebra::DMatrix;
use num_complex::Complex64;

use super::parameters::PhysicalParameters;
use super::pauli::{Axis, gamma, graded_spin, spin};
use crate::interfaces::{BondDirection, ModelVariant, Region};
use crate::junction::LatticeSite;

/// Pairing phase applied at transverse coordinate `y`.
pub fn local_phase(y: i32, phase: f64) -> f64 {
    match Region::of(y) {
        Region::Left => -phase / 2.0,
        Region::Right => phase / 2.0,
    }
}

/// Onsite block for `site`.
pub fn onsite_block(
    site: &LatticeSite,
    params: &PhysicalParameters,
    variant: ModelVariant,
) -> DMatrix<Complex64> {
    let theta = local_phase(site.y, params.phase);

    let normal = gamma(Axis::Z, variant) * real(4.0 * params.t - params.mu);
    let pairing = (gamma(Axis::X, variant) * real(theta.cos())
        - gamma(Axis::Y, variant) * real(theta.sin()))
        * real(params.delta);

    let mut block = normal + pairing;

    if variant == ModelVariant::Spinful {
        let [hx, hy, hz] = params.zeeman;
        block += spin(Axis::X) * real(hx) + spin(Axis::Y) * real(hy) + spin(Axis::Z) * real(hz);
    }

    block
}

/// Forward hopping block H_{to,from} for a bond along `direction`.
///
/// The reverse bond is the conjugate transpose; callers apply it.
pub fn hopping_block(
    direction: BondDirection,
    params: &PhysicalParameters,
    variant: ModelVariant,
) -> DMatrix<Complex64> {
    let mut block = gamma(Axis::Z, variant) * real(-params.t);

    if variant == ModelVariant::Spinful {
        let rashba = Complex64::new(0.0, params.alpha / 2.0);
        block += match direction {
            BondDirection::Longitudinal => graded_spin(Axis::Y) * rashba,
            BondDirection::Transverse => graded_spin(Axis::X) * -rashba,
        };
    }

    block
}

fn real(x: f64) -> Complex64 {
    Complex64::new(x, 0.0)
}
