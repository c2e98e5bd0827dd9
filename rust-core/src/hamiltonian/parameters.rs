use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_DELTA, DEFAULT_HOPPING, DEFAULT_MU};

/// Physical parameters of the BdG strip.
///
/// Everything except `phase` stays fixed across a phase sweep; the solver
/// substitutes the phase through [`PhysicalParameters::with_phase`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalParameters {
    /// Chemical potential
    pub mu: f64,
    /// Pairing amplitude
    pub delta: f64,
    /// Nearest-neighbour hopping
    pub t: f64,
    /// Rashba spin-orbit strength (spinful model only)
    pub alpha: f64,
    /// Zeeman field (h_x, h_y, h_z) (spinful model only)
    pub zeeman: [f64; 3],
    /// Superconducting phase difference across y = 0
    pub phase: f64,
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self {
            mu: DEFAULT_MU,
            delta: DEFAULT_DELTA,
            t: DEFAULT_HOPPING,
            alpha: 0.0,
            zeeman: [0.0; 3],
            phase: 0.0,
        }
    }
}

impl PhysicalParameters {
    pub fn new(mu: f64, delta: f64, t: f64) -> Self {
        Self {
            mu,
            delta,
            t,
            ..Self::default()
        }
    }

    pub fn with_rashba(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_zeeman(mut self, hx: f64, hy: f64, hz: f64) -> Self {
        self.zeeman = [hx, hy, hz];
        self
    }

    /// Copy of these parameters at a different phase.
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// True when any term that needs the spin degree of freedom is non-zero.
    pub fn has_spin_terms(&self) -> bool {
        self.alpha != 0.0 || self.zeeman.iter().any(|h| *h != 0.0)
    }
}
