use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MOMENTUM_POINTS, DEFAULT_PHASE_POINTS, DEFAULT_WIDTH};
use crate::hamiltonian::PhysicalParameters;
use crate::interfaces::ModelVariant;

// Utility functions for building sweeps

/// `n` evenly spaced samples over `[start, stop]`, endpoints included
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = stop;
            values
        }
    }
}

/// Index of the phase sample closest to `target`, `None` for an empty sweep
pub fn closest_phase_index(phases: &[f64], target: f64) -> Option<usize> {
    phases
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - target).abs().total_cmp(&(*b - target).abs()))
        .map(|(i, _)| i)
}

/// Full description of a phase x momentum sweep.
///
/// Defaults reproduce the reference run: width 20, 61 phases over [0, 2pi],
/// 121 momenta over [-pi, pi], mu = 0.4, delta = 0.2, t = 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub width: usize,
    pub variant: ModelVariant,
    pub phase_range: (f64, f64),
    pub phase_points: usize,
    pub momentum_range: (f64, f64),
    pub momentum_points: usize,
    pub params: PhysicalParameters,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            variant: ModelVariant::default(),
            phase_range: (0.0, 2.0 * PI),
            phase_points: DEFAULT_PHASE_POINTS,
            momentum_range: (-PI, PI),
            momentum_points: DEFAULT_MOMENTUM_POINTS,
            params: PhysicalParameters::default(),
        }
    }
}

impl SweepConfig {
    pub fn phases(&self) -> Vec<f64> {
        linspace(self.phase_range.0, self.phase_range.1, self.phase_points)
    }

    pub fn momenta(&self) -> Vec<f64> {
        linspace(self.momentum_range.0, self.momentum_range.1, self.momentum_points)
    }

    /// Read a sweep from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
