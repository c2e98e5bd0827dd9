// Dispersion module: sweeps the Bloch spectrum over phase and momentum

// ======================== MODULE DECLARATIONS ========================
pub mod dispersion_solver;
pub mod dispersion_table;
pub mod sweep;

// Test modules
mod _tests_dispersion_solver;
mod _tests_sweep;

// ======================== SWEEP RESULT ========================
pub use dispersion_table::DispersionTable; // struct - phases, momenta, dispersions[phase][k][band]
// DispersionTable impl methods:
//   len(&self) -> usize                                          - number of phase rows
//   is_empty(&self) -> bool
//   num_bands(&self) -> usize                                    - bands per momentum
//   spectrum_at(&self, phase_index: usize) -> Option<&[Vec<f64>]> - E(k) at one phase
//   band(&self, phase_index: usize, band: usize) -> Option<Vec<f64>> - one band across k

// ======================== SOLVER ========================
pub use dispersion_solver::{
    compute_dispersion_vs_phase, // fn(width, phases, momenta, params, variant) -> Result<DispersionTable, Error>
    solve, // fn(model: &BlochModel, phases: &[f64], momenta: &[f64], params: &PhysicalParameters) -> Result<DispersionTable, Error>
};

// ======================== SWEEP HELPERS ========================
pub use sweep::{
    SweepConfig,         // struct - width, variant, phase/momentum grids, parameters (serde)
    closest_phase_index, // fn(phases: &[f64], target: f64) -> Option<usize>
    linspace,            // fn(start: f64, stop: f64, n: usize) -> Vec<f64>
};
// SweepConfig impl methods:
//   phases(&self) -> Vec<f64>                              - linspace over phase_range
//   momenta(&self) -> Vec<f64>                             - linspace over momentum_range
//   from_json(json: &str) -> Result<Self, serde_json::Error> - partial JSON over defaults
