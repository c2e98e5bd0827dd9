// Current module: ground-state energy, phase derivative, and scaling to physical current

// ======================== MODULE DECLARATIONS ========================
pub mod current_extractor;
pub mod gradient;

mod _tests_gradient;

// ======================== CURRENT-PHASE RELATION ========================
pub use current_extractor::{
    CprResult,               // struct - currents, one per phase
    current_from_dispersion, // fn(phases: &[f64], dispersions: &[Vec<Vec<f64>>]) -> Result<CprResult, Error>
    extract,                 // fn(table: &DispersionTable) -> Result<CprResult, Error>
    ground_state_energies,   // fn(phases, dispersions) -> Result<Vec<f64>, Error> - one energy per phase
    ground_state_energy,     // fn(row: &[Vec<f64>]) -> Result<f64, Error> - filled-branch sum per momentum
    phase_derivative,        // fn(phases, dispersions) -> Result<Vec<f64>, Error> - dE/dphi, unscaled
};
// CprResult impl methods:
//   len / is_empty / as_slice
//   critical_current(&self) -> f64 - max |I|

// ======================== NUMERICAL DERIVATIVE ========================
pub use gradient::gradient; // fn(values: &[f64], coords: &[f64]) -> Result<Vec<f64>, Error>
