
//! Josephson supercurrent library
//!
//! Computes the current-phase relation of a phase-biased superconducting strip from the
//! band structure of its tight-binding Bogoliubov-de Gennes Hamiltonian:
//!
//! 1. [`junction`] builds a cell of W sites across the strip, periodic along x
//! 2. [`dispersion`] diagonalizes the Bloch Hamiltonian over a phase x momentum sweep
//! 3. [`current`] sums the filled branch and differentiates it with respect to the phase

pub mod config;
pub mod current;
pub mod dispersion;
pub mod error;
pub mod hamiltonian;
pub mod interfaces;
pub mod junction;

pub use error::Error;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A convenience prelude for running a sweep end to end.
pub mod prelude {
    pub use crate::current::{CprResult, current_from_dispersion, extract};
    pub use crate::dispersion::{DispersionTable, SweepConfig, linspace, solve};
    pub use crate::hamiltonian::PhysicalParameters;
    pub use crate::interfaces::ModelVariant;
    pub use crate::junction::{BlochModel, JunctionBuilder, make_infinite_junction};
}
