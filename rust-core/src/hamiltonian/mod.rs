// Hamiltonian module: Pauli generators, physical parameters and the onsite/hopping blocks
// of the phase-biased BdG strip

// ======================== MODULE DECLARATIONS ========================
pub mod blocks;
pub mod parameters;
pub mod pauli;


// ======================== PARAMETERS ========================
pub use parameters::PhysicalParameters; // struct - mu, delta, t, alpha, zeeman, phase
// PhysicalParameters impl methods:
//   new(mu: f64, delta: f64, t: f64) -> Self          - spinless parameter set, zero phase
//   with_rashba(self, alpha: f64) -> Self              - set Rashba strength
//   with_zeeman(self, hx: f64, hy: f64, hz: f64) -> Self - set Zeeman field
//   with_phase(self, phase: f64) -> Self               - copy at another phase
//   has_spin_terms(&self) -> bool                      - alpha or Zeeman non-zero

// ======================== BLOCKS ========================
pub use blocks::{
    hopping_block, // fn(direction: BondDirection, params: &PhysicalParameters, variant: ModelVariant) -> DMatrix<Complex64>
    local_phase,   // fn(y: i32, phase: f64) -> f64 - -phase/2 for y < 0, +phase/2 otherwise
    onsite_block,  // fn(site: &LatticeSite, params: &PhysicalParameters, variant: ModelVariant) -> DMatrix<Complex64>
};

// ======================== GENERATORS ========================
pub use pauli::{
    Axis,        // enum - X, Y, Z
    gamma,       // fn(axis: Axis, variant: ModelVariant) -> DMatrix<Complex64> - tau_axis (⊗ sigma_0)
    graded_spin, // fn(axis: Axis) -> DMatrix<Complex64> - tau_z ⊗ sigma_axis
    kron,        // fn(a, b) -> DMatrix<Complex64> - Kronecker product
    spin,        // fn(axis: Axis) -> DMatrix<Complex64> - tau_0 ⊗ sigma_axis
};
