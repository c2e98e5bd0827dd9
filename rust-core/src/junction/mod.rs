// Junction module: the finite cross-section of the strip, its bonds, and the finalized
// Bloch model evaluated across the momentum sweep

// ======================== MODULE DECLARATIONS ========================
pub mod bloch_model;
pub mod junction_builder;
pub mod lattice;


// ======================== LATTICE GEOMETRY ========================
pub use lattice::{
    Bond,               // struct - directed nearest-neighbour bond (to <- from) with its direction
    LatticeSite,        // struct - integer site tag (x, y), x = 0 inside the cell
    translation_vector, // fn() -> Vector2<i32> - (1, 0)
    transverse_range,   // fn(width: i32) -> Range<i32> - floor(-W/2)..floor(W/2)
};

// ======================== BLOCH MODEL ========================
pub use bloch_model::BlochModel; // struct - finalized, parameter-independent junction cell
// BlochModel impl methods:
//   hamiltonian(&self, k: f64, params: &PhysicalParameters) -> DMatrix<Complex64> - H(k)
//   evaluate(&self, k: f64, params: &PhysicalParameters) -> Result<Vec<f64>, Error> - sorted eigenvalues
//   eigensystem(&self, k: f64, params: &PhysicalParameters) -> Result<(Vec<f64>, DMatrix<Complex64>), Error>
//   width / variant / sites / transverse_bonds / longitudinal_bonds / translation
//   orbitals_per_site(&self) -> usize, num_bands(&self) -> usize

// ======================== CONSTRUCTION ========================
pub use junction_builder::{
    JunctionBuilder,             // struct - builder pattern for the junction cell
    make_infinite_junction,      // fn(width: usize) -> Result<BlochModel, Error> - particle-hole variant
    make_infinite_junction_with, // fn(width: usize, variant: ModelVariant) -> Result<BlochModel, Error>
};

// JunctionBuilder impl methods:
//   new() -> Self                                     - width 20, particle-hole variant
//   with_width(self, width: usize) -> Self            - sites across the strip
//   with_variant(self, variant: ModelVariant) -> Self - particle-hole or spinful
//   build(self) -> Result<BlochModel, Error>          - finalize the cell
