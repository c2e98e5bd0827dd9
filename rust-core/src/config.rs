// Constants

// Tolerances
pub const HERMITICITY_TOLERANCE: f64 = 1e-12; // For checks on assembled blocks and Bloch matrices
pub const EIGEN_MAX_ITERATIONS: usize = 10_000; // Upper bound for the Hermitian eigen-solver

// Physical constants (CODATA 2018)
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19; // C
pub const REDUCED_PLANCK: f64 = 1.054_571_817e-34; // J s
pub const CURRENT_SCALE: f64 = 2.0 * ELEMENTARY_CHARGE / REDUCED_PLANCK; // 2e/hbar

// Junction defaults
pub const DEFAULT_WIDTH: usize = 20;
pub const DEFAULT_MU: f64 = 0.4;
pub const DEFAULT_DELTA: f64 = 0.2;
pub const DEFAULT_HOPPING: f64 = 1.0;

// Sweep defaults
pub const DEFAULT_PHASE_POINTS: usize = 61; // over [0, 2pi]
pub const DEFAULT_MOMENTUM_POINTS: usize = 121; // over [-pi, pi]
