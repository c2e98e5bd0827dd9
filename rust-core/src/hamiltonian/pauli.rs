//! Pauli generators for the particle-hole (tau) and spin (sigma) subspaces.
//!
//! Blocks of the spinful model live in the product space tau ⊗ sigma with the
//! particle-hole index outermost, so `kron(tau_z(), sigma_0())` is the 4x4
//! particle-hole grading operator.

use nalgebra::DMatrix;
use num_complex::Complex64;

use crate::interfaces::ModelVariant;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

fn pauli_2x2(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> DMatrix<Complex64> {
    DMatrix::from_row_slice(2, 2, &[a, b, c, d])
}

pub fn identity_2x2() -> DMatrix<Complex64> {
    pauli_2x2(ONE, ZERO, ZERO, ONE)
}

pub fn pauli_x() -> DMatrix<Complex64> {
    pauli_2x2(ZERO, ONE, ONE, ZERO)
}

pub fn pauli_y() -> DMatrix<Complex64> {
    pauli_2x2(ZERO, -I, I, ZERO)
}

pub fn pauli_z() -> DMatrix<Complex64> {
    pauli_2x2(ONE, ZERO, ZERO, -ONE)
}

/// Kronecker product `a ⊗ b`.
pub fn kron(a: &DMatrix<Complex64>, b: &DMatrix<Complex64>) -> DMatrix<Complex64> {
    a.kronecker(b)
}

/// Axis of a Pauli matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

fn pauli(axis: Axis) -> DMatrix<Complex64> {
    match axis {
        Axis::X => pauli_x(),
        Axis::Y => pauli_y(),
        Axis::Z => pauli_z(),
    }
}

/// Particle-hole generator tau_axis, extended by sigma_0 for the spinful model.
pub fn gamma(axis: Axis, variant: ModelVariant) -> DMatrix<Complex64> {
    match variant {
        ModelVariant::ParticleHole => pauli(axis),
        ModelVariant::Spinful => kron(&pauli(axis), &identity_2x2()),
    }
}

/// Spin generator tau_0 ⊗ sigma_axis. Only meaningful for the spinful model.
pub fn spin(axis: Axis) -> DMatrix<Complex64> {
    kron(&identity_2x2(), &pauli(axis))
}

/// tau_z ⊗ sigma_axis, the structure of the Rashba hopping.
pub fn graded_spin(axis: Axis) -> DMatrix<Complex64> {
    kron(&pauli_z(), &pauli(axis))
}
