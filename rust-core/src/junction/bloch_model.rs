//! Finalized junction: a parameter-independent cell that assembles and diagonalizes
//! the Bloch Hamiltonian at any momentum.
//!
//! With H_0 the intra-cell Hamiltonian (onsite blocks plus transverse bonds) and V
//! the forward longitudinal hopping from a cell to its right neighbour,
//!
//! ```text
//! H(k) = H_0 + V e^{-ik} + V^† e^{ik}
//! ```

use nalgebra::{DMatrix, Vector2, linalg::SymmetricEigen};
use num_complex::Complex64;

use super::lattice::{Bond, LatticeSite};
use crate::config::EIGEN_MAX_ITERATIONS;
use crate::error::Error;
use crate::hamiltonian::{PhysicalParameters, hopping_block, onsite_block};
use crate::interfaces::ModelVariant;

#[derive(Debug, Clone)]
pub struct BlochModel {
    pub(crate) width: usize,
    pub(crate) variant: ModelVariant,
    pub(crate) sites: Vec<LatticeSite>,
    pub(crate) transverse_bonds: Vec<Bond>,
    pub(crate) longitudinal_bonds: Vec<Bond>,
    pub(crate) translation: Vector2<i32>,
}

impl BlochModel {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn variant(&self) -> ModelVariant {
        self.variant
    }

    pub fn sites(&self) -> &[LatticeSite] {
        &self.sites
    }

    pub fn transverse_bonds(&self) -> &[Bond] {
        &self.transverse_bonds
    }

    pub fn longitudinal_bonds(&self) -> &[Bond] {
        &self.longitudinal_bonds
    }

    pub fn translation(&self) -> Vector2<i32> {
        self.translation
    }

    pub fn orbitals_per_site(&self) -> usize {
        self.variant.orbitals_per_site()
    }

    /// Number of eigenvalues returned per momentum.
    pub fn num_bands(&self) -> usize {
        self.sites.len() * self.orbitals_per_site()
    }

    /// Row/column offset of a site's block in the Bloch matrix.
    ///
    /// Sites of the image cell (x != 0) map back onto their cell partner.
    fn offset(&self, site: &LatticeSite) -> usize {
        let y_min = self.sites[0].y;
        (site.y - y_min) as usize * self.orbitals_per_site()
    }

    fn add_block(
        &self,
        h: &mut DMatrix<Complex64>,
        row: &LatticeSite,
        col: &LatticeSite,
        block: &DMatrix<Complex64>,
    ) {
        let n = self.orbitals_per_site();
        let mut view = h.view_mut((self.offset(row), self.offset(col)), (n, n));
        view += block;
    }

    /// Bloch Hamiltonian at momentum `k` (radians per lattice constant).
    pub fn hamiltonian(&self, k: f64, params: &PhysicalParameters) -> DMatrix<Complex64> {
        let dim = self.num_bands();
        let mut h = DMatrix::<Complex64>::zeros(dim, dim);

        for site in &self.sites {
            let block = onsite_block(site, params, self.variant);
            self.add_block(&mut h, site, site, &block);
        }

        for bond in &self.transverse_bonds {
            let block = hopping_block(bond.direction, params, self.variant);
            self.add_block(&mut h, &bond.to, &bond.from, &block);
            self.add_block(&mut h, &bond.from, &bond.to, &block.adjoint());
        }

        let phase = Complex64::from_polar(1.0, -k);
        for bond in &self.longitudinal_bonds {
            let block = hopping_block(bond.direction, params, self.variant) * phase;
            self.add_block(&mut h, &bond.to, &bond.from, &block);
            self.add_block(&mut h, &bond.from, &bond.to, &block.adjoint());
        }

        h
    }

    /// Eigenvalues of the Bloch Hamiltonian at `k`, ascending.
    pub fn evaluate(&self, k: f64, params: &PhysicalParameters) -> Result<Vec<f64>, Error> {
        let eigen = self.diagonalize(k, params)?;
        let mut energies: Vec<f64> = eigen.eigenvalues.iter().copied().collect();
        energies.sort_by(|a, b| a.total_cmp(b));
        Ok(energies)
    }

    /// Eigenvalues ascending, with the matching eigenvectors as columns.
    pub fn eigensystem(
        &self,
        k: f64,
        params: &PhysicalParameters,
    ) -> Result<(Vec<f64>, DMatrix<Complex64>), Error> {
        let eigen = self.diagonalize(k, params)?;

        let mut order: Vec<usize> = (0..eigen.eigenvalues.len()).collect();
        order.sort_by(|&a, &b| eigen.eigenvalues[a].total_cmp(&eigen.eigenvalues[b]));

        let energies = order.iter().map(|&i| eigen.eigenvalues[i]).collect();
        let columns: Vec<_> = order.iter().map(|&i| eigen.eigenvectors.column(i)).collect();
        Ok((energies, DMatrix::from_columns(&columns)))
    }

    fn diagonalize(
        &self,
        k: f64,
        params: &PhysicalParameters,
    ) -> Result<SymmetricEigen<Complex64, nalgebra::Dyn>, Error> {
        let h = self.hamiltonian(k, params);
        // Drop the anti-Hermitian round-off so the spectrum is strictly real
        let h = (&h + h.adjoint()) * Complex64::new(0.5, 0.0);
        SymmetricEigen::try_new(h, f64::EPSILON, EIGEN_MAX_ITERATIONS)
            .ok_or(Error::Diagonalization { k })
    }
}
