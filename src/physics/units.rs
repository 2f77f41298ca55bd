// src/physics/units.rs
//
// Re-expression of EFG and spin-spin coupling tensors in frequency units.
// Pure scaling: eigenvectors are untouched and eigenvalues scale linearly,
// so the converted tensor needs no re-diagonalisation.

use crate::model::Tensor;

/// Electric field gradient, atomic units to Hz per barn of quadrupole
/// moment: `e * Vzz[au] / h` with `Vzz[au] = 9.7173624292e21 V/m^2`.
pub const EFG_AU_TO_HZ: f64 = 2.349648e8;

/// Reduced spin-spin coupling (10^19 T^2/J, the magres convention) to Hz
/// per product of gyromagnetic ratios (rad/s/T): `h / (4 pi^2) * 1e19`.
pub const ISC_K_TO_HZ: f64 = 1.678405e-16;

/// Convert an EFG tensor in atomic units to a quadrupolar coupling in Hz.
///
/// `quadrupole_moment` is the nuclear quadrupole moment in barn.
pub fn efg_to_frequency(tensor: &Tensor, quadrupole_moment: f64) -> Tensor {
    tensor.scaled(EFG_AU_TO_HZ * quadrupole_moment)
}

/// Convert a reduced coupling tensor K to a J-coupling in Hz.
///
/// `gamma_1` and `gamma_2` are the gyromagnetic ratios of the two coupled
/// nuclei in rad/s/T.
pub fn isc_to_frequency(tensor: &Tensor, gamma_1: f64, gamma_2: f64) -> Tensor {
    tensor.scaled(ISC_K_TO_HZ * gamma_1 * gamma_2)
}
