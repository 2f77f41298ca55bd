// src/model/tensor.rs

use crate::error::TensorError;
use crate::model::conventions::{OrderingConvention, RotationSense};
use crate::utils::linalg::{floats_close, scale_of};
use nalgebra::{Matrix3, SymmetricEigen, Vector3};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Scalar invariants of a symmetric tensor.
///
/// All of these are defined on the Haeberlen-ordered eigenvalues (span and
/// skew on the increasing order), and do not change with the ordering a
/// caller requests from the accessors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Invariants {
    /// Mean eigenvalue.
    pub isotropy: f64,
    /// `e_z - (e_x + e_y)/2` in Haeberlen components.
    pub anisotropy: f64,
    /// `e_z - isotropy` in Haeberlen components.
    pub reduced_anisotropy: f64,
    /// `(e_y - e_x) / reduced_anisotropy`; 0 for isotropic tensors.
    pub asymmetry: f64,
    /// Largest minus smallest eigenvalue.
    pub span: f64,
    /// `3 (e_mid - isotropy) / span`; 0 when the span vanishes.
    pub skew: f64,
}

/// Eigenvalue coincidence pattern of the symmetric part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// All three eigenvalues distinct.
    Distinct,
    /// Exactly two eigenvalues coincide (axially symmetric).
    Axial,
    /// All three coincide (spherical / isotropic).
    Isotropic,
}

impl Degeneracy {
    /// Number of eigenvalue coincidences: 0, 1 or 2.
    pub fn coincidences(&self) -> u8 {
        match self {
            Degeneracy::Distinct => 0,
            Degeneracy::Axial => 1,
            Degeneracy::Isotropic => 2,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct OrderedEigen {
    values: [f64; 3],
    vectors: Matrix3<f64>,
}

/// Immutable second-rank tensor with its eigen-decomposition.
///
/// Construction eagerly computes the symmetric/antisymmetric split, the
/// eigen-decomposition of the symmetric part, the four ordering conventions
/// and the scalar invariants; after that the value never changes. Operations
/// like [`Tensor::rotate`] and [`Tensor::scaled`] return new tensors.
#[derive(Debug, Clone)]
pub struct Tensor {
    raw: Matrix3<f64>,
    symmetric: Matrix3<f64>,
    antisymmetric: Matrix3<f64>,
    /// Base eigenvalues, ascending.
    base_values: [f64; 3],
    /// Matching eigenvector columns, right-handed.
    base_vectors: Matrix3<f64>,
    degeneracy: Degeneracy,
    invariants: Invariants,
    /// Cached per-convention orderings, indexed by `ordering_index`.
    ordered: [OrderedEigen; 4],
}

fn ordering_index(convention: OrderingConvention) -> usize {
    match convention {
        OrderingConvention::Increasing => 0,
        OrderingConvention::Decreasing => 1,
        OrderingConvention::Haeberlen => 2,
        OrderingConvention::Nqr => 3,
    }
}

/// Reorder eigenvector columns by `perm` and force the result right-handed
/// by recomputing the third column as the cross product of the first two.
fn permuted_vectors(vectors: &Matrix3<f64>, perm: [usize; 3]) -> Matrix3<f64> {
    let mut out = Matrix3::zeros();
    for (k, &p) in perm.iter().enumerate() {
        out.set_column(k, &vectors.column(p).into_owned());
    }
    let c0: Vector3<f64> = out.column(0).into_owned();
    let c1: Vector3<f64> = out.column(1).into_owned();
    out.set_column(2, &c0.cross(&c1));
    out
}

impl Tensor {
    /// Build a tensor from a row-major 3x3 array.
    pub fn new(rows: [[f64; 3]; 3]) -> Self {
        Self::from_matrix(Matrix3::new(
            rows[0][0], rows[0][1], rows[0][2],
            rows[1][0], rows[1][1], rows[1][2],
            rows[2][0], rows[2][1], rows[2][2],
        ))
    }

    /// Build a tensor from a flat 9-element row-major slice, the layout of
    /// per-atom tensor columns in Extended-XYZ and Magres files.
    pub fn from_flat(data: &[f64]) -> Result<Self, TensorError> {
        if data.len() != 9 {
            return Err(TensorError::Dimension(data.len()));
        }
        Ok(Self::from_matrix(Matrix3::from_row_slice(data)))
    }

    pub fn from_matrix(raw: Matrix3<f64>) -> Self {
        // Asymmetric input is not an error: only the symmetric part carries
        // the physics, the antisymmetric remainder is kept for completeness.
        let symmetric = (raw + raw.transpose()) * 0.5;
        let antisymmetric = raw - symmetric;

        let eig = SymmetricEigen::new(symmetric);

        // Sort ascending to get the base ordering
        let mut idx = [0usize, 1, 2];
        idx.sort_by(|&a, &b| {
            eig.eigenvalues[a]
                .partial_cmp(&eig.eigenvalues[b])
                .unwrap_or(Ordering::Equal)
        });
        let base_values = [
            eig.eigenvalues[idx[0]],
            eig.eigenvalues[idx[1]],
            eig.eigenvalues[idx[2]],
        ];
        // Right-handedness must be enforced AFTER sorting: downstream
        // orientation code requires det = +1 for a well-defined rotation.
        let base_vectors = permuted_vectors(&eig.eigenvectors, idx);

        Self::from_eigen_parts(raw, symmetric, antisymmetric, base_values, base_vectors)
    }

    /// Assemble a tensor from an already-known decomposition. `base_values`
    /// must be ascending and `base_vectors` right-handed.
    fn from_eigen_parts(
        raw: Matrix3<f64>,
        symmetric: Matrix3<f64>,
        antisymmetric: Matrix3<f64>,
        base_values: [f64; 3],
        base_vectors: Matrix3<f64>,
    ) -> Self {
        let scale = scale_of(&base_values);
        let low_pair = floats_close(base_values[0], base_values[1], scale);
        let high_pair = floats_close(base_values[1], base_values[2], scale);
        let degeneracy = match (low_pair, high_pair) {
            (true, true) => Degeneracy::Isotropic,
            (false, false) => Degeneracy::Distinct,
            _ => Degeneracy::Axial,
        };

        let isotropy = (base_values[0] + base_values[1] + base_values[2]) / 3.0;

        let ordered = [
            OrderingConvention::Increasing,
            OrderingConvention::Decreasing,
            OrderingConvention::Haeberlen,
            OrderingConvention::Nqr,
        ]
        .map(|conv| {
            let perm = Self::permutation_for(conv, &base_values, isotropy, degeneracy);
            OrderedEigen {
                values: [
                    base_values[perm[0]],
                    base_values[perm[1]],
                    base_values[perm[2]],
                ],
                vectors: permuted_vectors(&base_vectors, perm),
            }
        });

        let haeb = ordered[ordering_index(OrderingConvention::Haeberlen)].values;
        let reduced = haeb[2] - isotropy;
        let asymmetry = if floats_close(reduced, 0.0, scale) {
            0.0
        } else {
            (haeb[1] - haeb[0]) / reduced
        };
        let span = base_values[2] - base_values[0];
        let skew = if floats_close(span, 0.0, scale) {
            0.0
        } else {
            3.0 * (base_values[1] - isotropy) / span
        };

        let invariants = Invariants {
            isotropy,
            anisotropy: haeb[2] - (haeb[0] + haeb[1]) / 2.0,
            reduced_anisotropy: reduced,
            asymmetry,
            span,
            skew,
        };

        Self {
            raw,
            symmetric,
            antisymmetric,
            base_values,
            base_vectors,
            degeneracy,
            invariants,
            ordered,
        }
    }

    /// Index permutation mapping the ascending base order to `convention`.
    fn permutation_for(
        convention: OrderingConvention,
        base_values: &[f64; 3],
        isotropy: f64,
        degeneracy: Degeneracy,
    ) -> [usize; 3] {
        // Sorting by a near-zero deviation is numerically unstable and
        // physically meaningless; isotropic tensors keep the base order
        // for every convention.
        if degeneracy == Degeneracy::Isotropic {
            return [0, 1, 2];
        }
        match convention {
            OrderingConvention::Increasing => [0, 1, 2],
            OrderingConvention::Decreasing => [2, 1, 0],
            OrderingConvention::Haeberlen | OrderingConvention::Nqr => {
                let mut idx = [0usize, 1, 2];
                idx.sort_by(|&a, &b| {
                    (base_values[a] - isotropy)
                        .abs()
                        .partial_cmp(&(base_values[b] - isotropy).abs())
                        .unwrap_or(Ordering::Equal)
                });
                if convention == OrderingConvention::Haeberlen {
                    idx.swap(0, 1);
                }
                idx
            }
        }
    }

    // --- Accessors ---

    pub fn raw(&self) -> Matrix3<f64> {
        self.raw
    }

    pub fn symmetric_part(&self) -> Matrix3<f64> {
        self.symmetric
    }

    pub fn antisymmetric_part(&self) -> Matrix3<f64> {
        self.antisymmetric
    }

    /// Eigenvalues of the symmetric part under the requested ordering.
    pub fn eigenvalues(&self, convention: OrderingConvention) -> [f64; 3] {
        self.ordered[ordering_index(convention)].values
    }

    /// Matching eigenvector columns, always right-handed (det = +1).
    pub fn eigenvectors(&self, convention: OrderingConvention) -> Matrix3<f64> {
        self.ordered[ordering_index(convention)].vectors
    }

    pub fn degeneracy(&self) -> Degeneracy {
        self.degeneracy
    }

    /// Number of eigenvalue coincidences (0 = distinct, 1 = axial,
    /// 2 = isotropic).
    pub fn symmetry_order(&self) -> u8 {
        self.degeneracy.coincidences()
    }

    pub fn invariants(&self) -> Invariants {
        self.invariants
    }

    pub fn isotropy(&self) -> f64 {
        self.invariants.isotropy
    }

    // --- Transforms ---

    /// Express the tensor in a rotated frame.
    ///
    /// Passive: `B^T * M * B` (rotate the frame). Active: `B * M * B^T`
    /// (rotate the object). Passively rotating a tensor by its own
    /// eigenvector basis diagonalises it.
    pub fn rotate(&self, basis: &Matrix3<f64>, sense: RotationSense) -> Tensor {
        let rotated = match sense {
            RotationSense::Passive => basis.transpose() * self.raw * basis,
            RotationSense::Active => basis * self.raw * basis.transpose(),
        };
        Tensor::from_matrix(rotated)
    }

    /// Scale every component by `factor`.
    ///
    /// Eigenvectors are unaffected and eigenvalues scale linearly, so no
    /// re-diagonalisation happens; a negative factor reverses the base
    /// order to keep it ascending.
    pub fn scaled(&self, factor: f64) -> Tensor {
        let mut values = [
            self.base_values[0] * factor,
            self.base_values[1] * factor,
            self.base_values[2] * factor,
        ];
        let mut vectors = self.base_vectors;
        if factor < 0.0 {
            values.swap(0, 2);
            vectors = permuted_vectors(&self.base_vectors, [2, 1, 0]);
        }
        Self::from_eigen_parts(
            self.raw * factor,
            self.symmetric * factor,
            self.antisymmetric * factor,
            values,
            vectors,
        )
    }
}
