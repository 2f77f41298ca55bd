// src/physics/orientation.rs
//
// Orientation solver: extracts Euler angles from a tensor's principal axis
// system, resolves the degenerate (axial/spherical) branches and enumerates
// the symmetry-equivalent descriptions of a relative orientation.

use crate::diagnostics::Advisory;
use crate::error::TensorError;
use crate::model::{
    Degeneracy, EulerAngles, EulerConvention, OrderingConvention, OrientationSettings,
    RotationSense, Tensor,
};
use crate::physics::euler::{
    euler_from_basis, normalize_euler, reverse_negate, rot_x, rot_y, rot_z, rotation_from_euler,
    zyz_to_zxz,
};
use crate::utils::linalg::{max_abs_diff, scale_of, wrap_two_pi, EPS};
use nalgebra::{Matrix3, Vector3};

/// A solved orientation: the angles plus any advisory conditions that were
/// applied while solving (degenerate branches, self-check fallbacks).
#[derive(Debug, Clone, PartialEq)]
pub struct EulerSolution {
    pub angles: EulerAngles,
    pub advisories: Vec<Advisory>,
}

/// A set of equivalent orientations (see [`equivalent_euler_between`]).
#[derive(Debug, Clone, PartialEq)]
pub struct EulerSolutionSet {
    pub angles: Vec<EulerAngles>,
    pub advisories: Vec<Advisory>,
}

fn emit_all(advisories: &[Advisory]) {
    for adv in advisories {
        adv.emit();
    }
}

/// Proper rotation carrying the frame `a` onto the frame `b` (columns =
/// axes): `b * a^-1`, with the third row negated if the result came out as
/// a reflection. Reflections are not valid physical reorientations.
pub fn rotation_between(a: &Matrix3<f64>, b: &Matrix3<f64>) -> Matrix3<f64> {
    let inv = a.try_inverse().unwrap_or_else(|| a.transpose());
    let mut r = b * inv;
    if r.determinant() < 0.0 {
        let neg = -r.row(2).into_owned();
        r.set_row(2, &neg);
    }
    r
}

/// Euler angles orienting the tensor's principal axis system in the
/// reference frame.
///
/// Isotropic tensors have no orientation and return (0, 0, 0). Axially
/// symmetric tensors leave one angle free; it is fixed to 0 and the
/// closed-form branches below are applied. Both conditions are reported as
/// advisories, not errors.
pub fn tensor_euler(
    tensor: &Tensor,
    settings: &OrientationSettings,
) -> Result<EulerSolution, TensorError> {
    if tensor.degeneracy() == Degeneracy::Isotropic {
        let solution = EulerSolution {
            angles: EulerAngles::zero(),
            advisories: vec![Advisory::IsotropicTensor],
        };
        emit_all(&solution.advisories);
        return Ok(solution);
    }

    let values = tensor.eigenvalues(settings.ordering);
    let vectors = tensor.eigenvectors(settings.ordering);
    let scale = scale_of(&values);
    let mut advisories = Vec::new();

    // Basis whose angles we extract; the passive basis is the inverted,
    // negated frame.
    let u = match settings.sense {
        RotationSense::Active => vectors,
        RotationSense::Passive => -vectors.transpose(),
    };

    let mut angles = euler_from_basis(&u, settings.convention);

    // Self-consistency: the angles must rebuild the same tensor as the
    // eigenvector frame itself. Eigensolver sign ambiguity can land the
    // extraction on the wrong branch; one retry with the negated basis is
    // the documented workaround, anything after that is surfaced as an
    // advisory and the retry result is kept.
    let diag = Matrix3::from_diagonal(&Vector3::from(values));
    let frame_built = u * diag * u.transpose();
    let tol = settings.tolerance * scale;

    let deviation = reconstruction_deviation(angles, settings, &diag, &frame_built);
    if deviation > tol {
        angles = euler_from_basis(&(-u), settings.convention);
        let retry_deviation = reconstruction_deviation(angles, settings, &diag, &frame_built);
        if retry_deviation > tol {
            advisories.push(Advisory::SelfCheckMismatch {
                deviation: retry_deviation / scale,
            });
        }
    }

    if tensor.degeneracy() == Degeneracy::Axial {
        angles = resolve_axial(tensor, angles, settings)?;
        advisories.push(Advisory::AxiallySymmetric);
    }

    let solution = EulerSolution {
        angles: normalize_euler(angles, settings.sense),
        advisories,
    };
    emit_all(&solution.advisories);
    Ok(solution)
}

fn reconstruction_deviation(
    angles: EulerAngles,
    settings: &OrientationSettings,
    diag: &Matrix3<f64>,
    reference: &Matrix3<f64>,
) -> f64 {
    let r = rotation_from_euler(angles, settings.convention, settings.sense);
    let rebuilt = r * diag * r.transpose();
    max_abs_diff(&rebuilt, reference)
}

/// Pick the defined angles for an axially symmetric tensor.
///
/// The repeated eigenvalue pair sits in adjacent positions for every
/// ordering convention. Pair (0,1) puts the unique axis along z of the PAS:
/// gamma is the free parameter and is fixed to 0. Pair (1,2) puts it along
/// x: alpha is fixed to 0 and beta/gamma follow in closed form from the
/// un-rotated tensor entries, taking the non-negative root.
fn resolve_axial(
    tensor: &Tensor,
    angles: EulerAngles,
    settings: &OrientationSettings,
) -> Result<EulerAngles, TensorError> {
    let values = tensor.eigenvalues(settings.ordering);
    let scale = scale_of(&values);
    let low_pair = (values[0] - values[1]).abs() <= EPS * scale;
    let high_pair = (values[1] - values[2]).abs() <= EPS * scale;

    if low_pair && !high_pair {
        // Unique axis along z: only alpha + gamma is physical
        return Ok(EulerAngles::new(angles.alpha, angles.beta, 0.0));
    }
    if high_pair && !low_pair {
        let active = axial_x_closed_form(
            &tensor.symmetric_part(),
            values[0],
            values[1],
            scale,
        );
        let converted = match settings.convention {
            EulerConvention::Zyz => active,
            EulerConvention::Zxz => zyz_to_zxz(active),
        };
        return Ok(match settings.sense {
            RotationSense::Active => converted,
            RotationSense::Passive => reverse_negate(converted),
        });
    }
    // A lone (0,2) coincidence cannot occur for correctly sorted values
    Err(TensorError::InvariantViolation(
        "axial degeneracy pattern inconsistent with sorted eigenvalues",
    ))
}

/// Closed form for the unique-axis-along-x case, ZYZ active, alpha = 0.
///
/// With `R = Ry(beta) * Rz(gamma)` and eigenvalues `(u, r, r)`:
///   `A11 = r + sin^2(gamma) (u - r)`
///   `A01 = cos(beta) * n`, `A12 = -sin(beta) * n`, `n = sin(g) cos(g) (u - r)`
///   `A22 = r + sin^2(beta) cos^2(gamma) (u - r)`
/// The first line gives gamma; beta comes from the normalized off-diagonal
/// entries, or from the diagonal when those vanish.
fn axial_x_closed_form(
    a: &Matrix3<f64>,
    unique: f64,
    repeated: f64,
    scale: f64,
) -> EulerAngles {
    let spread = unique - repeated;
    let sin2_gamma = ((a[(1, 1)] - repeated) / spread).clamp(0.0, 1.0);
    let gamma = sin2_gamma.sqrt().asin();

    let n = gamma.sin() * gamma.cos() * spread;
    let beta = if n.abs() > EPS * scale {
        (-a[(1, 2)] / n).atan2(a[(0, 1)] / n)
    } else {
        let denom = gamma.cos().powi(2) * spread;
        if denom.abs() > EPS * scale {
            let sin2_beta = ((a[(2, 2)] - repeated) / denom).clamp(0.0, 1.0);
            sin2_beta.sqrt().asin()
        } else {
            // Unique axis already transverse; beta carries no information
            0.0
        }
    };

    EulerAngles::new(0.0, beta, gamma)
}

/// True if the two tensors are the same within tolerance: equal eigenvalue
/// spectra and principal axes matching up to overall sign.
fn tensors_identical(a: &Tensor, b: &Tensor, tolerance: f64) -> bool {
    let va = a.eigenvalues(OrderingConvention::Increasing);
    let vb = b.eigenvalues(OrderingConvention::Increasing);
    let scale = scale_of(&va).max(scale_of(&vb));
    for k in 0..3 {
        if (va[k] - vb[k]).abs() > tolerance * scale {
            return false;
        }
    }
    let ea = a.eigenvectors(OrderingConvention::Increasing);
    let eb = b.eigenvectors(OrderingConvention::Increasing);
    for k in 0..3 {
        let dot = ea.column(k).dot(&eb.column(k));
        if (dot.abs() - 1.0).abs() > tolerance.max(EPS) {
            return false;
        }
    }
    true
}

/// Single representative Euler triple rotating this tensor's principal
/// frame onto the other's.
pub fn euler_between(
    tensor: &Tensor,
    other: &Tensor,
    settings: &OrientationSettings,
) -> Result<EulerSolution, TensorError> {
    let mut advisories = Vec::new();

    if tensor.degeneracy() == Degeneracy::Isotropic || other.degeneracy() == Degeneracy::Isotropic
    {
        advisories.push(Advisory::IsotropicTensor);
        emit_all(&advisories);
        return Ok(EulerSolution { angles: EulerAngles::zero(), advisories });
    }

    if tensors_identical(tensor, other, settings.tolerance) {
        advisories.push(Advisory::IdenticalTensors);
        emit_all(&advisories);
        return Ok(EulerSolution { angles: EulerAngles::zero(), advisories });
    }

    // Doubly axial pair: the only physical parameter is the angle between
    // the two unique axes. Work in the deviation ordering, which always
    // puts the repeated pair first (unique axis along z), so the closed
    // form holds for either tensor's requested ordering.
    if tensor.degeneracy() == Degeneracy::Axial && other.degeneracy() == Degeneracy::Axial {
        let va = tensor.eigenvectors(OrderingConvention::Nqr);
        let b_vals = other.eigenvalues(OrderingConvention::Nqr);
        let b_in_a = va.transpose() * other.symmetric_part() * va;

        let spread = b_vals[0] - b_vals[2];
        if spread.abs() > EPS * scale_of(&b_vals) {
            let sin2_beta = ((b_in_a[(2, 2)] - b_vals[2]) / spread).clamp(0.0, 1.0);
            let active = EulerAngles::new(0.0, sin2_beta.sqrt().asin(), 0.0);
            let converted = match settings.convention {
                EulerConvention::Zyz => active,
                EulerConvention::Zxz => zyz_to_zxz(active),
            };
            let oriented = match settings.sense {
                RotationSense::Active => converted,
                RotationSense::Passive => reverse_negate(converted),
            };
            advisories.push(Advisory::AxiallySymmetric);
            let solution = EulerSolution {
                angles: normalize_euler(oriented, settings.sense),
                advisories,
            };
            emit_all(&solution.advisories);
            return Ok(solution);
        }
    }

    let r = rotation_between(
        &tensor.eigenvectors(settings.ordering),
        &other.eigenvectors(settings.ordering),
    );
    let u = match settings.sense {
        RotationSense::Active => r,
        RotationSense::Passive => -r.transpose(),
    };
    let angles = euler_from_basis(&u, settings.convention);
    let solution = EulerSolution {
        angles: normalize_euler(angles, settings.sense),
        advisories,
    };
    emit_all(&solution.advisories);
    Ok(solution)
}

/// The 180-degree principal-axis flips of a frame, identity first.
fn pas_flips() -> [Matrix3<f64>; 4] {
    [
        Matrix3::identity(),
        rot_x(std::f64::consts::PI),
        rot_y(std::f64::consts::PI),
        rot_z(std::f64::consts::PI),
    ]
}

/// Every group-symmetric way to express the relative orientation between
/// two tensors' principal frames.
///
/// Each frame is defined only up to a 180-degree rotation about its own
/// principal axes, giving 4 x 4 = 16 triples; entry `i * 4 + j` combines
/// the i-th flip of this tensor's frame with the j-th flip of the other's
/// (the index contract of the host's orientation diagram). Results are
/// wrapped into `[0, 2*pi)` but not folded. If either tensor is isotropic
/// a single (0, 0, 0) is returned with an advisory, since no relative
/// orientation is defined.
pub fn equivalent_euler_between(
    tensor: &Tensor,
    other: &Tensor,
    settings: &OrientationSettings,
) -> Result<EulerSolutionSet, TensorError> {
    if tensor.degeneracy() == Degeneracy::Isotropic || other.degeneracy() == Degeneracy::Isotropic
    {
        let set = EulerSolutionSet {
            angles: vec![EulerAngles::zero()],
            advisories: vec![Advisory::IsotropicTensor],
        };
        emit_all(&set.advisories);
        return Ok(set);
    }

    let va = tensor.eigenvectors(settings.ordering);
    let vb = other.eigenvectors(settings.ordering);
    let flips = pas_flips();

    let mut angles = Vec::with_capacity(16);
    for fa in &flips {
        for fb in &flips {
            let r = rotation_between(&(va * fa), &(vb * fb));
            let u = match settings.sense {
                RotationSense::Active => r,
                RotationSense::Passive => -r.transpose(),
            };
            let e = euler_from_basis(&u, settings.convention);
            angles.push(EulerAngles::new(
                wrap_two_pi(e.alpha),
                wrap_two_pi(e.beta),
                wrap_two_pi(e.gamma),
            ));
        }
    }

    Ok(EulerSolutionSet { angles, advisories: Vec::new() })
}

/// Solve a whole array of tensors with the same settings.
pub fn euler_all(
    tensors: &[Tensor],
    settings: &OrientationSettings,
) -> Result<Vec<EulerSolution>, TensorError> {
    tensors.iter().map(|t| tensor_euler(t, settings)).collect()
}

/// Parallel version of [`euler_all`] for large structures.
#[cfg(feature = "parallel")]
pub fn euler_all_parallel(
    tensors: &[Tensor],
    settings: &OrientationSettings,
) -> Result<Vec<EulerSolution>, TensorError> {
    use rayon::prelude::*;
    tensors
        .par_iter()
        .map(|t| tensor_euler(t, settings))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::linalg::matrices_close;
    use std::f64::consts::TAU;

    fn settings(
        conv: EulerConvention,
        sense: RotationSense,
        ordering: OrderingConvention,
    ) -> OrientationSettings {
        OrientationSettings::default()
            .with_convention(conv)
            .with_sense(sense)
            .with_ordering(ordering)
    }

    const ALL_ORDERINGS: [OrderingConvention; 4] = [
        OrderingConvention::Increasing,
        OrderingConvention::Decreasing,
        OrderingConvention::Haeberlen,
        OrderingConvention::Nqr,
    ];

    #[test]
    fn test_isotropic_tensor_is_zero_for_all_combinations() {
        let iso = Tensor::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        for conv in [EulerConvention::Zyz, EulerConvention::Zxz] {
            for sense in [RotationSense::Active, RotationSense::Passive] {
                for ordering in ALL_ORDERINGS {
                    let s = tensor_euler(&iso, &settings(conv, sense, ordering)).unwrap();
                    assert!(s.angles.close_to(&EulerAngles::zero(), 1e-12));
                    assert_eq!(s.advisories, vec![Advisory::IsotropicTensor]);
                }
            }
        }
    }

    #[test]
    fn test_reference_diagonal_tensor_angles() {
        // diag(1, 2, -6), increasing ordering: eigenvalues (-6, 1, 2),
        // PAS = (z, x, y), ZYZ active angles fold to (270, 90, 0) degrees
        let t = Tensor::new([[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, -6.0]]);
        let s = tensor_euler(
            &t,
            &settings(
                EulerConvention::Zyz,
                RotationSense::Active,
                OrderingConvention::Increasing,
            ),
        )
        .unwrap();
        let deg = s.angles.to_degrees();
        assert!((deg[0] - 270.0).abs() < 1e-6, "alpha {}", deg[0]);
        assert!((deg[1] - 90.0).abs() < 1e-6, "beta {}", deg[1]);
        assert!(deg[2].abs() < 1e-6, "gamma {}", deg[2]);
        assert!(s.advisories.is_empty());
    }

    #[test]
    fn test_recovers_known_rotation() {
        // Canonical triple: normalization maps every eigensolver sign
        // choice back onto it
        let known = EulerAngles::new(0.7, 0.5, 1.2);
        let r = rotation_from_euler(known, EulerConvention::Zyz, RotationSense::Active);
        let d = Matrix3::from_diagonal(&Vector3::new(1.0, 2.0, 4.0));
        let t = Tensor::from_matrix(r * d * r.transpose());

        let s = tensor_euler(
            &t,
            &settings(
                EulerConvention::Zyz,
                RotationSense::Active,
                OrderingConvention::Increasing,
            ),
        )
        .unwrap();
        assert!(
            s.angles.close_to(&known, 1e-8),
            "expected {:?}, got {:?}",
            known,
            s.angles
        );
        assert!(s.advisories.is_empty());
    }

    #[test]
    fn test_active_reconstruction_both_conventions() {
        let known = EulerAngles::new(0.7, 0.5, 1.2);
        let r = rotation_from_euler(known, EulerConvention::Zyz, RotationSense::Active);
        let d = Matrix3::from_diagonal(&Vector3::new(1.0, 2.0, 4.0));
        let t = Tensor::from_matrix(r * d * r.transpose());

        for conv in [EulerConvention::Zyz, EulerConvention::Zxz] {
            let s = tensor_euler(
                &t,
                &settings(conv, RotationSense::Active, OrderingConvention::Increasing),
            )
            .unwrap();
            let rr = rotation_from_euler(s.angles, conv, RotationSense::Active);
            let rebuilt = rr * d * rr.transpose();
            assert!(
                matrices_close(&rebuilt, &t.symmetric_part(), 10.0),
                "reconstruction failed for {:?}",
                conv
            );
        }
    }

    #[test]
    fn test_passive_angles_are_canonical() {
        let known = EulerAngles::new(0.7, 0.5, 1.2);
        let r = rotation_from_euler(known, EulerConvention::Zyz, RotationSense::Active);
        let d = Matrix3::from_diagonal(&Vector3::new(1.0, 2.0, 4.0));
        let t = Tensor::from_matrix(r * d * r.transpose());

        let s = tensor_euler(
            &t,
            &settings(
                EulerConvention::Zyz,
                RotationSense::Passive,
                OrderingConvention::Increasing,
            ),
        )
        .unwrap();
        assert!(s.angles.beta <= std::f64::consts::FRAC_PI_2 + EPS);
        assert!((0.0..TAU).contains(&s.angles.alpha));
        assert!((0.0..TAU).contains(&s.angles.gamma));
    }

    #[test]
    fn test_axial_unique_z_fixes_gamma() {
        // Unique eigenvalue along the PAS z axis: gamma is free, fixed to 0
        let r = rotation_from_euler(
            EulerAngles::new(0.7, 0.5, 0.0),
            EulerConvention::Zyz,
            RotationSense::Active,
        );
        let d = Matrix3::from_diagonal(&Vector3::new(1.0, 1.0, 5.0));
        let t = Tensor::from_matrix(r * d * r.transpose());
        assert_eq!(t.degeneracy(), Degeneracy::Axial);

        let s = tensor_euler(
            &t,
            &settings(
                EulerConvention::Zyz,
                RotationSense::Active,
                OrderingConvention::Increasing,
            ),
        )
        .unwrap();
        assert_eq!(s.angles.gamma, 0.0);
        assert!(s.advisories.contains(&Advisory::AxiallySymmetric));

        // gamma carries nothing for this symmetry, so the rebuilt tensor
        // must still match
        let rr = rotation_from_euler(s.angles, EulerConvention::Zyz, RotationSense::Active);
        let rebuilt = rr * d * rr.transpose();
        assert!(matrices_close(&rebuilt, &t.symmetric_part(), 10.0));
    }

    #[test]
    fn test_axial_unique_x_closed_form() {
        // Unique eigenvalue first in decreasing order -> unique axis along
        // x; rotated about y by 0.5, closed form gives (0, 0.5, 0)
        let r = rot_y(0.5);
        let d = Matrix3::from_diagonal(&Vector3::new(5.0, 1.0, 1.0));
        let t = Tensor::from_matrix(r * d * r.transpose());
        assert_eq!(t.degeneracy(), Degeneracy::Axial);

        let s = tensor_euler(
            &t,
            &settings(
                EulerConvention::Zyz,
                RotationSense::Active,
                OrderingConvention::Decreasing,
            ),
        )
        .unwrap();
        assert!(s.angles.alpha.abs() < 1e-8, "alpha {}", s.angles.alpha);
        assert!((s.angles.beta - 0.5).abs() < 1e-8, "beta {}", s.angles.beta);
        assert!(s.angles.gamma.abs() < 1e-8, "gamma {}", s.angles.gamma);
        assert!(s.advisories.contains(&Advisory::AxiallySymmetric));
    }

    #[test]
    fn test_identical_tensors_return_zero_with_advisory() {
        let t = Tensor::new([[1.0, 0.4, 0.0], [0.4, 2.0, -0.3], [0.0, -0.3, -1.0]]);
        let s = euler_between(&t, &t.clone(), &OrientationSettings::default()).unwrap();
        assert!(s.angles.close_to(&EulerAngles::zero(), 1e-12));
        assert_eq!(s.advisories, vec![Advisory::IdenticalTensors]);
    }

    #[test]
    fn test_euler_between_recovers_relative_rotation() {
        let known = EulerAngles::new(0.7, 0.5, 1.2);
        let r = rotation_from_euler(known, EulerConvention::Zyz, RotationSense::Active);
        let a = Tensor::new([[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 4.0]]);
        let b = a.rotate(&r, RotationSense::Active);

        let s = euler_between(
            &a,
            &b,
            &settings(
                EulerConvention::Zyz,
                RotationSense::Active,
                OrderingConvention::Increasing,
            ),
        )
        .unwrap();
        assert!(
            s.angles.close_to(&known, 1e-8),
            "expected {:?}, got {:?}",
            known,
            s.angles
        );
    }

    #[test]
    fn test_euler_between_doubly_axial_closed_form() {
        let a = Tensor::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 5.0]]);
        let b = a.rotate(&rot_y(0.6), RotationSense::Active);
        assert_eq!(b.degeneracy(), Degeneracy::Axial);

        let s = euler_between(&a, &b, &OrientationSettings::default()).unwrap();
        assert!(s.angles.alpha.abs() < 1e-8);
        assert!((s.angles.beta - 0.6).abs() < 1e-8, "beta {}", s.angles.beta);
        assert!(s.angles.gamma.abs() < 1e-8);
        assert!(s.advisories.contains(&Advisory::AxiallySymmetric));
    }

    #[test]
    fn test_equivalent_set_has_16_physically_equal_entries() {
        let known = EulerAngles::new(0.7, 0.5, 1.2);
        let r = rotation_from_euler(known, EulerConvention::Zyz, RotationSense::Active);
        let a = Tensor::new([[1.0, 0.3, 0.0], [0.3, 2.0, 0.1], [0.0, 0.1, 4.0]]);
        let b = a.rotate(&r, RotationSense::Active);

        let st = settings(
            EulerConvention::Zyz,
            RotationSense::Active,
            OrderingConvention::Increasing,
        );
        let set = equivalent_euler_between(&a, &b, &st).unwrap();
        assert_eq!(set.angles.len(), 16);

        // Transporting the first tensor with any of the 16 rotations lands
        // on the same physical tensor (B's frame carrying A's spectrum)
        let reference = {
            let rr = rotation_from_euler(set.angles[0], st.convention, st.sense);
            rr * a.symmetric_part() * rr.transpose()
        };
        for (k, e) in set.angles.iter().enumerate().skip(1) {
            let rr = rotation_from_euler(*e, st.convention, st.sense);
            let m = rr * a.symmetric_part() * rr.transpose();
            assert!(
                matrices_close(&m, &reference, 10.0),
                "equivalent {} differs physically",
                k
            );
        }

        for e in &set.angles {
            assert!((0.0..TAU).contains(&e.alpha));
            assert!((0.0..TAU).contains(&e.beta));
            assert!((0.0..TAU).contains(&e.gamma));
        }
    }

    #[test]
    fn test_equivalent_set_isotropic_early_out() {
        let iso = Tensor::new([[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]);
        let t = Tensor::new([[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 4.0]]);
        let set = equivalent_euler_between(&iso, &t, &OrientationSettings::default()).unwrap();
        assert_eq!(set.angles.len(), 1);
        assert!(set.angles[0].close_to(&EulerAngles::zero(), 1e-12));
        assert_eq!(set.advisories, vec![Advisory::IsotropicTensor]);
    }

    #[test]
    fn test_rotation_between_reorthogonalises_reflections() {
        let a = Matrix3::identity();
        // A left-handed frame: det = -1
        let b = Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, -1.0,
        );
        let r = rotation_between(&a, &b);
        assert!((r.determinant() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_euler_all_matches_single_solver() {
        let tensors = vec![
            Tensor::new([[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, -6.0]]),
            Tensor::new([[1.0, 0.4, 0.0], [0.4, 2.0, -0.3], [0.0, -0.3, -1.0]]),
        ];
        let st = OrientationSettings::default();
        let batch = euler_all(&tensors, &st).unwrap();
        assert_eq!(batch.len(), 2);
        for (t, solved) in tensors.iter().zip(&batch) {
            let single = tensor_euler(t, &st).unwrap();
            assert!(solved.angles.close_to(&single.angles, 1e-12));
        }
    }
}
