// src/physics/euler.rs
//
// Euler-angle algebra: elemental rotations, angle extraction from a basis,
// canonical normalization and the discrete equivalence set. Everything here
// is pure angle/matrix math; tensor-aware logic lives in
// physics::orientation.

use crate::model::{EulerAngles, EulerConvention, OrientationSettings, RotationSense};
use crate::utils::linalg::{wrap_two_pi, EPS};
use nalgebra::Matrix3;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

// --- Elemental rotations ---

pub(crate) fn rot_x(theta: f64) -> Matrix3<f64> {
    let (s, c) = theta.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, c, -s,
        0.0, s, c,
    )
}

pub(crate) fn rot_y(theta: f64) -> Matrix3<f64> {
    let (s, c) = theta.sin_cos();
    Matrix3::new(
        c, 0.0, s,
        0.0, 1.0, 0.0,
        -s, 0.0, c,
    )
}

pub(crate) fn rot_z(theta: f64) -> Matrix3<f64> {
    let (s, c) = theta.sin_cos();
    Matrix3::new(
        c, -s, 0.0,
        s, c, 0.0,
        0.0, 0.0, 1.0,
    )
}

/// Composite rotation for an Euler triple.
///
/// Active: `Rz(alpha) * Rmid(beta) * Rz(gamma)` with the middle axis given
/// by the convention. Passive is the inverse rotation: reversed order,
/// each factor inverted.
pub fn rotation_from_euler(
    angles: EulerAngles,
    convention: EulerConvention,
    sense: RotationSense,
) -> Matrix3<f64> {
    let mid = match convention {
        EulerConvention::Zyz => rot_y,
        EulerConvention::Zxz => rot_x,
    };
    match sense {
        RotationSense::Active => {
            rot_z(angles.alpha) * mid(angles.beta) * rot_z(angles.gamma)
        }
        RotationSense::Passive => {
            rot_z(-angles.gamma) * mid(-angles.beta) * rot_z(-angles.alpha)
        }
    }
}

/// Extract an Euler triple from an orthonormal basis matrix (columns =
/// rotated axes).
///
/// `beta` comes from the (2,2) entry; near the gimbal configurations
/// (`beta ~ 0` or `beta ~ pi`) alpha and gamma are coupled and gamma is
/// fixed to 0 by convention.
pub fn euler_from_basis(u: &Matrix3<f64>, convention: EulerConvention) -> EulerAngles {
    let cos_beta = u[(2, 2)].clamp(-1.0, 1.0);
    let beta = cos_beta.acos();

    if (cos_beta - 1.0).abs() < EPS {
        // Gimbal lock: only alpha + gamma is determined
        let alpha = u[(0, 0)].clamp(-1.0, 1.0).acos();
        return EulerAngles::new(alpha, beta, 0.0);
    }
    if (cos_beta + 1.0).abs() < EPS {
        // Mirror configuration, sin(beta) = 0 again
        let alpha = (-u[(0, 0)]).clamp(-1.0, 1.0).acos();
        return EulerAngles::new(alpha, PI, 0.0);
    }

    let sin_beta = beta.sin();
    let (alpha, gamma) = match convention {
        EulerConvention::Zyz => (
            (u[(1, 2)] / sin_beta).atan2(u[(0, 2)] / sin_beta),
            (u[(2, 1)] / sin_beta).atan2(-u[(2, 0)] / sin_beta),
        ),
        EulerConvention::Zxz => (
            (u[(0, 2)] / sin_beta).atan2(-u[(1, 2)] / sin_beta),
            (u[(2, 0)] / sin_beta).atan2(u[(2, 1)] / sin_beta),
        ),
    };
    EulerAngles::new(alpha, beta, gamma)
}

/// Reverse and negate a triple: the active form of a passive triple and
/// vice versa.
pub(crate) fn reverse_negate(angles: EulerAngles) -> EulerAngles {
    EulerAngles::new(-angles.gamma, -angles.beta, -angles.alpha)
}

/// The same physical rotation re-expressed with the other middle axis:
/// `ZYZ(a, b, g) = ZXZ(a + pi/2, b, g - pi/2)`.
pub(crate) fn zyz_to_zxz(angles: EulerAngles) -> EulerAngles {
    EulerAngles::new(angles.alpha + FRAC_PI_2, angles.beta, angles.gamma - FRAC_PI_2)
}

/// Fold a triple onto its canonical representative.
///
/// Wraps into `[0, 2*pi)`, reflects `beta > pi`, folds `beta >= pi/2`
/// through the 180-degree flip about the second principal axis (a tensor
/// symmetry, so the physical orientation is unchanged) and reduces the
/// trailing angle mod pi. Canonical beta lies in `[0, pi/2]` (up to EPS at
/// the boundary).
pub fn normalize_euler(angles: EulerAngles, sense: RotationSense) -> EulerAngles {
    let mut alpha = wrap_two_pi(angles.alpha);
    let mut beta = wrap_two_pi(angles.beta);
    let mut gamma = wrap_two_pi(angles.gamma);

    if beta > PI {
        beta = TAU - beta;
        match sense {
            RotationSense::Active => alpha = wrap_two_pi(alpha + PI),
            RotationSense::Passive => gamma = wrap_two_pi(gamma + PI),
        }
    }

    if beta >= FRAC_PI_2 - EPS {
        alpha = wrap_two_pi(alpha + PI);
        beta = PI - beta;
        gamma = wrap_two_pi(PI - gamma);
    }

    match sense {
        RotationSense::Active => {
            if gamma >= PI - EPS {
                // EPS-negative leftover is clamped to 0
                gamma = (gamma - PI).max(0.0);
            }
        }
        RotationSense::Passive => {
            if alpha >= PI - EPS {
                alpha = (alpha - PI).max(0.0);
            }
        }
    }

    EulerAngles::new(alpha, beta, gamma)
}

/// The four Euler triples describing indistinguishable orientations of a
/// symmetric tensor.
///
/// A 180-degree rotation about any principal axis maps the tensor onto
/// itself; composing these with the input rotation gives exactly four
/// distinct triples (the input included). All four are wrapped into
/// `[0, 2*pi)` but not re-folded.
pub fn equivalent_euler(angles: EulerAngles, settings: &OrientationSettings) -> [EulerAngles; 4] {
    let base = match settings.sense {
        RotationSense::Active => angles,
        RotationSense::Passive => reverse_negate(angles),
    };
    let (a, b, g) = (base.alpha, base.beta, base.gamma);

    let shifted = [
        EulerAngles::new(a, b, g),
        EulerAngles::new(a, b, g + PI),
        EulerAngles::new(a + PI, PI - b, PI - g),
        EulerAngles::new(a + PI, PI - b, TAU - g),
    ];

    shifted.map(|e| {
        let e = match settings.sense {
            RotationSense::Active => e,
            RotationSense::Passive => reverse_negate(e),
        };
        EulerAngles::new(
            wrap_two_pi(e.alpha),
            wrap_two_pi(e.beta),
            wrap_two_pi(e.gamma),
        )
    })
}
