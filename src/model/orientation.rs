// src/model/orientation.rs

use crate::model::conventions::{EulerConvention, OrderingConvention, RotationSense};
use crate::utils::linalg::EPS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered (alpha, beta, gamma) triple in radians.
///
/// A triple has no meaning on its own; it is always produced and consumed
/// together with an [`EulerConvention`], a [`RotationSense`] and the
/// eigenvalue ordering used to build the principal axis system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl EulerAngles {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    /// The zero triple (identity rotation).
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// The same triple expressed in degrees, as `[alpha, beta, gamma]`.
    pub fn to_degrees(&self) -> [f64; 3] {
        [
            self.alpha.to_degrees(),
            self.beta.to_degrees(),
            self.gamma.to_degrees(),
        ]
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.alpha, self.beta, self.gamma]
    }

    /// True if all three angles agree within `tol` radians.
    pub fn close_to(&self, other: &EulerAngles, tol: f64) -> bool {
        (self.alpha - other.alpha).abs() <= tol
            && (self.beta - other.beta).abs() <= tol
            && (self.gamma - other.gamma).abs() <= tol
    }
}

impl fmt::Display for EulerAngles {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, g] = self.to_degrees();
        write!(f, "({:.2}°, {:.2}°, {:.2}°)", a, b, g)
    }
}

/// Settings controlling how an orientation is solved and reported.
///
/// Hosts keep one of these per view and pass it to every solver call, the
/// same way render settings travel alongside a scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientationSettings {
    pub convention: EulerConvention,
    pub sense: RotationSense,
    pub ordering: OrderingConvention,
    /// Relative tolerance for degeneracy detection and self-checks.
    pub tolerance: f64,
}

impl Default for OrientationSettings {
    fn default() -> Self {
        Self {
            convention: EulerConvention::Zyz,
            sense: RotationSense::Active,
            ordering: OrderingConvention::Increasing,
            tolerance: EPS,
        }
    }
}

impl OrientationSettings {
    pub fn with_convention(mut self, convention: EulerConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn with_sense(mut self, sense: RotationSense) -> Self {
        self.sense = sense;
        self
    }

    pub fn with_ordering(mut self, ordering: OrderingConvention) -> Self {
        self.ordering = ordering;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_degrees_conversion() {
        let e = EulerAngles::new(PI, PI / 2.0, 0.0);
        let deg = e.to_degrees();
        assert!((deg[0] - 180.0).abs() < 1e-10);
        assert!((deg[1] - 90.0).abs() < 1e-10);
        assert!((deg[2]).abs() < 1e-10);
    }

    #[test]
    fn test_settings_builder() {
        let s = OrientationSettings::default()
            .with_convention(EulerConvention::Zxz)
            .with_sense(RotationSense::Passive)
            .with_ordering(OrderingConvention::Haeberlen);
        assert_eq!(s.convention, EulerConvention::Zxz);
        assert_eq!(s.sense, RotationSense::Passive);
        assert_eq!(s.ordering, OrderingConvention::Haeberlen);
        assert_eq!(s.tolerance, EPS);
    }

    #[test]
    fn test_serde_roundtrip() {
        let s = OrientationSettings::default().with_ordering(OrderingConvention::Nqr);
        let json = serde_json::to_string(&s).unwrap();
        let back: OrientationSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
