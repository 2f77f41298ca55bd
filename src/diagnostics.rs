// src/diagnostics.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-fatal conditions raised while solving for an orientation.
///
/// Orientation is mathematically ambiguous for degenerate tensors, so these
/// are conventions being applied, not failures: the solver still returns a
/// documented best-effort result. Callers decide whether to surface them;
/// they are also mirrored on the `log` warn channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Advisory {
    /// All three eigenvalues coincide; no orientation is defined and the
    /// angles are fixed to (0, 0, 0).
    IsotropicTensor,
    /// Two eigenvalues coincide; one Euler angle is a free parameter and
    /// has been fixed to 0 (non-negative root taken for the closed forms).
    AxiallySymmetric,
    /// Reconstructing the tensor from the extracted angles did not match
    /// the eigenvector frame, even after the one retry with the negated
    /// basis. The angles from the retry are returned as-is.
    SelfCheckMismatch {
        /// Largest relative entry deviation between the two reconstructions.
        deviation: f64,
    },
    /// Both tensors share eigenvalues and principal axes; the relative
    /// orientation is the identity.
    IdenticalTensors,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Advisory::IsotropicTensor => {
                write!(f, "isotropic tensor: orientation undefined, returning (0, 0, 0)")
            }
            Advisory::AxiallySymmetric => {
                write!(f, "axially symmetric tensor: free angle fixed to 0")
            }
            Advisory::SelfCheckMismatch { deviation } => {
                write!(f, "euler self-check mismatch after retry (deviation {:.3e})", deviation)
            }
            Advisory::IdenticalTensors => {
                write!(f, "tensors are identical: relative orientation is (0, 0, 0)")
            }
        }
    }
}

impl Advisory {
    /// Mirror the advisory on the log channel (the host viewer routes this
    /// into its log panel).
    pub fn emit(&self) {
        log::warn!("{}", self);
    }
}
