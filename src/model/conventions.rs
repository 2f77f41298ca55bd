// src/model/conventions.rs

use crate::error::TensorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// --- Enums ---
// These are plain configuration values; hosts store them in their session
// files, hence the serde derives.

/// Eigenvalue ordering applied to a tensor's principal components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderingConvention {
    /// Ascending eigenvalues. The base ordering.
    Increasing,
    /// Descending eigenvalues.
    Decreasing,
    /// By distance from the isotropic value, with components 1 and 2
    /// swapped. Standard in NMR literature.
    Haeberlen,
    /// By distance from the isotropic value, no swap. Standard in NQR
    /// literature.
    Nqr,
}

impl Default for OrderingConvention {
    fn default() -> Self {
        OrderingConvention::Increasing
    }
}

/// Axis sequence of the three elemental rotations in an Euler decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EulerConvention {
    Zyz,
    Zxz,
}

impl Default for EulerConvention {
    fn default() -> Self {
        EulerConvention::Zyz
    }
}

/// Active rotations move the object in a fixed frame; passive rotations
/// move the frame. The two are related by matrix inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationSense {
    Active,
    Passive,
}

impl Default for RotationSense {
    fn default() -> Self {
        RotationSense::Active
    }
}

// --- String forms ---
// Hosts configure conventions with the lowercase names used throughout the
// NMR file formats; parsing is where an unsupported convention is rejected.

impl FromStr for OrderingConvention {
    type Err = TensorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "increasing" => Ok(OrderingConvention::Increasing),
            "decreasing" => Ok(OrderingConvention::Decreasing),
            "haeberlen" => Ok(OrderingConvention::Haeberlen),
            "nqr" => Ok(OrderingConvention::Nqr),
            other => Err(TensorError::UnsupportedConvention(other.to_string())),
        }
    }
}

impl FromStr for EulerConvention {
    type Err = TensorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zyz" => Ok(EulerConvention::Zyz),
            "zxz" => Ok(EulerConvention::Zxz),
            other => Err(TensorError::UnsupportedConvention(other.to_string())),
        }
    }
}

impl FromStr for RotationSense {
    type Err = TensorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(RotationSense::Active),
            "passive" => Ok(RotationSense::Passive),
            other => Err(TensorError::UnsupportedConvention(other.to_string())),
        }
    }
}

impl fmt::Display for OrderingConvention {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            OrderingConvention::Increasing => "increasing",
            OrderingConvention::Decreasing => "decreasing",
            OrderingConvention::Haeberlen => "haeberlen",
            OrderingConvention::Nqr => "nqr",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for EulerConvention {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EulerConvention::Zyz => write!(f, "zyz"),
            EulerConvention::Zxz => write!(f, "zxz"),
        }
    }
}

impl fmt::Display for RotationSense {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RotationSense::Active => write!(f, "active"),
            RotationSense::Passive => write!(f, "passive"),
        }
    }
}
