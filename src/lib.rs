//! tview - NMR tensor analysis & orientation engine.
//!
//! The numerical core behind the tensor visualization: principal-axis
//! decomposition of symmetric second-rank tensors (magnetic shielding,
//! electric field gradient, spin-spin coupling), the eigenvalue ordering
//! conventions of the magnetic-resonance literature, Euler-angle extraction
//! between principal frames, and unit conversion to frequency units.
//!
//! Rendering, file parsing and the structure model live in the host
//! application; this crate only consumes 3x3 matrices and produces
//! eigenvalues, eigenvectors and Euler angles.

pub mod diagnostics;
pub mod error;
pub mod model;
pub mod physics;
pub mod utils;

pub use diagnostics::Advisory;
pub use error::TensorError;
pub use model::{
    Degeneracy, EulerAngles, EulerConvention, Invariants, OrderingConvention,
    OrientationSettings, RotationSense, Tensor,
};
pub use physics::{
    efg_to_frequency, equivalent_euler, equivalent_euler_between, euler_all, euler_between,
    isc_to_frequency, tensor_euler, EulerSolution, EulerSolutionSet,
};

#[cfg(feature = "parallel")]
pub use physics::euler_all_parallel;
