// src/physics/mod.rs

pub mod euler;
pub mod orientation;
pub mod units;

// Re-export commonly used items
pub use euler::{equivalent_euler, euler_from_basis, normalize_euler, rotation_from_euler};
pub use orientation::{
    equivalent_euler_between, euler_all, euler_between, rotation_between, tensor_euler,
    EulerSolution, EulerSolutionSet,
};
pub use units::{efg_to_frequency, isc_to_frequency, EFG_AU_TO_HZ, ISC_K_TO_HZ};

#[cfg(feature = "parallel")]
pub use orientation::euler_all_parallel;
