//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use driftsim::prelude::*;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let params = DriftParameters::new(50, 100, 20).unwrap();
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
//! let trajectory = simulate(&params, &mut rng);
//! assert_eq!(trajectory.len(), 100);
//! ```

pub use crate::errors::{InvalidParameter, StorageError};
pub use crate::simulation::{
    run_replicates, simulate, DriftParameters, FixationState, Simulation, Trajectory,
};
pub use crate::storage::{read_replicates, read_trajectory, write_replicates, write_trajectory};
