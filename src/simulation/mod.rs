//! Wright-Fisher drift simulation.
//!
//! This module provides the simulation parameters, the binomial-resampling
//! engine, the immutable trajectory output type, and a parallel runner for
//! independent replicate trajectories.

mod engine;
mod parameters;
mod replicates;
mod trajectory;

pub use engine::{simulate, Simulation};
pub use parameters::DriftParameters;
pub use replicates::run_replicates;
pub use trajectory::{FixationState, Trajectory};
