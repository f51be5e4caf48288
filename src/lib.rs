//! Driftsim: a Wright-Fisher simulator of neutral allele-frequency drift.
//!
//! This library models genetic drift of a single bi-allelic locus in a
//! finite, randomly-mating diploid population. Each generation, the count of
//! the tracked allele is resampled by a single binomial draw over the 2N
//! allele copies of the next generation, weighted by the current frequency.

pub mod errors;
pub mod prelude;
pub mod simulation;
pub mod storage;

// Re-export commonly used types for convenient external access.
//
// These types form the public, stable surface that most consumers of the
// library will use when running simulations or loading saved trajectories.
pub use simulation::{simulate, DriftParameters, Simulation, Trajectory};
