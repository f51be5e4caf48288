//! Storage module for persisting trajectories.
//!
//! Trajectories are written as minimal tab-delimited text files, the format
//! downstream plotting tools load back: a single header row, one allele
//! count per generation, no row index column, no quoting.

mod tabular;

pub use tabular::{read_replicates, read_trajectory, write_replicates, write_trajectory};
