//! Simulation parameters.
//!
//! This module provides the validated parameter set for a Wright-Fisher
//! drift simulation: population size, generation count, and the initial
//! count of the tracked allele.

use crate::errors::InvalidParameter;
use serde::{Deserialize, Serialize};

/// Parameters of a single Wright-Fisher drift simulation.
///
/// Constructed only through [`DriftParameters::new`], which validates all
/// constraints up front. A value of this type therefore always describes a
/// runnable simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftParameters {
    /// Number of diploid individuals in the population (N)
    population_size: u64,
    /// Total number of generations to produce, including the initial one
    generations: usize,
    /// Count of the tracked allele in the first generation
    initial_count: u64,
}

impl DriftParameters {
    /// Create a new validated parameter set.
    ///
    /// # Errors
    /// Returns [`InvalidParameter`] if `population_size` is zero, if
    /// `generations` is zero, or if `initial_count` exceeds the total
    /// allele pool of `2 * population_size` copies.
    pub fn new(
        population_size: u64,
        generations: usize,
        initial_count: u64,
    ) -> Result<Self, InvalidParameter> {
        // 2N must stay representable as u64
        if population_size == 0 || population_size > u64::MAX / 2 {
            return Err(InvalidParameter::PopulationSize(population_size));
        }
        if generations < 1 {
            return Err(InvalidParameter::Generations(generations));
        }
        let allele_copies = 2 * population_size;
        if initial_count > allele_copies {
            return Err(InvalidParameter::InitialCount {
                count: initial_count,
                allele_copies,
            });
        }
        Ok(Self {
            population_size,
            generations,
            initial_count,
        })
    }

    /// Number of diploid individuals (N).
    pub fn population_size(&self) -> u64 {
        self.population_size
    }

    /// Number of generations to produce, including the initial one.
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Count of the tracked allele in the first generation.
    pub fn initial_count(&self) -> u64 {
        self.initial_count
    }

    /// Total allele copies in the population (2N for a diploid population).
    ///
    /// This pool is fixed for the whole simulation: no migration or mutation
    /// ever changes it.
    pub fn allele_copies(&self) -> u64 {
        2 * self.population_size
    }

    /// Initial frequency of the tracked allele, in `[0, 1]`.
    pub fn initial_frequency(&self) -> f64 {
        self.initial_count as f64 / self.allele_copies() as f64
    }
}
