//! Simulation engine for Wright-Fisher drift.
//!
//! This module provides the core binomial-resampling recurrence, both as a
//! free function taking a caller-owned random source and as a stepwise
//! engine that owns its generator.

use crate::simulation::{DriftParameters, Trajectory};
use rand::{Rng, SeedableRng};
use rand_distr::{Binomial, Distribution};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Sample the allele count of the next generation.
///
/// Each of the 2N allele copies in the offspring generation is an
/// independent choice of parental allele, with replacement, proportional to
/// the current frequency: one draw from `Binomial(2N, current / 2N)`. At the
/// absorbing boundaries the draw is deterministic (all probability mass at 0
/// or at 2N) without any special casing.
fn next_count<R: Rng + ?Sized>(current: u64, allele_copies: u64, rng: &mut R) -> u64 {
    let p = current as f64 / allele_copies as f64;

    // Construction only fails for p outside [0, 1]; a ratio of in-range
    // counts cannot leave that interval.
    match Binomial::new(allele_copies, p) {
        Ok(binomial) => binomial.sample(rng),
        Err(_) => current,
    }
}

/// Simulate a full drift trajectory with a caller-supplied random source.
///
/// The first generation is fixed to the configured initial count; each later
/// generation is derived from its predecessor by a single binomial draw (see
/// [`DriftParameters`] for the constraints, which are enforced before this
/// function can be called). The returned trajectory has exactly
/// `params.generations()` entries.
///
/// Passing an explicitly seeded generator makes the result reproducible:
/// identical parameters and identical seed give a bit-identical trajectory.
pub fn simulate<R: Rng + ?Sized>(params: &DriftParameters, rng: &mut R) -> Trajectory {
    let allele_copies = params.allele_copies();
    let mut counts = Vec::with_capacity(params.generations());
    counts.push(params.initial_count());

    for _ in 1..params.generations() {
        let current = counts[counts.len() - 1];
        counts.push(next_count(current, allele_copies, rng));
    }

    Trajectory::new(counts, allele_copies)
}

/// Stepwise drift simulation engine.
///
/// Owns its random number generator (Xoshiro256++, seeded from an explicit
/// value or from entropy) and builds the trajectory one generation at a
/// time. [`simulate`] is the one-shot equivalent for callers that manage
/// their own generator.
#[derive(Debug)]
pub struct Simulation {
    /// Validated simulation parameters
    params: DriftParameters,
    /// Allele counts produced so far (always at least the initial one)
    counts: Vec<u64>,
    /// Random number generator (using Xoshiro256++ for better performance)
    rng: Xoshiro256PlusPlus,
}

impl Simulation {
    /// Create a new simulation, seeded explicitly or from entropy.
    pub fn new(params: DriftParameters, seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };

        let mut counts = Vec::with_capacity(params.generations());
        counts.push(params.initial_count());

        Self {
            params,
            counts,
            rng,
        }
    }

    /// Get the simulation parameters.
    pub fn params(&self) -> &DriftParameters {
        &self.params
    }

    /// Number of generations produced so far (at least 1).
    pub fn generation(&self) -> usize {
        self.counts.len()
    }

    /// Allele count in the most recent generation.
    pub fn current_count(&self) -> u64 {
        self.counts[self.counts.len() - 1]
    }

    /// Whether the configured number of generations has been produced.
    pub fn is_complete(&self) -> bool {
        self.counts.len() >= self.params.generations()
    }

    /// Whether the allele has been lost or fixed so far.
    pub fn is_absorbed(&self) -> bool {
        let current = self.current_count();
        current == 0 || current == self.params.allele_copies()
    }

    /// Advance by one generation.
    ///
    /// A no-op once the configured generation count has been produced, so
    /// repeated calls past the end are harmless.
    pub fn step(&mut self) {
        if self.is_complete() {
            return;
        }
        let next = next_count(
            self.current_count(),
            self.params.allele_copies(),
            &mut self.rng,
        );
        self.counts.push(next);
    }

    /// Advance by up to `generations` generations.
    pub fn run_for(&mut self, generations: usize) {
        for _ in 0..generations {
            if self.is_complete() {
                break;
            }
            self.step();
        }
    }

    /// Run to the configured number of generations.
    pub fn run(&mut self) {
        while !self.is_complete() {
            self.step();
        }
    }

    /// Snapshot of the counts produced so far as an immutable trajectory.
    pub fn trajectory(&self) -> Trajectory {
        Trajectory::new(self.counts.clone(), self.params.allele_copies())
    }

    /// Consume the engine and return the trajectory produced so far.
    pub fn into_trajectory(self) -> Trajectory {
        Trajectory::new(self.counts, self.params.allele_copies())
    }
}
