//! Trajectory output type.

use serde::{Deserialize, Serialize};

/// Terminal classification of a trajectory's final generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixationState {
    /// The tracked allele reached count 0
    Lost,
    /// The tracked allele reached count 2N
    Fixed,
    /// Both alleles still present
    Segregating,
}

/// An ordered sequence of allele counts, one per generation.
///
/// Produced fully computed by the simulator and immutable afterwards; every
/// count lies in `[0, 2N]` and the first entry is the configured initial
/// count. Trajectories are never empty (at least the initial generation is
/// always present).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trajectory {
    counts: Vec<u64>,
    allele_copies: u64,
}

impl Trajectory {
    pub(crate) fn new(counts: Vec<u64>, allele_copies: u64) -> Self {
        debug_assert!(!counts.is_empty());
        debug_assert!(counts.iter().all(|&c| c <= allele_copies));
        Self {
            counts,
            allele_copies,
        }
    }

    /// Number of generations in the trajectory.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Always false: a trajectory holds at least the initial generation.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Allele count at generation `index` (0-based), if in range.
    pub fn get(&self, index: usize) -> Option<u64> {
        self.counts.get(index).copied()
    }

    /// All allele counts in generation order.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Allele count in the first generation.
    pub fn initial_count(&self) -> u64 {
        self.counts[0]
    }

    /// Allele count in the last generation.
    pub fn final_count(&self) -> u64 {
        self.counts[self.counts.len() - 1]
    }

    /// Total allele copies in the population (2N).
    pub fn allele_copies(&self) -> u64 {
        self.allele_copies
    }

    /// Allele frequencies in generation order, each in `[0, 1]`.
    pub fn frequencies(&self) -> Vec<f64> {
        let copies = self.allele_copies as f64;
        self.counts.iter().map(|&c| c as f64 / copies).collect()
    }

    /// Classify the final generation.
    pub fn fixation_state(&self) -> FixationState {
        match self.final_count() {
            0 => FixationState::Lost,
            c if c == self.allele_copies => FixationState::Fixed,
            _ => FixationState::Segregating,
        }
    }

    /// First generation (0-based) at which the allele was lost or fixed.
    ///
    /// Absorption is permanent under pure drift, so every generation from
    /// this point on holds the same count. Returns `None` if the allele is
    /// still segregating at the end of the trajectory.
    pub fn absorption_time(&self) -> Option<usize> {
        self.counts
            .iter()
            .position(|&c| c == 0 || c == self.allele_copies)
    }

    /// Whether the allele was lost or fixed within the trajectory.
    pub fn is_absorbed(&self) -> bool {
        self.absorption_time().is_some()
    }

    /// Iterator over the allele counts.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, u64>> {
        self.counts.iter().copied()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = u64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
