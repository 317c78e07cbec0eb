//! Shuffle collaborators that turn mapper output into groups

use crate::transpose::{group_by_key, EmittedPair, Group};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Groups emitted pairs by key
///
/// Implementations must put every pair into exactly one group. Neither
/// the order of groups nor the order of members is part of the contract.
pub trait Grouper: Send + Sync {
    fn group(&self, pairs: Vec<EmittedPair>) -> Vec<Group>;
}

/// In-process grouping by key
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyGrouper;

impl Grouper for KeyGrouper {
    fn group(&self, pairs: Vec<EmittedPair>) -> Vec<Group> {
        group_by_key(pairs)
    }
}

/// Groups by key, then scrambles group and member order
///
/// Stands in for a real shuffle service that delivers in arbitrary
/// order. The permutation is fixed by the seed.
#[derive(Debug, Clone, Copy)]
pub struct ShuffledGrouper {
    seed: u64,
}

impl ShuffledGrouper {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Grouper for ShuffledGrouper {
    fn group(&self, pairs: Vec<EmittedPair>) -> Vec<Group> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut groups = group_by_key(pairs);
        for group in &mut groups {
            group.members.shuffle(&mut rng);
        }
        groups.shuffle(&mut rng);
        groups
    }
}
