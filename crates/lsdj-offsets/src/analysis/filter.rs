//! Candidate filtering.
//!
//! Every variable starts from the offsets whose bytes in the seed snapshot
//! match its seed pattern. Later snapshots only ever remove candidates.

use serde::Serialize;
use tracing::{debug, trace};

use super::Variable;
use super::calibration::{expectations, seed_pattern};
use super::recorder::Snapshot;

/// Offsets still possible for one variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateSet {
    pub variable: Variable,
    offsets: Vec<usize>,
}

impl CandidateSet {
    /// Scan the first `window` bytes of `snapshot` for the variable's seed pattern.
    ///
    /// Matches may overlap; a pattern may run past the window end.
    pub fn seed(variable: Variable, snapshot: &Snapshot, window: usize) -> Self {
        let pattern = seed_pattern(variable);
        let offsets = (0..window.min(snapshot.len()))
            .filter(|&offset| snapshot.matches_at(offset, pattern))
            .collect();

        Self { variable, offsets }
    }

    /// Keep only offsets where `snapshot` holds `pattern`; returns the number removed
    pub fn retain_matching(&mut self, snapshot: &Snapshot, pattern: &[u8]) -> usize {
        let before = self.offsets.len();
        self.offsets
            .retain(|&offset| snapshot.matches_at(offset, pattern));
        before - self.offsets.len()
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The offset if exactly one remains
    pub fn single(&self) -> Option<usize> {
        match self.offsets.as_slice() {
            [offset] => Some(*offset),
            _ => None,
        }
    }
}

/// Candidate sets for every tracked variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFilter {
    sets: Vec<CandidateSet>,
}

impl CandidateFilter {
    /// Seed all variables from the pre-script snapshot
    pub fn seeded(start: &Snapshot, window: usize) -> Self {
        let sets: Vec<CandidateSet> = Variable::ALL
            .iter()
            .map(|&variable| CandidateSet::seed(variable, start, window))
            .collect();

        for set in &sets {
            debug!("Seeded {} with {} candidates", set.variable, set.len());
        }
        Self { sets }
    }

    /// Narrow with the expectations attached to the snapshot's checkpoint
    pub fn apply(&mut self, snapshot: &Snapshot) {
        for expectation in expectations(snapshot.checkpoint) {
            if let Some(set) = self.set_mut(expectation.variable) {
                let removed = set.retain_matching(snapshot, &expectation.pattern);
                trace!(
                    "{}: {} removed {}, {} left",
                    snapshot.checkpoint,
                    set.variable,
                    removed,
                    set.len()
                );
            }
        }
    }

    /// Seed from the first snapshot and fold the rest over it
    pub fn run(snapshots: &[Snapshot], window: usize) -> Self {
        let Some((start, rest)) = snapshots.split_first() else {
            return Self::empty();
        };

        rest.iter().fold(Self::seeded(start, window), |mut filter, snapshot| {
            filter.apply(snapshot);
            filter
        })
    }

    fn empty() -> Self {
        Self {
            sets: Variable::ALL
                .iter()
                .map(|&variable| CandidateSet {
                    variable,
                    offsets: Vec::new(),
                })
                .collect(),
        }
    }

    pub fn set(&self, variable: Variable) -> Option<&CandidateSet> {
        self.sets.iter().find(|set| set.variable == variable)
    }

    fn set_mut(&mut self, variable: Variable) -> Option<&mut CandidateSet> {
        self.sets.iter_mut().find(|set| set.variable == variable)
    }

    pub fn sets(&self) -> &[CandidateSet] {
        &self.sets
    }

    pub fn into_sets(self) -> Vec<CandidateSet> {
        self.sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::recorder::Checkpoint;

    #[test]
    fn test_seed_finds_overlapping_matches() {
        let mut bytes = vec![0x5A; 32];
        bytes[4..10].fill(0);
        let snapshot = Snapshot::new(0, Checkpoint::Start, bytes);

        let set = CandidateSet::seed(Variable::Active, &snapshot, 32);
        assert_eq!(set.offsets(), &[4, 5, 6]);

        let screen = CandidateSet::seed(Variable::Screen, &snapshot, 32);
        assert_eq!(screen.offsets(), &[4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_seed_respects_window() {
        let mut bytes = vec![0x5A; 32];
        bytes[20..24].fill(0xFF);
        let snapshot = Snapshot::new(0, Checkpoint::Start, bytes);

        assert!(CandidateSet::seed(Variable::Song, &snapshot, 16).is_empty());
        // starting inside the window is enough
        assert_eq!(
            CandidateSet::seed(Variable::Song, &snapshot, 21).offsets(),
            &[20]
        );
        // window larger than the snapshot
        assert_eq!(
            CandidateSet::seed(Variable::Song, &snapshot, 0x500).offsets(),
            &[20]
        );
    }

    #[test]
    fn test_retain_matching() {
        let mut bytes = vec![0x5A; 16];
        bytes[0..4].fill(0);
        bytes[8..12].fill(0);
        let start = Snapshot::new(0, Checkpoint::Start, bytes.clone());
        let mut set = CandidateSet::seed(Variable::Active, &start, 16);
        assert_eq!(set.len(), 2);
        assert_eq!(set.single(), None);

        bytes[8..12].fill(1);
        let later = Snapshot::new(1, Checkpoint::Phrase(0), bytes);
        assert_eq!(set.retain_matching(&later, &[1; 4]), 1);
        assert_eq!(set.single(), Some(8));
    }

    #[test]
    fn test_filtering_is_monotonic() {
        let mut bytes = vec![0u8; 64];
        bytes[32..48].fill(0xFF);
        let start = Snapshot::new(0, Checkpoint::Start, bytes.clone());
        let mut filter = CandidateFilter::seeded(&start, 64);

        let checkpoints = [
            Checkpoint::Phrase(0),
            Checkpoint::Phrase(1),
            Checkpoint::Chain(1),
            Checkpoint::ChainEnd,
            Checkpoint::Stopped,
            Checkpoint::Screen(0),
            Checkpoint::Cursor(0),
            Checkpoint::Resumed,
        ];
        for (i, checkpoint) in checkpoints.into_iter().enumerate() {
            // shuffle a few bytes each round
            bytes[i * 3] = (i as u8) + 1;
            bytes[33 + i] = i as u8;
            let snapshot = Snapshot::new(i + 1, checkpoint, bytes.clone());

            let before = filter.clone();
            filter.apply(&snapshot);
            for (old, new) in before.sets().iter().zip(filter.sets()) {
                assert!(
                    new.offsets().iter().all(|o| old.offsets().contains(o)),
                    "{} grew at {}",
                    new.variable,
                    checkpoint
                );
            }
        }
    }

    #[test]
    fn test_run_without_snapshots_is_empty() {
        let filter = CandidateFilter::run(&[], 0x400);
        assert_eq!(filter.sets().len(), Variable::ALL.len());
        assert!(filter.sets().iter().all(CandidateSet::is_empty));
    }

    #[test]
    fn test_checkpoint_only_touches_its_variables() {
        let bytes = vec![0u8; 16];
        let start = Snapshot::new(0, Checkpoint::Start, bytes.clone());
        let mut filter = CandidateFilter::seeded(&start, 16);
        let cursor_before = filter.set(Variable::Cursor).unwrap().len();

        filter.apply(&Snapshot::new(1, Checkpoint::Stopped, vec![0x5A; 16]));
        assert!(filter.set(Variable::Active).unwrap().is_empty());
        assert_eq!(filter.set(Variable::Cursor).unwrap().len(), cursor_before);
    }
}
