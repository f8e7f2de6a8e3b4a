use tracing::{debug, warn};

use super::Variable;
use super::filter::CandidateSet;
use crate::error::{AmbiguousOffsets, Error, Result, UnresolvedVariable};
use crate::offset::MemoryOffsets;

/// Build an offset record when every candidate set has exactly one offset.
///
/// Otherwise fails with every unresolved variable, in synthesis order.
pub fn synthesize(sets: &[CandidateSet]) -> Result<MemoryOffsets> {
    let resolved = |variable: Variable| -> std::result::Result<u32, UnresolvedVariable> {
        let set = sets.iter().find(|set| set.variable == variable);
        let single = set.and_then(CandidateSet::single);
        match single.and_then(|offset| u32::try_from(offset).ok()) {
            Some(offset) => Ok(offset),
            None => Err(UnresolvedVariable {
                variable,
                remaining: set.map_or(0, CandidateSet::len),
            }),
        }
    };

    let mut unresolved = Vec::new();
    let mut pick = |variable: Variable| match resolved(variable) {
        Ok(offset) => Some(offset),
        Err(failure) => {
            warn!(
                "Could not resolve {}: {} candidates",
                failure.variable, failure.remaining
            );
            unresolved.push(failure);
            None
        }
    };

    let active = pick(Variable::Active);
    let song = pick(Variable::Song);
    let chain = pick(Variable::Chain);
    let phrase = pick(Variable::Phrase);
    let cursor = pick(Variable::Cursor);
    let screen = pick(Variable::Screen);

    match (active, song, chain, phrase, cursor, screen) {
        (Some(active), Some(song), Some(chain), Some(phrase), Some(cursor), Some(screen)) => {
            let offsets =
                MemoryOffsets::from_bases(active, song, chain, phrase, cursor, Some(screen));
            debug!("Synthesized offsets: {:?}", offsets);
            Ok(offsets)
        }
        _ => Err(Error::AmbiguousOffsets(AmbiguousOffsets { unresolved })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::recorder::{Checkpoint, Snapshot};

    /// Seed a set from a snapshot with the seed pattern planted at `offsets`
    fn set_at(variable: Variable, offsets: &[usize]) -> CandidateSet {
        let mut bytes = vec![0x5A; 0x400];
        let pattern = crate::analysis::calibration::seed_pattern(variable);
        for &offset in offsets {
            bytes[offset..offset + pattern.len()].copy_from_slice(pattern);
        }
        CandidateSet::seed(variable, &Snapshot::new(0, Checkpoint::Start, bytes), 0x400)
    }

    fn resolved_sets() -> Vec<CandidateSet> {
        vec![
            set_at(Variable::Active, &[232]),
            set_at(Variable::Song, &[512]),
            set_at(Variable::Chain, &[380]),
            set_at(Variable::Phrase, &[364]),
            set_at(Variable::Cursor, &[887]),
            set_at(Variable::Screen, &[820]),
        ]
    }

    #[test]
    fn test_synthesize_all_resolved() {
        let offsets = synthesize(&resolved_sets()).unwrap();
        assert_eq!(offsets.channels[0].active, 232);
        assert_eq!(offsets.channels[3].song_position, 515);
        assert_eq!(offsets.channels[1].chain_position, 381);
        assert_eq!(offsets.channels[2].phrase_position, 366);
        assert_eq!(offsets.cursor_y, 888);
        assert_eq!(offsets.screen_x, Some(820));
        assert_eq!(offsets.screen_y, Some(821));
        assert!(offsets.is_consistent());
    }

    #[test]
    fn test_synthesize_reports_every_failure_in_order() {
        let mut sets = resolved_sets();
        sets[4] = set_at(Variable::Cursor, &[100, 200]);
        sets[1] = set_at(Variable::Song, &[]);

        let err = synthesize(&sets).unwrap_err();
        let Error::AmbiguousOffsets(ambiguous) = err else {
            panic!("expected ambiguity");
        };
        assert_eq!(ambiguous.names(), vec!["song", "cursor"]);
        assert_eq!(ambiguous.unresolved[0].remaining, 0);
        assert_eq!(ambiguous.unresolved[1].remaining, 2);
        assert!(!ambiguous.contains(Variable::Active));
    }

    #[test]
    fn test_synthesize_missing_set_counts_as_empty() {
        let sets: Vec<CandidateSet> = resolved_sets()
            .into_iter()
            .filter(|set| set.variable != Variable::Screen)
            .collect();
        let err = synthesize(&sets).unwrap_err();
        assert_eq!(err.ambiguous_variables(), Some(vec!["screen"]));
    }
}
