use std::fmt;

use serde::Serialize;

use crate::session::EmulationSession;

/// Named point of the input script where RAM is captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Checkpoint {
    /// Before any input, used for seeding
    Start,
    /// Phrase row sample, 0-based
    Phrase(u8),
    /// Chain step sample, 1-based
    Chain(u8),
    /// After the chain steps, one song row in
    ChainEnd,
    /// Playback stopped
    Stopped,
    /// After a navigation chord, 0-based
    Screen(u8),
    /// After a cursor move, 0-based
    Cursor(u8),
    /// Playback restarted from the moved cursor
    Resumed,
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Checkpoint::Start => write!(f, "start"),
            Checkpoint::Phrase(i) => write!(f, "phrase[{}]", i),
            Checkpoint::Chain(i) => write!(f, "chain[{}]", i),
            Checkpoint::ChainEnd => write!(f, "chain-end"),
            Checkpoint::Stopped => write!(f, "stopped"),
            Checkpoint::Screen(i) => write!(f, "screen[{}]", i),
            Checkpoint::Cursor(i) => write!(f, "cursor[{}]", i),
            Checkpoint::Resumed => write!(f, "resumed"),
        }
    }
}

/// Immutable copy of working RAM at a checkpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Position in capture order
    pub index: usize,
    pub checkpoint: Checkpoint,
    bytes: Box<[u8]>,
}

impl Snapshot {
    pub fn new(index: usize, checkpoint: Checkpoint, bytes: impl Into<Box<[u8]>>) -> Self {
        Self {
            index,
            checkpoint,
            bytes: bytes.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether `pattern` is stored at `offset`; out-of-range reads never match
    pub fn matches_at(&self, offset: usize, pattern: &[u8]) -> bool {
        offset
            .checked_add(pattern.len())
            .and_then(|end| self.bytes.get(offset..end))
            .is_some_and(|found| found == pattern)
    }
}

/// Captures snapshots in order
#[derive(Debug, Default)]
pub struct SnapshotRecorder {
    snapshots: Vec<Snapshot>,
}

impl SnapshotRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the session's RAM and tag it with `checkpoint`
    pub fn capture<S: EmulationSession + ?Sized>(
        &mut self,
        session: &S,
        checkpoint: Checkpoint,
    ) -> &Snapshot {
        let index = self.snapshots.len();
        self.snapshots
            .push(Snapshot::new(index, checkpoint, session.snapshot_memory()));
        &self.snapshots[index]
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }
}
