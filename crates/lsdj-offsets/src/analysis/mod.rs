//! Dynamic offset discovery.
//!
//! Boot-time analysis for builds the catalog does not know: drive a scripted
//! interaction, snapshot RAM at each checkpoint, narrow per-variable
//! candidate sets against calibrated patterns and synthesize the result.

pub mod calibration;
mod driver;
mod filter;
pub mod profile;
mod recorder;
mod synth;

use std::time::Duration;

use serde::Serialize;
use strum::{Display, IntoStaticStr};
use tracing::info;

use crate::error::Result;
use crate::offset::MemoryOffsets;
use crate::rom::RomIdentity;
use crate::session::EmulationSession;

pub use driver::ScriptedInputDriver;
pub use filter::{CandidateFilter, CandidateSet};
pub use profile::{ScriptProfile, StateSlot, profile_for};
pub use recorder::{Checkpoint, Snapshot, SnapshotRecorder};
pub use synth::synthesize;

/// Runtime variables located by the analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Variable {
    Active,
    Song,
    Chain,
    Phrase,
    Cursor,
    Screen,
}

impl Variable {
    /// Synthesis order
    pub const ALL: [Variable; 6] = [
        Variable::Active,
        Variable::Song,
        Variable::Chain,
        Variable::Phrase,
        Variable::Cursor,
        Variable::Screen,
    ];

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// State of one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    pub identity: RomIdentity,
    pub profile: &'static ScriptProfile,
    pub playback_timeout: Duration,
    pub audio_poll_interval: Duration,
    /// Set once the first audible sample is seen
    pub playback_detected: bool,
}

impl AnalysisContext {
    pub fn new(
        identity: RomIdentity,
        profile: &'static ScriptProfile,
        playback_timeout: Duration,
        audio_poll_interval: Duration,
    ) -> Self {
        Self {
            identity,
            profile,
            playback_timeout,
            audio_poll_interval,
            playback_detected: false,
        }
    }
}

/// Run the full script against a booted session and synthesize offsets
pub fn analyze<S: EmulationSession + ?Sized>(
    session: &mut S,
    context: &mut AnalysisContext,
) -> Result<MemoryOffsets> {
    let snapshots = ScriptedInputDriver::new(session, context).run()?;
    let filter = CandidateFilter::run(&snapshots, context.profile.search_window);
    let offsets = synthesize(filter.sets())?;

    info!(
        "Discovered offsets for {}: active={}, song={}, chain={}, phrase={}, cursor={}, screen={:?}",
        context.identity.version_label(),
        offsets.channels[0].active,
        offsets.channels[0].song_position,
        offsets.channels[0].chain_position,
        offsets.channels[0].phrase_position,
        offsets.cursor_x,
        offsets.screen_x
    );
    Ok(offsets)
}
