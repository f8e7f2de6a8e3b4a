//! Version-specific script constants.
//!
//! Looked up by parsed version through an ordered range table; the first
//! range containing the version wins. Builds without a parsable version use
//! the first row.

use std::time::Duration;

use serde::Serialize;
use strum::Display;

use crate::rom::SemVer;

/// Which persisted-state image a build boots with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum StateSlot {
    /// Save layout used before 9.1.4
    Legacy,
    Current,
}

/// Half-open version interval `[from, until)`; `None` bounds are open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionRange {
    pub from: Option<SemVer>,
    pub until: Option<SemVer>,
}

impl VersionRange {
    pub fn contains(&self, version: SemVer) -> bool {
        self.from.is_none_or(|from| version >= from)
            && self.until.is_none_or(|until| version < until)
    }
}

/// Constants that drive one scripted analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScriptProfile {
    /// Emulated time spent skipping the boot ROM before the first snapshot
    pub boot_settle: Duration,
    /// Delay after playback is confirmed before phrase sampling starts
    pub start_delay: Duration,
    /// Number of leading RAM bytes searched for candidates
    pub search_window: usize,
    pub state_slot: StateSlot,
}

const BOOT_SETTLE: Duration = Duration::from_millis(500);
const START_DELAY: Duration = Duration::from_millis(39);

/// Window size used until 8.2.1 grew the working set
pub const DEFAULT_SEARCH_WINDOW: usize = 0x400;
pub const EXTENDED_SEARCH_WINDOW: usize = 0x500;

static SCRIPT_PROFILES: [(VersionRange, ScriptProfile); 3] = [
    (
        VersionRange {
            from: None,
            until: Some(SemVer::new(8, 2, 1)),
        },
        ScriptProfile {
            boot_settle: BOOT_SETTLE,
            start_delay: START_DELAY,
            search_window: DEFAULT_SEARCH_WINDOW,
            state_slot: StateSlot::Legacy,
        },
    ),
    (
        VersionRange {
            from: Some(SemVer::new(8, 2, 1)),
            until: Some(SemVer::new(9, 1, 4)),
        },
        ScriptProfile {
            boot_settle: BOOT_SETTLE,
            start_delay: START_DELAY,
            search_window: EXTENDED_SEARCH_WINDOW,
            state_slot: StateSlot::Legacy,
        },
    ),
    (
        VersionRange {
            from: Some(SemVer::new(9, 1, 4)),
            until: None,
        },
        ScriptProfile {
            boot_settle: BOOT_SETTLE,
            start_delay: START_DELAY,
            search_window: EXTENDED_SEARCH_WINDOW,
            state_slot: StateSlot::Current,
        },
    ),
];

/// Script constants for a build
pub fn profile_for(version: Option<SemVer>) -> &'static ScriptProfile {
    let first = &SCRIPT_PROFILES[0].1;
    let Some(version) = version else {
        return first;
    };

    SCRIPT_PROFILES
        .iter()
        .find(|(range, _)| range.contains(version))
        .map(|(_, profile)| profile)
        .unwrap_or(first)
}
