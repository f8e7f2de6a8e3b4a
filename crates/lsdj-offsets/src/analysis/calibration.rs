//! Calibration data for the scripted analysis.
//!
//! These byte patterns were measured against real LSDj builds and are
//! specific to its UI. They are data, not a general diffing heuristic.
//!
//! # Script timeline
//!
//! ```text
//!  boot ─► Start ─► [phrase x15] ─► [chain x3] ─► chain end ─► stop
//!            │        32 ms each     512 ms each                 │
//!            ▼                                                   ▼
//!     wait for audio                          [screen x4] ─► [cursor x3] ─► resume
//! ```

use std::time::Duration;

use super::{Checkpoint, Variable};

/// Number of phrase-level checkpoints
pub const PHRASE_STEPS: u8 = 15;
/// Number of chain-level checkpoints
pub const CHAIN_STEPS: u8 = 3;
/// Number of cursor-move checkpoints
pub const CURSOR_STEPS: u8 = 3;

/// Emulated time for one phrase row to advance
pub const PHRASE_STEP: Duration = Duration::from_millis(32);
/// One full phrase (16 rows)
pub const CHAIN_STEP: Duration = Duration::from_millis(32 * 16);
/// Single button tap (held for half, released for half)
pub const PRESS_DURATION: Duration = Duration::from_millis(40);
/// Per-button hold time for chord presses
pub const CHORD_STEP: Duration = Duration::from_millis(50);
/// Settle time after resuming playback
pub const RESUME_SETTLE: Duration = Duration::from_millis(10);

/// Screen indicator `[x, y]` after each navigation chord
/// (Select+Up, Select+Right, Select+Down, Select+Down)
pub const SCREEN_PATTERNS: [[u8; 2]; 4] = [[0x00, 0xFF], [0x01, 0xFF], [0x01, 0x00], [0x01, 0x01]];

/// Song row playback resumes from once the cursor has moved down three rows
pub const RESUMED_SONG_POSITION: u8 = 3;

const ZERO_4: &[u8] = &[0x00; 4];
const ZERO_2: &[u8] = &[0x00; 2];
const IDLE_4: &[u8] = &[0xFF; 4];

/// Pattern a variable must show in the pre-script snapshot.
///
/// Idle counters read as all-ones before playback starts; flags, cursor and
/// screen read as zero.
pub fn seed_pattern(variable: Variable) -> &'static [u8] {
    match variable {
        Variable::Active | Variable::Cursor => ZERO_4,
        Variable::Screen => ZERO_2,
        Variable::Song | Variable::Chain | Variable::Phrase => IDLE_4,
    }
}

/// One expected byte pattern at a checkpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    pub variable: Variable,
    pub pattern: Vec<u8>,
}

impl Expectation {
    fn channels(variable: Variable, value: u8) -> Self {
        Self {
            variable,
            pattern: vec![value; 4],
        }
    }

    fn pair(variable: Variable, pattern: [u8; 2]) -> Self {
        Self {
            variable,
            pattern: pattern.to_vec(),
        }
    }
}

/// Expected values at a checkpoint, i.e. which variables it disambiguates
pub fn expectations(checkpoint: Checkpoint) -> Vec<Expectation> {
    match checkpoint {
        Checkpoint::Start => Vec::new(),
        Checkpoint::Phrase(i) => {
            let mut expected = vec![
                Expectation::channels(Variable::Phrase, i + 1),
                Expectation::channels(Variable::Active, 1),
            ];
            // The first phrase sample doubles as chain 0 / song row 0
            if i == 0 {
                expected.push(Expectation::channels(Variable::Chain, 0));
                expected.push(Expectation::channels(Variable::Song, 0));
            }
            expected
        }
        Checkpoint::Chain(i) => vec![
            Expectation::channels(Variable::Chain, i),
            Expectation::channels(Variable::Active, 1),
        ],
        Checkpoint::ChainEnd => vec![Expectation::channels(Variable::Song, 1)],
        Checkpoint::Stopped => vec![Expectation::channels(Variable::Active, 0)],
        Checkpoint::Screen(i) => match SCREEN_PATTERNS.get(i as usize) {
            Some(pattern) => vec![Expectation::pair(Variable::Screen, *pattern)],
            None => Vec::new(),
        },
        Checkpoint::Cursor(i) => vec![Expectation::pair(Variable::Cursor, [i + 1, i + 1])],
        Checkpoint::Resumed => vec![Expectation::channels(
            Variable::Song,
            RESUMED_SONG_POSITION,
        )],
    }
}
