use serde::{Deserialize, Serialize};

/// Number of playback channels (PU1, PU2, WAV, NOI)
pub const CHANNEL_COUNT: usize = 4;

/// Per-channel byte offsets into working RAM
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelOffsets {
    pub active: u32,
    pub song_position: u32,
    pub chain_position: u32,
    pub phrase_position: u32,
}

/// Resolved locations of the tracked runtime variables.
///
/// Per-channel fields are contiguous (`base..base + 4`), and every
/// coordinate pair stores Y directly after X.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoryOffsets {
    pub channels: [ChannelOffsets; CHANNEL_COUNT],
    pub cursor_x: u32,
    pub cursor_y: u32,
    /// Screen indicator, absent for catalog layouts that never recorded it
    pub screen_x: Option<u32>,
    pub screen_y: Option<u32>,
    /// Tempo byte, not located by any current layout
    pub tempo: Option<u32>,
}

impl MemoryOffsets {
    /// Expand four per-channel bases plus the cursor/screen X offsets
    pub fn from_bases(
        active: u32,
        song: u32,
        chain: u32,
        phrase: u32,
        cursor_x: u32,
        screen_x: Option<u32>,
    ) -> Self {
        let mut channels = [ChannelOffsets::default(); CHANNEL_COUNT];
        for (i, channel) in (0u32..).zip(channels.iter_mut()) {
            *channel = ChannelOffsets {
                active: active + i,
                song_position: song + i,
                chain_position: chain + i,
                phrase_position: phrase + i,
            };
        }

        Self {
            channels,
            cursor_x,
            cursor_y: cursor_x + 1,
            screen_x,
            screen_y: screen_x.map(|x| x + 1),
            tempo: None,
        }
    }

    /// Check the contiguity invariants
    pub fn is_consistent(&self) -> bool {
        let base = self.channels[0];
        let channels_ok = (0u32..).zip(self.channels.iter()).all(|(i, ch)| {
            ch.active == base.active + i
                && ch.song_position == base.song_position + i
                && ch.chain_position == base.chain_position + i
                && ch.phrase_position == base.phrase_position + i
        });

        let screen_ok = match (self.screen_x, self.screen_y) {
            (Some(x), Some(y)) => y == x + 1,
            (None, None) => true,
            _ => false,
        };

        channels_ok && self.cursor_y == self.cursor_x + 1 && screen_ok
    }

    /// Largest offset referenced, for bounds checks against a RAM region
    pub fn max_offset(&self) -> u32 {
        let last = self.channels[CHANNEL_COUNT - 1];
        [
            last.active,
            last.song_position,
            last.chain_position,
            last.phrase_position,
            self.cursor_y,
            self.screen_y.unwrap_or(0),
            self.tempo.unwrap_or(0),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

/// Compact layout description stored in the catalog.
///
/// Field order follows the catalog rows: active, phrase, chain, song,
/// cursor X, cursor Y, then the optional screen pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OffsetDesc {
    pub active: u32,
    pub phrase: u32,
    pub chain: u32,
    pub song: u32,
    pub cursor_x: u32,
    pub cursor_y: u32,
    pub screen_x: Option<u32>,
    pub screen_y: Option<u32>,
}

impl OffsetDesc {
    pub const fn new(
        active: u32,
        phrase: u32,
        chain: u32,
        song: u32,
        cursor_x: u32,
        cursor_y: u32,
    ) -> Self {
        Self {
            active,
            phrase,
            chain,
            song,
            cursor_x,
            cursor_y,
            screen_x: None,
            screen_y: None,
        }
    }

    #[cfg(test)]
    pub const fn with_screen(mut self, screen_x: u32, screen_y: u32) -> Self {
        self.screen_x = Some(screen_x);
        self.screen_y = Some(screen_y);
        self
    }

    /// Expand into a full offset record
    pub fn expand(&self) -> MemoryOffsets {
        let mut offsets = MemoryOffsets::from_bases(
            self.active,
            self.song,
            self.chain,
            self.phrase,
            self.cursor_x,
            self.screen_x,
        );
        offsets.cursor_y = self.cursor_y;
        offsets.screen_y = self.screen_y;
        offsets
    }
}
