//! Resolver configuration.
//!
//! ```ignore
//! use lsdj_offsets::ResolverConfig;
//! use std::time::Duration;
//!
//! let config = ResolverConfig::builder()
//!     .playback_timeout(Duration::from_secs(5))
//!     .current_state(std::fs::read("lsdj.sav")?)
//!     .build();
//! ```

use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::analysis::StateSlot;

/// Configuration for [`OffsetResolver`](crate::OffsetResolver)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// How long to wait for audio after pressing Start
    #[serde(rename = "playback_timeout_ms", deserialize_with = "millis")]
    pub playback_timeout: Duration,
    /// Emulated time advanced between audio checks
    #[serde(rename = "audio_poll_interval_ms", deserialize_with = "millis")]
    pub audio_poll_interval: Duration,
    /// Battery save booted with builds older than 9.1.4
    pub legacy_state: Option<Vec<u8>>,
    /// Battery save booted with 9.1.4 and later
    pub current_state: Option<Vec<u8>>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            playback_timeout: Duration::from_millis(2000),
            audio_poll_interval: Duration::from_millis(1),
            legacy_state: None,
            current_state: None,
        }
    }
}

impl ResolverConfig {
    pub fn builder() -> ResolverConfigBuilder {
        ResolverConfigBuilder::default()
    }

    /// Persisted state for a profile's save slot
    pub fn persisted_state(&self, slot: StateSlot) -> Option<&[u8]> {
        match slot {
            StateSlot::Legacy => self.legacy_state.as_deref(),
            StateSlot::Current => self.current_state.as_deref(),
        }
    }
}

fn millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_millis)
}

/// Builder for ResolverConfig
#[derive(Debug, Clone, Default)]
pub struct ResolverConfigBuilder {
    playback_timeout: Option<Duration>,
    audio_poll_interval: Option<Duration>,
    legacy_state: Option<Vec<u8>>,
    current_state: Option<Vec<u8>>,
}

impl ResolverConfigBuilder {
    pub fn playback_timeout(mut self, timeout: Duration) -> Self {
        self.playback_timeout = Some(timeout);
        self
    }

    pub fn audio_poll_interval(mut self, interval: Duration) -> Self {
        self.audio_poll_interval = Some(interval);
        self
    }

    pub fn legacy_state(mut self, state: impl Into<Vec<u8>>) -> Self {
        self.legacy_state = Some(state.into());
        self
    }

    pub fn current_state(mut self, state: impl Into<Vec<u8>>) -> Self {
        self.current_state = Some(state.into());
        self
    }

    pub fn build(self) -> ResolverConfig {
        let default = ResolverConfig::default();
        ResolverConfig {
            playback_timeout: self.playback_timeout.unwrap_or(default.playback_timeout),
            audio_poll_interval: self
                .audio_poll_interval
                .unwrap_or(default.audio_poll_interval),
            legacy_state: self.legacy_state,
            current_state: self.current_state,
        }
    }
}
