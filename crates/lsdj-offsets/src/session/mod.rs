//! Emulation session interface.
//!
//! The emulator itself lives outside this crate. The resolver only needs to
//! boot a ROM, advance emulated time, hold buttons, watch for audio output
//! and copy out working RAM. Implementations release their emulator in
//! `Drop`, so dropping a session is its teardown.

#[cfg(test)]
pub mod mock;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::error::Result;

/// Game Boy joypad buttons
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Button {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

/// A booted emulator exclusively owned by one resolve call
pub trait EmulationSession {
    /// Run the emulator for `duration` of emulated time
    fn advance(&mut self, duration: Duration);

    /// Hold or release a button
    fn set_button(&mut self, button: Button, down: bool);

    /// Whether a non-silent audio sample was produced since the last
    /// [`clear_audio_signal`](Self::clear_audio_signal)
    fn audio_signal(&self) -> bool;

    fn clear_audio_signal(&mut self);

    /// Copy of the working RAM region. Must be a copy, never a live view.
    fn snapshot_memory(&self) -> Vec<u8>;
}

/// Boots sessions for the dynamic fallback
pub trait SessionFactory {
    type Session: EmulationSession;

    /// Boot `rom`, optionally restoring battery-backed state.
    ///
    /// Fails with [`Error::Initialization`](crate::Error::Initialization) when
    /// the emulator refuses the image.
    fn boot(&self, rom: &[u8], persisted_state: Option<&[u8]>) -> Result<Self::Session>;
}

impl<F: SessionFactory + ?Sized> SessionFactory for &F {
    type Session = F::Session;

    fn boot(&self, rom: &[u8], persisted_state: Option<&[u8]>) -> Result<Self::Session> {
        (**self).boot(rom, persisted_state)
    }
}
