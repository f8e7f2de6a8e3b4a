//! Scripted input driver.
//!
//! Plays the fixed LSDj interaction script against a session and records a
//! snapshot at every checkpoint. The checkpoints are captured in a fixed
//! order; snapshots are taken before the following time step.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::AnalysisContext;
use super::calibration::{
    CHAIN_STEP, CHAIN_STEPS, CHORD_STEP, CURSOR_STEPS, PHRASE_STEP, PHRASE_STEPS, PRESS_DURATION,
    RESUME_SETTLE,
};
use super::recorder::{Checkpoint, Snapshot, SnapshotRecorder};
use crate::error::{Error, Result};
use crate::session::{Button, EmulationSession};

/// Smallest audio poll step; a zero interval would never reach the timeout
const MIN_POLL_INTERVAL: Duration = Duration::from_micros(100);

/// Navigation chords, each followed by a screen checkpoint
const SCREEN_CHORDS: [[Button; 2]; 4] = [
    [Button::Select, Button::Up],
    [Button::Select, Button::Right],
    [Button::Select, Button::Down],
    [Button::Select, Button::Down],
];

/// Chords returning to the song screen, not sampled
const RETURN_CHORDS: [[Button; 2]; 2] = [[Button::Select, Button::Up], [Button::Select, Button::Left]];

pub struct ScriptedInputDriver<'a, S: EmulationSession + ?Sized> {
    session: &'a mut S,
    context: &'a mut AnalysisContext,
    recorder: SnapshotRecorder,
}

impl<'a, S: EmulationSession + ?Sized> ScriptedInputDriver<'a, S> {
    pub fn new(session: &'a mut S, context: &'a mut AnalysisContext) -> Self {
        Self {
            session,
            context,
            recorder: SnapshotRecorder::new(),
        }
    }

    /// Run the whole script, returning snapshots in capture order
    pub fn run(mut self) -> Result<Vec<Snapshot>> {
        debug!("Skipping boot ROM ({:?})", self.context.profile.boot_settle);
        self.session.advance(self.context.profile.boot_settle);
        self.capture(Checkpoint::Start);

        self.start_playback()?;
        self.sample_phrases();
        self.sample_chains();
        self.stop_playback();
        self.sample_screens();
        self.sample_cursor();
        self.resume_playback();

        info!(
            "Recorded {} snapshots for {}",
            self.recorder.len(),
            self.context.identity.version_label()
        );
        Ok(self.recorder.into_snapshots())
    }

    fn capture(&mut self, checkpoint: Checkpoint) {
        let snapshot = self.recorder.capture(&*self.session, checkpoint);
        debug!(
            "Captured {} as snapshot #{} ({} bytes)",
            checkpoint,
            snapshot.index,
            snapshot.len()
        );
    }

    /// Hold Start until the first audible sample, then release it
    fn start_playback(&mut self) -> Result<()> {
        self.session.clear_audio_signal();
        self.session.set_button(Button::Start, true);

        let timeout = self.context.playback_timeout;
        let poll = self.context.audio_poll_interval.max(MIN_POLL_INTERVAL);
        let mut waited = Duration::ZERO;

        while !self.session.audio_signal() {
            if waited >= timeout {
                self.session.set_button(Button::Start, false);
                warn!(
                    "No audio from {} after {:?}",
                    self.context.identity.version_label(),
                    timeout
                );
                return Err(Error::PlaybackNotDetected {
                    version: self.context.identity.version_label(),
                    timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                });
            }
            self.session.advance(poll);
            waited += poll;
        }

        self.context.playback_detected = true;
        debug!("Playback detected after {:?}", waited);

        self.session.set_button(Button::Start, false);
        self.session.advance(self.context.profile.start_delay);
        Ok(())
    }

    fn sample_phrases(&mut self) {
        for i in 0..PHRASE_STEPS {
            self.capture(Checkpoint::Phrase(i));
            self.session.advance(PHRASE_STEP);
        }
    }

    fn sample_chains(&mut self) {
        for i in 1..=CHAIN_STEPS {
            self.capture(Checkpoint::Chain(i));
            self.session.advance(CHAIN_STEP);
        }
        self.capture(Checkpoint::ChainEnd);
    }

    fn stop_playback(&mut self) {
        self.press(Button::Start, PRESS_DURATION);
        self.capture(Checkpoint::Stopped);
    }

    fn sample_screens(&mut self) {
        for (i, chord) in (0u8..).zip(SCREEN_CHORDS.iter()) {
            self.chord(chord);
            self.capture(Checkpoint::Screen(i));
        }
        for chord in &RETURN_CHORDS {
            self.chord(chord);
        }
    }

    fn sample_cursor(&mut self) {
        for i in 0..CURSOR_STEPS {
            self.press(Button::Down, PRESS_DURATION);
            self.press(Button::Right, PRESS_DURATION);
            self.capture(Checkpoint::Cursor(i));
        }
    }

    fn resume_playback(&mut self) {
        self.press(Button::Start, PRESS_DURATION);
        self.session.advance(RESUME_SETTLE);
        self.capture(Checkpoint::Resumed);
    }

    /// Tap a button: held for half of `duration`, released for the rest
    fn press(&mut self, button: Button, duration: Duration) {
        let half = duration / 2;
        self.session.set_button(button, true);
        self.session.advance(half);
        self.session.set_button(button, false);
        self.session.advance(duration - half);
    }

    /// Press buttons one after another, then release them all together
    fn chord(&mut self, buttons: &[Button]) {
        for &button in buttons {
            self.session.set_button(button, true);
            self.session.advance(CHORD_STEP);
        }
        for &button in buttons {
            self.session.set_button(button, false);
        }
        self.session.advance(CHORD_STEP);
    }
}
