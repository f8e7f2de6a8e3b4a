//! Scripted stand-in for an LSDj emulator.
//!
//! Models just enough of the tracker for the input script: Start toggles
//! playback, Select plus a direction moves between screens, bare directions
//! move the song cursor, and the position counters tick at a fixed rate.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{Button, EmulationSession, SessionFactory};
use crate::error::{Error, Result};
use crate::offset::MemoryOffsets;

const BACKGROUND: u8 = 0x5A;
const IDLE: u8 = 0xFF;
/// Offset of the first phrase row tick after playback starts
const FIRST_TICK_MS: u128 = 8;
const ROW_MS: u128 = 32;

/// Where the simulated build keeps its variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockConfig {
    pub ram_len: usize,
    pub active: usize,
    pub song: usize,
    pub chain: usize,
    pub phrase: usize,
    pub cursor: usize,
    pub screen: usize,
    /// Second copy of the cursor bytes
    pub cursor_mirror: Option<usize>,
    /// Whether playback ever produces sound
    pub audio: bool,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            ram_len: 0x8000,
            active: 232,
            song: 512,
            chain: 380,
            phrase: 364,
            cursor: 887,
            screen: 820,
            cursor_mirror: None,
            audio: true,
        }
    }
}

impl MockConfig {
    pub fn expected_offsets(&self) -> MemoryOffsets {
        let at = |offset: usize| u32::try_from(offset).unwrap();
        MemoryOffsets::from_bases(
            at(self.active),
            at(self.song),
            at(self.chain),
            at(self.phrase),
            at(self.cursor),
            Some(at(self.screen)),
        )
    }
}

#[derive(Debug)]
pub struct ScriptedSession {
    config: MockConfig,
    ram: Vec<u8>,
    held: HashSet<Button>,
    elapsed: Duration,
    playing: bool,
    played: Duration,
    start_row: u8,
    cursor: (u8, u8),
    screen: (u8, u8),
    audio: bool,
    live: Option<Arc<AtomicUsize>>,
}

impl ScriptedSession {
    pub fn new(config: MockConfig) -> Self {
        let mut session = Self {
            ram: vec![BACKGROUND; config.ram_len],
            config,
            held: HashSet::new(),
            elapsed: Duration::ZERO,
            playing: false,
            played: Duration::ZERO,
            start_row: 0,
            cursor: (0, 0),
            screen: (0, 0),
            audio: false,
            live: None,
        };
        session.render();
        session
    }

    fn with_live_counter(mut self, live: Arc<AtomicUsize>) -> Self {
        live.fetch_add(1, Ordering::SeqCst);
        self.live = Some(live);
        self
    }

    /// Overwrite a RAM byte directly
    pub fn poke(&mut self, offset: usize, value: u8) {
        self.ram[offset] = value;
    }

    pub fn is_held(&self, button: Button) -> bool {
        self.held.contains(&button)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Total emulated time
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn on_press(&mut self, button: Button) {
        let select = self.is_held(Button::Select);
        match button {
            Button::Start => {
                self.playing = !self.playing;
                if self.playing {
                    self.played = Duration::ZERO;
                    self.start_row = self.cursor.1;
                }
            }
            Button::Up if select => self.screen.1 = self.screen.1.wrapping_sub(1),
            Button::Down if select => self.screen.1 = self.screen.1.wrapping_add(1),
            Button::Left if select => self.screen.0 = self.screen.0.wrapping_sub(1),
            Button::Right if select => self.screen.0 = self.screen.0.wrapping_add(1),
            Button::Down => self.cursor.1 = self.cursor.1.wrapping_add(1),
            Button::Right => self.cursor.0 = self.cursor.0.wrapping_add(1),
            Button::Up => self.cursor.1 = self.cursor.1.wrapping_sub(1),
            Button::Left => self.cursor.0 = self.cursor.0.wrapping_sub(1),
            Button::A | Button::B | Button::Select => {}
        }
    }

    /// Phrase row, chain step and song row as stored in RAM
    fn counters(&self) -> (u8, u8, u8) {
        let steps = self.played.as_millis().saturating_sub(FIRST_TICK_MS) / ROW_MS;
        let chains = steps / 16;
        let phrase = (steps % 16) as u8;
        let chain = (chains % 4) as u8;
        let song = self.start_row.wrapping_add((chains / 4) as u8);
        (phrase, chain, song)
    }

    fn render(&mut self) {
        let (phrase, chain, song, active) = if self.playing {
            let (phrase, chain, song) = self.counters();
            (phrase, chain, song, 1)
        } else {
            (IDLE, IDLE, IDLE, 0)
        };

        let config = &self.config;
        let cursor = [self.cursor.0, self.cursor.1, 0, 0];
        let mut writes: Vec<(usize, Vec<u8>)> = vec![
            (config.active, vec![active; 4]),
            (config.phrase, vec![phrase; 4]),
            (config.chain, vec![chain; 4]),
            (config.song, vec![song; 4]),
            (config.cursor, cursor.to_vec()),
            (config.screen, vec![self.screen.0, self.screen.1]),
        ];
        if let Some(mirror) = config.cursor_mirror {
            writes.push((mirror, cursor.to_vec()));
        }

        for (offset, bytes) in writes {
            self.ram[offset..offset + bytes.len()].copy_from_slice(&bytes);
        }
    }
}

impl EmulationSession for ScriptedSession {
    fn advance(&mut self, duration: Duration) {
        self.elapsed += duration;
        if self.playing {
            self.played += duration;
            if self.config.audio && !self.played.is_zero() {
                self.audio = true;
            }
        }
        self.render();
    }

    fn set_button(&mut self, button: Button, down: bool) {
        if down {
            if self.held.insert(button) {
                self.on_press(button);
            }
        } else {
            self.held.remove(&button);
        }
        self.render();
    }

    fn audio_signal(&self) -> bool {
        self.audio
    }

    fn clear_audio_signal(&mut self) {
        self.audio = false;
    }

    fn snapshot_memory(&self) -> Vec<u8> {
        self.ram.clone()
    }
}

impl Drop for ScriptedSession {
    fn drop(&mut self) {
        if let Some(live) = &self.live {
            live.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

/// Boots [`ScriptedSession`]s and keeps count of them
#[derive(Debug, Clone, Default)]
pub struct MockFactory {
    pub config: MockConfig,
    /// Reject every boot with an initialization error
    pub reject: bool,
    live: Arc<AtomicUsize>,
    boots: Arc<AtomicUsize>,
    states: Arc<Mutex<Vec<Option<Vec<u8>>>>>,
}

impl MockFactory {
    pub fn new(config: MockConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    /// Sessions booted and not yet dropped
    pub fn live_sessions(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    pub fn boots(&self) -> usize {
        self.boots.load(Ordering::SeqCst)
    }

    /// Persisted state handed to each boot, in order
    pub fn persisted_states(&self) -> Vec<Option<Vec<u8>>> {
        self.states.lock().unwrap().clone()
    }
}

impl SessionFactory for MockFactory {
    type Session = ScriptedSession;

    fn boot(&self, _rom: &[u8], persisted_state: Option<&[u8]>) -> Result<Self::Session> {
        self.boots.fetch_add(1, Ordering::SeqCst);
        self.states
            .lock()
            .unwrap()
            .push(persisted_state.map(<[u8]>::to_vec));

        if self.reject {
            return Err(Error::Initialization("mock emulator rejected ROM".to_string()));
        }
        Ok(ScriptedSession::new(self.config.clone()).with_live_counter(self.live.clone()))
    }
}

/// Factory for paths that must never reach an emulator
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBootFactory;

impl SessionFactory for NoBootFactory {
    type Session = ScriptedSession;

    fn boot(&self, _rom: &[u8], _persisted_state: Option<&[u8]>) -> Result<Self::Session> {
        panic!("emulator booted on a path that should not need one");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_tick_while_playing() {
        let mut session = ScriptedSession::new(MockConfig::default());
        let config = MockConfig::default();
        assert_eq!(session.snapshot_memory()[config.phrase], IDLE);

        session.set_button(Button::Start, true);
        session.advance(Duration::from_millis(40));
        let ram = session.snapshot_memory();
        assert_eq!(ram[config.active], 1);
        assert_eq!(ram[config.phrase], 1);
        assert_eq!(ram[config.song], 0);
        assert!(session.audio_signal());
    }

    #[test]
    fn test_select_chords_move_screen_not_cursor() {
        let config = MockConfig::default();
        let mut session = ScriptedSession::new(config.clone());
        session.set_button(Button::Select, true);
        session.set_button(Button::Up, true);
        session.set_button(Button::Up, false);
        session.set_button(Button::Select, false);

        let ram = session.snapshot_memory();
        assert_eq!(&ram[config.screen..config.screen + 2], &[0x00, 0xFF]);
        assert_eq!(&ram[config.cursor..config.cursor + 2], &[0, 0]);

        session.set_button(Button::Down, true);
        let ram = session.snapshot_memory();
        assert_eq!(ram[config.cursor + 1], 1);
    }

    #[test]
    fn test_factory_tracks_live_sessions() {
        let factory = MockFactory::new(MockConfig::default());
        let session = factory.boot(&[], Some(&[1u8, 2][..])).unwrap();
        assert_eq!(factory.live_sessions(), 1);
        drop(session);
        assert_eq!(factory.live_sessions(), 0);
        assert_eq!(factory.boots(), 1);
        assert_eq!(factory.persisted_states(), vec![Some(vec![1, 2])]);
    }
}
