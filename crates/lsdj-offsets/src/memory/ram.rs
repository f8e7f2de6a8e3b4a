use serde::Serialize;
use strum::{Display, EnumString, IntoStaticStr};

use super::MemoryAccess;
use crate::error::{Error, Result};
use crate::offset::MemoryOffsets;

/// Tempo reported when the layout has no tempo offset
pub const DEFAULT_TEMPO: u8 = 240;

/// LSDj screen, decoded from the screen indicator pair
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum ScreenType {
    Unknown,
    Song,
    Chain,
    Phrase,
    Instrument,
    Table,
    Project,
    Wave,
    Synth,
    Groove,
}

impl ScreenType {
    /// Decode a screen indicator `(x, y)`.
    ///
    /// The map has three rows: `y = 0xFF` (project row), `y = 0` (song row)
    /// and `y = 1` (groove).
    pub fn from_indicator(x: u8, y: u8) -> Self {
        match (y, x) {
            (0xFF, 0 | 1) => ScreenType::Project,
            (0xFF, 2) => ScreenType::Wave,
            (0xFF, 3) => ScreenType::Synth,
            (0xFF, 4) => ScreenType::Table,
            (0, 0) => ScreenType::Song,
            (0, 1) => ScreenType::Chain,
            (0, 2) => ScreenType::Phrase,
            (0, 3) => ScreenType::Instrument,
            (0, 4) => ScreenType::Table,
            (1, _) => ScreenType::Groove,
            _ => ScreenType::Unknown,
        }
    }
}

/// Live RAM viewed through a resolved layout
#[derive(Debug, Clone)]
pub struct Ram<M> {
    data: M,
    offsets: MemoryOffsets,
}

impl<M: MemoryAccess> Ram<M> {
    /// Wrap a memory region, checking every offset lies inside it
    pub fn new(data: M, offsets: MemoryOffsets) -> Result<Self> {
        let max = offsets.max_offset();
        if usize::try_from(max).map_or(true, |max| max >= data.len()) {
            return Err(Error::OffsetOutOfRange {
                offset: max,
                len: data.len(),
            });
        }
        Ok(Self { data, offsets })
    }

    pub fn offsets(&self) -> &MemoryOffsets {
        &self.offsets
    }

    pub fn into_inner(self) -> M {
        self.data
    }

    fn byte(&self, offset: u32) -> u8 {
        usize::try_from(offset)
            .ok()
            .and_then(|offset| self.data.read_u8(offset))
            .unwrap_or(0)
    }

    fn set_byte(&mut self, offset: u32, value: u8) {
        if let Ok(offset) = usize::try_from(offset) {
            self.data.write_u8(offset, value);
        }
    }

    fn channel_byte(&self, channel: usize, field: fn(&crate::offset::ChannelOffsets) -> u32) -> u8 {
        self.offsets
            .channels
            .get(channel)
            .map_or(0, |ch| self.byte(field(ch)))
    }

    pub fn is_channel_active(&self, channel: usize) -> bool {
        self.channel_byte(channel, |ch| ch.active) > 0
    }

    pub fn song_position(&self, channel: usize) -> u8 {
        self.channel_byte(channel, |ch| ch.song_position)
    }

    pub fn chain_position(&self, channel: usize) -> u8 {
        self.channel_byte(channel, |ch| ch.chain_position)
    }

    pub fn phrase_position(&self, channel: usize) -> u8 {
        self.channel_byte(channel, |ch| ch.phrase_position)
    }

    /// Song cursor as `(x, y)`
    pub fn cursor(&self) -> (u8, u8) {
        (self.cursor_x(), self.cursor_y())
    }

    pub fn set_cursor(&mut self, (x, y): (u8, u8)) {
        self.set_cursor_x(x);
        self.set_byte(self.offsets.cursor_y, y);
    }

    pub fn cursor_x(&self) -> u8 {
        self.byte(self.offsets.cursor_x)
    }

    pub fn set_cursor_x(&mut self, x: u8) {
        self.set_byte(self.offsets.cursor_x, x);
    }

    pub fn cursor_y(&self) -> u8 {
        self.byte(self.offsets.cursor_y)
    }

    pub fn screen_x(&self) -> Option<u8> {
        self.offsets.screen_x.map(|offset| self.byte(offset))
    }

    pub fn screen_y(&self) -> Option<u8> {
        self.offsets.screen_y.map(|offset| self.byte(offset))
    }

    /// Current screen; `Unknown` when the layout has no screen indicator
    pub fn screen(&self) -> ScreenType {
        match (self.screen_x(), self.screen_y()) {
            (Some(x), Some(y)) => ScreenType::from_indicator(x, y),
            _ => ScreenType::Unknown,
        }
    }

    pub fn tempo(&self) -> u8 {
        self.offsets
            .tempo
            .map_or(DEFAULT_TEMPO, |offset| self.byte(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offset::OffsetDesc;

    fn ram() -> Ram<Vec<u8>> {
        let offsets = OffsetDesc::new(232, 364, 380, 512, 887, 888)
            .with_screen(820, 821)
            .expand();
        Ram::new(vec![0u8; 0x1000], offsets).unwrap()
    }

    #[test]
    fn test_rejects_short_region() {
        let offsets = OffsetDesc::new(232, 364, 380, 512, 887, 888).expand();
        let err = Ram::new(vec![0u8; 888], offsets).unwrap_err();
        assert!(matches!(
            err,
            Error::OffsetOutOfRange {
                offset: 888,
                len: 888
            }
        ));
    }

    #[test]
    fn test_channel_getters() {
        let mut data = vec![0u8; 0x1000];
        data[233] = 1;
        data[514] = 7;
        data[380] = 3;
        data[367] = 15;
        let offsets = ram().offsets().clone();
        let ram = Ram::new(data, offsets).unwrap();

        assert!(!ram.is_channel_active(0));
        assert!(ram.is_channel_active(1));
        assert_eq!(ram.song_position(2), 7);
        assert_eq!(ram.chain_position(0), 3);
        assert_eq!(ram.phrase_position(3), 15);
        assert!(!ram.is_channel_active(9));
    }

    #[test]
    fn test_cursor_round_trip() {
        let mut ram = ram();
        ram.set_cursor((2, 5));
        assert_eq!(ram.cursor(), (2, 5));
        ram.set_cursor_x(4);
        assert_eq!(ram.cursor_x(), 4);

        let data = ram.into_inner();
        assert_eq!(data[887], 4);
        assert_eq!(data[888], 5);
    }

    #[test]
    fn test_screen_decoding() {
        let mut data = vec![0u8; 0x1000];
        data[820] = 2;
        data[821] = 0;
        let offsets = ram().offsets().clone();
        let ram = Ram::new(data, offsets).unwrap();
        assert_eq!(ram.screen(), ScreenType::Phrase);

        assert_eq!(ScreenType::from_indicator(1, 0xFF), ScreenType::Project);
        assert_eq!(ScreenType::from_indicator(4, 0xFF), ScreenType::Table);
        assert_eq!(ScreenType::from_indicator(7, 1), ScreenType::Groove);
        assert_eq!(ScreenType::from_indicator(5, 0), ScreenType::Unknown);
        assert_eq!(ScreenType::Instrument.to_string(), "instrument");
    }

    #[test]
    fn test_missing_screen_and_tempo() {
        let offsets = OffsetDesc::new(232, 364, 380, 512, 887, 888).expand();
        let ram = Ram::new(vec![0u8; 0x1000], offsets).unwrap();
        assert_eq!(ram.screen_x(), None);
        assert_eq!(ram.screen(), ScreenType::Unknown);
        assert_eq!(ram.tempo(), DEFAULT_TEMPO);
    }
}
