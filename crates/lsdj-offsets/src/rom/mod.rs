//! ROM identification: embedded title, content hash and version metadata.

pub mod layout;
mod version;

use serde::Serialize;
use tracing::debug;
use xxhash_rust::xxh32::xxh32;

use crate::error::{Error, Result};

pub use version::{SemVer, version_from_filename, version_from_name};

/// Read the cartridge title from the ROM header.
///
/// Stops at the first NUL; non-printable bytes are dropped.
pub fn rom_name(rom: &[u8]) -> String {
    let start = layout::header::TITLE_START.min(rom.len());
    let end = layout::header::TITLE_END.min(rom.len());
    let field = &rom[start..end];
    let len = memchr::memchr(0, field).unwrap_or(field.len());

    field[..len]
        .iter()
        .filter(|b| b.is_ascii_graphic() || **b == b' ')
        .map(|&b| b as char)
        .collect::<String>()
        .trim()
        .to_string()
}

/// XXH32 over the first bank of the image (or the whole image if shorter)
pub fn content_hash(rom: &[u8]) -> u32 {
    let len = layout::hash::HASHED_LEN.min(rom.len());
    xxh32(&rom[..len], layout::hash::SEED)
}

/// Reject images that are not a full-size cartridge
pub fn check_rom_size(rom: &[u8]) -> Result<()> {
    if rom.len() != layout::image::ROM_SIZE {
        return Err(Error::InvalidRomSize {
            expected: layout::image::ROM_SIZE,
            actual: rom.len(),
        });
    }
    Ok(())
}

/// Everything the resolver knows about a build before touching an emulator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RomIdentity {
    /// Title from the cartridge header
    pub name: String,
    /// Content hash of the first bank
    pub hash: u32,
    /// Version parsed from the title, or from the filename hint
    pub version: Option<SemVer>,
    /// Release tag parsed from the filename hint (empty when absent)
    pub tag: String,
    /// Filename the caller supplied, if any
    pub filename: Option<String>,
}

impl RomIdentity {
    pub fn from_rom(rom: &[u8], filename: Option<&str>) -> Self {
        let name = rom_name(rom);
        let hash = content_hash(rom);
        let from_filename = filename.and_then(version_from_filename);

        let version = version_from_name(&name).or(from_filename.as_ref().map(|(v, _)| *v));
        let tag = from_filename.map(|(_, tag)| tag).unwrap_or_default();

        debug!(
            "ROM identity: name={:?}, hash={}, version={:?}, tag={:?}",
            name, hash, version, tag
        );

        Self {
            name,
            hash,
            version,
            tag,
            filename: filename.map(str::to_string),
        }
    }

    /// Human readable version, `unknown` when none could be parsed
    pub fn version_label(&self) -> String {
        match self.version {
            Some(version) if self.tag.is_empty() => version.to_string(),
            Some(version) => format!("{} - {}", version, self.tag),
            None => "unknown".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rom_with_title(title: &[u8]) -> Vec<u8> {
        let mut rom = vec![0u8; layout::image::ROM_SIZE];
        let start = layout::header::TITLE_START;
        rom[start..start + title.len()].copy_from_slice(title);
        rom
    }

    #[test]
    fn test_rom_name_stops_at_nul() {
        let rom = rom_with_title(b"LSDj-v9.2.6\0\0\0\0\x80");
        assert_eq!(rom_name(&rom), "LSDj-v9.2.6");
    }

    #[test]
    fn test_rom_name_drops_cgb_flag() {
        let rom = rom_with_title(b"LSDj-v4.0.4ABCD\x80");
        assert_eq!(rom_name(&rom), "LSDj-v4.0.4ABCD");
        assert_eq!(rom_name(&[0u8; 16]), "");
    }

    #[test]
    fn test_content_hash_covers_first_bank_only() {
        let mut rom = rom_with_title(b"LSDj-v9.2.6");
        let original = content_hash(&rom);

        rom[layout::image::BANK_SIZE] = 0xAA;
        assert_eq!(content_hash(&rom), original);

        rom[layout::image::BANK_SIZE - 1] = 0xAA;
        assert_ne!(content_hash(&rom), original);
    }

    #[test]
    fn test_content_hash_is_xxh32() {
        assert_eq!(content_hash(&[]), 0x02CC_5D05);
    }

    #[test]
    fn test_check_rom_size() {
        assert!(check_rom_size(&vec![0u8; layout::image::ROM_SIZE]).is_ok());
        let err = check_rom_size(&[0u8; 32]).unwrap_err();
        assert!(err.is_initialization());
    }

    #[test]
    fn test_identity_prefers_title_version() {
        let rom = rom_with_title(b"LSDj-v9.2.6");
        let identity = RomIdentity::from_rom(&rom, Some("lsdj9_1_0-stable.gb"));
        assert_eq!(identity.version, Some(SemVer::new(9, 2, 6)));
        assert_eq!(identity.tag, "stable");
        assert_eq!(identity.version_label(), "9.2.6 - stable");
    }

    #[test]
    fn test_identity_falls_back_to_filename() {
        let rom = rom_with_title(b"LSDJ");
        let identity = RomIdentity::from_rom(&rom, Some("lsdj8_2_1.gb"));
        assert_eq!(identity.version, Some(SemVer::new(8, 2, 1)));
        assert!(identity.tag.is_empty());

        let unknown = RomIdentity::from_rom(&rom, None);
        assert_eq!(unknown.version, None);
        assert_eq!(unknown.version_label(), "unknown");
    }
}
