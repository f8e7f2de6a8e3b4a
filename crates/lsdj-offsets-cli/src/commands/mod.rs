//! CLI command implementations.

pub mod catalog;
pub mod hex_utils;
pub mod hexdump;
pub mod info;
pub mod inspect;
pub mod lookup;

use std::path::Path;

use anyhow::{Context, Result};
use lsdj_offsets::RomIdentity;

/// Read a ROM image and identify it, using the file name as version hint
pub fn load_rom(path: &Path) -> Result<(Vec<u8>, RomIdentity)> {
    let rom = std::fs::read(path).with_context(|| format!("Failed to read ROM {:?}", path))?;
    let filename = path.file_name().and_then(|name| name.to_str());
    let identity = RomIdentity::from_rom(&rom, filename);
    Ok((rom, identity))
}
