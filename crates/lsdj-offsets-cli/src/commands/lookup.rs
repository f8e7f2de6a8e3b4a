//! Lookup command implementation.
//!
//! Resolves offsets from static data only: catalog hash and version rows,
//! then baked layouts. Analysis needs an emulator backend and is not
//! available from the CLI.

use std::path::Path;

use anyhow::{Result, bail};
use lsdj_offsets::{
    MemoryOffsets, OffsetDump, ResolveSource, RomIdentity, lookup_baked, lookup_catalog,
};
use owo_colors::OwoColorize;
use tracing::info;

use super::hex_utils::format_offset;
use super::load_rom;

/// Static resolution for an identity
pub fn resolve_static(identity: &RomIdentity) -> Option<(MemoryOffsets, ResolveSource)> {
    lookup_catalog(identity)
        .or_else(|| lookup_baked(identity).map(|offsets| (offsets, ResolveSource::Baked)))
}

/// Run the lookup command
pub fn run(rom_path: &Path, json: bool, output: Option<&Path>) -> Result<()> {
    let (_, identity) = load_rom(rom_path)?;

    let Some((offsets, source)) = resolve_static(&identity) else {
        bail!(
            "{} ({}, hash {}) is not in the catalog",
            rom_path.display(),
            identity.version_label(),
            identity.hash
        );
    };
    info!("Resolved {} by {}", identity.version_label(), source);

    let dump = OffsetDump::new(&identity, source, &offsets, None);
    if let Some(path) = output {
        dump.save(path)?;
        println!("Offsets saved to: {}", path.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else if output.is_none() {
        print_table(&identity, source, &offsets);
    }

    Ok(())
}

fn print_table(identity: &RomIdentity, source: ResolveSource, offsets: &MemoryOffsets) {
    println!(
        "{} {} (by {})",
        identity.name.bold(),
        identity.version_label(),
        source.green()
    );
    println!();
    println!("{:<8} {:>7} {:>7} {:>7} {:>7}", "", "active", "song", "chain", "phrase");
    for (i, ch) in offsets.channels.iter().enumerate() {
        println!(
            "{:<8} {:>7} {:>7} {:>7} {:>7}",
            format!("ch{}", i + 1),
            format_offset(ch.active),
            format_offset(ch.song_position),
            format_offset(ch.chain_position),
            format_offset(ch.phrase_position)
        );
    }
    println!();
    println!(
        "cursor   {} / {}",
        format_offset(offsets.cursor_x),
        format_offset(offsets.cursor_y)
    );
    match offsets.screen_x.zip(offsets.screen_y) {
        Some((x, y)) => println!("screen   {} / {}", format_offset(x), format_offset(y)),
        None => println!("screen   {}", "unknown".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lsdj_offsets::SemVer;
    use tempfile::TempDir;

    fn identity(hash: u32, version: Option<SemVer>) -> RomIdentity {
        RomIdentity {
            name: "LSDj".to_string(),
            hash,
            version,
            tag: String::new(),
            filename: None,
        }
    }

    #[test]
    fn test_resolve_static_order() {
        let (_, source) = resolve_static(&identity(1007349763, None)).unwrap();
        assert_eq!(source, ResolveSource::Hash);

        let (_, source) = resolve_static(&identity(1, Some(SemVer::new(9, 2, 6)))).unwrap();
        assert_eq!(source, ResolveSource::Version);

        assert!(resolve_static(&identity(1, Some(SemVer::new(42, 0, 0)))).is_none());
        assert!(resolve_static(&identity(1, None)).is_none());
    }

    #[test]
    fn test_run_writes_json() {
        let dir = TempDir::new().unwrap();
        let rom = dir.path().join("lsdj9_1_4-stable.gb");
        std::fs::write(&rom, vec![0u8; 0x4000]).unwrap();
        let out = dir.path().join("offsets.json");

        run(&rom, false, Some(out.as_path())).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["source"], "version");
        assert_eq!(json["version"], "9.1.4 - stable");
    }

    #[test]
    fn test_run_unknown_rom_fails() {
        let dir = TempDir::new().unwrap();
        let rom = dir.path().join("mystery.gb");
        std::fs::write(&rom, vec![0u8; 0x4000]).unwrap();
        assert!(run(&rom, false, None).is_err());
    }
}
