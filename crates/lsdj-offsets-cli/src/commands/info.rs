//! Info command implementation.

use std::path::Path;

use anyhow::Result;
use lsdj_offsets::catalog;
use lsdj_offsets::rom::layout;
use lsdj_offsets::{RomIdentity, profile_for};
use owo_colors::OwoColorize;

use super::hex_utils::format_offset;
use super::load_rom;

/// Run the info command
pub fn run(rom_path: &Path) -> Result<()> {
    let (rom, identity) = load_rom(rom_path)?;

    for line in describe(&identity, rom.len()) {
        println!("{}", line);
    }

    Ok(())
}

fn describe(identity: &RomIdentity, rom_len: usize) -> Vec<String> {
    let mut lines = vec![
        format!("Name:     {}", identity.name),
        format!("Hash:     {} (0x{:08X})", identity.hash, identity.hash),
        format!("Version:  {}", identity.version_label()),
    ];

    if rom_len == layout::image::ROM_SIZE {
        lines.push(format!("Size:     {} bytes", rom_len));
    } else {
        lines.push(format!(
            "Size:     {} bytes {}",
            rom_len,
            format!("(expected {})", layout::image::ROM_SIZE).yellow()
        ));
    }

    let profile = profile_for(identity.version);
    lines.push(String::new());
    lines.push("=== Script Profile ===".to_string());
    lines.push(format!("  Boot settle:   {:?}", profile.boot_settle));
    lines.push(format!("  Start delay:   {:?}", profile.start_delay));
    lines.push(format!(
        "  Search window: {}",
        format_offset(profile.search_window as u32)
    ));
    lines.push(format!("  Save slot:     {}", profile.state_slot));

    lines.push(String::new());
    lines.push("=== Catalog ===".to_string());
    match catalog::find_by_hash(identity.hash) {
        Some(entry) => lines.push(format!(
            "  Hash match:    {} group {} {}",
            entry.version,
            entry.offset_group,
            tag_label(entry.tag)
        )),
        None => lines.push(format!("  Hash match:    {}", "none".dimmed())),
    }

    if let Some(version) = identity.version {
        let rows: Vec<_> = catalog::entries_for_version(version).collect();
        if rows.is_empty() {
            lines.push(format!("  Version rows:  {}", "none".dimmed()));
        }
        for entry in rows {
            lines.push(format!(
                "  Version row:   {} group {} {}",
                entry.hash,
                entry.offset_group,
                tag_label(entry.tag)
            ));
        }
        if catalog::baked_layout(version).is_some() {
            lines.push(format!("  Baked layout:  {}", "yes".green()));
        }
    }

    lines
}

fn tag_label(tag: &str) -> String {
    if tag.is_empty() {
        String::new()
    } else {
        format!("[{}]", tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lsdj_offsets::SemVer;

    #[test]
    fn test_describe_known_version() {
        let identity = RomIdentity {
            name: "LSDj-v4.1.0".to_string(),
            hash: 3959562744,
            version: Some(SemVer::new(4, 1, 0)),
            tag: String::new(),
            filename: None,
        };
        let lines = describe(&identity, layout::image::ROM_SIZE);

        assert!(lines.iter().any(|l| l.starts_with("Version:  4.1.0")));
        assert!(lines.iter().any(|l| l.contains("Search window: 0x400")));
        assert!(lines.iter().any(|l| l.contains("group 4 [stable]")));
        assert_eq!(
            lines.iter().filter(|l| l.contains("Version row:")).count(),
            2
        );
    }

    #[test]
    fn test_describe_unknown_rom() {
        let identity = RomIdentity {
            name: String::new(),
            hash: 1,
            version: None,
            tag: String::new(),
            filename: None,
        };
        let lines = describe(&identity, 16);
        assert!(lines.iter().any(|l| l.contains("expected 1048576")));
        assert!(lines.iter().any(|l| l.starts_with("Version:  unknown")));
        assert!(!lines.iter().any(|l| l.contains("Version row")));
    }
}
