//! Inspect command implementation.
//!
//! Decodes a raw working-RAM dump through the ROM's catalog offsets.

use std::path::Path;

use anyhow::{Context, Result, bail};
use lsdj_offsets::{CHANNEL_COUNT, MemoryAccess, Ram, profile_for};
use owo_colors::OwoColorize;

use super::lookup::resolve_static;
use super::{hexdump, load_rom};

/// Run the inspect command
pub fn run(rom_path: &Path, ram_path: &Path, show_hexdump: bool) -> Result<()> {
    let (_, identity) = load_rom(rom_path)?;
    let Some((offsets, source)) = resolve_static(&identity) else {
        bail!("No known offsets for {}", identity.version_label());
    };

    let data = std::fs::read(ram_path)
        .with_context(|| format!("Failed to read RAM dump {:?}", ram_path))?;
    let ram = Ram::new(data, offsets)?;

    println!(
        "{} {} (offsets by {})",
        identity.name.bold(),
        identity.version_label(),
        source
    );
    println!();
    for line in describe(&ram) {
        println!("{}", line);
    }

    if show_hexdump {
        let window = profile_for(identity.version).search_window;
        let data = ram.into_inner();
        let end = window.min(data.len());
        println!();
        println!("=== Search window (0x000..0x{:03X}) ===", end);
        for line in hexdump::render(&data[..end], 0, true) {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Human-readable state of every tracked variable
pub fn describe<M: MemoryAccess>(ram: &Ram<M>) -> Vec<String> {
    let mut lines = Vec::new();

    for channel in 0..CHANNEL_COUNT {
        let state = if ram.is_channel_active(channel) {
            "playing".green().to_string()
        } else {
            "stopped".dimmed().to_string()
        };
        lines.push(format!(
            "ch{}  {}  song {:02X}  chain {:X}  phrase {:X}",
            channel + 1,
            state,
            ram.song_position(channel),
            ram.chain_position(channel),
            ram.phrase_position(channel)
        ));
    }

    let (x, y) = ram.cursor();
    lines.push(format!("cursor  ({}, {})", x, y));
    lines.push(format!("screen  {}", ram.screen()));
    lines.push(format!("tempo   {}", ram.tempo()));
    lines
}
