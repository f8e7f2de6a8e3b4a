use crate::offset::MemoryOffsets;
use crate::resolver::ResolveSource;
use crate::rom::RomIdentity;
use anyhow::Result;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Offset dump for diagnostic purposes
#[derive(Debug, Clone, Serialize)]
pub struct OffsetDump {
    pub rom_name: String,
    pub rom_hash: String,
    pub version: String,
    pub source: ResolveSource,
    pub created_at: DateTime<Local>,
    pub offsets: OffsetValues,
    pub memory_samples: Option<MemorySamples>,
}

/// Offset values in hex string format
#[derive(Debug, Clone, Serialize)]
pub struct OffsetValues {
    pub active: Vec<String>,
    pub song_position: Vec<String>,
    pub chain_position: Vec<String>,
    pub phrase_position: Vec<String>,
    pub cursor: [String; 2],
    pub screen: Option<[String; 2]>,
}

/// Bytes read from a RAM image at each resolved location
#[derive(Debug, Clone, Serialize)]
pub struct MemorySamples {
    pub active: String,
    pub song_position: String,
    pub chain_position: String,
    pub phrase_position: String,
    pub cursor: String,
    pub screen: Option<String>,
}

impl OffsetDump {
    /// Create a dump from resolved offsets, optionally sampling a RAM image
    pub fn new(
        identity: &RomIdentity,
        source: ResolveSource,
        offsets: &MemoryOffsets,
        ram: Option<&[u8]>,
    ) -> Self {
        let hex = |v: u32| format!("0x{:03X}", v);
        let column = |f: fn(&crate::offset::ChannelOffsets) -> u32| -> Vec<String> {
            offsets.channels.iter().map(|c| hex(f(c))).collect()
        };

        let offset_values = OffsetValues {
            active: column(|c| c.active),
            song_position: column(|c| c.song_position),
            chain_position: column(|c| c.chain_position),
            phrase_position: column(|c| c.phrase_position),
            cursor: [hex(offsets.cursor_x), hex(offsets.cursor_y)],
            screen: offsets.screen_x.zip(offsets.screen_y).map(|(x, y)| [hex(x), hex(y)]),
        };

        let memory_samples = ram.map(|ram| {
            let first = &offsets.channels[0];
            MemorySamples {
                active: Self::read_memory_hex(ram, first.active, 4),
                song_position: Self::read_memory_hex(ram, first.song_position, 4),
                chain_position: Self::read_memory_hex(ram, first.chain_position, 4),
                phrase_position: Self::read_memory_hex(ram, first.phrase_position, 4),
                cursor: Self::read_memory_hex(ram, offsets.cursor_x, 2),
                screen: offsets
                    .screen_x
                    .map(|x| Self::read_memory_hex(ram, x, 2)),
            }
        });

        Self {
            rom_name: identity.name.clone(),
            rom_hash: format!("{}", identity.hash),
            version: identity.version_label(),
            source,
            created_at: Local::now(),
            offsets: offset_values,
            memory_samples,
        }
    }

    fn read_memory_hex(ram: &[u8], offset: u32, size: usize) -> String {
        let start = offset as usize;
        match ram.get(start..start + size) {
            Some(bytes) => bytes
                .iter()
                .map(|b| format!("{:02X}", b))
                .collect::<Vec<_>>()
                .join(" "),
            None => "(out of range)".to_string(),
        }
    }

    /// Save dump to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offset::OffsetDesc;
    use crate::rom::SemVer;
    use tempfile::NamedTempFile;

    fn identity() -> RomIdentity {
        RomIdentity {
            name: "LSDj-v7.0.0".to_string(),
            hash: 2268008317,
            version: Some(SemVer::new(7, 0, 0)),
            tag: String::new(),
            filename: None,
        }
    }

    #[test]
    fn test_dump_samples_ram() {
        let offsets = OffsetDesc::new(232, 364, 380, 512, 887, 888).expand();
        let mut ram = vec![0u8; 0x2000];
        ram[232..236].copy_from_slice(&[1, 1, 0, 1]);
        ram[887] = 3;
        ram[888] = 4;

        let dump = OffsetDump::new(&identity(), ResolveSource::Hash, &offsets, Some(&ram));
        let samples = dump.memory_samples.as_ref().unwrap();
        assert_eq!(samples.active, "01 01 00 01");
        assert_eq!(samples.cursor, "03 04");
        assert!(samples.screen.is_none());
        assert_eq!(dump.offsets.active[3], "0x0EB");
        assert_eq!(dump.version, "7.0.0");
    }

    #[test]
    fn test_dump_out_of_range_sample() {
        let offsets = OffsetDesc::new(232, 364, 380, 512, 887, 888).expand();
        let ram = vec![0u8; 16];
        let dump = OffsetDump::new(&identity(), ResolveSource::Version, &offsets, Some(&ram));
        assert_eq!(dump.memory_samples.unwrap().song_position, "(out of range)");
    }

    #[test]
    fn test_dump_save() {
        let temp_file = NamedTempFile::new().unwrap();
        let offsets = OffsetDesc::new(232, 364, 380, 512, 887, 888).expand();
        let dump = OffsetDump::new(&identity(), ResolveSource::Hash, &offsets, None);
        dump.save(temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["rom_hash"], "2268008317");
        assert_eq!(json["source"], "hash");
        assert_eq!(json["offsets"]["cursor"][1], "0x378");
    }
}
