//! Catalog command implementation.

use anyhow::Result;
use lsdj_offsets::{CatalogEntry, SemVer, catalog};
use owo_colors::OwoColorize;

use super::hex_utils::{format_offset, parse_hash};

/// Rows matching the optional version and hash filters, in table order
pub fn select(version: Option<&str>, hash: Option<&str>) -> Result<Vec<&'static CatalogEntry>> {
    let version = version.map(str::parse::<SemVer>).transpose().map_err(anyhow::Error::msg)?;
    let hash = hash.map(parse_hash).transpose()?;

    Ok(catalog::entries()
        .iter()
        .filter(|entry| version.is_none_or(|v| entry.version == v))
        .filter(|entry| hash.is_none_or(|h| entry.hash == h))
        .collect())
}

/// Run the catalog command
pub fn run(version: Option<&str>, hash: Option<&str>) -> Result<()> {
    let rows = select(version, hash)?;

    println!(
        "{:>10}  {:<8} {:>5}  {:<16} {:>6} {:>6} {:>6} {:>6} {:>6}",
        "hash", "version", "group", "tag", "active", "phrase", "chain", "song", "cursor"
    );
    for entry in &rows {
        let Some(desc) = entry.offsets() else {
            continue;
        };
        let tag = if entry.is_mainline() {
            entry.tag.to_string()
        } else {
            entry.tag.yellow().to_string()
        };
        println!(
            "{:>10}  {:<8} {:>5}  {:<16} {:>6} {:>6} {:>6} {:>6} {:>6}",
            entry.hash,
            entry.version.to_string(),
            entry.offset_group,
            tag,
            format_offset(desc.active),
            format_offset(desc.phrase),
            format_offset(desc.chain),
            format_offset(desc.song),
            format_offset(desc.cursor_x)
        );
    }
    println!();
    println!("{} rows", rows.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all() {
        assert_eq!(select(None, None).unwrap().len(), catalog::entries().len());
    }

    #[test]
    fn test_select_by_version() {
        let rows = select(Some("4.1.0"), None).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.version == SemVer::new(4, 1, 0)));
    }

    #[test]
    fn test_select_by_hash() {
        let rows = select(None, Some("1007349763")).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].offset_group, 15);

        let rows = select(Some("5.0.3"), Some("0x1")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_select_rejects_bad_filters() {
        assert!(select(Some("nine"), None).is_err());
        assert!(select(None, Some("xyz")).is_err());
    }
}
