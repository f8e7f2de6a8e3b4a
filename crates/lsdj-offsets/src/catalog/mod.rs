//! Static catalog of previously discovered layouts.
//!
//! The catalog is an in-binary dataset: a row per known build keyed by the
//! content hash of its first bank, each pointing at a shared layout group.
//! Lookups are plain table reads and never fail; a miss is `None`.

mod data;

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::offset::OffsetDesc;
use crate::rom::SemVer;

pub use data::{CATALOG, OFFSET_GROUPS};

/// Tag carried by official release builds (in addition to untagged rows)
pub const STABLE_TAG: &str = "stable";

/// One known build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub hash: u32,
    pub version: SemVer,
    /// Index into [`OFFSET_GROUPS`]
    pub offset_group: usize,
    /// Free-text build flavour such as `stable` or `arduinoboy`
    pub tag: &'static str,
}

impl CatalogEntry {
    pub const fn new(hash: u32, version: SemVer, offset_group: usize, tag: &'static str) -> Self {
        Self {
            hash,
            version,
            offset_group,
            tag,
        }
    }

    /// Layout shared by this build
    pub fn offsets(&self) -> Option<&'static OffsetDesc> {
        OFFSET_GROUPS.get(self.offset_group)
    }

    /// Untagged and `stable` rows describe the mainline build of a version
    pub fn is_mainline(&self) -> bool {
        self.tag.is_empty() || self.tag == STABLE_TAG
    }
}

/// Layouts verified by hand for versions whose script run is unreliable.
/// Consulted by the dynamic fallback before an emulator is booted.
static BAKED_LAYOUTS: [(SemVer, OffsetDesc); 1] = [(
    SemVer::new(7, 0, 0),
    OffsetDesc::new(232, 364, 380, 512, 887, 888),
)];

static BY_HASH: LazyLock<HashMap<u32, &'static CatalogEntry>> =
    LazyLock::new(|| CATALOG.iter().map(|entry| (entry.hash, entry)).collect());

/// All rows in release order
pub fn entries() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Exact build match by content hash
pub fn find_by_hash(hash: u32) -> Option<&'static CatalogEntry> {
    BY_HASH.get(&hash).copied()
}

/// First mainline row with exactly this version, in release order.
///
/// Covers rebuilds whose incidental bytes changed the hash but not the layout.
pub fn find_by_version(version: SemVer) -> Option<&'static CatalogEntry> {
    CATALOG
        .iter()
        .find(|entry| entry.is_mainline() && entry.version == version)
}

/// Every row for a version, any tag
pub fn entries_for_version(version: SemVer) -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter().filter(move |entry| entry.version == version)
}

/// Hand-verified layout for a version, if any
pub fn baked_layout(version: SemVer) -> Option<OffsetDesc> {
    BAKED_LAYOUTS
        .iter()
        .find(|(v, _)| *v == version)
        .map(|(_, desc)| *desc)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_row_references_a_group() {
        for entry in entries() {
            let desc = entry
                .offsets()
                .unwrap_or_else(|| panic!("row {} has no group", entry.hash));
            assert!(desc.expand().is_consistent(), "row {}", entry.hash);
        }
    }

    #[test]
    fn test_hashes_are_unique() {
        let hashes: HashSet<u32> = entries().iter().map(|e| e.hash).collect();
        assert_eq!(hashes.len(), entries().len());
        assert_eq!(BY_HASH.len(), entries().len());
    }

    #[test]
    fn test_find_by_hash() {
        let entry = find_by_hash(1007349763).unwrap();
        assert_eq!(entry.version, SemVer::new(5, 0, 3));
        assert_eq!(entry.offset_group, 15);
        assert_eq!(entry.tag, "stable");

        assert!(find_by_hash(0xDEAD_BEEF).is_none());
    }

    #[test]
    fn test_find_by_version_skips_flavoured_builds() {
        // 9.1.4 has a tagged test build listed before the mainline one
        let entry = find_by_version(SemVer::new(9, 1, 4)).unwrap();
        assert_eq!(entry.hash, 3222527884);
        assert!(entry.is_mainline());

        // 4.1.0 arduinoboy uses a different layout than the stable build
        let entry = find_by_version(SemVer::new(4, 1, 0)).unwrap();
        assert_eq!(entry.hash, 3959562744);
        assert_eq!(entry.offset_group, 4);
        assert_eq!(entries_for_version(SemVer::new(4, 1, 0)).count(), 2);

        assert!(find_by_version(SemVer::new(99, 0, 0)).is_none());
    }

    #[test]
    fn test_group_three_layout() {
        let offsets = OFFSET_GROUPS[3].expand();
        assert_eq!(offsets.channels[0].active, 789);
        assert_eq!(offsets.channels[0].phrase_position, 980);
        assert_eq!(offsets.channels[0].chain_position, 988);
        assert_eq!(offsets.channels[0].song_position, 992);
        assert_eq!(offsets.cursor_x, 558);
        assert_eq!(offsets.cursor_y, 559);
    }

    #[test]
    fn test_baked_layout_matches_catalog() {
        let baked = baked_layout(SemVer::new(7, 0, 0)).unwrap();
        let row = find_by_version(SemVer::new(7, 0, 0)).unwrap();
        assert_eq!(Some(&baked), row.offsets());
        assert!(baked_layout(SemVer::new(9, 2, 6)).is_none());
    }
}
