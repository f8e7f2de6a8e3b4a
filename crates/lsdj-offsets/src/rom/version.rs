//! Semantic version parsing for LSDj builds.
//!
//! Versions are read either from the cartridge title (`LSDj-v9.2.6`) or from
//! a filename hint (`lsdj9_2_6-stable.gb`, `LSDj-v5.0.3.gb`).

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Parsed `major.minor.patch` of an LSDj release
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct SemVer {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SemVer {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemVer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches(['v', 'V']);
        match find_version(s, &['.']) {
            Some((version, 0, end)) if end == s.len() => Ok(version),
            _ => Err(format!("Invalid version '{}': expected major.minor.patch", s)),
        }
    }
}

/// Parse the version embedded in a cartridge title
pub fn version_from_name(name: &str) -> Option<SemVer> {
    find_version(name, &['.']).map(|(version, _, _)| version)
}

/// Parse the version (and release tag) from a filename hint.
///
/// The tag is whatever follows the version in the file stem, without the
/// leading separator, e.g. `stable` for `lsdj9_2_6-stable.gb`.
pub fn version_from_filename(filename: &str) -> Option<(SemVer, String)> {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);

    let (version, _, end) = find_version(stem, &['.', '_'])?;
    let tag = stem[end..]
        .trim_start_matches(['-', '_', ' ', '.'])
        .trim()
        .to_string();

    Some((version, tag))
}

/// Find the first `N<sep>N<sep>N` run in `text`.
///
/// Returns the version plus the byte range it occupies.
fn find_version(text: &str, separators: &[char]) -> Option<(SemVer, usize, usize)> {
    let bytes = text.as_bytes();
    let mut start = 0;

    while start < bytes.len() {
        // Only start a match at the beginning of a digit run
        if bytes[start].is_ascii_digit() && (start == 0 || !bytes[start - 1].is_ascii_digit()) {
            if let Some((version, end)) = parse_triplet(text, start, separators) {
                return Some((version, start, end));
            }
        }
        start += 1;
    }

    None
}

fn parse_triplet(text: &str, start: usize, separators: &[char]) -> Option<(SemVer, usize)> {
    let bytes = text.as_bytes();
    let mut parts = [0u32; 3];
    let mut pos = start;

    for (i, part) in parts.iter_mut().enumerate() {
        if i > 0 {
            let sep = *bytes.get(pos)? as char;
            if !separators.contains(&sep) {
                return None;
            }
            pos += 1;
        }

        let digits_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == digits_start {
            return None;
        }
        *part = text[digits_start..pos].parse().ok()?;
    }

    Some((SemVer::new(parts[0], parts[1], parts[2]), pos))
}
