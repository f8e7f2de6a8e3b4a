//! Number parsing and formatting helpers.

use anyhow::Result;

/// Parse a hash given as decimal or as 0x-prefixed hex.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_hash("1007349763").unwrap(), 1007349763);
/// assert_eq!(parse_hash("0x3C0B1F03").unwrap(), 0x3C0B1F03);
/// ```
pub fn parse_hash(s: &str) -> Result<u32> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };
    parsed.map_err(|e| anyhow::anyhow!("Invalid hash '{}': {}", s, e))
}

/// Format a RAM offset as zero-padded hex
pub fn format_offset(offset: u32) -> String {
    format!("0x{:03X}", offset)
}
