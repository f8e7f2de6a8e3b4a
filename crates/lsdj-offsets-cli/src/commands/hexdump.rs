//! Hexdump rendering for RAM dumps.
//!
//! # Output Format
//!
//! ```text
//! 0x0E0: 5A 5A 5A 5A 5A 5A 5A 5A  01 01 01 01 5A 5A 5A 5A  |ZZZZZZZZ....ZZZZ|
//! ```

/// Render `bytes` as hexdump lines, addresses starting at `base`
pub fn render(bytes: &[u8], base: usize, ascii: bool) -> Vec<String> {
    bytes
        .chunks(16)
        .enumerate()
        .map(|(i, chunk)| render_line(chunk, base + i * 16, ascii))
        .collect()
}

fn render_line(chunk: &[u8], address: usize, ascii: bool) -> String {
    let mut line = format!("0x{:03X}: ", address);

    for j in 0..16 {
        if j == 8 {
            line.push(' ');
        }
        match chunk.get(j) {
            Some(byte) => line.push_str(&format!("{:02X} ", byte)),
            None => line.push_str("   "),
        }
    }

    if ascii {
        line.push(' ');
        line.push('|');
        for byte in chunk {
            if (0x20..0x7F).contains(byte) {
                line.push(*byte as char);
            } else {
                line.push('.');
            }
        }
        line.push('|');
    }

    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_line() {
        let bytes: Vec<u8> = (0x41..0x51).collect();
        let lines = render(&bytes, 0x100, true);
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0],
            "0x100: 41 42 43 44 45 46 47 48  49 4A 4B 4C 4D 4E 4F 50  |ABCDEFGHIJKLMNOP|"
        );
    }

    #[test]
    fn test_partial_line_is_padded() {
        let lines = render(&[0x00, 0xFF], 0, true);
        // 14 empty columns, the mid-line gap and the ASCII separator
        assert_eq!(lines[0], format!("0x000: 00 FF {}|..|", " ".repeat(14 * 3 + 2)));
    }

    #[test]
    fn test_without_ascii() {
        let lines = render(&[1, 2, 3], 0x20, false);
        assert_eq!(lines[0], "0x020: 01 02 03");
    }

    #[test]
    fn test_multiple_lines() {
        let lines = render(&[0u8; 40], 0x3F0, false);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("0x400: "));
        assert!(lines[2].starts_with("0x410: 00 00 00 00 00 00 00 00"));
    }
}
