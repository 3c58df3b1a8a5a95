//! Windows-1252-aware decoding for RTF hex escapes

/// Decodes a `\'XX` byte. The 0x80-0x9F range holds the common Windows-1252
/// typographic characters; smart quotes flatten to their ASCII forms the way
/// the viewer displays them. Everything else falls back to Latin-1.
pub(crate) fn decode_hex_byte(code: u8) -> char {
    match code {
        0x85 => '\u{2026}', // ellipsis
        0x91 | 0x92 => '\'',
        0x93 | 0x94 => '"',
        0x96 => '\u{2013}', // en dash
        0x97 => '\u{2014}', // em dash
        0xA0 => ' ',        // non-breaking space
        other => other as char,
    }
}
