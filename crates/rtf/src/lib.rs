//! Best-effort RTF to plain text conversion
//!
//! The decoder reconstructs readable text from RTF markup without pulling
//! in a full RTF engine: metadata destination groups are stripped by brace
//! counting, character escapes are decoded through a Windows-1252-aware
//! table, layout control words become their text equivalent, and whatever
//! markup remains is discarded. It never fails; non-RTF input passes
//! through unchanged and malformed RTF degrades to imperfect output.

mod charset;
mod decoder;
mod groups;

pub use decoder::RtfDecoder;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoder_accessible() {
        assert_eq!(RtfDecoder::decode("plain text"), "plain text");
    }
}
