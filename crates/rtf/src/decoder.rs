//! RTF decoding pipeline

use crate::charset::decode_hex_byte;
use crate::groups::strip_destination_groups;
use log::debug;

/// RTF decoder
pub struct RtfDecoder;

impl RtfDecoder {
    /// Converts RTF markup to plain text.
    ///
    /// Input that does not open with the `{\rtf` group marker (after
    /// leading whitespace) is returned unchanged, so content misrouted
    /// here survives intact. Malformed RTF degrades to passing more raw
    /// sequences through; this function never fails.
    pub fn decode(input: &str) -> String {
        if !input.trim_start().starts_with("{\\rtf") {
            return input.to_string();
        }

        let stripped = strip_destination_groups(input);
        let decoded = Self::decode_controls(&stripped);
        let out = Self::normalize_whitespace(&decoded);
        debug!("decoded rtf: {} bytes in, {} bytes out", input.len(), out.len());
        out
    }

    /// Second pass: decode escapes and control words, drop structure.
    fn decode_controls(input: &str) -> String {
        let bytes = input.as_bytes();
        let mut out = String::with_capacity(input.len());
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'{' | b'}' => i += 1,
                b'\\' => i = Self::decode_escape(input, i, &mut out),
                _ => match input[i..].chars().next() {
                    Some(ch) => {
                        out.push(ch);
                        i += ch.len_utf8();
                    }
                    None => break,
                },
            }
        }
        out
    }

    /// Decodes one escape sequence starting at the backslash at `i`,
    /// appending its text equivalent (if any) and returning the index of
    /// the first byte after the sequence.
    fn decode_escape(input: &str, i: usize, out: &mut String) -> usize {
        let bytes = input.as_bytes();
        let next = match bytes.get(i + 1) {
            Some(&b) => b,
            None => return i + 1,
        };

        match next {
            b'\'' => Self::decode_hex_escape(input, i, out),
            b'\\' => {
                out.push('\\');
                i + 2
            }
            b'{' => {
                out.push('{');
                i + 2
            }
            b'}' => {
                out.push('}');
                i + 2
            }
            b'~' => {
                out.push(' ');
                i + 2
            }
            b'_' => {
                out.push('-');
                i + 2
            }
            b'\n' => {
                out.push('\n');
                i + 2
            }
            b'\r' => {
                out.push('\n');
                if bytes.get(i + 2) == Some(&b'\n') {
                    i + 3
                } else {
                    i + 2
                }
            }
            b if b.is_ascii_alphabetic() => Self::decode_control_word(input, i, out),
            // Unrecognized escape: drop both characters
            _ => i + 2,
        }
    }

    /// Decodes `\'XX` through the Windows-1252 table.
    fn decode_hex_escape(input: &str, i: usize, out: &mut String) -> usize {
        let hex = input
            .get(i + 2..i + 4)
            .filter(|s| s.bytes().all(|b| b.is_ascii_hexdigit()));

        match hex.and_then(|s| u8::from_str_radix(s, 16).ok()) {
            Some(code) => {
                out.push(decode_hex_byte(code));
                i + 4
            }
            // Malformed hex escape: drop the marker, keep what follows
            None => i + 2,
        }
    }

    /// Parses a control word (`\letters` with optional signed parameter and
    /// one optional delimiting space). Layout words map to text; `\uN`
    /// decodes a code point; everything else is discarded.
    fn decode_control_word(input: &str, i: usize, out: &mut String) -> usize {
        let bytes = input.as_bytes();

        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_alphabetic() {
            j += 1;
        }
        let word = &input[i + 1..j];

        let mut k = j;
        let negative = k < bytes.len()
            && bytes[k] == b'-'
            && bytes.get(k + 1).is_some_and(|b| b.is_ascii_digit());
        if negative {
            k += 1;
        }
        let digits_start = k;
        while k < bytes.len() && bytes[k].is_ascii_digit() {
            k += 1;
        }
        let param: Option<i32> = if k > digits_start {
            input[digits_start..k]
                .parse::<i32>()
                .ok()
                .map(|v| if negative { -v } else { v })
        } else {
            None
        };

        if word == "u" {
            if let Some(value) = param {
                // RTF stores BMP code points above 0x7FFF as negatives
                let code = if value < 0 { value + 65536 } else { value };
                if let Some(ch) = u32::try_from(code).ok().and_then(char::from_u32) {
                    out.push(ch);
                }
                return Self::consume_unicode_fallback(input, k);
            }
        }

        match word {
            "par" | "line" => out.push('\n'),
            "tab" => out.push('\t'),
            _ => {}
        }

        // One space after a control word is a delimiter, not content
        if k < bytes.len() && bytes[k] == b' ' {
            k += 1;
        }
        k
    }

    /// Consumes the delimiter or single fallback character after `\uN`.
    /// A backslash or brace is the start of the next token and is left
    /// alone.
    fn consume_unicode_fallback(input: &str, k: usize) -> usize {
        let bytes = input.as_bytes();
        match bytes.get(k) {
            Some(b' ') => k + 1,
            Some(b'\\') | Some(b'{') | Some(b'}') | Some(b'\r') | Some(b'\n') | None => k,
            Some(_) => match input[k..].chars().next() {
                Some(ch) => k + ch.len_utf8(),
                None => k,
            },
        }
    }

    /// Final pass: unify line endings, collapse blank-line runs and
    /// horizontal whitespace, strip leading spaces per line, trim.
    fn normalize_whitespace(input: &str) -> String {
        let unified = input.replace("\r\n", "\n").replace('\r', "\n");

        // 3+ consecutive newlines become exactly one blank line
        let mut collapsed = String::with_capacity(unified.len());
        let mut newline_run = 0usize;
        for ch in unified.chars() {
            if ch == '\n' {
                newline_run += 1;
                if newline_run <= 2 {
                    collapsed.push('\n');
                }
            } else {
                newline_run = 0;
                collapsed.push(ch);
            }
        }

        // Runs of spaces and tabs become a single space
        let mut spaced = String::with_capacity(collapsed.len());
        let mut in_blank = false;
        for ch in collapsed.chars() {
            if ch == ' ' || ch == '\t' {
                if !in_blank {
                    spaced.push(' ');
                }
                in_blank = true;
            } else {
                in_blank = false;
                spaced.push(ch);
            }
        }

        let stripped = spaced
            .lines()
            .map(|line| line.trim_start_matches(' '))
            .collect::<Vec<_>>()
            .join("\n");
        stripped.trim().to_string()
    }
}
