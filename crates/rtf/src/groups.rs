//! Balanced-group removal for RTF destination groups

use log::trace;

/// Destination groups that hold non-visible metadata. Matched as `{\name`
/// or `{\*\name`; the whole group is dropped with its nested subgroups.
const HIDDEN_DESTINATIONS: &[&str] = &[
    "fonttbl",
    "colortbl",
    "stylesheet",
    "listtable",
    "listoverridetable",
    "info",
    "expandedcolortbl",
    "listtext",
];

/// Removes metadata destination groups and generic `{\*` ignorable
/// destinations from the input, balancing braces so nested groups are
/// swallowed whole. Escaped braces (`\{`, `\}`) do not affect the depth
/// count. An unbalanced group swallows the rest of the input.
pub(crate) fn strip_destination_groups(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut stripped = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'{' && is_hidden_group(&input[i..]) {
            i += balanced_group_len(&input[i..]);
            stripped += 1;
            continue;
        }
        match input[i..].chars().next() {
            Some(ch) => {
                out.push(ch);
                i += ch.len_utf8();
            }
            None => break,
        }
    }

    if stripped > 0 {
        trace!("stripped {} destination groups", stripped);
    }
    out
}

/// Checks whether `input` (starting at `{`) opens a group to strip:
/// an ignorable destination (`{\*`) or a known hidden destination name.
fn is_hidden_group(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.get(1) != Some(&b'\\') {
        return false;
    }
    if bytes.get(2) == Some(&b'*') {
        return true;
    }

    let mut end = 2;
    while end < bytes.len() && bytes[end].is_ascii_alphabetic() {
        end += 1;
    }
    if end == 2 {
        return false;
    }
    let word = input[2..end].to_lowercase();
    HIDDEN_DESTINATIONS.contains(&word.as_str())
}

/// Returns the byte length of the balanced group starting at `{`,
/// including both braces. Escape sequences are skipped so `\{` and `\}`
/// are not counted. If the group never closes, the remainder of the
/// input is consumed.
fn balanced_group_len(input: &str) -> usize {
    let bytes = input.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'{' => {
                depth += 1;
                i += 1;
            }
            b'}' => {
                depth = depth.saturating_sub(1);
                i += 1;
                if depth == 0 {
                    return i;
                }
            }
            _ => i += 1,
        }
    }
    bytes.len()
}
