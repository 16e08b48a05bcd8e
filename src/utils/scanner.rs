//! Character and bracket scanning over identifier strings.
//!
//! Every structural decision of the grammar parser and of the legacy repair passes comes
//! down to a handful of questions about an identifier: where is the next separator, which
//! bracket closes this one, which commas are not nested inside a bracket group. This module
//! answers them on raw byte offsets.
//!
//! All delimiters of the grammar are ASCII, so byte offsets returned here are always valid
//! `char` boundaries and can be used to slice the identifier directly.
//!
//! # Preconditions
//!
//! Offsets handed to these functions must be in bounds, and the bracket functions must be
//! pointed at a bracket of the expected kind. Violations are programming errors and panic;
//! a miss (no such character, unbalanced brackets) is reported as `None`.
//!
//! # Examples
//!
//! ```rust
//! use dotnames::utils::scanner::{matching_close, split_top_level};
//!
//! let id = "G`2[[A],[B -> C, P]]";
//! assert_eq!(matching_close(id, 3), Some(id.len() - 1));
//! assert_eq!(split_top_level("[A], [B, C]", b','), vec!["[A]", " [B, C]"]);
//! ```

/// Opening brackets known to the grammar, with their closing counterpart
const BRACKETS: [(u8, u8); 4] = [(b'(', b')'), (b'[', b']'), (b'{', b'}'), (b'<', b'>')];

/// Returns the closing bracket for an opening bracket, or `None` for any other byte
#[must_use]
pub fn closing_bracket(open: u8) -> Option<u8> {
    BRACKETS
        .iter()
        .find(|(o, _)| *o == open)
        .map(|(_, c)| *c)
}

/// Returns the opening bracket for a closing bracket, or `None` for any other byte
#[must_use]
pub fn opening_bracket(close: u8) -> Option<u8> {
    BRACKETS
        .iter()
        .find(|(_, c)| *c == close)
        .map(|(o, _)| *o)
}

/// Finds the first occurrence of any of `chars` at or after `from`.
///
/// `from` may equal the length of `s`, in which case nothing is found.
///
/// # Panics
/// Panics if `from` is past the end of `s`.
#[must_use]
pub fn find_next(s: &str, from: usize, chars: &[u8]) -> Option<usize> {
    assert!(
        from <= s.len(),
        "find_next: index {} out of bounds for '{}'",
        from,
        s
    );
    s.as_bytes()[from..]
        .iter()
        .position(|b| chars.contains(b))
        .map(|pos| pos + from)
}

/// Finds the last occurrence of any of `chars` at or before `from`.
///
/// # Panics
/// Panics if `from` is not a valid index into `s`.
#[must_use]
pub fn find_previous(s: &str, from: usize, chars: &[u8]) -> Option<usize> {
    assert!(
        from < s.len(),
        "find_previous: index {} out of bounds for '{}'",
        from,
        s
    );
    s.as_bytes()[..=from].iter().rposition(|b| chars.contains(b))
}

/// Finds the bracket that closes the bracket at `open`.
///
/// Only brackets of the same kind are counted, so `->` inside a `[...]` group or a `(`
/// inside a `<...>` group does not disturb the depth.
///
/// # Panics
/// Panics if `open` is out of bounds or does not point at `(`, `[`, `{` or `<`.
#[must_use]
pub fn matching_close(s: &str, open: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    assert!(
        open < bytes.len(),
        "matching_close: index {} out of bounds for '{}'",
        open,
        s
    );
    let open_char = bytes[open];
    let Some(close_char) = closing_bracket(open_char) else {
        panic!(
            "matching_close: '{}' at {} in '{}' is not an opening bracket",
            open_char as char, open, s
        );
    };

    let mut depth = 0usize;
    for (idx, byte) in bytes.iter().enumerate().skip(open) {
        if *byte == open_char {
            depth += 1;
        } else if *byte == close_char {
            depth -= 1;
            if depth == 0 {
                return Some(idx);
            }
        }
    }
    None
}

/// Finds the bracket that opens the bracket at `close`.
///
/// # Panics
/// Panics if `close` is out of bounds or does not point at `)`, `]`, `}` or `>`.
#[must_use]
pub fn matching_open(s: &str, close: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    assert!(
        close < bytes.len(),
        "matching_open: index {} out of bounds for '{}'",
        close,
        s
    );
    let close_char = bytes[close];
    let Some(open_char) = opening_bracket(close_char) else {
        panic!(
            "matching_open: '{}' at {} in '{}' is not a closing bracket",
            close_char as char, close, s
        );
    };

    let mut depth = 0usize;
    for idx in (0..=close).rev() {
        let byte = bytes[idx];
        if byte == close_char {
            depth += 1;
        } else if byte == open_char {
            depth -= 1;
            if depth == 0 {
                return Some(idx);
            }
        }
    }
    None
}

/// Finds the first `sep` that is not nested inside `()` or `[]`.
#[must_use]
pub fn find_top_level(s: &str, from: usize, sep: u8) -> Option<usize> {
    let mut depth = 0i32;
    for (idx, byte) in s.bytes().enumerate().skip(from) {
        match byte {
            b'[' | b'(' => depth += 1,
            b']' | b')' => depth -= 1,
            b if b == sep && depth == 0 => return Some(idx),
            _ => {}
        }
    }
    None
}

/// Splits `s` on every `sep` that is not nested inside `()` or `[]`.
///
/// The pieces are returned untrimmed. An empty input yields a single empty piece.
#[must_use]
pub fn split_top_level(s: &str, sep: u8) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    while let Some(idx) = find_top_level(s, start, sep) {
        parts.push(&s[start..idx]);
        start = idx + 1;
    }
    parts.push(&s[start..]);
    parts
}

/// Returns the bracket groups `[...]` found directly inside the list `[[..],[..]]` whose
/// outer brackets are at `open` and `close`, as slices without their own brackets.
///
/// Separators between the groups are skipped, whatever they are, so `[[A] , [B] ]` yields
/// `A` and `B`. Returns `None` if a group is not closed before `close`.
///
/// # Panics
/// Panics if `open`/`close` do not point at `[` and `]`.
#[must_use]
pub fn bracket_groups(s: &str, open: usize, close: usize) -> Option<Vec<&str>> {
    let bytes = s.as_bytes();
    assert!(
        open < close && close < bytes.len() && bytes[open] == b'[' && bytes[close] == b']',
        "bracket_groups: ({}, {}) is not a bracket list in '{}'",
        open,
        close,
        s
    );

    let mut groups = Vec::new();
    let mut cur = open + 1;
    while let Some(group_open) = find_next(s, cur, b"[") {
        if group_open >= close {
            break;
        }
        let group_close = matching_close(s, group_open)?;
        if group_close >= close {
            return None;
        }
        groups.push(&s[group_open + 1..group_close]);
        cur = group_close + 1;
    }
    Some(groups)
}

/// Returns `true` if `s` is an array marker: `[` followed by commas and `]`.
#[must_use]
pub fn is_array_marker(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2
        && bytes[0] == b'['
        && bytes[bytes.len() - 1] == b']'
        && bytes[1..bytes.len() - 1].iter().all(|b| *b == b',')
}

/// Builds the array marker for `rank`, e.g. `[,]` for rank 2.
#[must_use]
pub fn array_marker(rank: u32) -> String {
    let mut marker = String::with_capacity(rank as usize + 1);
    marker.push('[');
    for _ in 1..rank {
        marker.push(',');
    }
    marker.push(']');
    marker
}
