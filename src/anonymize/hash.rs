//! Deterministic one-way hashing of plain strings.
//!
//! A value is encoded as UTF-16 (little endian), hashed with MD5 and rendered as padded,
//! URL-safe base64. Digests are always 24 characters long and end in `==`, which is what
//! [`crate::naming::Name::is_hashed`] looks for. The empty string hashes to itself.

use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use md5::{Digest, Md5};

/// Hashes `value`.
///
/// # Examples
///
/// ```rust
/// use dotnames::anonymize::to_hash;
///
/// assert_eq!(to_hash("a"), "QUThlfRt54o2I9pzZNBPEQ==");
/// assert_eq!(to_hash(""), "");
/// ```
#[must_use]
pub fn to_hash(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let bytes: Vec<u8> = value.encode_utf16().flat_map(u16::to_le_bytes).collect();
    let mut hasher = Md5::new();
    hasher.update(&bytes);
    let digest = hasher.finalize();

    URL_SAFE.encode(digest)
}

/// Hashes an optional value, keeping `None` as it is.
#[must_use]
pub fn hash(value: Option<&str>) -> Option<String> {
    value.map(to_hash)
}

/// Hashes `value` if it looks like a file path (contains `\` or `.`).
#[must_use]
pub fn hash_if_file(value: &str) -> String {
    if value.contains('\\') || value.contains('.') {
        to_hash(value)
    } else {
        value.to_string()
    }
}
