//! Stable identifiers for titles that arrive without a video id.

/// Number of hex characters kept from the BLAKE3 digest.
pub const TITLE_ID_HEX_LEN: usize = 16;

#[inline]
pub fn hash_title_bytes(title: &str) -> [u8; 32] {
    *blake3::hash(title.trim().as_bytes()).as_bytes()
}

/// Returns a short, stable id derived from `title`.
///
/// Leading and trailing whitespace is ignored so `"abc"` and `" abc\n"` map to
/// the same id. The id is prefixed with `t-` so it never collides with a real
/// 11-character video id.
pub fn hash_title(title: &str) -> String {
    let hex = blake3::hash(title.trim().as_bytes()).to_hex();
    format!("t-{}", &hex.as_str()[..TITLE_ID_HEX_LEN])
}
