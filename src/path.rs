//! Path manipulation utilities for local-repos
//!
//! Repository paths are recorded by whichever machine registered them, so a
//! list loaded on Linux may still hold `C:\Users\...` entries. The helpers
//! here treat both `/` and `\` as separators instead of deferring to the host
//! platform's `std::path` rules.

/// Returns `true` for characters that separate path segments on any platform.
fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Returns `true` if `path` starts with a drive prefix such as `C:`.
fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Extract the last segment of a path.
///
/// Trailing separators are ignored, so `/code/my-repo/` yields `my-repo`.
/// Roots have no segments and yield an empty string: `/`, `C:\` and `C:`.
/// A drive-relative path such as `C:repo` yields `repo`.
pub fn last_path_segment(path: &str) -> &str {
    let trimmed = path.trim_end_matches(is_separator);

    match trimmed.rfind(is_separator) {
        // separators are ASCII, so idx + 1 is a char boundary
        Some(idx) => &trimmed[idx + 1..],
        None if has_drive_prefix(trimmed) => &trimmed[2..],
        None => trimmed,
    }
}
