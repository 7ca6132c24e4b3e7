//! The dotted-key grammar shared by every store.
//!
//! Configuration keys address values by a dot-separated, case-sensitive
//! path of segment names:
//!
//! - `Segment(.Segment)*` is a plain nested path.
//! - A trailing `$l` (the length marker) asks for the number of matches at
//!   the path instead of a value, e.g. `Numbers.$l`.
//! - `[n]` on a segment selects the n-th (1-based) sibling among same-named
//!   nodes, e.g. `Numbers[2]`. Index markers are part of the segment as far
//!   as this grammar is concerned; stores with structured backends give
//!   them positional meaning.

/// Separator between key segments.
pub const SEPARATOR: char = '.';

/// Suffix requesting the number of matches at a path rather than a value.
pub const LENGTH_MARKER: &str = "$l";

/// Strip a trailing length marker from `key`.
///
/// Returns the remaining path and `true` when the marker was present. The
/// marker is conventionally attached with a separator (`Numbers.$l`), which
/// is stripped along with it; a marker without the separator is accepted
/// too. Keys without the marker come back unchanged.
///
/// # Examples
///
/// ```
/// use lamina_core::keypath::strip_length_marker;
///
/// assert_eq!(strip_length_marker("Numbers.$l"), ("Numbers", true));
/// assert_eq!(strip_length_marker("Numbers"), ("Numbers", false));
/// ```
pub fn strip_length_marker(key: &str) -> (&str, bool) {
    match key.strip_suffix(LENGTH_MARKER) {
        Some(path) => (path.trim_end_matches(SEPARATOR), true),
        None => (key, false),
    }
}

/// Append the length marker to `key`.
///
/// The inverse of [`strip_length_marker`]: binders compose collection
/// length keys with this before handing them to a store.
///
/// # Examples
///
/// ```
/// use lamina_core::keypath::add_length_marker;
///
/// assert_eq!(add_length_marker("Numbers"), "Numbers.$l");
/// ```
pub fn add_length_marker(key: &str) -> String {
    if key.is_empty() {
        LENGTH_MARKER.to_string()
    } else {
        format!("{key}{SEPARATOR}{LENGTH_MARKER}")
    }
}

/// Join key segments into a single dotted path.
///
/// Empty components are dropped, so the result carries single separators
/// regardless of stray dots on the inputs.
///
/// # Examples
///
/// ```
/// use lamina_core::keypath::combine;
///
/// assert_eq!(combine(["Logging", "LogLevel", "Default"]), "Logging.LogLevel.Default");
/// assert_eq!(combine(["Logging.", ".LogLevel"]), "Logging.LogLevel");
/// assert_eq!(combine(["", "Key"]), "Key");
/// ```
pub fn combine<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut path = String::new();
    for segment in segments {
        for part in segment.split(SEPARATOR) {
            if part.is_empty() {
                continue;
            }
            if !path.is_empty() {
                path.push(SEPARATOR);
            }
            path.push_str(part);
        }
    }
    path
}
