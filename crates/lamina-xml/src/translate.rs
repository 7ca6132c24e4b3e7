//! Translation of dotted configuration keys into structural queries.

use lamina_core::keypath::{self, SEPARATOR};

use crate::query::STEP_SEPARATOR;

/// Translate a raw configuration key into an anchored structural query.
///
/// Strips one trailing length marker, swaps key separators for query step
/// separators, and anchors the result at the configured root element so
/// evaluation always starts from the document root. Positional index
/// markers (`[n]`) pass through unchanged; the query engine understands
/// them natively.
///
/// Pure and infallible: a malformed key yields a query that matches
/// nothing, never an error.
///
/// # Examples
///
/// ```
/// use lamina_xml::translate::translate;
///
/// assert_eq!(
///     translate("Logging.LogLevel.Default", "config"),
///     ("/config/Logging/LogLevel/Default".to_string(), false)
/// );
/// assert_eq!(translate("Numbers.$l", "config"), ("/config/Numbers".to_string(), true));
/// assert_eq!(translate("Numbers[2]", "config"), ("/config/Numbers[2]".to_string(), false));
/// ```
pub fn translate(key: &str, root_element: &str) -> (String, bool) {
    let (path, is_length) = keypath::strip_length_marker(key);
    let steps = path.replace(SEPARATOR, STEP_SEPARATOR);
    (
        format!("{STEP_SEPARATOR}{root_element}{STEP_SEPARATOR}{steps}"),
        is_length,
    )
}
