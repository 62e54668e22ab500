//! Display-name derivation from filenames and descriptor keys.
//!
//! Pages without a descriptor still need a presentable index title, derived
//! mechanically from the filename: separators become spaces, the `.html`
//! extension is dropped, and each word is title-cased.
//!
//! - `json-formatter.html` → "Json Formatter"
//! - `unit_converter.html` → "Unit Converter"
//!
//! Functionality keys in a descriptor follow the same convention
//! (`live_preview` → "Live Preview") when rendered as badge labels.

/// Title-case each space-separated word: first letter upper, rest lower.
fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive a display title from a page filename.
///
/// Strips a trailing `.html`, replaces `-` and `_` with spaces, title-cases.
pub fn title_from_filename(filename: &str) -> String {
    let stem = filename.strip_suffix(".html").unwrap_or(filename);
    title_case(&stem.replace(['-', '_'], " "))
}

/// Humanize a functionality key for display as a badge label.
pub fn humanize_key(key: &str) -> String {
    title_case(&key.replace(['-', '_'], " "))
}
