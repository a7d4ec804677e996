//! Shared helpers for building the document tree.

use pulldown_cmark::HeadingLevel;

/// Convert heading level enum to number (1-6).
#[must_use]
pub(crate) fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Extract the language from a code fence info string.
///
/// The language is the first whitespace-separated word; anything after it
/// (attributes, titles) is ignored. Returns `None` for an empty info string.
#[must_use]
pub(crate) fn fence_language(info: &str) -> Option<&str> {
    info.split_whitespace().next()
}
