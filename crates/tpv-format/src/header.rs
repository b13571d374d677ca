//! Header truncation.

use tracing::trace;

use crate::options::PreviewOptions;

/// Truncate a header label to `max_chars` using the default ellipsis and
/// tolerance.
///
/// Labels up to `max_chars + 2` characters are kept as they are, so
/// `"lastName"` survives a budget of 6 while `"firstName"` becomes
/// `"firstN.."`.
pub fn truncate_header(name: &str, max_chars: usize) -> String {
    truncate_header_with(name, max_chars, &PreviewOptions::default())
}

/// Truncate a header label with explicit options.
///
/// Lengths are counted in characters, so multi-byte labels are never cut in
/// the middle of a character.
pub fn truncate_header_with(name: &str, max_chars: usize, options: &PreviewOptions) -> String {
    let len = name.chars().count();
    if len <= max_chars.saturating_add(options.overflow_tolerance) {
        return name.to_string();
    }

    let mut truncated: String = name.chars().take(max_chars).collect();
    truncated.push_str(&options.ellipsis);
    trace!(header = name, truncated = %truncated, "truncated header");
    truncated
}

/// Truncate every header, preserving order.
pub fn truncate_headers<'a, I>(names: I, max_chars: usize, options: &PreviewOptions) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .map(|name| truncate_header_with(name, max_chars, options))
        .collect()
}
