//! Fixed-width text helpers
//!
//! Widths count characters, not bytes, so box-drawing glyphs and markers
//! occupy one column each.

/// Display width in columns
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Center `text` in `total` columns
///
/// When the padding is odd the extra space goes left if `total` is odd and
/// right otherwise, so labels line up the same way in every diagram.
pub fn center(text: &str, total: usize) -> String {
    let len = width(text);
    if len >= total {
        return text.to_string();
    }
    let margin = total - len;
    let left = margin / 2 + (margin & total & 1);
    let right = margin - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Pad `text` on the right to `total` columns
pub fn ljust(text: &str, total: usize) -> String {
    let len = width(text);
    if len >= total {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(total - len))
}

/// A run of horizontal rule glyphs
pub fn rule(count: usize) -> String {
    "─".repeat(count)
}
