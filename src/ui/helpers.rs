//! Shared formatting utilities for view models and rendering.

use crate::domain::MAX_RATING;

/// Filled star.
pub const STAR_FILLED: char = '★';

/// Empty star.
pub const STAR_EMPTY: char = '☆';

/// Renders a rating as `MAX_RATING` stars, filled from the left.
///
/// Ratings above the maximum render as all filled.
///
/// # Example
///
/// ```rust
/// use wanderlog::ui::helpers::rating_stars;
///
/// assert_eq!(rating_stars(3), "★★★☆☆");
/// assert_eq!(rating_stars(0), "☆☆☆☆☆");
/// ```
#[must_use]
pub fn rating_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    let total = usize::from(MAX_RATING);

    std::iter::repeat(STAR_FILLED)
        .take(filled)
        .chain(std::iter::repeat(STAR_EMPTY).take(total - filled))
        .collect()
}

/// Shortens `text` to at most `max_chars` characters, ending with `…` when cut.
///
/// Operates on characters, not bytes, so multi-byte text is never split.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_are_clamped() {
        assert_eq!(rating_stars(5), "★★★★★");
        assert_eq!(rating_stars(42), "★★★★★");
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Kyoto", 10), "Kyoto");
        assert_eq!(truncate("São Paulo, Brazil", 6), "São P…");
        assert_eq!(truncate("abc", 0), "");
    }
}
