//! Controversy rating extraction and its color ramp.

use crate::sections::CONTROVERSY;

/// Pull the 0-10 controversy rating out of the raw summary text.
///
/// Runs against the original text, before any sentinel stripping, so the
/// rating survives even when the body is suppressed. Values above 10 are
/// clamped. Absent or non-numeric ratings yield `None`.
pub fn extract_rating(raw: &str) -> Option<u8> {
    let mut rest = raw;
    while let Some(start) = rest.find(CONTROVERSY) {
        let after = rest[start + CONTROVERSY.len()..].trim_start_matches([' ', '\t']);
        let digits: String = after.chars().take_while(|c| c.is_ascii_digit()).collect();
        if !digits.is_empty() {
            // More digits than fit a u8 still mean "very controversial".
            return Some(digits.parse::<u8>().unwrap_or(u8::MAX).min(10));
        }
        rest = &rest[start + CONTROVERSY.len()..];
    }
    None
}

/// RGB for a rating: green at 0, yellow at 5, red at 10.
///
/// Channel math matches the original ramp, floor included: red climbs over
/// the lower half, green falls over the upper half, blue stays 0.
pub fn rating_color(rating: u8) -> (u8, u8, u8) {
    let r = f64::from(rating.min(10));
    if r <= 5.0 {
        ((255.0 * r / 5.0).floor() as u8, 255, 0)
    } else {
        (255, (255.0 * (2.0 - r / 5.0)).floor() as u8, 0)
    }
}

/// CSS `rgb(...)` form of [`rating_color`].
pub fn rating_css_color(rating: u8) -> String {
    let (r, g, b) = rating_color(rating);
    format!("rgb({r}, {g}, {b})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_rating() {
        assert_eq!(extract_rating("CONTROVERSY: 7"), Some(7));
        assert_eq!(extract_rating("before\nCONTROVERSY: 10\nafter"), Some(10));
        assert_eq!(extract_rating("CONTROVERSY:3"), Some(3));
    }

    #[test]
    fn test_rating_absent() {
        assert_eq!(extract_rating("no rating here"), None);
        assert_eq!(extract_rating(""), None);
        assert_eq!(extract_rating("CONTROVERSY: high"), None);
    }

    #[test]
    fn test_rating_skips_non_numeric_label() {
        let raw = "CONTROVERSY: sky-high\nCONTROVERSY: 6";
        assert_eq!(extract_rating(raw), Some(6));
    }

    #[test]
    fn test_rating_clamped() {
        assert_eq!(extract_rating("CONTROVERSY: 42"), Some(10));
        assert_eq!(extract_rating("CONTROVERSY: 999999999999"), Some(10));
    }

    #[test]
    fn test_color_boundaries() {
        assert_eq!(rating_color(0), (0, 255, 0));
        assert_eq!(rating_color(5), (255, 255, 0));
        assert_eq!(rating_color(10), (255, 0, 0));
    }

    #[test]
    fn test_color_midpoints() {
        let (r, g, b) = rating_color(2);
        assert_eq!((g, b), (255, 0));
        assert_eq!(r, 102);
        let (r, g, b) = rating_color(8);
        assert_eq!((r, b), (255, 0));
        assert!(g < 255);
    }

    #[test]
    fn test_css_color() {
        assert_eq!(rating_css_color(5), "rgb(255, 255, 0)");
    }
}
