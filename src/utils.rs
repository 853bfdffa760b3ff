//! Display helpers shared by the timer markup.

/// Zero-padded two-digit display text for one time field. Values past two
/// digits (unbounded hours) render at their natural width.
pub fn format_padded(value: u32) -> String {
    format!("{:02}", value)
}

/// Inline style driving one ring's conic-gradient fill.
pub fn ring_style(color: &str, degrees: u32) -> String {
    format!(
        "background: conic-gradient({} {}deg, white 0deg)",
        color, degrees
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_single_digits() {
        assert_eq!(format_padded(7), "07");
        assert_eq!(format_padded(0), "00");
    }

    #[test]
    fn keeps_two_digit_values() {
        assert_eq!(format_padded(42), "42");
    }

    #[test]
    fn wide_hour_values_are_not_truncated() {
        assert_eq!(format_padded(123), "123");
    }

    #[test]
    fn ring_style_embeds_color_and_angle() {
        assert_eq!(
            ring_style("#4abdac", 180),
            "background: conic-gradient(#4abdac 180deg, white 0deg)"
        );
    }
}
