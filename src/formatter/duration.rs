//! Duration rendering.

/// Render a second count as a clock string: `h:mm:ss` when hours are
/// present, `m:ss` otherwise. Zero and negative counts render as `0:00`.
pub(crate) fn render_seconds(total: i64) -> String {
    if total <= 0 {
        return "0:00".to_string();
    }
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(render_seconds(0), "0:00");
    }

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(render_seconds(125), "2:05");
        assert_eq!(render_seconds(59), "0:59");
        assert_eq!(render_seconds(60), "1:00");
    }

    #[test]
    fn test_with_hours() {
        assert_eq!(render_seconds(3665), "1:01:05");
        assert_eq!(render_seconds(3600), "1:00:00");
        assert_eq!(render_seconds(7325), "2:02:05");
    }

    #[test]
    fn test_minutes_zero_padded_only_with_hours() {
        assert_eq!(render_seconds(3660 + 5 * 60), "1:05:00");
        assert_eq!(render_seconds(5 * 60), "5:00");
    }

    #[test]
    fn test_negative_clamps() {
        assert_eq!(render_seconds(-30), "0:00");
    }
}
