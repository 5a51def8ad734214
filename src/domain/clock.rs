//! Clock arithmetic for the countdown display.

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;

/// What the display shows when nothing remains.
pub const ZERO_DISPLAY: &str = "00:00:00";

/// Sum of the three field values in seconds. Saturates instead of overflowing.
pub fn total_seconds(hours: u64, minutes: u64, seconds: u64) -> u64 {
    hours
        .saturating_mul(SECONDS_PER_HOUR)
        .saturating_add(minutes.saturating_mul(SECONDS_PER_MINUTE))
        .saturating_add(seconds)
}

/// Split a number of seconds into `(hours, minutes, seconds)`.
///
/// Hours are not capped: `decompose(360_000)` is `(100, 0, 0)`.
pub fn decompose(total: u64) -> (u64, u64, u64) {
    let h = total / SECONDS_PER_HOUR;
    let m = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let s = total % SECONDS_PER_MINUTE;
    (h, m, s)
}

/// Zero-pad to at least two digits. Wider numbers are left untouched.
pub fn pad_two(n: u64) -> String {
    format!("{n:02}")
}

/// Render remaining seconds as `HH:MM:SS`.
///
/// The hour component widens past two digits for very long countdowns
/// (`"100:00:00"`); that is accepted behaviour, not an overflow.
pub fn format_hms(total: u64) -> String {
    if total == 0 {
        return ZERO_DISPLAY.to_owned();
    }

    let (h, m, s) = decompose(total);
    format!("{}:{}:{}", pad_two(h), pad_two(m), pad_two(s))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(0, "00:00:00")]
    #[case(5, "00:00:05")]
    #[case(59, "00:00:59")]
    #[case(60, "00:01:00")]
    #[case(3599, "00:59:59")]
    #[case(3600, "01:00:00")]
    #[case(3661, "01:01:01")]
    #[case(86_399, "23:59:59")]
    #[case(359_999, "99:59:59")]
    #[case(360_000, "100:00:00")]
    fn test_format_hms(#[case] total: u64, #[case] expected: &str) {
        assert_eq!(format_hms(total), expected);
    }

    #[test]
    fn test_decompose_matches_total() {
        for total in [1, 61, 3601, 7322, 45_296] {
            let (h, m, s) = decompose(total);
            assert!(m < 60 && s < 60);
            assert_eq!(total_seconds(h, m, s), total);
        }
    }

    #[test]
    fn test_total_seconds() {
        assert_eq!(total_seconds(0, 0, 0), 0);
        assert_eq!(total_seconds(1, 2, 3), 3723);
        // Minutes and seconds are not folded back into range
        assert_eq!(total_seconds(0, 99, 99), 99 * 60 + 99);
    }

    #[test]
    fn test_total_seconds_saturates() {
        assert_eq!(total_seconds(u64::MAX, 1, 1), u64::MAX);
    }

    #[test]
    fn test_pad_two() {
        assert_eq!(pad_two(0), "00");
        assert_eq!(pad_two(7), "07");
        assert_eq!(pad_two(42), "42");
        assert_eq!(pad_two(123), "123");
    }
}
