//! Human-readable number formatting.
//!
//! Counts below 1000 print as-is; everything above scales by powers of
//! 1000 with a K/M/G/T suffix, keeping the output within a maximum
//! length. Rounding is half-up and computed in integer arithmetic, so no
//! floating point artifacts leak into the output.

const SUFFIXES: [&str; 7] = ["", "K", "M", "G", "T", "P", "E"];

/// Default maximum output length, suffix included.
pub const DEFAULT_MAX_LENGTH: usize = 5;

/// Format a count with the default maximum length.
///
/// `123` → `"123"`, `12365` → `"12.4K"`, `1234567890` → `"1.23G"`.
pub fn scale_number(value: u64) -> String {
    scale_number_to_length(value, DEFAULT_MAX_LENGTH)
}

/// Format a count so the result fits within `max_length` characters,
/// trimming decimal precision as needed.
pub fn scale_number_to_length(value: u64, max_length: usize) -> String {
    if value < 1000 {
        return value.to_string();
    }

    let mut scaled = value as u128;
    let mut divisor: u128 = 1;
    let mut index = 0;
    while scaled >= 1000 && index < SUFFIXES.len() - 1 {
        scaled /= 1000;
        divisor *= 1000;
        index += 1;
    }

    let suffix = SUFFIXES[index];
    // Room left for decimals once integer digits, the dot and the suffix
    // are accounted for.
    let integer_digits = scaled.to_string().len();
    let mut decimals = max_length.saturating_sub(integer_digits + suffix.len() + 1);

    loop {
        let precision = 10u128.pow(decimals as u32);
        let rounded = (value as u128 * precision + divisor / 2) / divisor;
        let whole = rounded / precision;
        let fraction = rounded % precision;

        // A rounding carry can add an integer digit (9.996 → 10.00);
        // give that digit back by dropping one decimal and re-rounding.
        let width = whole.to_string().len() + 1 + decimals + suffix.len();
        if decimals > 0 && width > max_length {
            decimals -= 1;
            continue;
        }

        return if decimals == 0 {
            format!("{whole}{suffix}")
        } else {
            format!("{whole}.{fraction:0width$}{suffix}", width = decimals)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_value_is_plain_decimal() {
        assert_eq!(scale_number(123), "123");
        assert_eq!(scale_number(0), "0");
        assert_eq!(scale_number(999), "999");
    }

    #[test]
    fn test_scales_to_k_and_rounds() {
        assert_eq!(scale_number(12_365), "12.4K");
    }

    #[test]
    fn test_scales_to_g_and_rounds() {
        assert_eq!(scale_number(1_234_567_890), "1.23G");
    }

    #[test]
    fn test_scales_with_specified_length() {
        assert_eq!(scale_number_to_length(12_365, 6), "12.37K");
    }

    #[test]
    fn test_round_half_up() {
        // 12.35 rounds up to 12.4 at one decimal.
        assert_eq!(scale_number(12_350), "12.4K");
    }

    #[test]
    fn test_no_room_for_decimals() {
        // Three integer digits plus suffix leave no precision budget.
        assert_eq!(scale_number(123_456), "123K");
    }

    #[test]
    fn test_rounding_carry_stays_within_length() {
        // 9.996 rounds up to 10.00 at two decimals, which would be six
        // characters; the carry costs one decimal instead.
        assert_eq!(scale_number(9_996), "10.0K");
        assert!(scale_number(9_996).len() <= DEFAULT_MAX_LENGTH);
        // With a longer budget the full precision fits without a carry.
        assert_eq!(scale_number_to_length(9_996, 6), "9.996K");
    }

    #[test]
    fn test_carry_at_suffix_boundary_keeps_suffix() {
        // 999950 rounds to 1000 at zero decimals; the value stays on the
        // K suffix rather than promoting to M, still within the budget.
        assert_eq!(scale_number(999_950), "1000K");
    }

    #[test]
    fn test_suffix_progression() {
        assert_eq!(scale_number(1_000), "1.00K");
        assert_eq!(scale_number(2_500_000), "2.50M");
        assert_eq!(scale_number(7_100_000_000_000), "7.10T");
    }
}
