//! Number and duration display helpers.

const SUFFIXES: [(f64, &str); 8] = [
    (1e24, "Y"),
    (1e21, "Z"),
    (1e18, "E"),
    (1e15, "P"),
    (1e12, "T"),
    (1e9, "B"),
    (1e6, "M"),
    (1e3, "K"),
];

/// Short form of a cell count (e.g. 1234567 → "1.23M", 999.9 → "999").
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    if n < 0.0 {
        return format!("-{}", format_number(-n));
    }
    match SUFFIXES.iter().find(|(scale, _)| n >= *scale) {
        Some((scale, suffix)) => format!("{:.2}{}", n / scale, suffix),
        None => format!("{}", n.floor()),
    }
}

/// Multiplier display (e.g. 1.5 → "1.50x").
pub fn format_multiplier(m: f64) -> String {
    format!("{m:.2}x")
}

/// Duration in whole units (e.g. 3725 → "1h 2m 5s").
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return seconds.to_string();
    }
    if seconds < 0.0 {
        return format!("-{}", format_time(-seconds));
    }
    let total = seconds.floor() as u64;
    let (days, hours, minutes, secs) = (
        total / 86_400,
        total % 86_400 / 3_600,
        total % 3_600 / 60,
        total % 60,
    );
    if total < 60 {
        format!("{secs}s")
    } else if total < 3_600 {
        format!("{minutes}m {secs}s")
    } else if total < 86_400 {
        format!("{hours}h {minutes}m {secs}s")
    } else {
        format!("{days}d {hours}h {minutes}m")
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_format_number_no_panic(n in proptest::num::f64::ANY) {
            let _ = format_number(n);
        }

        #[test]
        fn prop_format_number_nonneg_no_leading_minus(n in 0.0f64..1e30) {
            prop_assert!(!format_number(n).starts_with('-'));
        }

        #[test]
        fn prop_format_number_negative_has_minus(n in -1e30f64..-1.0) {
            prop_assert!(format_number(n).starts_with('-'));
        }

        #[test]
        fn prop_format_number_small_is_integer(n in 0.0f64..1000.0) {
            let s = format_number(n);
            prop_assert!(s.chars().all(|c| c.is_ascii_digit()), "got {}", s);
        }

        #[test]
        fn prop_format_number_large_has_suffix(n in 1e3f64..1e27) {
            let s = format_number(n);
            let last = s.chars().last().unwrap_or(' ');
            prop_assert!("KMBTPEZY".contains(last), "got {}", s);
        }

        #[test]
        fn prop_format_time_no_panic(seconds in -1e9f64..1e9) {
            let _ = format_time(seconds);
        }
    }
}
