//! Locale-aware number formatting.
//!
//! Display-only concern: values are rounded before they get here and
//! the grouping separator never feeds back into animation math.

/// Locale used by the deployment when the caller doesn't pick one.
pub const DEFAULT_LOCALE: &str = "pt-BR";

/// Format an integer with the digit-grouping separator conventional for
/// `locale` (matched on the primary language subtag).
pub fn group_digits(value: i64, locale: &str) -> String {
    let separator = grouping_separator(locale);

    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn grouping_separator(locale: &str) -> char {
    let primary = locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .to_ascii_lowercase();

    match primary.as_str() {
        "pt" | "de" | "es" | "it" | "nl" => '.',
        "fr" => '\u{202f}',
        _ => ',',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_thousands_pt_br() {
        assert_eq!(group_digits(8_090_123_221, "pt-BR"), "8.090.123.221");
    }

    #[test]
    fn test_groups_thousands_en_us() {
        assert_eq!(group_digits(1_234_567, "en-US"), "1,234,567");
    }

    #[test]
    fn test_small_numbers_untouched() {
        assert_eq!(group_digits(0, "pt-BR"), "0");
        assert_eq!(group_digits(42, "pt-BR"), "42");
        assert_eq!(group_digits(999, "en-US"), "999");
    }

    #[test]
    fn test_boundary_at_four_digits() {
        assert_eq!(group_digits(1000, "pt-BR"), "1.000");
        assert_eq!(group_digits(1000, "en-US"), "1,000");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(group_digits(-1_234_567, "pt-BR"), "-1.234.567");
        assert_eq!(group_digits(-5, "en-US"), "-5");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_comma() {
        assert_eq!(group_digits(12_345, "zz-ZZ"), "12,345");
    }

    #[test]
    fn test_underscore_locale_tag() {
        assert_eq!(group_digits(12_345, "pt_BR"), "12.345");
    }
}
