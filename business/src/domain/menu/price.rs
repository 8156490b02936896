use std::sync::LazyLock;

use regex::Regex;

static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?(\d+(?:\.\d+)?)").expect("price pattern is valid"));

/// Extracts the first price found in `text`, e.g. `12`, `12.99` or `$12.99`.
///
/// Returns `None` when nothing numeric is present.
pub fn extract_price(text: &str) -> Option<f64> {
    let captures = PRICE_PATTERN.captures(text)?;
    let amount = captures.get(1)?.as_str().parse::<f64>().ok()?;

    amount.is_finite().then_some(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_capture_amount_without_currency_marker() {
        let captures = PRICE_PATTERN.captures("$9.50").unwrap();
        assert_eq!(&captures[0], "$9.50");
        assert_eq!(&captures[1], "9.50");
    }

    #[test]
    fn should_extract_whole_number_price() {
        assert_eq!(extract_price("12"), Some(12.0));
    }

    #[test]
    fn should_extract_decimal_price() {
        assert_eq!(extract_price("12.99"), Some(12.99));
    }

    #[test]
    fn should_extract_price_with_dollar_sign() {
        assert_eq!(extract_price("$12.99"), Some(12.99));
    }

    #[test]
    fn should_take_first_match_when_several_numbers_present() {
        assert_eq!(extract_price("2 for 5.50"), Some(2.0));
    }

    #[test]
    fn should_ignore_trailing_dot_without_decimals() {
        assert_eq!(extract_price("7."), Some(7.0));
    }

    #[test]
    fn should_find_price_surrounded_by_text() {
        assert_eq!(extract_price("only $4.25 today"), Some(4.25));
    }

    #[test]
    fn should_return_none_when_segment_is_not_numeric() {
        assert_eq!(extract_price("Free"), None);
        assert_eq!(extract_price("$"), None);
        assert_eq!(extract_price(""), None);
    }

    #[test]
    fn should_reject_price_that_overflows() {
        let huge = "9".repeat(400);
        assert_eq!(extract_price(&huge), None);
    }
}
