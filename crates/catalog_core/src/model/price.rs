//! Price parsing and display helpers.
//!
//! # Responsibility
//! - Convert price text from form input into a validated number.
//! - Render prices in Indian Rupee notation for product cards.

use crate::model::product::{validate_price, ProductValidationError};

const RUPEE_SIGN: char = '₹';

/// Parses form price text into a positive, finite number.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
/// - `UnparsablePrice` when the text is empty or not a decimal number.
/// - `InvalidPrice` when the parsed value is not finite or not positive.
pub fn parse_price(text: &str) -> Result<f64, ProductValidationError> {
    let trimmed = text.trim();
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| ProductValidationError::UnparsablePrice(trimmed.to_string()))?;
    validate_price(value)
}

/// Formats a price as whole rupees with en-IN digit grouping.
///
/// The last three digits form one group and the rest are grouped in
/// pairs: `123456.4` renders as `₹1,23,456`.
pub fn format_price_inr(price: f64) -> String {
    if !price.is_finite() {
        return format!("{RUPEE_SIGN}{price}");
    }

    // Halves round away from zero, as on the product cards.
    let whole = price.round();
    let rounded = format!("{:.0}", whole.abs());
    let sign = if whole < 0.0 { "-" } else { "" };
    format!("{sign}{RUPEE_SIGN}{}", group_indian(&rounded))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use super::{format_price_inr, group_indian, parse_price};
    use crate::model::product::ProductValidationError;

    #[test]
    fn parse_price_accepts_trimmed_decimal_text() {
        assert_eq!(parse_price(" 12.50 "), Ok(12.5));
        assert_eq!(parse_price("15999"), Ok(15999.0));
    }

    #[test]
    fn parse_price_rejects_text_and_non_positive_values() {
        assert_eq!(
            parse_price("abc"),
            Err(ProductValidationError::UnparsablePrice("abc".to_string()))
        );
        assert_eq!(
            parse_price(""),
            Err(ProductValidationError::UnparsablePrice(String::new()))
        );
        assert_eq!(parse_price("0"), Err(ProductValidationError::InvalidPrice(0.0)));
        assert!(parse_price("NaN").is_err());
        assert!(parse_price("inf").is_err());
    }

    #[test]
    fn group_indian_uses_lakh_grouping() {
        assert_eq!(group_indian("999"), "999");
        assert_eq!(group_indian("1000"), "1,000");
        assert_eq!(group_indian("123456"), "1,23,456");
        assert_eq!(group_indian("12345678"), "1,23,45,678");
    }

    #[test]
    fn format_price_inr_rounds_to_whole_rupees() {
        assert_eq!(format_price_inr(65999.0), "₹65,999");
        assert_eq!(format_price_inr(5999.4), "₹5,999");
        assert_eq!(format_price_inr(0.6), "₹1");
    }

    #[test]
    fn format_price_inr_rounds_halves_up() {
        assert_eq!(format_price_inr(0.5), "₹1");
        assert_eq!(format_price_inr(1.5), "₹2");
        assert_eq!(format_price_inr(2.5), "₹3");
        assert_eq!(format_price_inr(12498.5), "₹12,499");
    }
}
