//! Money formatting for prices and totals

use contracts::shared::Money;

/// Insert a space between every three digits of an integer string
fn group_thousands(integer_part: &str) -> String {
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(' ');
        }
        result.push(c);
    }

    format!("{}{}", sign, result.chars().rev().collect::<String>())
}

/// Format an amount with 2 decimals and a thousands separator
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(format_money(Money::from_cents(123456789)), "1 234 567.89");
/// ```
pub fn format_money(value: Money) -> String {
    let plain = value.to_string();
    match plain.split_once('.') {
        Some((integer, decimals)) => format!("{}.{}", group_thousands(integer), decimals),
        None => group_thousands(&plain),
    }
}

/// Format a catalog price
pub fn format_price(price: f64) -> String {
    format_money(Money::from_f64(price))
}
