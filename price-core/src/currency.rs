//! Indian-locale currency formatting for predicted prices.
//!
//! The service quotes prices in Indian rupees; display uses the Indian
//! digit grouping system (the last three digits form one group, every two
//! digits after that form another) with no fractional digits.

use rust_decimal::Decimal;

/// Formats `amount` as whole Indian rupees.
///
/// The amount is rounded to zero decimal places using half-up rounding
/// (midpoints move away from zero), then grouped Indian-style and prefixed
/// with the rupee sign. Negative amounts keep a leading minus sign.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use price_core::currency::format_inr;
///
/// assert_eq!(format_inr(dec!(450000)), "₹4,50,000");
/// assert_eq!(format_inr(dec!(1000)), "₹1,000");
/// assert_eq!(format_inr(dec!(10000000)), "₹1,00,00,000");
/// assert_eq!(format_inr(dec!(437.5)), "₹438");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    let grouped = group_indian(&rounded.abs().to_string());

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Inserts Indian-style group separators into a plain digit string.
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

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn amounts_up_to_three_digits_are_ungrouped() {
        assert_eq!(format_inr(dec!(0)), "₹0");
        assert_eq!(format_inr(dec!(7)), "₹7");
        assert_eq!(format_inr(dec!(999)), "₹999");
    }

    #[test]
    fn four_digit_amounts_split_off_the_last_three() {
        assert_eq!(format_inr(dec!(1000)), "₹1,000");
        assert_eq!(format_inr(dec!(9999)), "₹9,999");
    }

    #[test]
    fn lakhs_group_in_twos_above_the_thousands() {
        assert_eq!(format_inr(dec!(100000)), "₹1,00,000");
        assert_eq!(format_inr(dec!(450000)), "₹4,50,000");
        assert_eq!(format_inr(dec!(4500000)), "₹45,00,000");
    }

    #[test]
    fn crores_keep_alternating_two_digit_groups() {
        assert_eq!(format_inr(dec!(10000000)), "₹1,00,00,000");
        assert_eq!(format_inr(dec!(123456789)), "₹12,34,56,789");
    }

    #[test]
    fn fractions_round_half_away_from_zero() {
        assert_eq!(format_inr(dec!(437.4)), "₹437");
        assert_eq!(format_inr(dec!(437.5)), "₹438");
        assert_eq!(format_inr(dec!(449999.5)), "₹4,50,000");
    }

    #[test]
    fn negative_amounts_carry_a_leading_sign() {
        assert_eq!(format_inr(dec!(-450000)), "-₹4,50,000");
        assert_eq!(format_inr(dec!(-0.4)), "₹0");
    }
}
