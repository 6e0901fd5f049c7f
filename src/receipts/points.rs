use chrono::{Datelike, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::domain::Receipt;

/// Compute the loyalty points awarded for a receipt.
///
/// Pure and deterministic. The rule set is fixed and every rule contributes
/// independently; a total that fails to parse as a positive amount cuts the
/// evaluation short after the retailer-name rule. Divisibility checks run on
/// exact decimal values, so a binary-float representation can never
/// misclassify a quarter multiple.
pub fn score(receipt: &Receipt) -> u64 {
    // One point per ASCII letter or digit in the retailer name.
    let mut points = receipt
        .retailer
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .count() as u64;

    // Every remaining rule needs a positive, parseable total.
    let total = match receipt
        .total_amount()
        .filter(|amount| *amount > Decimal::ZERO)
    {
        Some(amount) => amount,
        None => return points,
    };

    if total.fract().is_zero() {
        points += 50;
    }
    if (total % Decimal::new(25, 2)).is_zero() {
        points += 25;
    }

    // Five points per complete pair of items.
    points += (receipt.items.len() as u64 / 2) * 5;

    for item in &receipt.items {
        let description_len = item.trimmed_description().len();
        if description_len == 0 || description_len % 3 != 0 {
            continue;
        }
        let price = match item
            .price_amount()
            .filter(|amount| *amount > Decimal::ZERO)
        {
            Some(amount) => amount,
            None => continue,
        };
        let bonus = (price * Decimal::new(2, 1)).ceil();
        points += bonus.to_u64().unwrap_or(0);
    }

    if let Some(date) = receipt.purchase_date() {
        if date.day() % 2 == 1 {
            points += 6;
        }
    }

    if let Some(time) = receipt.purchase_time() {
        if (14..16).contains(&time.hour()) {
            points += 10;
        }
    }

    points
}
