use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier wrapper for processed receipts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(pub String);

impl ReceiptId {
    /// Mint a fresh 128-bit random identifier.
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// A submitted retail receipt, exactly as decoded from the wire.
///
/// Date, time, and monetary fields stay textual: the validator decides whether
/// date and time are acceptable, and the points engine tolerates malformed
/// amounts by awarding nothing for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

/// A single purchased line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

impl Receipt {
    /// The purchase date, when it is an exact `YYYY-MM-DD` calendar date.
    pub fn purchase_date(&self) -> Option<NaiveDate> {
        parse_date_strict(&self.purchase_date)
    }

    /// The purchase time, when it is an exact 24-hour `HH:MM` wall-clock time.
    pub fn purchase_time(&self) -> Option<NaiveTime> {
        parse_time_strict(&self.purchase_time)
    }

    /// The receipt total as an exact decimal amount, when it parses.
    pub fn total_amount(&self) -> Option<Decimal> {
        parse_amount(&self.total)
    }
}

impl Item {
    /// Description with surrounding whitespace removed.
    pub fn trimmed_description(&self) -> &str {
        self.short_description.trim()
    }

    /// The item price as an exact decimal amount, when it parses.
    pub fn price_amount(&self) -> Option<Decimal> {
        parse_amount(&self.price)
    }
}

fn parse_amount(raw: &str) -> Option<Decimal> {
    raw.trim().parse::<Decimal>().ok()
}

// chrono's numeric fields are width-flexible ("2022-1-1" would parse), so the
// byte shape is pinned before handing the text to the calendar.
fn parse_date_strict(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    if !(all_digits(&bytes[0..4]) && all_digits(&bytes[5..7]) && all_digits(&bytes[8..10])) {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn parse_time_strict(raw: &str) -> Option<NaiveTime> {
    let bytes = raw.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    if !all_digits(&bytes[0..2]) || !all_digits(&bytes[3..5]) {
        return None;
    }
    NaiveTime::parse_from_str(raw, "%H:%M").ok()
}

fn all_digits(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(date: &str, time: &str) -> Receipt {
        Receipt {
            retailer: "Corner Market".to_string(),
            purchase_date: date.to_string(),
            purchase_time: time.to_string(),
            items: Vec::new(),
            total: "1.00".to_string(),
        }
    }

    #[test]
    fn exact_calendar_dates_parse() {
        assert!(receipt("2022-01-01", "13:01").purchase_date().is_some());
        assert!(receipt("2024-02-29", "13:01").purchase_date().is_some());
    }

    #[test]
    fn loose_date_shapes_are_rejected() {
        for raw in ["2022-1-1", "22-01-01", "2022/01/01", "2022-01-01 ", "+202-01-01"] {
            assert!(receipt(raw, "13:01").purchase_date().is_none(), "{raw}");
        }
    }

    #[test]
    fn impossible_calendar_dates_are_rejected() {
        for raw in ["2022-13-01", "2022-00-10", "2022-02-30", "2023-02-29"] {
            assert!(receipt(raw, "13:01").purchase_date().is_none(), "{raw}");
        }
    }

    #[test]
    fn wall_clock_times_parse() {
        assert!(receipt("2022-01-01", "00:00").purchase_time().is_some());
        assert!(receipt("2022-01-01", "23:59").purchase_time().is_some());
    }

    #[test]
    fn loose_or_out_of_range_times_are_rejected() {
        for raw in ["9:30", "24:00", "12:60", "12-30", "12:3", "12:305"] {
            assert!(receipt("2022-01-01", raw).purchase_time().is_none(), "{raw}");
        }
    }

    #[test]
    fn amounts_parse_exactly() {
        let receipt = Receipt {
            total: "35.35".to_string(),
            ..receipt("2022-01-01", "13:01")
        };
        assert_eq!(receipt.total_amount(), Some(Decimal::new(3535, 2)));
    }

    #[test]
    fn malformed_amounts_are_none() {
        for raw in ["", "abc", "1.2.3", "$5.00"] {
            let receipt = Receipt {
                total: raw.to_string(),
                ..receipt("2022-01-01", "13:01")
            };
            assert_eq!(receipt.total_amount(), None, "{raw}");
        }
    }

    #[test]
    fn generated_identifiers_are_distinct() {
        assert_ne!(ReceiptId::generate(), ReceiptId::generate());
    }
}
