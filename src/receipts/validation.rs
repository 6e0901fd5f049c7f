use super::domain::Receipt;

/// Rejection reasons for a structurally decoded receipt, in the order the
/// checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("receipt must contain at least one item")]
    EmptyItems,
    #[error("purchase date must be a valid YYYY-MM-DD calendar date")]
    InvalidDate,
    #[error("purchase time must be a valid 24-hour HH:MM time")]
    InvalidTime,
    #[error("item descriptions must not be blank")]
    EmptyDescription,
}

/// Check a decoded receipt for well-formedness before any scoring or storage
/// happens. The first failing check wins; total and item prices are
/// deliberately not inspected here.
pub fn validate(receipt: &Receipt) -> Result<(), ValidationError> {
    if receipt.items.is_empty() {
        return Err(ValidationError::EmptyItems);
    }
    if receipt.purchase_date().is_none() {
        return Err(ValidationError::InvalidDate);
    }
    if receipt.purchase_time().is_none() {
        return Err(ValidationError::InvalidTime);
    }
    if receipt
        .items
        .iter()
        .any(|item| item.trimmed_description().is_empty())
    {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(())
}
