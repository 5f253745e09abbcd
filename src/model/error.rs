use thiserror::Error;

/// Rejected textual input for one of the model's formatted values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    #[error("Invalid phone number: {0}")]
    Phone(String),

    #[error("Invalid club code: {0}")]
    ClubCode(String),

    #[error("Invalid order number: {0}")]
    OrderNumber(String),

    #[error("Invalid pickup code: {0}")]
    PickupCode(String),
}
