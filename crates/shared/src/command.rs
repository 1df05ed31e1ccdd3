#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid slot: {0}")]
    InvalidSlot(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_invalid_slot(&self) -> bool {
        matches!(self, Self::InvalidSlot(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

#[macro_export]
macro_rules! not_found {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::NotFound(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::NotFound(format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! invalid_input {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::InvalidInput(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::InvalidInput(format!($fmt, $($arg)*)))
    };
}

/// Field validator for money amounts: finite and not negative.
pub fn validate_amount(
    amount: impl std::borrow::Borrow<f64>,
) -> std::result::Result<(), validator::ValidationError> {
    let amount = *amount.borrow();
    if !amount.is_finite() || amount < 0.0 {
        return Err(validator::ValidationError::new("amount")
            .with_message("Amount must be a finite, non-negative number".into()));
    }

    Ok(())
}
