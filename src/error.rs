use thiserror::Error;

/// Message carried by every [`PairingError`]
pub const PAIRING_ERROR_MESSAGE: &str =
    "you must give the pairing operation an argument of an instance of the Entity type!";

/// Raised when the pairing operation is given something that is not an Entity
///
/// The error carries no data: only its kind and its fixed message are observable.
#[derive(Error, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[error("{}", PAIRING_ERROR_MESSAGE)]
pub struct PairingError;

impl PairingError {
    pub fn new() -> Self {
        Self
    }

    /// The fixed, human-readable description of the failure
    pub fn message(&self) -> &'static str {
        PAIRING_ERROR_MESSAGE
    }
}

/// Returned when a pairing policy name cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown pairing policy '{0}', expected 'transactional' or 'asymmetric'")]
pub struct UnknownPolicy(pub String);

/// Errors that can occur while running pairings and reporting entities
/// Only `Pairing` is a domain failure; the others are system-level (I/O, CSV)
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Pairing(#[from] PairingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_message() {
        let err = PairingError::new();
        assert_eq!(err.to_string(), PAIRING_ERROR_MESSAGE);
        assert_eq!(err.message(), PAIRING_ERROR_MESSAGE);
    }

    #[test]
    fn test_pairing_error_converts_into_crate_error() {
        let err: Error = PairingError.into();
        assert!(matches!(err, Error::Pairing(PairingError)));
        // Transparent: the wrapper adds nothing to the message
        assert_eq!(err.to_string(), PAIRING_ERROR_MESSAGE);
    }

    #[test]
    fn test_io_error_is_not_a_pairing_error() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::Other, "disk gone").into();
        assert!(!matches!(err, Error::Pairing(_)));
        assert!(err.to_string().starts_with("IO error"));
    }
}
