//! Error types shared by the coding algorithms.

use thiserror::Error;

use crate::cs::ecc::gf2::Bit;

/// Errors raised by encoding, syndrome computation, correction and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Wrong vector length, a non-binary element, or malformed text.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The syndrome matches no coset leader, so more than one bit is in error.
    #[error("uncorrectable error: syndrome {} matches no single-bit error", render(.syndrome))]
    UncorrectableError { syndrome: [Bit; 3] },
}

fn render(bits: &[Bit]) -> String {
    bits.iter().map(|b| char::from(b'0' + b)).collect()
}

/// Result type for the coding algorithms
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::InvalidInput("message must be 2 bits".to_string());
        assert_eq!(err.to_string(), "invalid input: message must be 2 bits");

        let err = Error::UncorrectableError { syndrome: [1, 1, 0] };
        assert_eq!(
            err.to_string(),
            "uncorrectable error: syndrome 110 matches no single-bit error"
        );
    }
}
