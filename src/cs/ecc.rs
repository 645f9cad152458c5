//! Error correction code implementations.
//!
//! This module provides a fixed (5,2) linear block code over GF(2):
//! - GF(2) scalar and matrix arithmetic ([`gf2`])
//! - Syndrome-table decoding with single-bit error correction ([`linear`])
//!
//! # Error Correction Algorithms
//!
//! Error correction codes are used to detect and correct errors in data
//! transmission and storage, making digital communications more reliable.
//!
//! # Examples
//!
//! ```rust
//! use linecode::cs::ecc::LinearCode;
//!
//! let code = LinearCode::new();
//! let codeword = code.encode(&[1, 0]).unwrap();
//! assert_eq!(codeword, [1, 0, 1, 1, 1]);
//!
//! let received: [u8; 5] = [1, 0, 1, 1, 0];
//! let corrected = code.correct(&received).unwrap();
//! assert_eq!(code.decode(&corrected).unwrap(), [1, 0]);
//! ```

pub use crate::cs::error::Result;

/// Trait for error correction code implementations
pub trait ErrorCorrection {
    /// Encode data with error correction symbols
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decode data and correct errors if possible
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Arithmetic over the binary field
pub mod gf2;

/// The (5,2) linear code
pub mod linear;
pub use linear::{
    create_linear_code_5_2, flip_bit, format_bits, linear_decode, linear_encode, parse_bits,
    Codeword, LinearCode, LinearStreamCoder, Message, Syndrome, WordAnalysis, CODEWORD_BITS,
    MESSAGE_BITS, SYNDROME_BITS,
};
