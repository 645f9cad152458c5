//! Byte-stream framing for the (5,2) linear code.
//!
//! Each input byte is read most significant bit first and split into four
//! 2-bit messages. Every message becomes a 5-bit codeword, so one byte of
//! data occupies 20 bits on the wire. The output is packed MSB first and
//! zero padded to a whole number of bytes.

use crate::cs::ecc::gf2::Bit;
use crate::cs::ecc::linear::{
    extract_message, Codeword, LinearCode, Message, CODEWORD_BITS, MESSAGE_BITS,
};
use crate::cs::ecc::{ErrorCorrection, Result};
use crate::cs::error::Error;
use bitvec::prelude::*;
use log::debug;

/// Messages carried by one input byte
const BLOCKS_PER_BYTE: usize = 8 / MESSAGE_BITS;

/// Applies a [`LinearCode`] block by block to arbitrary byte slices.
#[derive(Debug, Clone, Default)]
pub struct LinearStreamCoder {
    code: LinearCode,
}

impl LinearStreamCoder {
    /// Creates a stream coder around a fresh (5,2) code.
    pub fn new() -> Self {
        Self::with_code(LinearCode::new())
    }

    /// Creates a stream coder around an existing code.
    pub fn with_code(code: LinearCode) -> Self {
        LinearStreamCoder { code }
    }

    /// The underlying block code.
    pub fn code(&self) -> &LinearCode {
        &self.code
    }

    /// Gets the number of encoded bytes needed for a given number of input bytes
    pub fn encoded_bytes_needed(&self, input_bytes: usize) -> usize {
        (input_bytes * BLOCKS_PER_BYTE * CODEWORD_BITS).div_ceil(8)
    }
}

impl ErrorCorrection for LinearStreamCoder {
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut encoded: BitVec<u8, Msb0> =
            BitVec::with_capacity(data.len() * BLOCKS_PER_BYTE * CODEWORD_BITS);

        for chunk in data.view_bits::<Msb0>().chunks_exact(MESSAGE_BITS) {
            let message: Message = [Bit::from(chunk[0]), Bit::from(chunk[1])];
            let codeword = self.code.encode_message(&message);
            encoded.extend(codeword.iter().map(|&b| b == 1));
        }

        Ok(encoded.into_vec())
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let bits = data.view_bits::<Msb0>();
        let blocks = bits.len() / CODEWORD_BITS;

        // Padding is always shorter than one byte
        if blocks % BLOCKS_PER_BYTE != 0
            || self.encoded_bytes_needed(blocks / BLOCKS_PER_BYTE) != data.len()
        {
            return Err(Error::InvalidInput(format!(
                "{} bytes is not a valid encoded length",
                data.len()
            )));
        }

        let mut decoded: BitVec<u8, Msb0> = BitVec::with_capacity(blocks * MESSAGE_BITS);
        let mut corrections = 0usize;

        for block in bits.chunks_exact(CODEWORD_BITS).take(blocks) {
            let mut received: Codeword = [0; CODEWORD_BITS];
            for (bit, value) in received.iter_mut().zip(block.iter().by_vals()) {
                *bit = Bit::from(value);
            }

            let corrected = self.code.correct_word(&received)?;
            if corrected != received {
                corrections += 1;
            }
            decoded.extend(extract_message(&corrected).iter().map(|&b| b == 1));
        }

        if corrections > 0 {
            debug!("corrected {} of {} blocks", corrections, blocks);
        }

        Ok(decoded.into_vec())
    }
}

/// Encodes data using the (5,2) linear code
pub fn linear_encode(data: &[u8]) -> Result<Vec<u8>> {
    LinearStreamCoder::new().encode(data)
}

/// Decodes data using the (5,2) linear code, correcting one error per block
pub fn linear_decode(encoded: &[u8]) -> Result<Vec<u8>> {
    LinearStreamCoder::new().decode(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_length() {
        let coder = LinearStreamCoder::new();
        assert_eq!(coder.encoded_bytes_needed(0), 0);
        assert_eq!(coder.encoded_bytes_needed(1), 3);
        assert_eq!(coder.encoded_bytes_needed(2), 5);
        assert_eq!(coder.encoded_bytes_needed(4), 10);

        let encoded = coder.encode(b"Test").unwrap();
        assert_eq!(encoded.len(), 10);
    }

    #[test]
    fn test_single_byte_layout() {
        // 0b10_01_11_00 -> 10111 01011 11100 00000, padded with four zeros
        let encoded = linear_encode(&[0b1001_1100]).unwrap();
        assert_eq!(encoded, vec![0b1011_1010, 0b1111_1000, 0b0000_0000]);
    }

    #[test]
    fn test_encode_decode_no_errors() {
        let data = b"Test data for the (5,2) code";
        let encoded = linear_encode(data).unwrap();
        let decoded = linear_decode(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_single_error_per_block_corrected() {
        let data = b"Test";
        let coder = LinearStreamCoder::new();
        let mut encoded = coder.encode(data).unwrap();

        // One flip in each of the first two blocks
        encoded[0] ^= 0x40;
        encoded[0] ^= 0x02;

        let decoded = coder.decode(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_double_error_in_block_detected() {
        let coder = LinearStreamCoder::new();
        let mut encoded = coder.encode(&[0x00]).unwrap();

        // Bits 2 and 3 of the first block give syndrome 110
        encoded[0] ^= 0x30;

        let result = coder.decode(&encoded);
        assert_eq!(
            result,
            Err(Error::UncorrectableError {
                syndrome: [1, 1, 0]
            })
        );
    }

    #[test]
    fn test_invalid_length() {
        let coder = LinearStreamCoder::new();
        assert!(matches!(
            coder.decode(&[0x00, 0x00]),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            coder.decode(&[0x00; 4]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        let encoded = linear_encode(&[]).unwrap();
        assert!(encoded.is_empty());

        let decoded = linear_decode(&[]).unwrap();
        assert!(decoded.is_empty());
    }
}
