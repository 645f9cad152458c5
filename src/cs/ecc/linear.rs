//! (5,2) linear block code over GF(2) with syndrome decoding.
//!
//! A 2-bit message is mapped to a 5-bit codeword by multiplying it with the
//! generator matrix G. The parity-check matrix H satisfies `H * c^T = 0` for
//! every codeword `c`, so the syndrome `H * r^T` of a received word depends
//! only on the error pattern. Every column of H is distinct and non-zero,
//! which makes each single-bit error identifiable from its syndrome.
//!
//! ```text
//!      | 1 0 1 1 1 |          | 1 0 1 0 0 |
//!  G = | 0 1 0 1 1 |      H = | 1 1 0 1 0 |
//!                             | 1 1 0 0 1 |
//! ```
//!
//! The code is systematic: the message occupies the first two positions of
//! the codeword. Its minimum distance is 3, so one error per word can be
//! corrected. Two of the eight possible syndromes (`110` and `101`) arise
//! from no single-bit error and are reported as uncorrectable.
//!
//! # Applications
//!
//! - Teaching syndrome decoding on a code small enough to check by hand
//! - Protecting short control fields where a single flipped bit is the
//!   dominant failure

use crate::cs::ecc::gf2::{self, Bit};
use crate::cs::ecc::Result;
use crate::cs::error::Error;
use log::{debug, trace, warn};

pub mod stream;
pub use stream::{linear_decode, linear_encode, LinearStreamCoder};

/// Number of message bits (k)
pub const MESSAGE_BITS: usize = 2;
/// Number of codeword bits (n)
pub const CODEWORD_BITS: usize = 5;
/// Number of syndrome bits (n - k)
pub const SYNDROME_BITS: usize = CODEWORD_BITS - MESSAGE_BITS;

const SYNDROME_COUNT: usize = 1 << SYNDROME_BITS;

/// A 2-bit message
pub type Message = [Bit; MESSAGE_BITS];
/// A 5-bit codeword, received word or error vector
pub type Codeword = [Bit; CODEWORD_BITS];
/// A 3-bit syndrome
pub type Syndrome = [Bit; SYNDROME_BITS];

/// Generator matrix, one basis codeword per message bit
const G: [[Bit; CODEWORD_BITS]; MESSAGE_BITS] = [[1, 0, 1, 1, 1], [0, 1, 0, 1, 1]];

/// Parity-check matrix
const H: [[Bit; CODEWORD_BITS]; SYNDROME_BITS] =
    [[1, 0, 1, 0, 0], [1, 1, 0, 1, 0], [1, 1, 0, 0, 1]];

/// The (5,2) linear code.
///
/// The matrices and the syndrome table are fixed at construction and never
/// change afterwards, so a single instance can be shared freely between
/// threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearCode {
    /// Generator matrix G (2x5)
    generator: [[Bit; CODEWORD_BITS]; MESSAGE_BITS],
    /// Parity-check matrix H (3x5)
    parity_check: [[Bit; CODEWORD_BITS]; SYNDROME_BITS],
    /// Coset leader for each packed syndrome, `None` when no error of weight
    /// at most one produces it
    syndrome_table: [Option<Codeword>; SYNDROME_COUNT],
}

/// Everything that can be said about a single received word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordAnalysis {
    /// The word as received
    pub received: Codeword,
    /// `H * received^T`
    pub syndrome: Syndrome,
    /// Coset leader for the syndrome, `None` if more than one bit is in error
    pub error_vector: Option<Codeword>,
    /// Nearest codeword under the single-error assumption
    pub corrected: Option<Codeword>,
    /// Message carried by the corrected word
    pub message: Option<Message>,
}

impl WordAnalysis {
    /// True if the received word has a zero syndrome.
    pub fn is_codeword(&self) -> bool {
        self.syndrome.iter().all(|&b| b == 0)
    }

    /// True if the received word could be mapped to a codeword.
    pub fn is_correctable(&self) -> bool {
        self.corrected.is_some()
    }
}

impl LinearCode {
    /// Creates the code and builds its syndrome table.
    ///
    /// For each of the five positions the unit error vector is multiplied by
    /// H and the resulting syndrome is mapped back to it. The zero syndrome
    /// maps to the zero vector.
    pub fn new() -> Self {
        let mut syndrome_table = [None; SYNDROME_COUNT];

        for position in 0..CODEWORD_BITS {
            let mut error_vector = [0; CODEWORD_BITS];
            error_vector[position] = 1;

            let syndrome = gf2::matrix_times_vector(&H, &error_vector);
            debug!(
                "syndrome {} -> error vector {}",
                format_bits(&syndrome),
                format_bits(&error_vector)
            );
            syndrome_table[gf2::pack(&syndrome)] = Some(error_vector);
        }
        syndrome_table[0] = Some([0; CODEWORD_BITS]);

        LinearCode {
            generator: G,
            parity_check: H,
            syndrome_table,
        }
    }

    /// Returns the generator matrix G.
    pub fn generator(&self) -> &[[Bit; CODEWORD_BITS]; MESSAGE_BITS] {
        &self.generator
    }

    /// Returns the parity-check matrix H.
    pub fn parity_check(&self) -> &[[Bit; CODEWORD_BITS]; SYNDROME_BITS] {
        &self.parity_check
    }

    /// Iterates over the known (syndrome, error vector) pairs in ascending
    /// syndrome order.
    pub fn syndrome_table(&self) -> impl Iterator<Item = (Syndrome, Codeword)> + '_ {
        self.syndrome_table
            .iter()
            .enumerate()
            .filter_map(|(key, entry)| entry.map(|e| (unpack_syndrome(key), e)))
    }

    /// All four codewords, in message order `00, 01, 10, 11`.
    pub fn codewords(&self) -> [Codeword; 1 << MESSAGE_BITS] {
        let mut codewords = [[0; CODEWORD_BITS]; 1 << MESSAGE_BITS];
        for (value, codeword) in codewords.iter_mut().enumerate() {
            let message = [((value >> 1) & 1) as Bit, (value & 1) as Bit];
            *codeword = self.encode_message(&message);
        }
        codewords
    }

    /// Encodes a 2-bit message into a 5-bit codeword (`c = m * G`).
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the message is not exactly two binary digits.
    pub fn encode(&self, message: &[Bit]) -> Result<Codeword> {
        let message: Message = to_vector(message, "message")?;
        Ok(self.encode_message(&message))
    }

    /// Computes the syndrome of a received word (`s = H * r^T`).
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the word is not exactly five binary digits.
    pub fn syndrome(&self, received: &[Bit]) -> Result<Syndrome> {
        let received: Codeword = to_vector(received, "received word")?;
        Ok(self.syndrome_of(&received))
    }

    /// Looks up the error vector for a received word.
    ///
    /// Returns `Ok(None)` when the syndrome is not produced by any error of
    /// weight at most one, i.e. the word cannot be corrected.
    pub fn error_vector(&self, received: &[Bit]) -> Result<Option<Codeword>> {
        let syndrome = self.syndrome(received)?;
        Ok(self.lookup(&syndrome))
    }

    /// Returns the coset leader stored for `syndrome`, if any.
    pub fn lookup(&self, syndrome: &Syndrome) -> Option<Codeword> {
        self.syndrome_table[gf2::pack(syndrome)]
    }

    /// Corrects a single-bit error in a received word.
    ///
    /// A valid codeword is returned unchanged.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a malformed word, `UncorrectableError` when the
    /// syndrome points to more than one flipped bit.
    pub fn correct(&self, received: &[Bit]) -> Result<Codeword> {
        let received: Codeword = to_vector(received, "received word")?;
        self.correct_word(&received)
    }

    /// Extracts the message from a codeword.
    ///
    /// The word is not checked against H; run [`LinearCode::correct`] first
    /// if it came off a noisy channel.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the codeword is not exactly five binary digits.
    pub fn decode(&self, codeword: &[Bit]) -> Result<Message> {
        let codeword: Codeword = to_vector(codeword, "codeword")?;
        Ok(extract_message(&codeword))
    }

    /// Computes the syndrome, error vector, correction and decoded message of
    /// a received word in one pass.
    ///
    /// An uncorrectable word is not an error here; the optional fields of
    /// the returned analysis are left empty instead.
    pub fn analyze(&self, received: &[Bit]) -> Result<WordAnalysis> {
        let received: Codeword = to_vector(received, "received word")?;
        let syndrome = self.syndrome_of(&received);
        let error_vector = self.lookup(&syndrome);
        let corrected = error_vector.map(|e| gf2::add_vectors(&received, &e));

        Ok(WordAnalysis {
            received,
            syndrome,
            error_vector,
            corrected,
            message: corrected.as_ref().map(extract_message),
        })
    }

    pub(crate) fn encode_message(&self, message: &Message) -> Codeword {
        gf2::vector_times_matrix(message, &self.generator)
    }

    pub(crate) fn correct_word(&self, received: &Codeword) -> Result<Codeword> {
        let syndrome = self.syndrome_of(received);
        match self.lookup(&syndrome) {
            Some(error_vector) => Ok(gf2::add_vectors(received, &error_vector)),
            None => {
                warn!(
                    "cannot correct {}: syndrome {} implies more than one error",
                    format_bits(received),
                    format_bits(&syndrome)
                );
                Err(Error::UncorrectableError { syndrome })
            }
        }
    }

    fn syndrome_of(&self, received: &Codeword) -> Syndrome {
        let syndrome = gf2::matrix_times_vector(&self.parity_check, received);
        trace!(
            "syndrome of {} is {}",
            format_bits(received),
            format_bits(&syndrome)
        );
        syndrome
    }
}

impl Default for LinearCode {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn extract_message(codeword: &Codeword) -> Message {
    [codeword[0], codeword[1]]
}

fn unpack_syndrome(key: usize) -> Syndrome {
    let mut syndrome = [0; SYNDROME_BITS];
    for (i, bit) in syndrome.iter_mut().enumerate() {
        *bit = ((key >> (SYNDROME_BITS - 1 - i)) & 1) as Bit;
    }
    syndrome
}

/// Checks the length and contents of a caller-supplied vector.
fn to_vector<const N: usize>(bits: &[Bit], what: &str) -> Result<[Bit; N]> {
    let vector: [Bit; N] = bits.try_into().map_err(|_| {
        Error::InvalidInput(format!(
            "{} must be {} bits long, got {}",
            what,
            N,
            bits.len()
        ))
    })?;

    if let Some((index, value)) = vector.iter().enumerate().find(|(_, b)| !gf2::is_bit(**b)) {
        return Err(Error::InvalidInput(format!(
            "{} element {} is {}, expected 0 or 1",
            what, index, value
        )));
    }

    Ok(vector)
}

/// Parses a string of `0` and `1` characters into a bit vector of the
/// expected length. Surrounding whitespace is ignored.
pub fn parse_bits(text: &str, expected_len: usize) -> Result<Vec<Bit>> {
    let text = text.trim();
    let bits = text
        .chars()
        .map(|c| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            other => Err(Error::InvalidInput(format!(
                "'{}' is not a binary digit",
                other
            ))),
        })
        .collect::<Result<Vec<Bit>>>()?;

    if bits.len() != expected_len {
        return Err(Error::InvalidInput(format!(
            "expected a {}-bit binary string, got {} digits",
            expected_len,
            bits.len()
        )));
    }

    Ok(bits)
}

/// Renders a bit vector as a string of digits, e.g. `10111`.
pub fn format_bits(bits: &[Bit]) -> String {
    bits.iter().map(|&b| if b == 0 { '0' } else { '1' }).collect()
}

/// Flips one bit of a codeword, simulating a channel error.
pub fn flip_bit(codeword: &Codeword, position: usize) -> Result<Codeword> {
    if position >= CODEWORD_BITS {
        return Err(Error::InvalidInput(format!(
            "bit position {} is out of range 0..{}",
            position, CODEWORD_BITS
        )));
    }
    let mut flipped = *codeword;
    flipped[position] = gf2::add(flipped[position], 1);
    Ok(flipped)
}

/// Creates the (5,2) linear code
pub fn create_linear_code_5_2() -> LinearCode {
    LinearCode::new()
}
