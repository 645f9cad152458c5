//! Arithmetic over GF(2), the field with two elements.
//!
//! Addition is XOR and multiplication is AND. Vectors and matrices are
//! fixed-size arrays so that every shape mismatch is a compile error rather
//! than a runtime fault.

/// A single field element, always 0 or 1.
pub type Bit = u8;

/// Adds two field elements.
#[inline]
pub const fn add(a: Bit, b: Bit) -> Bit {
    a ^ b
}

/// Multiplies two field elements.
#[inline]
pub const fn multiply(a: Bit, b: Bit) -> Bit {
    a & b
}

/// Returns true if `value` is a field element.
#[inline]
pub const fn is_bit(value: Bit) -> bool {
    value <= 1
}

/// Row vector times matrix: `result[j] = sum_i vector[i] * matrix[i][j]`.
///
/// Used for encoding, `c = m * G`.
pub fn vector_times_matrix<const ROWS: usize, const COLS: usize>(
    vector: &[Bit; ROWS],
    matrix: &[[Bit; COLS]; ROWS],
) -> [Bit; COLS] {
    let mut result = [0; COLS];
    for (j, out) in result.iter_mut().enumerate() {
        *out = vector
            .iter()
            .zip(matrix.iter())
            .fold(0, |sum, (&v, row)| add(sum, multiply(v, row[j])));
    }
    result
}

/// Matrix times column vector: `result[i] = sum_j matrix[i][j] * vector[j]`.
///
/// Used for syndromes, `s = H * r^T`.
pub fn matrix_times_vector<const ROWS: usize, const COLS: usize>(
    matrix: &[[Bit; COLS]; ROWS],
    vector: &[Bit; COLS],
) -> [Bit; ROWS] {
    let mut result = [0; ROWS];
    for (out, row) in result.iter_mut().zip(matrix.iter()) {
        *out = row
            .iter()
            .zip(vector.iter())
            .fold(0, |sum, (&m, &v)| add(sum, multiply(m, v)));
    }
    result
}

/// Elementwise sum of two vectors.
pub fn add_vectors<const N: usize>(a: &[Bit; N], b: &[Bit; N]) -> [Bit; N] {
    let mut result = [0; N];
    for (out, (&x, &y)) in result.iter_mut().zip(a.iter().zip(b.iter())) {
        *out = add(x, y);
    }
    result
}

/// Packs a vector into an integer, first element in the most significant bit.
pub fn pack<const N: usize>(vector: &[Bit; N]) -> usize {
    vector.iter().fold(0, |acc, &b| (acc << 1) | usize::from(b & 1))
}
