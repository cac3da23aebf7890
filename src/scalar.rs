//! Scalar-side primitives: fixed-width big-integer marshalling and the two
//! recoding primitives this crate treats as external collaborators.

/// A fixed-width non-negative scalar (`BigInt<bits>`).
pub trait Scalar: Copy + Clone {
    /// Writes the big-endian byte encoding of this scalar into `out`.
    /// `out` must be exactly `ceil(bits / 8)` bytes for the concrete type.
    fn to_be_bytes(&self, out: &mut [u8]);

    /// This scalar's lowest limb, as an unsigned integer. Used only to
    /// read the low 4 bits for the addition-chain path.
    fn lowest_limb(&self) -> u64;

    /// Position of the highest set bit, plus one (`0` for the zero
    /// scalar). Variable-time.
    fn used_bits_vartime(&self) -> u32;

    /// Left-to-right minimal-Hamming-weight signed digit recoding.
    /// Digits are written into `out` in emission order (`out[0]` most
    /// significant); returns the number of digits written.
    ///
    /// Implementations MUST NOT emit a leading zero digit: `out[0]` is
    /// always `+1` or `-1`. `l2r.rs` relies on this to avoid ever handing
    /// an infinite left operand to a mixed add/sub.
    fn recode_l2r_signed_vartime(&self, out: &mut [i8]) -> usize;

    /// Right-to-left windowed NAF recoding for window `window`
    /// (`2 <= window < 8`). Digits are written into `out` least
    /// significant first; returns the number of digits written
    /// (`nafLen`). Positions at or beyond the returned length are
    /// unspecified and must not be read.
    fn recode_r2l_signed_window_vartime(&self, window: u32, out: &mut [i8]) -> usize;
}
