//! Binary double-and-add (spec.md §4.3).

use crate::limits::MAX_SCALAR_BYTES;
use crate::point::Point;
use crate::scalar::Scalar;

/// Multiplies `*p` by `k`, scanning `k`'s big-endian bit representation
/// MSB-first. `scal_bits` is the bit width of `k`'s concrete type (used to
/// size the byte marshalling buffer); it must not exceed
/// [`crate::limits::MAX_SCALAR_BITS`].
pub fn scalar_mul_double_add_vartime<P: Point>(p: &mut P, k: &impl Scalar, scal_bits: u32) {
    if p.to_affine().is_identity() {
        p.set_inf();
        return;
    }

    let n_bytes = ((scal_bits + 7) / 8) as usize;
    debug_assert!(n_bytes <= MAX_SCALAR_BYTES);
    let mut buf = [0u8; MAX_SCALAR_BYTES];
    let bytes = &mut buf[..n_bytes];
    k.to_be_bytes(bytes);

    let p_affine = p.to_affine();
    p.set_inf();
    let mut is_inf = true;

    for &byte in bytes.iter() {
        for bit in (0..8u32).rev() {
            if !is_inf {
                *p = p.double();
            }
            if (byte >> bit) & 1 == 1 {
                if is_inf {
                    *p = P::from_affine(&p_affine);
                    is_inf = false;
                } else {
                    *p = p.madd_vartime(&p_affine);
                }
            }
        }
    }
}
