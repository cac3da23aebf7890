//! Non-windowed signed left-to-right recoding (spec.md §4.4).

use crate::limits::MAX_NAF_LEN;
use crate::point::Point;
use crate::scalar::Scalar;

/// Multiplies `*p` by `k` using its minimal-Hamming-weight signed L2R
/// digit expansion. Relies on [`Scalar::recode_l2r_signed_vartime`]'s
/// documented guarantee that no leading zero digit is ever emitted, so the
/// accumulator is initialized directly from the first digit rather than
/// via a mixed add against an infinite left operand.
pub fn scalar_mul_min_hamming_weight_vartime<P: Point>(p: &mut P, k: &impl Scalar) {
    if p.to_affine().is_identity() {
        p.set_inf();
        return;
    }

    let p_affine = p.to_affine();
    let mut digits = [0i8; MAX_NAF_LEN];
    let len = k.recode_l2r_signed_vartime(&mut digits);

    let mut is_init = false;
    for &d in &digits[..len] {
        if is_init {
            *p = p.double();
            if d > 0 {
                *p = p.madd_vartime(&p_affine);
            } else if d < 0 {
                *p = p.msub_vartime(&p_affine);
            }
        } else if d > 0 {
            *p = P::from_affine(&p_affine);
            is_init = true;
        } else if d < 0 {
            *p = P::from_affine(&p_affine).neg();
            is_init = true;
        }
    }

    if !is_init {
        p.set_inf();
    }
}
