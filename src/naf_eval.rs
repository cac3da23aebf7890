//! Shared accumulation helpers for signed-digit evaluation (spec.md §4.5,
//! §4.6, and the `isInit` fusion discussed in §9).
//!
//! A run of signed digits is evaluated right-to-left by doubling once per
//! digit and then adding or subtracting a table entry. The first nonzero
//! digit is special: the accumulator is still the point at infinity, which
//! mixed addition is not defined against, so that digit initializes the
//! accumulator directly from the table instead of adding into it. `init_naf`
//! and `accum_naf` fuse that bootstrap, the skip of the leading run of zero
//! digits, and the resulting add-vs-accumulate switch into one call site.

use crate::point::Point;

/// Consumes one digit `d` while `*p` is still known to be infinity.
/// `table[i]` must hold the affine form of `(2i + 1) * base`.
///
/// Returns `true` once `*p` holds a real point (i.e. `d != 0`); callers
/// stop calling `init_naf` and switch to `accum_naf` from that point on.
pub(crate) fn init_naf<P: Point>(p: &mut P, table: &[P::Affine], d: i8) -> bool {
    if d > 0 {
        let idx = (d as usize) >> 1;
        *p = P::from_affine(&table[idx]);
        true
    } else if d < 0 {
        let idx = ((-d) as usize) >> 1;
        *p = P::from_affine(&table[idx]).neg();
        true
    } else {
        false
    }
}

/// Accumulates one more digit `d` into `p`, which must already hold a real
/// (non-infinity) point. No-op for `d == 0`.
pub(crate) fn accum_naf<P: Point>(p: &mut P, table: &[P::Affine], d: i8) {
    if d > 0 {
        let idx = (d as usize) >> 1;
        *p = p.madd_vartime(&table[idx]);
    } else if d < 0 {
        let idx = ((-d) as usize) >> 1;
        *p = p.msub_vartime(&table[idx]);
    }
}
