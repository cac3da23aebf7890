//! Fixed 4-bit addition chain (spec.md §4.2), for scalars `0 <= k < 16`.
//!
//! Every one of the 16 cases is its own hardcoded sequence of doublings and
//! adds/subs rather than a generic loop, so the chain length matches the
//! minimal chain for that nibble exactly.

use crate::point::Point;
use crate::scalar::Scalar;

/// Multiplies `*p` by the low 4 bits of `k`'s lowest limb. Callers
/// guarantee `k < 16`; behavior for wider scalars is unspecified (the
/// dispatcher never invokes this path for them).
pub fn scalar_mul_addchain_4bit_vartime<P: Point>(p: &mut P, k: &impl Scalar) {
    let s = (k.lowest_limb() & 0xF) as u8;
    match s {
        0 => p.set_inf(),
        1 => {}
        2 => *p = p.double(),
        3 => {
            let t = p.double();
            *p = p.sum_vartime(&t);
        }
        4 => {
            *p = p.double();
            *p = p.double();
        }
        5 => {
            let mut t = p.double();
            t = t.double();
            *p = p.sum_vartime(&t);
        }
        6 => {
            let t = p.double();
            *p = p.sum_vartime(&t);
            *p = p.double();
        }
        7 => {
            let mut t = p.double();
            t = t.double();
            t = t.double();
            *p = t.diff_vartime(&*p);
        }
        8 => {
            *p = p.double();
            *p = p.double();
            *p = p.double();
        }
        9 => {
            let mut t = p.double();
            t = t.double();
            t = t.double();
            *p = p.sum_vartime(&t);
        }
        10 => {
            let mut t = p.double();
            t = t.double();
            *p = p.sum_vartime(&t);
            *p = p.double();
        }
        11 => {
            let mut t1 = p.double();
            let mut t2 = t1.double();
            t2 = t2.double();
            t1 = t1.sum_vartime(&t2);
            *p = p.sum_vartime(&t1);
        }
        12 => {
            let mut t1 = p.double();
            t1 = t1.double();
            let t2 = t1.double();
            *p = t1.sum_vartime(&t2);
        }
        13 => {
            let mut t1 = p.double();
            t1 = t1.double();
            let t2 = t1.double();
            t1 = t1.sum_vartime(&t2);
            *p = p.sum_vartime(&t1);
        }
        14 => {
            let mut t = p.double();
            t = t.double();
            t = t.double();
            t = t.diff_vartime(&*p);
            *p = t.double();
        }
        15 => {
            let mut t = p.double();
            t = t.double();
            t = t.double();
            t = t.double();
            *p = t.diff_vartime(&*p);
        }
        _ => unreachable!("low nibble of a u64 is always < 16"),
    }
}
