//! The single dispatcher (spec.md §4.1) that picks among the five
//! algorithms by scalar bit width and endomorphism availability.

use crate::addchain::scalar_mul_addchain_4bit_vartime;
use crate::curve::EndoCurve;
use crate::double_add::scalar_mul_double_add_vartime;
use crate::wnaf::scalar_mul_min_hamming_weight_windowed_vartime;
use crate::wnaf_endo::scalar_mul_endo_min_hamming_weight_windowed_vartime;

/// The algorithm [`scalar_mul_vartime`] selects for a given scalar.
/// Exposed (along with [`select_algorithm`]) so the selection table can be
/// tested without re-deriving scalar arithmetic (spec.md §8 property 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Fixed 4-bit addition chain, for `usedBits <= 4`.
    AddChain4Bit,
    /// Plain binary double-and-add, for `4 < usedBits <= 16`.
    DoubleAndAdd,
    /// Windowed wNAF with the given window, for `usedBits > 16`.
    WindowedWnaf {
        /// wNAF window width.
        window: u32,
    },
    /// Endomorphism-accelerated windowed wNAF, when available and the
    /// scalar is wide enough to amortize the decomposition.
    EndoWindowedWnaf {
        /// wNAF window width.
        window: u32,
    },
}

/// Computes the algorithm `scalar_mul_vartime` would run for a scalar with
/// `used_bits` significant bits, given a curve configuration described by
/// `scalar_bits` (the concrete `Scalar` type's bit width), `order_bitwidth`,
/// `has_endomorphism`, and endomorphism dimension `m`.
///
/// The endomorphism path only fires when `scalar_bits == order_bitwidth`
/// (the scalar type is exactly sized to the curve order — a mismatched,
/// oversized `Scalar` type disables it rather than risk an inconsistent
/// decomposition) and the scalar is at least `L = ceil(order_bitwidth / m)
/// + 1` bits wide, since below that width the decomposition overhead isn't
/// recovered.
pub fn select_algorithm(
    scalar_bits: u32,
    order_bitwidth: u32,
    has_endomorphism: bool,
    m: usize,
    used_bits: u32,
) -> Algorithm {
    let l = (order_bitwidth as usize).div_ceil(m) as u32 + 1;
    if scalar_bits == order_bitwidth && has_endomorphism && used_bits >= l {
        return Algorithm::EndoWindowedWnaf {
            window: if m == 4 { 3 } else { 4 },
        };
    }
    if used_bits > 64 {
        Algorithm::WindowedWnaf { window: 5 }
    } else if used_bits > 16 {
        Algorithm::WindowedWnaf { window: 3 }
    } else if used_bits > 4 {
        Algorithm::DoubleAndAdd
    } else {
        Algorithm::AddChain4Bit
    }
}

/// Multiplies `*p` by `k`, dispatching to whichever of the five algorithms
/// is cheapest for `k`'s bit width and `C`'s endomorphism availability.
///
/// `M` is the endomorphism dimension for `C` (2 for `Fp`/G1, 4 for
/// `Fp2`/G2); it is only consulted when `C::HAS_ENDOMORPHISM` is true.
pub fn scalar_mul_vartime<C, const M: usize>(p: &mut C::Point, k: &C::Scalar)
where
    C: EndoCurve<M>,
{
    use crate::point::Point as _;
    use crate::scalar::Scalar as _;

    if p.to_affine().is_identity() {
        p.set_inf();
        return;
    }

    let used_bits = k.used_bits_vartime();
    let algo = select_algorithm(
        C::SCALAR_BITS,
        C::ORDER_BITWIDTH,
        C::HAS_ENDOMORPHISM,
        M,
        used_bits,
    );

    match algo {
        Algorithm::EndoWindowedWnaf { window } => {
            scalar_mul_endo_min_hamming_weight_windowed_vartime::<C, M>(p, k, window)
        }
        Algorithm::WindowedWnaf { window } => {
            scalar_mul_min_hamming_weight_windowed_vartime(p, k, window)
        }
        Algorithm::DoubleAndAdd => scalar_mul_double_add_vartime(p, k, C::SCALAR_BITS),
        Algorithm::AddChain4Bit => scalar_mul_addchain_4bit_vartime(p, k),
    }
}
