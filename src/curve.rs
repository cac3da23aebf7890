//! Per-curve capability bundles consumed by [`crate::scalar_mul_vartime`].

use crate::point::{Affine, Point};
use crate::scalar::Scalar;

/// One implementation per concrete (curve, subgroup) pair: e.g. BLS12-381
/// G1 over `Fp`, or BLS12-381 G2 over `Fp2`. Field arithmetic, point
/// arithmetic, and curve-parameter lookups all live on the other side of
/// this trait; it only names types and bit widths.
pub trait CurveConfig: Copy {
    /// Projective-class point representation.
    type Point: Point<Affine = Self::Affine>;
    /// Affine point representation.
    type Affine: Affine;
    /// Scalar representation.
    type Scalar: Scalar;

    /// Bit width of the concrete `Scalar` type's backing integer.
    const SCALAR_BITS: u32;

    /// Bit width of the subgroup order.
    const ORDER_BITWIDTH: u32;

    /// Whether this configuration exposes an efficiently computable
    /// endomorphism (GLV over `Fp`, GLS over `Fp2`).
    const HAS_ENDOMORPHISM: bool;
}

/// Extension implemented by curve configurations that support
/// endomorphism-accelerated scalar multiplication.
///
/// `M` is the dimension of the scalar decomposition: 2 for G1 (cube root
/// of unity `ζ`), 4 for G2 (Frobenius powers `ψ, ψ², ψ³`). Configurations
/// with `HAS_ENDOMORPHISM = false` still implement this trait (commonly
/// with `M = 2` and bodies that are never reached, since the dispatcher
/// gates every call on `HAS_ENDOMORPHISM`); stable Rust has no way to make
/// the bound itself conditional on an associated `const`.
pub trait EndoCurve<const M: usize>: CurveConfig {
    /// Builds the `M - 1` endomorphism images of `p`, i.e.
    /// `out[m - 1] = endomorphism^m(p)` for `m = 1..M`.
    fn endomorphism_images(p: &Self::Point, out: &mut [Self::Point]);

    /// Decomposes `k` into `M` mini-scalars and sign flags such that
    /// `k ≡ Σ_{m=0}^{M-1} (±k_m) · λ^m (mod order)`, `λ` the endomorphism
    /// eigenvalue.
    ///
    /// Precondition (assumed, not checked): cofactor already cleared,
    /// `0 <= k < curve order`.
    fn decompose_endo(k: &Self::Scalar, out_scalars: &mut [Self::Scalar; M], out_negate: &mut [bool; M]);
}
