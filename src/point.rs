//! Point-level primitives consumed by the scalar multiplication core.
//!
//! Field arithmetic, the curve equation, and the choice of projective
//! representation (Jacobian, projective, ...) are entirely up to
//! implementations of these two traits; this crate only calls through them
//! and never reads a coordinate.

/// A curve point in affine coordinates (`Aff[F,G]`).
///
/// Used only as the element type of precomputation tables and as the
/// right-hand operand of mixed addition; implementations encode the point
/// at infinity as `(0, 0)` per the data model, but that encoding is never
/// observed through this trait.
pub trait Affine: Copy + Clone {
    /// Returns `-self`.
    fn neg(&self) -> Self;

    /// True iff this is the point at infinity.
    fn is_identity(&self) -> bool;
}

/// A curve point in a projective-class representation (`EC[F,G]`):
/// Jacobian or projective coordinates, with a dedicated encoding for the
/// point at infinity.
pub trait Point: Copy + Clone {
    /// This point's affine counterpart.
    type Affine: Affine;

    /// Returns `2 * self`.
    fn double(&self) -> Self;

    /// Returns `self + other`, both in projective-class form. Variable-time.
    fn sum_vartime(&self, other: &Self) -> Self;

    /// Returns `self - other`, both in projective-class form. Variable-time.
    fn diff_vartime(&self, other: &Self) -> Self;

    /// Returns `self + other` for an affine `other`. `other` must not be
    /// the point at infinity; callers never pass that here.
    fn madd_vartime(&self, other: &Self::Affine) -> Self;

    /// Returns `self - other` for an affine `other`. `other` must not be
    /// the point at infinity.
    fn msub_vartime(&self, other: &Self::Affine) -> Self;

    /// Returns `-self`.
    fn neg(&self) -> Self;

    /// Sets `self` to the point at infinity.
    fn set_inf(&mut self);

    /// Builds a projective-class point from its affine form.
    fn from_affine(p: &Self::Affine) -> Self;

    /// Converts to affine form.
    fn to_affine(&self) -> Self::Affine;

    /// Converts `points` to affine in one pass (shared-inversion batch
    /// conversion), writing results into `out`. `points` and `out` must
    /// have equal length.
    fn batch_to_affine(points: &[Self], out: &mut [Self::Affine]);
}
