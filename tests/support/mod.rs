//! Shared toy curve fixture for the integration tests in this directory:
//! `y^2 = x^3 + 3` over `F_79`, prime subgroup of order 97 generated by
//! `G = (1, 2)`, with a genuine cube-root-of-unity endomorphism
//! (`ζ = 23`, eigenvalue `λ = 61`) for exercising the GLV path. Every
//! constant here was independently verified by direct computation, not
//! derived from this crate.

use weierstrass_vartime_mul::curve::{CurveConfig, EndoCurve};
use weierstrass_vartime_mul::point::{Affine as AffineTrait, Point as PointTrait};
use weierstrass_vartime_mul::scalar::Scalar as ScalarTrait;

pub const P: i64 = 79;
pub const ORDER: i64 = 97;
pub const ZETA: i64 = 23;
pub const LAMBDA: i64 = 61;

fn norm(a: i64) -> i64 {
    ((a % P) + P) % P
}
fn add_f(a: i64, b: i64) -> i64 {
    norm(a + b)
}
fn sub_f(a: i64, b: i64) -> i64 {
    norm(a - b)
}
fn mul_f(a: i64, b: i64) -> i64 {
    norm(a * b)
}
fn inv_f(a: i64) -> i64 {
    let mut result = 1i64;
    let mut base = norm(a);
    let mut exp = P - 2;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_f(result, base);
        }
        base = mul_f(base, base);
        exp >>= 1;
    }
    result
}

fn mod_pow(base: i64, exp: i64, m: i64) -> i64 {
    let mut result = 1i64;
    let mut b = base.rem_euclid(m);
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result = (result * b).rem_euclid(m);
        }
        b = (b * b).rem_euclid(m);
        e >>= 1;
    }
    result
}
pub fn mod_inverse(a: i64, m: i64) -> i64 {
    mod_pow(a, m - 2, m)
}

/// A toy curve point. Plays the role of both `Point` and `Affine`: with a
/// field this small there's no performance reason for a separate
/// projective representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToyPoint {
    pub x: i64,
    pub y: i64,
    pub inf: bool,
}

impl ToyPoint {
    pub const IDENTITY: ToyPoint = ToyPoint { x: 0, y: 0, inf: true };

    pub fn new(x: i64, y: i64) -> Self {
        ToyPoint { x: norm(x), y: norm(y), inf: false }
    }

    pub fn g() -> Self {
        ToyPoint::new(1, 2)
    }

    fn neg_impl(&self) -> Self {
        if self.inf {
            return *self;
        }
        ToyPoint::new(self.x, sub_f(0, self.y))
    }

    fn double_impl(&self) -> Self {
        if self.inf || self.y == 0 {
            return Self::IDENTITY;
        }
        let lambda = mul_f(mul_f(3, mul_f(self.x, self.x)), inv_f(mul_f(2, self.y)));
        let x3 = sub_f(mul_f(lambda, lambda), mul_f(2, self.x));
        let y3 = sub_f(mul_f(lambda, sub_f(self.x, x3)), self.y);
        ToyPoint::new(x3, y3)
    }

    fn add_impl(&self, other: &Self) -> Self {
        if self.inf {
            return *other;
        }
        if other.inf {
            return *self;
        }
        if self.x == other.x {
            if add_f(self.y, other.y) == 0 {
                return Self::IDENTITY;
            }
            return self.double_impl();
        }
        let lambda = mul_f(sub_f(other.y, self.y), inv_f(sub_f(other.x, self.x)));
        let x3 = sub_f(sub_f(mul_f(lambda, lambda), self.x), other.x);
        let y3 = sub_f(mul_f(lambda, sub_f(self.x, x3)), self.y);
        ToyPoint::new(x3, y3)
    }
}

impl AffineTrait for ToyPoint {
    fn neg(&self) -> Self {
        self.neg_impl()
    }
    fn is_identity(&self) -> bool {
        self.inf
    }
}

impl PointTrait for ToyPoint {
    type Affine = ToyPoint;

    fn double(&self) -> Self {
        self.double_impl()
    }
    fn sum_vartime(&self, other: &Self) -> Self {
        self.add_impl(other)
    }
    fn diff_vartime(&self, other: &Self) -> Self {
        self.add_impl(&other.neg_impl())
    }
    fn madd_vartime(&self, other: &Self::Affine) -> Self {
        debug_assert!(!other.inf);
        self.add_impl(other)
    }
    fn msub_vartime(&self, other: &Self::Affine) -> Self {
        debug_assert!(!other.inf);
        self.add_impl(&other.neg_impl())
    }
    fn neg(&self) -> Self {
        self.neg_impl()
    }
    fn set_inf(&mut self) {
        *self = Self::IDENTITY;
    }
    fn from_affine(p: &Self::Affine) -> Self {
        *p
    }
    fn to_affine(&self) -> Self::Affine {
        *self
    }
    fn batch_to_affine(points: &[Self], out: &mut [Self::Affine]) {
        for (o, p) in out.iter_mut().zip(points.iter()) {
            *o = *p;
        }
    }
}

/// Reference `k * G`, computed by plain double-and-add over the affine
/// formulas above, independent of anything under test. `k` need not be
/// reduced mod the subgroup order.
pub fn reference_mul(k: i64, base: ToyPoint) -> ToyPoint {
    let mut r = ToyPoint::IDENTITY;
    let mut q = base;
    let mut k = k;
    while k > 0 {
        if k & 1 == 1 {
            r = r.add_impl(&q);
        }
        q = q.double_impl();
        k >>= 1;
    }
    r
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToyScalar(pub u64);

impl ScalarTrait for ToyScalar {
    fn to_be_bytes(&self, out: &mut [u8]) {
        for b in out.iter_mut() {
            *b = 0;
        }
        let val_bytes = self.0.to_be_bytes();
        let n = out.len();
        if n >= 8 {
            out[n - 8..].copy_from_slice(&val_bytes);
        } else {
            out.copy_from_slice(&val_bytes[8 - n..]);
        }
    }

    fn lowest_limb(&self) -> u64 {
        self.0
    }

    fn used_bits_vartime(&self) -> u32 {
        if self.0 == 0 {
            0
        } else {
            64 - self.0.leading_zeros()
        }
    }

    /// Standard NAF recoding, computed right-to-left and reversed: the
    /// top (most significant) digit is always nonzero, since the loop
    /// only stops once `k` reaches exactly zero.
    fn recode_l2r_signed_vartime(&self, out: &mut [i8]) -> usize {
        let mut k = self.0 as i64;
        let mut digits = [0i8; 128];
        let mut len = 0usize;
        while k != 0 {
            let d = if k & 1 == 1 {
                let z = 2 - k.rem_euclid(4);
                k -= z;
                z
            } else {
                0
            };
            digits[len] = d as i8;
            len += 1;
            k >>= 1;
        }
        for i in 0..len {
            out[i] = digits[len - 1 - i];
        }
        len
    }

    /// Standard right-to-left windowed NAF: odd digits centered into
    /// `(-2^(window-1), 2^(window-1)]`.
    fn recode_r2l_signed_window_vartime(&self, window: u32, out: &mut [i8]) -> usize {
        let modulus = 1i64 << window;
        let half = 1i64 << (window - 1);
        let mut k = self.0 as i64;
        let mut len = 0usize;
        while k != 0 {
            let d = if k & 1 == 1 {
                let mut r = k.rem_euclid(modulus);
                if r > half {
                    r -= modulus;
                }
                k -= r;
                r
            } else {
                0
            };
            out[len] = d as i8;
            len += 1;
            k >>= window;
        }
        len
    }
}

/// BLS12-381-G1-shaped config: `M = 2`, endomorphism = multiply `x` by the
/// cube root of unity `ζ`.
#[derive(Clone, Copy)]
pub struct ToyG1;

impl CurveConfig for ToyG1 {
    type Point = ToyPoint;
    type Affine = ToyPoint;
    type Scalar = ToyScalar;

    const SCALAR_BITS: u32 = 7;
    const ORDER_BITWIDTH: u32 = 7;
    const HAS_ENDOMORPHISM: bool = true;
}

impl EndoCurve<2> for ToyG1 {
    fn endomorphism_images(p: &ToyPoint, out: &mut [ToyPoint]) {
        out[0] = if p.inf {
            ToyPoint::IDENTITY
        } else {
            ToyPoint::new(mul_f(ZETA, p.x), p.y)
        };
    }

    /// Brute-force GLV decomposition: for each candidate `k1` in a small
    /// range, `k2` is solved for exactly via the modular equation, so
    /// every candidate considered is already a valid decomposition — the
    /// search only picks the one with the smallest max coefficient.
    /// Verified exhaustively over the whole subgroup in
    /// `decompose_endo_is_consistent` and `glv_decomposition_reconstructs_scalar`.
    fn decompose_endo(k: &ToyScalar, out_scalars: &mut [ToyScalar; 2], out_negate: &mut [bool; 2]) {
        let target = (k.0 as i64).rem_euclid(ORDER);
        let lam_inv = mod_inverse(LAMBDA, ORDER);
        let mut best = (0i64, target);
        let mut best_score = target.abs();
        for k1 in -12..=12i64 {
            let mut k2 = ((target - k1).rem_euclid(ORDER) * lam_inv).rem_euclid(ORDER);
            if k2 > ORDER / 2 {
                k2 -= ORDER;
            }
            if (k1 + k2 * LAMBDA).rem_euclid(ORDER) != target {
                continue;
            }
            let score = k1.abs().max(k2.abs());
            if score < best_score {
                best_score = score;
                best = (k1, k2);
            }
        }
        let (k1, k2) = best;
        out_negate[0] = k1 < 0;
        out_scalars[0] = ToyScalar(k1.unsigned_abs());
        out_negate[1] = k2 < 0;
        out_scalars[1] = ToyScalar(k2.unsigned_abs());
    }
}
