#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

//! Variable-time scalar multiplication core for short-Weierstrass curves
//! over `Fp` (G1 subgroups) and `Fp2` (G2 subgroups).
//!
//! This crate implements the dispatcher and five scalar multiplication
//! algorithms — a fixed 4-bit addition chain, binary double-and-add,
//! signed left-to-right recoding, windowed wNAF, and an
//! endomorphism-accelerated (GLV/GLS) windowed wNAF — against trait bounds
//! ([`Point`](point::Point), [`Affine`](point::Affine),
//! [`Scalar`](scalar::Scalar), [`CurveConfig`](curve::CurveConfig),
//! [`EndoCurve`](curve::EndoCurve)) rather than any concrete field or curve.
//! Field arithmetic, point arithmetic, Frobenius/cube-root endomorphisms,
//! GLV/GLS lattice decomposition, signed-digit recoding, and big-integer
//! marshalling are all supplied by the caller's implementations of those
//! traits.
//!
//! **This crate is explicitly variable-time.** Every algorithm here branches
//! and indexes on secret scalar bits; none of it is safe to use with a
//! scalar that must stay secret (e.g. a private key). It targets the
//! protocol-level uses of scalar multiplication where the scalar is public:
//! signature verification, public-input pairing checks, and similar.

pub mod curve;
pub mod point;
pub mod scalar;

mod addchain;
mod dispatch;
mod double_add;
mod l2r;
mod limits;
mod naf_eval;
mod precomp;
mod wnaf;
mod wnaf_endo;

pub use crate::addchain::scalar_mul_addchain_4bit_vartime;
pub use crate::dispatch::{scalar_mul_vartime, select_algorithm, Algorithm};
pub use crate::double_add::scalar_mul_double_add_vartime;
pub use crate::l2r::scalar_mul_min_hamming_weight_vartime;
pub use crate::limits::{MAX_ENDO_DIM, MAX_NAF_LEN, MAX_PRECOMP_LEN, MAX_SCALAR_BITS, MAX_SCALAR_BYTES};
pub use crate::wnaf::scalar_mul_min_hamming_weight_windowed_vartime;
pub use crate::wnaf_endo::scalar_mul_endo_min_hamming_weight_windowed_vartime;
