//! Endomorphism-accelerated (GLV/GLS) windowed wNAF (spec.md §4.6).
//!
//! Generalizes `wnaf.rs` from one base point to `M` base points (the point
//! itself plus its `M - 1` endomorphism images), each with its own
//! precomputation table and digit stream, evaluated in lockstep: one
//! doubling per digit position, shared across all `M` streams.

use crate::curve::EndoCurve;
use crate::limits::{MAX_ENDO_DIM, MAX_NAF_LEN, MAX_PRECOMP_LEN};
use crate::naf_eval::{accum_naf, init_naf};
use crate::point::Point;
use crate::precomp::build_odd_multiples;

/// Multiplies `*p` by `k` using an `M`-way endomorphism decomposition and
/// windowed-wNAF evaluation with window `window` (`2 <= window < 8`).
pub fn scalar_mul_endo_min_hamming_weight_windowed_vartime<C, const M: usize>(
    p: &mut C::Point,
    k: &C::Scalar,
    window: u32,
) where
    C: EndoCurve<M>,
{
    debug_assert!((2..=MAX_ENDO_DIM).contains(&M));
    debug_assert!((2..8).contains(&window));

    if p.to_affine().is_identity() {
        p.set_inf();
        return;
    }

    let precomp_len = 1usize << (window - 2);
    debug_assert!(precomp_len <= MAX_PRECOMP_LEN);

    // M base points: self, plus the M - 1 endomorphism images.
    let mut bases = [*p; MAX_ENDO_DIM];
    {
        let mut images = [*p; MAX_ENDO_DIM];
        C::endomorphism_images(&*p, &mut images[..M - 1]);
        bases[1..M].copy_from_slice(&images[..M - 1]);
    }

    // Decompose k into M mini-scalars and sign flags.
    let mut mini_scalars = [*k; MAX_ENDO_DIM];
    let mut negate = [false; MAX_ENDO_DIM];
    {
        let mut ms = [*k; M];
        let mut ng = [false; M];
        C::decompose_endo(k, &mut ms, &mut ng);
        mini_scalars[..M].copy_from_slice(&ms);
        negate[..M].copy_from_slice(&ng);
    }
    for m in 0..M {
        if negate[m] {
            bases[m] = bases[m].neg();
        }
    }

    // Per-endomorphism precomputation tables, each batch-converted to
    // affine in one pass.
    let mut tab_ec = [[bases[0]; MAX_PRECOMP_LEN]; MAX_ENDO_DIM];
    for m in 0..M {
        build_odd_multiples(&bases[m], &mut tab_ec[m][..precomp_len]);
    }
    let mut tab = [[bases[0].to_affine(); MAX_PRECOMP_LEN]; MAX_ENDO_DIM];
    for m in 0..M {
        C::Point::batch_to_affine(&tab_ec[m][..precomp_len], &mut tab[m][..precomp_len]);
    }

    // Per-endomorphism digit streams, recoded to a shared length.
    let mut tab_naf = [[0i8; MAX_NAF_LEN]; MAX_ENDO_DIM];
    let mut naf_len = 0usize;
    for m in 0..M {
        let used = mini_scalars[m].recode_r2l_signed_window_vartime(window, &mut tab_naf[m]);
        naf_len = naf_len.max(used);
    }

    p.set_inf();
    let mut is_init = false;
    for i in (0..naf_len).rev() {
        if is_init {
            *p = p.double();
        }
        for m in 0..M {
            let d = tab_naf[m][i];
            if is_init {
                accum_naf(p, &tab[m][..precomp_len], d);
            } else {
                is_init |= init_naf(p, &tab[m][..precomp_len], d);
            }
        }
    }
}
