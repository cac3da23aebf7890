//! Windowed wNAF (spec.md §4.5).

use crate::limits::{MAX_NAF_LEN, MAX_PRECOMP_LEN};
use crate::naf_eval::{accum_naf, init_naf};
use crate::point::Point;
use crate::precomp::build_odd_multiples;
use crate::scalar::Scalar;

/// Multiplies `*p` by `k` using a windowed-wNAF recoding with window
/// `window` (`2 <= window < 8`).
pub fn scalar_mul_min_hamming_weight_windowed_vartime<P: Point>(
    p: &mut P,
    k: &impl Scalar,
    window: u32,
) {
    debug_assert!((2..8).contains(&window));

    if p.to_affine().is_identity() {
        p.set_inf();
        return;
    }

    let precomp_len = 1usize << (window - 2);
    debug_assert!(precomp_len <= MAX_PRECOMP_LEN);

    let mut tab_ec = [*p; MAX_PRECOMP_LEN];
    build_odd_multiples(&*p, &mut tab_ec[..precomp_len]);

    let mut tab = [p.to_affine(); MAX_PRECOMP_LEN];
    P::batch_to_affine(&tab_ec[..precomp_len], &mut tab[..precomp_len]);

    let mut naf = [0i8; MAX_NAF_LEN];
    let naf_len = k.recode_r2l_signed_window_vartime(window, &mut naf);

    p.set_inf();
    let mut is_init = false;
    for i in (0..naf_len).rev() {
        let d = naf[i];
        if is_init {
            *p = p.double();
            accum_naf(p, &tab[..precomp_len], d);
        } else {
            is_init = init_naf(p, &tab[..precomp_len], d);
        }
    }
}
