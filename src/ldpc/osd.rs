//! Ordered-statistics decoding: the two post-BP fallbacks tried when belief
//! propagation alone doesn't converge. `flip_fallback` is the cheap
//! reliability-ordered bit-flip search; `gj_invert` is the more expensive
//! GF(2) matrix inversion a higher layer uses to solve for a codeword over
//! a chosen set of 91 reliable positions.

use super::constants::{M, N};
use super::HardCodeword;
use crate::error::{LdpcError, WrongLlrLengthSnafu, WrongMessageLengthSnafu};
use snafu::ensure;

/// Number of least-reliable systematic bits considered at order 1.
const ORDER1_CANDIDATES: usize = 30;
/// Number of least-reliable systematic bits considered at order 2.
const ORDER2_CANDIDATES: usize = 20;
/// Systematic (message+CRC) prefix length; only these bits are flipped.
const K: usize = super::constants::K;

/// Try to turn a hard-decision codeword that fails some parity checks into
/// one that satisfies all of them, by flipping its least-reliable
/// systematic bits.
///
/// `max_order` controls how hard to try: `0` only re-scores the codeword
/// as given, `1` additionally tries every single-bit flip among the 30
/// least reliable systematic bits, and `2` additionally tries every pair
/// drawn from the 20 least reliable. Returns `Some` only on reaching a
/// codeword that satisfies all 83 checks; never returns a codeword scoring
/// lower than the input.
pub fn flip_fallback(
    hard: &[u8],
    llr: &[f64],
    max_order: usize,
) -> Result<Option<HardCodeword>, LdpcError> {
    ensure!(hard.len() == N, WrongMessageLengthSnafu { expected: N, actual: hard.len() });
    ensure!(llr.len() == N, WrongLlrLengthSnafu { expected: N, actual: llr.len() });

    if super::check::check(hard) == M {
        return Ok(Some(hard.to_vec()));
    }
    if max_order == 0 {
        return Ok(None);
    }

    let mut order: Vec<usize> = (0..K).collect();
    order.sort_by(|&a, &b| llr[a].abs().partial_cmp(&llr[b].abs()).unwrap());

    let order1 = &order[..ORDER1_CANDIDATES.min(K)];
    for &i in order1 {
        let mut candidate = hard.to_vec();
        candidate[i] ^= 1;
        if super::check::check(&candidate) == M {
            return Ok(Some(candidate));
        }
    }
    if max_order < 2 {
        return Ok(None);
    }

    let order2 = &order[..ORDER2_CANDIDATES.min(K)];
    for a in 0..order2.len() {
        for b in (a + 1)..order2.len() {
            let mut candidate = hard.to_vec();
            candidate[order2[a]] ^= 1;
            candidate[order2[b]] ^= 1;
            if super::check::check(&candidate) == M {
                return Ok(Some(candidate));
            }
        }
    }

    Ok(None)
}

/// Invert a 174x182 augmented binary matrix in place over GF(2): the left
/// 91 columns hold the submatrix being inverted, the right 91 start at
/// zero and are lazily built into the identity as each pivot is found.
///
/// `which[r]` records, for each of the 91 pivot positions, which of the
/// 174 input rows ended up there after row swaps. Returns `false` (matrix
/// left in a partially-reduced state) if 91 independent pivot rows cannot
/// be found, i.e. the submatrix is singular.
pub fn gj_invert(m: &mut [[u8; 182]; 174], which: &mut [usize; 91]) -> bool {
    let mut row_id: [usize; 174] = core::array::from_fn(|i| i);

    for r in 0..91 {
        if m[r][r] == 0 {
            let pivot = ((r + 1)..174).find(|&r2| m[r2][r] == 1);
            match pivot {
                Some(r2) => {
                    m.swap(r, r2);
                    row_id.swap(r, r2);
                }
                None => return false,
            }
        }

        m[r][91 + r] ^= 1;

        for i in 0..174 {
            if i != r && m[i][r] == 1 {
                for c in 0..182 {
                    m[i][c] ^= m[r][c];
                }
            }
        }
    }

    for r in 0..91 {
        which[r] = row_id[r];
    }
    true
}
