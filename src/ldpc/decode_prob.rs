//! Probability-domain sum-product (belief propagation) decoder.
//!
//! Works directly with probabilities rather than log-likelihoods. Slower
//! and more prone to underflow than [`super::decode_llr::decode_llr`], but
//! kept as a second, independently-checkable implementation of the same
//! Tanner graph since the two domains make different rounding mistakes easy
//! to spot against each other.

use super::constants::{M, MAX_CHECK_DEGREE, MN, N, NM, NRW, VAR_DEGREE};
use super::HardCodeword;
use crate::error::{LdpcError, WrongLlrLengthSnafu};
use snafu::ensure;

/// Decode a 174-bit LLR vector via probability-domain belief propagation.
///
/// Returns the best hard-decision codeword found across all iterations
/// (by parity checks satisfied) together with that check count. A
/// return of `(.., 83)` means a fully valid codeword was found; a lower
/// count means BP did not converge within `max_iterations`.
pub fn decode_prob(llr: &[f64], max_iterations: usize) -> Result<(HardCodeword, usize), LdpcError> {
    ensure!(llr.len() == N, WrongLlrLengthSnafu { expected: N, actual: llr.len() });

    let p0: Vec<f64> = llr.iter().map(|&l| 1.0 / (1.0 + (-l).exp())).collect();
    let p1: Vec<f64> = p0.iter().map(|&p| 1.0 - p).collect();

    // q1[m][i]: probability variable NM[m][i] is 1, as seen by check m.
    let mut q1 = vec![[0.0f64; MAX_CHECK_DEGREE]; M];
    for m in 0..M {
        for i in 0..NRW[m] {
            let n = NM[m][i] as usize - 1;
            q1[m][i] = p1[n];
        }
    }
    let mut r1 = vec![[0.0f64; MAX_CHECK_DEGREE]; M];

    let mut best_hard = vec![0u8; N];
    let mut best_ok = 0usize;

    for _iter in 0..=max_iterations {
        // Check-node update: r1[m][i] = 1/2 - 1/2 * prod_{i'!=i} (1 - 2*q1[m][i']).
        for m in 0..M {
            for i in 0..NRW[m] {
                let mut prod = 1.0f64;
                for k in 0..NRW[m] {
                    if k != i {
                        prod *= 1.0 - 2.0 * q1[m][k];
                    }
                }
                r1[m][i] = 0.5 - 0.5 * prod;
            }
        }

        // Total belief per variable (all three incident checks), then hard decision.
        let mut hard = vec![0u8; N];
        for n in 0..N {
            let mut unnorm1 = p1[n];
            let mut unnorm0 = p0[n];
            for k in 0..VAR_DEGREE {
                let m = MN[n][k] as usize - 1;
                let i = edge_index(m, n);
                unnorm1 *= r1[m][i];
                unnorm0 *= 1.0 - r1[m][i];
            }
            let denom = unnorm0 + unnorm1;
            // q0 == 0 (denom collapses to the all-one-sided case): treat as certain 1.
            let belief1 = if denom == 0.0 { 1.0 } else { unnorm1 / denom };
            hard[n] = (belief1 > 0.5) as u8;
        }

        let ok = super::check::check(&hard);
        if ok > best_ok {
            best_ok = ok;
            best_hard = hard.clone();
        }
        if ok == M {
            if tracing::enabled!(tracing::Level::DEBUG) {
                tracing::debug!(iter = _iter, "decode_prob converged");
            }
            return Ok((best_hard, best_ok));
        }
        if _iter == max_iterations {
            if tracing::enabled!(tracing::Level::DEBUG) {
                tracing::debug!(max_iterations, best_ok, "decode_prob exhausted iteration budget");
            }
            break;
        }

        // Variable-node update: extrinsic q1 for each variable/check edge.
        for n in 0..N {
            for j in 0..VAR_DEGREE {
                let m_j = MN[n][j] as usize - 1;
                let mut unnorm1 = p1[n];
                let mut unnorm0 = p0[n];
                for k in 0..VAR_DEGREE {
                    if k == j {
                        continue;
                    }
                    let m_k = MN[n][k] as usize - 1;
                    let i = edge_index(m_k, n);
                    unnorm1 *= r1[m_k][i];
                    unnorm0 *= 1.0 - r1[m_k][i];
                }
                let denom = unnorm0 + unnorm1;
                let q = if denom == 0.0 { 1.0 } else { unnorm1 / denom };
                let i_j = edge_index(m_j, n);
                q1[m_j][i_j] = q;
            }
        }
    }

    Ok((best_hard, best_ok))
}

use super::edge_index;
