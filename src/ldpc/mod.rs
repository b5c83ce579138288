//! LDPC(174,91) forward-error correction: parity checking, two independent
//! belief-propagation decoders (probability domain and LLR domain), and the
//! ordered-statistics fallback (bit flipping plus GF(2) Gauss-Jordan) used
//! when belief propagation alone doesn't converge.

pub mod constants;
mod check;
mod decode_llr;
mod decode_prob;
mod osd;
mod tanh;

pub use check::check;
pub use decode_llr::{decode_llr, decode_llr_with_ap};
pub use decode_prob::decode_prob;
pub use osd::{flip_fallback, gj_invert};
pub use tanh::tanh_approx;

/// A 174-bit hard-decision codeword, one byte (0 or 1) per bit.
pub type HardCodeword = Vec<u8>;

/// Find which slot of check `m`'s row in [`constants::NM`] holds variable
/// `n` (both 0-based). Every variable touches exactly
/// [`constants::VAR_DEGREE`] checks, so this always finds a match.
pub(crate) fn edge_index(m: usize, n: usize) -> usize {
    let target = (n + 1) as u8;
    for i in 0..constants::NRW[m] {
        if constants::NM[m][i] == target {
            return i;
        }
    }
    unreachable!("variable {n} is not adjacent to check {m}");
}
