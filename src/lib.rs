//! Belief-propagation decoder, CRC-14, and GF(2) Gauss-Jordan inverter for
//! the FT8 (174,91) LDPC code.
//!
//! This crate is the forward-error-correction core of an FT8 receiver: it
//! has no I/O, no demodulation, and no message-layer semantics. Callers
//! hand it soft-decision LLRs for a 174-bit codeword and get back a
//! hard-decision codeword plus how many of the 83 parity checks it
//! satisfies; everything upstream (synchronization, symbol demodulation,
//! message unpacking) lives elsewhere.
//!
//! LLR sign convention: `LLR[i] = log(P(bit_i=0) / P(bit_i=1))`, so a
//! positive value means the bit is more likely `0`. Every function in this
//! crate (and the sample data in its tests) agrees with it.

pub mod crc;
pub mod error;
pub mod ldpc;
pub mod tracing_init;

pub use error::LdpcError;
pub use ldpc::{check, decode_llr, decode_llr_with_ap, decode_prob, flip_fallback, gj_invert, tanh_approx, HardCodeword};
