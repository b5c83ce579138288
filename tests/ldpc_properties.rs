//! Integration tests exercising the decoder, CRC, and GF(2) inverter as an
//! external caller would: through the public API only, with synthetic LLR
//! channels rather than hand-built message matrices.

use ft8_ldpc::{check, crc, decode_llr, decode_prob, gj_invert};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const N: usize = 174;
const M: usize = 83;
const K: usize = 91;

fn cq_sota_codeword() -> Vec<u8> {
    let msg = "00000000010111100101100110000000010100100110110011100110110001100111110010001";
    let crc = "00001001100101";
    let parity = "11100110011001101100100111100011101000010001100111111001100110001110011001011110010";
    msg.bytes()
        .chain(crc.bytes())
        .chain(parity.bytes())
        .map(|b| (b == b'1') as u8)
        .collect()
}

fn saturated_llr(codeword: &[u8], magnitude: f64) -> Vec<f64> {
    codeword.iter().map(|&b| if b == 1 { -magnitude } else { magnitude }).collect()
}

/// All-zeros codeword, uniformly confident LLRs: one iteration is enough
/// for either decoder to return the all-zero codeword as valid.
#[test]
fn all_zero_codeword_decodes_in_one_iteration() {
    let codeword = vec![0u8; N];
    let llr = vec![10.0f64; N];

    let (hard, ok) = decode_llr(&llr, 1).unwrap();
    assert_eq!(ok, M);
    assert_eq!(hard, codeword);

    let (hard, ok) = decode_prob(&llr, 1).unwrap();
    assert_eq!(ok, M);
    assert_eq!(hard, codeword);
}

/// All-zeros codeword with one bit's LLR flipped to the wrong sign. Both
/// decoders should recover within a couple of iterations.
#[test]
fn single_corrupted_llr_self_corrects() {
    let codeword = vec![0u8; N];
    let mut llr = vec![10.0f64; N];
    llr[50] = -10.0;

    let (hard, ok) = decode_llr(&llr, 5).unwrap();
    assert_eq!(ok, M);
    assert_eq!(hard, codeword);

    let (hard, ok) = decode_prob(&llr, 5).unwrap();
    assert_eq!(ok, M);
    assert_eq!(hard, codeword);
}

/// A zero-iteration budget on an inconsistent LLR vector: no belief
/// propagation happens, so the reported score is just `check` of the
/// channel's sign decision, and the returned hard codeword is that same
/// sign decision.
#[test]
fn zero_iteration_budget_reports_the_initial_sign_decode() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xF7_81);
    let llr: Vec<f64> = (0..N).map(|_| rng.random_range(-3.0..3.0)).collect();

    let sign_decoded: Vec<u8> = llr.iter().map(|&l| (l <= 0.0) as u8).collect();
    let initial_score = check(&sign_decoded);

    let (hard, ok) = decode_llr(&llr, 0).unwrap();
    assert_eq!(hard, sign_decoded);
    assert_eq!(ok, initial_score);
}

/// crc14 of a single leading 1 bit followed by 76 zeros exercises the
/// generator polynomial's first shift in isolation.
#[test]
fn crc14_of_a_single_leading_one_matches_the_shifted_generator() {
    let mut msg = [0u8; 77];
    msg[0] = 1;
    let out = crc::crc14(&msg);
    let expected = 0b01100010001010u16;
    assert_eq!(out, expected);
}

/// Both decoders are deterministic: identical input produces byte-identical
/// output across repeated calls, and across a spread of random noisy
/// channels drawn from a fixed seed.
#[test]
fn decoders_are_deterministic_over_many_random_channels() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let codeword = cq_sota_codeword();

    for _ in 0..25 {
        let noise_scale = rng.random_range(2.0..8.0);
        let llr: Vec<f64> = codeword
            .iter()
            .map(|&b| {
                let sign = if b == 1 { -1.0 } else { 1.0 };
                sign * noise_scale + rng.random_range(-0.5..0.5)
            })
            .collect();

        let first = decode_llr(&llr, 30).unwrap();
        let second = decode_llr(&llr, 30).unwrap();
        assert_eq!(first, second);

        let first = decode_prob(&llr, 30).unwrap();
        let second = decode_prob(&llr, 30).unwrap();
        assert_eq!(first, second);
    }
}

/// Monotone best-so-far: running the same channel with increasing
/// iteration budgets never reports a lower score than a smaller budget did.
#[test]
fn best_so_far_score_is_monotone_in_iteration_budget() {
    let mut bits = cq_sota_codeword();
    bits[30] ^= 1;
    bits[95] ^= 1;
    bits[140] ^= 1;
    let llr = saturated_llr(&bits, 3.0);

    let mut previous_score = 0;
    for iters in [0usize, 1, 2, 4, 8, 16, 32] {
        let (_hard, ok) = decode_llr(&llr, iters).unwrap();
        assert!(ok >= previous_score, "score regressed at iters={iters}");
        previous_score = ok;
    }
}

/// `gj_invert` must be able to complete a singular top-91 block by
/// borrowing a pivot row from the 83 "extra equation" rows below it: row 1
/// of the candidate submatrix here duplicates row 0, but row 91 supplies
/// the missing equation. After inversion, the product of the selected
/// rows (per `which`) and the returned inverse must be the identity.
#[test]
fn gj_invert_borrows_a_pivot_row_from_below_row_91() {
    let mut original = vec![[0u8; K]; N];
    original[0][0] = 1;
    original[1][0] = 1; // duplicate of row 0: rows [0,91) alone are singular
    for i in 2..K {
        original[i][i] = 1;
    }
    original[K][1] = 1; // the missing equation, parked outside the top 91 rows

    let mut m = [[0u8; 2 * K]; N];
    for r in 0..N {
        m[r][..K].copy_from_slice(&original[r]);
    }
    let mut which = [0usize; K];

    assert!(gj_invert(&mut m, &mut which));
    assert_eq!(which[1], K, "row 1's pivot should have been borrowed from row 91");

    // Recompute the product (selected rows of `original`) * (inverse) over
    // GF(2) and check it comes out to the identity.
    for out_row in 0..K {
        let src_row = which[out_row];
        for col in 0..K {
            let mut acc = 0u8;
            for k in 0..K {
                acc ^= original[src_row][k] & m[k][K + col];
            }
            let expected = (out_row == col) as u8;
            assert_eq!(acc, expected, "mismatch at row {out_row}, col {col}");
        }
    }
}

/// A submatrix with an all-zero column can never find a pivot there, so
/// `gj_invert` must report singular rather than loop or panic.
#[test]
fn gj_invert_reports_singular_for_a_zero_padded_submatrix() {
    let mut m = [[0u8; 2 * K]; N];
    for i in 1..K {
        m[i][i] = 1;
    }
    // Column 0 is all-zero across every one of the 174 rows: no pivot exists.
    let mut which = [0usize; K];
    assert!(!gj_invert(&mut m, &mut which));
}
