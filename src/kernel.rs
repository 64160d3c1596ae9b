//! Batch escape-time evaluation, 8 pixels per invocation.
//!
//! The block's 8 lanes are plain `f64` arrays updated in straight-line
//! loops the optimizer turns into vector code; because every lane is
//! ordinary scalar double arithmetic, the resulting masks are
//! bit-identical whatever vector width the target actually has.

/// Pixels evaluated per kernel invocation.
pub const BLOCK: usize = 8;

/// Iteration budget for the unconditional policy.
const FULL_STEPS: u32 = 50;

/// The early-exit policy runs in rounds of this many steps, testing for
/// whole-block escape after each round.
const PRUNE_ROUND: u32 = 4;

/// Rounds for the early-exit policy: 48 steps total, two fewer than
/// [`FULL_STEPS`]. Downstream output depends on this exact asymmetry.
const PRUNE_ROUNDS: u32 = 12;

/// Squared escape radius; comparing on `|z|^2` avoids a square root.
const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Iteration policy for one block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Run all 50 steps unconditionally. Defines the reference image.
    Full,
    /// Check for whole-block escape every 4 steps and return early.
    /// Only safe next to a block that already escaped entirely.
    Prune,
}

/// Evaluate one block of 8 horizontally adjacent points.
///
/// `c_re` holds each lane's real coordinate, `c_im` the row's shared
/// imaginary coordinate. Returns a lane-order mask: bit `p` set when
/// lane `p` (leftmost pixel = bit 0) still has `|z|^2 <= 4.0` after the
/// policy's iteration budget.
pub fn escape_block(c_re: &[f64; BLOCK], c_im: f64, policy: Policy) -> u8 {
    let mut re = *c_re;
    let mut im = [c_im; BLOCK];
    let mut norm_sq: [f64; BLOCK] = std::array::from_fn(|l| re[l] * re[l] + im[l] * im[l]);

    match policy {
        Policy::Full => {
            for _ in 0..FULL_STEPS {
                step(&mut re, &mut im, &mut norm_sq, c_re, c_im);
            }
        }
        Policy::Prune => {
            for _ in 0..PRUNE_ROUNDS {
                for _ in 0..PRUNE_ROUND {
                    step(&mut re, &mut im, &mut norm_sq, c_re, c_im);
                }
                if norm_sq.iter().all(|&s| s > ESCAPE_RADIUS_SQ) {
                    // Every lane provably escaped; the remaining rounds
                    // cannot un-escape any of them.
                    return 0;
                }
            }
        }
    }

    let mut mask = 0u8;
    for (lane, &s) in norm_sq.iter().enumerate() {
        if s <= ESCAPE_RADIUS_SQ {
            mask |= 1 << lane;
        }
    }
    mask
}

/// One step of `z -> z^2 + c` across all lanes.
///
/// `norm_sq` is refreshed from the pre-update `z`, so after `n` steps it
/// holds `|z_n|^2` while `re`/`im` already hold `z_{n+1}`.
#[inline]
fn step(
    re: &mut [f64; BLOCK],
    im: &mut [f64; BLOCK],
    norm_sq: &mut [f64; BLOCK],
    c_re: &[f64; BLOCK],
    c_im: f64,
) {
    for lane in 0..BLOCK {
        let rr = re[lane] * re[lane];
        let ii = im[lane] * im[lane];
        let ri = re[lane] * im[lane];
        norm_sq[lane] = rr + ii;
        re[lane] = rr - ii + c_re[lane];
        im[lane] = 2.0 * ri + c_im;
    }
}
