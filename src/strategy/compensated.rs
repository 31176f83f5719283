//! The compensated digit-extraction strategy.
//!
//! The input is scaled by a table power of ten into the canonical frame
//! `(0.1, 1.0]`, together with the two bounds of its rounding interval, each
//! carried as a compensated pair. Digits are then generated from both bounds
//! in lock step: while the bounds agree on a digit the interval is still too
//! wide to stop; the first digit they disagree on is emitted from the upper
//! bound and terminates the output. One shared routine serves every entry
//! point, parameterized by digits per scaling step and by the margin
//! divisor.

use crate::bits::{frexp, next_down, next_up};
use crate::hp::{self, Hp};
use crate::table;

/// Digits extracted per scaling step.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Step {
    One,
    Four,
}

/// Production margin divisor: true half-ULP interval bounds.
pub const HALF: f64 = 2.0;
/// Oracle margin divisor: a fraction tighter than half, as the original
/// variant entry points ship it. The narrower interval trades a digit of
/// shortness in rare cases for midpoint-free output on every path.
pub const GUARD: f64 = 2.0000000000000016;

// fuel for the scaling loops; exhaustion means the table entry or the
// interval failed its contract, which asserts rather than loops forever
const SCALE_FUEL: u32 = 60;

/// Scales `v` into the canonical frame and emits digits until the interval
/// bounds diverge. `buf` must hold `crate::MAX_DIGITS` bytes.
pub fn format<'a>(v: f64, buf: &'a mut [u8], step: Step, divisor: f64) -> (&'a [u8], i16) {
    debug_assert!(v > 0.0 && v.is_finite());

    let (_, e) = frexp(v);
    let idx = table::pow10_index(e);
    let (tv, te) = table::POW10[idx];
    let mid = Hp::new(tv, te).product(v);

    // interval margins in the scaled frame. next_up(f64::MAX) is infinite;
    // the gap below stands in for the gap above there.
    let up = next_up(v);
    let gap_above = if up.is_finite() { up - v } else { v - next_down(v) };
    let gap_below = next_down(v) - v;
    let mut high = Hp::new(mid.val, mid.err + gap_above * tv / divisor);
    let mut low = Hp::new(mid.val, mid.err + gap_below * tv / divisor);

    // renormalize into (0.1, 1.0], tracking the decimal exponent. The
    // boundary comparisons disambiguate exactly-0.1 and exactly-1.0 by the
    // sign of the error against the canonical tenth.
    let mut exp = idx as i32 - 308;
    let mut fuel = SCALE_FUEL;
    while high.val < 0.1 || (high.val == 0.1 && high.err < hp::TENTH.err) {
        exp -= 1;
        high = high.mul10();
        low = low.mul10();
        fuel -= 1;
        assert!(fuel > 0, "renormalization stuck below 0.1");
    }
    fuel = SCALE_FUEL;
    while high.val > 1.0 || (high.val == 1.0 && high.err >= 0.0) {
        exp += 1;
        high = high.div10();
        low = low.div10();
        fuel -= 1;
        assert!(fuel > 0, "renormalization stuck above 1.0");
    }

    let mut len = 0;
    match step {
        Step::One => {
            for _ in 0..30 {
                high = high.mul10();
                low = low.mul10();
                let hdig = extract(&mut high);
                let ldig = extract(&mut low);
                debug_assert!((0..=9).contains(&hdig));
                buf[len] = b'0' + hdig as u8;
                len += 1;
                if hdig != ldig {
                    return (&buf[..len], exp as i16);
                }
            }
        }
        Step::Four => {
            for _ in 0..9 {
                high = high.mul10000();
                low = low.mul10000();
                let hchunk = extract(&mut high);
                let lchunk = extract(&mut low);
                debug_assert!((0..=9999).contains(&hchunk));
                let mut scale = 1000;
                for _ in 0..4 {
                    let hdig = hchunk / scale % 10;
                    let ldig = lchunk / scale % 10;
                    buf[len] = b'0' + hdig as u8;
                    len += 1;
                    if hdig != ldig {
                        return (&buf[..len], exp as i16);
                    }
                    scale /= 10;
                }
            }
        }
    }
    unreachable!("interval bounds failed to diverge for {v:e}")
}

/// Truncated integer part of a bound, advancing the pair to its fractional
/// remainder. A remainder of exactly zero with negative error means the
/// true bound sits just under the integer; borrow one back.
fn extract(x: &mut Hp) -> i32 {
    let mut digits = x.val as i32;
    x.val -= digits as f64;
    if x.val == 0.0 && x.err < 0.0 {
        digits -= 1;
        x.val += 1.0;
    }
    digits
}
