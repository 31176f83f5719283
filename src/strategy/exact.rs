//! Exact integer digit strategies.
//!
//! Between 2^53 and the top of the 128-bit range, every double's ULP is at
//! least 2, so the half-gap rounding-interval bounds are exact integers and
//! the whole conversion can run in `u128` with no floating-point scaling at
//! all. The same fixed-width expansion also serves the integral fast path
//! that `errol4` applies below the band.

use crate::bits::{next_down, next_up};

/// Lower edge of the exact-interval band: 2^53, the first binade whose
/// half-gaps are integral.
pub const BAND_LO: f64 = 9007199254740992.0;
/// Upper edge: beyond this the interval bounds no longer fit in 128 bits.
pub const BAND_HI: f64 = 3.40282366920938e38;

const WIDTH: usize = 40;
const CHUNK: u128 = 10_000_000_000_000_000_000; // 10^19, remainders fit u64

/// Expands `n > 0` into a fixed 40-digit array, working in `10^19` chunks
/// so the per-digit arithmetic stays in `u64`. Returns the digits and the
/// index of the most significant one.
fn expand(mut n: u128) -> ([u8; WIDTH], usize) {
    debug_assert!(n > 0);
    let mut digits = [0u8; WIDTH];
    let mut i = WIDTH;
    while n != 0 {
        let mut chunk = (n % CHUNK) as u64;
        n /= CHUNK;
        if n != 0 {
            // interior chunk: all nineteen digits, leading zeros included
            for _ in 0..19 {
                i -= 1;
                digits[i] = (chunk % 10) as u8;
                chunk /= 10;
            }
        } else {
            while chunk != 0 {
                i -= 1;
                digits[i] = (chunk % 10) as u8;
                chunk /= 10;
            }
        }
    }
    (digits, i)
}

/// Shortest distinguishing digits for `v` in the exact band, straight from
/// the integer rounding interval.
pub fn format_interval<'a>(v: f64, buf: &'a mut [u8]) -> (&'a [u8], i16) {
    debug_assert!((BAND_LO..BAND_HI).contains(&v));

    // the half-gaps are integral everywhere in the band except at 2^53
    // itself, where truncating the half-gap below to zero merely drops
    // non-integer candidates the emission below never needed
    let gap_below = ((v - next_down(v)) / 2.0) as u128;
    let gap_above = ((next_up(v) - v) / 2.0) as u128;
    let mut low = v as u128 - gap_below;
    let mut high = v as u128 + gap_above;

    // odd significand: decimal ties round away from v, so the closed
    // integer interval narrows by one on each side. For odd values in
    // [2^53, 2^54) this collapses low == high == v.
    if v.to_bits() & 1 == 1 {
        low += 1;
        high -= 1;
    }
    debug_assert!(low <= high);

    let (hd, msd) = expand(high);
    let (ld, _) = expand(low);
    let exp = (WIDTH - msd) as i16;

    // emit the shared prefix, then one digit of high to separate the
    // bounds; if either bound's remaining suffix is all zeros the prefix
    // already pins down a value in the interval, and trailing zeros carry
    // no information either way
    let mut len = 0;
    buf[len] = b'0' + hd[msd];
    len += 1;
    let mut i = msd + 1;
    while i < WIDTH && hd[i] == ld[i] {
        buf[len] = b'0' + hd[i];
        len += 1;
        i += 1;
    }
    if hd[i..].iter().any(|&d| d != 0) && ld[i..].iter().any(|&d| d != 0) {
        buf[len] = b'0' + hd[i];
        len += 1;
    }
    while len > 1 && buf[len - 1] == b'0' {
        len -= 1;
    }
    (&buf[..len], exp)
}

/// Whether `v` qualifies for the integral fast path: in `[10^15, 5*10^22)`
/// and exactly an integer.
pub fn fits_integer(v: f64) -> bool {
    (1e15..5e22).contains(&v) && (v as u128) as f64 == v
}

/// Digits for a `fits_integer` value: the plain decimal expansion of the
/// integer it holds.
pub fn format_integer<'a>(v: f64, buf: &'a mut [u8]) -> (&'a [u8], i16) {
    debug_assert!(fits_integer(v));
    let (digits, msd) = expand(v as u128);
    let exp = (WIDTH - msd) as i16;
    let mut len = 0;
    for &d in &digits[msd..] {
        buf[len] = b'0' + d;
        len += 1;
    }
    while len > 1 && buf[len - 1] == b'0' {
        len -= 1;
    }
    (&buf[..len], exp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(v: f64) -> ([u8; 40], usize, i16) {
        let mut buf = [0u8; 40];
        let (digits, exp) = format_interval(v, &mut buf);
        let len = digits.len();
        let mut out = [0u8; 40];
        out[..len].copy_from_slice(digits);
        (out, len, exp)
    }

    #[track_caller]
    fn check_interval(v: f64, digits: &str, exp: i16) {
        let (out, len, e) = interval(v);
        assert_eq!((&out[..len], e), (digits.as_bytes(), exp), "for {v:e}");
    }

    #[test]
    fn expand_widths() {
        let (d, msd) = expand(1);
        assert_eq!((msd, d[39]), (39, 1));
        let (d, msd) = expand(10u128.pow(19));
        assert_eq!(msd, 20);
        assert_eq!(d[20], 1);
        assert!(d[21..].iter().all(|&x| x == 0));
        let (_, msd) = expand(u128::MAX); // 39 digits
        assert_eq!(msd, 1);
    }

    #[test]
    fn band_bottom() {
        // 2^53: even significand, gap below truncates away
        check_interval(9007199254740992.0, "9007199254740993", 16);
        // odd significand: the interval collapses to the value itself
        check_interval(9007199254740994.0, "9007199254740994", 16);
        check_interval(9007199254740996.0, "9007199254740997", 16);
        // 2^54
        check_interval(1.8014398509481984e16, "18014398509481986", 17);
    }

    #[test]
    fn strips_across_decades() {
        check_interval(1e16, "1", 17);
        check_interval(2e16, "2", 17);
        check_interval(1e22, "1", 23);
    }

    #[test]
    fn band_top() {
        check_interval(3.4028236692093797e38, "34028236692093799", 39);
        check_interval(1.2345678901234568e30, "12345678901234569", 31);
    }

    #[test]
    fn integral_fast_path() {
        let mut buf = [0u8; 40];
        let got = format_integer(1e15, &mut buf);
        assert_eq!(got, ("1".as_bytes(), 16));
        let got = format_integer(1234567890000000.0, &mut buf);
        assert_eq!(got, ("123456789".as_bytes(), 16));
        let got = format_integer(4503599627370496.0, &mut buf);
        assert_eq!(got, ("4503599627370496".as_bytes(), 16));
        let got = format_integer(1.152921504606847e18, &mut buf);
        assert_eq!(got, ("1152921504606846976".as_bytes(), 19));
        // the double closest to 4.9e22 in full
        let got = format_integer(4.9e22, &mut buf);
        assert_eq!(got, ("48999999999999997902848".as_bytes(), 23));
    }

    #[test]
    fn integral_fast_path_bounds() {
        assert!(fits_integer(1e15));
        assert!(fits_integer(4.9e22));
        assert!(!fits_integer(999999999999999.0));
        assert!(!fits_integer(5e22));
        assert!(!fits_integer(2.5));
        // in range but fractional
        assert!(!fits_integer(1000000000000000.5));
    }
}
