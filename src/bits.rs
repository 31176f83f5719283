//! Bit-level utilities over positive finite doubles.
//!
//! Positive doubles' bit patterns are monotonically ordered as integers, so
//! the adjacent representable value is one increment away in the raw pattern.
//! None of this extends to negative or non-finite inputs; callers keep those
//! out of the conversion entirely.

/// The next representable double above `v`; infinity past `f64::MAX`.
#[inline]
pub fn next_up(v: f64) -> f64 {
    debug_assert!(v > 0.0 && v.is_finite());
    f64::from_bits(v.to_bits() + 1)
}

/// The next representable double below `v`; zero below the smallest subnormal.
#[inline]
pub fn next_down(v: f64) -> f64 {
    debug_assert!(v > 0.0 && v.is_finite());
    f64::from_bits(v.to_bits() - 1)
}

/// Equivalent of C `frexp` for positive finite inputs: returns `(frac, e)`
/// with `v = frac * 2^e` and `frac` in `[0.5, 1)`.
pub fn frexp(v: f64) -> (f64, i32) {
    debug_assert!(v > 0.0 && v.is_finite());
    let mut bits = v.to_bits();
    let mut e = ((bits >> 52) & 0x7ff) as i32;
    if e == 0 {
        // subnormal: the 2^64 scale is exact and brings it into normal range
        const TWO64: f64 = 18446744073709551616.0; // 2^64
        bits = (v * TWO64).to_bits();
        e = ((bits >> 52) & 0x7ff) as i32 - 64;
    }
    let frac = f64::from_bits((bits & 0xfffffffffffff) | (1022u64 << 52));
    (frac, e - 1022)
}

/// `x * 2^e` for any exponent reachable from `frexp` output. `core` has no
/// `ldexp`, so the power is split in two so that each factor is a normal
/// double and each multiply is exact.
#[inline]
pub fn ldexp(x: f64, e: i32) -> f64 {
    let half = e / 2;
    x * pow2(half) * pow2(e - half)
}

#[inline]
fn pow2(e: i32) -> f64 {
    debug_assert!((-1022..=1023).contains(&e));
    f64::from_bits(((e + 1023) as u64) << 52)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent() {
        assert_eq!(next_up(1.0), 1.0 + f64::EPSILON);
        assert_eq!(next_down(1.0), 0.9999999999999999);
        assert_eq!(next_down(next_up(1.5)), 1.5);
        assert_eq!(next_up(f64::MAX), f64::INFINITY);
        assert_eq!(next_down(5e-324), 0.0);
        // crossing a binade boundary halves the gap below
        assert_eq!(2.0 - next_down(2.0), f64::EPSILON);
        assert_eq!(next_up(2.0) - 2.0, 2.0 * f64::EPSILON);
    }

    #[test]
    fn frexp_decompose() {
        assert_eq!(frexp(1.0), (0.5, 1));
        assert_eq!(frexp(0.5), (0.5, 0));
        assert_eq!(frexp(0.75), (0.75, 0));
        assert_eq!(frexp(8.0), (0.5, 4));
        assert_eq!(frexp(5e-324), (0.5, -1073));
        assert_eq!(frexp(f64::MAX), (0.9999999999999999, 1024));
        for v in [3.141592653589793, 1e-300, 1e300, 2.2250738585072014e-308] {
            let (frac, e) = frexp(v);
            assert!((0.5..1.0).contains(&frac), "frexp({v}) frac = {frac}");
            assert_eq!(ldexp(frac, e), v);
        }
    }

    #[test]
    fn ldexp_exact() {
        assert_eq!(ldexp(1.5, 10), 1536.0);
        assert_eq!(ldexp(1.0, -1022), f64::MIN_POSITIVE);
        assert_eq!(ldexp(0.5, -1073), 5e-324);
        assert_eq!(ldexp(0.9999999999999999, 1024), f64::MAX);
    }
}
