//! Compensated double-double arithmetic.
//!
//! A pair `(val, err)` tracks a quantity as `val + err`, with `val` the
//! correctly rounded double of the quantity and `err` the exact residual.
//! Every scaling operation recovers its own rounding error exactly: the
//! scale factors decompose into sums of powers of two (`10 = 8 + 2`,
//! `10000 = 8192 + 1024 + 512 + 256 + 16`), and a product by each power of
//! two is exact, so the sequence of subtractions reconstructs the error with
//! no rounding of its own. The digit-extraction loop depends on the *sign*
//! of `err` being right at exact decimal boundaries (`0.1`, `1.0`), which is
//! why `product` walks the scalar's mantissa bit by bit instead of using
//! the rounded `val * scalar - product` shortcut.

use crate::bits;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hp {
    pub val: f64,
    pub err: f64,
}

/// One tenth to double-double precision. The `err` field doubles as the
/// boundary threshold when renormalization compares a pair against exactly
/// one tenth.
pub const TENTH: Hp = Hp { val: 0.1, err: -5.551115123125783e-18 };

impl Hp {
    #[inline]
    pub fn new(val: f64, err: f64) -> Hp {
        Hp { val, err }
    }

    /// Folds `err` into `val`; `err` becomes the exact residual
    /// `(old_val - new_val) + old_err`.
    #[inline]
    pub fn normalize(self) -> Hp {
        let val = self.val + self.err;
        Hp { val, err: (self.val - val) + self.err }
    }

    pub fn mul10(self) -> Hp {
        let val = self.val * 10.0;
        let mut err = self.err * 10.0;
        let mut off = val;
        off -= self.val * 8.0;
        off -= self.val * 2.0;
        err -= off;
        Hp { val, err }.normalize()
    }

    pub fn mul10000(self) -> Hp {
        let val = self.val * 10000.0;
        let err = self.err * 10000.0
            - (val
                - (self.val * 8192.0)
                - (self.val * 1024.0)
                - (self.val * 512.0)
                - (self.val * 256.0)
                - (self.val * 16.0));
        Hp { val, err }.normalize()
    }

    pub fn div10(self) -> Hp {
        let val = self.val / 10.0;
        let err = self.err / 10.0;
        let mut rem = self.val;
        rem -= val * 8.0;
        rem -= val * 2.0;
        Hp { val, err: err + rem / 10.0 }.normalize()
    }

    /// `self * scalar` as a compensated pair. The rounding error of
    /// `self.val * scalar` is accumulated per set mantissa bit of `scalar`:
    /// `comp` runs through `self.val * 2^(exp - i)` while the fraction is
    /// doubled back past 1, so each subtraction is exact.
    pub fn product(self, scalar: f64) -> Hp {
        let val = self.val * scalar;
        let mut err = val;
        let (mut frac, exp) = bits::frexp(scalar);
        let mut comp = bits::ldexp(self.val, exp);
        while frac != 0.0 {
            if frac >= 1.0 {
                frac -= 1.0;
                err -= comp;
            }
            comp /= 2.0;
            frac *= 2.0;
        }
        Hp { val, err: scalar * self.err - err }.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_sum() {
        // 1e16 + 1 is not representable; the residual survives in err
        assert_eq!(Hp::new(1e16, 1.0).normalize(), Hp::new(1e16, 1.0));
        // 0.1 + 0.3 happens to round to exactly 0.4
        assert_eq!(Hp::new(0.1, 0.30000000000000004).normalize(), Hp::new(0.4, 0.0));
        assert_eq!(Hp::new(1.0, 0.5).normalize(), Hp::new(1.5, 0.0));
    }

    #[test]
    fn tenth_round_trips() {
        // one tenth times ten is exactly one, residual included
        assert_eq!(TENTH.mul10(), Hp::new(1.0, 0.0));
        assert_eq!(TENTH.mul10000(), Hp::new(1000.0, 0.0));
        // and one divided by ten is the canonical tenth pair
        assert_eq!(Hp::new(1.0, 0.0).div10(), TENTH);
        assert_eq!(Hp::new(1.0, 0.0).div10().div10(), Hp::new(0.01, -2.0816681711721684e-19));
    }

    #[test]
    fn div10_error_sign() {
        // 0.7 / 10 rounds below the true value; err must point back up
        let x = Hp::new(0.7, 0.0).div10();
        assert_eq!(x, Hp::new(0.06999999999999999, 2.7755575615628915e-18));
        assert!(x.err > 0.0);
    }

    #[test]
    fn product_exact_cases() {
        // multiplying by an exact pair keeps an exact product exact
        assert_eq!(
            Hp::new(1.0, 0.0).product(3.141592653589793),
            Hp::new(3.141592653589793, 0.0)
        );
        // a compensated case: the pair for 1e-17 scaled by 2^53 + 1
        let t = Hp::new(9.999999999999999e-18, 8.253197149635694e-34);
        assert_eq!(
            t.product(9007199254740993.0),
            Hp::new(0.09007199254740993, -6.443968686271547e-18)
        );
    }

    #[test]
    fn mul10_compensation() {
        assert_eq!(Hp::new(0.30000000000000004, 0.0).mul10(), Hp::new(3.0000000000000004, 0.0));
        // scaling and unscaling returns to the start for a representable value
        let x = Hp::new(0.125, 0.0).mul10().div10();
        assert_eq!(x, Hp::new(0.125, 0.0));
    }
}
