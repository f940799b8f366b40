//! Division.

use crate::defs::Error;
use crate::defs::FactorType;
use crate::defs::Sign;
use crate::defs::MAX_ESTIMATE;
use crate::num::BigInt;
use core::cmp::Ordering;

impl BigInt {
    /// Divides `self` by `d2` and returns the quotient and the
    /// remainder. Division truncates toward zero: the sign of a
    /// non-zero quotient is negative iff the operand signs differ, and
    /// a non-zero remainder takes the sign of the dividend, so that
    /// `q * d2 + r == self` and `|r| < |d2|`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    ///  - MemoryAllocation: failed to allocate memory.
    ///  - InvalidState: the quotient digit estimation broke down.
    pub fn div(&self, d2: &Self) -> Result<(Self, Self), Error> {
        if d2.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let divisor = d2.magnitude()?;
        let mut remainder = self.magnitude()?;
        let mut quotient = Self::new();

        while remainder.abs_cmp(&divisor) != Ordering::Less {
            let mut estimate = Self::division_estimate(&remainder, &divisor);
            if estimate == 0 {
                return Err(Error::InvalidState);
            }

            let mut part = divisor.factor_multiplication(estimate)?;
            let estshift = Self::estimate_shifts(&remainder, &part);
            let mut corr = part.shift(estshift)?;

            // shrink the estimate until the aligned trial product fits
            // under the remainder; the estimate strictly decreases and
            // stays above zero for any admissible input
            while remainder.abs_cmp(&corr) == Ordering::Less {
                if estimate < 16 {
                    estimate -= 1;
                    if estimate == 0 {
                        return Err(Error::InvalidState);
                    }
                } else {
                    estimate -= estimate >> 4;
                }
                part = divisor.factor_multiplication(estimate)?;
                corr = part.shift(estshift)?;
            }

            let bcdest = Self::from_factor_at(estimate, estshift)?;
            let part = divisor.digits_multiplication(&bcdest)?;

            quotient = Self::digits_addition(&quotient, &bcdest)?;
            let (rem, _) = Self::digits_subtraction(&remainder, &part)?;
            remainder = rem;
        }

        let qs = if self.sign() == d2.sign() { Sign::Pos } else { Sign::Neg };
        quotient.set_sign_nonzero(qs);
        remainder.set_sign_nonzero(self.sign());

        Ok((quotient, remainder))
    }

    /// Returns the remainder of the division of `self` by `d2`. A
    /// non-zero remainder takes the sign of `self`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    ///  - MemoryAllocation: failed to allocate memory.
    ///  - InvalidState: the quotient digit estimation broke down.
    pub fn modulo(&self, d2: &Self) -> Result<Self, Error> {
        Ok(self.div(d2)?.1)
    }

    // Quotient digit estimate computed from the top 24 digits of the
    // remainder and the divisor read into doubles. Incrementing the
    // denominator guarantees an underestimate.
    fn division_estimate(n: &Self, d: &Self) -> FactorType {
        let mut est = 0f64;
        let mut div = 0f64;

        let mut ic = n.digits();
        let mut oc = d.digits();
        for _ in 0..24 {
            est = est * 10.0 + ic.next().unwrap_or(0) as f64;
            div = div * 10.0 + oc.next().unwrap_or(0) as f64;
        }

        Self::estimate_to_factor(est / (div + 1.0))
    }

    // Scales the estimate to 14 decimal digits and clamps it into the
    // factor range before the cast.
    fn estimate_to_factor(val: f64) -> FactorType {
        let mut rt = (val * MAX_ESTIMATE as f64).floor();
        while rt >= FactorType::MAX as f64 * 1000.0 {
            rt /= 1000.0;
        }
        while rt >= FactorType::MAX as f64 {
            rt /= 10.0;
        }
        rt as FactorType
    }

    // Number of digit positions the trial product has to be shifted to
    // line up under the remainder.
    fn estimate_shifts(n: &Self, part: &Self) -> i32 {
        let rt = n.nof_digits() as i32 - part.nof_digits() as i32;
        if n.digits().next() == part.digits().next() {
            rt
        } else {
            rt - 1
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::util::tests::random_bigint;
    use rand::random;

    #[cfg(not(feature = "std"))]
    use alloc::string::ToString;

    fn n(s: &str) -> BigInt {
        BigInt::parse(s).unwrap()
    }

    #[test]
    fn test_div() {
        let (q, r) = n("1000000000000000000000").div(&n("7")).unwrap();
        assert_eq!(q.to_string(), "142857142857142857142");
        assert_eq!(r.to_string(), "6");
        assert_eq!(q.mul(&n("7")).unwrap().add(&r).unwrap(), n("1000000000000000000000"));

        let (q, r) = n("42").div(&n("43")).unwrap();
        assert!(q.is_zero());
        assert_eq!(r.to_string(), "42");

        let (q, r) = n("42").div(&n("42")).unwrap();
        assert_eq!(q.to_string(), "1");
        assert!(r.is_zero());

        assert_eq!(n("1").div(&n("0")).unwrap_err(), Error::DivisionByZero);

        // machine-word cross check
        for _ in 0..500 {
            let a = random::<u64>();
            let b = random::<u64>() % 10_000 + 1;
            let (q, r) = BigInt::from_u64(a).unwrap().div(&BigInt::from_u64(b).unwrap()).unwrap();
            assert_eq!(q, BigInt::from_u64(a / b).unwrap());
            assert_eq!(r, BigInt::from_u64(a % b).unwrap());
        }
    }

    #[test]
    fn test_div_signs() {
        // truncated division: the remainder takes the dividend's sign
        let (q, r) = n("-5").div(&n("3")).unwrap();
        assert_eq!(q.to_string(), "-1");
        assert_eq!(r.to_string(), "-2");
        assert_eq!(n("-5").modulo(&n("3")).unwrap().to_string(), "-2");

        let (q, r) = n("5").div(&n("-3")).unwrap();
        assert_eq!(q.to_string(), "-1");
        assert_eq!(r.to_string(), "2");

        let (q, r) = n("-5").div(&n("-3")).unwrap();
        assert_eq!(q.to_string(), "1");
        assert_eq!(r.to_string(), "-2");

        // zero results are positive
        let (q, r) = n("-4").div(&n("-2")).unwrap();
        assert_eq!(q.to_string(), "2");
        assert!(r.is_zero() && r.sign().is_positive());
    }

    #[test]
    fn test_div_identity() {
        for _ in 0..200 {
            let a = random_bigint(45);
            let mut d = random_bigint(20);
            if d.is_zero() {
                d = n("1");
            }

            let (q, r) = a.div(&d).unwrap();

            // q * d + r == a
            assert_eq!(q.mul(&d).unwrap().add(&r).unwrap(), a, "a={} d={}", a, d);

            // |r| < |d|
            assert_eq!(r.abs_cmp(&d), core::cmp::Ordering::Less);

            // sign conventions
            if !q.is_zero() {
                assert_eq!(q.sign().is_negative(), a.sign() != d.sign());
            }
            if !r.is_zero() {
                assert_eq!(r.sign(), a.sign());
            }
        }
    }

    #[test]
    fn test_div_large_quotient() {
        // quotients wider than one estimation round
        let a = n("9").pow(200).unwrap();
        let d = n("12345678901234567");
        let (q, r) = a.div(&d).unwrap();
        assert_eq!(q.mul(&d).unwrap().add(&r).unwrap(), a);
        assert_eq!(r.abs_cmp(&d), Ordering::Less);
    }
}
