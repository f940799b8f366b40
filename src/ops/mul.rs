//! Multiplication.

use crate::defs::Error;
use crate::defs::FactorType;
use crate::defs::Sign;
use crate::num::BigInt;

impl BigInt {
    /// Multiplies `self` by `d2` and returns the result of the
    /// operation. The sign of a non-zero result is negative iff the
    /// operand signs differ.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn mul(&self, d2: &Self) -> Result<Self, Error> {
        let s = if self.sign() == d2.sign() { Sign::Pos } else { Sign::Neg };
        let mut ret = self.digits_multiplication(d2)?;
        ret.set_sign_nonzero(s);
        Ok(ret)
    }

    /// Multiplies `self` by the unsigned factor `factor`. The sign of
    /// `self` is kept.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn mul_factor(&self, factor: FactorType) -> Result<Self, Error> {
        let mut ret = self.factor_multiplication(factor)?;
        ret.set_sign_nonzero(self.sign());
        Ok(ret)
    }

    /// Multiplies `self` by the signed factor `factor`.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn mul_i64(&self, factor: i64) -> Result<Self, Error> {
        let s = if (factor < 0) == self.sign().is_negative() { Sign::Pos } else { Sign::Neg };
        let mut ret = self.factor_multiplication(factor.unsigned_abs())?;
        ret.set_sign_nonzero(s);
        Ok(ret)
    }

    // Schoolbook multiplication of the magnitudes: walk the digits of
    // `d2` most significant first, shifting the accumulated product by
    // one position per digit.
    pub(crate) fn digits_multiplication(&self, d2: &Self) -> Result<Self, Error> {
        let mut ii = d2.digits();
        let mut rt = match ii.next() {
            Some(d) => self.nibble_multiplication(d)?,
            None => return Ok(Self::new()),
        };
        for d in ii {
            let sum = rt.shift(1)?;
            let part = self.nibble_multiplication(d)?;
            rt = Self::digits_addition(&sum, &part)?;
        }
        Ok(rt)
    }

    // Base-16 long multiplication of the magnitude by `factor`: the
    // running power advances by one hex digit per round, decimal
    // carries are absorbed by the digit addition.
    pub(crate) fn factor_multiplication(&self, mut factor: FactorType) -> Result<Self, Error> {
        if factor == 0 {
            return Ok(Self::new());
        }
        let mut rt = self.nibble_multiplication((factor & 0xf) as u8)?;
        let mut fac = self.magnitude()?;
        factor >>= 4;
        while factor > 0 {
            fac = fac.mul_16()?;
            let part = fac.nibble_multiplication((factor & 0xf) as u8)?;
            rt = Self::digits_addition(&rt, &part)?;
            factor >>= 4;
        }
        Ok(rt)
    }

    // `factor` times the magnitude, assembled from the doublings
    // x2, x4, x8 selected by the bit pattern of the factor.
    fn nibble_multiplication(&self, factor: u8) -> Result<Self, Error> {
        let dbl = |x: &Self| Self::digits_addition(x, x);
        match factor {
            0 => Ok(Self::new()),
            1 => self.magnitude(),
            2 => dbl(self),
            3 => {
                let x2 = dbl(self)?;
                Self::digits_addition(&x2, self)
            }
            4 => dbl(&dbl(self)?),
            5 => {
                let x4 = dbl(&dbl(self)?)?;
                Self::digits_addition(&x4, self)
            }
            6 => {
                let x2 = dbl(self)?;
                let x4 = dbl(&x2)?;
                Self::digits_addition(&x4, &x2)
            }
            7 => {
                let x2 = dbl(self)?;
                let x4 = dbl(&x2)?;
                let x6 = Self::digits_addition(&x4, &x2)?;
                Self::digits_addition(&x6, self)
            }
            8 => dbl(&dbl(&dbl(self)?)?),
            9 => {
                let x8 = dbl(&dbl(&dbl(self)?)?)?;
                Self::digits_addition(&x8, self)
            }
            10 => {
                let x2 = dbl(self)?;
                let x8 = dbl(&dbl(&x2)?)?;
                Self::digits_addition(&x8, &x2)
            }
            11 => {
                let x2 = dbl(self)?;
                let x8 = dbl(&dbl(&x2)?)?;
                let x10 = Self::digits_addition(&x8, &x2)?;
                Self::digits_addition(&x10, self)
            }
            12 => {
                let x4 = dbl(&dbl(self)?)?;
                let x8 = dbl(&x4)?;
                Self::digits_addition(&x8, &x4)
            }
            13 => {
                let x4 = dbl(&dbl(self)?)?;
                let x8 = dbl(&x4)?;
                let x12 = Self::digits_addition(&x8, &x4)?;
                Self::digits_addition(&x12, self)
            }
            14 => {
                let x2 = dbl(self)?;
                let x4 = dbl(&x2)?;
                let x8 = dbl(&x4)?;
                let x12 = Self::digits_addition(&x8, &x4)?;
                Self::digits_addition(&x12, &x2)
            }
            15 => {
                let x2 = dbl(self)?;
                let x4 = dbl(&x2)?;
                let x8 = dbl(&x4)?;
                let x12 = Self::digits_addition(&x8, &x4)?;
                let x14 = Self::digits_addition(&x12, &x2)?;
                Self::digits_addition(&x14, self)
            }
            _ => Err(Error::InvalidState),
        }
    }

    // ×16 as three dependent doublings.
    fn mul_16(&self) -> Result<Self, Error> {
        let x2 = Self::digits_addition(self, self)?;
        let x4 = Self::digits_addition(&x2, &x2)?;
        let x8 = Self::digits_addition(&x4, &x4)?;
        Self::digits_addition(&x8, &x8)
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
    fn test_mul() {
        assert_eq!(
            n("123456789012345678901234567890").mul(&n("10")).unwrap().to_string(),
            "1234567890123456789012345678900"
        );
        assert_eq!(n("0").mul(&n("12345")).unwrap(), BigInt::new());
        assert_eq!(n("1").mul(&n("-12345")).unwrap().to_string(), "-12345");

        // sign grid; zero results stay positive
        assert_eq!(n("-3").mul(&n("4")).unwrap().to_string(), "-12");
        assert_eq!(n("3").mul(&n("-4")).unwrap().to_string(), "-12");
        assert_eq!(n("-3").mul(&n("-4")).unwrap().to_string(), "12");
        assert!(n("-3").mul(&n("0")).unwrap().sign().is_positive());

        // against the machine multiplication
        for _ in 0..500 {
            let a = random::<u32>() as u64;
            let b = random::<u32>() as u64;
            let r = BigInt::from_u64(a).unwrap().mul(&BigInt::from_u64(b).unwrap()).unwrap();
            assert_eq!(r, BigInt::from_u64(a * b).unwrap());
        }
    }

    #[test]
    fn test_mul_factor() {
        for _ in 0..500 {
            let a = random::<u32>() as u64;
            let f = random::<u32>() as u64;
            let r = BigInt::from_u64(a).unwrap().mul_factor(f).unwrap();
            assert_eq!(r, BigInt::from_u64(a * f).unwrap());
        }

        // the factor path and the full path agree on the magnitude
        for _ in 0..50 {
            let a = random_bigint(40);
            let f = random::<u64>();
            let full = a.mul(&BigInt::from_u64(f).unwrap()).unwrap();
            let part = a.mul_factor(f).unwrap();
            assert_eq!(part.abs_cmp(&full), core::cmp::Ordering::Equal);
        }

        assert_eq!(n("-7").mul_factor(6).unwrap().to_string(), "-42");
        assert_eq!(n("7").mul_i64(-6).unwrap().to_string(), "-42");
        assert_eq!(n("-7").mul_i64(-6).unwrap().to_string(), "42");
        assert_eq!(
            n("7").mul_i64(i64::MIN).unwrap().to_string(),
            "-64563604257983430656"
        );
    }

    #[test]
    fn test_mul_properties() {
        for _ in 0..100 {
            let a = random_bigint(35);
            let b = random_bigint(35);
            let c = random_bigint(35);

            // commutativity and associativity
            assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
            assert_eq!(
                a.mul(&b).unwrap().mul(&c).unwrap(),
                a.mul(&b.mul(&c).unwrap()).unwrap()
            );

            // distributivity
            assert_eq!(
                a.mul(&b.add(&c).unwrap()).unwrap(),
                a.mul(&b).unwrap().add(&a.mul(&c).unwrap()).unwrap()
            );
        }
    }
}
