//! Exponentiation.

use crate::common::consts::ONE;
use crate::defs::Error;
use crate::num::BigInt;

impl BigInt {
    /// Raises `self` to the power of `exp` by squaring over the bits of
    /// the exponent. `pow(0)` is 1 for any base.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn pow(&self, mut exp: u64) -> Result<Self, Error> {
        let mut rt = ONE.clone()?;
        if exp == 0 {
            return Ok(rt);
        }

        let mut sq = self.clone()?;
        loop {
            if exp & 1 != 0 {
                rt = rt.mul(&sq)?;
            }
            exp >>= 1;
            if exp == 0 {
                break;
            }
            sq = sq.mul(&sq)?;
        }
        Ok(rt)
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
    fn test_pow() {
        assert_eq!(
            n("2").pow(100).unwrap().to_string(),
            "1267650600228229401496703205376"
        );
        assert_eq!(n("0").pow(0).unwrap().to_string(), "1");
        assert_eq!(n("12345").pow(0).unwrap().to_string(), "1");
        assert_eq!(n("0").pow(7).unwrap(), BigInt::new());
        assert_eq!(n("-3").pow(3).unwrap().to_string(), "-27");
        assert_eq!(n("-3").pow(4).unwrap().to_string(), "81");

        // pow(k) == a * pow(k - 1)
        for _ in 0..20 {
            let a = random_bigint(10);
            let k = random::<u64>() % 12 + 1;
            assert_eq!(a.pow(k).unwrap(), a.mul(&a.pow(k - 1).unwrap()).unwrap());
        }
    }
}
