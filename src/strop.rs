//! BigInt formatting and string parsing.

use crate::defs::Error;
use crate::num::BigInt;
use crate::parser::BigNumber;
use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Write;
use core::str::FromStr;

impl BigInt {
    /// Parses a number from the decimal literal `s`. The literal may
    /// carry a sign, a fractional part, and an exponent; the fractional
    /// part beyond the resulting integer value is dropped.
    ///
    /// ## Errors
    ///
    ///  - InvalidLiteral: the input is not a valid literal.
    ///  - OutOfRange: the exponent of the literal overflows.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let num = BigNumber::parse(s)?;
        Self::from_number(&num)
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let ii = self.digits();
        if ii.len() == 0 {
            return f.write_str("0");
        }

        if self.sign().is_negative() {
            f.write_char('-')?;
        }
        for d in ii {
            f.write_char((d + b'0') as char)?;
        }
        Ok(())
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::util::tests::random_bigint;

    #[cfg(not(feature = "std"))]
    use {alloc::format, alloc::string::ToString};

    #[test]
    fn test_display() {
        assert_eq!(BigInt::new().to_string(), "0");
        assert_eq!(BigInt::parse("0").unwrap().to_string(), "0");
        assert_eq!(BigInt::parse("-0").unwrap().to_string(), "0");
        assert_eq!(BigInt::parse("007").unwrap().to_string(), "7");
        assert_eq!(BigInt::parse("-1024").unwrap().to_string(), "-1024");
        assert_eq!(
            BigInt::parse("123000000000000000000000000000").unwrap().to_string(),
            "123000000000000000000000000000"
        );
    }

    #[test]
    fn test_from_str() {
        let v: BigInt = "-42".parse().unwrap();
        assert_eq!(v.to_string(), "-42");
        assert!("12q".parse::<BigInt>().is_err());
    }

    #[test]
    fn test_string_round_trip() {
        for _ in 0..1000 {
            let v = random_bigint(60);
            let s = v.to_string();
            assert_eq!(BigInt::parse(&s).unwrap(), v, "{}", s);

            // leading zeroes parse back to the same canonical form
            let t = if let Some(r) = s.strip_prefix('-') {
                format!("-000{}", r)
            } else {
                format!("000{}", s)
            };
            assert_eq!(BigInt::parse(&t).unwrap().to_string(), s);
        }
    }
}
