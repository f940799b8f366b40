//! Deserialization of BigInt.

use core::fmt::Formatter;

use crate::num::BigInt;
use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

#[cfg(not(feature = "std"))]
use alloc::string::String;

struct BigIntVisitor {}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BigIntVisitor {})
    }
}

impl<'de> Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "expect `String` or `Number`")
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        BigInt::from_u64(v).map_err(E::custom)
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        BigInt::from_i64(v).map_err(E::custom)
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        BigInt::from_f64(v).map_err(E::custom)
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        BigInt::parse(v).map_err(E::custom)
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        BigInt::parse(&v).map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::from_str;

    use crate::num::BigInt;

    #[test]
    fn from_json() {
        let v: BigInt = from_str("\"-000123.4500E+2\"").unwrap();
        assert_eq!(v, BigInt::parse("-12345").unwrap());

        let v: BigInt = from_str("12345").unwrap();
        assert_eq!(v, BigInt::from_i64(12345).unwrap());

        let v: BigInt = from_str("-7").unwrap();
        assert_eq!(v, BigInt::from_i64(-7).unwrap());
    }
}
