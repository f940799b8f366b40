//! Serialization of BigInt.
//! Serialization to a string uses the decimal representation.

use crate::num::BigInt;
use serde::{Serialize, Serializer};

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::to_string;

    use crate::num::BigInt;

    #[test]
    fn to_json() {
        assert_eq!(to_string(&BigInt::new()).unwrap(), "\"0\"");
        assert_eq!(
            to_string(&BigInt::parse("-123456789012345678901234567890").unwrap()).unwrap(),
            "\"-123456789012345678901234567890\""
        );
    }
}
