//! bcd-int is a library that implements arbitrary precision signed integers
//! with a packed binary-coded decimal representation.
//!
//! ## Introduction
//!
//! **Numbers**
//!
//!
//! The number is defined by the data type `BigInt`. Each number consists of an array of
//! 64-bit words and the sign. A word packs 15 decimal digits, one digit per nibble;
//! the top nibble of a word is reserved for carries and is always zero in a stored number.
//! Keeping the digits decimal makes conversion from and to decimal strings exact and cheap,
//! while addition and subtraction still process 15 digits per machine operation using
//! carry-save tricks on the nibble boundaries.
//!
//!
//! `BigInt` can be parsed from a string in scientific format (an optional sign, an optional
//! fractional part, and an optional exponent), and formatted back into a string. The
//! fractional part of a literal beyond the resulting integer value is dropped.
//!
//!
//! All operations allocate their result and leave the operands unchanged. Operations
//! return an error on allocation failure instead of aborting; the `Clone` surface is
//! the fallible method [`BigInt::clone`] for the same reason.
//!
//! **Operations**
//!
//! The implemented operations are: addition, subtraction, multiplication (by another
//! number and by machine-word factors), division with remainder, modulo, negation,
//! integer exponentiation, decimal digit shifting and truncation, rounding toward zero
//! to a granularity, comparison, and bitwise AND/OR/XOR/NOT over a caller-built table
//! of powers of two (see [`BitValues`]).
//!
//! ## Examples
//!
//! ```
//! use bcd_int::BigInt;
//!
//! let a = BigInt::parse("-000123.4500E+2").unwrap();
//! assert_eq!(a.to_string(), "-12345");
//!
//! let b = BigInt::from_u64(7).unwrap();
//! let (q, r) = a.div(&b).unwrap();
//! assert_eq!(q.mul(&b).unwrap().add(&r).unwrap(), a);
//!
//! let p = BigInt::from_u64(2).unwrap().pow(100).unwrap();
//! assert_eq!(p.to_string(), "1267650600228229401496703205376");
//! ```
//!
//! ## no_std
//!
//! The library can work without the standard library provided there is a memory
//! allocator. The standard library dependency is activated by the feature `std`.
//! The feature `std` is active by default and must be excluded when specifying
//! dependency, e.g.:
//!
//! ``` toml
//! [dependencies]
//! bcd-int = { version = "0.1.0", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod common;
mod conv;
mod defs;
mod digits;
mod num;
mod ops;
mod parser;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::defs::Error;
pub use crate::defs::FactorType;
pub use crate::defs::Sign;
pub use crate::defs::Word;
pub use crate::defs::DIGITS_PER_WORD;
pub use crate::defs::HIGH_SHIFT;
pub use crate::defs::WORD_MASK;
pub use crate::num::BigInt;
pub use crate::ops::bits::BitValues;
pub use crate::parser::BigNumber;

#[cfg(test)]
mod tests {

    #[cfg(not(feature = "std"))]
    use alloc::string::ToString;

    #[test]
    fn test_bigint() {
        use crate::BigInt;

        // 30! computed with small factors, then taken apart again
        let mut f = BigInt::from_u64(1).unwrap();
        for i in 2..=30 {
            f = f.mul_factor(i).unwrap();
        }
        assert_eq!(f.to_string(), "265252859812191058636308480000000");

        for i in 2..=30 {
            let d = BigInt::from_u64(i).unwrap();
            let (q, r) = f.div(&d).unwrap();
            assert!(r.is_zero());
            f = q;
        }
        assert_eq!(f.to_string(), "1");
    }
}
