//! Conversion between machine types, parsed literals, and BigInt.

use crate::common::buf::WordBuf;
use crate::defs::Error;
use crate::defs::Sign;
use crate::defs::Word;
use crate::defs::DIGITS_PER_WORD;
use crate::defs::HIGH_SHIFT;
use crate::defs::INT_DIGITS;
use crate::num::BigInt;
use crate::parser::BigNumber;

impl BigInt {
    /// Builds an integer from a parsed literal, applying its scale:
    /// fractional digits are dropped, a negative scale appends zero
    /// digits.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: a digit of the payload is outside 0..=9.
    ///  - MemoryAllocation: failed to allocate memory.
    ///  - InvalidState: the digit layout broke down.
    pub fn from_number(num: &BigNumber) -> Result<Self, Error> {
        let src = num.digits();
        let scale = num.scale() as isize;
        let nof_digits = src.len() as isize;

        // count of integer digit positions left of the decimal point:
        // a positive scale drops fractional digits, a negative one
        // appends zeroes
        let nn = nof_digits - scale;
        if nn <= 0 || src.is_empty() {
            return Ok(Self::new());
        }
        let nn = nn as usize;

        let mut bb = (nn + DIGITS_PER_WORD - 1) / DIGITS_PER_WORD;
        let mut tt = ((nn + DIGITS_PER_WORD - 1) % DIGITS_PER_WORD) * 4;
        let mut m = WordBuf::new(bb)?;

        // pack from the most significant digit at the top position
        // downwards; positions past the source digits are zero
        let digits = src.iter().copied().chain(core::iter::repeat(0)).take(nn);
        for (ii, digit) in digits.enumerate() {
            if digit > 9 {
                return Err(Error::InvalidArgument);
            }
            m[bb - 1] += (digit as Word) << tt;

            if tt == 0 {
                bb -= 1;
                if bb == 0 && ii + 1 != nn {
                    return Err(Error::InvalidState);
                }
                tt = HIGH_SHIFT - 4;
            } else {
                tt -= 4;
            }
        }

        let s = if num.sign() { Sign::Neg } else { Sign::Pos };
        let mut ret = Self::from_raw_parts(m, s);
        ret.normalize()?;
        Ok(ret)
    }

    /// Creates a number from a signed machine integer.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn from_i64(num: i64) -> Result<Self, Error> {
        let mut ret = Self::from_factor_at(num.unsigned_abs(), 0)?;
        ret.set_sign_nonzero(if num < 0 { Sign::Neg } else { Sign::Pos });
        Ok(ret)
    }

    /// Creates a number from an unsigned machine integer. The full
    /// range of the type is accepted.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn from_u64(num: u64) -> Result<Self, Error> {
        Self::from_factor_at(num, 0)
    }

    /// Creates a number from a double. The magnitude is rounded half
    /// up to an integer; fractional precision is lost.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `num` is NaN or infinite.
    ///  - OutOfRange: the magnitude exceeds the unsigned integer range.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn from_f64(num: f64) -> Result<Self, Error> {
        if !num.is_finite() {
            return Err(Error::InvalidArgument);
        }
        let val = num.abs() + 0.5 - f64::EPSILON;
        if val >= u64::MAX as f64 {
            return Err(Error::OutOfRange);
        }
        let mut ret = Self::from_factor_at(val as u64, 0)?;
        ret.set_sign_nonzero(if num < 0.0 { Sign::Neg } else { Sign::Pos });
        Ok(ret)
    }

    /// Converts the number to a signed machine integer.
    ///
    /// ## Errors
    ///
    ///  - OutOfRange: the value has more than 20 decimal digits or does
    ///    not fit the target type.
    pub fn to_i64(&self) -> Result<i64, Error> {
        let ii = self.digits();
        if ii.len() > INT_DIGITS {
            return Err(Error::OutOfRange);
        }

        let mut rt: i128 = 0;
        for d in ii {
            rt = rt * 10 + d as i128;
        }
        if self.sign().is_negative() {
            rt = -rt;
        }

        i64::try_from(rt).map_err(|_| Error::OutOfRange)
    }

    /// Converts the number to a double. The result is inexact when the
    /// value has more significant digits than a double can carry.
    pub fn to_f64(&self) -> f64 {
        let mut rt = 0.0;
        for d in self.digits() {
            rt = rt * 10.0 + d as f64;
        }
        if self.sign().is_negative() {
            -rt
        } else {
            rt
        }
    }
}
