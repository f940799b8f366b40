//! BigInt definition, basic arithmetic, comparison, and digit manipulation operations.

use crate::common::buf::WordBuf;
use crate::common::util::add_bcd;
use crate::common::util::check_valid;
use crate::common::util::decrement;
use crate::common::util::extract_carry;
use crate::common::util::increment;
use crate::common::util::ten_complement;
use crate::defs::Error;
use crate::defs::FactorType;
use crate::defs::Sign;
use crate::defs::Word;
use crate::defs::DIGITS_PER_WORD;
use crate::defs::HIGH_SHIFT;
use crate::defs::INT_DIGITS;
use crate::defs::WORD_MASK;
use crate::digits::Digits;
use core::cmp::Ordering;
use itertools::izip;

/// An arbitrary precision signed integer with a packed decimal
/// representation: 15 decimal digits per 64-bit word, least significant
/// word first.
#[derive(Debug, Hash, PartialEq, Eq)]
pub struct BigInt {
    m: WordBuf,
    s: Sign,
}

impl BigInt {
    /// Returns a new number with value of 0.
    pub fn new() -> Self {
        BigInt {
            m: WordBuf::empty(),
            s: Sign::Pos,
        }
    }

    pub(crate) fn from_raw_parts(m: WordBuf, s: Sign) -> Self {
        BigInt { m, s }
    }

    pub(crate) fn words(&self) -> &[Word] {
        &self.m
    }

    /// Returns the sign of the number. The zero value is positive.
    pub fn sign(&self) -> Sign {
        self.s
    }

    /// Returns true if the number has value of 0.
    pub fn is_zero(&self) -> bool {
        self.m.is_empty()
    }

    /// Returns true if every digit nibble of the representation is in
    /// the range 0..=9 and the carry nibbles are clear.
    pub fn is_valid(&self) -> bool {
        self.m.iter().fold(0, |acc, &w| acc | check_valid(w)) == 0
    }

    /// Returns the number of significant decimal digits, 0 for the zero
    /// value.
    pub fn nof_digits(&self) -> usize {
        self.digits().len()
    }

    pub(crate) fn digits(&self) -> Digits<'_> {
        Digits::new(self)
    }

    /// Clones the number.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn clone(&self) -> Result<Self, Error> {
        Ok(BigInt {
            m: self.m.clone()?,
            s: self.s,
        })
    }

    /// Exchanges the contents of `self` and `d2` without reallocation.
    pub fn swap(&mut self, d2: &mut Self) {
        core::mem::swap(self, d2);
    }

    // Copy of the number with the sign dropped.
    pub(crate) fn magnitude(&self) -> Result<Self, Error> {
        Ok(BigInt {
            m: self.m.clone()?,
            s: Sign::Pos,
        })
    }

    /// Returns a copy of the number with the sign reversed.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn neg(&self) -> Result<Self, Error> {
        let mut ret = self.clone()?;
        if !ret.is_zero() {
            ret.s = ret.s.invert();
        }
        Ok(ret)
    }

    // Sets the sign of a non-zero number; zero keeps the positive sign.
    pub(crate) fn set_sign_nonzero(&mut self, s: Sign) {
        if !self.m.is_empty() {
            self.s = s;
        }
    }

    // Restores the canonical form: all digit nibbles valid, a non-zero
    // most significant word, and the positive sign for zero.
    pub(crate) fn normalize(&mut self) -> Result<(), Error> {
        if !self.is_valid() {
            return Err(Error::InvalidState);
        }
        self.m.trunc_leading_zeroes();
        if self.m.is_empty() {
            self.s = Sign::Pos;
        }
        Ok(())
    }

    /// Adds `d2` to `self` and returns the result of the operation.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn add(&self, d2: &Self) -> Result<Self, Error> {
        if self.s == d2.s {
            let mut ret = Self::digits_addition(self, d2)?;
            ret.set_sign_nonzero(self.s);
            Ok(ret)
        } else {
            let (mut ret, flipped) = Self::digits_subtraction(self, d2)?;
            ret.set_sign_nonzero(if flipped { self.s.invert() } else { self.s });
            Ok(ret)
        }
    }

    /// Subtracts `d2` from `self` and returns the result of the operation.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn sub(&self, d2: &Self) -> Result<Self, Error> {
        if self.s == d2.s {
            let (mut ret, flipped) = Self::digits_subtraction(self, d2)?;
            ret.set_sign_nonzero(if flipped { self.s.invert() } else { self.s });
            Ok(ret)
        } else {
            let mut ret = Self::digits_addition(self, d2)?;
            ret.set_sign_nonzero(self.s);
            Ok(ret)
        }
    }

    // Digit-wise addition of the magnitudes. The result is positive.
    pub(crate) fn digits_addition(d1: &Self, d2: &Self) -> Result<Self, Error> {
        let nn = d1.m.len().max(d2.m.len());
        let mut m = WordBuf::new(nn + 1)?;

        let op1 = d1.m.iter().copied().chain(core::iter::repeat(0));
        let op2 = d2.m.iter().copied().chain(core::iter::repeat(0));

        // the extra word of the result absorbs the final carry
        let mut carry = 0;
        for (r, a, b) in izip!(m.iter_mut(), op1, op2) {
            let mut res = add_bcd(a, b);
            if carry != 0 {
                res = increment(res);
            }
            let (res, c) = extract_carry(res);
            carry = c;
            *r = res;
        }

        let mut ret = BigInt { m, s: Sign::Pos };
        ret.normalize()?;
        Ok(ret)
    }

    // Digit-wise subtraction of the magnitudes. The result is the
    // positive value of `||d1| - |d2||`; the flag is true when
    // `|d1| < |d2|`.
    pub(crate) fn digits_subtraction(d1: &Self, d2: &Self) -> Result<(Self, bool), Error> {
        let nn = d1.m.len().max(d2.m.len());
        if nn == 0 {
            return Ok((Self::new(), false));
        }
        let mut m = WordBuf::new(nn)?;

        let op1 = d1.m.iter().copied().chain(core::iter::repeat(0));
        let op2 = d2.m.iter().copied().chain(core::iter::repeat(0));

        let mut borrow = false;
        for (r, a, b) in izip!(m.iter_mut(), op1, op2) {
            let mut res = add_bcd(a, ten_complement(b));
            if borrow {
                res = decrement(res);
                borrow = a <= b;
            } else {
                borrow = a < b;
            }
            *r = res;
        }

        if borrow {
            // |d1| < |d2|: recomplement the accumulated words. The word
            // level ten's complement adds 1 at the lowest word, so every
            // word above it takes the nines' complement.
            for i in (0..nn).rev() {
                let mut res = m[i];
                if i > 0 {
                    res = increment(res);
                }
                m[i] = ten_complement(res) & WORD_MASK;
            }
        } else {
            for w in m.iter_mut() {
                *w &= WORD_MASK;
            }
        }

        let mut ret = BigInt { m, s: Sign::Pos };
        ret.normalize()?;
        Ok((ret, borrow))
    }

    /// Multiplies the number by a power of ten: a positive `nof_digits`
    /// appends that many zero digits, a negative one drops that many of
    /// the lowest digits.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn shift(&self, nof_digits: i32) -> Result<Self, Error> {
        if nof_digits > 0 {
            let ofs = nof_digits as usize / DIGITS_PER_WORD;
            let sfh = nof_digits as usize % DIGITS_PER_WORD;

            let mut m = WordBuf::new(self.m.len() + ofs + 1)?;
            if sfh == 0 {
                for (i, &w) in self.m.iter().enumerate() {
                    m[i + ofs] = w;
                }
            } else if !self.m.is_empty() {
                let upshift = HIGH_SHIFT - sfh * 4;
                let doshift = sfh * 4;
                let nn = self.m.len() - 1;

                m[ofs] = (self.m[0] << doshift) & WORD_MASK;
                for i in 0..nn {
                    m[i + 1 + ofs] = (self.m[i] >> upshift) | ((self.m[i + 1] << doshift) & WORD_MASK);
                }
                m[nn + 1 + ofs] = self.m[nn] >> upshift;
            }

            let mut ret = BigInt { m, s: self.s };
            ret.normalize()?;
            Ok(ret)
        } else if nof_digits < 0 {
            let nof = nof_digits.unsigned_abs() as usize;
            let ofs = nof / DIGITS_PER_WORD;
            let sfh = nof % DIGITS_PER_WORD;

            if ofs >= self.m.len() {
                return Ok(Self::new());
            }

            let mut m = WordBuf::new(self.m.len() - ofs)?;
            if sfh == 0 {
                for i in ofs..self.m.len() {
                    m[i - ofs] = self.m[i];
                }
            } else {
                let upshift = HIGH_SHIFT - sfh * 4;
                let doshift = sfh * 4;
                let nn = self.m.len() - 1;

                for i in ofs..nn {
                    m[i - ofs] = (self.m[i] >> doshift) | ((self.m[i + 1] << upshift) & WORD_MASK);
                }
                m[nn - ofs] = self.m[nn] >> doshift;
            }

            let mut ret = BigInt { m, s: self.s };
            ret.normalize()?;
            Ok(ret)
        } else {
            self.clone()
        }
    }

    /// Truncates the number to its `nof_digits` least significant
    /// decimal digits, keeping the sign.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn cut(&self, nof_digits: usize) -> Result<Self, Error> {
        let ofs = nof_digits / DIGITS_PER_WORD;
        let sfh = nof_digits % DIGITS_PER_WORD;

        if ofs >= self.m.len() {
            // nothing above the cut position
            return self.clone();
        }

        let mut m = WordBuf::new(ofs + 1)?;
        m[..ofs].copy_from_slice(&self.m[..ofs]);
        m[ofs] = self.m[ofs] & (WORD_MASK >> ((DIGITS_PER_WORD - sfh) * 4));

        let mut ret = BigInt { m, s: self.s };
        ret.normalize()?;
        Ok(ret)
    }

    // Compares the magnitudes digit-wise.
    pub(crate) fn abs_cmp(&self, d2: &Self) -> Ordering {
        let i1 = self.digits();
        let i2 = d2.digits();
        match i1.len().cmp(&i2.len()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        for (a, b) in i1.zip(i2) {
            match a.cmp(&b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    #[cfg(feature = "random")]
    /// Returns a random number with at most `nof_digits` significant
    /// decimal digits and a random sign. The function does not follow
    /// any specific distribution law. The intended use of this function
    /// is for testing.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn random_digits(nof_digits: usize) -> Result<Self, Error> {
        #[cfg(not(feature = "std"))]
        use alloc::vec::Vec;

        let mut digits = Vec::new();
        digits.try_reserve_exact(nof_digits)?;
        for _ in 0..nof_digits {
            digits.push(rand::random::<u8>() % 10);
        }

        let num = crate::parser::BigNumber::from_raw_parts(rand::random::<u8>() & 1 == 1, 0, digits);
        Self::from_number(&num)
    }

    // Lays out the decimal digits of `value` starting `shift` digit
    // positions above the least significant position. A negative
    // `shift` divides the value by the corresponding power of ten
    // first; if the division consumes the value entirely it is pinned
    // to 1 so that the division loop keeps progressing.
    pub(crate) fn from_factor_at(mut value: FactorType, mut shift: i32) -> Result<Self, Error> {
        let scaled = shift < 0;
        while shift < -6 {
            value /= 1_000_000;
            shift += 6;
        }
        while shift < -3 {
            value /= 1000;
            shift += 3;
        }
        while shift < -1 {
            value /= 100;
            shift += 2;
        }
        while shift < 0 {
            value /= 10;
            shift += 1;
        }
        if value == 0 {
            if !scaled {
                return Ok(Self::new());
            }
            value = 1;
        }

        let shift = shift as usize;
        let mut m = WordBuf::new((shift + INT_DIGITS) / DIGITS_PER_WORD + 1)?;
        let mut bb = shift / DIGITS_PER_WORD;
        let mut tt = 4 * (shift % DIGITS_PER_WORD);
        while value > 0 {
            let dd = value % 10;
            value /= 10;
            m[bb] |= dd << tt;
            if tt == HIGH_SHIFT - 4 {
                tt = 0;
                bb += 1;
            } else {
                tt += 4;
            }
        }

        let mut ret = BigInt { m, s: Sign::Pos };
        ret.normalize()?;
        Ok(ret)
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::new()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.s, other.s) {
            (Sign::Pos, Sign::Neg) => Ordering::Greater,
            (Sign::Neg, Sign::Pos) => Ordering::Less,
            (Sign::Pos, Sign::Pos) => self.abs_cmp(other),
            (Sign::Neg, Sign::Neg) => self.abs_cmp(other).reverse(),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
