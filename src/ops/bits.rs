//! Bitwise operations implemented on top of the decimal arithmetic.
//!
//! The operand digits are decomposed into bits by trial subtraction
//! against a precomputed table of the powers of two, combined, and
//! summed back. The cost is proportional to the table size times the
//! digit count; these operations exist for completeness, not speed.

use crate::common::consts::ONE;
use crate::defs::Error;
use crate::num::BigInt;
use core::cmp::Ordering;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Precomputed decimal representations of the powers of two used by the
/// bitwise operations. A table is immutable once built and can be
/// shared between operations and threads.
#[derive(Debug)]
pub struct BitValues {
    table: Vec<BigInt>,
}

impl BitValues {
    /// Builds the table of the values 2^0 .. 2^(`nof_bits` - 1).
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn new(nof_bits: usize) -> Result<Self, Error> {
        let mut table = Vec::new();
        table.try_reserve_exact(nof_bits)?;

        let mut v = ONE.clone()?;
        for _ in 0..nof_bits {
            let next = BigInt::digits_addition(&v, &v)?;
            table.push(v);
            v = next;
        }

        Ok(BitValues { table })
    }

    /// Number of bits the table covers.
    pub fn nof_bits(&self) -> usize {
        self.table.len()
    }
}

impl BigInt {
    /// Combines `self` and `d2` with bitwise AND over the bit range of
    /// `bitvalues`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: an operand is negative or does not fit the
    ///    bit range of the table.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn bitwise_and(&self, d2: &Self, bitvalues: &BitValues) -> Result<Self, Error> {
        let b1 = self.to_bits(bitvalues)?;
        let b2 = d2.to_bits(bitvalues)?;
        let bits: Vec<bool> = b1.iter().zip(b2.iter()).map(|(a, b)| *a && *b).collect();
        Self::from_bits(&bits, bitvalues)
    }

    /// Combines `self` and `d2` with bitwise OR over the bit range of
    /// `bitvalues`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: an operand is negative or does not fit the
    ///    bit range of the table.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn bitwise_or(&self, d2: &Self, bitvalues: &BitValues) -> Result<Self, Error> {
        let b1 = self.to_bits(bitvalues)?;
        let b2 = d2.to_bits(bitvalues)?;
        let bits: Vec<bool> = b1.iter().zip(b2.iter()).map(|(a, b)| *a || *b).collect();
        Self::from_bits(&bits, bitvalues)
    }

    /// Combines `self` and `d2` with bitwise XOR over the bit range of
    /// `bitvalues`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: an operand is negative or does not fit the
    ///    bit range of the table.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn bitwise_xor(&self, d2: &Self, bitvalues: &BitValues) -> Result<Self, Error> {
        let b1 = self.to_bits(bitvalues)?;
        let b2 = d2.to_bits(bitvalues)?;
        let bits: Vec<bool> = b1.iter().zip(b2.iter()).map(|(a, b)| *a != *b).collect();
        Self::from_bits(&bits, bitvalues)
    }

    /// Inverts the bits of `self` over the bit range of `bitvalues`,
    /// i.e. computes the XOR against 2^n - 1.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `self` is negative or does not fit the bit
    ///    range of the table.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn bitwise_not(&self, bitvalues: &BitValues) -> Result<Self, Error> {
        let b1 = self.to_bits(bitvalues)?;
        let bits: Vec<bool> = b1.iter().map(|a| !*a).collect();
        Self::from_bits(&bits, bitvalues)
    }

    // Bit decomposition of the magnitude by trial subtraction against
    // the table, highest power first; least significant bit comes
    // first in the result.
    fn to_bits(&self, bitvalues: &BitValues) -> Result<Vec<bool>, Error> {
        if self.sign().is_negative() {
            return Err(Error::InvalidArgument);
        }

        let mut bits = Vec::new();
        bits.try_reserve_exact(bitvalues.table.len())?;
        bits.resize(bitvalues.table.len(), false);

        let mut rest = self.clone()?;
        for (i, p) in bitvalues.table.iter().enumerate().rev() {
            if rest.abs_cmp(p) != Ordering::Less {
                let (diff, _) = Self::digits_subtraction(&rest, p)?;
                rest = diff;
                bits[i] = true;
            }
        }

        if !rest.is_zero() {
            // the value does not fit the covered bit range
            return Err(Error::InvalidArgument);
        }

        Ok(bits)
    }

    // Sum of the powers of two selected by `bits`.
    fn from_bits(bits: &[bool], bitvalues: &BitValues) -> Result<Self, Error> {
        let mut rt = Self::new();
        for (b, p) in bits.iter().zip(bitvalues.table.iter()) {
            if *b {
                rt = Self::digits_addition(&rt, p)?;
            }
        }
        Ok(rt)
    }
}
