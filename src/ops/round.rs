//! Rounding to a granularity.

use crate::defs::Error;
use crate::defs::Sign;
use crate::num::BigInt;

impl BigInt {
    /// Rounds the number toward zero to the nearest multiple of `gran`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `gran` is zero or negative.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn round(&self, gran: &Self) -> Result<Self, Error> {
        if gran.sign().is_negative() || gran.is_zero() {
            return Err(Error::InvalidArgument);
        }

        // the residue of the magnitude within the granularity window:
        // truncate to the decimal width of the granularity, then keep
        // subtracting while the delta stays non-negative
        let mut ct = self.cut(gran.nof_digits())?;
        ct.set_sign_nonzero(Sign::Pos);
        loop {
            let (zt, flipped) = Self::digits_subtraction(&ct, gran)?;
            if flipped {
                break;
            }
            ct = zt;
        }

        if self.sign().is_negative() {
            self.add(&ct)
        } else {
            self.sub(&ct)
        }
    }
}
