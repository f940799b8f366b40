//! Static constants.

use crate::num::BigInt;
use lazy_static::lazy_static;

lazy_static! {

    /// 1
    pub(crate) static ref ONE: BigInt = BigInt::from_u64(1).expect("Constant ONE initialization.");
}
