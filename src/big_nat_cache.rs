use lazy_static::*;

use crate::BigNat;
use crate::big_nat_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigNat; MAX_CONSTANT + 1] = {
        let mut cache: [BigNat; MAX_CONSTANT + 1] = Default::default();
        for (val, slot) in cache.iter_mut().enumerate().skip(1) {
            *slot = BigNat::from_normalized(vec![val as u32]);
        }
        cache
    };
    /// The natural number one, `[1]`.
    pub static ref ONE: BigNat = POS_CACHE[1].clone();
}
