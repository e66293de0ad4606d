//! Big Nat \
//! This crate provides:
//! - [`BigNat`]: Immutable arbitrary-precision natural numbers, stored as base `10^9` limbs.
//! - [`BigNatError`]: the range and format errors raised while building or dividing one.

mod big_nat;
mod big_nat_cache;
mod big_nat_constants;
mod error;

#[cfg(test)]
mod proptests;

pub use big_nat::BigNat;
pub use big_nat_cache::ONE;
pub use big_nat_constants::{RADIX, RADIX_DECIMAL_DIGITS};
pub use error::{BigNatError, ErrorKind, Result};

#[cfg(test)]
mod tests {
    use crate::{BigNat, ONE};

    #[test]
    fn it_works() {
        let a: BigNat = "10000000000000".parse().unwrap();
        let b: BigNat = "900000000000".parse().unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a * b = {}", &a * &b);
        println!("a / 7 = {}", &a / 7);
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert!(ONE.is_one());
        assert!(BigNat::ZERO.is_zero());
    }
}
