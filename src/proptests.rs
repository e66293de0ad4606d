//! Property-based tests against `u128` reference arithmetic.

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use proptest::prelude::*;

    use crate::{BigNat, ONE, RADIX};

    fn nat(val: u64) -> BigNat {
        BigNat::from(val)
    }

    // Values made of limbs near the top of the limb range, so carries chain.
    fn heavy_limbs() -> impl Strategy<Value = Vec<u32>> {
        prop::collection::vec(prop_oneof![Just(RADIX - 1), (RADIX - 3)..RADIX, 0..RADIX], 0..8)
    }

    fn hash_of(n: &BigNat) -> u64 {
        let mut hasher = DefaultHasher::new();
        n.hash(&mut hasher);
        hasher.finish()
    }

    proptest! {
        #[test]
        fn decimal_round_trip(s in "[1-9][0-9]{0,60}") {
            let n: BigNat = s.parse().unwrap();
            prop_assert_eq!(n.to_string(), s);
        }

        #[test]
        fn leading_zeros_are_dropped(zeros in 0usize..30, n in any::<u64>()) {
            let padded = format!("{}{}", "0".repeat(zeros), n);
            let big: BigNat = padded.parse().unwrap();
            prop_assert_eq!(big.to_string(), n.to_string());
            prop_assert_eq!(big, nat(n));
        }

        #[test]
        fn normalize_is_idempotent(limbs in heavy_limbs()) {
            let a = BigNat::from_limbs(&limbs).unwrap();
            prop_assert!(a.limbs().first() != Some(&0));
            let b = BigNat::from_limbs(a.limbs()).unwrap();
            prop_assert_eq!(a.limbs(), b.limbs());
        }

        #[test]
        fn plus_matches_u128(a in any::<u64>(), b in any::<u64>()) {
            let expected = a as u128 + b as u128;
            prop_assert_eq!(nat(a).plus(&nat(b)), BigNat::from(expected));
        }

        #[test]
        fn times_matches_u128(a in any::<u64>(), b in any::<u64>()) {
            let expected = a as u128 * b as u128;
            prop_assert_eq!(nat(a).times(&nat(b)), BigNat::from(expected));
        }

        #[test]
        fn divide_by_matches_u128(a in any::<u128>(), d in prop_oneof![1u32..20, (RADIX - 20)..RADIX, 1..RADIX]) {
            let (q, r) = BigNat::from(a).div_rem_limb(d).unwrap();
            prop_assert_eq!(q, BigNat::from(a / d as u128));
            prop_assert_eq!(r as u128, a % d as u128);
        }

        #[test]
        fn div_rem_recombines(limbs in heavy_limbs(), d in 1..RADIX) {
            let a = BigNat::from_limbs(&limbs).unwrap();
            let (q, r) = a.div_rem_limb(d).unwrap();
            prop_assert_eq!(q.times(&BigNat::from(d)).plus(&BigNat::from(r)), a);
        }

        #[test]
        fn add_commutative_associative(x in heavy_limbs(), y in heavy_limbs(), z in heavy_limbs()) {
            let a = BigNat::from_limbs(&x).unwrap();
            let b = BigNat::from_limbs(&y).unwrap();
            let c = BigNat::from_limbs(&z).unwrap();
            prop_assert_eq!(&a + &BigNat::ZERO, a.clone());
            prop_assert_eq!(&a + &b, &b + &a);
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn mul_identities(x in heavy_limbs(), y in heavy_limbs(), z in heavy_limbs()) {
            let a = BigNat::from_limbs(&x).unwrap();
            let b = BigNat::from_limbs(&y).unwrap();
            let c = BigNat::from_limbs(&z).unwrap();
            prop_assert_eq!(&a * &*ONE, a.clone());
            prop_assert_eq!(&a * &BigNat::ZERO, BigNat::ZERO);
            prop_assert_eq!(&a * &b, &b * &a);
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn order_matches_u128(a in any::<u128>(), b in any::<u128>()) {
            prop_assert_eq!(BigNat::from(a).cmp(&BigNat::from(b)), a.cmp(&b));
        }

        #[test]
        fn equal_values_hash_equal(n in any::<u64>(), zeros in 0usize..4) {
            let mut limbs = vec![0u32; zeros];
            limbs.extend_from_slice(nat(n).limbs());
            let padded = BigNat::from_limbs(&limbs).unwrap();
            prop_assert_eq!(&padded, &nat(n));
            prop_assert_eq!(hash_of(&padded), hash_of(&nat(n)));
        }

        #[test]
        fn radix_text_matches_u64(n in any::<u64>(), radix in 2u32..=36) {
            let mut digits = Vec::new();
            let mut rest = n;
            loop {
                digits.push((rest % radix as u64) as u32);
                rest /= radix as u64;
                if rest == 0 {
                    break;
                }
            }
            digits.reverse();
            let text: String = digits
                .iter()
                .map(|&d| std::char::from_digit(d, radix).unwrap())
                .collect();
            prop_assert_eq!(BigNat::from_str_radix(&text, radix).unwrap(), nat(n));
            prop_assert_eq!(BigNat::from_digits(&digits, radix).unwrap(), nat(n));
        }
    }
}
