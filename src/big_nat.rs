//! # BigNat
//! Immutable arbitrary-precision natural numbers.  The magnitude is kept as a
//! sequence of base `10^9` limbs, most significant limb first, so decimal
//! parsing and printing never need a base conversion.
//! # Example
//! ```
//! use big_nat::BigNat;
//!
//! let a: BigNat = "999999999999999999".parse().unwrap();
//! let b = BigNat::from(2u32);
//! assert_eq!((&a * &b).to_string(), "1999999999999999998");
//! assert_eq!((&a + &b).to_string(), "1000000000000000001");
//! assert_eq!((a / 3).to_string(), "333333333333333333");
//! ```
//!

use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign,
    Mul, MulAssign,
    Div,
};
use std::str::FromStr;

use num_traits::{One, Pow, Zero};

use crate::big_nat_cache::*;
use crate::big_nat_constants::*;
use crate::error::{BigNatError, Result};

const RADIX_U64: u64 = RADIX as u64;

macro_rules! skip_leading_zero {
    ($vec: expr) => {
        {
            $vec
                .into_iter()
                .skip_while(|x| *x == 0)
                .collect::<Vec<u32>>()
        }
    };
}

#[derive(Debug, Clone, Default)]
pub struct BigNat {
    limbs: Vec<u32>,
}

// Storage and normalization
impl BigNat {
    /// The natural number zero, represented by an empty limb sequence.
    pub const ZERO: BigNat = BigNat { limbs: Vec::new() };

    /// Wraps limbs that are already known to be in range and normalized.
    pub(crate) fn from_normalized(limbs: Vec<u32>) -> BigNat {
        debug_assert!(limbs.first() != Some(&0), "leading zero limb");
        debug_assert!(limbs.iter().all(|&l| l < RADIX), "limb out of range");
        BigNat { limbs }
    }

    /// Every raw result passes through here before it becomes a value.
    fn normalize(limbs: Vec<u32>) -> BigNat {
        match limbs.first() {
            Some(&0) => BigNat { limbs: skip_leading_zero!(limbs) },
            _ => BigNat { limbs },
        }
    }

    fn check_limbs(limbs: &[u32]) -> Result<()> {
        match limbs.iter().find(|&&l| l >= RADIX) {
            Some(&limb) => {
                log::debug!("rejecting limb {} (radix {})", limb, RADIX);
                Err(BigNatError::LimbOutOfRange(limb))
            }
            None => Ok(()),
        }
    }

    /// Builds a value from raw limbs, most significant first.
    ///
    /// Leading zero limbs are dropped; an all-zero or empty slice yields
    /// [`BigNat::ZERO`].
    ///
    /// # Errors
    ///
    /// [`BigNatError::LimbOutOfRange`] if any limb is `>= RADIX`.
    pub fn from_limbs(limbs: &[u32]) -> Result<BigNat> {
        BigNat::check_limbs(limbs)?;
        Ok(BigNat::normalize(limbs.to_vec()))
    }

    /// The normalized limbs, most significant first.
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.limbs == [1]
    }
}

impl TryFrom<Vec<u32>> for BigNat {
    type Error = BigNatError;

    fn try_from(limbs: Vec<u32>) -> Result<Self> {
        BigNat::check_limbs(&limbs)?;
        Ok(BigNat::normalize(limbs))
    }
}

// Construction from native integers
macro_rules! impl_unsigned_to_big_nat {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigNat {
        fn from(val: $u) -> Self {
            BigNat::value_of(val as u128)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_nat {
    ($($i: ty),*) => {
    $(
    impl TryFrom<$i> for BigNat {
        type Error = BigNatError;

        fn try_from(val: $i) -> Result<Self> {
            if val < 0 {
                log::debug!("rejecting negative value {}", val);
                Err(BigNatError::Negative(val as i128))
            } else {
                Ok(BigNat::value_of(val as u128))
            }
        }
    }
    )*
    };
}
impl_unsigned_to_big_nat!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_nat!(i8, i16, i32, isize, i64, i128);

impl BigNat {
    fn value_of(mut val: u128) -> BigNat {
        if val <= MAX_CONSTANT as u128 {
            return POS_CACHE[val as usize].clone();
        }
        // u64 needs at most 3 limbs, u128 at most 5
        let mut limbs = Vec::with_capacity(5);
        while val != 0 {
            limbs.push((val % RADIX as u128) as u32);
            val /= RADIX as u128;
        }
        limbs.reverse();
        BigNat::from_normalized(limbs)
    }
}

macro_rules! impl_big_nat_to_unsigned {
    ($($u: ty),*) => {
    $(
    impl TryFrom<&BigNat> for $u {
        type Error = BigNatError;

        fn try_from(val: &BigNat) -> Result<Self> {
            val.limbs
                .iter()
                .try_fold(0 as $u, |acc, &limb| {
                    acc.checked_mul(RADIX as $u)?.checked_add(limb as $u)
                })
                .ok_or(BigNatError::ValueTooLarge(stringify!($u)))
        }
    }
    )*
    };
}
impl_big_nat_to_unsigned!(u64, u128);

// Construction from text and digit sequences
impl BigNat {
    /// Parses plain decimal text.  The string is cut into right-aligned
    /// chunks of nine digits, one chunk per limb.
    ///
    /// # Errors
    ///
    /// [`BigNatError::Empty`] for `""`, [`BigNatError::InvalidDigit`] for
    /// anything other than `0-9` (signs included).
    pub fn from_decimal_str(val: &str) -> Result<BigNat> {
        if val.is_empty() {
            log::debug!("rejecting empty decimal string");
            return Err(BigNatError::Empty);
        }
        if let Some((pos, ch)) = val.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            log::debug!("rejecting {:?} at {} in decimal string", ch, pos);
            return Err(BigNatError::InvalidDigit { ch, pos, radix: 10 });
        }

        let digits = val.as_bytes();
        let len = digits.len();
        let mut limbs = Vec::with_capacity((len + RADIX_DECIMAL_DIGITS - 1) / RADIX_DECIMAL_DIGITS);

        let mut group_len = len % RADIX_DECIMAL_DIGITS;
        if group_len == 0 {
            group_len = RADIX_DECIMAL_DIGITS;
        }
        let mut cursor = 0;
        while cursor < len {
            let group = &digits[cursor..cursor + group_len];
            let limb = group
                .iter()
                .fold(0u32, |acc, &b| acc * 10 + (b - b'0') as u32);
            limbs.push(limb);
            cursor += group_len;
            group_len = RADIX_DECIMAL_DIGITS;
        }

        Ok(BigNat::normalize(limbs))
    }

    /// Parses text in any radix from 2 to 36.  Letters map to 10..35 without
    /// regard to case.
    ///
    /// # Errors
    ///
    /// [`BigNatError::RadixOutOfRange`] for a bad radix,
    /// [`BigNatError::Empty`] for `""` and [`BigNatError::InvalidDigit`] for a
    /// character that is not a digit of `radix`.
    pub fn from_str_radix(val: &str, radix: u32) -> Result<BigNat> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            log::debug!("rejecting radix {}", radix);
            return Err(BigNatError::RadixOutOfRange(radix));
        }
        if val.is_empty() {
            log::debug!("rejecting empty radix-{} string", radix);
            return Err(BigNatError::Empty);
        }
        let digits = val.char_indices().map(|(pos, ch)| {
            ch.to_digit(radix)
                .ok_or(BigNatError::InvalidDigit { ch, pos, radix })
        });
        BigNat::horner(digits, radix)
    }

    /// Builds a value from pre-parsed digits in `radix`, most significant
    /// digit first.  An empty slice is zero.
    ///
    /// # Errors
    ///
    /// [`BigNatError::RadixOutOfRange`] if `radix < 2`,
    /// [`BigNatError::DigitOutOfRange`] if a digit is `>= radix`.
    pub fn from_digits(digits: &[u32], radix: u32) -> Result<BigNat> {
        if radix < MIN_RADIX {
            log::debug!("rejecting radix {}", radix);
            return Err(BigNatError::RadixOutOfRange(radix));
        }
        let digits = digits.iter().map(|&digit| {
            if digit < radix {
                Ok(digit)
            } else {
                Err(BigNatError::DigitOutOfRange { digit, radix })
            }
        });
        BigNat::horner(digits, radix)
    }

    /// `value = value * radix + digit` for each digit in turn.
    fn horner<I>(digits: I, radix: u32) -> Result<BigNat>
    where
        I: IntoIterator<Item = Result<u32>>,
    {
        let multiplier = BigNat::from(radix);
        digits.into_iter().try_fold(BigNat::ZERO, |value, digit| {
            let digit = digit.map_err(|e| {
                log::debug!("horner conversion failed: {}", e);
                e
            })?;
            Ok(value.times(&multiplier).plus(&BigNat::from(digit)))
        })
    }
}

impl FromStr for BigNat {
    type Err = BigNatError;

    fn from_str(s: &str) -> Result<Self> {
        BigNat::from_decimal_str(s)
    }
}

impl TryFrom<&str> for BigNat {
    type Error = BigNatError;

    fn try_from(val: &str) -> Result<Self> {
        BigNat::from_decimal_str(val)
    }
}

// Addition
impl BigNat {
    pub fn plus(&self, other: &BigNat) -> BigNat {
        log::trace!("plus: {} + {} limbs", self.limbs.len(), other.limbs.len());
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return other.clone();
        }

        let (x, y) = if self.limbs.len() >= other.limbs.len() {
            (&self.limbs, &other.limbs)
        } else {
            (&other.limbs, &self.limbs)
        };

        // One extra limb on the left takes the final carry.  The loop walks
        // the full length of `x`, so a carry chain through all-999999999
        // limbs is absorbed without recursion.
        let mut result = vec![0u32; x.len() + 1];
        let mut x_index = x.len();
        let mut y_index = y.len();
        let mut carry = 0u32;
        while x_index > 0 {
            x_index -= 1;
            let mut sum = x[x_index] + carry;
            if y_index > 0 {
                y_index -= 1;
                sum += y[y_index];
            }
            if sum >= RADIX {
                result[x_index + 1] = sum - RADIX;
                carry = 1;
            } else {
                result[x_index + 1] = sum;
                carry = 0;
            }
        }
        result[0] = carry;

        BigNat::normalize(result)
    }
}

impl Add for BigNat {
    type Output = BigNat;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(&rhs)
    }
}

impl Add<&BigNat> for &BigNat {
    type Output = BigNat;

    fn add(self, rhs: &BigNat) -> Self::Output {
        self.plus(rhs)
    }
}

impl AddAssign for BigNat {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.plus(&rhs);
    }
}

impl AddAssign<&BigNat> for BigNat {
    fn add_assign(&mut self, rhs: &BigNat) {
        *self = self.plus(rhs);
    }
}

impl Sum for BigNat {
    fn sum<I: Iterator<Item = BigNat>>(iter: I) -> Self {
        iter.fold(BigNat::ZERO, |acc, x| acc.plus(&x))
    }
}

impl<'a> Sum<&'a BigNat> for BigNat {
    fn sum<I: Iterator<Item = &'a BigNat>>(iter: I) -> Self {
        iter.fold(BigNat::ZERO, |acc, x| acc.plus(x))
    }
}

// Multiplication
impl BigNat {
    /// Schoolbook multiplication into a `len(a) + len(b)` buffer.
    pub fn times(&self, other: &BigNat) -> BigNat {
        log::trace!("times: {} * {} limbs", self.limbs.len(), other.limbs.len());
        if self.is_zero() || other.is_zero() {
            return BigNat::ZERO;
        }

        let x = &self.limbs;
        let y = &other.limbs;
        let mut result = vec![0u32; x.len() + y.len()];

        for (i, &x_limb) in x.iter().enumerate() {
            if x_limb == 0 {
                continue;
            }
            for (j, &y_limb) in y.iter().enumerate() {
                // < RADIX^2, well inside u64
                let product = x_limb as u64 * y_limb as u64;
                BigNat::add_at(&mut result, i + j + 1, product % RADIX_U64);
                BigNat::add_at(&mut result, i + j, product / RADIX_U64);
            }
        }

        BigNat::normalize(result)
    }

    /// Adds `val` into `buf[pos]` and ripples the carry toward index 0.
    ///
    /// Every partial sum of a product is bounded by the full product, which
    /// fits in the buffer, so the carry never runs past index 0.
    fn add_at(buf: &mut [u32], mut pos: usize, val: u64) {
        let mut carry = val;
        while carry != 0 {
            let sum = buf[pos] as u64 + carry;
            buf[pos] = (sum % RADIX_U64) as u32;
            carry = sum / RADIX_U64;
            if carry != 0 {
                debug_assert!(pos > 0, "carry ran past the result buffer");
                pos -= 1;
            }
        }
    }

    /// `self^exp` by repeated squaring.  `x^0` is one, including `0^0`.
    pub fn pow(&self, mut exp: u32) -> BigNat {
        let mut result = ONE.clone();
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.times(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.times(&base);
            }
        }
        result
    }
}

impl Mul for BigNat {
    type Output = BigNat;

    fn mul(self, rhs: Self) -> Self::Output {
        self.times(&rhs)
    }
}

impl Mul<&BigNat> for &BigNat {
    type Output = BigNat;

    fn mul(self, rhs: &BigNat) -> Self::Output {
        self.times(rhs)
    }
}

impl MulAssign for BigNat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.times(&rhs);
    }
}

impl MulAssign<&BigNat> for BigNat {
    fn mul_assign(&mut self, rhs: &BigNat) {
        *self = self.times(rhs);
    }
}

impl Product for BigNat {
    fn product<I: Iterator<Item = BigNat>>(iter: I) -> Self {
        iter.fold(ONE.clone(), |acc, x| acc.times(&x))
    }
}

impl<'a> Product<&'a BigNat> for BigNat {
    fn product<I: Iterator<Item = &'a BigNat>>(iter: I) -> Self {
        iter.fold(ONE.clone(), |acc, x| acc.times(x))
    }
}

impl Pow<u32> for &BigNat {
    type Output = BigNat;

    fn pow(self, exp: u32) -> Self::Output {
        BigNat::pow(self, exp)
    }
}

impl Zero for BigNat {
    fn zero() -> Self {
        BigNat::ZERO
    }

    fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }
}

impl One for BigNat {
    fn one() -> Self {
        ONE.clone()
    }
}

// Short division
impl BigNat {
    /// Divides by a single-limb divisor, returning the floor quotient and
    /// the remainder.
    ///
    /// # Errors
    ///
    /// [`BigNatError::DivisorOutOfRange`] unless `0 < divisor < RADIX`.
    pub fn div_rem_limb(&self, divisor: u32) -> Result<(BigNat, u32)> {
        log::trace!("div_rem_limb: {} limbs / {}", self.limbs.len(), divisor);
        if divisor == 0 || divisor >= RADIX {
            log::debug!("rejecting divisor {}", divisor);
            return Err(BigNatError::DivisorOutOfRange(divisor));
        }

        let d = divisor as u64;
        let mut remainder = 0u64;
        let mut quotient = Vec::with_capacity(self.limbs.len());
        for &limb in &self.limbs {
            // remainder < d, so v / d < RADIX
            let v = limb as u64 + RADIX_U64 * remainder;
            quotient.push((v / d) as u32);
            remainder = v % d;
        }

        Ok((BigNat::normalize(quotient), remainder as u32))
    }

    /// Floor division by a single-limb divisor; the remainder is dropped.
    ///
    /// # Errors
    ///
    /// [`BigNatError::DivisorOutOfRange`] unless `0 < divisor < RADIX`.
    pub fn divide_by(&self, divisor: u32) -> Result<BigNat> {
        self.div_rem_limb(divisor).map(|(quotient, _)| quotient)
    }
}

impl Div<u32> for BigNat {
    type Output = BigNat;

    fn div(self, divisor: u32) -> Self::Output {
        &self / divisor
    }
}

impl Div<u32> for &BigNat {
    type Output = BigNat;

    /// # Panics
    ///
    /// If `divisor` is 0 or not below `RADIX`.
    fn div(self, divisor: u32) -> Self::Output {
        match self.divide_by(divisor) {
            Ok(quotient) => quotient,
            Err(e) => panic!("{}", e),
        }
    }
}

// Comparison and hashing
impl BigNat {
    fn compare_limbs(&self, other: &BigNat) -> Ordering {
        let self_len = self.limbs.len();
        let other_len = other.limbs.len();

        // normalized, so the longer sequence is the larger number
        if self_len != other_len {
            return self_len.cmp(&other_len);
        }

        for (a, b) in self.limbs.iter().zip(&other.limbs) {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }

    /// Polynomial hash over the limbs, `h = h * 13 + limb`.
    fn hash_code(&self) -> u64 {
        self.limbs
            .iter()
            .fold(0u64, |h, &limb| h.wrapping_mul(13).wrapping_add(limb as u64))
    }
}

impl PartialEq for BigNat {
    fn eq(&self, other: &Self) -> bool {
        self.compare_limbs(other).is_eq()
    }
}
impl Eq for BigNat {}

impl PartialOrd for BigNat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigNat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_limbs(other)
    }
}

impl Hash for BigNat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

// Decimal formatting
impl BigNat {
    /// Canonical decimal text: no leading zeros, `"0"` for zero.
    pub fn to_decimal_string(&self) -> String {
        let (first, rest) = match self.limbs.split_first() {
            Some(split) => split,
            None => return String::from("0"),
        };
        let mut s = String::with_capacity(self.limbs.len() * RADIX_DECIMAL_DIGITS);
        s.push_str(&first.to_string());
        for limb in rest {
            s.push_str(&format!("{:0width$}", limb, width = RADIX_DECIMAL_DIGITS));
        }
        s
    }
}

impl Display for BigNat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(true, "", &self.to_decimal_string())
    }
}

#[cfg(test)]
fn big(s: &str) -> BigNat {
    s.parse().unwrap()
}

#[test]
fn test_normalize() {
    let a = BigNat::from_limbs(&[0, 0, 1, 0]).unwrap();
    assert_eq!(a.limbs(), &[1, 0]);
    assert_eq!(BigNat::from_limbs(a.limbs()).unwrap().limbs(), a.limbs());

    assert!(BigNat::from_limbs(&[0, 0, 0]).unwrap().limbs().is_empty());
    assert!(BigNat::from_limbs(&[]).unwrap().is_zero());
    assert_eq!(BigNat::try_from(vec![0u32, 7]).unwrap().limbs(), &[7]);

    assert_eq!(
        BigNat::from_limbs(&[1, RADIX]),
        Err(BigNatError::LimbOutOfRange(RADIX))
    );
    assert_eq!(
        BigNat::try_from(vec![u32::MAX]),
        Err(BigNatError::LimbOutOfRange(u32::MAX))
    );
}

#[test]
fn test_from() {
    assert_eq!(BigNat::from(1_000_000_000u64).limbs(), &[1, 0]);
    assert_eq!(BigNat::from(0u8), BigNat::ZERO);
    assert_eq!(BigNat::from(16u16).limbs(), &[16]);
    assert_eq!(BigNat::from(17u32).limbs(), &[17]);
    assert_eq!(BigNat::from(u64::MAX).limbs(), &[18, 446744073, 709551615]);
    assert_eq!(
        BigNat::from(u128::MAX).to_string(),
        "340282366920938463463374607431768211455"
    );

    assert_eq!(BigNat::try_from(42i64).unwrap(), BigNat::from(42u8));
    assert_eq!(BigNat::try_from(i64::MAX).unwrap().to_string(), "9223372036854775807");
    assert_eq!(BigNat::try_from(-5i64), Err(BigNatError::Negative(-5)));
    assert_eq!(
        BigNat::try_from(i8::MIN).unwrap_err().kind(),
        crate::ErrorKind::Range
    );
}

#[test]
fn test_to_unsigned() {
    assert_eq!(u64::try_from(&big("123456789110")), Ok(123456789110));
    assert_eq!(u64::try_from(&BigNat::from(u64::MAX)), Ok(u64::MAX));
    assert_eq!(u64::try_from(&BigNat::ZERO), Ok(0));
    assert_eq!(
        u64::try_from(&big("18446744073709551616")),
        Err(BigNatError::ValueTooLarge("u64"))
    );
    assert_eq!(u128::try_from(&big("18446744073709551616")), Ok(1 << 64));
}

#[test]
fn test_parse_decimal() {
    assert_eq!(big("123456789").limbs(), &[123456789]);
    assert_eq!(big("1234567890").limbs(), &[1, 234567890]);
    assert_eq!(big("123456789012345678").limbs(), &[123456789, 12345678]);
    assert_eq!(big("1234567890123456789").limbs(), &[1, 234567890, 123456789]);
    assert_eq!(big("000000000000000000000").limbs(), &[] as &[u32]);
    assert_eq!(big("0000000000042").limbs(), &[42]);

    assert_eq!(BigNat::from_str("12a4"), Err(BigNatError::InvalidDigit { ch: 'a', pos: 2, radix: 10 }));
    assert_eq!(BigNat::from_str("-1"), Err(BigNatError::InvalidDigit { ch: '-', pos: 0, radix: 10 }));
    assert_eq!(BigNat::from_str(""), Err(BigNatError::Empty));
    assert_eq!(BigNat::try_from("1 2").unwrap_err().kind(), crate::ErrorKind::Format);
}

#[test]
fn test_from_str_radix() {
    assert_eq!(BigNat::from_str_radix("FF", 16).unwrap(), BigNat::from(255u64));
    assert_eq!(BigNat::from_str_radix("ff", 16).unwrap(), BigNat::from(255u64));
    assert_eq!(BigNat::from_str_radix("zz", 36).unwrap(), BigNat::from(1295u64));
    assert_eq!(BigNat::from_str_radix("000", 7).unwrap(), BigNat::ZERO);
    assert_eq!(
        BigNat::from_str_radix("fafcfbffaffaffbffbffbffbffbff", 16).unwrap(),
        BigNat::from(0xfafcfbffaffaffbffbffbffbffbff_u128)
    );
    let two_pow_100 = format!("1{}", "0".repeat(100));
    assert_eq!(
        BigNat::from_str_radix(&two_pow_100, 2).unwrap().to_string(),
        "1267650600228229401496703205376"
    );
    assert_eq!(
        BigNat::from_str_radix("98765432109876543210", 10).unwrap(),
        big("98765432109876543210")
    );

    assert_eq!(BigNat::from_str_radix("10", 1), Err(BigNatError::RadixOutOfRange(1)));
    assert_eq!(BigNat::from_str_radix("10", 37), Err(BigNatError::RadixOutOfRange(37)));
    assert_eq!(
        BigNat::from_str_radix("12", 2),
        Err(BigNatError::InvalidDigit { ch: '2', pos: 1, radix: 2 })
    );
    assert_eq!(BigNat::from_str_radix("", 16), Err(BigNatError::Empty));
}

#[test]
fn test_from_digits() {
    assert_eq!(BigNat::from_digits(&[1, 0, 1], 2).unwrap(), BigNat::from(5u64));
    assert_eq!(BigNat::from_digits(&[15, 15], 16).unwrap(), BigNat::from(255u64));
    assert_eq!(BigNat::from_digits(&[], 10).unwrap(), BigNat::ZERO);
    assert_eq!(BigNat::from_digits(&[0, 0, 3], 10).unwrap(), BigNat::from(3u64));
    // one digit per limb
    assert_eq!(
        BigNat::from_digits(&[1, 2, 3], RADIX).unwrap().limbs(),
        &[1, 2, 3]
    );

    assert_eq!(BigNat::from_digits(&[1], 0), Err(BigNatError::RadixOutOfRange(0)));
    assert_eq!(
        BigNat::from_digits(&[1, 2], 2),
        Err(BigNatError::DigitOutOfRange { digit: 2, radix: 2 })
    );
}

#[test]
fn test_plus() {
    let a = big("123456789123456789");
    assert_eq!(&a + &BigNat::ZERO, a);
    assert_eq!(&BigNat::ZERO + &a, a);
    assert_eq!(big("999999999") + big("1"), big("1000000000"));

    let max = BigNat::from_limbs(&[RADIX - 1, RADIX - 1, RADIX - 1]).unwrap();
    assert_eq!((&max + &*ONE).limbs(), &[1, 0, 0, 0]);
    assert_eq!(
        (&max + &max).to_string(),
        "1999999999999999999999999998"
    );

    let mut c = big("500000000500000000");
    c += big("500000000500000000");
    assert_eq!(c, big("1000000001000000000"));
    c += &BigNat::ZERO;
    assert_eq!(c, big("1000000001000000000"));

    let total: BigNat = (1u32..=100).map(BigNat::from).sum();
    assert_eq!(total, BigNat::from(5050u32));
}

#[test]
fn test_times() {
    let a = big("999999999999999999");
    assert_eq!(&a * &BigNat::from(2u8), big("1999999999999999998"));
    assert_eq!(&a * &*ONE, a);
    assert_eq!(&a * &BigNat::ZERO, BigNat::ZERO);
    assert_eq!(
        (&a * &a).to_string(),
        "999999999999999998000000000000000001"
    );

    let a = big("10000000000000000");
    let b = big("3001");
    let result = big("30010000000000000000");
    assert_eq!(&a * &b, result);
    assert_eq!(&b * &a, result);

    let b = big("30000000000000000");
    assert_eq!(a * b, big("300000000000000000000000000000000"));

    let mut f = BigNat::from(1u8);
    for i in 1u32..=30 {
        f *= BigNat::from(i);
    }
    assert_eq!(f.to_string(), "265252859812191058636308480000000");
    let g: BigNat = (1u32..=30).map(BigNat::from).product();
    assert_eq!(f, g);
}

#[test]
fn test_pow() {
    let two = BigNat::from(2u8);
    assert_eq!(two.pow(100).to_string(), "1267650600228229401496703205376");
    assert_eq!(Pow::pow(&two, 0), *ONE);
    assert_eq!(BigNat::ZERO.pow(0), *ONE);
    assert_eq!(BigNat::ZERO.pow(5), BigNat::ZERO);
    assert_eq!(
        Pow::pow(&big("1000000000"), 3).limbs(),
        &[1, 0, 0, 0]
    );

    // pow borrows, so an owned base stays usable afterwards
    let ten = BigNat::from(10u8);
    let big_power = ten.pow(20);
    assert_eq!(big_power.to_string(), "100000000000000000000");
    assert_eq!(ten.pow(2), BigNat::from(100u8));
    assert_eq!(ten, BigNat::from(10u8));
}

#[test]
fn test_divide_by() {
    assert_eq!(big("1000000000").divide_by(3).unwrap(), big("333333333"));
    assert_eq!(big("1000000000").div_rem_limb(3).unwrap(), (big("333333333"), 1));
    assert_eq!(
        big("1000000000000000000").div_rem_limb(RADIX - 1).unwrap(),
        (big("1000000001"), 1)
    );
    assert_eq!(big("7").divide_by(8).unwrap(), BigNat::ZERO);
    assert_eq!(BigNat::ZERO.divide_by(5).unwrap(), BigNat::ZERO);
    assert_eq!(
        big("10000000000000000000000000000000000") / 1000,
        big("10000000000000000000000000000000")
    );
    assert_eq!(&big("120") / 13, big("9"));

    assert_eq!(big("5").divide_by(0), Err(BigNatError::DivisorOutOfRange(0)));
    assert_eq!(big("5").divide_by(RADIX), Err(BigNatError::DivisorOutOfRange(RADIX)));
}

#[test]
#[should_panic]
fn test_div_by_zero_panics() {
    let _ = big("5") / 0;
}

#[test]
fn test_cmp() {
    assert!(big("1000000000") > big("999999999"));
    assert!(big("123456789123") < big("123456789124"));
    assert!(BigNat::ZERO < *ONE);
    assert_eq!(big("000123").cmp(&big("123")), Ordering::Equal);

    let mut v = vec![big("1000000000000"), BigNat::ZERO, big("999999999999"), big("5")];
    v.sort();
    assert_eq!(v, vec![BigNat::ZERO, big("5"), big("999999999999"), big("1000000000000")]);
    assert_eq!(v.iter().max(), Some(&big("1000000000000")));
}

#[test]
fn test_hash() {
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of(n: &BigNat) -> u64 {
        let mut hasher = DefaultHasher::new();
        n.hash(&mut hasher);
        hasher.finish()
    }

    let a = BigNat::from_limbs(&[0, 0, 5, 7]).unwrap();
    let b = big("5000000007");
    assert_eq!(a.hash_code(), 5 * 13 + 7);
    assert_eq!(hash_of(&a), hash_of(&b));

    let set: HashSet<BigNat> = [a, b, BigNat::ZERO, big("0")].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_to_string() {
    assert_eq!(BigNat::ZERO.to_string(), "0");
    assert_eq!(big("0000000000").to_decimal_string(), "0");
    assert_eq!(BigNat::from_limbs(&[1, 2, 3]).unwrap().to_string(), "1000000002000000003");
    for s in ["9", "999999999", "1000000000", "123456789012345678", "1234567890123456789"] {
        assert_eq!(big(s).to_string(), s);
    }
    assert_eq!(format!("{:>12}", BigNat::from(1_000_000_000u32)), "  1000000000");
    assert_eq!(format!("{:06}", BigNat::from(42u8)), "000042");
}
