/// The base of every limb.
pub const RADIX: u32 = 1_000_000_000;

/// Number of decimal digits held by one limb.
pub const RADIX_DECIMAL_DIGITS: usize = 9;

/// Smallest radix accepted for digit text.
pub const MIN_RADIX: u32 = 2;

/// Largest radix accepted for digit text; digits run `0-9` then `a-z`.
pub const MAX_RADIX: u32 = 36;

/// Largest value served out of `POS_CACHE`.
pub const MAX_CONSTANT: usize = 16;
