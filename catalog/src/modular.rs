//! Integers modulo 256 and the prime field GF(5).
//!
//! `z256` is byte arithmetic with wrapping. Only odd bytes are units, so it
//! is a commutative ring and not a field. GF(5) is stored as `u8` residues
//! in `0..5`; other bytes are reduced mod 5 before use.

use algebra_core::{AbelianGroup, CommutativeMonoid, CommutativeRing, Field, Instance};
use proptest::prelude::*;

/// Order of GF(5).
pub const P: u8 = 5;

/// Every residue mod 5, for exhaustive checks.
pub const GF5: [u8; 5] = [0, 1, 2, 3, 4];

/// Multiplicative inverse in GF(5).
///
/// | a | inv(a) |
/// |---|--------|
/// | 1 | 1      |
/// | 2 | 3      |
/// | 3 | 2      |
/// | 4 | 4      |
///
/// Zero has no inverse; it maps to itself.
pub const fn inv5(a: u8) -> u8 {
    match a {
        1 => 1,
        2 => 3,
        3 => 2,
        4 => 4,
        _ => 0,
    }
}

/// Multiplicative inverse mod 256, if `a` is odd.
///
/// Newton's iteration `x ← x(2 - ax)` doubles the number of correct low
/// bits each step; starting from `x = a` three steps cover all eight.
///
/// ```
/// use algebra_catalog::modular::unit_inverse;
///
/// assert_eq!(unit_inverse(3), Some(171));
/// assert_eq!(unit_inverse(2), None);
/// ```
pub const fn unit_inverse(a: u8) -> Option<u8> {
    if a % 2 == 0 {
        return None;
    }
    let mut x = a;
    x = x.wrapping_mul(2u8.wrapping_sub(a.wrapping_mul(x)));
    x = x.wrapping_mul(2u8.wrapping_sub(a.wrapping_mul(x)));
    x = x.wrapping_mul(2u8.wrapping_sub(a.wrapping_mul(x)));
    Some(x)
}

/// `(u8, +, ×)` modulo 256.
pub fn z256() -> Instance<CommutativeRing<u8>> {
    Instance::new(
        "z256",
        CommutativeRing::new(
            AbelianGroup::new(|a: &u8, b: &u8| a.wrapping_add(*b), 0, |a: &u8| a.wrapping_neg()),
            CommutativeMonoid::new(|a: &u8, b: &u8| a.wrapping_mul(*b), 1),
        ),
    )
}

/// GF(5).
pub fn gf5() -> Instance<Field<u8>> {
    Instance::new(
        "gf5",
        Field::new(
            AbelianGroup::new(|a: &u8, b: &u8| (a % P + b % P) % P, 0, |a: &u8| (P - a % P) % P),
            AbelianGroup::new(|a: &u8, b: &u8| (a % P) * (b % P) % P, 1, |a: &u8| inv5(a % P)),
        ),
    )
}

/// Residues in `0..5`.
pub fn residues() -> impl Strategy<Value = u8> {
    0..P
}
