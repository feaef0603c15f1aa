//! Law identifiers.
//!
//! [`LawId`] names every law the registry knows. The law itself is a
//! function in [`crate::laws`]; the identifier carries what reporting and
//! sampling need: a stable name, the equation, and the number of operands.

use core::fmt;

/// Identifier of an algebraic law.
///
/// Single-operation laws apply to the structure's only operation.
/// `First*`/`Second*` laws and the zero/one/negation/reciprocity laws
/// project onto one operation of a two-operation structure; the rest
/// relate both operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LawId {
    /// `(a·b)·c = a·(b·c)`
    Associativity,
    /// `a·b = b·a`
    Commutativity,
    /// `(a·b)·b = a·b`
    Idempotency,
    /// `a·e = a = e·a`
    Identity,
    /// `a·a⁻¹ = e = a⁻¹·a`
    Inverse,
    /// Associativity of the first operation.
    FirstAssociativity,
    /// Associativity of the second operation.
    SecondAssociativity,
    /// Commutativity of the first operation.
    FirstCommutativity,
    /// Commutativity of the second operation.
    SecondCommutativity,
    /// Idempotency of the first operation.
    FirstIdempotency,
    /// Idempotency of the second operation.
    SecondIdempotency,
    /// `a + 0 = a = 0 + a`
    ZeroIdentity,
    /// `a · 1 = a = 1 · a`
    OneIdentity,
    /// `a + (−a) = 0 = (−a) + a`
    Negation,
    /// `a · a⁻¹ = 1 = a⁻¹ · a` for `a ≠ 0`
    Reciprocity,
    /// `a·(b+c) = a·b + a·c`
    Distributivity,
    /// `(b+c)·a = b·a + c·a`
    RightDistributivity,
    /// `a+(b·c) = (a+b)·(a+c)`
    DualDistributivity,
    /// `a ∨ (a ∧ b) = a = a ∧ (a ∨ b)`
    Absorption,
    /// `0·a = 0 = a·0`
    Annihilation,
    /// Heyting implication axioms.
    Implication,
    /// `a ∨ ¬a = 1`
    ExcludedMiddle,
}

impl LawId {
    /// Every law, in declaration order.
    pub const ALL: [LawId; 22] = [
        LawId::Associativity,
        LawId::Commutativity,
        LawId::Idempotency,
        LawId::Identity,
        LawId::Inverse,
        LawId::FirstAssociativity,
        LawId::SecondAssociativity,
        LawId::FirstCommutativity,
        LawId::SecondCommutativity,
        LawId::FirstIdempotency,
        LawId::SecondIdempotency,
        LawId::ZeroIdentity,
        LawId::OneIdentity,
        LawId::Negation,
        LawId::Reciprocity,
        LawId::Distributivity,
        LawId::RightDistributivity,
        LawId::DualDistributivity,
        LawId::Absorption,
        LawId::Annihilation,
        LawId::Implication,
        LawId::ExcludedMiddle,
    ];

    /// Number of operands the law quantifies over.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            LawId::Identity
            | LawId::Inverse
            | LawId::ZeroIdentity
            | LawId::OneIdentity
            | LawId::Negation
            | LawId::Reciprocity
            | LawId::Annihilation
            | LawId::ExcludedMiddle => 1,
            LawId::Commutativity
            | LawId::Idempotency
            | LawId::FirstCommutativity
            | LawId::SecondCommutativity
            | LawId::FirstIdempotency
            | LawId::SecondIdempotency
            | LawId::Absorption => 2,
            LawId::Associativity
            | LawId::FirstAssociativity
            | LawId::SecondAssociativity
            | LawId::Distributivity
            | LawId::RightDistributivity
            | LawId::DualDistributivity
            | LawId::Implication => 3,
        }
    }

    /// Stable, human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            LawId::Associativity => "associativity",
            LawId::Commutativity => "commutativity",
            LawId::Idempotency => "idempotency",
            LawId::Identity => "identity",
            LawId::Inverse => "inverse",
            LawId::FirstAssociativity => "first associativity",
            LawId::SecondAssociativity => "second associativity",
            LawId::FirstCommutativity => "first commutativity",
            LawId::SecondCommutativity => "second commutativity",
            LawId::FirstIdempotency => "first idempotency",
            LawId::SecondIdempotency => "second idempotency",
            LawId::ZeroIdentity => "zero identity",
            LawId::OneIdentity => "one identity",
            LawId::Negation => "negation",
            LawId::Reciprocity => "reciprocity",
            LawId::Distributivity => "distributivity",
            LawId::RightDistributivity => "right distributivity",
            LawId::DualDistributivity => "dual distributivity",
            LawId::Absorption => "absorption",
            LawId::Annihilation => "annihilation",
            LawId::Implication => "implication",
            LawId::ExcludedMiddle => "excluded middle",
        }
    }

    /// The equation the law asserts, in conventional notation.
    #[must_use]
    pub const fn statement(self) -> &'static str {
        match self {
            LawId::Associativity | LawId::FirstAssociativity | LawId::SecondAssociativity => {
                "(a·b)·c = a·(b·c)"
            }
            LawId::Commutativity | LawId::FirstCommutativity | LawId::SecondCommutativity => {
                "a·b = b·a"
            }
            LawId::Idempotency | LawId::FirstIdempotency | LawId::SecondIdempotency => {
                "(a·b)·b = a·b"
            }
            LawId::Identity => "a·e = a = e·a",
            LawId::Inverse => "a·a⁻¹ = e = a⁻¹·a",
            LawId::ZeroIdentity => "a+0 = a = 0+a",
            LawId::OneIdentity => "a·1 = a = 1·a",
            LawId::Negation => "a+(−a) = 0 = (−a)+a",
            LawId::Reciprocity => "a·a⁻¹ = 1 = a⁻¹·a (a ≠ 0)",
            LawId::Distributivity => "a·(b+c) = a·b + a·c",
            LawId::RightDistributivity => "(b+c)·a = b·a + c·a",
            LawId::DualDistributivity => "a+(b·c) = (a+b)·(a+c)",
            LawId::Absorption => "a∨(a∧b) = a = a∧(a∨b)",
            LawId::Annihilation => "0·a = 0 = a·0",
            LawId::Implication => {
                "a→a = 1, a∧(a→b) = a∧b, b∧(a→b) = b, a→(b∧c) = (a→b)∧(a→c)"
            }
            LawId::ExcludedMiddle => "a∨(a→0) = 1",
        }
    }

    /// Returns true if the law relates both operations of a structure.
    #[must_use]
    pub const fn is_cross_operation(self) -> bool {
        matches!(
            self,
            LawId::Distributivity
                | LawId::RightDistributivity
                | LawId::DualDistributivity
                | LawId::Absorption
                | LawId::Annihilation
                | LawId::Reciprocity
                | LawId::Implication
                | LawId::ExcludedMiddle
        )
    }
}

impl fmt::Display for LawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
