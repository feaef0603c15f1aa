//! Law functions.
//!
//! Each law is a generic function over the weakest capability bound that
//! makes it meaningful, taking the structure, an equivalence and the
//! operands, and returning whether the equation holds. Registry entries in
//! [`crate::structure`] refer to these functions directly; listing a law
//! for a kind that lacks the capability fails to type-check.

pub mod double;
pub mod single;
