//! Target-independent declaration model.
//!
//! These are the read-only inputs the backends render: inferred types, initializers and their expressions,
//! and the parameters that expressions may refer to. Everything here is produced by an earlier semantic phase
//! (or by [`crate::document`]) and is never mutated afterwards.

pub mod expr;
pub mod types;

pub use expr::{BraceExpr, Expr, InitStyle, Initializer, ParamRef, Parameter};
pub use types::InferredType;
