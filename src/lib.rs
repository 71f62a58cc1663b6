#![forbid(unsafe_code)]
//! lfgen: target-expression synthesis for reactor programs
//!
//! Given the declared or inferred type of a parameter, state variable or member and its initializer, lfgen renders
//! the target-language source text for it: type names, duration literals, constructor-call and brace
//! initializers, and parameter references from either the declaring instance or an enclosing one.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Model invariants**: initializers that are empty, or assignments with several expressions, are rejected by
//!   [`document`] and `debug_assert!`ed by the model constructors.

pub mod backend;
pub mod cli;
pub mod document;
pub mod model;

pub use backend::{CppConfig, CppTypes, EnclosingScope, LocalScope, ParamScope, TargetTypes};
pub use document::{Document, DocumentError};
pub use model::{Expr, InferredType, Initializer, Parameter};
