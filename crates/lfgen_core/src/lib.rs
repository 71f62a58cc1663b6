//! Provide the shared, target-independent vocabulary used by the lfgen code generators.
//!
//! This crate is intentionally small and dependency-free. It holds the canonical spellings of time units and the
//! [`TimeValue`] type that every target backend renders in its own syntax.
//!
//! ## Notes
//!
//! - No IO, no global state, no backend-specific types.
//! - Target-specific spellings (e.g. the C++ duration suffixes) live in the backends, not here.

pub mod time;

pub use time::{TimeUnit, TimeValue};
