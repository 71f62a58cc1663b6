//! lfgen target backends
//!
//! This module turns the target-independent declaration model into target-language source fragments.
//!
//! ## Module Organization
//!
//! - `target_types.rs` - [`TargetTypes`]: per-target spellings plus shared type/expression rendering
//! - `scope.rs` - [`ParamScope`] strategies for rendering parameter references
//! - `cpp/` - C++ (`reactor-cpp`) backend
//!   - `mod.rs` - [`CppTypes`] and its [`TargetTypes`] implementation
//!   - `config.rs` - [`CppConfig`]
//!   - `time.rs` - duration literal suffixes
//!   - `initializer.rs` - standalone and member-initializer-list rendering

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod cpp;
pub mod scope;
pub mod target_types;

pub use cpp::{CppConfig, CppTypes};
pub use scope::{EnclosingScope, LocalScope, ParamScope};
pub use target_types::TargetTypes;
