//! Scopes that parameter references are rendered from.
//!
//! Generated code reaches a parameter either directly (code living on the instance that declares it) or through a
//! handle to that instance (code generated into an enclosing class). The scope is injected into the renderer so
//! the same initializer rendering works in both places.

use crate::model::ParamRef;

/// Name of the handle to the enclosing instance in generated C++ code.
pub const ENCLOSING_INSTANCE_ACCESSOR: &str = "__lf_inner";

/// Strategy for rendering a parameter reference.
pub trait ParamScope {
    fn param_ref(&self, r: &ParamRef) -> String;
}

/// Parameters are in scope by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalScope;

impl ParamScope for LocalScope {
    fn param_ref(&self, r: &ParamRef) -> String {
        r.name().to_string()
    }
}

/// Parameters are reached through the enclosing-instance accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnclosingScope {
    accessor: String,
}

impl EnclosingScope {
    pub fn new(accessor: impl Into<String>) -> Self {
        Self {
            accessor: accessor.into(),
        }
    }

    pub fn accessor(&self) -> &str {
        &self.accessor
    }
}

impl Default for EnclosingScope {
    fn default() -> Self {
        Self::new(ENCLOSING_INSTANCE_ACCESSOR)
    }
}

impl ParamScope for EnclosingScope {
    fn param_ref(&self, r: &ParamRef) -> String {
        format!("{}.{}", self.accessor, r.name())
    }
}
