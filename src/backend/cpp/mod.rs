//! Render types and initializers for the C++ target.
//!
//! [`CppTypes`] implements [`TargetTypes`] for C++ on top of the `reactor-cpp` runtime and adds the two
//! initializer forms the C++ generator needs (see [`initializer`]).
//!
//! ## Notes
//! - The renderer is parameterised by a [`ParamScope`]: `CppTypes<LocalScope>` for code on the declaring
//!   instance, `CppTypes<EnclosingScope>` (see [`CppTypes::outer`]) for code generated into the enclosing class.
//! - Rendering is pure; the same input always yields the same string.

mod config;
mod initializer;
mod time;

pub use config::CppConfig;
pub use time::cpp_unit;

use lfgen_core::TimeValue;

use super::scope::{EnclosingScope, LocalScope, ParamScope};
use super::target_types::TargetTypes;
use crate::model::{InferredType, Initializer, ParamRef};

/// C++ implementation of [`TargetTypes`].
#[derive(Debug, Clone, Default)]
pub struct CppTypes<S = LocalScope> {
    config: CppConfig,
    scope: S,
}

impl CppTypes<LocalScope> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CppConfig) -> Self {
        Self {
            config,
            scope: LocalScope,
        }
    }
}

impl<S: ParamScope> CppTypes<S> {
    pub fn config(&self) -> &CppConfig {
        &self.config
    }

    pub fn scope(&self) -> &S {
        &self.scope
    }

    /// Same renderer, resolving parameter references through `scope`.
    pub fn with_scope<T: ParamScope>(self, scope: T) -> CppTypes<T> {
        CppTypes {
            config: self.config,
            scope,
        }
    }

    /// Renderer for code generated into the enclosing class, where parameters are reached through the
    /// configured accessor.
    pub fn outer(&self) -> CppTypes<EnclosingScope> {
        CppTypes {
            scope: EnclosingScope::new(self.config.enclosing_accessor.clone()),
            config: self.config.clone(),
        }
    }
}

impl<S: ParamScope> TargetTypes for CppTypes<S> {
    fn supports_generics(&self) -> bool {
        true
    }

    fn undefined_type(&self) -> String {
        "void".to_string()
    }

    fn time_type(&self) -> String {
        self.config.duration_type.clone()
    }

    fn tag_type(&self) -> String {
        self.config.tag_type.clone()
    }

    fn fixed_size_list_type(&self, component: &str, size: usize) -> String {
        format!("std::array<{}, {}>", component, size)
    }

    fn variable_size_list_type(&self, component: &str) -> String {
        format!("std::vector<{}>", component)
    }

    fn time_expr(&self, value: TimeValue) -> String {
        if value.is_zero() {
            format!("{}::zero()", self.config.duration_type)
        } else {
            format!("{}{}", value.magnitude, cpp_unit(value.unit))
        }
    }

    /// `T{}` for a known type; a bare `{}` when nothing is known about the type.
    fn missing_expr(&self, ty: Option<&InferredType>) -> String {
        match ty {
            Some(t) if !t.is_undefined() => format!("{}{{}}", self.target_type(Some(t))),
            _ => "{}".to_string(),
        }
    }

    fn param_ref(&self, r: &ParamRef, _ty: Option<&InferredType>) -> String {
        self.scope.param_ref(r)
    }
}

impl<S: ParamScope> CppTypes<S> {
    /// Initializer of a standalone variable (see [`CppTypes::standalone_initializer`]).
    pub fn target_initializer(&self, init: Option<&Initializer>, ty: Option<&InferredType>) -> String {
        self.standalone_initializer(init, ty)
    }
}
