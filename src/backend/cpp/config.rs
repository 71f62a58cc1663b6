//! Configuration for C++ rendering.
//!
//! The defaults match the `reactor-cpp` runtime and the class layout the C++ generator emits.

use crate::backend::scope::ENCLOSING_INSTANCE_ACCESSOR;

/// C++ rendering configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CppConfig {
    /// Handle to the enclosing instance used by outer-scope parameter references
    pub enclosing_accessor: String,
    /// Spelling of the `time` type
    pub duration_type: String,
    /// Spelling of a logical tag
    pub tag_type: String,
}

impl Default for CppConfig {
    fn default() -> Self {
        Self {
            enclosing_accessor: ENCLOSING_INSTANCE_ACCESSOR.to_string(),
            duration_type: "reactor::Duration".to_string(),
            tag_type: "reactor::Tag".to_string(),
        }
    }
}

impl CppConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the enclosing-instance accessor
    pub fn with_enclosing_accessor(mut self, accessor: impl Into<String>) -> Self {
        self.enclosing_accessor = accessor.into();
        self
    }

    /// Set the duration type
    pub fn with_duration_type(mut self, ty: impl Into<String>) -> Self {
        self.duration_type = ty.into();
        self
    }

    /// Set the tag type
    pub fn with_tag_type(mut self, ty: impl Into<String>) -> Self {
        self.tag_type = ty.into();
        self
    }
}
