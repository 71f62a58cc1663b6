//! Inferred types of declarations.

use std::fmt;

use super::expr::{Expr, Initializer};

/// Type of a declaration as resolved by the semantic phase.
///
/// List variants carry their component type, which is what sub-expressions of an aggregate are rendered against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InferredType {
    /// Nothing could be inferred.
    #[default]
    Undefined,
    /// The builtin `time` type.
    Time,
    /// Any other type, kept as written (e.g. `int`, `std::string`).
    Named(String),
    /// `T[n]`
    FixedList(Box<InferredType>, usize),
    /// `T[]`
    VariableList(Box<InferredType>),
}

impl InferredType {
    pub fn named(name: impl Into<String>) -> Self {
        InferredType::Named(name.into())
    }

    pub fn fixed_list(component: InferredType, size: usize) -> Self {
        InferredType::FixedList(Box::new(component), size)
    }

    pub fn variable_list(component: InferredType) -> Self {
        InferredType::VariableList(Box::new(component))
    }

    /// Variable-size list of times, the only list type inferred without a declaration.
    pub fn time_list() -> Self {
        Self::variable_list(InferredType::Time)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, InferredType::Undefined)
    }

    pub fn is_time(&self) -> bool {
        matches!(self, InferredType::Time)
    }

    pub fn is_list(&self) -> bool {
        self.component_type().is_some()
    }

    /// Element type of a list; `None` for scalars.
    pub fn component_type(&self) -> Option<&InferredType> {
        match self {
            InferredType::FixedList(c, _) | InferredType::VariableList(c) => Some(c.as_ref()),
            _ => None,
        }
    }

    /// Innermost non-list type name, `""` when undefined.
    pub fn base_type_name(&self) -> &str {
        match self {
            InferredType::Undefined => "",
            InferredType::Time => "time",
            InferredType::Named(name) => name,
            InferredType::FixedList(c, _) | InferredType::VariableList(c) => c.base_type_name(),
        }
    }

    /// Infer the type of a declaration.
    ///
    /// An explicit type always wins. Without one, only `time` and a variable-size list of `time` can be inferred:
    /// - a single parameter reference takes the referenced parameter's type;
    /// - a single non-zero time value infers `time`;
    /// - several values that are all valid times, at least one of them non-zero, infer a time list.
    ///
    /// Anything else is [`InferredType::Undefined`].
    pub fn infer(declared: Option<&InferredType>, init: Option<&Initializer>) -> InferredType {
        if let Some(ty) = declared {
            return ty.clone();
        }
        let Some(init) = init else {
            return InferredType::Undefined;
        };

        match init.exprs() {
            [Expr::ParamRef(r)] => r.parameter.inferred_type(),
            [only] if only.is_valid_time() && !only.is_zero() => InferredType::Time,
            [_] | [] => InferredType::Undefined,
            many => {
                let all_valid = many.iter().all(Expr::is_valid_time);
                let any_non_zero = many.iter().any(|e| !e.is_zero());
                if all_valid && any_non_zero {
                    InferredType::time_list()
                } else {
                    InferredType::Undefined
                }
            }
        }
    }
}

impl fmt::Display for InferredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferredType::Undefined => write!(f, "undefined"),
            InferredType::Time => write!(f, "time"),
            InferredType::Named(name) => write!(f, "{}", name),
            InferredType::FixedList(c, n) => write!(f, "{}[{}]", c, n),
            InferredType::VariableList(c) => write!(f, "{}[]", c),
        }
    }
}
