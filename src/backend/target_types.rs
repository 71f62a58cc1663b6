//! Target-agnostic rendering of types and leaf expressions.
//!
//! [`TargetTypes`] is implemented once per target language. Implementors supply the target's spellings
//! (undefined type, duration type, list containers, time literals, missing values); the provided methods turn
//! those into full type names and expressions.
//!
//! ## See also
//! - [`crate::backend::cpp`]: the C++ implementation and its initializer rendering

use std::borrow::Cow;

use lfgen_core::TimeValue;

use crate::model::{BraceExpr, Expr, InferredType, ParamRef};

/// Per-target spellings of types and expressions.
pub trait TargetTypes {
    /// Whether the target has generic/template types.
    fn supports_generics(&self) -> bool;

    /// Spelling of a type nothing could be inferred for.
    fn undefined_type(&self) -> String;

    /// Spelling of the builtin `time` type.
    fn time_type(&self) -> String;

    /// Spelling of a logical tag (time + microstep).
    fn tag_type(&self) -> String;

    fn fixed_size_list_type(&self, component: &str, size: usize) -> String;

    fn variable_size_list_type(&self, component: &str) -> String;

    /// Duration literal for a time value.
    fn time_expr(&self, value: TimeValue) -> String;

    /// Value used when a declaration has no initializer.
    fn missing_expr(&self, ty: Option<&InferredType>) -> String;

    /// Render a parameter reference. Defaults to the bare parameter name.
    fn param_ref(&self, r: &ParamRef, _ty: Option<&InferredType>) -> String {
        r.name().to_string()
    }

    /// Render an inferred type (absent means undefined).
    fn target_type(&self, ty: Option<&InferredType>) -> String {
        match ty {
            None | Some(InferredType::Undefined) => self.undefined_type(),
            Some(InferredType::Time) => self.time_type(),
            Some(InferredType::Named(name)) => name.clone(),
            Some(InferredType::FixedList(component, size)) => {
                let c = self.target_type(Some(component.as_ref()));
                self.fixed_size_list_type(&c, *size)
            }
            Some(InferredType::VariableList(component)) => {
                let c = self.target_type(Some(component.as_ref()));
                self.variable_size_list_type(&c)
            }
        }
    }

    /// Render a single expression against the type it initializes.
    fn target_expr(&self, expr: &Expr, ty: Option<&InferredType>) -> String {
        if expr.is_zero() && ty.is_some_and(InferredType::is_time) {
            return self.time_expr(TimeValue::ZERO);
        }
        match expr {
            Expr::ParamRef(r) => self.param_ref(r, ty),
            Expr::Time(value) => self.time_expr(*value),
            Expr::Literal(text) => add_zero_to_leading_dot(text).into_owned(),
            Expr::Code(code) => code.clone(),
            Expr::Brace(b) => self.brace_expr(b, ty),
        }
    }

    /// Render `{a, b, ...}`; items are rendered against the component type.
    fn brace_expr(&self, b: &BraceExpr, ty: Option<&InferredType>) -> String {
        let component = ty.and_then(InferredType::component_type);
        let items: Vec<_> = b.items.iter().map(|e| self.target_expr(e, component)).collect();
        format!("{{{}}}", items.join(", "))
    }
}

/// Prefix a zero to a float literal written with a leading dot (`.5` becomes `0.5`, `-.5e3` becomes `-0.5e3`).
///
/// Anything that is not such a literal is returned unchanged.
pub fn add_zero_to_leading_dot(literal: &str) -> Cow<'_, str> {
    let (sign, rest) = match literal.chars().next() {
        Some('+' | '-') => literal.split_at(1),
        _ => ("", literal),
    };
    let Some(digits) = rest.strip_prefix('.') else {
        return Cow::Borrowed(literal);
    };
    let starts_with_digit = digits.starts_with(|c: char| c.is_ascii_digit());
    let tail_ok = digits
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, 'e' | 'E' | '+' | '-'));
    if starts_with_digit && tail_ok {
        Cow::Owned(format!("{}0.{}", sign, digits))
    } else {
        Cow::Borrowed(literal)
    }
}
