//! Initializers, expressions and parameters.

use std::rc::Rc;

use lfgen_core::TimeValue;

use super::types::InferredType;

/// A declared parameter that expressions may refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    /// Explicitly declared type, if any.
    pub declared_type: Option<InferredType>,
    pub init: Option<Initializer>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: None,
            init: None,
        }
    }

    pub fn with_type(mut self, ty: InferredType) -> Self {
        self.declared_type = Some(ty);
        self
    }

    pub fn with_init(mut self, init: Initializer) -> Self {
        self.init = Some(init);
        self
    }

    /// The parameter's type: the declared one, or whatever its initializer implies.
    pub fn inferred_type(&self) -> InferredType {
        InferredType::infer(self.declared_type.as_ref(), self.init.as_ref())
    }
}

/// Reference to a declared parameter.
///
/// The handle is shared and read-only; where the reference is rendered (local or enclosing scope) is decided by
/// the caller, not stored here.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamRef {
    pub parameter: Rc<Parameter>,
}

impl ParamRef {
    pub fn new(parameter: Rc<Parameter>) -> Self {
        Self { parameter }
    }

    pub fn name(&self) -> &str {
        &self.parameter.name
    }
}

/// A `{a, b, ...}` aggregate appearing as an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct BraceExpr {
    pub items: Vec<Expr>,
}

/// Expression appearing in an initializer.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric, string or boolean literal, kept as written.
    Literal(String),
    /// Time value with a unit, e.g. `100 msec`.
    Time(TimeValue),
    /// Verbatim target-language code.
    Code(String),
    ParamRef(ParamRef),
    Brace(BraceExpr),
}

impl Expr {
    pub fn literal(text: impl Into<String>) -> Self {
        Expr::Literal(text.into())
    }

    pub fn code(text: impl Into<String>) -> Self {
        Expr::Code(text.into())
    }

    pub fn time(time: TimeValue) -> Self {
        Expr::Time(time)
    }

    pub fn param(parameter: &Rc<Parameter>) -> Self {
        Expr::ParamRef(ParamRef::new(Rc::clone(parameter)))
    }

    pub fn brace(items: Vec<Expr>) -> Self {
        Expr::Brace(BraceExpr { items })
    }

    /// Whether this is a literal (or verbatim code) integer zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Expr::Literal(text) | Expr::Code(text) => text.trim().parse::<i64>().is_ok_and(|n| n == 0),
            _ => false,
        }
    }

    /// Whether this expression denotes a time: a time value, a literal zero, or a reference to a time parameter.
    pub fn is_valid_time(&self) -> bool {
        match self {
            Expr::Time(_) => true,
            Expr::ParamRef(r) => r.parameter.inferred_type().is_time(),
            other => other.is_zero(),
        }
    }
}

/// Surface syntax an initializer was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStyle {
    /// `x = expr`
    Assign,
    /// `x {a, b}`
    Braces,
    /// `x (a, b)`
    Parens,
}

/// How a declared variable obtains its initial value.
///
/// ## Notes
/// - `exprs` is never empty.
/// - An [`InitStyle::Assign`] initializer holds exactly one expression, which may itself be a [`BraceExpr`].
/// - Both invariants are checked by the semantic phase that builds initializers; constructors here only
///   `debug_assert!` them.
#[derive(Debug, Clone, PartialEq)]
pub struct Initializer {
    exprs: Vec<Expr>,
    style: InitStyle,
}

impl Initializer {
    pub fn new(style: InitStyle, exprs: Vec<Expr>) -> Self {
        debug_assert!(!exprs.is_empty(), "initializer without expressions");
        debug_assert!(
            style != InitStyle::Assign || exprs.len() == 1,
            "assignment initializer with {} expressions",
            exprs.len()
        );
        Self { exprs, style }
    }

    pub fn assign(expr: Expr) -> Self {
        Self::new(InitStyle::Assign, vec![expr])
    }

    pub fn braces(exprs: Vec<Expr>) -> Self {
        Self::new(InitStyle::Braces, exprs)
    }

    pub fn parens(exprs: Vec<Expr>) -> Self {
        Self::new(InitStyle::Parens, exprs)
    }

    pub fn exprs(&self) -> &[Expr] {
        &self.exprs
    }

    pub fn style(&self) -> InitStyle {
        self.style
    }

    pub fn is_assign(&self) -> bool {
        self.style == InitStyle::Assign
    }

    pub fn is_braces(&self) -> bool {
        self.style == InitStyle::Braces
    }

    /// The only expression, if there is exactly one.
    pub fn single(&self) -> Option<&Expr> {
        match self.exprs.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lfgen_core::TimeUnit;

    #[test]
    fn literal_zero_is_zero() {
        assert!(Expr::literal("0").is_zero());
        assert!(Expr::code(" 0 ").is_zero());
        assert!(!Expr::literal("0.0").is_zero());
        assert!(!Expr::literal("10").is_zero());
        assert!(!Expr::time(TimeValue::new(0, TimeUnit::Milli)).is_zero());
    }

    #[test]
    fn valid_times() {
        assert!(Expr::time(TimeValue::new(5, TimeUnit::Second)).is_valid_time());
        assert!(Expr::literal("0").is_valid_time());
        assert!(!Expr::literal("5").is_valid_time());
        assert!(!Expr::brace(vec![Expr::literal("0")]).is_valid_time());
    }

    #[test]
    fn reference_to_time_parameter_is_valid_time() {
        let period = Rc::new(
            Parameter::new("period").with_init(Initializer::assign(Expr::time(TimeValue::new(1, TimeUnit::Second)))),
        );
        let count = Rc::new(Parameter::new("count").with_type(InferredType::named("int")));
        assert!(Expr::param(&period).is_valid_time());
        assert!(!Expr::param(&count).is_valid_time());
    }

    #[test]
    fn style_flags() {
        let a = Initializer::assign(Expr::literal("1"));
        assert!(a.is_assign() && !a.is_braces());
        let b = Initializer::braces(vec![Expr::literal("1"), Expr::literal("2")]);
        assert!(b.is_braces() && !b.is_assign());
        let p = Initializer::parens(vec![Expr::literal("1")]);
        assert!(!p.is_braces() && !p.is_assign());
    }

    #[test]
    fn single_only_for_one_expr() {
        assert!(Initializer::parens(vec![Expr::literal("1")]).single().is_some());
        assert!(Initializer::parens(vec![Expr::literal("1"), Expr::literal("2")]).single().is_none());
    }

    #[test]
    #[should_panic(expected = "assignment initializer")]
    #[cfg(debug_assertions)]
    fn assignment_with_several_exprs_is_rejected_in_debug() {
        let _ = Initializer::new(InitStyle::Assign, vec![Expr::literal("1"), Expr::literal("2")]);
    }
}
