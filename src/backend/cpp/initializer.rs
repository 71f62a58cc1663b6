//! Initializer rendering for C++.
//!
//! Two forms are needed:
//!
//! - [`CppTypes::standalone_initializer`]: the value of a variable on its own, e.g. `std::vector<int>{1, 2}`;
//! - [`CppTypes::initializer_list`]: what follows a member name in a constructor's member-initializer list,
//!   e.g. `{1, 2}` or `(42)`.
//!
//! Both descend into aggregates the same way, rendering each item against the component type of the aggregate's
//! type.
//!
//! ## Notes
//! - An assignment whose right-hand side is a brace aggregate is flattened by one level in the list form. A brace
//!   aggregate nested deeper is rendered as an ordinary brace expression.

use super::CppTypes;
use crate::backend::scope::ParamScope;
use crate::backend::target_types::TargetTypes;
use crate::model::{Expr, InferredType, Initializer};

const BRACES: (&str, &str) = ("{", "}");
const PARENS: (&str, &str) = ("(", ")");

fn delimiters(init: &Initializer) -> (&'static str, &'static str) {
    if init.is_braces() { BRACES } else { PARENS }
}

impl<S: ParamScope> CppTypes<S> {
    /// Render the initial value of a standalone variable.
    ///
    /// A single expression (which includes every assignment) stands alone. Several expressions are a constructor
    /// call on the declared type, with braces or parentheses as written.
    pub fn standalone_initializer(&self, init: Option<&Initializer>, ty: Option<&InferredType>) -> String {
        let Some(init) = init else {
            return self.missing_expr(ty);
        };
        tracing::trace!(style = ?init.style(), exprs = init.exprs().len(), "standalone initializer");

        if let Some(expr) = init.single() {
            return self.target_expr(expr, ty);
        }
        let mut out = self.target_type(ty);
        out.push_str(&self.aggregate(init.exprs(), ty, delimiters(init)));
        out
    }

    /// Render the initializer that follows a member name in a constructor's member-initializer list.
    pub fn initializer_list(&self, init: Option<&Initializer>, ty: Option<&InferredType>) -> String {
        let Some(init) = init else {
            return self.missing_expr(ty);
        };
        tracing::trace!(style = ?init.style(), exprs = init.exprs().len(), "initializer list");

        match (init.is_assign(), init.single()) {
            (true, Some(Expr::Brace(b))) => self.aggregate(&b.items, ty, BRACES),
            (true, Some(expr)) => format!("({})", self.target_expr(expr, ty)),
            _ => self.aggregate(init.exprs(), ty, delimiters(init)),
        }
    }

    /// Render `exprs` against the component type of `ty`, joined with `, ` inside the delimiter pair.
    fn aggregate(&self, exprs: &[Expr], ty: Option<&InferredType>, (open, close): (&str, &str)) -> String {
        let component = ty.and_then(InferredType::component_type);
        let items: Vec<_> = exprs.iter().map(|e| self.target_expr(e, component)).collect();
        format!("{}{}{}", open, items.join(", "), close)
    }
}
