//! Declaration documents
//!
//! A declaration document is a JSON description of a set of parameters and one declaration to render. It is the
//! boundary where untrusted input enters the model, so the model invariants (non-empty initializers,
//! single-expression assignments, resolvable parameter references) are checked here and reported as
//! [`DocumentError`]s.
//!
//! ## Format
//!
//! ```json
//! {
//!   "parameters": [
//!     { "name": "period", "type": "time", "init": { "style": "assign", "exprs": [{ "time": [100, "msec"] }] } }
//!   ],
//!   "declaration": {
//!     "name": "offsets",
//!     "type": { "list": "time", "size": 2 },
//!     "init": { "style": "braces", "exprs": [{ "param": "period" }, { "literal": "0" }] }
//!   }
//! }
//! ```
//!
//! - Types are `"time"`, any other type name, or `{ "list": <type>, "size": n }` (`size` omitted for a
//!   variable-size list).
//! - Expressions are `{ "literal": "..." }`, `{ "code": "..." }`, `{ "time": [magnitude, "unit"] }`,
//!   `{ "param": "name" }` or `{ "brace": [ ...expressions ] }`.
//! - A parameter may only refer to parameters listed before it.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;

use lfgen_core::{TimeValue, time};

use crate::model::{Expr, InferredType, InitStyle, Initializer, Parameter};

/// Errors that occur while loading a declaration document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid declaration document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown parameter `{name}` referenced by `{owner}`")]
    UnknownParameter { name: String, owner: String },

    #[error("parameter `{0}` is declared twice")]
    DuplicateParameter(String),

    #[error("unknown time unit `{unit}` in `{owner}`")]
    UnknownTimeUnit { unit: String, owner: String },

    #[error("initializer of `{0}` has no expressions")]
    EmptyInitializer(String),

    #[error("assignment to `{owner}` has {count} expressions, expected exactly one")]
    AssignArity { owner: String, count: usize },
}

/// A loaded declaration document.
#[derive(Debug, Clone)]
pub struct Document {
    pub parameters: Vec<Rc<Parameter>>,
    pub declaration: Declaration,
}

/// The declaration a document asks to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: String,
    pub declared_type: Option<InferredType>,
    pub init: Option<Initializer>,
}

impl Declaration {
    pub fn inferred_type(&self) -> InferredType {
        InferredType::infer(self.declared_type.as_ref(), self.init.as_ref())
    }
}

/// Read and load a declaration document from disk.
pub fn load_document(path: &Path) -> Result<Document, DocumentError> {
    let source = fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&source)
}

/// Load a declaration document from JSON text.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_document(source: &str) -> Result<Document, DocumentError> {
    let raw: RawDocument = serde_json::from_str(source)?;

    let mut table = ParamTable::default();
    for p in raw.parameters {
        let declared_type = p.ty.map(RawType::into_type);
        let init = p.init.map(|i| table.initializer(i, &p.name)).transpose()?;
        table.declare(Parameter {
            name: p.name,
            declared_type,
            init,
        })?;
    }

    let decl = raw.declaration;
    let init = decl.init.map(|i| table.initializer(i, &decl.name)).transpose()?;
    let declaration = Declaration {
        name: decl.name,
        declared_type: decl.ty.map(RawType::into_type),
        init,
    };

    tracing::debug!(
        parameters = table.order.len(),
        declaration = %declaration.name,
        "loaded declaration document"
    );
    Ok(Document {
        parameters: table.order,
        declaration,
    })
}

/// Parameters declared so far, in declaration order.
#[derive(Default)]
struct ParamTable {
    order: Vec<Rc<Parameter>>,
    by_name: HashMap<String, Rc<Parameter>>,
}

impl ParamTable {
    fn declare(&mut self, parameter: Parameter) -> Result<(), DocumentError> {
        if self.by_name.contains_key(&parameter.name) {
            return Err(DocumentError::DuplicateParameter(parameter.name));
        }
        let parameter = Rc::new(parameter);
        self.by_name.insert(parameter.name.clone(), Rc::clone(&parameter));
        self.order.push(parameter);
        Ok(())
    }

    fn initializer(&self, raw: RawInit, owner: &str) -> Result<Initializer, DocumentError> {
        if raw.exprs.is_empty() {
            return Err(DocumentError::EmptyInitializer(owner.to_string()));
        }
        let style: InitStyle = raw.style.into();
        if style == InitStyle::Assign && raw.exprs.len() != 1 {
            return Err(DocumentError::AssignArity {
                owner: owner.to_string(),
                count: raw.exprs.len(),
            });
        }
        let exprs = raw
            .exprs
            .into_iter()
            .map(|e| self.expr(e, owner))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Initializer::new(style, exprs))
    }

    fn expr(&self, raw: RawExpr, owner: &str) -> Result<Expr, DocumentError> {
        Ok(match raw {
            RawExpr::Literal(text) => Expr::Literal(text),
            RawExpr::Code(code) => Expr::Code(code),
            RawExpr::Time(magnitude, unit) => {
                let unit = time::from_str(&unit).ok_or_else(|| DocumentError::UnknownTimeUnit {
                    unit,
                    owner: owner.to_string(),
                })?;
                Expr::Time(TimeValue::new(magnitude, unit))
            }
            RawExpr::Param(name) => match self.by_name.get(&name) {
                Some(parameter) => Expr::param(parameter),
                None => {
                    return Err(DocumentError::UnknownParameter {
                        name,
                        owner: owner.to_string(),
                    });
                }
            },
            RawExpr::Brace(items) => Expr::brace(
                items
                    .into_iter()
                    .map(|e| self.expr(e, owner))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        })
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDocument {
    #[serde(default)]
    parameters: Vec<RawParameter>,
    declaration: RawDeclaration,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawParameter {
    name: String,
    #[serde(rename = "type", default)]
    ty: Option<RawType>,
    #[serde(default)]
    init: Option<RawInit>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDeclaration {
    #[serde(default = "default_declaration_name")]
    name: String,
    #[serde(rename = "type", default)]
    ty: Option<RawType>,
    #[serde(default)]
    init: Option<RawInit>,
}

fn default_declaration_name() -> String {
    "value".to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawType {
    Name(String),
    List {
        list: Box<RawType>,
        #[serde(default)]
        size: Option<usize>,
    },
}

impl RawType {
    fn into_type(self) -> InferredType {
        match self {
            RawType::Name(name) if name == "time" => InferredType::Time,
            RawType::Name(name) => InferredType::Named(name),
            RawType::List { list, size: Some(n) } => InferredType::fixed_list(list.into_type(), n),
            RawType::List { list, size: None } => InferredType::variable_list(list.into_type()),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawInit {
    style: RawStyle,
    exprs: Vec<RawExpr>,
}

#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum RawStyle {
    Assign,
    Braces,
    Parens,
}

impl From<RawStyle> for InitStyle {
    fn from(style: RawStyle) -> Self {
        match style {
            RawStyle::Assign => InitStyle::Assign,
            RawStyle::Braces => InitStyle::Braces,
            RawStyle::Parens => InitStyle::Parens,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawExpr {
    Literal(String),
    Code(String),
    Time(i64, String),
    Param(String),
    Brace(Vec<RawExpr>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use lfgen_core::TimeUnit;

    #[test]
    fn loads_parameters_and_declaration() {
        let doc = parse_document(
            r#"{
                "parameters": [
                    { "name": "period", "type": "time", "init": { "style": "assign", "exprs": [{ "time": [100, "msec"] }] } }
                ],
                "declaration": {
                    "name": "offsets",
                    "type": { "list": "time", "size": 2 },
                    "init": { "style": "braces", "exprs": [{ "param": "period" }, { "literal": "0" }] }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(doc.parameters.len(), 1);
        assert_eq!(doc.parameters[0].name, "period");
        assert_eq!(doc.parameters[0].declared_type, Some(InferredType::Time));
        assert_eq!(
            doc.parameters[0].init,
            Some(Initializer::assign(Expr::time(TimeValue::new(100, TimeUnit::Milli))))
        );

        let decl = &doc.declaration;
        assert_eq!(decl.name, "offsets");
        assert_eq!(decl.inferred_type(), InferredType::fixed_list(InferredType::Time, 2));
        let init = decl.init.as_ref().unwrap();
        assert!(init.is_braces());
        assert_eq!(init.exprs()[0], Expr::param(&doc.parameters[0]));
    }

    #[test]
    fn untyped_declaration_is_inferred() {
        let doc = parse_document(
            r#"{ "declaration": { "init": { "style": "parens", "exprs": [{ "time": [1, "sec"] }, { "time": [2, "weeks"] }] } } }"#,
        )
        .unwrap();
        assert_eq!(doc.declaration.name, "value");
        assert_eq!(doc.declaration.inferred_type(), InferredType::time_list());
    }

    #[test]
    fn nested_list_types_and_braces() {
        let doc = parse_document(
            r#"{ "declaration": {
                "type": { "list": { "list": "int", "size": 2 } },
                "init": { "style": "assign", "exprs": [{ "brace": [{ "brace": [{ "literal": "1" }, { "code": "f()" }] }] }] }
            } }"#,
        )
        .unwrap();
        let ty = InferredType::variable_list(InferredType::fixed_list(InferredType::named("int"), 2));
        assert_eq!(doc.declaration.declared_type, Some(ty));
        assert_eq!(
            doc.declaration.init,
            Some(Initializer::assign(Expr::brace(vec![Expr::brace(vec![
                Expr::literal("1"),
                Expr::code("f()"),
            ])])))
        );
    }

    #[test]
    fn rejects_unknown_parameter() {
        let err = parse_document(
            r#"{ "declaration": { "name": "x", "init": { "style": "assign", "exprs": [{ "param": "nope" }] } } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, DocumentError::UnknownParameter { ref name, ref owner } if name == "nope" && owner == "x"));
    }

    #[test]
    fn rejects_forward_parameter_reference() {
        let err = parse_document(
            r#"{ "parameters": [
                    { "name": "a", "init": { "style": "assign", "exprs": [{ "param": "b" }] } },
                    { "name": "b", "type": "int" }
                ],
                "declaration": {} }"#,
        )
        .unwrap_err();
        assert!(matches!(err, DocumentError::UnknownParameter { .. }));
    }

    #[test]
    fn rejects_duplicate_parameter() {
        let err = parse_document(r#"{ "parameters": [{ "name": "a" }, { "name": "a" }], "declaration": {} }"#).unwrap_err();
        assert!(matches!(err, DocumentError::DuplicateParameter(ref n) if n == "a"));
    }

    #[test]
    fn rejects_unknown_time_unit() {
        let err = parse_document(
            r#"{ "declaration": { "init": { "style": "assign", "exprs": [{ "time": [3, "fortnights"] }] } } }"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "unknown time unit `fortnights` in `value`");
    }

    #[test]
    fn rejects_empty_initializer() {
        let err = parse_document(r#"{ "declaration": { "init": { "style": "braces", "exprs": [] } } }"#).unwrap_err();
        assert!(matches!(err, DocumentError::EmptyInitializer(_)));
    }

    #[test]
    fn rejects_assignment_with_several_exprs() {
        let err = parse_document(
            r#"{ "declaration": { "init": { "style": "assign", "exprs": [{ "literal": "1" }, { "literal": "2" }] } } }"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "assignment to `value` has 2 expressions, expected exactly one");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_document("{ not json").unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_document(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, DocumentError::Io { .. }));
    }
}
