//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use lfgen_core::{TimeUnit, TimeValue, time};

use crate::backend::{CppConfig, CppTypes, ParamScope, TargetTypes};
use crate::document::{self, Declaration, Document};

use super::{CliError, CliResult, ExitCode, Form, Scope};

/// Options of the `render` command.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub form: Form,
    pub scope: Scope,
    pub accessor: Option<String>,
    pub duration_type: Option<String>,
    pub show_type: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            form: Form::Standalone,
            scope: Scope::Local,
            accessor: None,
            duration_type: None,
            show_type: false,
        }
    }
}

impl RenderOptions {
    fn config(&self) -> CppConfig {
        let mut config = CppConfig::new();
        if let Some(accessor) = &self.accessor {
            config = config.with_enclosing_accessor(accessor.as_str());
        }
        if let Some(ty) = &self.duration_type {
            config = config.with_duration_type(ty.as_str());
        }
        config
    }
}

/// Render the declaration of a document file and print it.
#[tracing::instrument(skip(options), fields(form = ?options.form, scope = ?options.scope))]
pub fn render_file(path: &Path, options: &RenderOptions) -> CliResult<ExitCode> {
    let doc = document::load_document(path).map_err(|e| CliError::failure(format!("Error: {}", e)))?;
    println!("{}", render_document(&doc, options));
    Ok(ExitCode::SUCCESS)
}

/// Render a document's declaration according to `options`.
///
/// With `show_type`, the rendered type comes first on its own line.
pub fn render_document(doc: &Document, options: &RenderOptions) -> String {
    let cpp = CppTypes::with_config(options.config());
    match options.scope {
        Scope::Local => render_declaration(&cpp, &doc.declaration, options),
        Scope::Enclosing => render_declaration(&cpp.outer(), &doc.declaration, options),
    }
}

fn render_declaration<S: ParamScope>(cpp: &CppTypes<S>, decl: &Declaration, options: &RenderOptions) -> String {
    let ty = decl.inferred_type();
    let init = decl.init.as_ref();
    let value = match options.form {
        Form::Standalone => cpp.standalone_initializer(init, Some(&ty)),
        Form::List => cpp.initializer_list(init, Some(&ty)),
    };
    if options.show_type {
        format!("{}\n{}", cpp.target_type(Some(&ty)), value)
    } else {
        value
    }
}

/// Render a single duration literal and print it.
pub fn render_time(magnitude: i64, unit: &str) -> CliResult<ExitCode> {
    println!("{}", time_literal(magnitude, unit)?);
    Ok(ExitCode::SUCCESS)
}

/// Duration literal for `magnitude unit`; an empty unit means a unitless magnitude.
pub fn time_literal(magnitude: i64, unit: &str) -> CliResult<String> {
    let unit = if unit.is_empty() {
        TimeUnit::None
    } else {
        time::from_str(unit).ok_or_else(|| CliError::failure(format!("Error: unknown time unit '{}'", unit)))?
    };
    Ok(CppTypes::new().time_expr(TimeValue::new(magnitude, unit)))
}
