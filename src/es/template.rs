//! The text-template seam used by [`MappingBuilder`](crate::es::mapping::MappingBuilder).
//!
//! Rendering an index template is two steps: parse the asset into something
//! executable, then execute it against a [`MappingContext`]. Both steps sit
//! behind traits so tests can swap the engine out.

use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use crate::error::MappingError;
use crate::es::mapping::MappingContext;

pub trait TemplateBuilder {
    /// Compile `source` under `name`, reporting syntax errors as
    /// [`MappingError::TemplateParse`].
    fn parse(&self, name: &str, source: &str) -> Result<Box<dyn TemplateApplier>, MappingError>;
}

pub trait TemplateApplier {
    fn execute(&self, ctx: &MappingContext<'_>) -> Result<String, MappingError>;
}

/// MiniJinja-backed builder used for the bundled index templates.
#[derive(Clone)]
pub struct JinjaTemplateBuilder {
    env: Environment<'static>,
}

impl JinjaTemplateBuilder {
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Templates are named `*.json`, which would otherwise turn on JSON escaping.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for JinjaTemplateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateBuilder for JinjaTemplateBuilder {
    fn parse(&self, name: &str, source: &str) -> Result<Box<dyn TemplateApplier>, MappingError> {
        let mut env = self.env.clone();
        env.add_template_owned(name.to_string(), source.to_string())
            .map_err(|source| MappingError::TemplateParse {
                name: name.to_string(),
                source,
            })?;

        Ok(Box::new(JinjaTemplate {
            env,
            name: name.to_string(),
        }))
    }
}

struct JinjaTemplate {
    env: Environment<'static>,
    name: String,
}

impl TemplateApplier for JinjaTemplate {
    fn execute(&self, ctx: &MappingContext<'_>) -> Result<String, MappingError> {
        let exec_error = |source: minijinja::Error| MappingError::TemplateExec {
            name: self.name.clone(),
            source,
        };
        let tmpl = self.env.get_template(&self.name).map_err(exec_error)?;
        tmpl.render(ctx).map_err(exec_error)
    }
}
