use serde::{Deserialize, Serialize};

use crate::error::MappingError;
use crate::es::assets::load_mapping;
use crate::es::template::{JinjaTemplateBuilder, TemplateBuilder};

pub const JAEGER_SPAN: &str = "jaeger-span";
pub const JAEGER_SERVICE: &str = "jaeger-service";
pub const JAEGER_DEPENDENCIES: &str = "jaeger-dependencies";
pub const JAEGER_SAMPLING: &str = "jaeger-sampling";

/// Major version of the target search engine. Selects the template variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EsVersion {
    V6,
    #[default]
    V7,
    V8,
}

impl EsVersion {
    /// Anything other than 7 or 8 renders the version 6 templates.
    pub fn from_major(major: u32) -> Self {
        match major {
            8 => Self::V8,
            7 => Self::V7,
            6 => Self::V6,
            other => {
                tracing::warn!("Unknown engine version {other}, falling back to version 6 templates");
                Self::V6
            }
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::V6 => "-6.json",
            Self::V7 => "-7.json",
            Self::V8 => "-8.json",
        }
    }
}

/// Type used for the `logs.fields` property of span documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Nested,
    Object,
}

#[derive(Debug, Clone, Default)]
pub struct MappingParams {
    pub shards: i64,
    pub replicas: i64,
    pub priority_span_template: i64,
    pub priority_service_template: i64,
    pub priority_dependencies_template: i64,
    pub priority_sampling_template: i64,
    pub es_version: EsVersion,
    pub index_prefix: String,
    pub use_ilm: bool,
    pub ilm_policy_name: String,
    pub disable_logs_field_search: bool,
    pub logs_fields_type: FieldType,
}

/// Values exposed to the index templates for a single render.
#[derive(Debug, Serialize)]
pub struct MappingContext<'a> {
    pub shards: i64,
    pub replicas: i64,
    pub priority_span_template: i64,
    pub priority_service_template: i64,
    pub priority_dependencies_template: i64,
    pub priority_sampling_template: i64,
    pub index_prefix: String,
    pub use_ilm: bool,
    pub ilm_policy_name: &'a str,
    pub disable_logs_field_search: bool,
    pub logs_fields_type: FieldType,
}

impl<'a> MappingContext<'a> {
    pub fn new(params: &'a MappingParams) -> Self {
        Self {
            shards: params.shards,
            replicas: params.replicas,
            priority_span_template: params.priority_span_template,
            priority_service_template: params.priority_service_template,
            priority_dependencies_template: params.priority_dependencies_template,
            priority_sampling_template: params.priority_sampling_template,
            index_prefix: normalize_index_prefix(&params.index_prefix),
            use_ilm: params.use_ilm,
            ilm_policy_name: &params.ilm_policy_name,
            disable_logs_field_search: params.disable_logs_field_search,
            logs_fields_type: params.logs_fields_type,
        }
    }
}

/// Non-empty prefixes always end with `-` so they can be glued to index names.
pub fn normalize_index_prefix(prefix: &str) -> String {
    if !prefix.is_empty() && !prefix.ends_with('-') {
        format!("{prefix}-")
    } else {
        prefix.to_string()
    }
}

/// Renders the bundled index templates for one set of parameters.
pub struct MappingBuilder<T = JinjaTemplateBuilder> {
    template_builder: T,
    params: MappingParams,
}

impl MappingBuilder {
    pub fn new(params: MappingParams) -> Self {
        Self::with_template_builder(JinjaTemplateBuilder::new(), params)
    }
}

impl<T: TemplateBuilder> MappingBuilder<T> {
    pub fn with_template_builder(template_builder: T, params: MappingParams) -> Self {
        Self {
            template_builder,
            params,
        }
    }

    /// Render `mapping` using the template variant for the configured engine version.
    pub fn get_mapping(&self, mapping: &str) -> Result<String, MappingError> {
        let asset = format!("{mapping}{}", self.params.es_version.suffix());
        self.fix_mapping(&asset)
    }

    pub fn span_service_mappings(&self) -> Result<(String, String), MappingError> {
        let span = self.get_mapping(JAEGER_SPAN)?;
        let service = self.get_mapping(JAEGER_SERVICE)?;
        Ok((span, service))
    }

    pub fn dependencies_mapping(&self) -> Result<String, MappingError> {
        self.get_mapping(JAEGER_DEPENDENCIES)
    }

    pub fn sampling_mapping(&self) -> Result<String, MappingError> {
        self.get_mapping(JAEGER_SAMPLING)
    }

    fn fix_mapping(&self, asset: &str) -> Result<String, MappingError> {
        let source = load_mapping(asset)?;
        tracing::debug!("Rendering index template {asset}");
        self.render(asset, source)
    }

    fn render(&self, name: &str, source: &str) -> Result<String, MappingError> {
        let tmpl = self.template_builder.parse(name, source)?;
        let ctx = MappingContext::new(&self.params);
        tmpl.execute(&ctx)
    }
}
