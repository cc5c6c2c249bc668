use anyhow::{Context, anyhow, bail};
use clap::ValueEnum;
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Read when `--config` is not given; silently skipped if absent.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

use crate::es::mapping::FieldType;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub mapping: MappingOptions,
}

/// Settings used to render an index template.
///
/// `use_ilm` and `disable_logs_field_search` are kept as the raw strings the
/// operator supplied; they are validated right before rendering.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MappingOptions {
    pub shards: i64,
    pub replicas: i64,
    pub es_version: u32,
    pub index_prefix: String,
    #[serde(deserialize_with = "bool_or_string")]
    pub use_ilm: String,
    pub ilm_policy_name: String,
    #[serde(deserialize_with = "bool_or_string")]
    pub disable_logs_field_search: String,
    pub logs_fields_type: FieldType,
    pub priority_span_template: i64,
    pub priority_service_template: i64,
    pub priority_dependencies_template: i64,
    pub priority_sampling_template: i64,
}

impl Default for MappingOptions {
    fn default() -> Self {
        Self {
            shards: 5,
            replicas: 1,
            es_version: 7,
            index_prefix: String::new(),
            use_ilm: "false".into(),
            ilm_policy_name: "jaeger-ilm-policy".into(),
            disable_logs_field_search: "false".into(),
            logs_fields_type: FieldType::Nested,
            priority_span_template: 0,
            priority_service_template: 0,
            priority_dependencies_template: 0,
            priority_sampling_template: 0,
        }
    }
}

/// Accepts `use_ilm = true` as well as `use_ilm = "true"` in the TOML file.
fn bool_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b.to_string(),
        Flag::Text(s) => s,
    })
}

impl AppConfig {
    /// Loads `path` if given (it must exist), otherwise `config.toml` when present.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        // Step 1: Try loading .env file (silently ignore if not found)
        let _ = dotenvy::dotenv();

        // Step 2: Try loading TOML config as base
        let mut config = match path {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file {} does not exist", path.display());
                }
                Self::from_file(path)?
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    AppConfig::default()
                }
            }
        };

        // Step 3: Override with environment variables where present
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str::<AppConfig>(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        let m = &mut self.mapping;
        if let Some(val) = lookup("ES_SHARDS") {
            m.shards = val.parse().context("ES_SHARDS")?;
        }
        if let Some(val) = lookup("ES_REPLICAS") {
            m.replicas = val.parse().context("ES_REPLICAS")?;
        }
        if let Some(val) = lookup("ES_VERSION") {
            m.es_version = val.parse().context("ES_VERSION")?;
        }
        if let Some(val) = lookup("ES_INDEX_PREFIX") {
            m.index_prefix = val;
        }
        if let Some(val) = lookup("ES_USE_ILM") {
            m.use_ilm = val;
        }
        if let Some(val) = lookup("ES_ILM_POLICY_NAME") {
            m.ilm_policy_name = val;
        }
        if let Some(val) = lookup("ES_DISABLE_LOGS_FIELD_SEARCH") {
            m.disable_logs_field_search = val;
        }
        if let Some(val) = lookup("ES_LOGS_FIELDS_TYPE") {
            m.logs_fields_type = FieldType::from_str(&val, true)
                .map_err(|e| anyhow!("ES_LOGS_FIELDS_TYPE: {e}"))?;
        }
        if let Some(val) = lookup("ES_PRIORITY_SPAN_TEMPLATE") {
            m.priority_span_template = val.parse().context("ES_PRIORITY_SPAN_TEMPLATE")?;
        }
        if let Some(val) = lookup("ES_PRIORITY_SERVICE_TEMPLATE") {
            m.priority_service_template = val.parse().context("ES_PRIORITY_SERVICE_TEMPLATE")?;
        }
        if let Some(val) = lookup("ES_PRIORITY_DEPENDENCIES_TEMPLATE") {
            m.priority_dependencies_template =
                val.parse().context("ES_PRIORITY_DEPENDENCIES_TEMPLATE")?;
        }
        if let Some(val) = lookup("ES_PRIORITY_SAMPLING_TEMPLATE") {
            m.priority_sampling_template = val.parse().context("ES_PRIORITY_SAMPLING_TEMPLATE")?;
        }
        Ok(())
    }
}
