use clap::Parser;
use std::path::PathBuf;

use crate::config::MappingOptions;
use crate::es::mapping::FieldType;

/// Render an Elasticsearch/OpenSearch index template for Jaeger storage
#[derive(Debug, Parser)]
#[command(name = "esmapping-generator", version)]
pub struct Cli {
    /// The index template to render: jaeger-span, jaeger-service, jaeger-dependencies or jaeger-sampling
    #[arg(long)]
    pub mapping: String,

    /// TOML file with a [mapping] table of defaults [default: config.toml, if present]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of index shards
    #[arg(long)]
    pub shards: Option<i64>,

    /// Number of index replicas
    #[arg(long)]
    pub replicas: Option<i64>,

    /// Major version of the search engine (6, 7 or 8)
    #[arg(long)]
    pub es_version: Option<u32>,

    /// Prefix prepended to every index name
    #[arg(long)]
    pub index_prefix: Option<String>,

    /// Attach an ILM policy and rollover aliases (true/false)
    #[arg(long)]
    pub use_ilm: Option<String>,

    /// Name of the ILM policy
    #[arg(long)]
    pub ilm_policy_name: Option<String>,

    /// Disable indexing of span log fields (true/false)
    #[arg(long)]
    pub disable_logs_field_search: Option<String>,

    /// Field type of span log fields
    #[arg(long, value_enum)]
    pub logs_fields_type: Option<FieldType>,

    /// Priority of the span index template (version 8 only)
    #[arg(long)]
    pub priority_span_template: Option<i64>,

    /// Priority of the service index template (version 8 only)
    #[arg(long)]
    pub priority_service_template: Option<i64>,

    /// Priority of the dependencies index template (version 8 only)
    #[arg(long)]
    pub priority_dependencies_template: Option<i64>,

    /// Priority of the sampling index template (version 8 only)
    #[arg(long)]
    pub priority_sampling_template: Option<i64>,
}

impl Cli {
    /// Flags given on the command line win over the config file and environment.
    pub fn apply(&self, opts: &mut MappingOptions) {
        if let Some(v) = self.shards {
            opts.shards = v;
        }
        if let Some(v) = self.replicas {
            opts.replicas = v;
        }
        if let Some(v) = self.es_version {
            opts.es_version = v;
        }
        if let Some(v) = &self.index_prefix {
            opts.index_prefix = v.clone();
        }
        if let Some(v) = &self.use_ilm {
            opts.use_ilm = v.clone();
        }
        if let Some(v) = &self.ilm_policy_name {
            opts.ilm_policy_name = v.clone();
        }
        if let Some(v) = &self.disable_logs_field_search {
            opts.disable_logs_field_search = v.clone();
        }
        if let Some(v) = self.logs_fields_type {
            opts.logs_fields_type = v;
        }
        if let Some(v) = self.priority_span_template {
            opts.priority_span_template = v;
        }
        if let Some(v) = self.priority_service_template {
            opts.priority_service_template = v;
        }
        if let Some(v) = self.priority_dependencies_template {
            opts.priority_dependencies_template = v;
        }
        if let Some(v) = self.priority_sampling_template {
            opts.priority_sampling_template = v;
        }
    }
}
