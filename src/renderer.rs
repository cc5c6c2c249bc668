use crate::config::MappingOptions;
use crate::error::MappingError;
use crate::es::mapping::{
    EsVersion, JAEGER_DEPENDENCIES, JAEGER_SAMPLING, JAEGER_SERVICE, JAEGER_SPAN, MappingBuilder,
    MappingParams,
};
use crate::es::template::TemplateBuilder;

const SUPPORTED_MAPPINGS: [&str; 4] = [
    JAEGER_SPAN,
    JAEGER_SERVICE,
    JAEGER_DEPENDENCIES,
    JAEGER_SAMPLING,
];

/// Whether `name` is one of the index templates this tool can render.
pub fn is_supported(name: &str) -> bool {
    SUPPORTED_MAPPINGS.contains(&name)
}

/// Parses a boolean flag using the same spellings Go's `strconv.ParseBool` accepts.
pub fn parse_bool(option: &'static str, value: &str) -> Result<bool, MappingError> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(MappingError::InvalidBooleanOption {
            option,
            value: value.to_string(),
        }),
    }
}

/// Validates `opts` and renders `mapping` with the given template builder.
pub fn mapping_as_string<T: TemplateBuilder>(
    template_builder: T,
    mapping: &str,
    opts: &MappingOptions,
) -> Result<String, MappingError> {
    if !is_supported(mapping) {
        return Err(MappingError::UnsupportedMapping(mapping.to_string()));
    }
    let use_ilm = parse_bool("use-ilm", &opts.use_ilm)?;
    let disable_logs_field_search =
        parse_bool("disable-logs-field-search", &opts.disable_logs_field_search)?;

    let params = MappingParams {
        shards: opts.shards,
        replicas: opts.replicas,
        priority_span_template: opts.priority_span_template,
        priority_service_template: opts.priority_service_template,
        priority_dependencies_template: opts.priority_dependencies_template,
        priority_sampling_template: opts.priority_sampling_template,
        es_version: EsVersion::from_major(opts.es_version),
        index_prefix: opts.index_prefix.clone(),
        use_ilm,
        ilm_policy_name: opts.ilm_policy_name.clone(),
        disable_logs_field_search,
        logs_fields_type: opts.logs_fields_type,
    };
    MappingBuilder::with_template_builder(template_builder, params).get_mapping(mapping)
}
