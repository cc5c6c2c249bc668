use crate::error::MappingError;

/// Index templates compiled into the binary, keyed by `<mapping>-<version>.json`.
pub const MAPPINGS: &[(&str, &str)] = &[
    ("jaeger-span-6.json", include_str!("mappings/jaeger-span-6.json")),
    ("jaeger-span-7.json", include_str!("mappings/jaeger-span-7.json")),
    ("jaeger-span-8.json", include_str!("mappings/jaeger-span-8.json")),
    ("jaeger-service-6.json", include_str!("mappings/jaeger-service-6.json")),
    ("jaeger-service-7.json", include_str!("mappings/jaeger-service-7.json")),
    ("jaeger-service-8.json", include_str!("mappings/jaeger-service-8.json")),
    (
        "jaeger-dependencies-6.json",
        include_str!("mappings/jaeger-dependencies-6.json"),
    ),
    (
        "jaeger-dependencies-7.json",
        include_str!("mappings/jaeger-dependencies-7.json"),
    ),
    (
        "jaeger-dependencies-8.json",
        include_str!("mappings/jaeger-dependencies-8.json"),
    ),
    ("jaeger-sampling-6.json", include_str!("mappings/jaeger-sampling-6.json")),
    ("jaeger-sampling-7.json", include_str!("mappings/jaeger-sampling-7.json")),
    ("jaeger-sampling-8.json", include_str!("mappings/jaeger-sampling-8.json")),
];

pub fn load_mapping(name: &str) -> Result<&'static str, MappingError> {
    MAPPINGS
        .iter()
        .find(|(file, _)| *file == name)
        .map(|(_, content)| *content)
        .ok_or_else(|| MappingError::AssetNotFound(name.to_string()))
}
