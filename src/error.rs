use thiserror::Error;

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("Unsupported mapping '{0}'")]
    UnsupportedMapping(String),

    #[error("Invalid boolean value '{value}' for option {option}")]
    InvalidBooleanOption { option: &'static str, value: String },

    #[error("Mapping asset '{0}' not found")]
    AssetNotFound(String),

    #[error("Failed to parse template {name}: {source}")]
    TemplateParse {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to render template {name}: {source}")]
    TemplateExec {
        name: String,
        #[source]
        source: minijinja::Error,
    },
}
