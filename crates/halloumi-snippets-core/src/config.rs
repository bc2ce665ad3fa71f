//! Configuration for a generation run.
//!
//! All configuration is driven by environment variables.

use std::path::PathBuf;

/// Published location of the CloudFormation resource specification.
pub const DEFAULT_SPEC_URL: &str =
    "https://d3teyb21fexa9r.cloudfront.net/latest/gzip/CloudFormationResourceSpecification.json";

/// Settings for one fetch-generate-write run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetConfig {
    /// URL of the resource specification document.
    pub spec_url: String,
    /// File the snippets are written to.
    pub output_path: PathBuf,
    /// Log level.
    pub log_level: String,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            spec_url: DEFAULT_SPEC_URL.to_owned(),
            output_path: PathBuf::from("snippets/snippets.json"),
            log_level: "info".to_owned(),
        }
    }
}

impl SnippetConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source, keeping the
    /// default for every variable that is unset or empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("SPEC_URL") {
            config.spec_url = v;
        }
        if let Some(v) = get("OUTPUT_PATH") {
            config.output_path = PathBuf::from(v);
        }
        if let Some(v) = get("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }
}
