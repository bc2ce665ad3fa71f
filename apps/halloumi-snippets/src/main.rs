//! Halloumi snippet generator.
//!
//! Downloads the CloudFormation resource specification and writes one editor
//! snippet per resource type, plus the builtin Halloumi snippets, to a JSON
//! snippet file. The output file is replaced on every run.
//!
//! # Usage
//!
//! ```text
//! OUTPUT_PATH=snippets/snippets.json halloumi-snippets
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SPEC_URL` | CloudFront `CloudFormationResourceSpecification.json` | Source document |
//! | `OUTPUT_PATH` | `snippets/snippets.json` | Snippet file to write |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use anyhow::{Context, Result};
use halloumi_snippets_core::{SchemaFetcher, SnippetConfig, SnippetGenerator, write_snippets};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = SnippetConfig::from_env();
    init_tracing(&config.log_level)?;

    let fetcher = SchemaFetcher::new(&config.spec_url).context("failed to build HTTP client")?;
    let schema = fetcher
        .fetch()
        .await
        .with_context(|| format!("failed to load resource specification from {}", fetcher.url()))?;

    let snippets = SnippetGenerator::new(&schema).generate();

    let written = write_snippets(&config.output_path, &snippets)
        .with_context(|| format!("failed to write {}", config.output_path.display()))?;

    info!(
        snippets = written,
        path = %config.output_path.display(),
        "Wrote {written} snippets to file"
    );

    Ok(())
}
