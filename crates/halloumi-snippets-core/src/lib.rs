//! Halloumi snippet generation.
//!
//! Downloads the CloudFormation resource specification, expands every
//! resource type into a Halloumi `resource` declaration template and writes
//! the result as an editor snippet file.
//!
//! ```text
//! SchemaFetcher ──► SchemaDocument ──► SnippetGenerator ──► SnippetSet ──► write_snippets
//! ```

mod builtin;
mod config;
mod error;
mod fetch;
mod generator;
mod naming;
mod output;
mod snippet;

pub use builtin::builtin_snippets;
pub use config::{DEFAULT_SPEC_URL, SnippetConfig};
pub use error::{SnippetError, SnippetResult};
pub use fetch::SchemaFetcher;
pub use generator::{MAX_EXPANSION_DEPTH, SnippetGenerator};
pub use output::write_snippets;
pub use snippet::{SnippetEntry, SnippetSet};
