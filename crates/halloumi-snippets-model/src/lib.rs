//! CloudFormation resource specification model.
//!
//! Hand-written serde types for the `CloudFormationResourceSpecification.json`
//! document published by AWS. Only the parts needed to describe resource and
//! property shapes are modelled; everything else in the document is ignored.
//!
//! Individual property records are parsed leniently: a record that is not an
//! object, or whose fields carry unexpected JSON types, falls back to its
//! default value instead of failing the whole document.

pub mod schema;
pub mod types;

pub use schema::{PropertyDefinition, PropertyType, ResourceType, SchemaDocument};
pub use types::{ItemDescriptor, PrimitiveType, TypeDescriptor, UpdateType};
