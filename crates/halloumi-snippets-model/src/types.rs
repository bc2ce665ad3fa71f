//! Enumerations and type descriptors used by property definitions.
//!
//! Enum values follow the wire strings of the CloudFormation resource
//! specification. Values the specification adds later are preserved in an
//! `Other` variant rather than rejected.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// How CloudFormation reacts when a property value changes on update.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum UpdateType {
    /// The resource is updated in place.
    #[default]
    Mutable,
    /// The resource is replaced.
    Immutable,
    /// Replacement depends on the new value.
    Conditional,
    /// Any value not known to this crate.
    Other(String),
}

impl UpdateType {
    /// Returns the wire-format string of this update type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mutable => "Mutable",
            Self::Immutable => "Immutable",
            Self::Conditional => "Conditional",
            Self::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for UpdateType {
    fn from(s: &str) -> Self {
        match s {
            "Mutable" => Self::Mutable,
            "Immutable" => Self::Immutable,
            "Conditional" => Self::Conditional,
            _ => Self::Other(s.to_owned()),
        }
    }
}

impl Serialize for UpdateType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UpdateType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for UpdateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar kinds a property or collection item may have.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// UTF-8 string.
    String,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    Long,
    /// Double precision float.
    Double,
    /// `true` or `false`.
    Boolean,
    /// ISO 8601 timestamp.
    Timestamp,
    /// Arbitrary JSON document.
    Json,
    /// A primitive name not known to this crate.
    Other(String),
}

impl PrimitiveType {
    /// Returns the wire-format string of this primitive type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "String",
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Double => "Double",
            Self::Boolean => "Boolean",
            Self::Timestamp => "Timestamp",
            Self::Json => "Json",
            Self::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for PrimitiveType {
    fn from(s: &str) -> Self {
        match s {
            "String" => Self::String,
            "Integer" => Self::Integer,
            "Long" => Self::Long,
            "Double" => Self::Double,
            "Boolean" => Self::Boolean,
            "Timestamp" => Self::Timestamp,
            "Json" => Self::Json,
            _ => Self::Other(s.to_owned()),
        }
    }
}

impl Serialize for PrimitiveType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PrimitiveType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl std::fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

/// The shape of a property, derived from its `PrimitiveType`, `Type`,
/// `PrimitiveItemType` and `ItemType` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDescriptor<'a> {
    /// A scalar value.
    Primitive(&'a PrimitiveType),
    /// `Type: List`.
    List(ItemDescriptor<'a>),
    /// `Type: Map`.
    Map(ItemDescriptor<'a>),
    /// A reference to a named property type.
    Named(&'a str),
    /// The record carries no usable type information.
    Unknown,
}

/// The element shape of a list or map property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemDescriptor<'a> {
    /// `PrimitiveItemType`.
    Primitive(&'a PrimitiveType),
    /// `ItemType` naming a property type.
    Named(&'a str),
    /// Neither item field is present.
    Unknown,
}

impl<'a> From<ItemDescriptor<'a>> for TypeDescriptor<'a> {
    fn from(item: ItemDescriptor<'a>) -> Self {
        match item {
            ItemDescriptor::Primitive(p) => Self::Primitive(p),
            ItemDescriptor::Named(name) => Self::Named(name),
            ItemDescriptor::Unknown => Self::Unknown,
        }
    }
}
