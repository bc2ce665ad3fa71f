//! Top-level document and resource/property records.
//!
//! All structs use `#[serde(rename_all = "PascalCase")]` to match the
//! specification's field names. Tables are [`IndexMap`]s so iteration follows
//! document order.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{ItemDescriptor, PrimitiveType, TypeDescriptor, UpdateType};

/// Type name of the only property type the specification defines without a
/// resource-type qualifier.
pub const SHARED_TAG_TYPE: &str = "Tag";

/// The parsed CloudFormation resource specification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SchemaDocument {
    /// Resource type name (e.g. `AWS::EC2::Instance`) to definition.
    #[serde(deserialize_with = "lenient_table")]
    pub resource_types: IndexMap<String, ResourceType>,
    /// Qualified property type name (e.g. `AWS::EC2::Instance.Ebs`) to
    /// definition.
    #[serde(default, deserialize_with = "lenient_table")]
    pub property_types: IndexMap<String, PropertyType>,
    /// Version string of the published specification.
    #[serde(default, deserialize_with = "lenient")]
    pub resource_specification_version: Option<String>,
}

/// A deployable resource type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceType {
    /// Link to the AWS documentation page.
    #[serde(default, deserialize_with = "lenient")]
    pub documentation: Option<String>,
    /// Properties in document order.
    #[serde(default, deserialize_with = "lenient_table")]
    pub properties: IndexMap<String, PropertyDefinition>,
}

/// A reusable nested field group referenced by resource properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyType {
    /// Link to the AWS documentation page.
    #[serde(default, deserialize_with = "lenient")]
    pub documentation: Option<String>,
    /// Fields in document order.
    #[serde(default, deserialize_with = "lenient_table")]
    pub properties: IndexMap<String, PropertyDefinition>,
}

/// One field of a resource or property type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyDefinition {
    /// Link to the AWS documentation page.
    #[serde(default, deserialize_with = "lenient")]
    pub documentation: Option<String>,
    /// Whether the field must be set.
    #[serde(default, deserialize_with = "lenient")]
    pub required: bool,
    /// Update behavior.
    #[serde(default, deserialize_with = "lenient")]
    pub update_type: Option<UpdateType>,
    /// Whether a list may contain the same value more than once.
    #[serde(default, deserialize_with = "lenient")]
    pub duplicates_allowed: Option<bool>,
    /// Scalar type of the field.
    #[serde(default, deserialize_with = "lenient")]
    pub primitive_type: Option<PrimitiveType>,
    /// `List`, `Map`, or the name of a property type.
    #[serde(default, rename = "Type", deserialize_with = "lenient")]
    pub type_name: Option<String>,
    /// Scalar type of list or map items.
    #[serde(default, deserialize_with = "lenient")]
    pub primitive_item_type: Option<PrimitiveType>,
    /// Property type name of list or map items.
    #[serde(default, deserialize_with = "lenient")]
    pub item_type: Option<String>,
}

impl SchemaDocument {
    /// Look up a property type referenced from a field of `owner`.
    ///
    /// References are relative to the owning resource type, so `Ebs` used by
    /// `AWS::EC2::Instance` resolves to `AWS::EC2::Instance.Ebs`. The shared
    /// `Tag` type is looked up unqualified.
    #[must_use]
    pub fn property_type(&self, owner: &str, name: &str) -> Option<&PropertyType> {
        if name == SHARED_TAG_TYPE {
            return self.property_types.get(name);
        }
        self.property_types.get(&format!("{owner}.{name}"))
    }
}

impl PropertyDefinition {
    /// Classify this record's type fields.
    ///
    /// A scalar `PrimitiveType` wins over `Type`. Records with neither yield
    /// [`TypeDescriptor::Unknown`].
    #[must_use]
    pub fn descriptor(&self) -> TypeDescriptor<'_> {
        if let Some(primitive) = &self.primitive_type {
            return TypeDescriptor::Primitive(primitive);
        }
        match self.type_name.as_deref() {
            Some("List") => TypeDescriptor::List(self.item_descriptor()),
            Some("Map") => TypeDescriptor::Map(self.item_descriptor()),
            Some(name) => TypeDescriptor::Named(name),
            None => TypeDescriptor::Unknown,
        }
    }

    fn item_descriptor(&self) -> ItemDescriptor<'_> {
        if let Some(primitive) = &self.primitive_item_type {
            return ItemDescriptor::Primitive(primitive);
        }
        match self.item_type.as_deref() {
            Some(name) => ItemDescriptor::Named(name),
            None => ItemDescriptor::Unknown,
        }
    }

    /// Returns `true` if changing this field replaces the resource.
    #[must_use]
    pub fn is_immutable(&self) -> bool {
        self.update_type == Some(UpdateType::Immutable)
    }
}

/// Deserialize a field, falling back to its default when the JSON value has
/// the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Deserialize a name-keyed table whose entries are parsed with [`lenient`]
/// semantics. A table that is not an object is treated as empty.
///
/// Entry order survives the trip through `serde_json::Value` only with the
/// `preserve_order` feature of `serde_json`.
fn lenient_table<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Object(entries) = value else {
        return Ok(IndexMap::new());
    };
    Ok(entries
        .into_iter()
        .map(|(name, entry)| (name, T::deserialize(entry).unwrap_or_default()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "ResourceSpecificationVersion": "1.2.3",
        "PropertyTypes": {
            "AWS::EC2::Instance.Ebs": {
                "Documentation": "https://docs/ebs",
                "Properties": {
                    "VolumeSize": { "PrimitiveType": "Integer", "Required": false, "UpdateType": "Mutable" }
                }
            },
            "Tag": {
                "Properties": {
                    "Key": { "PrimitiveType": "String", "Required": true, "UpdateType": "Mutable" },
                    "Value": { "PrimitiveType": "String", "Required": true, "UpdateType": "Mutable" }
                }
            }
        },
        "ResourceTypes": {
            "AWS::EC2::Instance": {
                "Documentation": "https://docs/instance",
                "Properties": {
                    "ImageId": { "PrimitiveType": "String", "Required": false, "UpdateType": "Conditional" },
                    "AvailabilityZone": { "PrimitiveType": "String", "Required": false, "UpdateType": "Immutable" },
                    "Tags": { "Type": "List", "ItemType": "Tag", "Required": false, "DuplicatesAllowed": true, "UpdateType": "Mutable" },
                    "Ebs": { "Type": "Ebs", "Required": true, "UpdateType": "Mutable" }
                },
                "Attributes": { "PrivateIp": { "PrimitiveType": "String" } }
            }
        }
    }"#;

    #[test]
    fn test_should_parse_sample_document() {
        let doc: SchemaDocument = serde_json::from_str(SAMPLE).expect("parse sample");
        assert_eq!(doc.resource_specification_version.as_deref(), Some("1.2.3"));
        assert_eq!(doc.resource_types.len(), 1);
        assert_eq!(doc.property_types.len(), 2);

        let instance = &doc.resource_types["AWS::EC2::Instance"];
        assert_eq!(instance.documentation.as_deref(), Some("https://docs/instance"));
        let names: Vec<&str> = instance.properties.keys().map(String::as_str).collect();
        assert_eq!(names, ["ImageId", "AvailabilityZone", "Tags", "Ebs"]);
        assert!(instance.properties["AvailabilityZone"].is_immutable());
        assert_eq!(
            instance.properties["Tags"].descriptor(),
            TypeDescriptor::List(ItemDescriptor::Named("Tag"))
        );
        assert_eq!(
            instance.properties["Ebs"].descriptor(),
            TypeDescriptor::Named("Ebs")
        );
        assert_eq!(instance.properties["Tags"].duplicates_allowed, Some(true));
    }

    #[test]
    fn test_should_keep_document_order_of_tables() {
        let doc: SchemaDocument = serde_json::from_str(
            r#"{
                "PropertyTypes": {"Zed::Last.Inner": {"Properties": {
                    "Zulu": {"PrimitiveType": "String"},
                    "Alpha": {"PrimitiveType": "String"}
                }}},
                "ResourceTypes": {
                    "Zed::Last": {"Properties": {
                        "Zulu": {"PrimitiveType": "String", "Required": true},
                        "Alpha": {"PrimitiveType": "String", "Required": true},
                        "Mike": {"PrimitiveType": "String"},
                        "Bravo": {"PrimitiveType": "String"}
                    }},
                    "Foo::Bar": {}
                }
            }"#,
        )
        .expect("parse ordered document");

        let resources: Vec<&str> = doc.resource_types.keys().map(String::as_str).collect();
        assert_eq!(resources, ["Zed::Last", "Foo::Bar"]);
        let props: Vec<&str> = doc.resource_types["Zed::Last"]
            .properties
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(props, ["Zulu", "Alpha", "Mike", "Bravo"]);
        let fields: Vec<&str> = doc.property_types["Zed::Last.Inner"]
            .properties
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(fields, ["Zulu", "Alpha"]);
    }

    #[test]
    fn test_should_resolve_property_types_relative_to_owner() {
        let doc: SchemaDocument = serde_json::from_str(SAMPLE).expect("parse sample");
        assert!(doc.property_type("AWS::EC2::Instance", "Ebs").is_some());
        assert!(doc.property_type("AWS::EC2::Volume", "Ebs").is_none());
        assert!(doc.property_type("AWS::EC2::Instance", "Tag").is_some());
    }

    #[test]
    fn test_should_require_resource_types_table() {
        let result: Result<SchemaDocument, _> = serde_json::from_str(r#"{"PropertyTypes": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_should_default_malformed_property_records() {
        let doc: SchemaDocument = serde_json::from_str(
            r#"{"ResourceTypes": {"Foo::Bar": {"Properties": {
                "Broken": "not an object",
                "Odd": { "Required": "yes", "PrimitiveType": 7, "UpdateType": "Immutable" }
            }}}}"#,
        )
        .expect("parse lenient document");

        let props = &doc.resource_types["Foo::Bar"].properties;
        assert_eq!(props["Broken"], PropertyDefinition::default());
        assert_eq!(props["Broken"].descriptor(), TypeDescriptor::Unknown);
        assert!(!props["Odd"].required);
        assert_eq!(props["Odd"].primitive_type, None);
        assert!(props["Odd"].is_immutable());
    }

    #[test]
    fn test_should_prefer_primitive_type_over_type() {
        let prop = PropertyDefinition {
            primitive_type: Some(PrimitiveType::Json),
            type_name: Some("List".to_owned()),
            ..PropertyDefinition::default()
        };
        assert_eq!(prop.descriptor(), TypeDescriptor::Primitive(&PrimitiveType::Json));
    }

    #[test]
    fn test_should_describe_map_of_primitives() {
        let prop = PropertyDefinition {
            type_name: Some("Map".to_owned()),
            primitive_item_type: Some(PrimitiveType::String),
            ..PropertyDefinition::default()
        };
        assert_eq!(
            prop.descriptor(),
            TypeDescriptor::Map(ItemDescriptor::Primitive(&PrimitiveType::String))
        );
    }
}
