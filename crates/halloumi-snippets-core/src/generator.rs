//! Snippet generation from a parsed resource specification.
//!
//! Each resource type becomes a Halloumi `resource` declaration listing its
//! properties, required ones first. Every property carries an example value
//! derived from its type: scalars become fixed tokens, lists and maps show one
//! representative element, and property types expand into hash templates of
//! their own fields.

use halloumi_snippets_model::{
    PrimitiveType, PropertyDefinition, ResourceType, SchemaDocument, TypeDescriptor, UpdateType,
};
use tracing::debug;

use crate::builtin::builtin_snippets;
use crate::naming::{plural_symbol_name, snippet_prefix, symbol_name};
use crate::snippet::{SnippetEntry, SnippetSet};

/// Nesting depth at which property types are no longer expanded.
pub const MAX_EXPANSION_DEPTH: usize = 10;

/// Indentation of property lines inside the `resource ... do |r|` block.
const PROPERTY_INDENT: usize = 1;

/// Placeholder for records that carry no type information at all.
const UNKNOWN_PLACEHOLDER: &str = "...";

/// Builds the snippet set for a [`SchemaDocument`].
#[derive(Debug, Clone, Copy)]
pub struct SnippetGenerator<'a> {
    schema: &'a SchemaDocument,
}

impl<'a> SnippetGenerator<'a> {
    /// Create a generator over `schema`.
    #[must_use]
    pub fn new(schema: &'a SchemaDocument) -> Self {
        Self { schema }
    }

    /// Generate the builtin snippets followed by one snippet per resource
    /// type, in document order.
    #[must_use]
    pub fn generate(&self) -> SnippetSet {
        let mut snippets = builtin_snippets();
        for (name, resource) in &self.schema.resource_types {
            snippets.insert(format!("Halloumi_{name}"), self.resource_snippet(name, resource));
        }
        debug!(
            resource_types = self.schema.resource_types.len(),
            snippets = snippets.len(),
            "generated snippets"
        );
        snippets
    }

    /// Generate the snippet declaring `resource`.
    #[must_use]
    pub fn resource_snippet(&self, name: &str, resource: &ResourceType) -> SnippetEntry {
        let collection = plural_symbol_name(name);
        let mut body = vec![
            format!("# @!attribute [rw] {collection}"),
            format!("# @return [Array<Halloumi::{name}>] {collection}"),
        ];
        if let Some(doc) = &resource.documentation {
            body.push(format!("# @see: {doc}"));
        }
        body.push(format!("resource :{collection},"));
        body.push(format!("         type: Halloumi::{name},"));
        body.push("         amount: -> { amount } do |r|".to_owned());
        body.push(String::new());

        let (required, optional): (Vec<_>, Vec<_>) = resource
            .properties
            .iter()
            .partition(|(_, prop)| prop.required);

        if !required.is_empty() {
            body.push("\t# Required properties".to_owned());
            for (prop_name, prop) in &required {
                self.push_property(&mut body, name, prop_name, prop);
            }
            body.push(String::new());
        }

        if !optional.is_empty() {
            body.push("\t# Other properties".to_owned());
            for (prop_name, prop) in &optional {
                self.push_property(&mut body, name, prop_name, prop);
            }
        }

        body.push("end".to_owned());

        SnippetEntry {
            prefix: snippet_prefix(name).to_owned(),
            body,
            description: format!("The {name} basic resource"),
        }
    }

    /// Append the declaration of one property; multi-line templates span
    /// several body lines.
    fn push_property(
        &self,
        body: &mut Vec<String>,
        owner: &str,
        name: &str,
        prop: &PropertyDefinition,
    ) {
        let template = self.expand(prop.descriptor(), owner, 0);
        let mut line = format!(
            "{}r.property(:{}) {{ {template} }}",
            indent(PROPERTY_INDENT),
            symbol_name(name)
        );
        let comments = property_comments(prop);
        if !comments.is_empty() {
            line.push_str(" # ");
            line.push_str(&comments.join(" / "));
        }
        body.extend(line.split('\n').map(str::to_owned));
    }

    /// Render an example value for `descriptor`.
    ///
    /// The first line is unindented; continuation lines are indented relative
    /// to `depth`. Property types are resolved against `owner`.
    #[must_use]
    pub fn expand(&self, descriptor: TypeDescriptor<'_>, owner: &str, depth: usize) -> String {
        let outer = indent(PROPERTY_INDENT + depth);
        let inner = indent(PROPERTY_INDENT + depth + 1);

        match descriptor {
            TypeDescriptor::Primitive(primitive) => primitive_example(primitive).to_owned(),
            TypeDescriptor::List(item) => {
                let element = self.expand(item.into(), owner, depth + 1);
                format!("[\n{inner}{element},\n{inner}...\n{outer}]")
            }
            TypeDescriptor::Map(item) => {
                let element = self.expand(item.into(), owner, depth + 1);
                format!("{{\n{inner}\"<Key>\" => {element},\n{inner}...\n{outer}}}")
            }
            TypeDescriptor::Named(name) => self.expand_named(name, owner, depth),
            TypeDescriptor::Unknown => UNKNOWN_PLACEHOLDER.to_owned(),
        }
    }

    /// Expand a property type reference into a hash of its fields, or the
    /// bare type name when it cannot or must not be expanded.
    fn expand_named(&self, name: &str, owner: &str, depth: usize) -> String {
        if depth >= MAX_EXPANSION_DEPTH {
            return name.to_owned();
        }
        let Some(property_type) = self.schema.property_type(owner, name) else {
            return name.to_owned();
        };
        if property_type.properties.is_empty() {
            return "{}".to_owned();
        }

        let outer = indent(PROPERTY_INDENT + depth);
        let inner = indent(PROPERTY_INDENT + depth + 1);
        let fields: String = property_type
            .properties
            .iter()
            .map(|(field, prop)| {
                let value = self.expand(prop.descriptor(), owner, depth + 1);
                format!("{inner}{field}: {value},\n")
            })
            .collect();
        format!("{{\n{fields}{outer}}}")
    }
}

/// Fixed example token for a scalar kind. Unknown kinds render their name.
fn primitive_example(primitive: &PrimitiveType) -> &str {
    match primitive {
        PrimitiveType::String => "\"<String>\"",
        PrimitiveType::Integer | PrimitiveType::Long => "1",
        PrimitiveType::Double => "1.0",
        PrimitiveType::Boolean => "true | false",
        PrimitiveType::Timestamp => "\"YYYY-MM-DDThh:mm:ssZ\"",
        PrimitiveType::Json => "{}",
        PrimitiveType::Other(name) => name.as_str(),
    }
}

/// Update-behavior and list annotations for a property.
fn property_comments(prop: &PropertyDefinition) -> Vec<&'static str> {
    let mut comments = Vec::new();
    if prop.duplicates_allowed == Some(true) {
        comments.push("Can have duplicates");
    }
    match prop.update_type {
        Some(UpdateType::Immutable) => comments.push("Change triggers replacement"),
        Some(UpdateType::Conditional) => comments.push("Change might trigger replacement"),
        _ => {}
    }
    comments
}

fn indent(level: usize) -> String {
    "\t".repeat(level)
}
