//! Name conversions from CloudFormation identifiers to Ruby symbols.

use heck::ToSnakeCase;

/// Namespace prefix removed from resource type names to form snippet
/// triggers.
const AWS_NAMESPACE: &str = "AWS::";

/// `AWS::EC2::Instance` -> `aws_ec2_instance`, `DBInstanceClass` ->
/// `db_instance_class`.
pub(crate) fn symbol_name(name: &str) -> String {
    name.to_snake_case()
}

/// Snake-cased plural used for the `resource` collection name.
pub(crate) fn plural_symbol_name(name: &str) -> String {
    pluralize(&symbol_name(name))
}

/// Trigger text for a resource type's snippet.
pub(crate) fn snippet_prefix(resource_type: &str) -> &str {
    resource_type
        .strip_prefix(AWS_NAMESPACE)
        .unwrap_or(resource_type)
}

/// English plural of a snake_case word.
fn pluralize(word: &str) -> String {
    const SIBILANT_ENDINGS: [&str; 5] = ["s", "x", "z", "ch", "sh"];

    if SIBILANT_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
        return format!("{word}es");
    }
    if let Some(stem) = word.strip_suffix('y') {
        let after_consonant = stem
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_alphabetic() && !"aeiou".contains(c));
        if after_consonant {
            return format!("{stem}ies");
        }
    }
    format!("{word}s")
}
