//! Hand-written snippets for Halloumi constructs that are not CloudFormation
//! resource types.

use crate::snippet::{SnippetEntry, SnippetSet};

/// The fixed snippets emitted ahead of the generated resource snippets.
#[must_use]
pub fn builtin_snippets() -> SnippetSet {
    let mut snippets = SnippetSet::new();

    snippets.insert(
        "Halloumi_environment_property".to_owned(),
        SnippetEntry::new(
            "Halloumi environment property",
            [
                "property :property_name,",
                "         env: :ENVIRONMENT_VARIABLE_NAME,",
                "         required: true,",
                "         default: \"<default value>\"",
            ],
            "An Halloumi property using a value from your .env.* files",
        ),
    );

    snippets.insert(
        "Halloumi_template_property".to_owned(),
        SnippetEntry::new(
            "Halloumi template property",
            [
                "property :property_name,",
                "         env: :ENVIRONMENT_VARIABLE_NAME,",
                "         template: File.expand_path(",
                "           \"<relative path to template>\"",
                "           __FILE__",
                "         ),",
                "         required: true",
            ],
            "An Halloumi property using a template to load it's value",
        ),
    );

    snippets.insert(
        "Halloumi_output".to_owned(),
        SnippetEntry::new(
            "Halloumi output",
            ["output(:resource_name, :output_name) { |r| ... }"],
            "An Halloumi resource output",
        ),
    );

    snippets.insert(
        "Halloumi_VirtualResource".to_owned(),
        SnippetEntry::new(
            "VirtualResource",
            [
                "# @!attribute [rw] virtual_resources",
                "# @return [Array<Halloumi::VirtualResource>] Virtual Resource",
                "resource :virtual_resources,",
                "         type: Halloumi::VirtualResource do |r|",
                "",
                "\tr.parameter { ... } # to be able to +Ref+ the value of a CloudFormation template parameter",
                "\tr.ref { ... } # to be able to imitate referencing a resource ",
                "\tr.property { ... } # to define properties on the virtual resource",
                "end",
            ],
            "An Halloumi virtual resource",
        ),
    );

    snippets
}
