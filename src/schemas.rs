use crate::{compilation::CompilationContext, keywords};
use serde_json::{Map, Value};

/// Supported drafts. The draft only changes how the required property set is
/// collected: draft 3 marks individual properties with `required: true`,
/// draft 4 lists names in a top-level `required` array.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum Draft {
    /// Draft 3 `required` semantics.
    Draft3,
    /// Draft 4 `required` semantics (the default).
    #[default]
    Draft4,
}

type CompileFunc =
    fn(&Map<String, Value>, &Value, &CompilationContext) -> Option<keywords::CompilationResult>;

/// The validator battery in dispatch order. Wrappers that may short-circuit
/// regardless of the instance's shape run first, shape checks precede
/// shape-dependent checks, and the recursive object and array checks run last.
/// `properties` stands for the whole object-keyword family (`required`,
/// `properties`, `patternProperties`, `additionalProperties`), which compiles
/// into a single validator.
pub(crate) const KEYWORD_ORDER: &[&str] = &[
    "not",
    "allOf",
    "anyOf",
    "dependencies",
    "type",
    "enum",
    "minimum",
    "maximum",
    "multipleOf",
    "minLength",
    "maxLength",
    "pattern",
    "format",
    "properties",
    "minProperties",
    "maxProperties",
    "items",
    "minItems",
    "maxItems",
    "uniqueItems",
];

impl Draft {
    pub(crate) fn get_validator(self, keyword: &str) -> Option<CompileFunc> {
        match keyword {
            "allOf" => Some(keywords::all_of::compile),
            "anyOf" => Some(keywords::any_of::compile),
            "dependencies" => Some(keywords::dependencies::compile),
            "enum" => Some(keywords::enum_::compile),
            "format" => Some(keywords::format::compile),
            "items" => Some(keywords::items::compile),
            "maxItems" => Some(keywords::max_items::compile),
            "maxLength" => Some(keywords::max_length::compile),
            "maxProperties" => Some(keywords::max_properties::compile),
            "maximum" => Some(keywords::maximum::compile),
            "minItems" => Some(keywords::min_items::compile),
            "minLength" => Some(keywords::min_length::compile),
            "minProperties" => Some(keywords::min_properties::compile),
            "minimum" => Some(keywords::minimum::compile),
            "multipleOf" => Some(keywords::multiple_of::compile),
            "not" => Some(keywords::not::compile),
            "pattern" => Some(keywords::pattern::compile),
            "type" => Some(keywords::type_::compile),
            "uniqueItems" => Some(keywords::unique_items::compile),
            _ => None,
        }
    }
}
