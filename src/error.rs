//! Error types.
//!
//! Validation failures are values: every check returns the first
//! [`ValidationError`] it finds and the caller decides what to do with it.
//! An error renders two ways: `Display` produces a human-readable one-liner,
//! [`ValidationError::to_value`] produces the machine-readable record tree
//! (a mapping with an `error` discriminant plus kind-specific payload fields).

use crate::primitive_type::PrimitiveType;
use serde_json::{json, Map, Value};
use std::{borrow::Cow, error, fmt};
use thiserror::Error;

/// The error type for defects in the schema itself, discovered while
/// compiling it into a validation tree.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A schema must be a JSON object.
    #[error("schema must be a JSON object")]
    NotAnObject,
    /// A `pattern` or `patternProperties` key failed to compile.
    #[error("invalid regular expression `{pattern}` in `{keyword}`")]
    InvalidRegex {
        /// The keyword carrying the pattern.
        keyword: &'static str,
        /// The offending pattern.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
    /// A recognized keyword carries a value of the wrong shape.
    #[error("malformed value for keyword `{keyword}`")]
    Keyword {
        /// The offending keyword.
        keyword: &'static str,
    },
}

impl SchemaError {
    pub(crate) fn keyword(keyword: &'static str) -> SchemaError {
        SchemaError::Keyword { keyword }
    }
}

/// An error that can occur during validation.
#[derive(Debug)]
pub struct ValidationError<'a> {
    instance: Cow<'a, Value>,
    kind: ValidationErrorKind<'a>,
}

/// Validators return the first failing check; `Ok(())` means the instance
/// conforms.
pub type ValidationResult<'a> = Result<(), ValidationError<'a>>;

/// Which end of a numeric range was violated.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Bound {
    /// The `minimum` keyword.
    Minimum,
    /// The `maximum` keyword.
    Maximum,
}

impl Bound {
    fn as_str(self) -> &'static str {
        match self {
            Bound::Minimum => "minimum",
            Bound::Maximum => "maximum",
        }
    }
}

/// Expected type(s) carried by a `wrong-type` error.
#[derive(Debug)]
pub enum TypeKind {
    /// A single type tag.
    Single(PrimitiveType),
    /// A sequence of type tags; the instance matched none of them.
    Multiple(Vec<PrimitiveType>),
}

/// Kinds of errors that may happen during validation.
#[derive(Debug)]
pub enum ValidationErrorKind<'a> {
    /// The instance doesn't match the expected type(s).
    WrongType {
        /// The expected type tag or set of tags.
        expected: TypeKind,
    },
    /// The instance doesn't match any of the allowed values.
    Enum {
        /// The allowed values.
        options: Value,
    },
    /// A numeric bound was violated.
    OutOfBounds {
        /// The bound value.
        limit: f64,
        /// Which bound.
        bound: Bound,
        /// Whether the bound is strict.
        exclusive: bool,
    },
    /// The instance is not a multiple of the divisor.
    NotMultipleOf {
        /// The divisor.
        multiple_of: f64,
    },
    /// The string has fewer code points than `minLength`.
    StringTooShort {
        /// The minimum length.
        limit: u64,
    },
    /// The string has more code points than `maxLength`.
    StringTooLong {
        /// The maximum length.
        limit: u64,
    },
    /// The string doesn't match the pattern.
    PatternMismatch {
        /// The pattern.
        pattern: String,
    },
    /// The string doesn't conform to the named format.
    WrongFormat {
        /// The format name.
        format: String,
    },
    /// A required property is missing; reported under the property's name
    /// inside a `properties` error.
    MissingProperty,
    /// One or more properties failed validation; the payload maps each
    /// failing name (or pattern) to its error.
    Properties {
        /// Per-key errors, in schema declaration order.
        properties: Vec<(String, ValidationError<'a>)>,
    },
    /// Values of keys matching a `patternProperties` regex failed validation.
    InvalidPatternProperties {
        /// The pattern.
        pattern: String,
        /// Names of the failing keys.
        properties: Vec<String>,
    },
    /// Extra properties are present although `additionalProperties` is
    /// `false`.
    AdditionalProperties {
        /// The extra keys.
        property_names: Vec<String>,
    },
    /// Extra properties failed the `additionalProperties` schema.
    InvalidAdditionalProperties {
        /// Per-key errors for the failing extras.
        properties: Vec<(String, ValidationError<'a>)>,
    },
    /// Not enough properties in an object.
    TooFewProperties {
        /// The `minProperties` limit.
        limit: u64,
    },
    /// Too many properties in an object.
    TooManyProperties {
        /// The `maxProperties` limit.
        limit: u64,
    },
    /// One or more array elements failed the `items` schema.
    ArrayItems {
        /// Per-index errors, in element order.
        items: Vec<(usize, ValidationError<'a>)>,
    },
    /// The array length is outside `minItems`/`maxItems`.
    WrongNumberOfElements {
        /// The `minItems` limit, when that bound was violated.
        minimum: Option<u64>,
        /// The `maxItems` limit, when that bound was violated.
        maximum: Option<u64>,
        /// The actual number of elements.
        actual: u64,
    },
    /// The array has non-unique elements.
    DuplicateItems {
        /// The set of duplicated values.
        duplicates: Vec<Value>,
    },
    /// A `dependencies` entry was violated.
    DependencyMismatch {
        /// The property the dependency hangs off.
        property: String,
        /// The dependency as written in the schema (a name list or a schema).
        dependency: Value,
    },
    /// The instance failed at least one `allOf` branch.
    AllOf {
        /// The `allOf` schemas.
        schemas: Value,
    },
    /// The instance failed every `anyOf` branch.
    AnyOf {
        /// The `anyOf` schemas.
        schemas: Value,
    },
    /// The instance matched a `not` schema.
    ShouldNotMatch {
        /// The negated schema.
        schema: Value,
    },
    /// A `$ref` could not be resolved. This is the only fatal kind: without a
    /// schema there is nothing to validate against.
    UnresolvableRef {
        /// The reference as written in the schema.
        reference: String,
    },
}

impl ValidationErrorKind<'_> {
    /// The kebab-case discriminant stored in the `error` field of the
    /// machine-readable record.
    #[must_use]
    pub fn discriminant(&self) -> &'static str {
        match self {
            ValidationErrorKind::WrongType { .. } => "wrong-type",
            ValidationErrorKind::Enum { .. } => "invalid-enum-value",
            ValidationErrorKind::OutOfBounds { .. } => "out-of-bounds",
            ValidationErrorKind::NotMultipleOf { .. } => "not-multiple-of",
            ValidationErrorKind::StringTooShort { .. } => "string-too-short",
            ValidationErrorKind::StringTooLong { .. } => "string-too-long",
            ValidationErrorKind::PatternMismatch { .. } => "string-does-not-match-pattern",
            ValidationErrorKind::WrongFormat { .. } => "wrong-format",
            ValidationErrorKind::MissingProperty => "missing-property",
            ValidationErrorKind::Properties { .. } => "properties",
            ValidationErrorKind::InvalidPatternProperties { .. } => "invalid-pattern-properties",
            ValidationErrorKind::AdditionalProperties { .. } => "additional-properties",
            ValidationErrorKind::InvalidAdditionalProperties { .. } => {
                "invalid-additional-properties"
            }
            ValidationErrorKind::TooFewProperties { .. } => "too-few-properties",
            ValidationErrorKind::TooManyProperties { .. } => "too-many-properties",
            ValidationErrorKind::ArrayItems { .. } => "array-items",
            ValidationErrorKind::WrongNumberOfElements { .. } => "wrong-number-of-elements",
            ValidationErrorKind::DuplicateItems { .. } => "duplicate-items-not-allowed",
            ValidationErrorKind::DependencyMismatch { .. } => "dependency-mismatch",
            ValidationErrorKind::AllOf { .. } => "does-not-match-all-of",
            ValidationErrorKind::AnyOf { .. } => "does-not-match-any-of",
            ValidationErrorKind::ShouldNotMatch { .. } => "should-not-match",
            ValidationErrorKind::UnresolvableRef { .. } => "unresolvable-ref",
        }
    }

    fn into_owned(self) -> ValidationErrorKind<'static> {
        match self {
            ValidationErrorKind::Properties { properties } => ValidationErrorKind::Properties {
                properties: properties
                    .into_iter()
                    .map(|(key, error)| (key, error.into_owned()))
                    .collect(),
            },
            ValidationErrorKind::InvalidAdditionalProperties { properties } => {
                ValidationErrorKind::InvalidAdditionalProperties {
                    properties: properties
                        .into_iter()
                        .map(|(key, error)| (key, error.into_owned()))
                        .collect(),
                }
            }
            ValidationErrorKind::ArrayItems { items } => ValidationErrorKind::ArrayItems {
                items: items
                    .into_iter()
                    .map(|(position, error)| (position, error.into_owned()))
                    .collect(),
            },
            ValidationErrorKind::WrongType { expected } => {
                ValidationErrorKind::WrongType { expected }
            }
            ValidationErrorKind::Enum { options } => ValidationErrorKind::Enum { options },
            ValidationErrorKind::OutOfBounds {
                limit,
                bound,
                exclusive,
            } => ValidationErrorKind::OutOfBounds {
                limit,
                bound,
                exclusive,
            },
            ValidationErrorKind::NotMultipleOf { multiple_of } => {
                ValidationErrorKind::NotMultipleOf { multiple_of }
            }
            ValidationErrorKind::StringTooShort { limit } => {
                ValidationErrorKind::StringTooShort { limit }
            }
            ValidationErrorKind::StringTooLong { limit } => {
                ValidationErrorKind::StringTooLong { limit }
            }
            ValidationErrorKind::PatternMismatch { pattern } => {
                ValidationErrorKind::PatternMismatch { pattern }
            }
            ValidationErrorKind::WrongFormat { format } => {
                ValidationErrorKind::WrongFormat { format }
            }
            ValidationErrorKind::MissingProperty => ValidationErrorKind::MissingProperty,
            ValidationErrorKind::InvalidPatternProperties {
                pattern,
                properties,
            } => ValidationErrorKind::InvalidPatternProperties {
                pattern,
                properties,
            },
            ValidationErrorKind::AdditionalProperties { property_names } => {
                ValidationErrorKind::AdditionalProperties { property_names }
            }
            ValidationErrorKind::TooFewProperties { limit } => {
                ValidationErrorKind::TooFewProperties { limit }
            }
            ValidationErrorKind::TooManyProperties { limit } => {
                ValidationErrorKind::TooManyProperties { limit }
            }
            ValidationErrorKind::WrongNumberOfElements {
                minimum,
                maximum,
                actual,
            } => ValidationErrorKind::WrongNumberOfElements {
                minimum,
                maximum,
                actual,
            },
            ValidationErrorKind::DuplicateItems { duplicates } => {
                ValidationErrorKind::DuplicateItems { duplicates }
            }
            ValidationErrorKind::DependencyMismatch {
                property,
                dependency,
            } => ValidationErrorKind::DependencyMismatch {
                property,
                dependency,
            },
            ValidationErrorKind::AllOf { schemas } => ValidationErrorKind::AllOf { schemas },
            ValidationErrorKind::AnyOf { schemas } => ValidationErrorKind::AnyOf { schemas },
            ValidationErrorKind::ShouldNotMatch { schema } => {
                ValidationErrorKind::ShouldNotMatch { schema }
            }
            ValidationErrorKind::UnresolvableRef { reference } => {
                ValidationErrorKind::UnresolvableRef { reference }
            }
        }
    }
}

impl<'a> ValidationError<'a> {
    /// The kind of this error.
    #[must_use]
    pub fn kind(&self) -> &ValidationErrorKind<'a> {
        &self.kind
    }

    /// Whether this error aborts validation. An unresolved reference leaves
    /// the engine without a schema to check against, so it can never be
    /// treated as an ordinary failed check (a `not` must not flip it into a
    /// success, an `anyOf` must not try another branch past it).
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind, ValidationErrorKind::UnresolvableRef { .. })
    }

    /// The instance (or instance fragment) the error is about.
    #[must_use]
    pub fn instance(&self) -> &Value {
        self.instance.as_ref()
    }

    /// Detach the error from the validated instance.
    #[must_use]
    pub fn into_owned(self) -> ValidationError<'static> {
        ValidationError {
            instance: Cow::Owned(self.instance.into_owned()),
            kind: self.kind.into_owned(),
        }
    }

    /// Render the machine-readable error record: a mapping with the `error`
    /// discriminant, kind-specific payload fields, and the offending data
    /// where the kind carries it. Nested errors (`properties`, `array-items`,
    /// `invalid-additional-properties`) render recursively.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut record = Map::new();
        record.insert(
            "error".to_string(),
            Value::String(self.kind.discriminant().to_string()),
        );
        let with_data = match &self.kind {
            ValidationErrorKind::WrongType { expected } => {
                let expected = match expected {
                    TypeKind::Single(single) => json!(single.to_string()),
                    TypeKind::Multiple(multiple) => json!(multiple
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<String>>()),
                };
                record.insert("expected".to_string(), expected);
                true
            }
            ValidationErrorKind::Enum { options } => {
                record.insert("enum".to_string(), options.clone());
                true
            }
            ValidationErrorKind::OutOfBounds {
                limit,
                bound,
                exclusive,
            } => {
                record.insert(bound.as_str().to_string(), json!(limit));
                record.insert("exclusive".to_string(), json!(exclusive));
                true
            }
            ValidationErrorKind::NotMultipleOf { multiple_of } => {
                record.insert("expected-multiple-of".to_string(), json!(multiple_of));
                true
            }
            ValidationErrorKind::StringTooShort { limit } => {
                record.insert("min-length".to_string(), json!(limit));
                true
            }
            ValidationErrorKind::StringTooLong { limit } => {
                record.insert("max-length".to_string(), json!(limit));
                true
            }
            ValidationErrorKind::PatternMismatch { pattern } => {
                record.insert("pattern".to_string(), json!(pattern));
                true
            }
            ValidationErrorKind::WrongFormat { format } => {
                record.insert("format".to_string(), json!(format));
                true
            }
            ValidationErrorKind::MissingProperty => false,
            ValidationErrorKind::Properties { properties } => {
                record.insert(
                    "properties".to_string(),
                    Value::Object(
                        properties
                            .iter()
                            .map(|(key, error)| (key.clone(), error.to_value()))
                            .collect(),
                    ),
                );
                true
            }
            ValidationErrorKind::InvalidPatternProperties {
                pattern,
                properties,
            } => {
                record.insert("pattern".to_string(), json!(pattern));
                record.insert("properties".to_string(), json!(properties));
                false
            }
            ValidationErrorKind::AdditionalProperties { property_names } => {
                record.insert("property-names".to_string(), json!(property_names));
                false
            }
            ValidationErrorKind::InvalidAdditionalProperties { properties } => {
                record.insert(
                    "invalid-additional-properties".to_string(),
                    Value::Object(
                        properties
                            .iter()
                            .map(|(key, error)| (key.clone(), error.to_value()))
                            .collect(),
                    ),
                );
                true
            }
            ValidationErrorKind::TooFewProperties { limit } => {
                record.insert("minimum".to_string(), json!(limit));
                true
            }
            ValidationErrorKind::TooManyProperties { limit } => {
                record.insert("maximum".to_string(), json!(limit));
                true
            }
            ValidationErrorKind::ArrayItems { items } => {
                record.insert(
                    "items".to_string(),
                    Value::Array(
                        items
                            .iter()
                            .map(|(position, error)| {
                                let mut item = error.to_value();
                                if let Value::Object(map) = &mut item {
                                    map.insert("position".to_string(), json!(position));
                                }
                                item
                            })
                            .collect(),
                    ),
                );
                true
            }
            ValidationErrorKind::WrongNumberOfElements {
                minimum,
                maximum,
                actual,
            } => {
                if let Some(minimum) = minimum {
                    record.insert("minimum".to_string(), json!(minimum));
                }
                if let Some(maximum) = maximum {
                    record.insert("maximum".to_string(), json!(maximum));
                }
                record.insert("actual".to_string(), json!(actual));
                true
            }
            ValidationErrorKind::DuplicateItems { duplicates } => {
                record.insert("duplicates".to_string(), json!(duplicates));
                false
            }
            ValidationErrorKind::DependencyMismatch {
                property,
                dependency,
            } => {
                let mut entry = Map::new();
                entry.insert(property.clone(), dependency.clone());
                record.insert("dependency".to_string(), Value::Object(entry));
                true
            }
            ValidationErrorKind::AllOf { schemas } | ValidationErrorKind::AnyOf { schemas } => {
                record.insert("schemas".to_string(), schemas.clone());
                true
            }
            ValidationErrorKind::ShouldNotMatch { schema } => {
                record.insert("schema".to_string(), schema.clone());
                true
            }
            ValidationErrorKind::UnresolvableRef { reference } => {
                record.insert("ref".to_string(), json!(reference));
                false
            }
        };
        if with_data {
            record.insert("data".to_string(), self.instance.as_ref().clone());
        }
        Value::Object(record)
    }
}

/// Shortcuts for creation of specific error kinds.
impl<'a> ValidationError<'a> {
    pub(crate) fn single_type_error(
        instance: &'a Value,
        type_name: PrimitiveType,
    ) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::WrongType {
                expected: TypeKind::Single(type_name),
            },
        }
    }
    pub(crate) fn multiple_type_error(
        instance: &'a Value,
        types: Vec<PrimitiveType>,
    ) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::WrongType {
                expected: TypeKind::Multiple(types),
            },
        }
    }
    pub(crate) fn enumeration(instance: &'a Value, options: &Value) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Enum {
                options: options.clone(),
            },
        }
    }
    pub(crate) fn out_of_bounds(
        instance: &'a Value,
        limit: f64,
        bound: Bound,
        exclusive: bool,
    ) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::OutOfBounds {
                limit,
                bound,
                exclusive,
            },
        }
    }
    pub(crate) fn not_multiple_of(instance: &'a Value, multiple_of: f64) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::NotMultipleOf { multiple_of },
        }
    }
    pub(crate) fn string_too_short(instance: &'a Value, limit: u64) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::StringTooShort { limit },
        }
    }
    pub(crate) fn string_too_long(instance: &'a Value, limit: u64) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::StringTooLong { limit },
        }
    }
    pub(crate) fn pattern_mismatch(instance: &'a Value, pattern: String) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::PatternMismatch { pattern },
        }
    }
    pub(crate) fn wrong_format(instance: &'a Value, format: String) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::WrongFormat { format },
        }
    }
    pub(crate) fn missing_property() -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Owned(Value::Null),
            kind: ValidationErrorKind::MissingProperty,
        }
    }
    pub(crate) fn properties(
        instance: &'a Value,
        properties: Vec<(String, ValidationError<'a>)>,
    ) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Properties { properties },
        }
    }
    pub(crate) fn invalid_pattern_properties(
        pattern: String,
        properties: Vec<String>,
    ) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Owned(Value::Null),
            kind: ValidationErrorKind::InvalidPatternProperties {
                pattern,
                properties,
            },
        }
    }
    pub(crate) fn additional_properties(property_names: Vec<String>) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Owned(Value::Null),
            kind: ValidationErrorKind::AdditionalProperties { property_names },
        }
    }
    pub(crate) fn invalid_additional_properties(
        instance: &'a Value,
        properties: Vec<(String, ValidationError<'a>)>,
    ) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::InvalidAdditionalProperties { properties },
        }
    }
    pub(crate) fn too_few_properties(instance: &'a Value, limit: u64) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::TooFewProperties { limit },
        }
    }
    pub(crate) fn too_many_properties(instance: &'a Value, limit: u64) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::TooManyProperties { limit },
        }
    }
    pub(crate) fn array_items(
        instance: &'a Value,
        items: Vec<(usize, ValidationError<'a>)>,
    ) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::ArrayItems { items },
        }
    }
    pub(crate) fn min_items(instance: &'a Value, limit: u64, actual: u64) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::WrongNumberOfElements {
                minimum: Some(limit),
                maximum: None,
                actual,
            },
        }
    }
    pub(crate) fn max_items(instance: &'a Value, limit: u64, actual: u64) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::WrongNumberOfElements {
                minimum: None,
                maximum: Some(limit),
                actual,
            },
        }
    }
    pub(crate) fn duplicate_items(
        instance: &'a Value,
        duplicates: Vec<Value>,
    ) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::DuplicateItems { duplicates },
        }
    }
    pub(crate) fn dependency_mismatch(
        instance: &'a Value,
        property: String,
        dependency: Value,
    ) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::DependencyMismatch {
                property,
                dependency,
            },
        }
    }
    pub(crate) fn all_of(instance: &'a Value, schemas: Value) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::AllOf { schemas },
        }
    }
    pub(crate) fn any_of(instance: &'a Value, schemas: Value) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::AnyOf { schemas },
        }
    }
    pub(crate) fn should_not_match(instance: &'a Value, schema: Value) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::ShouldNotMatch { schema },
        }
    }
    pub(crate) fn unresolvable_ref(reference: String) -> ValidationError<'static> {
        ValidationError {
            instance: Cow::Owned(Value::Null),
            kind: ValidationErrorKind::UnresolvableRef { reference },
        }
    }
}

impl error::Error for ValidationError<'_> {}

/// Textual representation of various validation errors.
impl fmt::Display for ValidationError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValidationErrorKind::WrongType {
                expected: TypeKind::Single(type_),
            } => write!(f, "'{}' is not of type '{}'", self.instance, type_),
            ValidationErrorKind::WrongType {
                expected: TypeKind::Multiple(types),
            } => write!(
                f,
                "'{}' is not of types {}",
                self.instance,
                types
                    .iter()
                    .map(|t| format!("'{}'", t))
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
            ValidationErrorKind::Enum { options } => {
                write!(f, "'{}' is not one of '{}'", self.instance, options)
            }
            ValidationErrorKind::OutOfBounds {
                limit,
                bound: Bound::Minimum,
                exclusive,
            } => write!(
                f,
                "{} is less than {}the minimum of {}",
                self.instance,
                if *exclusive { "or equal to " } else { "" },
                limit
            ),
            ValidationErrorKind::OutOfBounds {
                limit,
                bound: Bound::Maximum,
                exclusive,
            } => write!(
                f,
                "{} is greater than {}the maximum of {}",
                self.instance,
                if *exclusive { "or equal to " } else { "" },
                limit
            ),
            ValidationErrorKind::NotMultipleOf { multiple_of } => {
                write!(f, "{} is not a multiple of {}", self.instance, multiple_of)
            }
            ValidationErrorKind::StringTooShort { limit } => write!(
                f,
                "'{}' is shorter than {} character{}",
                self.instance,
                limit,
                if *limit == 1 { "" } else { "s" }
            ),
            ValidationErrorKind::StringTooLong { limit } => write!(
                f,
                "'{}' is longer than {} character{}",
                self.instance,
                limit,
                if *limit == 1 { "" } else { "s" }
            ),
            ValidationErrorKind::PatternMismatch { pattern } => {
                write!(f, "'{}' does not match '{}'", self.instance, pattern)
            }
            ValidationErrorKind::WrongFormat { format } => {
                write!(f, "'{}' is not a '{}'", self.instance, format)
            }
            ValidationErrorKind::MissingProperty => write!(f, "required property is missing"),
            ValidationErrorKind::Properties { properties } => write!(
                f,
                "{} has invalid properties: {}",
                self.instance,
                properties
                    .iter()
                    .map(|(key, _)| format!("'{}'", key))
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
            ValidationErrorKind::InvalidPatternProperties {
                pattern,
                properties,
            } => write!(
                f,
                "properties {} do not match pattern '{}'",
                properties
                    .iter()
                    .map(|key| format!("'{}'", key))
                    .collect::<Vec<String>>()
                    .join(", "),
                pattern
            ),
            ValidationErrorKind::AdditionalProperties { property_names } => write!(
                f,
                "additional properties are not allowed ({} {} unexpected)",
                property_names
                    .iter()
                    .map(|key| format!("'{}'", key))
                    .collect::<Vec<String>>()
                    .join(", "),
                if property_names.len() == 1 {
                    "was"
                } else {
                    "were"
                }
            ),
            ValidationErrorKind::InvalidAdditionalProperties { properties } => write!(
                f,
                "additional properties {} are invalid",
                properties
                    .iter()
                    .map(|(key, _)| format!("'{}'", key))
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
            ValidationErrorKind::TooFewProperties { limit } => write!(
                f,
                "{} has less than {} propert{}",
                self.instance,
                limit,
                if *limit == 1 { "y" } else { "ies" }
            ),
            ValidationErrorKind::TooManyProperties { limit } => write!(
                f,
                "{} has more than {} propert{}",
                self.instance,
                limit,
                if *limit == 1 { "y" } else { "ies" }
            ),
            ValidationErrorKind::ArrayItems { items } => write!(
                f,
                "{} has invalid items at position{} {}",
                self.instance,
                if items.len() == 1 { "" } else { "s" },
                items
                    .iter()
                    .map(|(position, _)| position.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
            ValidationErrorKind::WrongNumberOfElements {
                minimum: Some(limit),
                ..
            } => write!(
                f,
                "{} has less than {} item{}",
                self.instance,
                limit,
                if *limit == 1 { "" } else { "s" }
            ),
            ValidationErrorKind::WrongNumberOfElements {
                maximum: Some(limit),
                ..
            } => write!(
                f,
                "{} has more than {} item{}",
                self.instance,
                limit,
                if *limit == 1 { "" } else { "s" }
            ),
            ValidationErrorKind::WrongNumberOfElements { actual, .. } => {
                write!(f, "{} has a wrong number of items ({})", self.instance, actual)
            }
            ValidationErrorKind::DuplicateItems { .. } => {
                write!(f, "'{}' has non-unique elements", self.instance)
            }
            ValidationErrorKind::DependencyMismatch { property, .. } => {
                write!(f, "dependency of '{}' is not satisfied", property)
            }
            ValidationErrorKind::AllOf { .. } => write!(
                f,
                "'{}' is not valid under all of the given schemas",
                self.instance
            ),
            ValidationErrorKind::AnyOf { .. } => write!(
                f,
                "'{}' is not valid under any of the given schemas",
                self.instance
            ),
            ValidationErrorKind::ShouldNotMatch { schema } => {
                write!(f, "{} is not allowed for {}", schema, self.instance)
            }
            ValidationErrorKind::UnresolvableRef { reference } => {
                write!(f, "unresolvable reference: {}", reference)
            }
        }
    }
}
