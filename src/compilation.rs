//! Schema compilation.
//! The main idea is to compile the input JSON Schema to a validators tree that
//! will contain everything needed to perform such validation in runtime.

use crate::{
    error::{SchemaError, ValidationResult},
    keywords,
    keywords::Validators,
    resolver::{FileResolver, ResolveRef},
    schemas::{Draft, KEYWORD_ORDER},
};
use chrono::DateTime;
use serde_json::Value;

/// Check used by `format: "date-time"`: returns whether the string parses as
/// a date-time.
pub type DateTimeCheck = fn(&str) -> bool;

fn rfc3339_date_time(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
}

/// Stores the validators tree and runs validation on input documents.
pub struct JsonSchema<'a> {
    draft: Draft,
    root: &'a Value,
    resolver: Box<dyn ResolveRef>,
    datetime: DateTimeCheck,
    pub(crate) validators: Validators,
}

impl<'a> JsonSchema<'a> {
    /// Return default [`CompileOptions`] that can configure the compilation
    /// flow, e.g. select draft 3 `required` semantics or inject a custom
    /// external schema resolver.
    ///
    /// ```rust
    /// # use jsonvalid::{Draft, JsonSchema};
    /// # let schema = serde_json::json!({});
    /// let compiled = JsonSchema::options()
    ///     .with_draft(Draft::Draft3)
    ///     .compile(&schema);
    /// ```
    #[must_use]
    pub fn options() -> CompileOptions<'static> {
        CompileOptions::default()
    }

    /// Compile the input schema into a validation tree with default options.
    pub fn compile(schema: &'a Value) -> Result<JsonSchema<'a>, SchemaError> {
        Self::options().compile(schema)
    }

    /// Run validation against `instance` and return the first failing check,
    /// or `Ok(())` if the instance conforms.
    pub fn validate<'i>(&self, instance: &'i Value) -> ValidationResult<'i> {
        let scope = self.scope();
        for validator in &self.validators {
            validator.validate(&scope, instance)?;
        }
        Ok(())
    }

    /// Run validation against `instance` but return a boolean result instead
    /// of an error value. It is faster when only the fact of validity matters,
    /// since leaf checks skip error construction. Validation that aborts on an
    /// unresolvable reference reports `false`.
    #[must_use]
    pub fn is_valid(&self, instance: &Value) -> bool {
        let scope = self.scope();
        self.validators
            .iter()
            .all(|validator| validator.is_valid(&scope, instance))
    }

    fn scope(&self) -> Scope<'_> {
        Scope {
            root: self.root,
            resolver: self.resolver.as_ref(),
            draft: self.draft,
            datetime: self.datetime,
            ref_depth: 0,
        }
    }
}

/// Compilation configuration: the draft switch, the injected capabilities
/// (external schema fetcher, date-time parser) and an optional root document
/// for pointer resolution.
pub struct CompileOptions<'r> {
    draft: Draft,
    resolver: Box<dyn ResolveRef>,
    datetime: DateTimeCheck,
    root: Option<&'r Value>,
}

impl Default for CompileOptions<'_> {
    fn default() -> Self {
        CompileOptions {
            draft: Draft::default(),
            resolver: Box::new(FileResolver),
            datetime: rfc3339_date_time,
            root: None,
        }
    }
}

impl<'r> CompileOptions<'r> {
    /// Select draft 3 or draft 4 `required` semantics.
    #[must_use]
    pub fn with_draft(mut self, draft: Draft) -> Self {
        self.draft = draft;
        self
    }

    /// Override the external schema fetcher used for URI references.
    #[must_use]
    pub fn with_resolver(mut self, resolver: impl ResolveRef + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Override the `date-time` format check.
    #[must_use]
    pub fn with_datetime_check(mut self, check: DateTimeCheck) -> Self {
        self.datetime = check;
        self
    }

    /// Resolve `#`-anchored pointers against `root` instead of the compiled
    /// schema itself. Useful when the schema is a fragment of a larger
    /// document.
    #[must_use]
    pub fn with_root_schema<'n>(self, root: &'n Value) -> CompileOptions<'n>
    where
        'r: 'n,
    {
        CompileOptions {
            draft: self.draft,
            resolver: self.resolver,
            datetime: self.datetime,
            root: Some(root),
        }
    }

    /// Compile `schema` into a validation tree. Unless overridden with
    /// [`CompileOptions::with_root_schema`], the schema document becomes the
    /// root that `#`-anchored pointers resolve against.
    pub fn compile<'a>(self, schema: &'a Value) -> Result<JsonSchema<'a>, SchemaError>
    where
        'r: 'a,
    {
        let context = CompilationContext::new(self.draft, self.datetime);
        let validators = compile_validators(schema, &context)?;
        Ok(JsonSchema {
            draft: self.draft,
            root: self.root.unwrap_or(schema),
            resolver: self.resolver,
            datetime: self.datetime,
            validators,
        })
    }
}

/// Everything a validator can reach during one validation call: the root
/// document that `#`-anchored pointers resolve against, the injected
/// capabilities and the current ref-chasing depth. Following a reference into
/// a remote document rebinds `root` to that document.
#[derive(Clone, Copy)]
pub struct Scope<'s> {
    pub(crate) root: &'s Value,
    pub(crate) resolver: &'s dyn ResolveRef,
    pub(crate) draft: Draft,
    pub(crate) datetime: DateTimeCheck,
    pub(crate) ref_depth: usize,
}

impl<'s> Scope<'s> {
    pub(crate) fn descend(&self) -> Scope<'s> {
        Scope {
            ref_depth: self.ref_depth + 1,
            ..*self
        }
    }

    pub(crate) fn rebind<'t>(&self, root: &'t Value) -> Scope<'t>
    where
        's: 't,
    {
        Scope {
            root,
            resolver: self.resolver,
            draft: self.draft,
            datetime: self.datetime,
            ref_depth: self.ref_depth + 1,
        }
    }

    pub(crate) fn context(&self) -> CompilationContext {
        CompilationContext::new(self.draft, self.datetime)
    }
}

/// Context holds the configuration that keyword compilation depends on.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CompilationContext {
    pub(crate) draft: Draft,
    pub(crate) datetime: DateTimeCheck,
}

impl CompilationContext {
    pub(crate) fn new(draft: Draft, datetime: DateTimeCheck) -> Self {
        CompilationContext { draft, datetime }
    }
}

/// Compile JSON schema into a tree of validators, ordered by the dispatch
/// battery.
pub(crate) fn compile_validators(
    schema: &Value,
    context: &CompilationContext,
) -> Result<Validators, SchemaError> {
    let object = match schema {
        Value::Object(object) => object,
        _ => return Err(SchemaError::NotAnObject),
    };
    if let Some(reference) = object.get("$ref") {
        // A `$ref` isolates the node; whatever else it carries is left for the
        // referent to define.
        return match reference {
            Value::String(reference) => Ok(vec![keywords::ref_::RefValidator::compile(reference)?]),
            _ => Err(SchemaError::keyword("$ref")),
        };
    }
    let mut validators = Vec::with_capacity(object.len());
    for &keyword in KEYWORD_ORDER {
        if keyword == "properties" {
            // The object-keyword family compiles into a single validator so
            // its checks can share one property walk.
            if keywords::properties::applies(object, context.draft) {
                validators.push(keywords::properties::PropertiesValidator::compile(object, context)?);
            }
            continue;
        }
        if let Some(subschema) = object.get(keyword) {
            if let Some(compile_fn) = context.draft.get_validator(keyword) {
                if let Some(validator) = compile_fn(object, subschema, context) {
                    validators.push(validator?);
                }
            }
        }
    }
    Ok(validators)
}

#[cfg(test)]
mod tests {
    use super::JsonSchema;
    use crate::error::ValidationErrorKind;
    use serde_json::json;

    #[test]
    fn only_keyword() {
        // When only one keyword is specified
        let schema = json!({"type": "string"});
        let compiled = JsonSchema::compile(&schema).unwrap();
        let value1 = json!("AB");
        let value2 = json!(1);
        // And only this validator
        assert_eq!(compiled.validators.len(), 1);
        assert!(compiled.validate(&value1).is_ok());
        assert!(compiled.validate(&value2).is_err())
    }

    #[test]
    fn unknown_keywords_are_ignored() {
        let schema = json!({"definitions": {"a": 1}, "title": "x"});
        let compiled = JsonSchema::compile(&schema).unwrap();
        assert!(compiled.validators.is_empty());
        assert!(compiled.validate(&json!([1, 2, 3])).is_ok());
    }

    #[test]
    fn wrong_schema_type() {
        let schema = json!([1]);
        assert!(JsonSchema::compile(&schema).is_err());
    }

    #[test]
    fn combinators_run_before_shape_checks() {
        // `not` precedes `type` in the battery, so it reports first even
        // though the keyword appears later in the document.
        let schema = json!({"type": "string", "not": {"type": "integer"}});
        let compiled = JsonSchema::compile(&schema).unwrap();
        let instance = json!(5);
        let error = compiled.validate(&instance).unwrap_err();
        assert!(matches!(
            error.kind(),
            ValidationErrorKind::ShouldNotMatch { .. }
        ));
    }

    #[test]
    fn first_error_wins() {
        let schema = json!({"minLength": 5, "pattern": "^a"});
        let compiled = JsonSchema::compile(&schema).unwrap();
        let instance = json!("xyz");
        let error = compiled.validate(&instance).unwrap_err();
        assert!(matches!(
            error.kind(),
            ValidationErrorKind::StringTooShort { limit: 5 }
        ));
    }
}
