//! The object-keyword family: `required`, `properties`, `patternProperties`
//! and `additionalProperties` compile into one validator so their checks can
//! share a single walk over the instance's keys.

use super::{CompilationResult, Validate, Validators};
use crate::{
    compilation::{compile_validators, CompilationContext, Scope},
    error::{SchemaError, ValidationError, ValidationResult},
    schemas::Draft,
};
use regex::Regex;
use serde_json::{Map, Value};

enum AdditionalProperties {
    /// `true`, absent, or the empty schema: no check.
    Unrestricted,
    /// `false`: extra keys are rejected.
    Forbidden,
    /// A schema every extra key's value must satisfy.
    Schema(Validators),
}

pub struct PropertiesValidator {
    required: Vec<String>,
    properties: Vec<(String, Validators)>,
    patterns: Vec<(String, Regex, Validators)>,
    additional: AdditionalProperties,
}

/// Whether `object` carries any keyword of the family. In draft 3 `required`
/// is a boolean inside each property schema, so it triggers nothing on its
/// own.
pub(crate) fn applies(object: &Map<String, Value>, draft: Draft) -> bool {
    object.contains_key("properties")
        || object.contains_key("patternProperties")
        || object.contains_key("additionalProperties")
        || (draft == Draft::Draft4 && object.contains_key("required"))
}

impl PropertiesValidator {
    pub(crate) fn compile(
        parent: &Map<String, Value>,
        context: &CompilationContext,
    ) -> CompilationResult {
        let mut properties = Vec::new();
        if let Some(subschema) = parent.get("properties") {
            let map = match subschema.as_object() {
                Some(map) => map,
                None => return Err(SchemaError::keyword("properties")),
            };
            for (key, subschema) in map {
                properties.push((key.clone(), compile_validators(subschema, context)?));
            }
        }

        let required = match context.draft {
            Draft::Draft4 => match parent.get("required") {
                None => Vec::new(),
                Some(Value::Array(items)) => {
                    let mut required = Vec::with_capacity(items.len());
                    for item in items {
                        match item {
                            Value::String(name) => required.push(name.clone()),
                            _ => return Err(SchemaError::keyword("required")),
                        }
                    }
                    required
                }
                Some(_) => return Err(SchemaError::keyword("required")),
            },
            Draft::Draft3 => {
                let mut required = Vec::new();
                if let Some(Value::Object(map)) = parent.get("properties") {
                    for (key, subschema) in map {
                        if let Some(Value::Bool(true)) = subschema.get("required") {
                            required.push(key.clone());
                        }
                    }
                }
                required
            }
        };

        let mut patterns = Vec::new();
        if let Some(subschema) = parent.get("patternProperties") {
            let map = match subschema.as_object() {
                Some(map) => map,
                None => return Err(SchemaError::keyword("patternProperties")),
            };
            for (pattern, subschema) in map {
                let regex = Regex::new(pattern).map_err(|source| SchemaError::InvalidRegex {
                    keyword: "patternProperties",
                    pattern: pattern.clone(),
                    source,
                })?;
                patterns.push((
                    pattern.clone(),
                    regex,
                    compile_validators(subschema, context)?,
                ));
            }
        }

        let additional = match parent.get("additionalProperties") {
            None | Some(Value::Bool(true)) => AdditionalProperties::Unrestricted,
            Some(Value::Bool(false)) => AdditionalProperties::Forbidden,
            // The empty schema matches everything, same as `true`.
            Some(Value::Object(map)) if map.is_empty() => AdditionalProperties::Unrestricted,
            Some(subschema @ Value::Object(_)) => {
                AdditionalProperties::Schema(compile_validators(subschema, context)?)
            }
            Some(_) => return Err(SchemaError::keyword("additionalProperties")),
        };

        Ok(Box::new(PropertiesValidator {
            required,
            properties,
            patterns,
            additional,
        }))
    }

    fn is_declared(&self, key: &str) -> bool {
        self.properties.iter().any(|(name, _)| name == key)
    }

    fn is_extra(&self, key: &str) -> bool {
        !self.is_declared(key)
            && !self
                .patterns
                .iter()
                .any(|(_, regex, _)| regex.is_match(key))
    }
}

impl Validate for PropertiesValidator {
    fn validate<'a>(&self, scope: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        let item = match instance {
            Value::Object(item) => item,
            _ => return Ok(()),
        };

        let mut errors: Vec<(String, ValidationError<'a>)> = Vec::new();
        for name in &self.required {
            if !item.contains_key(name) {
                errors.push((name.clone(), ValidationError::missing_property()));
            }
        }
        for (name, validators) in &self.properties {
            if let Some(value) = item.get(name) {
                // A null value counts as absent; presence is enforced by the
                // required check above.
                if value.is_null() {
                    continue;
                }
                if let Err(error) = validators
                    .iter()
                    .try_for_each(|validator| validator.validate(scope, value))
                {
                    if error.is_fatal() {
                        return Err(error);
                    }
                    errors.push((name.clone(), error));
                }
            }
        }
        for (pattern, regex, validators) in &self.patterns {
            let mut failing = Vec::new();
            for (key, value) in item {
                if !regex.is_match(key) {
                    continue;
                }
                if let Err(error) = validators
                    .iter()
                    .try_for_each(|validator| validator.validate(scope, value))
                {
                    if error.is_fatal() {
                        return Err(error);
                    }
                    failing.push(key.clone());
                }
            }
            if !failing.is_empty() {
                errors.push((
                    pattern.clone(),
                    ValidationError::invalid_pattern_properties(pattern.clone(), failing),
                ));
            }
        }
        if !errors.is_empty() {
            return Err(ValidationError::properties(instance, errors));
        }

        match &self.additional {
            AdditionalProperties::Unrestricted => {}
            AdditionalProperties::Forbidden => {
                let extra: Vec<String> = item
                    .keys()
                    .filter(|key| self.is_extra(key))
                    .cloned()
                    .collect();
                if !extra.is_empty() {
                    return Err(ValidationError::additional_properties(extra));
                }
            }
            AdditionalProperties::Schema(validators) => {
                let mut invalid: Vec<(String, ValidationError<'a>)> = Vec::new();
                for (key, value) in item {
                    if !self.is_extra(key) {
                        continue;
                    }
                    if let Err(error) = validators
                        .iter()
                        .try_for_each(|validator| validator.validate(scope, value))
                    {
                        if error.is_fatal() {
                            return Err(error);
                        }
                        invalid.push((key.clone(), error));
                    }
                }
                if !invalid.is_empty() {
                    return Err(ValidationError::invalid_additional_properties(
                        instance, invalid,
                    ));
                }
            }
        }
        Ok(())
    }

    fn name(&self) -> String {
        format!(
            "<properties: {:?}, required: {:?}>",
            self.properties
                .iter()
                .map(|(name, _)| name.as_str())
                .collect::<Vec<&str>>(),
            self.required
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{tests_util, Draft, JsonSchema};
    use serde_json::json;

    #[test]
    fn declared_properties() {
        let schema = json!({"properties": {"a": {"type": "integer"}}});
        tests_util::is_valid(&schema, &json!({"a": 1}));
        tests_util::is_valid(&schema, &json!({"b": "anything"}));
        tests_util::is_not_valid(&schema, &json!({"a": "x"}));
        // Non-objects are not constrained.
        tests_util::is_valid(&schema, &json!(42));
    }

    #[test]
    fn null_value_counts_as_absent() {
        let schema = json!({"properties": {"a": {"type": "integer"}}});
        tests_util::is_valid(&schema, &json!({"a": null}));
    }

    #[test]
    fn required_with_missing_property() {
        let schema =
            json!({"type": "object", "required": ["a"], "properties": {"a": {"type": "string"}}});
        let error = tests_util::validate(&schema, &json!({}));
        assert_eq!(
            error.to_value(),
            json!({
                "error": "properties",
                "data": {},
                "properties": {"a": {"error": "missing-property"}}
            })
        );
    }

    #[test]
    fn required_present_but_null_passes_declared_check() {
        let schema = json!({"required": ["a"], "properties": {"a": {"type": "string"}}});
        tests_util::is_valid(&schema, &json!({"a": null}));
        tests_util::is_not_valid(&schema, &json!({}));
    }

    #[test]
    fn draft3_required_marker() {
        let schema = json!({"properties": {"a": {"type": "string", "required": true}}});
        let compiled = JsonSchema::options()
            .with_draft(Draft::Draft3)
            .compile(&schema)
            .unwrap();
        assert!(!compiled.is_valid(&json!({})));
        assert!(compiled.is_valid(&json!({"a": "x"})));
        // Draft 4 only accepts the array form.
        assert!(JsonSchema::compile(&schema).is_err());
    }

    #[test]
    fn pattern_properties() {
        let schema = json!({"patternProperties": {"^x-": {"type": "integer"}}});
        tests_util::is_valid(&schema, &json!({"x-a": 1, "other": "ok"}));
        let error = tests_util::validate(&schema, &json!({"x-a": "nope"}));
        assert_eq!(
            error.to_value(),
            json!({
                "error": "properties",
                "data": {"x-a": "nope"},
                "properties": {
                    "^x-": {
                        "error": "invalid-pattern-properties",
                        "pattern": "^x-",
                        "properties": ["x-a"]
                    }
                }
            })
        );
    }

    #[test]
    fn pattern_properties_apply_to_declared_keys_too() {
        let schema = json!({
            "properties": {"x-a": {"type": "string"}},
            "patternProperties": {"^x-": {"type": "string"}},
            "additionalProperties": false
        });
        tests_util::is_valid(&schema, &json!({"x-a": "ok", "x-b": "ok"}));
        tests_util::is_not_valid(&schema, &json!({"x-b": 1}));
    }

    #[test]
    fn additional_properties_false() {
        let schema = json!({"properties": {"a": {}}, "additionalProperties": false});
        tests_util::is_valid(&schema, &json!({"a": 1}));
        let error = tests_util::validate(&schema, &json!({"a": 1, "b": 2, "c": 3}));
        assert_eq!(
            error.to_value(),
            json!({"error": "additional-properties", "property-names": ["b", "c"]})
        );
    }

    #[test]
    fn additional_properties_schema() {
        let schema = json!({
            "type": "object",
            "properties": {"a": {"type": "integer"}},
            "additionalProperties": {"type": "string"}
        });
        tests_util::is_valid(&schema, &json!({"a": 1, "b": "ok"}));
        let error = tests_util::validate(&schema, &json!({"a": 1, "b": "ok", "c": 7}));
        assert_eq!(
            error.to_value(),
            json!({
                "error": "invalid-additional-properties",
                "data": {"a": 1, "b": "ok", "c": 7},
                "invalid-additional-properties": {
                    "c": {"error": "wrong-type", "expected": "string", "data": 7}
                }
            })
        );
    }

    #[test]
    fn empty_additional_properties_schema_is_a_noop() {
        let schema = json!({"properties": {"a": {}}, "additionalProperties": {}});
        tests_util::is_valid(&schema, &json!({"a": 1, "b": [true]}));
    }

    #[test]
    fn unresolvable_subschemas_are_fatal() {
        // A broken reference in any position aborts instead of turning into a
        // per-property failure.
        let schema = json!({"patternProperties": {"^x-": {"$ref": "#/definitions/missing"}}});
        let error = tests_util::validate(&schema, &json!({"x-a": 1}));
        assert_eq!(error.kind().discriminant(), "unresolvable-ref");

        let schema = json!({"additionalProperties": {"$ref": "#/definitions/missing"}});
        let error = tests_util::validate(&schema, &json!({"extra": 1}));
        assert_eq!(error.kind().discriminant(), "unresolvable-ref");

        let schema = json!({"properties": {"a": {"$ref": "#/definitions/missing"}}});
        let error = tests_util::validate(&schema, &json!({"a": 1}));
        assert_eq!(error.kind().discriminant(), "unresolvable-ref");
    }

    #[test]
    fn property_errors_come_before_additional_property_errors() {
        let schema = json!({
            "properties": {"a": {"type": "integer"}},
            "additionalProperties": false
        });
        let error = tests_util::validate(&schema, &json!({"a": "x", "b": 1}));
        assert_eq!(error.kind().discriminant(), "properties");
    }
}
