use super::{CompilationResult, Validate, Validators};
use crate::{
    compilation::{compile_validators, CompilationContext, Scope},
    error::{SchemaError, ValidationError, ValidationResult},
};
use serde_json::{Map, Value};

enum Dependency {
    /// Names that must also be present when the property is.
    Names(Vec<String>),
    /// A schema the whole instance must satisfy when the property is present.
    Schema(Validators),
}

pub struct DependenciesValidator {
    dependencies: Vec<(String, Value, Dependency)>,
}

impl DependenciesValidator {
    pub(crate) fn compile(schema: &Value, context: &CompilationContext) -> CompilationResult {
        let map = match schema.as_object() {
            Some(map) => map,
            None => return Err(SchemaError::keyword("dependencies")),
        };
        let mut dependencies = Vec::with_capacity(map.len());
        for (key, subschema) in map {
            let dependency = match subschema {
                Value::Array(items) => {
                    let mut names = Vec::with_capacity(items.len());
                    for item in items {
                        match item {
                            Value::String(name) => names.push(name.clone()),
                            _ => return Err(SchemaError::keyword("dependencies")),
                        }
                    }
                    Dependency::Names(names)
                }
                // Draft 3 allows a single name.
                Value::String(name) => Dependency::Names(vec![name.clone()]),
                Value::Object(_) => Dependency::Schema(compile_validators(subschema, context)?),
                _ => return Err(SchemaError::keyword("dependencies")),
            };
            dependencies.push((key.clone(), subschema.clone(), dependency));
        }
        Ok(Box::new(DependenciesValidator { dependencies }))
    }
}

impl Validate for DependenciesValidator {
    fn validate<'a>(&self, scope: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        if let Value::Object(item) = instance {
            for (property, original, dependency) in &self.dependencies {
                if !item.contains_key(property) {
                    continue;
                }
                let satisfied = match dependency {
                    Dependency::Names(names) => {
                        names.iter().all(|name| item.contains_key(name))
                    }
                    // The whole instance is validated, not the property's
                    // value.
                    Dependency::Schema(validators) => match validators
                        .iter()
                        .try_for_each(|validator| validator.validate(scope, instance))
                    {
                        Ok(()) => true,
                        Err(error) if error.is_fatal() => return Err(error),
                        Err(_) => false,
                    },
                };
                if !satisfied {
                    return Err(ValidationError::dependency_mismatch(
                        instance,
                        property.clone(),
                        original.clone(),
                    ));
                }
            }
        }
        Ok(())
    }

    fn name(&self) -> String {
        format!(
            "<dependencies: {:?}>",
            self.dependencies
                .iter()
                .map(|(property, _, _)| property.as_str())
                .collect::<Vec<&str>>()
        )
    }
}

pub(crate) fn compile(
    _: &Map<String, Value>,
    schema: &Value,
    context: &CompilationContext,
) -> Option<CompilationResult> {
    Some(DependenciesValidator::compile(schema, context))
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn name_list_form() {
        let schema = json!({"dependencies": {"credit_card": ["billing_address"]}});
        tests_util::is_not_valid(&schema, &json!({"credit_card": 1}));
        tests_util::is_valid(&schema, &json!({"credit_card": 1, "billing_address": "x"}));
        // No constraint when the trigger property is absent.
        tests_util::is_valid(&schema, &json!({"billing_address": "x"}));
    }

    #[test]
    fn schema_form_checks_the_whole_instance() {
        let schema = json!({"dependencies": {"a": {"required": ["b"]}}});
        tests_util::is_not_valid(&schema, &json!({"a": 1}));
        tests_util::is_valid(&schema, &json!({"a": 1, "b": 2}));
    }

    #[test]
    fn skips_non_objects() {
        let schema = json!({"dependencies": {"a": ["b"]}});
        tests_util::is_valid(&schema, &json!([1, 2]));
        tests_util::is_valid(&schema, &json!("a"));
    }

    #[test]
    fn unresolvable_dependency_schema_is_fatal() {
        let schema = json!({"dependencies": {"a": {"$ref": "#/definitions/missing"}}});
        let error = tests_util::validate(&schema, &json!({"a": 1}));
        assert_eq!(error.kind().discriminant(), "unresolvable-ref");
    }

    #[test]
    fn dependency_mismatch_record() {
        let error = tests_util::validate(
            &json!({"dependencies": {"credit_card": ["billing_address"]}}),
            &json!({"credit_card": 1}),
        );
        assert_eq!(
            error.to_value(),
            json!({
                "error": "dependency-mismatch",
                "dependency": {"credit_card": ["billing_address"]},
                "data": {"credit_card": 1}
            })
        );
    }
}
