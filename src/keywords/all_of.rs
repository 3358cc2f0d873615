use super::{CompilationResult, Validate, Validators};
use crate::{
    compilation::{compile_validators, CompilationContext, Scope},
    error::{SchemaError, ValidationError, ValidationResult},
};
use serde_json::{Map, Value};

pub struct AllOfValidator {
    original: Value,
    schemas: Vec<Validators>,
}

impl AllOfValidator {
    pub(crate) fn compile(schema: &Value, context: &CompilationContext) -> CompilationResult {
        if let Value::Array(items) = schema {
            let mut schemas = Vec::with_capacity(items.len());
            for item in items {
                schemas.push(compile_validators(item, context)?);
            }
            return Ok(Box::new(AllOfValidator {
                original: schema.clone(),
                schemas,
            }));
        }
        Err(SchemaError::keyword("allOf"))
    }
}

impl Validate for AllOfValidator {
    fn validate<'a>(&self, scope: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        for validators in &self.schemas {
            if let Err(error) = validators
                .iter()
                .try_for_each(|validator| validator.validate(scope, instance))
            {
                if error.is_fatal() {
                    return Err(error);
                }
                // The combinator failure is reported, not per-branch detail.
                return Err(ValidationError::all_of(instance, self.original.clone()));
            }
        }
        Ok(())
    }

    fn name(&self) -> String {
        format!("<all of: {:?}>", self.schemas)
    }
}

pub(crate) fn compile(
    _: &Map<String, Value>,
    schema: &Value,
    context: &CompilationContext,
) -> Option<CompilationResult> {
    Some(AllOfValidator::compile(schema, context))
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn every_branch_must_pass() {
        let schema = json!({"allOf": [{"type": "integer"}, {"minimum": 10}]});
        tests_util::is_valid(&schema, &json!(12));
        tests_util::is_not_valid(&schema, &json!(5));
        tests_util::is_not_valid(&schema, &json!("x"));
    }

    #[test]
    fn single_branch_matches_the_branch_verdict() {
        let schema = json!({"allOf": [{"type": "integer"}]});
        tests_util::is_valid(&schema, &json!(1));
        tests_util::is_not_valid(&schema, &json!("x"));
    }

    #[test]
    fn unresolvable_branch_is_fatal() {
        let schema = json!({"allOf": [{"$ref": "#/definitions/missing"}]});
        let error = tests_util::validate(&schema, &json!(1));
        assert_eq!(error.kind().discriminant(), "unresolvable-ref");
    }

    #[test]
    fn all_of_record() {
        let error = tests_util::validate(
            &json!({"allOf": [{"type": "integer"}, {"minimum": 10}]}),
            &json!(5),
        );
        assert_eq!(
            error.to_value(),
            json!({
                "error": "does-not-match-all-of",
                "schemas": [{"type": "integer"}, {"minimum": 10}],
                "data": 5
            })
        );
    }
}
