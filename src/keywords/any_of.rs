use super::{CompilationResult, Validate, Validators};
use crate::{
    compilation::{compile_validators, CompilationContext, Scope},
    error::{SchemaError, ValidationError, ValidationResult},
};
use serde_json::{Map, Value};

pub struct AnyOfValidator {
    original: Value,
    schemas: Vec<Validators>,
}

impl AnyOfValidator {
    pub(crate) fn compile(schema: &Value, context: &CompilationContext) -> CompilationResult {
        if let Value::Array(items) = schema {
            let mut schemas = Vec::with_capacity(items.len());
            for item in items {
                schemas.push(compile_validators(item, context)?);
            }
            return Ok(Box::new(AnyOfValidator {
                original: schema.clone(),
                schemas,
            }));
        }
        Err(SchemaError::keyword("anyOf"))
    }
}

impl Validate for AnyOfValidator {
    fn validate<'a>(&self, scope: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        for validators in &self.schemas {
            match validators
                .iter()
                .try_for_each(|validator| validator.validate(scope, instance))
            {
                Ok(()) => return Ok(()),
                Err(error) if error.is_fatal() => return Err(error),
                Err(_) => {}
            }
        }
        Err(ValidationError::any_of(instance, self.original.clone()))
    }

    fn name(&self) -> String {
        format!("<any of: {:?}>", self.schemas)
    }
}

pub(crate) fn compile(
    _: &Map<String, Value>,
    schema: &Value,
    context: &CompilationContext,
) -> Option<CompilationResult> {
    Some(AnyOfValidator::compile(schema, context))
}

#[cfg(test)]
mod tests {
    use crate::{tests_util, JsonSchema};
    use serde_json::json;

    #[test]
    fn one_passing_branch_is_enough() {
        let schema = json!({"anyOf": [{"type": "integer"}, {"minLength": 2}]});
        tests_util::is_valid(&schema, &json!(1));
        tests_util::is_valid(&schema, &json!("ab"));
        tests_util::is_not_valid(&schema, &json!("a"));
    }

    #[test]
    fn unresolvable_branch_is_fatal() {
        // A passing branch after the broken one must not rescue validation.
        let schema = json!({"anyOf": [{"$ref": "#/definitions/missing"}, {"type": "integer"}]});
        let compiled = JsonSchema::compile(&schema).unwrap();
        let instance = json!(5);
        let error = compiled.validate(&instance).unwrap_err();
        assert_eq!(error.kind().discriminant(), "unresolvable-ref");
        assert!(!compiled.is_valid(&instance));
    }
}
