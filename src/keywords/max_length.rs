use super::{CompilationResult, Validate};
use crate::{
    compilation::{CompilationContext, Scope},
    error::{SchemaError, ValidationError, ValidationResult},
};
use serde_json::{Map, Value};

pub struct MaxLengthValidator {
    limit: u64,
}

impl MaxLengthValidator {
    pub(crate) fn compile(schema: &Value) -> CompilationResult {
        if let Some(limit) = schema.as_u64() {
            return Ok(Box::new(MaxLengthValidator { limit }));
        }
        Err(SchemaError::keyword("maxLength"))
    }
}

impl Validate for MaxLengthValidator {
    fn validate<'a>(&self, scope: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        if self.is_valid(scope, instance) {
            Ok(())
        } else {
            Err(ValidationError::string_too_long(instance, self.limit))
        }
    }

    fn is_valid(&self, _: &Scope<'_>, instance: &Value) -> bool {
        if let Value::String(item) = instance {
            return item.chars().count() as u64 <= self.limit;
        }
        true
    }

    fn name(&self) -> String {
        format!("<max length: {}>", self.limit)
    }
}

pub(crate) fn compile(
    _: &Map<String, Value>,
    schema: &Value,
    _: &CompilationContext,
) -> Option<CompilationResult> {
    Some(MaxLengthValidator::compile(schema))
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn limit_is_inclusive() {
        tests_util::is_valid(&json!({"maxLength": 3}), &json!("abc"));
        tests_util::is_not_valid(&json!({"maxLength": 3}), &json!("abcd"));
    }
}
