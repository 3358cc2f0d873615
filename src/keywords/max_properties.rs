use super::{CompilationResult, Validate};
use crate::{
    compilation::{CompilationContext, Scope},
    error::{SchemaError, ValidationError, ValidationResult},
};
use serde_json::{Map, Value};

pub struct MaxPropertiesValidator {
    limit: u64,
}

impl MaxPropertiesValidator {
    pub(crate) fn compile(schema: &Value) -> CompilationResult {
        if let Some(limit) = schema.as_u64() {
            return Ok(Box::new(MaxPropertiesValidator { limit }));
        }
        Err(SchemaError::keyword("maxProperties"))
    }
}

impl Validate for MaxPropertiesValidator {
    fn validate<'a>(&self, _: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        if let Value::Object(item) = instance {
            if (item.len() as u64) > self.limit {
                return Err(ValidationError::too_many_properties(instance, self.limit));
            }
        }
        Ok(())
    }

    fn is_valid(&self, _: &Scope<'_>, instance: &Value) -> bool {
        if let Value::Object(item) = instance {
            return item.len() as u64 <= self.limit;
        }
        true
    }

    fn name(&self) -> String {
        format!("<max properties: {}>", self.limit)
    }
}

pub(crate) fn compile(
    _: &Map<String, Value>,
    schema: &Value,
    _: &CompilationContext,
) -> Option<CompilationResult> {
    Some(MaxPropertiesValidator::compile(schema))
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn counts_keys() {
        tests_util::is_valid(&json!({"maxProperties": 1}), &json!({"a": 1}));
        tests_util::is_not_valid(&json!({"maxProperties": 1}), &json!({"a": 1, "b": 2}));
    }
}
