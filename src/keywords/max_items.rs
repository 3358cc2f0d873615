use super::{CompilationResult, Validate};
use crate::{
    compilation::{CompilationContext, Scope},
    error::{SchemaError, ValidationError, ValidationResult},
};
use serde_json::{Map, Value};

pub struct MaxItemsValidator {
    limit: u64,
}

impl MaxItemsValidator {
    pub(crate) fn compile(schema: &Value) -> CompilationResult {
        if let Some(limit) = schema.as_u64() {
            return Ok(Box::new(MaxItemsValidator { limit }));
        }
        Err(SchemaError::keyword("maxItems"))
    }
}

impl Validate for MaxItemsValidator {
    fn validate<'a>(&self, _: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        if let Value::Array(items) = instance {
            if (items.len() as u64) > self.limit {
                return Err(ValidationError::max_items(
                    instance,
                    self.limit,
                    items.len() as u64,
                ));
            }
        }
        Ok(())
    }

    fn is_valid(&self, _: &Scope<'_>, instance: &Value) -> bool {
        if let Value::Array(items) = instance {
            return items.len() as u64 <= self.limit;
        }
        true
    }

    fn name(&self) -> String {
        format!("<max items: {}>", self.limit)
    }
}

pub(crate) fn compile(
    _: &Map<String, Value>,
    schema: &Value,
    _: &CompilationContext,
) -> Option<CompilationResult> {
    Some(MaxItemsValidator::compile(schema))
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn limit_is_inclusive() {
        tests_util::is_valid(&json!({"maxItems": 1}), &json!([1]));
        tests_util::is_not_valid(&json!({"maxItems": 1}), &json!([1, 2]));
    }
}
