use super::{CompilationResult, Validate};
use crate::{
    compilation::{CompilationContext, Scope},
    error::{SchemaError, ValidationError, ValidationResult},
};
use serde_json::{Map, Value};

pub struct MinItemsValidator {
    limit: u64,
}

impl MinItemsValidator {
    pub(crate) fn compile(schema: &Value) -> CompilationResult {
        if let Some(limit) = schema.as_u64() {
            return Ok(Box::new(MinItemsValidator { limit }));
        }
        Err(SchemaError::keyword("minItems"))
    }
}

impl Validate for MinItemsValidator {
    fn validate<'a>(&self, _: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        if let Value::Array(items) = instance {
            if (items.len() as u64) < self.limit {
                return Err(ValidationError::min_items(
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
            return items.len() as u64 >= self.limit;
        }
        true
    }

    fn name(&self) -> String {
        format!("<min items: {}>", self.limit)
    }
}

pub(crate) fn compile(
    _: &Map<String, Value>,
    schema: &Value,
    _: &CompilationContext,
) -> Option<CompilationResult> {
    Some(MinItemsValidator::compile(schema))
}
