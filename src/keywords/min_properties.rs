use super::{CompilationResult, Validate};
use crate::{
    compilation::{CompilationContext, Scope},
    error::{SchemaError, ValidationError, ValidationResult},
};
use serde_json::{Map, Value};

pub struct MinPropertiesValidator {
    limit: u64,
}

impl MinPropertiesValidator {
    pub(crate) fn compile(schema: &Value) -> CompilationResult {
        if let Some(limit) = schema.as_u64() {
            return Ok(Box::new(MinPropertiesValidator { limit }));
        }
        Err(SchemaError::keyword("minProperties"))
    }
}

impl Validate for MinPropertiesValidator {
    fn validate<'a>(&self, _: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        if let Value::Object(item) = instance {
            if (item.len() as u64) < self.limit {
                return Err(ValidationError::too_few_properties(instance, self.limit));
            }
        }
        Ok(())
    }

    fn is_valid(&self, _: &Scope<'_>, instance: &Value) -> bool {
        if let Value::Object(item) = instance {
            return item.len() as u64 >= self.limit;
        }
        true
    }

    fn name(&self) -> String {
        format!("<min properties: {}>", self.limit)
    }
}

pub(crate) fn compile(
    _: &Map<String, Value>,
    schema: &Value,
    _: &CompilationContext,
) -> Option<CompilationResult> {
    Some(MinPropertiesValidator::compile(schema))
}
