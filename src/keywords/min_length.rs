use super::{CompilationResult, Validate};
use crate::{
    compilation::{CompilationContext, Scope},
    error::{SchemaError, ValidationError, ValidationResult},
};
use serde_json::{Map, Value};

pub struct MinLengthValidator {
    limit: u64,
}

impl MinLengthValidator {
    pub(crate) fn compile(schema: &Value) -> CompilationResult {
        if let Some(limit) = schema.as_u64() {
            return Ok(Box::new(MinLengthValidator { limit }));
        }
        Err(SchemaError::keyword("minLength"))
    }
}

impl Validate for MinLengthValidator {
    fn validate<'a>(&self, scope: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        if self.is_valid(scope, instance) {
            Ok(())
        } else {
            Err(ValidationError::string_too_short(instance, self.limit))
        }
    }

    fn is_valid(&self, _: &Scope<'_>, instance: &Value) -> bool {
        if let Value::String(item) = instance {
            // Lengths count code points, not bytes.
            return item.chars().count() as u64 >= self.limit;
        }
        true
    }

    fn name(&self) -> String {
        format!("<min length: {}>", self.limit)
    }
}

pub(crate) fn compile(
    _: &Map<String, Value>,
    schema: &Value,
    _: &CompilationContext,
) -> Option<CompilationResult> {
    Some(MinLengthValidator::compile(schema))
}
