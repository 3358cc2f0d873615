use super::{CompilationResult, Validate};
use crate::{
    compilation::{CompilationContext, Scope},
    error::{SchemaError, ValidationError, ValidationResult},
    helpers,
};
use serde_json::{Map, Value};

pub struct EnumValidator {
    options: Value,
    items: Vec<Value>,
}

impl EnumValidator {
    pub(crate) fn compile(schema: &Value) -> CompilationResult {
        if let Value::Array(items) = schema {
            return Ok(Box::new(EnumValidator {
                options: schema.clone(),
                items: items.clone(),
            }));
        }
        Err(SchemaError::keyword("enum"))
    }
}

impl Validate for EnumValidator {
    fn validate<'a>(&self, scope: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        if self.is_valid(scope, instance) {
            Ok(())
        } else {
            Err(ValidationError::enumeration(instance, &self.options))
        }
    }

    fn is_valid(&self, _: &Scope<'_>, instance: &Value) -> bool {
        self.items.iter().any(|item| helpers::equal(instance, item))
    }

    fn name(&self) -> String {
        format!(
            "<enum: {}>",
            self.items
                .iter()
                .map(|item| format!("{}", item))
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}

pub(crate) fn compile(
    _: &Map<String, Value>,
    schema: &Value,
    _: &CompilationContext,
) -> Option<CompilationResult> {
    Some(EnumValidator::compile(schema))
}
