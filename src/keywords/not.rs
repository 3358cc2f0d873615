use super::{CompilationResult, Validate, Validators};
use crate::{
    compilation::{compile_validators, CompilationContext, Scope},
    error::{ValidationError, ValidationResult},
};
use serde_json::{Map, Value};

pub struct NotValidator {
    // needed only for error representation
    original: Value,
    validators: Validators,
}

impl NotValidator {
    pub(crate) fn compile(schema: &Value, context: &CompilationContext) -> CompilationResult {
        Ok(Box::new(NotValidator {
            original: schema.clone(),
            validators: compile_validators(schema, context)?,
        }))
    }
}

impl Validate for NotValidator {
    fn validate<'a>(&self, scope: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        match self
            .validators
            .iter()
            .try_for_each(|validator| validator.validate(scope, instance))
        {
            Ok(()) => Err(ValidationError::should_not_match(
                instance,
                self.original.clone(),
            )),
            Err(error) if error.is_fatal() => Err(error),
            Err(_) => Ok(()),
        }
    }

    fn name(&self) -> String {
        format!("<not: {:?}>", self.validators)
    }
}

pub(crate) fn compile(
    _: &Map<String, Value>,
    schema: &Value,
    context: &CompilationContext,
) -> Option<CompilationResult> {
    Some(NotValidator::compile(schema, context))
}
