use super::{CompilationResult, Validate, Validators};
use crate::{
    compilation::{compile_validators, CompilationContext, Scope},
    error::{SchemaError, ValidationError, ValidationResult},
    helpers,
};
use serde_json::{Map, Value};

pub struct ItemsValidator {
    validators: Validators,
}

impl ItemsValidator {
    pub(crate) fn compile(schema: &Value, context: &CompilationContext) -> CompilationResult {
        Ok(Box::new(ItemsValidator {
            validators: compile_validators(schema, context)?,
        }))
    }
}

impl Validate for ItemsValidator {
    fn validate<'a>(&self, scope: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        if let Value::Array(items) = instance {
            let mut errors = Vec::new();
            for (position, item) in items.iter().enumerate() {
                if let Err(error) = self
                    .validators
                    .iter()
                    .try_for_each(|validator| validator.validate(scope, item))
                {
                    if error.is_fatal() {
                        return Err(error);
                    }
                    errors.push((position, error));
                }
            }
            if !errors.is_empty() {
                return Err(ValidationError::array_items(instance, errors));
            }
        }
        Ok(())
    }

    fn name(&self) -> String {
        format!("<items: {:?}>", self.validators)
    }
}

/// Specialization for `items` that is a pure enum schema: the per-element
/// check is inlined instead of re-dispatching through the validator tree.
/// Semantics are identical.
pub struct ItemsEnumValidator {
    options: Value,
    items: Vec<Value>,
}

impl ItemsEnumValidator {
    pub(crate) fn compile(options: &Value) -> CompilationResult {
        match options.as_array() {
            Some(items) => Ok(Box::new(ItemsEnumValidator {
                options: options.clone(),
                items: items.clone(),
            })),
            None => Err(SchemaError::keyword("enum")),
        }
    }

    fn matches(&self, item: &Value) -> bool {
        self.items.iter().any(|option| helpers::equal(item, option))
    }
}

impl Validate for ItemsEnumValidator {
    fn validate<'a>(&self, _: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        if let Value::Array(items) = instance {
            let mut errors = Vec::new();
            for (position, item) in items.iter().enumerate() {
                if !self.matches(item) {
                    errors.push((position, ValidationError::enumeration(item, &self.options)));
                }
            }
            if !errors.is_empty() {
                return Err(ValidationError::array_items(instance, errors));
            }
        }
        Ok(())
    }

    fn is_valid(&self, _: &Scope<'_>, instance: &Value) -> bool {
        if let Value::Array(items) = instance {
            return items.iter().all(|item| self.matches(item));
        }
        true
    }

    fn name(&self) -> String {
        format!("<items enum: {}>", self.options)
    }
}

pub(crate) fn compile(
    _: &Map<String, Value>,
    schema: &Value,
    context: &CompilationContext,
) -> Option<CompilationResult> {
    match schema {
        Value::Object(map) if map.len() == 1 && map.contains_key("enum") => {
            Some(ItemsEnumValidator::compile(&map["enum"]))
        }
        Value::Object(_) => Some(ItemsValidator::compile(schema, context)),
        // The array (tuple) form is not supported.
        _ => Some(Err(SchemaError::keyword("items"))),
    }
}
