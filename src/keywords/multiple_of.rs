use super::{CompilationResult, Validate};
use crate::{
    compilation::{CompilationContext, Scope},
    error::{SchemaError, ValidationError, ValidationResult},
};
use serde_json::{Map, Value};

pub struct MultipleOfIntegerValidator {
    multiple_of: f64,
}

impl MultipleOfIntegerValidator {
    pub(crate) fn compile(multiple_of: f64) -> CompilationResult {
        Ok(Box::new(MultipleOfIntegerValidator { multiple_of }))
    }
}

impl Validate for MultipleOfIntegerValidator {
    fn validate<'a>(&self, scope: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        if self.is_valid(scope, instance) {
            Ok(())
        } else {
            Err(ValidationError::not_multiple_of(instance, self.multiple_of))
        }
    }

    fn is_valid(&self, _: &Scope<'_>, instance: &Value) -> bool {
        if let Value::Number(item) = instance {
            let item = item.as_f64().expect("A JSON number is always an f64");
            // A value with a non-zero fractional part can't be a multiple of
            // an integral divisor.
            return item.fract() == 0. && (item % self.multiple_of) == 0.;
        }
        true
    }

    fn name(&self) -> String {
        format!("<multiple of: {}>", self.multiple_of)
    }
}

pub struct MultipleOfFloatValidator {
    multiple_of: f64,
}

impl MultipleOfFloatValidator {
    pub(crate) fn compile(multiple_of: f64) -> CompilationResult {
        Ok(Box::new(MultipleOfFloatValidator { multiple_of }))
    }
}

impl Validate for MultipleOfFloatValidator {
    fn validate<'a>(&self, scope: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        if self.is_valid(scope, instance) {
            Ok(())
        } else {
            Err(ValidationError::not_multiple_of(instance, self.multiple_of))
        }
    }

    fn is_valid(&self, _: &Scope<'_>, instance: &Value) -> bool {
        if let Value::Number(item) = instance {
            let item = item.as_f64().expect("A JSON number is always an f64");
            // Quotient-based check: IEEE division rounds cases like 0.3 / 0.1
            // to an exact integer, which is the tolerance we want here.
            let quotient = item / self.multiple_of;
            return quotient.floor() == quotient;
        }
        true
    }

    fn name(&self) -> String {
        format!("<multiple of: {}>", self.multiple_of)
    }
}

pub(crate) fn compile(
    _: &Map<String, Value>,
    schema: &Value,
    _: &CompilationContext,
) -> Option<CompilationResult> {
    if let Value::Number(multiple_of) = schema {
        let multiple_of = multiple_of.as_f64().expect("A JSON number is always an f64");
        if multiple_of <= 0. {
            return Some(Err(SchemaError::keyword("multipleOf")));
        }
        if multiple_of.fract() == 0. {
            Some(MultipleOfIntegerValidator::compile(multiple_of))
        } else {
            Some(MultipleOfFloatValidator::compile(multiple_of))
        }
    } else {
        Some(Err(SchemaError::keyword("multipleOf")))
    }
}
