use super::{CompilationResult, Validate};
use crate::{
    compilation::{CompilationContext, Scope},
    error::{SchemaError, ValidationError, ValidationResult},
};
use regex::Regex;
use serde_json::{Map, Value};

pub struct PatternValidator {
    original: String,
    pattern: Regex,
}

impl PatternValidator {
    pub(crate) fn compile(pattern: &Value) -> CompilationResult {
        match pattern {
            Value::String(item) => {
                let pattern = Regex::new(item).map_err(|source| SchemaError::InvalidRegex {
                    keyword: "pattern",
                    pattern: item.clone(),
                    source,
                })?;
                Ok(Box::new(PatternValidator {
                    original: item.clone(),
                    pattern,
                }))
            }
            _ => Err(SchemaError::keyword("pattern")),
        }
    }
}

impl Validate for PatternValidator {
    fn validate<'a>(&self, scope: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        if self.is_valid(scope, instance) {
            Ok(())
        } else {
            Err(ValidationError::pattern_mismatch(
                instance,
                self.original.clone(),
            ))
        }
    }

    fn is_valid(&self, _: &Scope<'_>, instance: &Value) -> bool {
        if let Value::String(item) = instance {
            // `is_match` searches anywhere in the string; patterns that want
            // anchoring spell it out with `^`/`$`.
            return self.pattern.is_match(item);
        }
        true
    }

    fn name(&self) -> String {
        format!("<pattern: {}>", self.pattern)
    }
}

pub(crate) fn compile(
    _: &Map<String, Value>,
    schema: &Value,
    _: &CompilationContext,
) -> Option<CompilationResult> {
    Some(PatternValidator::compile(schema))
}
