//! Validator for the `format` keyword. Only `date-time` is enforced; other
//! formats are reported to the diagnostic sink and skipped.

use super::{CompilationResult, Validate};
use crate::{
    compilation::{CompilationContext, DateTimeCheck, Scope},
    error::{SchemaError, ValidationError, ValidationResult},
};
use serde_json::{Map, Value};

pub struct DateTimeValidator {
    check: DateTimeCheck,
}

impl DateTimeValidator {
    pub(crate) fn compile(check: DateTimeCheck) -> CompilationResult {
        Ok(Box::new(DateTimeValidator { check }))
    }
}

impl Validate for DateTimeValidator {
    fn validate<'a>(&self, scope: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        if self.is_valid(scope, instance) {
            Ok(())
        } else {
            Err(ValidationError::wrong_format(
                instance,
                "date-time".to_string(),
            ))
        }
    }

    fn is_valid(&self, _: &Scope<'_>, instance: &Value) -> bool {
        if let Value::String(item) = instance {
            return (self.check)(item);
        }
        true
    }

    fn name(&self) -> String {
        "<format: date-time>".to_string()
    }
}

pub(crate) fn compile(
    _: &Map<String, Value>,
    schema: &Value,
    context: &CompilationContext,
) -> Option<CompilationResult> {
    if let Value::String(format) = schema {
        match format.as_str() {
            "date-time" => Some(DateTimeValidator::compile(context.datetime)),
            other => {
                tracing::warn!(format = %other, "unsupported format, skipping the check");
                None
            }
        }
    } else {
        Some(Err(SchemaError::keyword("format")))
    }
}

#[cfg(test)]
mod tests {
    use crate::{tests_util, JsonSchema};
    use serde_json::json;

    #[test]
    fn date_time() {
        let schema = json!({"format": "date-time"});
        tests_util::is_valid(&schema, &json!("2018-03-01T12:00:00Z"));
        tests_util::is_valid(&schema, &json!("2018-03-01T12:00:00+01:00"));
        tests_util::is_not_valid(&schema, &json!("2018-03-01 12:00:00"));
        tests_util::is_not_valid(&schema, &json!("not a date"));
    }

    #[test]
    fn skips_non_strings() {
        tests_util::is_valid(&json!({"format": "date-time"}), &json!(12));
    }

    #[test]
    fn unknown_format_does_not_fail() {
        // The unsupported format is reported to the diagnostic sink only.
        let schema = json!({"format": "email"});
        tests_util::is_valid(&schema, &json!("definitely not an email"));
    }

    #[test]
    fn custom_check() {
        let schema = json!({"format": "date-time"});
        let compiled = JsonSchema::options()
            .with_datetime_check(|value| value == "now")
            .compile(&schema)
            .unwrap();
        assert!(compiled.is_valid(&json!("now")));
        assert!(!compiled.is_valid(&json!("2018-03-01T12:00:00Z")));
    }
}
