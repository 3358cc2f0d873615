use super::{CompilationResult, Validate};
use crate::{
    compilation::{CompilationContext, Scope},
    error::{Bound, SchemaError, ValidationError, ValidationResult},
};
use serde_json::{Map, Value};

pub struct MinimumValidator {
    limit: f64,
    exclusive: bool,
}

impl MinimumValidator {
    pub(crate) fn compile(limit: f64, exclusive: bool) -> CompilationResult {
        Ok(Box::new(MinimumValidator { limit, exclusive }))
    }
}

impl Validate for MinimumValidator {
    fn validate<'a>(&self, scope: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        if self.is_valid(scope, instance) {
            Ok(())
        } else {
            Err(ValidationError::out_of_bounds(
                instance,
                self.limit,
                Bound::Minimum,
                self.exclusive,
            ))
        }
    }

    fn is_valid(&self, _: &Scope<'_>, instance: &Value) -> bool {
        if let Value::Number(item) = instance {
            let item = item.as_f64().expect("A JSON number is always an f64");
            if self.exclusive {
                return item > self.limit;
            }
            return item >= self.limit;
        }
        true
    }

    fn name(&self) -> String {
        format!("<minimum: {} (exclusive: {})>", self.limit, self.exclusive)
    }
}

/// The exclusivity of the bound comes from the sibling `exclusiveMinimum`
/// boolean, draft-4 style.
pub(crate) fn compile(
    parent: &Map<String, Value>,
    schema: &Value,
    _: &CompilationContext,
) -> Option<CompilationResult> {
    let limit = match schema.as_f64() {
        Some(limit) => limit,
        None => return Some(Err(SchemaError::keyword("minimum"))),
    };
    let exclusive = match parent.get("exclusiveMinimum") {
        None => false,
        Some(Value::Bool(value)) => *value,
        Some(_) => return Some(Err(SchemaError::keyword("exclusiveMinimum"))),
    };
    Some(MinimumValidator::compile(limit, exclusive))
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn bound_is_inclusive_by_default() {
        tests_util::is_valid(&json!({"minimum": 3}), &json!(3));
        tests_util::is_not_valid(&json!({"minimum": 3}), &json!(2.9));
    }

    #[test]
    fn exclusive_flag_makes_bound_strict() {
        let schema = json!({"minimum": 3, "exclusiveMinimum": true});
        tests_util::is_not_valid(&schema, &json!(3));
        tests_util::is_valid(&schema, &json!(3.1));
    }

    #[test]
    fn skips_non_numbers() {
        tests_util::is_valid(&json!({"minimum": 3}), &json!("1"));
    }

    #[test]
    fn out_of_bounds_record() {
        let error = tests_util::validate(&json!({"minimum": 1}), &json!(0));
        assert_eq!(
            error.to_value(),
            json!({"error": "out-of-bounds", "minimum": 1.0, "exclusive": false, "data": 0})
        );
    }
}
