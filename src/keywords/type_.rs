use super::{CompilationResult, Validate};
use crate::{
    compilation::{CompilationContext, Scope},
    error::{SchemaError, ValidationError, ValidationResult},
    primitive_type::PrimitiveType,
};
use serde_json::{Map, Value};
use std::convert::TryFrom;

pub struct MultipleTypesValidator {
    types: Vec<PrimitiveType>,
}

impl MultipleTypesValidator {
    pub(crate) fn compile(items: &[Value]) -> CompilationResult {
        let mut types = Vec::with_capacity(items.len());
        for item in items {
            match item.as_str().map(PrimitiveType::try_from) {
                Some(Ok(primitive_type)) => types.push(primitive_type),
                _ => return Err(SchemaError::keyword("type")),
            }
        }
        Ok(Box::new(MultipleTypesValidator { types }))
    }
}

impl Validate for MultipleTypesValidator {
    fn validate<'a>(&self, scope: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        if self.is_valid(scope, instance) {
            Ok(())
        } else {
            Err(ValidationError::multiple_type_error(
                instance,
                self.types.clone(),
            ))
        }
    }

    fn is_valid(&self, _: &Scope<'_>, instance: &Value) -> bool {
        self.types.iter().any(|type_| type_.matches(instance))
    }

    fn name(&self) -> String {
        format!("<type: {:?}>", self.types)
    }
}

pub struct TypeValidator {
    type_: PrimitiveType,
}

impl TypeValidator {
    pub(crate) fn compile(type_: PrimitiveType) -> CompilationResult {
        Ok(Box::new(TypeValidator { type_ }))
    }
}

impl Validate for TypeValidator {
    fn validate<'a>(&self, scope: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        if self.is_valid(scope, instance) {
            Ok(())
        } else {
            Err(ValidationError::single_type_error(instance, self.type_))
        }
    }

    fn is_valid(&self, _: &Scope<'_>, instance: &Value) -> bool {
        self.type_.matches(instance)
    }

    fn name(&self) -> String {
        format!("<type: {}>", self.type_)
    }
}

pub(crate) fn compile(
    _: &Map<String, Value>,
    schema: &Value,
    _: &CompilationContext,
) -> Option<CompilationResult> {
    if let Some(item) = schema.as_str() {
        compile_single_type(item)
    } else if let Some(items) = schema.as_array() {
        if items.len() == 1 {
            if let Some(item) = items[0].as_str() {
                compile_single_type(item)
            } else {
                Some(Err(SchemaError::keyword("type")))
            }
        } else {
            Some(MultipleTypesValidator::compile(items))
        }
    } else {
        Some(Err(SchemaError::keyword("type")))
    }
}

fn compile_single_type(item: &str) -> Option<CompilationResult> {
    match PrimitiveType::try_from(item) {
        Ok(type_) => Some(TypeValidator::compile(type_)),
        Err(()) => Some(Err(SchemaError::keyword("type"))),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!("integer"), json!(1), true)]
    #[test_case(json!("integer"), json!(2.0), true)]
    #[test_case(json!("integer"), json!(3.5), false)]
    #[test_case(json!("number"), json!(3), true)]
    #[test_case(json!("number"), json!(3.5), true)]
    #[test_case(json!("string"), json!("foo"), true)]
    #[test_case(json!("string"), json!(1), false)]
    #[test_case(json!("null"), json!(null), true)]
    #[test_case(json!(["integer", "string"]), json!("foo"), true)]
    #[test_case(json!(["integer", "string"]), json!([]), false)]
    fn type_matching(type_: serde_json::Value, instance: serde_json::Value, expected: bool) {
        let schema = json!({ "type": type_ });
        if expected {
            tests_util::is_valid(&schema, &instance);
        } else {
            tests_util::is_not_valid(&schema, &instance);
        }
    }

    #[test]
    fn wrong_type_record() {
        let error = tests_util::validate(&json!({"type": "integer"}), &json!(3.5));
        assert_eq!(
            error.to_value(),
            json!({"error": "wrong-type", "expected": "integer", "data": 3.5})
        );
    }
}
