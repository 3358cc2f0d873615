use super::{CompilationResult, Validate};
use crate::{
    compilation::{CompilationContext, Scope},
    error::{ValidationError, ValidationResult},
    helpers,
};
use serde_json::{Map, Value};
use std::{
    collections::{hash_map::DefaultHasher, HashSet},
    hash::{Hash, Hasher},
};

// Based on implementation proposed by Sven Marnach:
// https://stackoverflow.com/questions/60882381/what-is-the-fastest-correct-way-to-detect-that-there-are-no-duplicates-in-a-json
#[derive(PartialEq)]
pub struct HashedValue<'a>(&'a Value);

impl Eq for HashedValue<'_> {}

impl Hash for HashedValue<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.0 {
            Value::Null => state.write_u32(3_221_225_473), // chosen randomly
            Value::Bool(ref item) => item.hash(state),
            Value::Number(ref item) => {
                if let Some(number) = item.as_u64() {
                    number.hash(state);
                } else if let Some(number) = item.as_i64() {
                    number.hash(state);
                } else if let Some(number) = item.as_f64() {
                    number.to_bits().hash(state)
                }
            }
            Value::String(ref item) => item.hash(state),
            Value::Array(ref items) => {
                for item in items {
                    HashedValue(item).hash(state);
                }
            }
            Value::Object(ref items) => {
                let mut hash = 0;
                for (key, value) in items {
                    // We have no way of building a new hasher of type `H`, so we
                    // hardcode using the default hasher of a hash map.
                    let mut item_hasher = DefaultHasher::default();
                    key.hash(&mut item_hasher);
                    HashedValue(value).hash(&mut item_hasher);
                    hash ^= item_hasher.finish();
                }
                state.write_u64(hash);
            }
        }
    }
}

pub(crate) fn is_unique(items: &[Value]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().map(HashedValue).all(move |item| seen.insert(item))
}

/// The set of values that occur more than once, each reported once.
fn duplicates(items: &[Value]) -> Vec<Value> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut duplicates: Vec<Value> = Vec::new();
    for item in items {
        if !seen.insert(HashedValue(item))
            && !duplicates.iter().any(|known| helpers::equal(known, item))
        {
            duplicates.push(item.clone());
        }
    }
    duplicates
}

pub struct UniqueItemsValidator {}

impl UniqueItemsValidator {
    pub(crate) fn compile() -> CompilationResult {
        Ok(Box::new(UniqueItemsValidator {}))
    }
}

impl Validate for UniqueItemsValidator {
    fn validate<'a>(&self, _: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        if let Value::Array(items) = instance {
            let duplicates = duplicates(items);
            if !duplicates.is_empty() {
                return Err(ValidationError::duplicate_items(instance, duplicates));
            }
        }
        Ok(())
    }

    fn is_valid(&self, _: &Scope<'_>, instance: &Value) -> bool {
        if let Value::Array(items) = instance {
            return is_unique(items);
        }
        true
    }

    fn name(&self) -> String {
        "uniqueItems: true".to_string()
    }
}

pub(crate) fn compile(
    _: &Map<String, Value>,
    schema: &Value,
    _: &CompilationContext,
) -> Option<CompilationResult> {
    if let Value::Bool(value) = schema {
        if *value {
            Some(UniqueItemsValidator::compile())
        } else {
            None
        }
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{tests_util, JsonSchema};
    use serde_json::json;

    #[test]
    fn structural_uniqueness() {
        let schema = json!({"uniqueItems": true});
        tests_util::is_valid(&schema, &json!([1, 2, 3]));
        tests_util::is_valid(&schema, &json!([]));
        tests_util::is_not_valid(&schema, &json!([{"a": 1}, {"a": 1}]));
    }

    #[test]
    fn false_is_a_noop() {
        let schema = json!({"uniqueItems": false});
        let compiled = JsonSchema::compile(&schema).unwrap();
        assert!(compiled.is_valid(&json!([1, 1])));
    }

    #[test]
    fn duplicates_are_collected_once() {
        let error = tests_util::validate(&json!({"uniqueItems": true}), &json!([1, 2, 1, 3, 2]));
        assert_eq!(
            error.to_value(),
            json!({"error": "duplicate-items-not-allowed", "duplicates": [1, 2]})
        );
    }
}
