use super::{CompilationResult, Validate, Validators};
use crate::{
    compilation::{compile_validators, Scope},
    error::{ValidationError, ValidationResult},
    resolver::{resolve_reference, Resolved, MAX_REF_DEPTH},
};
use serde_json::Value;

/// A `$ref` node. The reference is resolved lazily during validation, so
/// recursive schemas need no special representation: every hop through a
/// reference bumps the scope's depth counter and the chase is abandoned as
/// unresolvable once it exceeds [`MAX_REF_DEPTH`].
pub struct RefValidator {
    reference: String,
}

impl RefValidator {
    pub(crate) fn compile(reference: &str) -> CompilationResult {
        Ok(Box::new(RefValidator {
            reference: reference.to_owned(),
        }))
    }

    fn recompile(
        &self,
        scope: &Scope<'_>,
        resolved: &Value,
    ) -> Result<Validators, ValidationError<'static>> {
        compile_validators(resolved, &scope.context()).map_err(|error| {
            tracing::debug!(reference = %self.reference, %error, "resolved schema failed to compile");
            ValidationError::unresolvable_ref(self.reference.clone())
        })
    }
}

impl Validate for RefValidator {
    fn validate<'a>(&self, scope: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a> {
        if scope.ref_depth >= MAX_REF_DEPTH {
            return Err(ValidationError::unresolvable_ref(self.reference.clone()));
        }
        match resolve_reference(scope, &self.reference)? {
            Resolved::Local(resolved) => {
                let validators = self.recompile(scope, resolved)?;
                let scope = scope.descend();
                for validator in &validators {
                    validator.validate(&scope, instance)?;
                }
                Ok(())
            }
            Resolved::Remote(document) => {
                let validators = self.recompile(scope, &document)?;
                // Pointers inside the remote document resolve against it, not
                // against the original root.
                let scope = scope.rebind(&document);
                for validator in &validators {
                    validator.validate(&scope, instance)?;
                }
                Ok(())
            }
        }
    }

    // No `is_valid` shortcut: the default goes through `validate`, so an
    // unresolved reference stays fatal instead of collapsing into an ordinary
    // `false` that an enclosing combinator could negate or out-vote.

    fn name(&self) -> String {
        format!("<ref: {}>", self.reference)
    }
}

#[cfg(test)]
mod tests {
    use crate::{tests_util, JsonSchema, ResolveRef};
    use serde_json::{json, Value};

    #[test]
    fn pointer_reference() {
        let schema = json!({
            "definitions": {"pos": {"type": "integer", "minimum": 1}},
            "$ref": "#/definitions/pos"
        });
        tests_util::is_valid(&schema, &json!(5));
        let error = tests_util::validate(&schema, &json!(0));
        assert_eq!(
            error.to_value(),
            json!({"error": "out-of-bounds", "minimum": 1.0, "exclusive": false, "data": 0})
        );
    }

    #[test]
    fn whole_document_reference() {
        let schema = json!({
            "properties": {"next": {"$ref": "#"}, "value": {"type": "integer"}}
        });
        tests_util::is_valid(&schema, &json!({"value": 1, "next": {"value": 2}}));
        tests_util::is_not_valid(&schema, &json!({"value": 1, "next": {"value": "x"}}));
    }

    #[test]
    fn reference_chains_are_followed() {
        let schema = json!({
            "definitions": {
                "a": {"$ref": "#/definitions/b"},
                "b": {"type": "string"}
            },
            "$ref": "#/definitions/a"
        });
        tests_util::is_valid(&schema, &json!("x"));
        tests_util::is_not_valid(&schema, &json!(1));
    }

    #[test]
    fn unresolvable_pointer() {
        let schema = json!({"$ref": "#/definitions/missing"});
        let error = tests_util::validate(&schema, &json!(1));
        assert_eq!(
            error.to_value(),
            json!({"error": "unresolvable-ref", "ref": "#/definitions/missing"})
        );
    }

    #[test]
    fn self_referential_cycle_is_an_input_error() {
        // The chase hits the depth bound and the resulting error stays fatal
        // through the enclosing `not` instead of being negated away.
        let schema = json!({"not": {"$ref": "#"}});
        let compiled = JsonSchema::compile(&schema).unwrap();
        let instance = json!(1);
        let error = compiled.validate(&instance).unwrap_err();
        assert_eq!(error.kind().discriminant(), "unresolvable-ref");
        assert!(!compiled.is_valid(&instance));
    }

    struct MapResolver(Value);

    impl ResolveRef for MapResolver {
        fn resolve(&self, reference: &str) -> Option<Value> {
            self.0.get(reference).cloned()
        }
    }

    #[test]
    fn remote_document_becomes_the_root() {
        // The remote schema refers to its own definitions; the pointer must
        // resolve against the remote document, not the original root.
        let remote = json!({
            "definitions": {"name": {"type": "string"}},
            "$ref": "#/definitions/name"
        });
        let schema = json!({"properties": {"name": {"$ref": "remote://name"}}});
        let compiled = JsonSchema::options()
            .with_resolver(MapResolver(json!({ "remote://name": remote })))
            .compile(&schema)
            .unwrap();
        assert!(compiled.is_valid(&json!({"name": "x"})));
        assert!(!compiled.is_valid(&json!({"name": 1})));
    }

    #[test]
    fn missing_remote_schema() {
        let schema = json!({"$ref": "remote://nowhere"});
        let compiled = JsonSchema::options()
            .with_resolver(MapResolver(json!({})))
            .compile(&schema)
            .unwrap();
        let instance = json!(1);
        let error = compiled.validate(&instance).unwrap_err();
        assert_eq!(error.kind().discriminant(), "unresolvable-ref");
    }
}
