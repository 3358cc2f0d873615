pub(crate) mod all_of;
pub(crate) mod any_of;
pub(crate) mod dependencies;
pub(crate) mod enum_;
pub(crate) mod format;
pub(crate) mod items;
pub(crate) mod max_items;
pub(crate) mod max_length;
pub(crate) mod max_properties;
pub(crate) mod maximum;
pub(crate) mod min_items;
pub(crate) mod min_length;
pub(crate) mod min_properties;
pub(crate) mod minimum;
pub(crate) mod multiple_of;
pub(crate) mod not;
pub(crate) mod pattern;
pub(crate) mod properties;
pub(crate) mod ref_;
pub(crate) mod type_;
pub(crate) mod unique_items;

use crate::compilation::Scope;
use crate::error;
use crate::error::ValidationResult;
use serde_json::Value;
use std::fmt::{Debug, Error, Formatter};

pub trait Validate: Send + Sync {
    fn validate<'a>(&self, scope: &Scope<'_>, instance: &'a Value) -> ValidationResult<'a>;
    // The same as above, but returns a boolean and skips error construction.
    // Overridden only by validators without subschemas; validators that
    // recurse keep the default so a fatal unresolvable reference is never
    // flattened into an ordinary `false`.
    fn is_valid(&self, scope: &Scope<'_>, instance: &Value) -> bool {
        self.validate(scope, instance).is_ok()
    }
    fn name(&self) -> String {
        "<validator>".to_string()
    }
}

impl Debug for dyn Validate + Send + Sync {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.write_str(&self.name())
    }
}

pub(crate) type CompilationResult = Result<BoxedValidator, error::SchemaError>;
pub(crate) type BoxedValidator = Box<dyn Validate + Send + Sync>;
pub(crate) type Validators = Vec<BoxedValidator>;
