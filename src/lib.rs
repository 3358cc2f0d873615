//! # jsonvalid
//!
//! A crate for validating JSON documents against JSON Schemas (drafts 3 and
//! 4). The schema is compiled once into a validation tree, which reduces
//! runtime costs for working with schema parameters; validation then walks
//! the tree in a fixed order and stops at the first failing check.
//!
//! Supports:
//!   - the draft 3 / draft 4 keyword set: `type`, `enum`, numeric bounds with
//!     boolean exclusivity flags, `multipleOf`, string length in code points,
//!     `pattern`, `format: "date-time"`, the object and array keywords,
//!     `dependencies`, and the `allOf` / `anyOf` / `not` combinators;
//!   - `$ref` with `#`-anchored JSON Pointers and external URI references,
//!     loaded through an injectable resolver (the default reads the
//!     filesystem).
//!
//! ## Usage
//!
//! A schema can be compiled with two main flavours:
//!  * using default configurations
//! ```rust
//! # use jsonvalid::JsonSchema;
//! # use serde_json::json;
//! # fn main() -> Result<(), jsonvalid::SchemaError> {
//! let schema = json!({"maxLength": 5});
//! let compiled = JsonSchema::compile(&schema)?;
//! # Ok(())
//! # }
//! ```
//!  * using custom configurations (such as draft 3 `required` semantics)
//! ```rust
//! # use jsonvalid::{Draft, JsonSchema};
//! # use serde_json::json;
//! # fn main() -> Result<(), jsonvalid::SchemaError> {
//! let schema = json!({"maxLength": 5});
//! let compiled = JsonSchema::options()
//!     .with_draft(Draft::Draft3)
//!     .compile(&schema)?;
//! # Ok(())
//! # }
//! ```
//!
//! Validation returns the first error as a structured value:
//! ```rust
//! use jsonvalid::JsonSchema;
//! use serde_json::json;
//!
//! let schema = json!({"type": "integer"});
//! let instance = json!(3.5);
//! let compiled = JsonSchema::compile(&schema).expect("A valid schema");
//! if let Err(error) = compiled.validate(&instance) {
//!     println!("Validation error: {}", error);
//!     assert_eq!(
//!         error.to_value(),
//!         json!({"error": "wrong-type", "expected": "integer", "data": 3.5})
//!     );
//! }
//! ```
#![warn(
    clippy::doc_markdown,
    clippy::explicit_iter_loop,
    clippy::map_unwrap_or,
    clippy::match_same_arms,
    clippy::needless_borrow,
    clippy::print_stdout,
    clippy::redundant_closure,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications
)]

mod compilation;
pub mod error;
mod helpers;
mod keywords;
pub mod primitive_type;
mod resolver;
mod schemas;

pub use compilation::{CompileOptions, DateTimeCheck, JsonSchema};
pub use error::{SchemaError, ValidationError, ValidationErrorKind};
pub use resolver::{FileResolver, ResolveRef};
pub use schemas::Draft;

use serde_json::Value;

/// A shortcut for validating `instance` against `schema` with default options.
/// ```rust
/// use jsonvalid::is_valid;
/// use serde_json::json;
///
/// let schema = json!({"maxLength": 5});
/// let instance = json!("foo");
/// assert!(is_valid(&schema, &instance));
/// ```
///
/// This function panics if an invalid schema is passed.
#[must_use]
#[inline]
pub fn is_valid(schema: &Value, instance: &Value) -> bool {
    let compiled = JsonSchema::compile(schema).expect("Invalid schema");
    compiled.is_valid(instance)
}
