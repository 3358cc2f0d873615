//! External schema loading and `$ref` classification.

use crate::{compilation::Scope, error::ValidationError, helpers};
use percent_encoding::percent_decode_str;
use serde_json::Value;
use std::{fs, path::PathBuf};
use url::Url;

/// How far a `$ref` chain may be chased within one validation call before the
/// engine gives up and reports the schema as unresolvable. Cyclic schemas hit
/// this bound instead of recursing forever.
pub(crate) const MAX_REF_DEPTH: usize = 64;

/// Capability for loading external schemas referenced by URI.
///
/// `None` is the missing-schema signal; the engine turns it into an
/// `unresolvable-ref` error. Implementations perform the only I/O in the
/// engine, so callers that need timeouts or cancellation wrap their resolver
/// accordingly.
pub trait ResolveRef: Send + Sync {
    /// Load and parse the schema behind `reference`.
    fn resolve(&self, reference: &str) -> Option<Value>;
}

/// Default resolver: the reference is a `file://` URL or a plain filesystem
/// path pointing at a JSON document.
#[derive(Debug, Default)]
pub struct FileResolver;

impl ResolveRef for FileResolver {
    fn resolve(&self, reference: &str) -> Option<Value> {
        let path = match Url::parse(reference) {
            Ok(url) if url.scheme() == "file" => {
                PathBuf::from(percent_decode_str(url.path()).decode_utf8().ok()?.as_ref())
            }
            Ok(url) => {
                tracing::debug!(scheme = %url.scheme(), %reference, "unsupported reference scheme");
                return None;
            }
            Err(_) => PathBuf::from(reference),
        };
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "failed to read external schema");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(schema) => Some(schema),
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "external schema is not valid JSON");
                None
            }
        }
    }
}

/// Outcome of following one `$ref`.
pub(crate) enum Resolved<'s> {
    /// The referent lives in the current root document.
    Local(&'s Value),
    /// A remote document; it becomes the root for pointers resolved inside it.
    Remote(Value),
}

pub(crate) fn resolve_reference<'s>(
    scope: &Scope<'s>,
    reference: &str,
) -> Result<Resolved<'s>, ValidationError<'static>> {
    if reference == "#" {
        return Ok(Resolved::Local(scope.root));
    }
    if let Some(pointer) = reference.strip_prefix('#') {
        return helpers::pointer(scope.root, pointer)
            .map(Resolved::Local)
            .ok_or_else(|| ValidationError::unresolvable_ref(reference.to_owned()));
    }
    match scope.resolver.resolve(reference) {
        Some(document) => Ok(Resolved::Remote(document)),
        None => Err(ValidationError::unresolvable_ref(reference.to_owned())),
    }
}
