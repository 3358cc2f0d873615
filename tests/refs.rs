use jsonvalid::{JsonSchema, ResolveRef};
use serde_json::{json, Value};
use std::{fs, io::Write};

#[test]
fn file_resolver_end_to_end() {
    let path = std::env::temp_dir().join("jsonvalid-refs-remote.json");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(br#"{"type": "integer", "minimum": 0}"#)
        .unwrap();

    let reference = path.to_str().unwrap().to_string();
    let schema = json!({ "properties": { "count": { "$ref": reference } } });
    let compiled = JsonSchema::compile(&schema).unwrap();
    assert!(compiled.is_valid(&json!({"count": 3})));
    assert!(!compiled.is_valid(&json!({"count": -1})));
    assert!(!compiled.is_valid(&json!({"count": "x"})));

    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file_is_unresolvable() {
    let schema = json!({"$ref": "/no/such/file.json"});
    let compiled = JsonSchema::compile(&schema).unwrap();
    let instance = json!(1);
    let error = compiled.validate(&instance).unwrap_err();
    assert_eq!(
        error.to_value(),
        json!({"error": "unresolvable-ref", "ref": "/no/such/file.json"})
    );
}

struct MapResolver(Value);

impl ResolveRef for MapResolver {
    fn resolve(&self, reference: &str) -> Option<Value> {
        self.0.get(reference).cloned()
    }
}

#[test]
fn remote_document_rebinds_the_root() {
    // `#/definitions/item` inside the remote document must resolve against
    // the remote document even though the original root has a definition of
    // the same name.
    let remote = json!({
        "definitions": {"item": {"type": "string"}},
        "items": {"$ref": "#/definitions/item"}
    });
    let schema = json!({
        "definitions": {"item": {"type": "integer"}},
        "properties": {"tags": {"$ref": "remote://tags"}}
    });
    let compiled = JsonSchema::options()
        .with_resolver(MapResolver(json!({ "remote://tags": remote })))
        .compile(&schema)
        .unwrap();
    assert!(compiled.is_valid(&json!({"tags": ["a", "b"]})));
    assert!(!compiled.is_valid(&json!({"tags": [1]})));
}

#[test]
fn pointer_segments_are_decoded() {
    let schema = json!({
        "definitions": {"a/b c": {"type": "boolean"}},
        "$ref": "#/definitions/a~1b%20c"
    });
    let compiled = JsonSchema::compile(&schema).unwrap();
    assert!(compiled.is_valid(&json!(true)));
    assert!(!compiled.is_valid(&json!("true")));
}

#[test]
fn digit_segments_index_arrays() {
    let schema = json!({
        "definitions": {"choices": [{"type": "string"}, {"type": "integer"}]},
        "$ref": "#/definitions/choices/1"
    });
    let compiled = JsonSchema::compile(&schema).unwrap();
    assert!(compiled.is_valid(&json!(5)));
    assert!(!compiled.is_valid(&json!("5")));
}

#[test]
fn explicit_root_schema() {
    // The compiled schema is a fragment; its pointer resolves against the
    // enclosing document supplied as the root.
    let document = json!({
        "definitions": {"name": {"type": "string", "minLength": 1}}
    });
    let fragment = json!({"$ref": "#/definitions/name"});
    let compiled = JsonSchema::options()
        .with_root_schema(&document)
        .compile(&fragment)
        .unwrap();
    assert!(compiled.is_valid(&json!("x")));
    assert!(!compiled.is_valid(&json!("")));
    assert!(!compiled.is_valid(&json!(1)));
}

#[test]
fn self_referential_root_hits_the_depth_bound() {
    let schema = json!({"$ref": "#"});
    let compiled = JsonSchema::compile(&schema).unwrap();
    let instance = json!(1);
    let error = compiled.validate(&instance).unwrap_err();
    assert_eq!(error.kind().discriminant(), "unresolvable-ref");
    assert!(!compiled.is_valid(&instance));
}

#[test]
fn recursive_schema_on_finite_data_terminates() {
    // Linked-list shape: recursion consumes the instance, so the depth bound
    // is never reached for finite data.
    let schema = json!({
        "definitions": {
            "node": {
                "type": "object",
                "required": ["value"],
                "properties": {
                    "value": {"type": "integer"},
                    "next": {"$ref": "#/definitions/node"}
                }
            }
        },
        "$ref": "#/definitions/node"
    });
    let compiled = JsonSchema::compile(&schema).unwrap();
    let mut list = json!({"value": 0});
    for value in 1..20 {
        list = json!({"value": value, "next": list});
    }
    assert!(compiled.is_valid(&list));
    let mut broken = json!({"value": "x"});
    for value in 1..20 {
        broken = json!({"value": value, "next": broken});
    }
    assert!(!compiled.is_valid(&broken));
}
