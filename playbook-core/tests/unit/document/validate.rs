use super::*;
use serde_json::json;

#[test]
fn accepts_minimal_document() {
    let doc = json!({
        "version": "1.0",
        "frames": [[{ "id": "disc", "type": "disc", "x": 1, "y": 2.5 }]]
    });
    validate_document_value(&doc).unwrap();
}

#[test]
fn empty_version_is_rejected() {
    let doc = json!({ "version": "", "frames": [] });
    let err = validate_document_value(&doc).unwrap_err();
    assert_eq!(err.issues.len(), 1);
    assert_eq!(err.issues[0].path(), "$.version");
}

#[test]
fn reports_every_bad_field_with_its_path() {
    let doc = json!({
        "version": 1,
        "frames": [
            [{ "id": "a", "type": "offense", "x": 0, "y": 0 }],
            [{ "id": 3, "type": "offense", "x": "0", "y": 0 }, 7],
            "nope"
        ]
    });
    let err = validate_document_value(&doc).unwrap_err();
    let paths: Vec<String> = err.issues.iter().map(|e| e.path()).collect();
    assert_eq!(
        paths,
        [
            "$.version",
            "$.frames[1][0].id",
            "$.frames[1][0].x",
            "$.frames[1][1]",
            "$.frames[2]"
        ]
    );
    assert!(err.to_string().contains("$.frames[1][0].x: x must be a number"));
}

#[test]
fn missing_fields_and_non_objects_are_rejected() {
    let err = validate_document_value(&json!({})).unwrap_err();
    assert_eq!(err.issues.len(), 2);

    let err = validate_document_value(&json!([1, 2])).unwrap_err();
    assert_eq!(err.issues[0].path(), "$");
    assert_eq!(err.to_string(), "document must be a JSON object");
}
