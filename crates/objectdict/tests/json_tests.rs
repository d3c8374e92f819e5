//! JSON conversion

use objectdict::*;
use pretty_assertions::assert_eq;

const DOC: &str = r#"{"name":"objectdict","version":"0.1.1","meta":{"license":"MIT","keywords":["dict","dot syntax"]},"stars":0,"ratio":0.5,"archived":false,"homepage":null}"#;

#[test]
fn test_json_text_preserves_key_order() {
    let d = ObjectDict::from_json(DOC).unwrap();
    assert_eq!(d.to_json().unwrap(), DOC);
}

#[test]
fn test_json_values_reachable_by_attr_and_path() {
    let d = ObjectDict::from_json(DOC).unwrap();
    assert_eq!(d.attr("name").unwrap().as_str(), Some("objectdict"));
    assert_eq!(d.get_path("meta.license").unwrap().as_str(), Some("MIT"));
    assert!(d.attr("homepage").unwrap().is_null());
    assert_eq!(d["stars"], Value::Int(0));
    assert_eq!(d["ratio"], Value::Float(0.5));
}

#[test]
fn test_pretty_output_parses_back() {
    let d = ObjectDict::from_json(DOC).unwrap();
    let pretty = d.to_json_pretty().unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(ObjectDict::from_json(&pretty).unwrap(), d);
}

#[test]
fn test_serde_json_typed_roundtrip() {
    let d = objdict! { "a" => 1, "b" => vec!["x", "y"] };
    let json = serde_json::to_value(&d).unwrap();
    assert_eq!(json, serde_json::json!({"a": 1, "b": ["x", "y"]}));
    let back: ObjectDict = serde_json::from_value(json).unwrap();
    assert_eq!(back, d);
}

#[test]
fn test_non_object_top_level() {
    for text in ["1", "\"s\"", "null", "[]"] {
        let err = ObjectDict::from_json(text).unwrap_err();
        assert!(
            matches!(err, ObjectDictError::TypeMismatch { .. }),
            "{:?} should be a type mismatch",
            text
        );
    }
}
