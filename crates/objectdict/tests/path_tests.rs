//! Dotted-path access through nested dicts

use objectdict::*;

fn config() -> ObjectDict {
    let mut d = ObjectDict::new();
    d.set_path("server.http.port", 8080).unwrap();
    d.set_path("server.http.host", "localhost").unwrap();
    d.set_path("server.name", "api").unwrap();
    d
}

#[test]
fn test_get_path_reads_nested_values() {
    let d = config();
    assert_eq!(d.get_path("server.http.port").unwrap(), &Value::Int(8080));
    assert_eq!(d.get_path("server.name").unwrap().as_str(), Some("api"));
}

#[test]
fn test_path_matches_attribute_chain() {
    let d = config();
    let via_attrs = d
        .attr("server")
        .and_then(Value::try_dict)
        .and_then(|s| s.attr("http"))
        .and_then(Value::try_dict)
        .and_then(|h| h.attr("host"))
        .unwrap();
    assert_eq!(d.get_path("server.http.host").unwrap(), via_attrs);
}

#[test]
fn test_path_segments_need_not_be_identifiers() {
    let mut d = ObjectDict::new();
    d.set_path("with space.1st", true).unwrap();
    assert!(d.has_path("with space.1st"));
    assert!(d.attr("with space").is_err());
}

#[test]
fn test_del_path_then_missing() {
    let mut d = config();
    d.del_path("server.http").unwrap();
    assert!(!d.has_path("server.http.port"));
    match d.get_path("server.http.port").unwrap_err() {
        ObjectDictError::KeyNotFound { key } => assert_eq!(key, "server.http"),
        other => panic!("Expected KeyNotFound, got {:?}", other),
    }
}

#[test]
fn test_traversal_through_list_fails() {
    let mut d = ObjectDict::new();
    d.insert("items", vec![1, 2]);
    let err = d.get_path("items.0").unwrap_err();
    assert!(matches!(
        err,
        ObjectDictError::NotADict {
            found: "list",
            ..
        }
    ));
}
