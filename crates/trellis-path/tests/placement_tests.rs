//! Placement tests: policies, scatter, broadcast, and multi-level fan-out.

use serde_json::json;
use trellis_path::{read, write, Path, Slot, Value, WritePolicy};

fn p(s: &str) -> Path {
    Path::parse(s).unwrap()
}

fn place(tree: &mut Value, path: &str, value: Value) -> bool {
    write(tree, &p(path), Slot::from_value(value), WritePolicy::new())
}

// ============================================================================
// Plain placement
// ============================================================================

#[test]
fn test_place_builds_nested_structure() {
    let mut tree = json!({});
    assert!(place(&mut tree, "invoice.customer.name", json!("Ada")));
    assert!(place(&mut tree, "invoice.customer.city", json!("London")));
    assert!(place(&mut tree, "invoice.total", json!(12.5)));
    assert_eq!(
        tree,
        json!({"invoice": {
            "customer": {"name": "Ada", "city": "London"},
            "total": 12.5,
        }})
    );
}

#[test]
fn test_place_then_read_round_trip() {
    let values = [
        json!(true),
        json!(17),
        json!("text"),
        json!([1, 2, 3]),
        json!({"nested": {"deep": []}}),
    ];
    for value in values {
        let mut tree = json!({});
        let path = p("a.b.c");
        assert!(write(
            &mut tree,
            &path,
            Slot::from_value(value.clone()),
            WritePolicy::new()
        ));
        assert_eq!(read(&tree, &path), Slot::Present(value));
    }
}

#[test]
fn test_place_overwrites_previous_value() {
    let mut tree = json!({"a": {"b": 1}});
    assert!(place(&mut tree, "a.b", json!(2)));
    assert_eq!(tree, json!({"a": {"b": 2}}));
}

#[test]
fn test_place_refuses_scalar_intermediate_without_mutation() {
    let mut tree = json!({"config": {"port": 8080}});
    assert!(!place(&mut tree, "config.port.tls", json!(true)));
    assert_eq!(tree, json!({"config": {"port": 8080}}));
}

// ============================================================================
// Acceptance policy
// ============================================================================

#[test]
fn test_skip_null_rejects_explicit_null() {
    let mut tree = json!({});
    let policy = WritePolicy::new().with_skip_null(true);
    assert!(!write(&mut tree, &p("a.b"), Slot::Null, policy));
    assert_eq!(tree, json!({}));
}

#[test]
fn test_skip_missing_rejects_absent_value() {
    let mut tree = json!({});
    let policy = WritePolicy::new().with_skip_missing(true);
    assert!(!write(&mut tree, &p("a.b"), Slot::Missing, policy));
    assert_eq!(tree, json!({}));
}

#[test]
fn test_strict_rejects_both_but_not_values() {
    let mut tree = json!({});
    let policy = WritePolicy::new().with_strict(true);
    assert!(!write(&mut tree, &p("a"), Slot::Null, policy));
    assert!(!write(&mut tree, &p("a"), Slot::Missing, policy));
    assert!(write(&mut tree, &p("a"), Slot::from_value(json!(0)), policy));
    assert_eq!(tree, json!({"a": 0}));
}

#[test]
fn test_preserve_null_defeats_skip_null() {
    let mut tree = json!({});
    let policy = WritePolicy::new()
        .with_skip_null(true)
        .with_preserve_null(true);
    assert!(write(&mut tree, &p("a.b"), Slot::Null, policy));
    assert_eq!(tree, json!({"a": {"b": null}}));
}

#[test]
fn test_preserve_null_does_not_rescue_missing() {
    let mut tree = json!({});
    let policy = WritePolicy::new()
        .with_strict(true)
        .with_preserve_null(true);
    assert!(write(&mut tree, &p("a"), Slot::Null, policy));
    assert!(!write(&mut tree, &p("b"), Slot::Missing, policy));
    assert_eq!(tree, json!({"a": null}));
}

// ============================================================================
// Single wildcard: broadcast and scatter
// ============================================================================

#[test]
fn test_broadcast_to_existing_elements() {
    let mut tree = json!({"a": [{}, {}, {}]});
    assert!(place(&mut tree, "a[*].c", json!("X")));
    assert_eq!(tree, json!({"a": [{"c": "X"}, {"c": "X"}, {"c": "X"}]}));
}

#[test]
fn test_broadcast_onto_empty_sequence_seeds_one_element() {
    let mut tree = json!({"a": []});
    assert!(place(&mut tree, "a[*].c", json!(1)));
    assert_eq!(tree, json!({"a": [{"c": 1}]}));
}

#[test]
fn test_scatter_sequence_value() {
    let mut tree = json!({"a": []});
    assert!(place(&mut tree, "a[*].c", json!(["x", "y", "z"])));
    assert_eq!(tree, json!({"a": [{"c": "x"}, {"c": "y"}, {"c": "z"}]}));
}

#[test]
fn test_scatter_into_populated_sequence_merges_fields() {
    let mut tree = json!({"a": [{"id": 1}, {"id": 2}]});
    assert!(place(&mut tree, "a[*].c", json!(["x", "y"])));
    assert_eq!(
        tree,
        json!({"a": [{"id": 1, "c": "x"}, {"id": 2, "c": "y"}]})
    );
}

#[test]
fn test_second_write_broadcasts_over_scattered_elements() {
    let mut tree = json!({});
    assert!(place(&mut tree, "a[*].name", json!(["one", "two"])));
    assert!(place(&mut tree, "a[*].active", json!(true)));
    assert_eq!(
        tree,
        json!({"a": [
            {"name": "one", "active": true},
            {"name": "two", "active": true},
        ]})
    );
}

// ============================================================================
// Multi-level fan-out
// ============================================================================

#[test]
fn test_fan_out_mirrors_populated_shape() {
    let mut tree = json!({});
    assert!(place(&mut tree, "g[*].items[*].v", json!([[1, 2], [3]])));
    assert!(place(&mut tree, "g[*].items[*].seen", json!(false)));
    assert_eq!(
        tree,
        json!({"g": [
            {"items": [{"v": 1, "seen": false}, {"v": 2, "seen": false}]},
            {"items": [{"v": 3, "seen": false}]},
        ]})
    );
}

#[test]
fn test_fan_out_flat_list_builds_grid() {
    let mut tree = json!({});
    assert!(place(&mut tree, "g[*].items[*].v", json!([1, 2, 3, 4, 5])));
    // 5 items over ceil(sqrt(5)) = 3 rows of up to 2
    assert_eq!(
        tree,
        json!({"g": [
            {"items": [{"v": 1}, {"v": 2}]},
            {"items": [{"v": 3}, {"v": 4}]},
            {"items": [{"v": 5}]},
        ]})
    );
}

#[test]
fn test_fan_out_grid_is_limited_to_two_levels() {
    let mut tree = json!({});
    assert!(place(&mut tree, "a[*].b[*].c[*].v", json!([1, 2])));
    // three markers never grid: the list distributes one item per outer branch
    assert_eq!(
        tree,
        json!({"a": [
            {"b": [{"c": [{"v": 1}]}]},
            {"b": [{"c": [{"v": 2}]}]},
        ]})
    );
}
