//! Resolution tests against realistic source trees.

use serde_json::json;
use trellis_path::{read, Path, Slot};

fn p(s: &str) -> Path {
    Path::parse(s).unwrap()
}

// ============================================================================
// Plain paths
// ============================================================================

#[test]
fn test_resolve_scalar_field() {
    let tree = json!({"order": {"id": "A-1001", "total": 99.5}});
    assert_eq!(read(&tree, &p("order.id")), Slot::Present(json!("A-1001")));
    assert_eq!(read(&tree, &p("order.total")), Slot::Present(json!(99.5)));
}

#[test]
fn test_resolve_container_and_sequence_values() {
    let tree = json!({"order": {"lines": [1, 2], "meta": {"tag": "x"}}});
    assert_eq!(read(&tree, &p("order.lines")), Slot::Present(json!([1, 2])));
    assert_eq!(
        read(&tree, &p("order.meta")),
        Slot::Present(json!({"tag": "x"}))
    );
}

#[test]
fn test_resolve_absence_states_are_distinct() {
    let tree = json!({"customer": {"phone": null}});
    assert_eq!(read(&tree, &p("customer.phone")), Slot::Null);
    assert_eq!(read(&tree, &p("customer.email")), Slot::Missing);
}

#[test]
fn test_resolve_deep_missing_never_panics() {
    let tree = json!({});
    assert_eq!(
        read(&tree, &p("a.b.c.d.e.f.g.h.i.j.k.l.m.n.o.p")),
        Slot::Missing
    );
}

#[test]
fn test_resolve_through_scalar_yields_missing() {
    let tree = json!({"a": {"b": "leaf"}});
    assert_eq!(read(&tree, &p("a.b.c")), Slot::Missing);
}

#[test]
fn test_resolve_does_not_mutate_source() {
    let tree = json!({"a": {"b": [1, 2, 3]}});
    let before = tree.clone();
    let _ = read(&tree, &p("a.b[*]"));
    let _ = read(&tree, &p("a.missing.deeper"));
    assert_eq!(tree, before);
}

// ============================================================================
// Single wildcard
// ============================================================================

#[test]
fn test_resolve_wildcard_field_across_elements() {
    let tree = json!({"user": {"tags": [
        {"id": 1, "name": "admin"},
        {"id": 2, "name": "user"},
        {"id": 3, "name": "guest"},
    ]}});
    assert_eq!(
        read(&tree, &p("user.tags[*].name")),
        Slot::Present(json!(["admin", "user", "guest"]))
    );
}

#[test]
fn test_resolve_wildcard_whole_sequence() {
    let tree = json!({"scores": [10, 20, 30]});
    assert_eq!(
        read(&tree, &p("scores[*]")),
        Slot::Present(json!([10, 20, 30]))
    );
}

#[test]
fn test_resolve_wildcard_deep_sub_path() {
    let tree = json!({"orders": [
        {"customer": {"name": "Ada"}},
        {"customer": {"name": "Grace"}},
    ]});
    assert_eq!(
        read(&tree, &p("orders[*].customer.name")),
        Slot::Present(json!(["Ada", "Grace"]))
    );
}

#[test]
fn test_resolve_wildcard_over_empty_sequence() {
    let tree = json!({"a": []});
    assert_eq!(read(&tree, &p("a[*].name")), Slot::Present(json!([])));
}

#[test]
fn test_resolve_wildcard_on_non_sequence() {
    let tree = json!({"a": {"name": "not a list"}});
    assert_eq!(read(&tree, &p("a[*].name")), Slot::Missing);
}

// ============================================================================
// Nested wildcards
// ============================================================================

#[test]
fn test_resolve_nested_wildcards_flatten_once() {
    let tree = json!({"g": [
        {"items": [{"v": "a"}, {"v": "b"}]},
        {"items": [{"v": "c"}]},
    ]});
    let result = read(&tree, &p("g[*].items[*].v"));
    assert_eq!(result, Slot::Present(json!(["a", "b", "c"])));
}

#[test]
fn test_resolve_three_wildcard_levels() {
    let tree = json!({"a": [
        {"b": [
            {"c": [{"v": 1}, {"v": 2}]},
        ]},
        {"b": [
            {"c": [{"v": 3}]},
            {"c": [{"v": 4}]},
        ]},
    ]});
    assert_eq!(
        read(&tree, &p("a[*].b[*].c[*].v")),
        Slot::Present(json!([1, 2, 3, 4]))
    );
}

#[test]
fn test_resolve_nested_wildcards_with_missing_groups() {
    let tree = json!({"g": [
        {"items": [{"v": 1}]},
        {"other": true},
        {"items": [{"v": 2}]},
    ]});
    assert_eq!(
        read(&tree, &p("g[*].items[*].v")),
        Slot::Present(json!([1, 2]))
    );
}
