//! Removal of container chains left empty by a rejected write.
//!
//! A rejected write can leave freshly created, empty containers behind —
//! intermediates built before the rejection was known. The cleaner walks the
//! exact chain a path addresses and deletes what the write left hollow. It
//! inspects nothing beyond that chain: structure that did not just become
//! empty stays, however empty-looking its descendants may be.

use crate::{Path, PathKind, Seg};
use serde_json::{Map, Value};

/// Undo the structural side effects of a rejected write at `path`.
///
/// Call only after [`write`](crate::write) returns `false`; a successful
/// write needs no reconciliation.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use trellis_path::{cleanup, Path};
///
/// let mut tree = json!({"a": {"b": {"c": {}}}, "keep": 1});
/// cleanup(&mut tree, &Path::parse("a.b.c").unwrap());
/// assert_eq!(tree, json!({"keep": 1}));
/// ```
pub fn cleanup(tree: &mut Value, path: &Path) {
    match PathKind::of(path) {
        PathKind::Plain => {
            prune_plain(tree, path.segments());
        }
        PathKind::Wildcard => prune_wildcard(tree, path),
    }
}

/// Delete the last segment's key when it holds an empty container, then
/// cascade upward: every ancestor emptied by that deletion goes too. An
/// ancestor that keeps other fields stops the cascade. Returns whether the
/// entry addressed by `segs` was removed.
fn prune_plain(node: &mut Value, segs: &[Seg]) -> bool {
    let Some(obj) = node.as_object_mut() else {
        return false;
    };
    match segs {
        [] => false,
        [last] => {
            if holds_empty_container(obj, last.name()) {
                obj.remove(last.name());
                true
            } else {
                false
            }
        }
        [head, rest @ ..] => {
            let Some(child) = obj.get_mut(head.name()) else {
                return false;
            };
            if !prune_plain(child, rest) {
                return false;
            }
            if child.as_object().is_some_and(Map::is_empty) {
                obj.remove(head.name());
                true
            } else {
                false
            }
        }
    }
}

#[inline]
fn holds_empty_container(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key)
        .and_then(Value::as_object)
        .is_some_and(Map::is_empty)
}

/// Drop every empty-container element of the first marked sequence, then the
/// sequence itself if nothing remains. Deeper markers are not inspected.
fn prune_wildcard(tree: &mut Value, path: &Path) {
    let Some((prefix, field)) = path.before_wildcard() else {
        return;
    };
    let Some(parent) = container_at(tree, prefix.segments()) else {
        return;
    };
    let Some(items) = parent.get_mut(field).and_then(Value::as_array_mut) else {
        return;
    };

    items.retain(|item| !item.as_object().is_some_and(Map::is_empty));
    if items.is_empty() {
        tracing::debug!(path = %path, "dropping sequence emptied by cleanup");
        parent.remove(field);
    }
}

/// Walk plain segments to an existing container; no creation.
fn container_at<'a>(tree: &'a mut Value, segs: &[Seg]) -> Option<&'a mut Map<String, Value>> {
    let mut current = tree;
    for seg in segs {
        current = current.as_object_mut()?.get_mut(seg.name())?;
    }
    current.as_object_mut()
}
