//! Value resolution against a source tree.
//!
//! Resolution is pure: the source tree is never mutated, and every anomaly —
//! missing keys, non-container intermediates, empty sequences — has a
//! defined, non-panicking result.

use crate::{Path, PathKind, Seg, Slot};
use serde_json::Value;

/// Resolve `path` against `tree`.
///
/// Plain paths walk field by field and yield whatever the final key stores.
/// Wildcard paths visit sequence elements and assemble their results into a
/// new sequence; with several markers the levels compose, and only the final
/// level is flattened.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use trellis_path::{read, Path, Slot};
///
/// let tree = json!({"user": {"tags": [
///     {"id": 1, "name": "admin"},
///     {"id": 2, "name": "user"},
/// ]}});
///
/// let path = Path::parse("user.tags[*].name").unwrap();
/// assert_eq!(read(&tree, &path), Slot::Present(json!(["admin", "user"])));
/// ```
pub fn read(tree: &Value, path: &Path) -> Slot {
    match PathKind::of(path) {
        PathKind::Plain => read_plain(tree, path.segments()),
        PathKind::Wildcard => read_wildcard(tree, path),
    }
}

/// Walk a plain segment chain. An empty chain yields the tree itself.
pub(crate) fn read_plain(tree: &Value, segs: &[Seg]) -> Slot {
    let Some((last, parents)) = segs.split_last() else {
        return Slot::from_value(tree.clone());
    };

    let mut current = tree;
    for seg in parents {
        match current.as_object().and_then(|obj| obj.get(seg.name())) {
            Some(child) => current = child,
            None => return Slot::Missing,
        }
    }
    match current.as_object() {
        Some(obj) => Slot::from_lookup(obj.get(last.name())),
        None => Slot::Missing,
    }
}

fn read_wildcard(tree: &Value, path: &Path) -> Slot {
    let parts = path.split_at_wildcards();
    if parts.len() == 2 {
        read_single(tree, &parts[0], &parts[1])
    } else {
        read_fanned(tree, &parts)
    }
}

/// Single-marker resolution: the marked field must hold a sequence.
///
/// Without a sub-path the sequence is returned whole. With one, every
/// element is read through the plain rule; the result keeps the source
/// length, rendering unresolvable elements as `null`.
fn read_single(tree: &Value, seq_path: &Path, sub: &Path) -> Slot {
    let Slot::Present(Value::Array(items)) = read_plain(tree, seq_path.segments()) else {
        return Slot::Missing;
    };

    if sub.is_empty() {
        return Slot::Present(Value::Array(items));
    }

    let mapped = items
        .iter()
        .map(|item| read_plain(item, sub.segments()).into_json())
        .collect();
    Slot::Present(Value::Array(mapped))
}

/// Multi-marker resolution: expand level by level, splice the last.
///
/// Each intermediate level keeps sequence-valued results intact as single
/// entries feeding the next expansion; values that are not sequences drop
/// out there. At the final level a sequence result is spliced flat instead.
fn read_fanned(tree: &Value, parts: &[Path]) -> Slot {
    let mut current: Vec<Value> = match read_plain(tree, parts[0].segments()) {
        Slot::Present(v) => vec![v],
        Slot::Null | Slot::Missing => Vec::new(),
    };

    for (level, sub) in parts[1..].iter().enumerate() {
        let last = level + 2 == parts.len();
        let mut next = Vec::new();
        for value in current {
            let Value::Array(items) = value else { continue };
            for item in items {
                let resolved = if sub.is_empty() {
                    Slot::from_value(item)
                } else {
                    read_plain(&item, sub.segments())
                };
                if last {
                    match resolved {
                        Slot::Present(Value::Array(nested)) => next.extend(nested),
                        other => next.push(other.into_json()),
                    }
                } else if let Slot::Present(v) = resolved {
                    next.push(v);
                }
            }
        }
        current = next;
    }

    Slot::Present(Value::Array(current))
}
