//! Value placement into a target tree.
//!
//! Placement creates intermediate containers and sequences lazily, applies
//! the acceptance policy before touching anything, and reports success as a
//! boolean. A `false` outcome is the caller's cue to run
//! [`cleanup`](crate::cleanup) on the same path.
//!
//! Three placement shapes exist: plain dotted paths, single-marker paths
//! (scatter a sequence value element-wise, or broadcast a single value to
//! every element), and multi-marker paths (the same rules composed across
//! nesting levels).

use crate::{Path, PathKind, Seg, Slot, WritePolicy};
use serde_json::{Map, Value};

/// Place `value` into `tree` at `path` under `policy`.
///
/// Returns `true` when the value was placed, `false` when the policy
/// rejected it or the path ran into an unusable intermediate (a scalar or
/// sequence where a container was needed). Placement never panics and never
/// returns an error.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use trellis_path::{write, Path, Slot, WritePolicy};
///
/// let mut tree = json!({});
/// let path = Path::parse("user.name").unwrap();
/// let placed = write(&mut tree, &path, Slot::from_value(json!("Alice")), WritePolicy::new());
///
/// assert!(placed);
/// assert_eq!(tree, json!({"user": {"name": "Alice"}}));
/// ```
pub fn write(tree: &mut Value, path: &Path, value: Slot, policy: WritePolicy) -> bool {
    if !policy.accepts(&value) {
        tracing::debug!(path = %path, value = value.kind(), "write rejected by policy");
        return false;
    }

    match PathKind::of(path) {
        PathKind::Plain => write_plain(tree, path.segments(), value),
        PathKind::Wildcard => write_wildcard(tree, path, value),
    }
}

/// Set a value through a plain segment chain, creating containers on the way.
///
/// An absent value creates the chain but not the final key; the write still
/// counts as placed, and any stray empty chain is the cleaner's concern.
fn write_plain(tree: &mut Value, segs: &[Seg], value: Slot) -> bool {
    let Some((last, parents)) = segs.split_last() else {
        return false;
    };
    let Some(obj) = acquire_chain(tree, parents) else {
        return false;
    };
    if let Some(v) = value.into_value() {
        obj.insert(last.name().to_owned(), v);
    }
    true
}

/// Walk `segs` from `tree`, creating an empty container at every missing or
/// null slot, and return the container the walk ends in. A scalar or
/// sequence anywhere in the chain stops the walk.
fn acquire_chain<'a>(tree: &'a mut Value, segs: &[Seg]) -> Option<&'a mut Map<String, Value>> {
    let mut current = tree;
    for seg in segs {
        let obj = as_container(current)?;
        current = obj.entry(seg.name().to_owned()).or_insert(Value::Null);
    }
    as_container(current)
}

/// Coerce an absent (null) slot into an empty container; refuse anything
/// already holding a non-container value.
fn as_container(value: &mut Value) -> Option<&mut Map<String, Value>> {
    if value.is_null() {
        *value = Value::Object(Map::new());
    }
    value.as_object_mut()
}

/// Resolve or create the chain to a marked field and force it to hold a
/// sequence. A non-sequence occupant is overwritten with an empty one.
fn acquire_sequence<'a>(tree: &'a mut Value, segs: &[Seg]) -> Option<&'a mut Vec<Value>> {
    let (last, parents) = segs.split_last()?;
    let obj = acquire_chain(tree, parents)?;
    let slot = obj
        .entry(last.name().to_owned())
        .or_insert_with(|| Value::Array(Vec::new()));
    if !slot.is_array() {
        *slot = Value::Array(Vec::new());
    }
    slot.as_array_mut()
}

#[inline]
fn empty_container() -> Value {
    Value::Object(Map::new())
}

fn write_wildcard(tree: &mut Value, path: &Path, value: Slot) -> bool {
    let parts = path.split_at_wildcards();
    if parts.len() == 2 {
        write_single(tree, &parts[0], &parts[1], value)
    } else {
        write_fanned(tree, &parts, value)
    }
}

/// Single-marker placement: scatter a sequence value, broadcast anything else.
fn write_single(tree: &mut Value, seq_path: &Path, sub: &Path, value: Slot) -> bool {
    let Some(items) = acquire_sequence(tree, seq_path.segments()) else {
        return false;
    };
    match value {
        Slot::Present(Value::Array(values)) => scatter(items, sub, values),
        other => broadcast(items, sub, other),
    }
    true
}

/// Distribute `values` element-wise, growing the sequence to fit. Existing
/// elements beyond the value count are left untouched.
fn scatter(items: &mut Vec<Value>, sub: &Path, values: Vec<Value>) {
    while items.len() < values.len() {
        items.push(empty_container());
    }
    for (i, v) in values.into_iter().enumerate() {
        if sub.is_empty() {
            items[i] = v;
        } else {
            set_in_element(&mut items[i], sub.segments(), Slot::from_value(v));
        }
    }
}

/// Apply one value to every element. An empty sequence is seeded with a
/// single container first, so broadcasting onto an empty sequence yields a
/// one-element sequence.
fn broadcast(items: &mut Vec<Value>, sub: &Path, value: Slot) {
    if items.is_empty() {
        items.push(empty_container());
    }
    if sub.is_empty() {
        let rendered = value.into_json();
        for item in items.iter_mut() {
            *item = rendered.clone();
        }
    } else {
        for item in items.iter_mut() {
            set_in_element(item, sub.segments(), value.clone());
        }
    }
}

/// Plain-rule set inside a sequence element. An element that is not a
/// container is replaced with a fresh one first.
fn set_in_element(element: &mut Value, segs: &[Seg], value: Slot) {
    if !element.is_object() {
        *element = empty_container();
    }
    write_plain(element, segs, value);
}

/// One pending branch of a multi-marker placement: the element it targets,
/// addressed by the sequence indices chosen at each level above it, and the
/// portion of the value that flows down this branch.
struct Frame {
    indices: Vec<usize>,
    value: Slot,
}

/// Multi-marker placement.
///
/// Levels are processed through an explicit work list rather than recursion,
/// so stack use does not grow with marker count. Each level ensures its
/// named sequence exists, seeds one container when empty, and either
/// distributes a sequence value element-wise (growing the sequence to match,
/// exhausted positions turning absent) or reuses a single value for every
/// branch. The deepest level applies the single-marker rule.
fn write_fanned(tree: &mut Value, parts: &[Path], value: Slot) -> bool {
    let Some(outer) = acquire_sequence(tree, parts[0].segments()) else {
        return false;
    };

    let mut work = Vec::new();
    match value {
        Slot::Present(Value::Array(values)) => {
            if parts.len() == 3
                && outer.is_empty()
                && !values.is_empty()
                && values.iter().all(|v| !v.is_array())
            {
                tracing::debug!(
                    count = values.len(),
                    "laying a flat sequence out as a rectangular two-level grid"
                );
                rectangular_fill(outer, &parts[1], &parts[2], values);
                return true;
            }
            seed_frames(&mut work, outer, &[], values);
        }
        other => {
            if outer.is_empty() {
                outer.push(empty_container());
            }
            for i in 0..outer.len() {
                work.push(Frame {
                    indices: vec![i],
                    value: other.clone(),
                });
            }
        }
    }

    while let Some(frame) = work.pop() {
        let level = frame.indices.len();
        let Some(element) = element_at(tree, parts, &frame.indices) else {
            continue;
        };
        let remaining = &parts[level..];
        if remaining.len() == 2 {
            write_single(element, &remaining[0], &remaining[1], frame.value);
            continue;
        }
        let Some(items) = acquire_sequence(element, remaining[0].segments()) else {
            continue;
        };
        match frame.value {
            Slot::Present(Value::Array(values)) => {
                seed_frames(&mut work, items, &frame.indices, values);
            }
            other => {
                if items.is_empty() {
                    items.push(empty_container());
                }
                for i in 0..items.len() {
                    let mut indices = frame.indices.clone();
                    indices.push(i);
                    work.push(Frame {
                        indices,
                        value: other.clone(),
                    });
                }
            }
        }
    }
    true
}

/// Queue one branch per element, pairing element `i` with `values[i]`. The
/// sequence grows to the value count; elements past it receive an absent
/// branch value.
fn seed_frames(
    work: &mut Vec<Frame>,
    items: &mut Vec<Value>,
    indices: &[usize],
    values: Vec<Value>,
) {
    while items.len() < values.len() {
        items.push(empty_container());
    }
    for i in 0..items.len() {
        let mut next = indices.to_vec();
        next.push(i);
        work.push(Frame {
            indices: next,
            value: Slot::from_option(values.get(i).cloned()),
        });
    }
}

/// Re-navigate from the root to the element a frame addresses. Every
/// structure on the way was created when the frame was queued, so a failed
/// hop only drops that branch.
fn element_at<'a>(tree: &'a mut Value, parts: &[Path], indices: &[usize]) -> Option<&'a mut Value> {
    let mut current = tree;
    for (part, &index) in parts.iter().zip(indices) {
        let (last, parents) = part.segments().split_last()?;
        for seg in parents {
            current = current.as_object_mut()?.get_mut(seg.name())?;
        }
        current = current
            .as_object_mut()?
            .get_mut(last.name())?
            .as_array_mut()?
            .get_mut(index)?;
    }
    Some(current)
}

/// Lay a flat sequence out as a fresh two-level grid, row-major.
///
/// Engages only for exactly two markers when the outer sequence is empty and
/// the value has no sequence elements to mirror a nested shape from. Row
/// count is `ceil(sqrt(n))`; each row takes `ceil(n / rows)` items. The
/// shape is kept for compatibility with existing mappings and is not
/// extended to deeper nestings.
fn rectangular_fill(outer: &mut Vec<Value>, inner_path: &Path, sub: &Path, values: Vec<Value>) {
    let rows = (values.len() as f64).sqrt().ceil() as usize;
    let per_row = values.len().div_ceil(rows);
    let mut values = values.into_iter();
    for _ in 0..rows {
        let chunk: Vec<Value> = values.by_ref().take(per_row).collect();
        if chunk.is_empty() {
            break;
        }
        let mut element = empty_container();
        write_single(&mut element, inner_path, sub, Slot::Present(Value::Array(chunk)));
        outer.push(element);
    }
}
