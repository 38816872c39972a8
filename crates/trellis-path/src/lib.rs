//! Dotted-path resolution and placement over JSON trees.
//!
//! `trellis-path` is the path-expression engine behind a field-by-field
//! mapping pipeline: it reads values out of a source tree and places them
//! into a target tree under construction, using a small dotted-path grammar
//! with an optional `[*]` wildcard marker meaning "every element of this
//! sequence".
//!
//! # Core Concepts
//!
//! - **Path**: parsed dotted path, e.g. `user.tags[*].name`
//! - **Slot**: three-state value — present, explicit null, or missing
//! - **read**: pure resolution of a path against a tree
//! - **write**: placement with lazy container creation and scatter /
//!   broadcast semantics across sequences, gated by a [`WritePolicy`]
//! - **cleanup**: removal of container chains a rejected write left empty
//!
//! The host calls the three entry points per field mapping: resolve the
//! source value with [`read`], place it with [`write`], and reconcile with
//! [`cleanup`] whenever the write reports `false`.
//!
//! # Quick Start
//!
//! ```
//! use serde_json::json;
//! use trellis_path::{read, write, Path, Slot, WritePolicy};
//!
//! let source = json!({"user": {"tags": [
//!     {"name": "admin"},
//!     {"name": "ops"},
//! ]}});
//!
//! // Resolve every tag name from the source tree.
//! let from = Path::parse("user.tags[*].name").unwrap();
//! let names = read(&source, &from);
//! assert_eq!(names, Slot::Present(json!(["admin", "ops"])));
//!
//! // Scatter them over a sequence in the target tree.
//! let mut target = json!({});
//! let to = Path::parse("roles[*].label").unwrap();
//! assert!(write(&mut target, &to, names, WritePolicy::new()));
//!
//! assert_eq!(target, json!({"roles": [
//!     {"label": "admin"},
//!     {"label": "ops"},
//! ]}));
//! ```
//!
//! # Absence Is Two States
//!
//! A key set to `null` and a key never set are different conditions, and
//! mapping policies treat them differently. Every read result and write
//! input is a [`Slot`] carrying that distinction; see [`WritePolicy`] for
//! how the acceptance flags combine.
//!
//! Reads never mutate and never panic; writes report rejection through
//! their boolean outcome rather than errors. The only fallible surface is
//! [`Path::parse`].

mod error;
mod kind;
mod path;
mod policy;
mod prune;
mod read;
mod slot;
mod write;

pub use error::{PathError, PathResult};
pub use kind::PathKind;
pub use path::{Path, Seg};
pub use policy::WritePolicy;
pub use prune::cleanup;
pub use read::read;
pub use slot::{value_kind, Slot};
pub use write::write;

// Re-export serde_json::Value for convenience
pub use serde_json::Value;
