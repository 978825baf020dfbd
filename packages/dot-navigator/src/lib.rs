//! Dot Navigator: nested key-value trees addressed by dot-paths
//!
//! A [`DotNavigator`] owns a tree of [`Value`]s, maps nested within maps, and
//! reads and writes it through paths such as `"database.primary.host"`:
//! - `DotPath`: a path split on `.` into literal segments
//! - `Value`: the dynamically-typed tree node
//! - `DotNavigator`: get/set/has/unset over the tree, with a one-way
//!   read-only lock
//! - `dot_access!`: forwards the navigator surface onto a host type that
//!   keeps its navigator private
//!
//! # Example
//!
//! ```rust
//! use dot_navigator::{DotNavigator, Map};
//! use serde_json::json;
//!
//! let data: Map = serde_json::from_value(json!({
//!     "foo": "bar",
//!     "multilevel": {"null": null}
//! }))
//! .unwrap();
//!
//! let mut nav = DotNavigator::new();
//! nav.init(data).unwrap();
//!
//! assert!(nav.has("multilevel.null"));
//! assert_eq!(nav.get("multilevel.null"), None);
//! assert!(!nav.has("nonexisting"));
//! ```

mod access;
pub mod convert;
mod error;
mod navigator;
mod path;
pub mod value;

pub use error::{Error, Operation};
pub use navigator::{DotNavigator, NavigatorOptions};
pub use path::{DotPath, SEPARATOR};
pub use value::{Map, Value};

// Used by `dot_access!` so hosts need not depend on serde themselves.
#[doc(hidden)]
pub use serde as __serde;
