//! The navigator: a tree of values addressed by dot-paths.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::convert::{from_value, to_value};
use crate::error::{Error, Operation};
use crate::value::{self, Map, Value};
use crate::DotPath;

/// Construction settings for a [`DotNavigator`].
///
/// Deserializable so a host can carry them inside its own configuration.
/// Missing fields take their defaults: writable, no data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorOptions {
    /// Lock the navigator once `data` is loaded.
    pub read_only: bool,
    /// Initial tree, loaded as if by [`DotNavigator::init`].
    pub data: Option<Map>,
}

/// A nested key-value tree addressed by dot-delimited paths.
///
/// Reads never fail: missing paths yield `None` or `false`. Writes fail only
/// once the navigator has been locked.
///
/// The lock is reachable only by whoever owns the navigator. Hosts that
/// embed a navigator keep it in a private field and forward the rest of its
/// surface with [`dot_access!`], so their callers can read and write but
/// never toggle read-only mode.
///
/// # Example
///
/// ```rust
/// use dot_navigator::{DotNavigator, Value};
///
/// let mut nav = DotNavigator::new();
/// nav.set("server.port", 8080).unwrap();
///
/// assert!(nav.has("server"));
/// assert_eq!(nav.get("server.port"), Some(&Value::Integer(8080)));
/// assert_eq!(nav.get("server.host"), None);
/// ```
///
/// [`dot_access!`]: crate::dot_access
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DotNavigator {
    data: Map,
    read_only: bool,
}

impl DotNavigator {
    /// Create an empty, writable navigator.
    pub fn new() -> Self {
        Self {
            data: Map::new(),
            read_only: false,
        }
    }

    /// Create a navigator from `options`, loading its data before locking.
    pub fn with_options(options: NavigatorOptions) -> Self {
        let mut nav = Self::new();
        if let Some(data) = options.data {
            log::debug!("Initializing navigator with {} top-level keys", data.len());
            nav.data = data;
        }
        if options.read_only {
            nav.lock();
        }
        nav
    }

    /// Load the whole tree at once.
    ///
    /// # Errors
    ///
    /// `Error::AlreadyInitialized` if the tree already holds any entry,
    /// whether from an earlier `init` or from `set`. The tree is untouched.
    pub fn init(&mut self, data: Map) -> Result<(), Error> {
        if !self.data.is_empty() {
            log::warn!("Refusing to re-initialize navigator data");
            return Err(Error::AlreadyInitialized);
        }

        log::debug!("Initializing navigator with {} top-level keys", data.len());
        self.data = data;
        Ok(())
    }

    /// Store `value` at `path`, creating intermediate maps as needed.
    ///
    /// Intermediate segments holding something other than a map are
    /// overwritten with a fresh map.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<(), Error> {
        self.ensure_writable(Operation::Set)?;

        log::debug!("Setting {}", path);
        value::insert(&mut self.data, &DotPath::parse(path), value.into());
        Ok(())
    }

    /// The value at `path`.
    ///
    /// A stored null reads the same as a missing key; use [`has`] to tell
    /// them apart.
    ///
    /// [`has`]: DotNavigator::has
    pub fn get(&self, path: &str) -> Option<&Value> {
        let found = value::lookup(&self.data, &DotPath::parse(path)).filter(|v| !v.is_null());
        if found.is_none() {
            log::trace!("Nothing set at {}", path);
        }
        found
    }

    /// Whether every segment of `path` exists, even if the final value is null.
    pub fn has(&self, path: &str) -> bool {
        value::lookup(&self.data, &DotPath::parse(path)).is_some()
    }

    /// Remove the value at `path`, returning it.
    ///
    /// Missing paths are a no-op. Maps emptied by the removal stay in place.
    pub fn unset(&mut self, path: &str) -> Result<Option<Value>, Error> {
        self.ensure_writable(Operation::Unset)?;

        let removed = value::remove(&mut self.data, &DotPath::parse(path));
        if removed.is_some() {
            log::debug!("Unset {}", path);
        }
        Ok(removed)
    }

    /// The whole tree as currently stored.
    ///
    /// This is a borrow, not a copy: clone it to keep a snapshot past the
    /// next mutation.
    pub fn get_all(&self) -> &Map {
        &self.data
    }

    /// Read the value at `path` into a Rust type.
    ///
    /// Returns `Ok(None)` wherever [`get`](DotNavigator::get) would.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, Error> {
        let Some(value) = self.get(path) else {
            return Ok(None);
        };
        from_value(value, path).map(Some)
    }

    /// Serialize `data` and store it at `path`.
    pub fn set_as<T: Serialize + ?Sized>(&mut self, path: &str, data: &T) -> Result<(), Error> {
        self.ensure_writable(Operation::Set)?;
        let value = to_value(data, path)?;
        self.set(path, value)
    }

    /// Switch to read-only mode. There is no way back.
    pub fn lock(&mut self) {
        if !self.read_only {
            log::debug!("Navigator locked read only");
        }
        self.read_only = true;
    }

    /// Check if the navigator has been locked.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Check if the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consume the navigator, returning its tree.
    pub fn into_inner(self) -> Map {
        self.data
    }

    fn ensure_writable(&self, operation: Operation) -> Result<(), Error> {
        if self.read_only {
            log::warn!("Rejected {} on read only navigator", operation);
            return Err(Error::read_only(operation));
        }
        Ok(())
    }
}
