//! Embedding a navigator inside a host type.

/// Give a host type the navigator surface of one of its fields.
///
/// Generates inherent `init`, `set`, `get`, `has`, `unset`, `get_all`,
/// `is_read_only`, `get_as` and `set_as` methods on the host that forward
/// to the named [`DotNavigator`](crate::DotNavigator) field. The navigator
/// itself is never handed out, so with the field kept private only the
/// host's own code can call [`lock`](crate::DotNavigator::lock).
///
/// # Example
///
/// ```rust
/// use dot_navigator::{dot_access, DotNavigator, Map};
///
/// pub struct Config {
///     navigator: DotNavigator,
/// }
///
/// impl Config {
///     pub fn frozen(data: Map) -> Result<Self, dot_navigator::Error> {
///         let mut navigator = DotNavigator::new();
///         navigator.init(data)?;
///         navigator.lock();
///         Ok(Self { navigator })
///     }
/// }
///
/// dot_access!(Config, navigator);
///
/// let mut config = Config::frozen(Map::new()).unwrap();
/// assert!(config.set("debug", true).is_err());
/// ```
///
/// Code outside the host's module cannot reach the navigator:
///
/// ```compile_fail
/// mod host {
///     use dot_navigator::{dot_access, DotNavigator};
///
///     pub struct Config {
///         navigator: DotNavigator,
///     }
///
///     impl Config {
///         pub fn new() -> Self {
///             Self { navigator: DotNavigator::new() }
///         }
///     }
///
///     dot_access!(Config, navigator);
/// }
///
/// let mut config = host::Config::new();
/// config.navigator.lock();
/// ```
#[macro_export]
macro_rules! dot_access {
    ($host:ty, $field:ident) => {
        impl $host {
            /// Forwards to `DotNavigator::init`.
            pub fn init(&mut self, data: $crate::Map) -> ::std::result::Result<(), $crate::Error> {
                self.$field.init(data)
            }

            /// Forwards to `DotNavigator::set`.
            pub fn set(
                &mut self,
                path: &str,
                value: impl ::std::convert::Into<$crate::Value>,
            ) -> ::std::result::Result<(), $crate::Error> {
                self.$field.set(path, value)
            }

            /// Forwards to `DotNavigator::get`.
            pub fn get(&self, path: &str) -> ::std::option::Option<&$crate::Value> {
                self.$field.get(path)
            }

            /// Forwards to `DotNavigator::has`.
            pub fn has(&self, path: &str) -> bool {
                self.$field.has(path)
            }

            /// Forwards to `DotNavigator::unset`.
            pub fn unset(
                &mut self,
                path: &str,
            ) -> ::std::result::Result<::std::option::Option<$crate::Value>, $crate::Error> {
                self.$field.unset(path)
            }

            /// Forwards to `DotNavigator::get_all`.
            pub fn get_all(&self) -> &$crate::Map {
                self.$field.get_all()
            }

            pub fn is_read_only(&self) -> bool {
                self.$field.is_read_only()
            }

            /// Forwards to `DotNavigator::get_as`.
            pub fn get_as<T: $crate::__serde::de::DeserializeOwned>(
                &self,
                path: &str,
            ) -> ::std::result::Result<::std::option::Option<T>, $crate::Error> {
                self.$field.get_as(path)
            }

            /// Forwards to `DotNavigator::set_as`.
            pub fn set_as<T: $crate::__serde::Serialize + ?Sized>(
                &mut self,
                path: &str,
                data: &T,
            ) -> ::std::result::Result<(), $crate::Error> {
                self.$field.set_as(path, data)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{DotNavigator, Error, Operation, Value};

    struct Registry {
        entries: DotNavigator,
    }

    dot_access!(Registry, entries);

    #[test]
    fn forwards_to_named_field() {
        let mut registry = Registry {
            entries: DotNavigator::new(),
        };
        registry.set("plugins.lint", true).unwrap();

        assert!(registry.has("plugins"));
        assert_eq!(registry.get("plugins.lint"), Some(&Value::Bool(true)));
        assert_eq!(registry.get_as::<bool>("plugins.lint").unwrap(), Some(true));
        assert_eq!(registry.unset("plugins.lint").unwrap(), Some(Value::Bool(true)));
        assert_eq!(registry.get_all().len(), 1);
    }

    #[test]
    fn lock_on_field_is_seen_through_host() {
        let mut registry = Registry {
            entries: DotNavigator::new(),
        };
        registry.entries.lock();

        assert!(registry.is_read_only());
        assert_eq!(
            registry.set_as("a", &1),
            Err(Error::read_only(Operation::Set))
        );
    }
}
