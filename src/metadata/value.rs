//! Dynamically typed metadata values.

use std::any::Any;

use super::Container;

/// A reference-counted value of any type.
///
/// Storing `AnyValue`s lets a single container mix strings, numbers and
/// domain types. Values are shared, not copied, when a container is copied.
#[cfg(not(feature = "arc"))]
pub type AnyValue = std::rc::Rc<dyn Any>;

/// A reference-counted value of any type.
///
/// Storing `AnyValue`s lets a single container mix strings, numbers and
/// domain types. Values are shared, not copied, when a container is copied.
#[cfg(feature = "arc")]
pub type AnyValue = std::sync::Arc<dyn Any + Send + Sync>;

/// Wraps `value` into an [`AnyValue`].
///
/// # Examples
///
/// ```rust
/// use domain_kit::metadata::any_value;
///
/// let value = any_value(7_i64);
/// assert_eq!(value.downcast_ref::<i64>(), Some(&7));
/// ```
#[cfg(not(feature = "arc"))]
pub fn any_value<T: Any>(value: T) -> AnyValue {
    std::rc::Rc::new(value)
}

/// Wraps `value` into an [`AnyValue`].
///
/// # Examples
///
/// ```rust
/// use domain_kit::metadata::any_value;
///
/// let value = any_value(7_i64);
/// assert_eq!(value.downcast_ref::<i64>(), Some(&7));
/// ```
#[cfg(feature = "arc")]
pub fn any_value<T: Any + Send + Sync>(value: T) -> AnyValue {
    std::sync::Arc::new(value)
}

impl Container<AnyValue> {
    /// Returns the value for `key` if it is present and holds a `T`.
    ///
    /// A present key holding another type yields `None`, the same as an
    /// absent key.
    pub fn get_as<T: Any>(&self, key: &str) -> Option<&T> {
        self.get(key).and_then(|value| (**value).downcast_ref::<T>())
    }
}
