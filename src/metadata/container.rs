//! Copy-on-write metadata container.
//!
//! This module provides [`Container`], an immutable-from-the-outside mapping
//! from string keys to values of any type.
//!
//! # Overview
//!
//! A `Container` is a handle to a reference-counted map of entries. Cloning
//! the handle yields the same instance; it never copies the entries. The
//! update operations follow two rules:
//!
//! - A real change builds a new backing map (a full shallow copy) and wraps
//!   it in a new handle
//! - A no-op returns a clone of the receiver's handle, so
//!   [`Container::ptr_eq`] reports the result as the same instance
//!
//! | Operation            | Complexity | Returns the receiver when                  |
//! |----------------------|------------|--------------------------------------------|
//! | `get`                | O(1)       | -                                          |
//! | `and`                | O(n)       | never                                      |
//! | `and_if_not_present` | O(n)       | the key is present                         |
//! | `merged_with`        | O(n + m)   | `entries` is empty                         |
//! | `with_keys`          | O(k)       | the receiver is empty and keys were given  |
//! | `without_keys`       | O(n + k)   | no keys were given, or the receiver is empty |

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

use super::ReferenceCounter;

// =============================================================================
// Hasher selection
// =============================================================================

#[cfg(feature = "fxhash")]
pub(crate) type EntryHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type EntryHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type EntryHasher = std::collections::hash_map::RandomState;

/// Backing map owned by exactly one container instance.
type Entries<V> = HashMap<String, V, EntryHasher>;

// =============================================================================
// Container Definition
// =============================================================================

/// An immutable-style key/value bag with copy-on-write updates.
///
/// Keys are strings; values may be of any type. Lookups never fail: an
/// absent key is reported as `None`.
///
/// # Identity
///
/// `Clone` hands out another handle to the same instance. Operations that
/// would not change anything return such a handle, so callers can detect a
/// no-op with [`Container::ptr_eq`] without inspecting the entries. Value
/// equality is available separately through `PartialEq`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use domain_kit::metadata::Container;
///
/// let mut source = HashMap::new();
/// source.insert("key1".to_string(), 1);
/// let container = Container::from_map(&source);
///
/// // The container owns its own copy of `source`
/// source.insert("key2".to_string(), 2);
/// assert_eq!(container.len(), 1);
///
/// let merged = container.merged_with([("key1", 10), ("key3", 3)]);
/// assert_eq!(merged.get("key1"), Some(&10));
/// assert_eq!(container.get("key1"), Some(&1));
/// ```
pub struct Container<V> {
    data: ReferenceCounter<Entries<V>>,
}

// Containers cross threads only with the `arc` feature
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Container<i32>: Send, Sync);
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Container<i32>: Send, Sync);

impl<V> Container<V> {
    /// Creates a new container with no entries.
    ///
    /// Every call allocates a distinct instance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_kit::metadata::Container;
    ///
    /// let container: Container<i32> = Container::empty();
    /// assert!(container.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::from_entries(Entries::default())
    }

    /// Creates a new container holding exactly one entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_kit::metadata::Container;
    ///
    /// let container = Container::with("aKey", "aValue");
    /// assert_eq!(container.get("aKey"), Some(&"aValue"));
    /// assert_eq!(container.len(), 1);
    /// ```
    #[must_use]
    pub fn with(key: impl Into<String>, value: V) -> Self {
        let mut entries = Entries::default();
        entries.insert(key.into(), value);
        Self::from_entries(entries)
    }

    /// Creates a new container from a copy of `source`.
    ///
    /// The container never refers to `source` afterwards; later changes to
    /// the caller's map are not visible through it. Values are cloned
    /// shallowly.
    #[must_use]
    pub fn from_map<S>(source: &HashMap<String, V, S>) -> Self
    where
        V: Clone,
    {
        Self::from_entries(
            source
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }

    fn from_entries(entries: Entries<V>) -> Self {
        Self {
            data: ReferenceCounter::new(entries),
        }
    }

    /// Wraps a freshly built backing map produced by `operation`.
    fn derived(operation: &'static str, entries: Entries<V>) -> Self {
        tracing::trace!(operation, entries = entries.len(), "copied metadata container");
        Self::from_entries(entries)
    }

    /// Returns an independent shallow copy of the backing map.
    fn copy_entries(&self) -> Entries<V>
    where
        V: Clone,
    {
        (*self.data).clone()
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_kit::metadata::Container;
    ///
    /// let container = Container::with("key1", 1);
    /// assert_eq!(container.get("key1"), Some(&1));
    /// assert_eq!(container.get("missing"), None);
    /// ```
    #[inline]
    pub fn get(&self, key: &str) -> Option<&V> {
        if self.is_empty() {
            return None;
        }
        self.data.get(key)
    }

    /// Returns `true` if the container has an entry for `key`.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        !self.is_empty() && self.data.contains_key(key)
    }

    /// Returns an iterator over the keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Returns an iterator over the entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.data.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the container has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if both handles refer to the same container instance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_kit::metadata::Container;
    ///
    /// let container = Container::with("key", 1);
    /// assert!(container.ptr_eq(&container.clone()));
    /// assert!(!container.ptr_eq(&container.and("key", 1)));
    /// ```
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.data, &other.data)
    }
}

// =============================================================================
// Copy-on-Write Updates
// =============================================================================

impl<V: Clone> Container<V> {
    /// Returns a new container with `key` set to `value`.
    ///
    /// The result is always a new instance, even when the receiver already
    /// maps `key` to an equal value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_kit::metadata::Container;
    ///
    /// let container = Container::with("key1", 1);
    /// let updated = container.and("key2", 2);
    ///
    /// assert_eq!(container.len(), 1);
    /// assert_eq!(updated.len(), 2);
    /// ```
    #[must_use]
    pub fn and(&self, key: impl Into<String>, value: V) -> Self {
        let mut entries = self.copy_entries();
        entries.insert(key.into(), value);
        Self::derived("and", entries)
    }

    /// Returns a new container with `key` set to `supplier()` if `key` is
    /// absent, or the receiver itself if `key` is present.
    ///
    /// `supplier` runs at most once, and only when its value is stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_kit::metadata::Container;
    ///
    /// let container = Container::with("key1", 1);
    ///
    /// let unchanged = container.and_if_not_present("key1", || 100);
    /// assert!(unchanged.ptr_eq(&container));
    ///
    /// let added = container.and_if_not_present("key2", || 2);
    /// assert_eq!(added.get("key2"), Some(&2));
    /// ```
    #[must_use]
    pub fn and_if_not_present<F>(&self, key: impl Into<String>, supplier: F) -> Self
    where
        F: FnOnce() -> V,
    {
        let key = key.into();
        if self.contains_key(&key) {
            return self.clone();
        }
        self.and(key, supplier())
    }

    /// Returns a new container holding the receiver's entries overlaid by
    /// `entries`.
    ///
    /// On a key collision the value from `entries` wins. If `entries` is
    /// empty, the receiver itself is returned.
    #[must_use]
    pub fn merged_with<I, K>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
    {
        let mut entries = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .peekable();
        if entries.peek().is_none() {
            return self.clone();
        }
        if self.is_empty() {
            return Self::derived("merged_with", entries.collect());
        }
        let mut merged = self.copy_entries();
        merged.extend(entries);
        Self::derived("merged_with", merged)
    }

    /// Returns a new container holding only the requested `keys`.
    ///
    /// Requested keys absent from the receiver are skipped. Two cases differ
    /// from a plain projection:
    ///
    /// - No keys requested: a new empty container, never the receiver, even
    ///   when the receiver is already empty
    /// - Empty receiver (and some keys requested): the receiver itself
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_kit::metadata::Container;
    ///
    /// let container = Container::with("key1", 1).and("key2", 2);
    /// let projected = container.with_keys(["key1", "key3"]);
    ///
    /// assert_eq!(projected.len(), 1);
    /// assert_eq!(projected.get("key1"), Some(&1));
    /// ```
    #[must_use]
    pub fn with_keys<I, K>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut keys = keys.into_iter().peekable();
        if keys.peek().is_none() {
            return Self::empty();
        }
        if self.is_empty() {
            return self.clone();
        }
        let retained: Entries<V> = keys
            .filter_map(|key| {
                self.data
                    .get_key_value(key.as_ref())
                    .map(|(key, value)| (key.clone(), value.clone()))
            })
            .collect();
        Self::derived("with_keys", retained)
    }

    /// Returns a new container without the named `keys`.
    ///
    /// Keys absent from the receiver are ignored. If no keys are named, or
    /// the receiver is empty, the receiver itself is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_kit::metadata::Container;
    ///
    /// let container = Container::with("key1", 1).and("key2", 2);
    /// let remaining = container.without_keys(["key1"]);
    ///
    /// assert_eq!(remaining.get("key1"), None);
    /// assert_eq!(remaining.get("key2"), Some(&2));
    /// ```
    #[must_use]
    pub fn without_keys<I, K>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut keys = keys.into_iter().peekable();
        if keys.peek().is_none() || self.is_empty() {
            return self.clone();
        }
        let mut remaining = self.copy_entries();
        for key in keys {
            remaining.remove(key.as_ref());
        }
        Self::derived("without_keys", remaining)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<V> Clone for Container<V> {
    /// Returns another handle to the same instance.
    fn clone(&self) -> Self {
        Self {
            data: ReferenceCounter::clone(&self.data),
        }
    }
}

impl<V> Default for Container<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: fmt::Debug> fmt::Debug for Container<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<V: PartialEq> PartialEq for Container<V> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.data == *other.data
    }
}

impl<V: Eq> Eq for Container<V> {}

impl<V, S: BuildHasher> From<HashMap<String, V, S>> for Container<V> {
    /// Takes ownership of `source`; nothing is left for the caller to alias.
    fn from(source: HashMap<String, V, S>) -> Self {
        Self::from_entries(source.into_iter().collect())
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Container<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<V> serde::Serialize for Container<V>
where
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct ContainerVisitor<V> {
    value_marker: std::marker::PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<V> ContainerVisitor<V> {
    const fn new() -> Self {
        Self {
            value_marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, V> serde::de::Visitor<'de> for ContainerVisitor<V>
where
    V: serde::Deserialize<'de>,
{
    type Value = Container<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        // Built in place: the new instance is not visible until complete.
        let mut entries = Entries::with_capacity_and_hasher(
            access.size_hint().unwrap_or(0),
            EntryHasher::default(),
        );
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            entries.insert(key, value);
        }
        Ok(Container::from_entries(entries))
    }
}

#[cfg(feature = "serde")]
impl<'de, V> serde::Deserialize<'de> for Container<V>
where
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(ContainerVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
