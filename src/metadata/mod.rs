//! Immutable-style metadata attached to domain operations.
//!
//! This module provides [`Container`], a keyed bag of arbitrary values whose
//! updates never touch an existing container:
//!
//! - Every mutator either returns a new container backed by its own copy of
//!   the entries, or returns the receiver itself when nothing would change
//! - Callers detect "nothing changed" with [`Container::ptr_eq`] instead of
//!   comparing contents
//!
//! # Copy-on-Write
//!
//! Versions of a container share no substructure. Each new version owns a
//! full shallow copy of the entries: O(n) per update, O(1) lookup.
//!
//! # Examples
//!
//! ```rust
//! use domain_kit::metadata::Container;
//!
//! let metadata = Container::with("tenant", "acme");
//! let extended = metadata.and("user", "alice");
//!
//! assert_eq!(metadata.len(), 1); // Original unchanged
//! assert_eq!(extended.len(), 2); // New version
//!
//! // Present keys never call the supplier and keep the same instance
//! let unchanged = extended.and_if_not_present("user", || unreachable!());
//! assert!(unchanged.ptr_eq(&extended));
//! ```
//!
//! ## Dynamic values
//!
//! ```rust
//! use domain_kit::metadata::{Container, any_value};
//!
//! let metadata = Container::with("attempt", any_value(3_u32)).and("source", any_value("api"));
//! assert_eq!(metadata.get_as::<u32>("attempt"), Some(&3));
//! assert_eq!(metadata.get_as::<String>("source"), None);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod container;
mod value;

pub use container::Container;
pub use value::{AnyValue, any_value};

// =============================================================================
// Tests
// =============================================================================
