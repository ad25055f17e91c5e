//! # domain-kit
//!
//! Foundational helpers for domain-modeling code.
//!
//! ## Overview
//!
//! - **Metadata**: [`metadata::Container`], an immutable-style key/value bag
//!   with copy-on-write updates and identity-preserving no-ops
//! - **Assertions**: predicate-to-error helpers producing typed
//!   [`assertion::AssertionError`]s
//! - **Domain**: the [`domain::Event`] trait and [`domain::AggregateRoot`],
//!   which queues events raised by an aggregate
//!
//! ## Feature Flags
//!
//! - `metadata`: Metadata container
//! - `assertion`: Assertion helpers
//! - `domain`: Domain events and aggregate root
//! - `arc`: Use `Arc` instead of `Rc` so containers are `Send + Sync`
//! - `serde`: Serialization support for containers
//! - `fxhash` / `ahash`: Faster hashers for the container's backing map
//! - `full`: Enable all of the above except `arc` and the hasher choices
//!
//! ## Example
//!
//! ```rust
//! use domain_kit::prelude::*;
//!
//! let metadata = Container::with("correlation_id", "42").and("user", "alice");
//! assert_eq!(metadata.get("user"), Some(&"alice"));
//!
//! // No-ops hand back the very same container
//! let same = metadata.without_keys(Vec::<&str>::new());
//! assert!(same.ptr_eq(&metadata));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the public items of every enabled module.
///
/// # Usage
///
/// ```rust
/// use domain_kit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "metadata")]
    pub use crate::metadata::*;

    #[cfg(feature = "assertion")]
    pub use crate::assertion::{AssertionError, AssertionResult, Validatable, Zeroable};

    #[cfg(feature = "domain")]
    pub use crate::domain::*;
}

#[cfg(feature = "metadata")]
pub mod metadata;

#[cfg(feature = "assertion")]
pub mod assertion;

#[cfg(feature = "domain")]
pub mod domain;
