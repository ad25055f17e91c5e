//! Domain events raised by aggregates.
//!
//! - [`Event`]: the capabilities every domain event exposes
//! - [`AggregateRoot`]: queues the events an aggregate raises until they are
//!   dispatched
//!
//! # Examples
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use domain_kit::domain::{AggregateRoot, Event};
//!
//! #[derive(Debug, Clone)]
//! struct OrderPlaced {
//!     occurred_on: DateTime<Utc>,
//! }
//!
//! impl Event for OrderPlaced {
//!     fn event_type(&self) -> &str {
//!         "order.placed"
//!     }
//!
//!     fn occurred_on(&self) -> DateTime<Utc> {
//!         self.occurred_on
//!     }
//!
//!     fn version(&self) -> u32 {
//!         1
//!     }
//! }
//!
//! let mut order = AggregateRoot::new();
//! order.register_event(OrderPlaced { occurred_on: Utc::now() });
//!
//! let pending = order.take_domain_events();
//! assert_eq!(pending.len(), 1);
//! assert!(order.events().is_empty());
//! ```

mod aggregate_root;
mod event;

pub use aggregate_root::AggregateRoot;
pub use event::Event;
