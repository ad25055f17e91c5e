//! The domain event contract.

use chrono::{DateTime, Utc};

/// A fact that happened in the domain.
pub trait Event {
    /// Returns the name identifying the kind of event, such as
    /// `"order.placed"`.
    fn event_type(&self) -> &str;

    /// Returns the instant at which the event happened.
    fn occurred_on(&self) -> DateTime<Utc>;

    /// Returns the schema version of the event.
    fn version(&self) -> u32;
}
