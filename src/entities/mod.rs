//! Sample entity types for the analytics platform.

mod empty;
mod smart_skid;

pub use empty::empty;
pub use smart_skid::{SmartSkidOptions, smart_skid};
