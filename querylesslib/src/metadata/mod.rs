//! Query descriptors: the metadata a queryless table model is built from.
//!
//! These types describe what a report asked for, not where the data lives:
//!
//! - **Query**: ordered list of selections
//! - **Selection**: one requested output column
//! - **LogicalColumn**: identifier, data type and localized display name
//!
//! All of them deserialize from JSON so a host can hand over a descriptor
//! without building it in code.

pub mod column;
pub mod query;

pub use column::{DataType, LocalizedString, LogicalColumn};
pub use query::{Query, Selection};
