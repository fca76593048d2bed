//! Linked, indexed view over a fixed set of objects and approaches
//!
//! The [`NeoDatabase`] consumes both entity collections once, cross-links
//! each approach to its owning object, builds lookup and secondary indexes,
//! and answers all subsequent queries. It is built once and never mutated
//! afterward, so a single owner may publish a shared read-only handle.

mod database;
mod errors;
mod indexes;
mod statistics;

pub use database::NeoDatabase;
pub use errors::{DatabaseError, DatabaseResult};
pub use indexes::DiameterBucket;
pub use statistics::Statistics;
