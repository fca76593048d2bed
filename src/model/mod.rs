//! Entity model for near-Earth objects and their close approaches
//!
//! Entities validate and normalize their fields at construction and carry
//! no cross-references until the database links them.

mod approach;
mod errors;
mod ids;
mod neo;

pub use approach::CloseApproach;
pub use errors::{ValidationError, ValidationResult};
pub use ids::{ApproachId, NeoId};
pub use neo::NearEarthObject;
