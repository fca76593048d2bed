//! Loading entity collections from NASA/JPL data files
//!
//! Near-Earth objects come from the small-body CSV export; close
//! approaches come from the CAD API JSON envelope. Malformed rows are
//! skipped with a warning rather than aborting a whole load; structural
//! problems (unreadable file, wrong envelope) are fatal.

mod approaches;
mod errors;
mod neos;
mod time;

pub use approaches::load_approaches;
pub use errors::{ExtractError, ExtractResult};
pub use neos::load_neos;
pub use time::{format_time, parse_cad_time};
