//! Style tables built from style resources.
//!
//! - [`StyleTable`]: The immutable mapping from style key to font descriptor
//! - [`LoadReport`]: Which resource entries were dropped during construction, and why

mod report;
#[allow(clippy::module_inception)]
mod table;

pub use report::{DropReason, DroppedEntry, LoadReport};
pub use table::StyleTable;
