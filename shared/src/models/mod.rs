//! Data models
//!
//! The invoice record as edited in memory, plus the flat inputs/outputs of the
//! totals calculation. JSON field names are camelCase.

pub mod invoice;
pub mod item;
pub mod party;
pub mod totals;

// Re-exports
pub use invoice::*;
pub use item::*;
pub use party::*;
pub use totals::*;
