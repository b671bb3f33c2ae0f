//! File format handlers
//!
//! Only the Quake-style alias model (`IDPO`) is supported.

pub mod mdl;

// Re-export main model types
pub use mdl::{MdlHeader, MdlModel, parse_mdl_bytes, read_mdl};
