//! # mdlinspect
//!
//! Structural decoder for legacy Quake-style alias model files (`.mdl`,
//! magic `IDPO`), with a small command-line dump tool for inspecting them.
//!
//! Decoding walks the file once, front to back, and returns every record it
//! finds: header, skins, texture coordinates, triangles, frames, and any
//! bytes left over after the last frame. Nothing is validated beyond having
//! enough bytes for each record.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdlinspect::formats::mdl::{DumpOptions, read_mdl, write_dump};
//!
//! let model = read_mdl("progs/player.mdl")?;
//! println!(
//!     "{} frames, {} trailing bytes",
//!     model.frames.len(),
//!     model.trailing_len()
//! );
//!
//! write_dump(&mut std::io::stdout(), &model, DumpOptions::all())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `mdlinspect` command-line binary

pub mod error;
pub mod formats;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::mdl::{
        DumpOptions, FormatVersion, Frame, FrameGroup, FrameName, MdlHeader, MdlInfo, MdlModel,
        SingleFrame, Skin, TexCoord, TriVertex, Triangle, inspect_mdl, parse_mdl_bytes, read_mdl,
        write_dump,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
