//! Quake-style alias model (`.mdl`, magic `IDPO`) support
//!
//! The file is a flat sequence of records: a fixed header, then skins,
//! texture coordinates, triangles and frames, each sized by counts in the
//! header. Skin and frame records are tagged unions whose layout is picked by
//! a tag read inline; frame and header layout also depend on the version.
//!
//! All multi-byte values are little-endian.

pub mod cursor;
pub mod dump;
pub mod inspect;
mod reader;
pub mod types;

pub use cursor::ByteCursor;
pub use dump::{DumpOptions, write_dump};
pub use inspect::{MdlInfo, inspect_mdl};
pub use reader::{parse_mdl_bytes, read_mdl};
pub use types::{
    FormatVersion, Frame, FrameGroup, FrameName, HeaderExtension, MdlHeader, MdlModel,
    SingleFrame, Skin, TexCoord, TriVertex, Triangle,
};

/// "IDPO" magic tag
pub const MDL_IDENT: [u8; 4] = *b"IDPO";

/// Version whose files carry the header extension and frame tags
pub const EXTENDED_VERSION: i32 = 6;

/// Size of the base header (ident, version, 10 floats, 7 ints)
pub const HEADER_SIZE: usize = 76;

/// Size of the version 6 header extension (flags + size)
pub const HEADER_EXTENSION_SIZE: usize = 8;

/// Size of a texture coordinate record (3 x i32)
pub const TEX_COORD_SIZE: usize = 12;

/// Size of a triangle record (4 x i32)
pub const TRIANGLE_SIZE: usize = 16;

/// Size of a compressed vertex (3 position bytes + normal index)
pub const TRI_VERTEX_SIZE: usize = 4;

/// Size of the name field of a version 6 frame
pub const FRAME_NAME_SIZE: usize = 16;

/// Single frame header for version 6: bbox min + bbox max + name
pub const FRAME_HEADER_SIZE: usize = 2 * TRI_VERTEX_SIZE + FRAME_NAME_SIZE;

/// Single frame header for other versions: bbox min + bbox max + f32
pub const LEGACY_FRAME_HEADER_SIZE: usize = 2 * TRI_VERTEX_SIZE + 4;

/// Frame group header: sub-frame count + bbox min + bbox max
pub const FRAME_GROUP_HEADER_SIZE: usize = 4 + 2 * TRI_VERTEX_SIZE;
