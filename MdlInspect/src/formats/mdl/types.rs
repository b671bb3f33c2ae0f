//! Decoded MDL records

use glam::Vec3;
use serde::Serialize;

use super::{EXTENDED_VERSION, FRAME_NAME_SIZE};
use crate::error::Result;

/// Layout family selected by the header version.
///
/// Version 6 files carry the header extension, per-frame tags (and thus
/// frame groups) and 16-byte frame names. Every other version uses the
/// older layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormatVersion {
    Extended,
    Legacy(i32),
}

impl FormatVersion {
    pub fn from_raw(version: i32) -> Self {
        if version == EXTENDED_VERSION {
            FormatVersion::Extended
        } else {
            FormatVersion::Legacy(version)
        }
    }

    pub fn is_extended(self) -> bool {
        matches!(self, FormatVersion::Extended)
    }
}

/// Header fields only present in version 6 files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeaderExtension {
    pub flags: i32,
    pub size: f32,
}

/// Fixed leading record of an MDL file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MdlHeader {
    /// Magic tag, normally `IDPO`. Not validated.
    pub ident: [u8; 4],
    pub version: i32,
    pub scale: Vec3,
    pub scale_origin: Vec3,
    pub bounding_radius: f32,
    pub eye_position: Vec3,
    pub num_skins: i32,
    pub skin_width: i32,
    pub skin_height: i32,
    pub num_verts: i32,
    pub num_tris: i32,
    pub num_frames: i32,
    pub sync_type: i32,
    pub extension: Option<HeaderExtension>,
}

impl MdlHeader {
    pub fn format_version(&self) -> FormatVersion {
        FormatVersion::from_raw(self.version)
    }

    /// Magic tag as text, with non-printable bytes escaped.
    pub fn ident_str(&self) -> String {
        self.ident.escape_ascii().to_string()
    }

    /// Size in bytes of one skin image.
    pub fn skin_size(&self) -> usize {
        count(self.skin_width).saturating_mul(count(self.skin_height))
    }
}

/// One skin entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Skin {
    /// Tag 0: a single image.
    Simple { pixels: Vec<u8> },
    /// Non-zero tag: an animated set of images with per-image intervals.
    Group {
        tag: i32,
        intervals: Vec<f32>,
        pixels: Vec<Vec<u8>>,
    },
}

impl Skin {
    pub fn image_count(&self) -> usize {
        match self {
            Skin::Simple { .. } => 1,
            Skin::Group { pixels, .. } => pixels.len(),
        }
    }
}

/// Texture coordinate ("stvert") for one model vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TexCoord {
    pub on_seam: i32,
    pub s: i32,
    pub t: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Triangle {
    pub faces_front: i32,
    pub vertices: [i32; 3],
}

/// Byte-quantized vertex with a normal table index.
///
/// Also used for frame bounding boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TriVertex {
    pub v: [u8; 3],
    pub light_normal_index: u8,
}

/// Contents of the name slot of a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum FrameName {
    /// Version 6: fixed 16-byte, NUL-padded name.
    Name([u8; FRAME_NAME_SIZE]),
    /// Older versions have no name; the slot holds a float.
    Legacy(f32),
}

impl FrameName {
    /// Name trimmed at the first NUL, or the float rendered as text.
    pub fn display(&self) -> String {
        match self {
            FrameName::Name(raw) => {
                let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
                String::from_utf8_lossy(&raw[..end]).into_owned()
            }
            FrameName::Legacy(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleFrame {
    pub bbox_min: TriVertex,
    pub bbox_max: TriVertex,
    pub name: FrameName,
    pub vertices: Vec<TriVertex>,
}

/// A set of keyframes played as one animation unit (version 6 only).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameGroup {
    pub tag: i32,
    pub bbox_min: TriVertex,
    pub bbox_max: TriVertex,
    pub intervals: Vec<f32>,
    pub frames: Vec<SingleFrame>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Frame {
    Single(SingleFrame),
    Group(FrameGroup),
}

impl Frame {
    /// Number of vertex samples stored in this entry.
    pub fn vertex_samples(&self) -> usize {
        match self {
            Frame::Single(frame) => frame.vertices.len(),
            Frame::Group(group) => group.frames.iter().map(|f| f.vertices.len()).sum(),
        }
    }
}

/// A fully decoded MDL file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MdlModel {
    pub header: MdlHeader,
    pub skins: Vec<Skin>,
    pub tex_coords: Vec<TexCoord>,
    pub triangles: Vec<Triangle>,
    pub frames: Vec<Frame>,
    /// Bytes read by the header, skin, texture coordinate, triangle and
    /// frame steps.
    pub consumed: usize,
    /// Bytes left after the last frame, kept verbatim.
    pub trailing: Vec<u8>,
}

impl MdlModel {
    pub fn format_version(&self) -> FormatVersion {
        self.header.format_version()
    }

    pub fn consumed_len(&self) -> usize {
        self.consumed
    }

    pub fn trailing_len(&self) -> usize {
        self.trailing.len()
    }

    /// Pretty-printed JSON of the whole decoded model.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Header counts are signed; negative values mean "none".
pub(crate) fn count(value: i32) -> usize {
    usize::try_from(value).unwrap_or(0)
}
