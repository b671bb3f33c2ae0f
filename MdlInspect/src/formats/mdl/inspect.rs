//! MDL file inspection utilities
//!
//! Summarises a decoded model without listing every record.

use super::parse_mdl_bytes;
use super::types::{Frame, MdlModel, Skin};
use crate::error::Result;
use serde::Serialize;
use std::path::Path;

/// Summary of an MDL file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MdlInfo {
    pub file_path: String,
    pub file_size: usize,
    pub ident: String,
    pub version: i32,
    pub is_extended: bool,
    pub num_skins: usize,
    pub simple_skins: usize,
    pub group_skins: usize,
    pub skin_images: usize,
    pub skin_width: i32,
    pub skin_height: i32,
    pub num_tex_coords: usize,
    pub num_triangles: usize,
    pub num_frames: usize,
    pub single_frames: usize,
    pub frame_groups: usize,
    /// Vertex samples across all frames and grouped sub-frames.
    pub vertex_samples: usize,
    pub consumed_bytes: usize,
    pub trailing_bytes: usize,
}

impl MdlInfo {
    /// Build a summary from an already decoded model and the size of the
    /// buffer it was decoded from.
    pub fn from_model(file_path: &str, file_size: usize, model: &MdlModel) -> Self {
        let group_skins = model
            .skins
            .iter()
            .filter(|s| matches!(s, Skin::Group { .. }))
            .count();
        let frame_groups = model
            .frames
            .iter()
            .filter(|f| matches!(f, Frame::Group(_)))
            .count();

        Self {
            file_path: file_path.to_string(),
            file_size,
            ident: model.header.ident_str(),
            version: model.header.version,
            is_extended: model.format_version().is_extended(),
            num_skins: model.skins.len(),
            simple_skins: model.skins.len() - group_skins,
            group_skins,
            skin_images: model.skins.iter().map(Skin::image_count).sum(),
            skin_width: model.header.skin_width,
            skin_height: model.header.skin_height,
            num_tex_coords: model.tex_coords.len(),
            num_triangles: model.triangles.len(),
            num_frames: model.frames.len(),
            single_frames: model.frames.len() - frame_groups,
            frame_groups,
            vertex_samples: model.frames.iter().map(Frame::vertex_samples).sum(),
            consumed_bytes: model.consumed_len(),
            trailing_bytes: model.trailing_len(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Get a summary of an MDL file.
///
/// # Errors
/// Returns an error if the file cannot be read or ends inside a record.
pub fn inspect_mdl<P: AsRef<Path>>(source: P) -> Result<MdlInfo> {
    let source_path = source.as_ref();
    let data = std::fs::read(source_path)?;
    let model = parse_mdl_bytes(&data)?;
    Ok(MdlInfo::from_model(
        &source_path.display().to_string(),
        data.len(),
        &model,
    ))
}
