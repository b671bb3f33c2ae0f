//! Text dump of a decoded model
//!
//! The header and the trailing bytes are always written. The decoded
//! collections are written only when enabled in [`DumpOptions`].

use super::types::{Frame, MdlHeader, MdlModel, SingleFrame, Skin, TriVertex};
use std::io::Write;

/// Which decoded collections to include in a dump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpOptions {
    pub skins: bool,
    pub tex_coords: bool,
    pub triangles: bool,
    pub frames: bool,
}

impl DumpOptions {
    /// Header and trailing bytes only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every collection.
    pub fn all() -> Self {
        Self {
            skins: true,
            tex_coords: true,
            triangles: true,
            frames: true,
        }
    }

    pub fn has_collections(&self) -> bool {
        self.skins || self.tex_coords || self.triangles || self.frames
    }
}

/// Write a dump of `model` to `out`.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_dump<W: Write>(
    out: &mut W,
    model: &MdlModel,
    options: DumpOptions,
) -> std::io::Result<()> {
    write_header(out, &model.header)?;

    if options.skins {
        writeln!(out)?;
        writeln!(out, "Skins ({}):", model.skins.len())?;
        for (i, skin) in model.skins.iter().enumerate() {
            match skin {
                Skin::Simple { pixels } => {
                    writeln!(out, "  [{i}] simple, {} bytes", pixels.len())?;
                }
                Skin::Group {
                    tag,
                    intervals,
                    pixels,
                } => {
                    let size = pixels.first().map_or(0, Vec::len);
                    writeln!(
                        out,
                        "  [{i}] group (tag {tag}), {} images of {size} bytes, \
                         intervals {intervals:?}",
                        pixels.len()
                    )?;
                }
            }
        }
    }

    if options.tex_coords {
        writeln!(out)?;
        writeln!(out, "Texture coordinates ({}):", model.tex_coords.len())?;
        for (i, st) in model.tex_coords.iter().enumerate() {
            writeln!(out, "  [{i}] on_seam {}, s {}, t {}", st.on_seam, st.s, st.t)?;
        }
    }

    if options.triangles {
        writeln!(out)?;
        writeln!(out, "Triangles ({}):", model.triangles.len())?;
        for (i, tri) in model.triangles.iter().enumerate() {
            writeln!(
                out,
                "  [{i}] faces_front {}, vertices {:?}",
                tri.faces_front, tri.vertices
            )?;
        }
    }

    if options.frames {
        writeln!(out)?;
        writeln!(out, "Frames ({}):", model.frames.len())?;
        for (i, frame) in model.frames.iter().enumerate() {
            match frame {
                Frame::Single(single) => {
                    write!(out, "  [{i}] single ")?;
                    write_single_frame(out, single, "      ")?;
                }
                Frame::Group(group) => {
                    writeln!(
                        out,
                        "  [{i}] group (tag {}), {} frames, bbox {} .. {}, intervals {:?}",
                        group.tag,
                        group.frames.len(),
                        format_vertex(group.bbox_min),
                        format_vertex(group.bbox_max),
                        group.intervals
                    )?;
                    for (j, single) in group.frames.iter().enumerate() {
                        write!(out, "      [{j}] ")?;
                        write_single_frame(out, single, "          ")?;
                    }
                }
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Trailing bytes:")?;
    writeln!(out, "  b\"{}\"", model.trailing.escape_ascii())?;
    writeln!(out, "{}", model.trailing.len())?;

    Ok(())
}

fn write_header<W: Write>(out: &mut W, header: &MdlHeader) -> std::io::Result<()> {
    writeln!(out, "Header:")?;
    writeln!(out, "  ident:           {}", header.ident_str())?;
    writeln!(out, "  version:         {}", header.version)?;
    writeln!(out, "  scale:           {}", header.scale)?;
    writeln!(out, "  scale_origin:    {}", header.scale_origin)?;
    writeln!(out, "  bounding_radius: {}", header.bounding_radius)?;
    writeln!(out, "  eye_position:    {}", header.eye_position)?;
    writeln!(out, "  num_skins:       {}", header.num_skins)?;
    writeln!(out, "  skin_width:      {}", header.skin_width)?;
    writeln!(out, "  skin_height:     {}", header.skin_height)?;
    writeln!(out, "  num_verts:       {}", header.num_verts)?;
    writeln!(out, "  num_tris:        {}", header.num_tris)?;
    writeln!(out, "  num_frames:      {}", header.num_frames)?;
    writeln!(out, "  sync_type:       {}", header.sync_type)?;
    if let Some(ext) = header.extension {
        writeln!(out, "  flags:           {}", ext.flags)?;
        writeln!(out, "  size:            {}", ext.size)?;
    }
    Ok(())
}

fn write_single_frame<W: Write>(
    out: &mut W,
    frame: &SingleFrame,
    indent: &str,
) -> std::io::Result<()> {
    writeln!(
        out,
        "{:?}, bbox {} .. {}, {} vertices",
        frame.name.display(),
        format_vertex(frame.bbox_min),
        format_vertex(frame.bbox_max),
        frame.vertices.len()
    )?;
    for (k, vertex) in frame.vertices.iter().enumerate() {
        writeln!(out, "{indent}v[{k}] {}", format_vertex(*vertex))?;
    }
    Ok(())
}

fn format_vertex(vertex: TriVertex) -> String {
    let [x, y, z] = vertex.v;
    format!("({x}, {y}, {z})/{}", vertex.light_normal_index)
}
