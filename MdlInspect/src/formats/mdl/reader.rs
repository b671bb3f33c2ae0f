//! `.mdl` file reading and parsing
//!
//! Decoding is one forward pass over the buffer. Every section is sized by
//! header counts (or by counts read inside a skin or frame group); nothing is
//! derived from the buffer length, and whatever follows the last frame is
//! handed back untouched.

use super::cursor::ByteCursor;
use super::types::{
    FormatVersion, Frame, FrameGroup, FrameName, HeaderExtension, MdlHeader, MdlModel,
    SingleFrame, Skin, TexCoord, TriVertex, Triangle, count,
};
use super::{
    FRAME_GROUP_HEADER_SIZE, FRAME_HEADER_SIZE, FRAME_NAME_SIZE, HEADER_EXTENSION_SIZE,
    HEADER_SIZE, LEGACY_FRAME_HEADER_SIZE, MDL_IDENT, TEX_COORD_SIZE, TRI_VERTEX_SIZE,
    TRIANGLE_SIZE,
};
use crate::error::Result;
use byteorder::{LittleEndian, ReadBytesExt};
use glam::Vec3;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a .mdl file from disk
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read.
/// Returns [`Error::InsufficientData`] if the file ends inside a record.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::InsufficientData`]: crate::Error::InsufficientData
pub fn read_mdl<P: AsRef<Path>>(path: P) -> Result<MdlModel> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    parse_mdl_bytes(&buffer)
}

/// Parse .mdl data from bytes
///
/// # Errors
///
/// Returns [`Error::InsufficientData`] if the data ends inside a record. No
/// partial model is returned in that case.
///
/// [`Error::InsufficientData`]: crate::Error::InsufficientData
pub fn parse_mdl_bytes(data: &[u8]) -> Result<MdlModel> {
    let mut cursor = ByteCursor::new(data);

    let header = read_header(&mut cursor)?;
    if header.ident != MDL_IDENT {
        tracing::warn!("Unexpected MDL ident {:?}, decoding anyway", header.ident_str());
    }
    let version = header.format_version();
    tracing::debug!(
        "MDL header: version {} ({:?}), {} skins {}x{}, {} verts, {} tris, {} frames",
        header.version,
        version,
        header.num_skins,
        header.skin_width,
        header.skin_height,
        header.num_verts,
        header.num_tris,
        header.num_frames
    );

    let is_extended = version.is_extended();
    let num_verts = count(header.num_verts);

    let skins = read_skins(&mut cursor, count(header.num_skins), header.skin_size())?;
    tracing::debug!("Read {} skins, cursor at {}", skins.len(), cursor.position());

    let tex_coords = read_tex_coords(&mut cursor, num_verts)?;
    tracing::debug!(
        "Read {} texture coordinates, cursor at {}",
        tex_coords.len(),
        cursor.position()
    );

    let triangles = read_triangles(&mut cursor, count(header.num_tris))?;
    tracing::debug!("Read {} triangles, cursor at {}", triangles.len(), cursor.position());

    let frames = read_frames(
        &mut cursor,
        count(header.num_frames),
        num_verts,
        is_extended,
    )?;
    tracing::debug!("Read {} frames, cursor at {}", frames.len(), cursor.position());

    let consumed = cursor.position();
    let trailing = cursor.rest().to_vec();
    if !trailing.is_empty() {
        tracing::debug!("{} trailing bytes after last frame", trailing.len());
    }

    Ok(MdlModel {
        header,
        skins,
        tex_coords,
        triangles,
        frames,
        consumed,
        trailing,
    })
}

fn read_header(cursor: &mut ByteCursor<'_>) -> Result<MdlHeader> {
    let mut record = cursor.take("header", HEADER_SIZE)?;

    let mut ident = [0u8; 4];
    record.read_exact(&mut ident)?;
    let version = record.read_i32::<LittleEndian>()?;
    let scale = read_vec3(&mut record)?;
    let scale_origin = read_vec3(&mut record)?;
    let bounding_radius = record.read_f32::<LittleEndian>()?;
    let eye_position = read_vec3(&mut record)?;
    let num_skins = record.read_i32::<LittleEndian>()?;
    let skin_width = record.read_i32::<LittleEndian>()?;
    let skin_height = record.read_i32::<LittleEndian>()?;
    let num_verts = record.read_i32::<LittleEndian>()?;
    let num_tris = record.read_i32::<LittleEndian>()?;
    let num_frames = record.read_i32::<LittleEndian>()?;
    let sync_type = record.read_i32::<LittleEndian>()?;

    // Extension only exists in version 6 files
    let extension = if FormatVersion::from_raw(version).is_extended() {
        let mut ext = cursor.take("header extension", HEADER_EXTENSION_SIZE)?;
        Some(HeaderExtension {
            flags: ext.read_i32::<LittleEndian>()?,
            size: ext.read_f32::<LittleEndian>()?,
        })
    } else {
        None
    };

    Ok(MdlHeader {
        ident,
        version,
        scale,
        scale_origin,
        bounding_radius,
        eye_position,
        num_skins,
        skin_width,
        skin_height,
        num_verts,
        num_tris,
        num_frames,
        sync_type,
        extension,
    })
}

fn read_skins(
    cursor: &mut ByteCursor<'_>,
    num_skins: usize,
    skin_size: usize,
) -> Result<Vec<Skin>> {
    let mut skins = Vec::with_capacity(cursor.capacity_hint(num_skins, 4));

    for _ in 0..num_skins {
        let tag = read_i32(cursor, "skin tag")?;
        let skin = if tag == 0 {
            Skin::Simple {
                pixels: cursor.take("skin pixels", skin_size)?.to_vec(),
            }
        } else {
            let num_images = count(read_i32(cursor, "skin group count")?);
            let intervals = read_f32_array(cursor, "skin group intervals", num_images)?;
            let mut pixels = Vec::with_capacity(cursor.capacity_hint(num_images, skin_size));
            for _ in 0..num_images {
                pixels.push(cursor.take("skin group pixels", skin_size)?.to_vec());
            }
            Skin::Group {
                tag,
                intervals,
                pixels,
            }
        };
        skins.push(skin);
    }

    Ok(skins)
}

fn read_tex_coords(cursor: &mut ByteCursor<'_>, num_verts: usize) -> Result<Vec<TexCoord>> {
    let mut tex_coords = Vec::with_capacity(cursor.capacity_hint(num_verts, TEX_COORD_SIZE));
    for _ in 0..num_verts {
        let mut record = cursor.take("texture coordinate", TEX_COORD_SIZE)?;
        tex_coords.push(TexCoord {
            on_seam: record.read_i32::<LittleEndian>()?,
            s: record.read_i32::<LittleEndian>()?,
            t: record.read_i32::<LittleEndian>()?,
        });
    }
    Ok(tex_coords)
}

fn read_triangles(cursor: &mut ByteCursor<'_>, num_tris: usize) -> Result<Vec<Triangle>> {
    let mut triangles = Vec::with_capacity(cursor.capacity_hint(num_tris, TRIANGLE_SIZE));
    for _ in 0..num_tris {
        let mut record = cursor.take("triangle", TRIANGLE_SIZE)?;
        let faces_front = record.read_i32::<LittleEndian>()?;
        let mut vertices = [0i32; 3];
        record.read_i32_into::<LittleEndian>(&mut vertices)?;
        triangles.push(Triangle {
            faces_front,
            vertices,
        });
    }
    Ok(triangles)
}

fn read_frames(
    cursor: &mut ByteCursor<'_>,
    num_frames: usize,
    num_verts: usize,
    is_extended: bool,
) -> Result<Vec<Frame>> {
    let mut frames =
        Vec::with_capacity(cursor.capacity_hint(num_frames, LEGACY_FRAME_HEADER_SIZE));

    for _ in 0..num_frames {
        // Only version 6 frames are tagged; older files are all single frames
        let tag = if is_extended {
            read_i32(cursor, "frame tag")?
        } else {
            0
        };

        let frame = if tag == 0 {
            Frame::Single(read_single_frame(cursor, num_verts, is_extended)?)
        } else {
            Frame::Group(read_frame_group(cursor, tag, num_verts)?)
        };
        frames.push(frame);
    }

    Ok(frames)
}

fn read_single_frame(
    cursor: &mut ByteCursor<'_>,
    num_verts: usize,
    is_extended: bool,
) -> Result<SingleFrame> {
    let header_size = if is_extended {
        FRAME_HEADER_SIZE
    } else {
        LEGACY_FRAME_HEADER_SIZE
    };
    let mut record = cursor.take("frame header", header_size)?;

    let bbox_min = read_tri_vertex(&mut record)?;
    let bbox_max = read_tri_vertex(&mut record)?;
    let name = if is_extended {
        let mut raw = [0u8; FRAME_NAME_SIZE];
        record.read_exact(&mut raw)?;
        FrameName::Name(raw)
    } else {
        FrameName::Legacy(record.read_f32::<LittleEndian>()?)
    };

    let mut vertices = Vec::with_capacity(cursor.capacity_hint(num_verts, TRI_VERTEX_SIZE));
    for _ in 0..num_verts {
        let mut vertex = cursor.take("frame vertex", TRI_VERTEX_SIZE)?;
        vertices.push(read_tri_vertex(&mut vertex)?);
    }

    Ok(SingleFrame {
        bbox_min,
        bbox_max,
        name,
        vertices,
    })
}

fn read_frame_group(
    cursor: &mut ByteCursor<'_>,
    tag: i32,
    num_verts: usize,
) -> Result<FrameGroup> {
    let mut record = cursor.take("frame group header", FRAME_GROUP_HEADER_SIZE)?;
    let num_frames = count(record.read_i32::<LittleEndian>()?);
    let bbox_min = read_tri_vertex(&mut record)?;
    let bbox_max = read_tri_vertex(&mut record)?;

    let intervals = read_f32_array(cursor, "frame group intervals", num_frames)?;

    let mut frames = Vec::with_capacity(cursor.capacity_hint(num_frames, FRAME_HEADER_SIZE));
    for _ in 0..num_frames {
        frames.push(read_single_frame(cursor, num_verts, true)?);
    }

    Ok(FrameGroup {
        tag,
        bbox_min,
        bbox_max,
        intervals,
        frames,
    })
}

fn read_i32(cursor: &mut ByteCursor<'_>, record: &'static str) -> Result<i32> {
    let mut bytes = cursor.take(record, 4)?;
    Ok(bytes.read_i32::<LittleEndian>()?)
}

fn read_f32_array(
    cursor: &mut ByteCursor<'_>,
    record: &'static str,
    len: usize,
) -> Result<Vec<f32>> {
    let mut bytes = cursor.take_array(record, len, 4)?;
    let mut values = vec![0f32; len];
    bytes.read_f32_into::<LittleEndian>(&mut values)?;
    Ok(values)
}

fn read_vec3(record: &mut &[u8]) -> Result<Vec3> {
    let mut xyz = [0f32; 3];
    record.read_f32_into::<LittleEndian>(&mut xyz)?;
    Ok(Vec3::from_array(xyz))
}

fn read_tri_vertex(record: &mut &[u8]) -> Result<TriVertex> {
    let mut v = [0u8; 3];
    record.read_exact(&mut v)?;
    let light_normal_index = record.read_u8()?;
    Ok(TriVertex {
        v,
        light_normal_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use byteorder::WriteBytesExt;
    use pretty_assertions::assert_eq;

    /// Little-endian buffer builder for synthetic model files.
    #[derive(Default)]
    struct Buf(Vec<u8>);

    impl Buf {
        fn i32s(mut self, values: &[i32]) -> Self {
            for &value in values {
                self.0.write_i32::<LittleEndian>(value).unwrap();
            }
            self
        }

        fn f32s(mut self, values: &[f32]) -> Self {
            for &value in values {
                self.0.write_f32::<LittleEndian>(value).unwrap();
            }
            self
        }

        fn bytes(mut self, bytes: &[u8]) -> Self {
            self.0.extend_from_slice(bytes);
            self
        }

        fn vertex(self, v: [u8; 3], normal: u8) -> Self {
            self.bytes(&v).bytes(&[normal])
        }

        fn name(self, name: &str) -> Self {
            let mut raw = [0u8; FRAME_NAME_SIZE];
            raw[..name.len()].copy_from_slice(name.as_bytes());
            self.bytes(&raw)
        }
    }

    fn tri_vertex(v: [u8; 3], light_normal_index: u8) -> TriVertex {
        TriVertex {
            v,
            light_normal_index,
        }
    }

    /// Header with the given version and
    /// (skins, skin width, skin height, verts, tris, frames).
    fn header(version: i32, counts: [i32; 6]) -> Buf {
        let buf = Buf::default()
            .bytes(b"IDPO")
            .i32s(&[version])
            .f32s(&[0.5, 0.25, 2.0])
            .f32s(&[-1.0, -2.0, -3.0])
            .f32s(&[42.0])
            .f32s(&[0.0, 0.0, 24.0])
            .i32s(&counts)
            .i32s(&[1]); // sync type
        if version == 6 {
            buf.i32s(&[8]).f32s(&[3.5])
        } else {
            buf
        }
    }

    /// The canonical small version 6 model: one of everything, then `padding`.
    fn small_model(padding: &[u8]) -> Vec<u8> {
        header(6, [1, 4, 4, 1, 1, 1])
            .i32s(&[0])
            .bytes(&[7u8; 16])
            .i32s(&[1, 2, 3])
            .i32s(&[0, 0, 0, 0])
            .i32s(&[0])
            .vertex([0, 1, 2], 3)
            .vertex([10, 11, 12], 13)
            .name("frame1")
            .vertex([5, 6, 7], 162)
            .bytes(padding)
            .0
    }

    /// Two skins (a group of three 2-byte images, then a simple one), no
    /// vertices or frames.
    fn group_skin_model() -> Vec<u8> {
        header(6, [2, 2, 1, 0, 0, 0])
            .i32s(&[1, 3])
            .f32s(&[0.1, 0.2, 0.3])
            .bytes(&[1, 1, 2, 2, 3, 3])
            .i32s(&[0])
            .bytes(&[9, 9])
            .0
    }

    /// One vertex and a single frame group of two named sub-frames, then
    /// one byte of padding.
    fn group_frame_model() -> Vec<u8> {
        header(6, [0, 0, 0, 1, 0, 1])
            .i32s(&[0, 0, 0])
            .i32s(&[1]) // group tag
            .i32s(&[2]) // sub-frame count
            .vertex([0, 0, 0], 0)
            .vertex([255, 255, 255], 0)
            .f32s(&[0.1, 0.2])
            .vertex([1, 1, 1], 0)
            .vertex([2, 2, 2], 0)
            .name("run1")
            .vertex([10, 20, 30], 5)
            .vertex([3, 3, 3], 0)
            .vertex([4, 4, 4], 0)
            .name("run2")
            .vertex([40, 50, 60], 6)
            .bytes(&[0xFF])
            .0
    }

    /// Group skin, one triangle and a single frame followed by a frame group.
    fn mixed_group_model() -> Vec<u8> {
        header(6, [1, 2, 2, 1, 1, 2])
            .i32s(&[5, 2])
            .f32s(&[0.5, 1.0])
            .bytes(&[1, 2, 3, 4])
            .bytes(&[5, 6, 7, 8])
            .i32s(&[0, 1, 1])
            .i32s(&[1, 0, 0, 0])
            .i32s(&[0])
            .vertex([0, 0, 0], 0)
            .vertex([9, 9, 9], 0)
            .name("stand")
            .vertex([4, 5, 6], 7)
            .i32s(&[3, 1])
            .vertex([0, 0, 0], 0)
            .vertex([8, 8, 8], 0)
            .f32s(&[0.25])
            .vertex([1, 1, 1], 0)
            .vertex([2, 2, 2], 0)
            .name("pain")
            .vertex([6, 6, 6], 1)
            .0
    }

    fn assert_truncation_always_fails(data: &[u8]) {
        for len in 0..data.len() {
            let result = parse_mdl_bytes(&data[..len]);
            assert!(
                matches!(result, Err(Error::InsufficientData { .. })),
                "truncated at {len}: {result:?}"
            );
        }
        assert!(parse_mdl_bytes(data).is_ok());
    }

    #[test]
    fn test_small_model_trailing_bytes() {
        let data = small_model(&[0xAA, 0xBB, 0xCC]);
        assert_eq!(data.len(), 84 + 20 + 12 + 16 + 32 + 3);

        let model = parse_mdl_bytes(&data).unwrap();
        assert_eq!(model.trailing_len(), 3);
        assert_eq!(model.trailing, vec![0xAA, 0xBB, 0xCC]);
        assert_eq!(model.consumed_len(), 164);
        assert_eq!(
            model.skins,
            vec![Skin::Simple {
                pixels: vec![7; 16],
            }]
        );
        assert_eq!(
            model.tex_coords,
            vec![TexCoord {
                on_seam: 1,
                s: 2,
                t: 3,
            }]
        );
        assert_eq!(model.triangles.len(), 1);

        let Frame::Single(frame) = &model.frames[0] else {
            panic!("expected single frame");
        };
        assert_eq!(frame.bbox_min, tri_vertex([0, 1, 2], 3));
        assert_eq!(frame.bbox_max, tri_vertex([10, 11, 12], 13));
        assert_eq!(frame.name.display(), "frame1");
        assert_eq!(frame.vertices, vec![tri_vertex([5, 6, 7], 162)]);
    }

    #[test]
    fn test_consumed_plus_trailing_is_input_length() {
        let fixtures = [
            (small_model(&[]), 164),
            (small_model(&[1, 2, 3]), 164),
            // header, skin group (tag, count, 3 intervals, 3 images), simple skin
            (group_skin_model(), 84 + 26 + 6),
            // header, stvert, group tag + header, 2 intervals, 2 sub-frames
            (group_frame_model(), 84 + 12 + 16 + 8 + 56),
            (mixed_group_model(), 216),
        ];

        for (data, consumed) in fixtures {
            let model = parse_mdl_bytes(&data).unwrap();
            assert_eq!(model.consumed_len(), consumed);
            assert_eq!(model.consumed_len() + model.trailing_len(), data.len());
        }
    }

    #[test]
    fn test_header_fields() {
        let model = parse_mdl_bytes(&small_model(&[])).unwrap();
        let header = &model.header;

        assert_eq!(&header.ident, b"IDPO");
        assert_eq!(header.version, 6);
        assert_eq!(header.scale, Vec3::new(0.5, 0.25, 2.0));
        assert_eq!(header.scale_origin, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(header.bounding_radius.to_bits(), 42.0f32.to_bits());
        assert_eq!(header.eye_position, Vec3::new(0.0, 0.0, 24.0));
        assert_eq!(
            (header.num_skins, header.skin_width, header.skin_height),
            (1, 4, 4)
        );
        assert_eq!(
            (header.num_verts, header.num_tris, header.num_frames),
            (1, 1, 1)
        );
        assert_eq!(header.sync_type, 1);
        assert_eq!(
            header.extension,
            Some(HeaderExtension {
                flags: 8,
                size: 3.5,
            })
        );
        assert_eq!(model.format_version(), FormatVersion::Extended);
    }

    #[test]
    fn test_header_extension_only_for_version_6() {
        // Legacy header followed by 8 bytes that would be a valid extension
        let data = header(3, [0; 6]).i32s(&[8]).f32s(&[3.5]).0;
        let model = parse_mdl_bytes(&data).unwrap();
        assert_eq!(model.header.extension, None);
        assert_eq!(model.format_version(), FormatVersion::Legacy(3));
        assert_eq!(model.consumed_len(), HEADER_SIZE);
        assert_eq!(model.trailing_len(), 8);
    }

    #[test]
    fn test_decode_is_deterministic() {
        let data = small_model(&[1, 2]);
        assert_eq!(
            parse_mdl_bytes(&data).unwrap(),
            parse_mdl_bytes(&data).unwrap()
        );
    }

    #[test]
    fn test_group_skin() {
        let model = parse_mdl_bytes(&group_skin_model()).unwrap();
        assert_eq!(
            model.skins,
            vec![
                Skin::Group {
                    tag: 1,
                    intervals: vec![0.1, 0.2, 0.3],
                    pixels: vec![vec![1, 1], vec![2, 2], vec![3, 3]],
                },
                Skin::Simple { pixels: vec![9, 9] },
            ]
        );
        assert_eq!(model.skins[0].image_count(), 3);
        assert_eq!(model.trailing_len(), 0);
    }

    #[test]
    fn test_tex_coords_and_triangles_keep_field_order() {
        let data = header(6, [0, 0, 0, 2, 2, 0])
            .i32s(&[0, 16, 32])
            .i32s(&[32, 48, 64])
            .i32s(&[1, 0, 1, 0])
            .i32s(&[0, 1, 0, 1])
            .0;

        let model = parse_mdl_bytes(&data).unwrap();
        assert_eq!(
            model.tex_coords,
            vec![
                TexCoord {
                    on_seam: 0,
                    s: 16,
                    t: 32,
                },
                TexCoord {
                    on_seam: 32,
                    s: 48,
                    t: 64,
                },
            ]
        );
        assert_eq!(
            model.triangles,
            vec![
                Triangle {
                    faces_front: 1,
                    vertices: [0, 1, 0],
                },
                Triangle {
                    faces_front: 0,
                    vertices: [1, 0, 1],
                },
            ]
        );
    }

    #[test]
    fn test_legacy_frames_are_always_single() {
        // A non-zero first word would be a group tag in version 6; here it is
        // just the bbox_min bytes.
        let data = header(3, [0, 0, 0, 1, 0, 2])
            .i32s(&[0, 0, 0])
            .vertex([1, 0, 0], 0)
            .vertex([9, 9, 9], 0)
            .f32s(&[0.75])
            .vertex([4, 4, 4], 1)
            .vertex([2, 0, 0], 0)
            .vertex([8, 8, 8], 0)
            .f32s(&[-1.0])
            .vertex([3, 3, 3], 2)
            .0;

        let model = parse_mdl_bytes(&data).unwrap();
        assert_eq!(model.frames.len(), 2);
        for frame in &model.frames {
            assert!(matches!(
                frame,
                Frame::Single(f) if matches!(f.name, FrameName::Legacy(_))
            ));
        }
        let Frame::Single(first) = &model.frames[0] else {
            unreachable!()
        };
        assert_eq!(first.name, FrameName::Legacy(0.75));
        assert_eq!(first.bbox_min.v, [1, 0, 0]);
        assert_eq!(model.trailing_len(), 0);
    }

    #[test]
    fn test_group_frame() {
        let model = parse_mdl_bytes(&group_frame_model()).unwrap();
        let Frame::Group(group) = &model.frames[0] else {
            panic!("expected frame group");
        };
        assert_eq!(group.tag, 1);
        assert_eq!(group.bbox_max.v, [255, 255, 255]);
        assert_eq!(group.intervals, vec![0.1, 0.2]);
        assert_eq!(group.frames.len(), 2);
        assert_eq!(group.frames[1].name.display(), "run2");
        assert_eq!(group.frames[1].vertices[0], tri_vertex([40, 50, 60], 6));
        assert_eq!(model.frames[0].vertex_samples(), 2);
        assert_eq!(model.trailing, vec![0xFF]);
    }

    #[test]
    fn test_mixed_group_model() {
        let model = parse_mdl_bytes(&mixed_group_model()).unwrap();
        assert!(matches!(model.skins[0], Skin::Group { tag: 5, .. }));
        assert_eq!(model.skins[0].image_count(), 2);
        assert!(matches!(model.frames[0], Frame::Single(_)));
        let Frame::Group(group) = &model.frames[1] else {
            panic!("expected frame group");
        };
        assert_eq!(group.tag, 3);
        assert_eq!(group.frames[0].name.display(), "pain");
        assert_eq!(model.trailing_len(), 0);
    }

    #[test]
    fn test_truncation_always_fails() {
        assert_truncation_always_fails(&small_model(&[]));
    }

    #[test]
    fn test_truncation_always_fails_with_groups() {
        assert_truncation_always_fails(&group_skin_model());
        assert_truncation_always_fails(&mixed_group_model());
        // Only the padding byte may go missing without an error
        let data = group_frame_model();
        assert_truncation_always_fails(&data[..data.len() - 1]);
    }

    #[test]
    fn test_truncation_names_record() {
        let data = small_model(&[]);
        // Cut inside the skin pixels: header (84) + tag (4) + 10 pixel bytes
        match parse_mdl_bytes(&data[..98]) {
            Err(Error::InsufficientData {
                record,
                offset,
                available,
                required,
            }) => {
                assert_eq!(record, "skin pixels");
                assert_eq!(offset, 88);
                assert_eq!(available, 10);
                assert_eq!(required, 16);
            }
            other => panic!("expected InsufficientData, got {other:?}"),
        }
    }

    #[test]
    fn test_corrupt_group_counts_fail_cleanly() {
        let data = header(6, [0, 0, 0, 1, 0, 1])
            .i32s(&[0, 0, 0])
            .i32s(&[1, i32::MAX])
            .vertex([0, 0, 0], 0)
            .vertex([0, 0, 0], 0)
            .0;
        let err = parse_mdl_bytes(&data).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientData {
                record: "frame group intervals",
                ..
            }
        ));

        let data = header(6, [1, 2, 2, 0, 0, 0])
            .i32s(&[1, i32::MAX])
            .f32s(&[0.1])
            .0;
        let err = parse_mdl_bytes(&data).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientData {
                record: "skin group intervals",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_counts_decode_nothing() {
        let data = header(6, [-1, 4, 4, -5, -2, -3]).bytes(&[1, 2, 3, 4]).0;
        let model = parse_mdl_bytes(&data).unwrap();
        assert!(model.skins.is_empty());
        assert!(model.tex_coords.is_empty());
        assert!(model.triangles.is_empty());
        assert!(model.frames.is_empty());
        assert_eq!(model.consumed_len(), HEADER_SIZE + HEADER_EXTENSION_SIZE);
        assert_eq!(model.trailing_len(), 4);
    }
}
