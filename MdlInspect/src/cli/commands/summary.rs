//! `--summary`: counts and sizes only.

use anyhow::Context;
use console::style;
use std::path::Path;

use crate::formats::mdl::inspect_mdl;

pub fn execute(path: &Path, json: bool) -> anyhow::Result<()> {
    let info = inspect_mdl(path).with_context(|| format!("failed to decode {}", path.display()))?;

    if json {
        println!("{}", info.to_json()?);
        return Ok(());
    }

    println!("{}", style("MDL File Information").bold());
    println!("====================");
    println!("Ident:       {}", info.ident);
    println!(
        "Version:     {}{}",
        info.version,
        if info.is_extended { " (extended)" } else { "" }
    );
    println!("File size:   {} bytes", info.file_size);
    println!();
    println!(
        "Skins:       {} ({} simple, {} group, {} images of {}x{})",
        info.num_skins,
        info.simple_skins,
        info.group_skins,
        info.skin_images,
        info.skin_width,
        info.skin_height
    );
    println!("Tex coords:  {}", info.num_tex_coords);
    println!("Triangles:   {}", info.num_triangles);
    println!(
        "Frames:      {} ({} single, {} group, {} vertex samples)",
        info.num_frames, info.single_frames, info.frame_groups, info.vertex_samples
    );
    println!();
    println!("Decoded:     {} bytes", info.consumed_bytes);
    println!("Trailing:    {} bytes", info.trailing_bytes);

    Ok(())
}
