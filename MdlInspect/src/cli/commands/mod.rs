use clap::Args;

use crate::formats::mdl::DumpOptions;

pub mod dump;
pub mod summary;

/// Collections to include in the dump. The header and trailing bytes are
/// always printed.
#[derive(Args, Debug, Default)]
pub struct SectionArgs {
    /// Dump skins
    #[arg(long)]
    pub skins: bool,

    /// Dump texture coordinates (stverts)
    #[arg(long)]
    pub stverts: bool,

    /// Dump triangles
    #[arg(long)]
    pub triangles: bool,

    /// Dump frames and frame groups
    #[arg(long)]
    pub frames: bool,

    /// Dump every collection
    #[arg(short, long)]
    pub all: bool,
}

impl SectionArgs {
    pub fn to_options(&self) -> DumpOptions {
        if self.all {
            return DumpOptions::all();
        }
        DumpOptions {
            skins: self.skins,
            tex_coords: self.stverts,
            triangles: self.triangles,
            frames: self.frames,
        }
    }
}
