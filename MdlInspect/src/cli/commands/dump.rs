//! Default command: decode a model and dump it to stdout.

use anyhow::Context;
use std::io::Write;
use std::path::Path;

use crate::formats::mdl::{DumpOptions, MdlModel, read_mdl, write_dump};

/// Decode `path` and print the header, the requested collections, and the
/// trailing bytes.
pub fn execute(path: &Path, options: DumpOptions, json: bool) -> anyhow::Result<()> {
    let model = read_mdl(path).with_context(|| format!("failed to decode {}", path.display()))?;
    tracing::info!(
        "Decoded {} ({} frames, {} trailing bytes)",
        path.display(),
        model.frames.len(),
        model.trailing_len()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_output(&mut out, &model, options, json)?;
    out.flush()?;

    Ok(())
}

/// Everything the dump command prints for `model`, with nothing before the
/// header.
fn write_output<W: Write>(
    out: &mut W,
    model: &MdlModel,
    options: DumpOptions,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", model.to_json()?)?;
    } else {
        write_dump(out, model, options)?;
    }
    Ok(())
}
