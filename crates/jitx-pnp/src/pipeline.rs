use std::path::{Path, PathBuf};

use jitx_xml::JitxXml;

use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::error::{PnpError, Result};
use crate::extract::extract_rows;
use crate::format::render;
use crate::row::{ALL_FIELDS, ComponentRow, PER_SIDE_FIELDS, Side};
use crate::utils::file::{load_xml_file, write_output};
use crate::OutputFormat;

/// Where to persist the generated table
#[derive(Debug, Clone)]
pub struct OutputTarget {
    pub path: PathBuf,
    /// Write `<stem>_top.<ext>` / `<stem>_bottom.<ext>` without a Side
    /// column instead of a single combined file
    pub split_sides: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PnpOptions {
    pub format: OutputFormat,
    pub output: Option<OutputTarget>,
}

/// Generate a pick-and-place table from a JITX XML board export
///
/// Warnings are forwarded to the `log` facade. Returns the combined table
/// (both sides, Side column included) regardless of `options.output`.
pub fn pick_and_place(input: &Path, options: &PnpOptions) -> Result<String> {
    pick_and_place_with_sink(input, options, &mut LogSink)
}

/// Same as [`pick_and_place`], reporting warnings to `sink`
pub fn pick_and_place_with_sink(
    input: &Path,
    options: &PnpOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<String> {
    if !input.exists() {
        return Err(PnpError::InputNotFound(input.to_path_buf()));
    }

    let rows = read_rows(input, sink)?;
    log::debug!("Extracted {} placements from {}", rows.len(), input.display());

    let combined = render(&rows, ALL_FIELDS, options.format)?;

    if let Some(target) = &options.output {
        if target.split_sides {
            write_split_sides(&rows, &target.path, options.format)?;
        } else {
            write_output(&target.path, &combined)?;
        }
    }

    Ok(combined)
}

/// Load, parse and extract sorted rows from `input`
pub fn read_rows(input: &Path, sink: &mut dyn DiagnosticSink) -> Result<Vec<ComponentRow>> {
    let content = load_xml_file(input)?;
    let doc = JitxXml::parse(&content).map_err(|source| PnpError::Document {
        path: input.to_path_buf(),
        source,
    })?;
    Ok(extract_rows(&doc, input, sink))
}

fn write_split_sides(rows: &[ComponentRow], path: &Path, format: OutputFormat) -> Result<()> {
    for side in Side::ALL {
        let side_rows: Vec<ComponentRow> =
            rows.iter().filter(|r| r.side == side).cloned().collect();
        if side_rows.is_empty() {
            continue;
        }
        let contents = render(&side_rows, PER_SIDE_FIELDS, format)?;
        write_output(&side_path(path, side), &contents)?;
    }
    Ok(())
}

/// `out/pnp.csv` -> `out/pnp_top.csv`
pub fn side_path(path: &Path, side: Side) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut name = format!("{stem}_{}", side.file_tag());
    if let Some(ext) = path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    path.with_file_name(name)
}
