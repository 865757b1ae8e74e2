use std::collections::HashMap;
use std::path::Path;

use jitx_xml::{BoardInst, JitxXml};

use crate::diagnostics::{DiagnosticSink, Warning};
use crate::natural::natural_key;
use crate::normalize::{normalize_side, parse_f64_or, sanitize_field, strip_package_variant};
use crate::row::ComponentRow;

/// Build a designator -> MPN map from schematic metadata
///
/// Multi-unit components have one SCH-INST per unit sharing a designator;
/// the first one seen wins.
pub fn part_number_map(doc: &JitxXml) -> HashMap<&str, &str> {
    let mut map = HashMap::new();
    for (designator, mpn) in doc.part_numbers() {
        map.entry(designator).or_insert(mpn);
    }
    map
}

/// Extract sorted placement rows from a parsed export
///
/// `source` only labels diagnostics. Instances lacking a designator or a
/// `POSE` are skipped and reported to `sink`.
pub fn extract_rows(
    doc: &JitxXml,
    source: &Path,
    sink: &mut dyn DiagnosticSink,
) -> Vec<ComponentRow> {
    let part_numbers = part_number_map(doc);

    let mut rows: Vec<ComponentRow> = doc
        .board()
        .insts
        .iter()
        .filter_map(|inst| build_row(inst, &part_numbers, sink))
        .collect();

    if rows.is_empty() {
        sink.warn(Warning::NoInstances {
            path: source.to_path_buf(),
        });
    }

    rows.sort_by_cached_key(|row| natural_key(&row.ref_des));
    rows
}

fn build_row(
    inst: &BoardInst,
    part_numbers: &HashMap<&str, &str>,
    sink: &mut dyn DiagnosticSink,
) -> Option<ComponentRow> {
    let Some(designator) = inst.designator.as_deref().filter(|d| !d.is_empty()) else {
        sink.warn(Warning::MissingDesignator);
        return None;
    };

    let side = normalize_side(inst.side.as_deref().unwrap_or("Top"), sink);
    let package = strip_package_variant(inst.package.as_deref().unwrap_or_default());

    let Some(pose) = inst.pose.as_ref() else {
        sink.warn(Warning::MissingPose {
            designator: designator.to_string(),
        });
        return None;
    };

    let pn = part_numbers.get(designator).copied().unwrap_or_default();

    Some(ComponentRow {
        ref_des: designator.to_string(),
        x: parse_f64_or(pose.x.as_deref(), 0.0),
        y: parse_f64_or(pose.y.as_deref(), 0.0),
        rotation: parse_f64_or(pose.angle.as_deref(), 0.0),
        pn: sanitize_field(pn),
        package: sanitize_field(package),
        side,
    })
}
