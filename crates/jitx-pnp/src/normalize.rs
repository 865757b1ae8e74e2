use crate::diagnostics::{DiagnosticSink, Warning};
use crate::row::Side;

/// Leading characters that make spreadsheets evaluate a cell as a formula
const FORMULA_TRIGGERS: [char; 4] = ['=', '+', '-', '@'];

/// Parse a float, falling back to `default` when absent or unusable
///
/// Non-finite values (`nan`, `inf`) count as unusable since they cannot
/// be placed.
pub fn parse_f64_or(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// Map a raw `SIDE` attribute onto [`Side`]
///
/// Matching is case-insensitive and ignores surrounding whitespace. Anything
/// else is reported to `sink` and treated as `Top`.
pub fn normalize_side(raw: &str, sink: &mut dyn DiagnosticSink) -> Side {
    match raw.trim().to_lowercase().as_str() {
        "top" => Side::Top,
        "bottom" => Side::Bottom,
        _ => {
            sink.warn(Warning::UnrecognizedSide {
                raw: raw.to_string(),
            });
            Side::Top
        }
    }
}

/// Neutralize values a spreadsheet would read as a formula
///
/// Prefixes a single quote when the value starts with `=`, `+`, `-` or `@`.
pub fn sanitize_field(value: &str) -> String {
    if value.starts_with(FORMULA_TRIGGERS) {
        format!("'{value}")
    } else {
        value.to_string()
    }
}

/// Drop the `$variant` suffix JITX appends to package names
pub fn strip_package_variant(package: &str) -> &str {
    package.split('$').next().unwrap_or_default()
}
