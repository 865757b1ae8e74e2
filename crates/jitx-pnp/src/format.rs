use std::borrow::Cow;

use crate::error::Result;
use crate::row::{ComponentRow, Field};
use crate::OutputFormat;

/// Render rows in the requested format using an explicit column list
pub fn render(rows: &[ComponentRow], fields: &[Field], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Csv => write_delimited(rows, fields, b','),
        OutputFormat::Tsv => write_delimited(rows, fields, b'\t'),
        OutputFormat::Txt => Ok(write_fixed_width(rows, fields)),
    }
}

/// Delimiter-separated values with a header record
///
/// Quoting follows the usual minimal rules: only fields containing the
/// delimiter, a quote or a line break are quoted. Records end in CRLF.
pub fn write_delimited(rows: &[ComponentRow], fields: &[Field], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(fields.iter().map(Field::name))?;
    for row in rows {
        let record: Vec<Cow<'_, str>> = fields.iter().map(|f| row.value(*f)).collect();
        writer.write_record(record.iter().map(|v| v.as_bytes()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Aligned text table
///
/// Each column is as wide as its longest value or label. Columns are
/// left-justified and separated by two spaces, with a dashed rule under the
/// header.
pub fn write_fixed_width(rows: &[ComponentRow], fields: &[Field]) -> String {
    let cells: Vec<Vec<Cow<'_, str>>> = rows
        .iter()
        .map(|row| fields.iter().map(|f| row.value(*f)).collect())
        .collect();

    let widths: Vec<usize> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            cells
                .iter()
                .map(|values| values[i].chars().count())
                .fold(field.label().chars().count(), usize::max)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(pad_line(fields.iter().map(Field::label), &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for values in &cells {
        lines.push(pad_line(values.iter().map(|v| v.as_ref()), &widths));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn pad_line<'a>(values: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    values
        .zip(widths)
        .map(|(value, &width)| format!("{value:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
}
