use std::io::{self, Read};
use std::path::Path;

use crate::error::{PnpError, Result};

/// Encoding labels decoded as ISO-8859-1, where each byte is one code point
const LATIN1_LABELS: &[&str] = &[
    "iso-8859-1",
    "iso8859-1",
    "iso_8859-1",
    "latin1",
    "latin-1",
    "l1",
    "cp819",
    "ibm819",
];

const UTF8_LABELS: &[&str] = &["utf-8", "utf8", "us-ascii", "ascii"];

/// Load a JITX XML export, decompressing it first if it's a .zst file
///
/// The text is decoded according to the `encoding` of the XML declaration:
/// UTF-8 (the default when none is declared) and ISO-8859-1 are supported.
pub fn load_xml_file(path: &Path) -> Result<String> {
    let read_err = |source| PnpError::Read {
        path: path.to_path_buf(),
        source,
    };

    let bytes = if path.extension().and_then(|s| s.to_str()) == Some("zst") {
        let file = std::fs::File::open(path).map_err(read_err)?;
        let mut decoder = zstd::Decoder::new(file).map_err(read_err)?;
        let mut content = Vec::new();
        decoder.read_to_end(&mut content).map_err(read_err)?;
        content
    } else {
        std::fs::read(path).map_err(read_err)?
    };

    decode_xml(path, bytes)
}

fn decode_xml(path: &Path, bytes: Vec<u8>) -> Result<String> {
    let Some(encoding) = declared_encoding(&bytes) else {
        return utf8(path, bytes);
    };

    let label = encoding.to_ascii_lowercase();
    if UTF8_LABELS.contains(&label.as_str()) {
        utf8(path, bytes)
    } else if LATIN1_LABELS.contains(&label.as_str()) {
        Ok(bytes.iter().map(|&b| char::from(b)).collect())
    } else {
        Err(PnpError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding,
        })
    }
}

fn utf8(path: &Path, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| PnpError::Read {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidData, e),
    })
}

/// The `encoding` pseudo-attribute of a leading `<?xml ...?>` declaration
fn declared_encoding(bytes: &[u8]) -> Option<String> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let rest = bytes.strip_prefix(b"<?xml")?;
    let end = rest.windows(2).position(|w| w == b"?>")?;
    let decl = &rest[..end];

    let start = decl.windows(8).position(|w| w == b"encoding")? + 8;
    let value = decl[start..].trim_ascii_start().strip_prefix(b"=")?;
    let value = value.trim_ascii_start();
    let (&quote, value) = value.split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let len = value.iter().position(|&b| b == quote)?;
    Some(String::from_utf8_lossy(&value[..len]).into_owned())
}

/// Write `contents` to `path`, creating parent directories as needed
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| PnpError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, contents).map_err(write_err)?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}
