use std::path::PathBuf;

use jitx_xml::JitxXmlError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PnpError {
    #[error("XML file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported encoding \"{encoding}\" declared in {}", path.display())]
    UnsupportedEncoding { path: PathBuf, encoding: String },

    #[error("Failed to parse {}: {source}", path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: JitxXmlError,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, PnpError>;
