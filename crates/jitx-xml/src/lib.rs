// Tolerant JITX XML export reader
mod parse;
pub mod types;

pub use types::*;

use parse::Parser;
use roxmltree::{Document, ParsingOptions};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JitxXmlError {
    #[error("XML parse error: {0}")]
    XmlParse(#[from] roxmltree::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing required element: <{0}>")]
    MissingElement(&'static str),
}

pub type Result<T> = std::result::Result<T, JitxXmlError>;

/// A parsed JITX board export
///
/// Only the parts needed for assembly output are kept: the `BOARD` placement
/// container and every `SCH-INST` metadata entry in the document. Attribute
/// values are stored as raw text; interpreting them is up to the caller.
#[derive(Debug, Clone)]
pub struct JitxXml {
    board: Board,
    sch_insts: Vec<SchInst>,
}

impl JitxXml {
    /// Parse a JITX export from an XML string
    ///
    /// A DOCTYPE declaration is accepted; its internal subset is read but
    /// nothing is validated against it.
    pub fn parse(xml: &str) -> Result<Self> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(xml, options)?;
        let parsed = Parser::new().parse_document(&doc)?;

        Ok(Self {
            board: parsed.board,
            sch_insts: parsed.sch_insts,
        })
    }

    /// Parse a JITX export from file
    pub fn parse_file(path: impl AsRef<Path>) -> Result<Self> {
        let xml = std::fs::read_to_string(path)?;
        Self::parse(&xml)
    }

    /// The `BOARD` placement container
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Iterate `(designator, mpn)` pairs from schematic metadata
    ///
    /// Entries without `PROPS` or with an empty designator are skipped.
    /// A missing `MPN` attribute yields an empty string.
    pub fn part_numbers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sch_insts
            .iter()
            .filter_map(|inst| inst.props.as_ref())
            .filter_map(|props| {
                let designator = props.designator.as_deref().filter(|d| !d.is_empty())?;
                Some((designator, props.mpn.as_deref().unwrap_or_default()))
            })
    }
}
