use clap::ValueEnum;

pub mod diagnostics;
pub mod error;
pub mod extract;
pub mod format;
pub mod natural;
pub mod normalize;
pub mod pipeline;
pub mod row;
pub mod utils;

// Re-export jitx-xml for external use
pub use jitx_xml;

pub use diagnostics::{DiagnosticSink, LogSink, Warning};
pub use error::PnpError;
pub use pipeline::{OutputTarget, PnpOptions, pick_and_place, pick_and_place_with_sink};
pub use row::{ALL_FIELDS, ComponentRow, Field, PER_SIDE_FIELDS, Side};

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma-separated values
    #[default]
    Csv,
    /// Tab-separated values
    Tsv,
    /// Fixed-width columns
    Txt,
}
