//! Raw document model for JITX board exports.
//!
//! Every attribute is kept as `Option<String>` exactly as it appeared in the
//! XML. Missing attributes and missing child elements are represented, not
//! rejected; deciding what is usable happens downstream.

/// `BOARD` element: the placement container
#[derive(Debug, Clone, Default)]
pub struct Board {
    /// Direct `INST` children, in document order
    pub insts: Vec<BoardInst>,
}

/// `BOARD/INST`: one placed component
#[derive(Debug, Clone, Default)]
pub struct BoardInst {
    pub designator: Option<String>,
    pub side: Option<String>,
    /// Package name, possibly carrying a `$`-separated variant suffix
    pub package: Option<String>,
    pub pose: Option<Pose>,
}

/// `INST/POSE`: placement geometry
#[derive(Debug, Clone, Default)]
pub struct Pose {
    pub x: Option<String>,
    pub y: Option<String>,
    pub angle: Option<String>,
}

/// `SCH-INST`: a schematic symbol instance
///
/// Multi-unit components produce one `SCH-INST` per unit, all sharing the
/// same designator.
#[derive(Debug, Clone, Default)]
pub struct SchInst {
    pub props: Option<Props>,
}

/// `SCH-INST/PROPS`
#[derive(Debug, Clone, Default)]
pub struct Props {
    pub designator: Option<String>,
    pub mpn: Option<String>,
}
