use std::borrow::Cow;
use std::fmt;

/// Board side a component is mounted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
}

impl Side {
    /// Canonical sides, in output order
    pub const ALL: [Side; 2] = [Side::Top, Side::Bottom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Bottom => "Bottom",
        }
    }

    /// Suffix used for per-side output files (`<stem>_top.<ext>`)
    pub fn file_tag(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    RefDes,
    X,
    Y,
    Rotation,
    Pn,
    Package,
    Side,
}

/// Columns of the combined (both sides) table
pub const ALL_FIELDS: &[Field] = &[
    Field::RefDes,
    Field::X,
    Field::Y,
    Field::Rotation,
    Field::Pn,
    Field::Package,
    Field::Side,
];

/// Columns of a per-side table; the side is implied by the file
pub const PER_SIDE_FIELDS: &[Field] = &[
    Field::RefDes,
    Field::X,
    Field::Y,
    Field::Rotation,
    Field::Pn,
    Field::Package,
];

impl Field {
    /// Header used by delimited formats
    pub fn name(&self) -> &'static str {
        match self {
            Self::RefDes => "RefDes",
            Self::X => "X",
            Self::Y => "Y",
            Self::Rotation => "Rotation",
            Self::Pn => "PN",
            Self::Package => "Package",
            Self::Side => "Side",
        }
    }

    /// Header used by the fixed-width format
    pub fn label(&self) -> &'static str {
        match self {
            Self::RefDes => "REF DES",
            Self::X => "X COORD",
            Self::Y => "Y COORD",
            Self::Rotation => "ROT",
            Self::Pn => "PN",
            Self::Package => "PACKAGE",
            Self::Side => "SIDE",
        }
    }
}

/// One placed component, ready for output
///
/// Rows are only built by the extractor, which guarantees a non-empty
/// designator and sanitized `pn`/`package` values.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRow {
    pub ref_des: String,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub pn: String,
    pub package: String,
    pub side: Side,
}

impl ComponentRow {
    /// Display value of a column
    ///
    /// Coordinates and rotation are always rendered with three decimals.
    pub fn value(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::RefDes => Cow::Borrowed(&self.ref_des),
            Field::X => Cow::Owned(format!("{:.3}", self.x)),
            Field::Y => Cow::Owned(format!("{:.3}", self.y)),
            Field::Rotation => Cow::Owned(format!("{:.3}", self.rotation)),
            Field::Pn => Cow::Borrowed(&self.pn),
            Field::Package => Cow::Borrowed(&self.package),
            Field::Side => Cow::Borrowed(self.side.as_str()),
        }
    }
}
