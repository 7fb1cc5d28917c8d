//! The [`CellKind`] type — classification of a single track cell.

use std::fmt;

/// What occupies a track cell.
///
/// Discriminants match the palette order used by the image codec.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CellKind {
    /// Off the track. Never drivable.
    #[default]
    Outside = 0,
    Road = 1,
    Start = 2,
    /// Occupying one of these ends a search.
    Finish = 3,
    /// A cell a planned path went through. Drivable like road.
    Trace = 4,
}

impl CellKind {
    /// All kinds, in discriminant order.
    pub const ALL: [CellKind; 5] = [
        CellKind::Outside,
        CellKind::Road,
        CellKind::Start,
        CellKind::Finish,
        CellKind::Trace,
    ];

    /// Whether a vehicle may occupy or cross this cell.
    #[inline]
    pub const fn is_drivable(self) -> bool {
        !matches!(self, CellKind::Outside)
    }

    /// Character used by the ASCII track format.
    pub const fn to_char(self) -> char {
        match self {
            CellKind::Outside => '#',
            CellKind::Road => '.',
            CellKind::Start => 'S',
            CellKind::Finish => 'F',
            CellKind::Trace => '*',
        }
    }

    /// Inverse of [`to_char`](Self::to_char).
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(CellKind::Outside),
            '.' => Some(CellKind::Road),
            'S' => Some(CellKind::Start),
            'F' => Some(CellKind::Finish),
            '*' => Some(CellKind::Trace),
            _ => None,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellKind::Outside => "outside",
            CellKind::Road => "road",
            CellKind::Start => "start",
            CellKind::Finish => "finish",
            CellKind::Trace => "trace",
        };
        f.write_str(name)
    }
}
