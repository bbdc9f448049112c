//! Sweep geometry and direction token handling.

use std::fmt;
use std::str::FromStr;

use crate::error::SweepError;

/// The geometric path along which the image is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepPath {
    /// One slice per image row.
    LinearRows,
    /// One slice per image column.
    LinearColumns,
    /// One slice per concentric ring around the image midpoint.
    Radial,
}

/// User-facing sweep direction token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDirection {
    /// Left to right.
    LeftRight,
    /// Right to left.
    RightLeft,
    /// Top to bottom.
    TopBottom,
    /// Bottom to top.
    BottomTop,
    /// Clockwise.
    Clockwise,
    /// Anticlockwise.
    Anticlockwise,
}

impl SweepDirection {
    /// All supported tokens, in documentation order.
    pub const ALL: [SweepDirection; 6] = [
        SweepDirection::LeftRight,
        SweepDirection::RightLeft,
        SweepDirection::TopBottom,
        SweepDirection::BottomTop,
        SweepDirection::Clockwise,
        SweepDirection::Anticlockwise,
    ];

    /// Maps the token to its `(geometry, flip)` pair.
    pub fn geometry(self) -> (SweepPath, bool) {
        match self {
            SweepDirection::LeftRight => (SweepPath::LinearRows, false),
            SweepDirection::RightLeft => (SweepPath::LinearRows, true),
            SweepDirection::TopBottom => (SweepPath::LinearColumns, false),
            SweepDirection::BottomTop => (SweepPath::LinearColumns, true),
            SweepDirection::Clockwise => (SweepPath::Radial, false),
            SweepDirection::Anticlockwise => (SweepPath::Radial, true),
        }
    }

    /// The command-line token for this direction.
    pub fn token(self) -> &'static str {
        match self {
            SweepDirection::LeftRight => "lr",
            SweepDirection::RightLeft => "rl",
            SweepDirection::TopBottom => "tb",
            SweepDirection::BottomTop => "bt",
            SweepDirection::Clockwise => "clk",
            SweepDirection::Anticlockwise => "aclk",
        }
    }
}

impl fmt::Display for SweepDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for SweepDirection {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lr" => Ok(SweepDirection::LeftRight),
            "rl" => Ok(SweepDirection::RightLeft),
            "tb" => Ok(SweepDirection::TopBottom),
            "bt" => Ok(SweepDirection::BottomTop),
            "clk" => Ok(SweepDirection::Clockwise),
            "aclk" => Ok(SweepDirection::Anticlockwise),
            other => Err(SweepError::UnknownSweepDirection {
                token: other.to_string(),
            }),
        }
    }
}
