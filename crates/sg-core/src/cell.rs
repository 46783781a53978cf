//! Cell symbols.
//!
//! The text format recognises three symbols: `'X'` (type A), `'O'` (type B)
//! and `' '` (empty).  Anything else is carried through unchanged as
//! [`Cell::Other`] so that a malformed grid still round-trips.

use std::fmt;

/// The state of one grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Agent of the first type (`'X'`).
    TypeA,
    /// Agent of the second type (`'O'`).
    TypeB,
    /// Unoccupied cell (`' '`).
    #[default]
    Empty,
    /// Unrecognised symbol.  Not empty, so the satisfaction rule treats it as
    /// an occupant; it is never counted by the dissimilarity metric.
    Other(char),
}

impl Cell {
    pub const TYPE_A_SYMBOL: char = 'X';
    pub const TYPE_B_SYMBOL: char = 'O';
    pub const EMPTY_SYMBOL:  char = ' ';

    /// Map a text symbol to a cell.  Never fails.
    #[inline]
    pub fn from_char(c: char) -> Cell {
        match c {
            Self::TYPE_A_SYMBOL => Cell::TypeA,
            Self::TYPE_B_SYMBOL => Cell::TypeB,
            Self::EMPTY_SYMBOL  => Cell::Empty,
            other               => Cell::Other(other),
        }
    }

    /// The text symbol for this cell.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Cell::TypeA    => Self::TYPE_A_SYMBOL,
            Cell::TypeB    => Self::TYPE_B_SYMBOL,
            Cell::Empty    => Self::EMPTY_SYMBOL,
            Cell::Other(c) => c,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// `true` for the two recognised agent types.
    #[inline]
    pub fn is_agent(self) -> bool {
        matches!(self, Cell::TypeA | Cell::TypeB)
    }

    /// The opposite agent type; empty and other cells map to themselves.
    pub fn swapped(self) -> Cell {
        match self {
            Cell::TypeA => Cell::TypeB,
            Cell::TypeB => Cell::TypeA,
            other       => other,
        }
    }
}

impl From<char> for Cell {
    fn from(c: char) -> Cell {
        Cell::from_char(c)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
