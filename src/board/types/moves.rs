//! Move candidates and applied moves.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// A destination a piece could move to.
///
/// `is_capture` reflects the occupant of `destination` when the candidate was
/// generated. `is_legal` starts out `true` and is cleared by the legality
/// filter when the move would leave the mover's own king capturable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveCandidate {
    pub destination: Square,
    pub is_capture: bool,
    pub is_legal: bool,
}

impl MoveCandidate {
    #[inline]
    #[must_use]
    pub(crate) const fn new(destination: Square, is_capture: bool) -> Self {
        MoveCandidate {
            destination,
            is_capture,
            is_legal: true,
        }
    }
}

impl fmt::Display for MoveCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.destination)?;
        if self.is_capture {
            write!(f, "x")?;
        }
        if !self.is_legal {
            write!(f, "!")?;
        }
        Ok(())
    }
}

/// A move that was applied by the turn engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayedMove {
    pub mover: Color,
    pub from: Square,
    pub to: Square,
    /// The piece as it stood on `from`, before any promotion.
    pub piece: Piece,
    pub captured: Option<Piece>,
    /// True when a pawn reached the far row and became a queen.
    pub promoted: bool,
}

impl fmt::Display for PlayedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.captured.is_some() { 'x' } else { '-' };
        write!(f, "{} {}{}{}", self.piece, self.from, sep, self.to)?;
        if self.promoted {
            write!(f, "=q")?;
        }
        Ok(())
    }
}
