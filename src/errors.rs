//! Errors used throughout the crate.
//!
//! `Errors` is the single error type returned by every fallible constructor
//! in the crate, from chess-piece placement to the fraction and shoe value
//! objects. Each variant carries the offending input so callers can log it
//! or show it to a user without re-deriving what went wrong.
//!
//! Usage guidelines:
//! - Constructors return `Result<Self, Errors>` and never clamp or correct
//!   the input they reject.
//! - Query methods (`can_move`, `can_kill`, `range`, ...) are total and do
//!   not return errors; an impossible query answers `false`.
//! - Text-level helpers (algebraic parsing, shell parsing) report failures
//!   as `String` messages instead, since those are shown verbatim.

use std::fmt;

use crate::exercises::shoe::{Brand, Kind};
use crate::pieces::piece_color::Color;

/// Why a piece could not be placed where the caller asked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlacementFault {
    /// Row or column outside `0..=7`.
    OutOfBounds,
    /// A pawn of this color may never stand on the requested row
    /// (row 0 for white, row 7 for black).
    ForbiddenPawnRow(Color),
}

/// Unified error type for the crate.
///
/// When matching on `Errors`:
/// - `InvalidPlacement` is the only chess-rule failure; it is raised at
///   construction time and the piece is never created.
/// - `NonPositiveDenominator`, `ReciprocalOfZero` and `FractionOverflow`
///   come from fraction arithmetic.
/// - `UnsupportedShoe` is the shoe catalogue's one forbidden combination.
#[derive(Clone, Debug, PartialEq)]
pub enum Errors {
    /// A piece was constructed on a square it can never occupy.
    ///
    /// Payload: (row, column, fault)
    InvalidPlacement((i32, i32, PlacementFault)),

    /// A fraction was constructed with a zero or negative denominator.
    ///
    /// Payload: the rejected denominator.
    NonPositiveDenominator(i32),

    /// The reciprocal of a zero fraction was requested.
    ReciprocalOfZero,

    /// A fraction result does not fit in `i32` even after reduction.
    FractionOverflow,

    /// The brand does not make this kind of shoe.
    ///
    /// Payload: (brand, kind)
    UnsupportedShoe((Brand, Kind)),
}

impl Errors {
    /// True for the chess placement failure, whatever its fault.
    pub fn is_invalid_placement(&self) -> bool {
        matches!(self, Errors::InvalidPlacement(_))
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Errors::InvalidPlacement((row, column, PlacementFault::OutOfBounds)) => write!(
                f,
                "position ({row}, {column}) is out of bounds (0 - 7)"
            ),
            Errors::InvalidPlacement((row, column, PlacementFault::ForbiddenPawnRow(color))) => {
                write!(
                    f,
                    "{color} pawn can not start in row {row} (column {column})"
                )
            }
            Errors::NonPositiveDenominator(d) => {
                write!(f, "denominator must be positive, got {d}")
            }
            Errors::ReciprocalOfZero => write!(f, "cannot take reciprocal of zero"),
            Errors::FractionOverflow => write!(f, "fraction does not fit in 32 bits"),
            Errors::UnsupportedShoe((brand, kind)) => {
                write!(f, "{brand} does not sell {kind} shoes")
            }
        }
    }
}

impl std::error::Error for Errors {}
