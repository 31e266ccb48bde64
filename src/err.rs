use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::aig::Lit;

/// Where the cursor stood when something went wrong. `column` counts every
/// byte consumed since the start of the input; it is not reset at newlines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub line: u64,
    pub column: u64,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: character {}", self.line, self.column)
    }
}

/// Subset restrictions of the AIGER format this crate does not lift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    Latches(u64),
    Outputs(u64),
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unsupported::Latches(n) => write!(f, "can not handle AIGs with latches ({} found)", n),
            Unsupported::Outputs(n) => write!(f, "expected exactly one output ({} found)", n),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}: unexpected EOF")]
    UnexpectedEndOfInput(Position),

    #[error("{0}: expected digit")]
    MalformedInteger(Position),

    #[error("{pos}: unexpected character {found:?} (expected {expected:?})")]
    UnexpectedTerminator {
        pos: Position,
        expected: char,
        found: char,
    },

    #[error("{0}: integer too large")]
    IntegerOverflow(Position),

    #[error("{pos}: {feature}")]
    UnsupportedFeature { pos: Position, feature: Unsupported },

    #[error("{pos}: invalid header: {reason}")]
    InvalidHeader { pos: Position, reason: String },

    #[error("{pos}: literal {lit} exceeds maximum literal {max}")]
    LiteralOutOfRange { pos: Position, lit: Lit, max: Lit },

    #[error("{pos}: invalid delta {delta} for AND gate {lhs} (at most {bound} allowed)")]
    InvalidGateEncoding {
        pos: Position,
        lhs: Lit,
        delta: u64,
        bound: u64,
    },

    #[error("failed to open {}: {}", .path.display(), .source)]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// The input position of a parse or validation failure, if it has one.
    pub fn position(&self) -> Option<Position> {
        match self {
            Error::UnexpectedEndOfInput(pos)
            | Error::MalformedInteger(pos)
            | Error::IntegerOverflow(pos)
            | Error::UnexpectedTerminator { pos, .. }
            | Error::UnsupportedFeature { pos, .. }
            | Error::InvalidHeader { pos, .. }
            | Error::LiteralOutOfRange { pos, .. }
            | Error::InvalidGateEncoding { pos, .. } => Some(*pos),
            Error::File { .. } | Error::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
