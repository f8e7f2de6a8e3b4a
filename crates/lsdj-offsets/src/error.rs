use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::analysis::Variable;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid ROM size: expected {expected} bytes, got {actual}")]
    InvalidRomSize { expected: usize, actual: usize },

    #[error("Failed to initialize emulation session: {0}")]
    Initialization(String),

    #[error("Playback not detected for {version} within {timeout_ms} ms")]
    PlaybackNotDetected { version: String, timeout_ms: u64 },

    #[error("Failed to resolve offsets: {0}")]
    AmbiguousOffsets(AmbiguousOffsets),

    #[error("Offset 0x{offset:X} is outside the {len} byte memory region")]
    OffsetOutOfRange { offset: u32, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if the emulator could not be brought up for this ROM
    pub fn is_initialization(&self) -> bool {
        matches!(self, Error::InvalidRomSize { .. } | Error::Initialization(_))
    }

    /// Names of the variables left unresolved, if this is an ambiguity failure
    pub fn ambiguous_variables(&self) -> Option<Vec<&'static str>> {
        match self {
            Error::AmbiguousOffsets(ambiguous) => Some(ambiguous.names()),
            _ => None,
        }
    }
}

/// A tracked variable whose candidate set did not shrink to one offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnresolvedVariable {
    pub variable: Variable,
    /// Candidates still standing (0 means every offset was eliminated)
    pub remaining: usize,
}

/// Every unresolved variable of one analysis run, in synthesis order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmbiguousOffsets {
    pub unresolved: Vec<UnresolvedVariable>,
}

impl AmbiguousOffsets {
    pub fn names(&self) -> Vec<&'static str> {
        self.unresolved.iter().map(|u| u.variable.name()).collect()
    }

    pub fn contains(&self, variable: Variable) -> bool {
        self.unresolved.iter().any(|u| u.variable == variable)
    }
}

impl fmt::Display for AmbiguousOffsets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, unresolved) in self.unresolved.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(
                f,
                "{} ({} candidates)",
                unresolved.variable, unresolved.remaining
            )?;
        }
        Ok(())
    }
}
