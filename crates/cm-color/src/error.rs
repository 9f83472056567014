// SPDX-License-Identifier: MIT
//
// Color parsing errors.

use thiserror::Error;

/// Why a color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not a six-digit hexadecimal RGB triplet.
    #[error("invalid color format {input:?}: {reason}")]
    InvalidColorFormat {
        /// The text as supplied by the caller.
        input: String,
        /// Short description of what was wrong.
        reason: &'static str,
    },
}

impl ColorError {
    pub(crate) fn invalid(input: &str, reason: &'static str) -> Self {
        Self::InvalidColorFormat {
            input: input.to_owned(),
            reason,
        }
    }

    /// The rejected input string.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidColorFormat { input, .. } => input,
        }
    }
}
