// Copyright (c) 2025-2026 Zensical and contributors

// SPDX-License-Identifier: MIT
// All contributions are certified under the DCO

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NON-INFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.

// ----------------------------------------------------------------------------

//! CLI-level errors.
//!
//! Every child-crate error composes in via `#[from]`, following the same
//! convention `pw-pathway::Error::Graph` already established for wrapping
//! `pw-graph`. The binary's only job on top of that is converting the final
//! `Result` into a [`pw_diagnostic::Diagnostic`] before exiting.

use std::path::PathBuf;

use pw_diagnostic::location::Position;
use pw_diagnostic::{Diagnostic, IntoDiagnostic, Location, Severity};
use thiserror::Error as ThisError;

/// CLI pipeline error.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Reading an input file failed.
    #[error("failed to read `{path}`: {source}")]
    ReadFailure { path: PathBuf, #[source] source: std::io::Error },

    /// A JSON scenario file failed to parse.
    #[error("failed to parse scenario `{path}`: {source}")]
    BadScenario { path: PathBuf, #[source] source: serde_json::Error },

    /// A tipping-points file line did not split into exactly two tokens.
    #[error("{path}:{line}: malformed line, expected `NAME VALUE`")]
    MalformedTippingPoint { path: PathBuf, line: usize },

    /// A tipping-points file line's value token failed to parse as a float.
    #[error("{path}:{line}: bad tipping-point value `{token}`")]
    BadTippingPointValue { path: PathBuf, line: usize, token: String },

    /// The sequence input parsed to nothing reachable from a single root.
    #[error(transparent)]
    Graph(#[from] pw_graph::Error),

    /// Ingest (sequence or style parsing) failed.
    #[error(transparent)]
    Ingest(#[from] pw_ingest::Error),

    /// A pathway-graph or pathway-map transformation failed.
    #[error(transparent)]
    Pathway(#[from] pw_pathway::Error),

    /// Instance generation or scenario interpolation failed.
    #[error(transparent)]
    PathwaysInput(#[from] pw_pathways_input::Error),
}

/// CLI result.
pub type Result<T> = std::result::Result<T, Error>;

impl IntoDiagnostic for Error {
    /// Converts the final pipeline error into a single diagnostic, attaching
    /// a source location wherever a concrete path is available. Errors
    /// propagated from child crates already render their line number or
    /// action name into `Display`'s message (see each crate's `#[error(...)]`
    /// attributes), so no location is synthesized for those.
    fn into_diagnostic(self) -> Diagnostic {
        let message = self.to_string();
        let location = match &self {
            Self::ReadFailure { path, .. } | Self::BadScenario { path, .. } => {
                Some(Location::new(path.display().to_string(), Position::new(0, 0)))
            }
            Self::MalformedTippingPoint { path, line } | Self::BadTippingPointValue { path, line, .. } => {
                let line = u32::try_from(line.saturating_sub(1)).unwrap_or(u32::MAX);
                Some(Location::new(path.display().to_string(), Position::new(line, 0)))
            }
            Self::Graph(_) | Self::Ingest(_) | Self::Pathway(_) | Self::PathwaysInput(_) => None,
        };

        let diagnostic = Diagnostic::new(Severity::Error, message);
        match location {
            Some(location) => diagnostic.location(location),
            None => diagnostic,
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_tipping_point_carries_a_location() {
        let error = Error::MalformedTippingPoint { path: PathBuf::from("tp.txt"), line: 3 };
        let diagnostic = error.into_diagnostic();
        assert_eq!(diagnostic.severity, Severity::Error);
        let location = diagnostic.location.unwrap();
        assert_eq!(location.uri, "tp.txt");
        assert_eq!(location.range.start.line, 2);
    }

    #[test]
    fn ingest_errors_carry_no_synthesized_location_but_keep_the_message() {
        let error = Error::Ingest(pw_ingest::Error::MalformedLine(5));
        let diagnostic = error.into_diagnostic();
        assert!(diagnostic.location.is_none());
        assert!(diagnostic.message.contains("line 5"));
    }
}
