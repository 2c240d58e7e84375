// CaseTab - Tabular test data populator
//
// Copyright (c) 2025 CaseTab contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Diagnostic events reported while populating tables.
//!
//! Populating never fails; syntax problems degrade locally and are reported
//! through [`DiagnosticSink`] so the embedding host can surface them.

use thiserror::Error;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Informational hint
    Hint,
    /// Warning - might be an issue
    Warning,
    /// Error - definitely an issue
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hint => write!(f, "hint"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic raised while folding rows into the model.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{severity}: {message}")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    location: Option<String>,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// The warning reported for a row holding only the continuation marker.
    ///
    /// `location` names where the row appeared (e.g. `'Tags' setting`);
    /// an empty location omits the `In <location>: ` prefix.
    pub fn deprecated_continuation(location: &str) -> Self {
        let prefix = if location.is_empty() {
            String::new()
        } else {
            format!("In {location}: ")
        };
        let message = format!(
            "{prefix}Ignoring lines with only continuation marker '...' is deprecated."
        );
        let diagnostic = Diagnostic::warning(message);
        if location.is_empty() {
            diagnostic
        } else {
            diagnostic.with_location(location)
        }
    }

    // Public getters
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

/// Receiver for diagnostics raised during populating.
///
/// Every table trait extends this, so populators can report problems on the
/// table they are filling.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}
