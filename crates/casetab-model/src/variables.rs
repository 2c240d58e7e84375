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

//! The variables section of a file.

use casetab_core::{Diagnostic, DiagnosticSink, VariableTable};

/// One variable definition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    pub name: String,
    pub value: Vec<String>,
    pub comments: Vec<String>,
}

/// Collects variables in definition order.
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableSection {
    pub variables: Vec<Variable>,
    pub diagnostics: Vec<Diagnostic>,
}

impl VariableSection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for VariableSection {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

impl VariableTable for VariableSection {
    fn add_variable(&mut self, name: String, value: Vec<String>, comments: Vec<String>) {
        self.variables.push(Variable {
            name,
            value,
            comments,
        });
    }
}
