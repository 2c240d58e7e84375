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

//! The settings section of a file.

use casetab_core::{Diagnostic, DiagnosticSink, SettingKind, SettingTable};

/// One committed entry of the settings section, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SettingEntry {
    Setting {
        name: String,
        value: Vec<String>,
        comments: Vec<String>,
    },
    Documentation {
        value: String,
        comments: Vec<String>,
    },
    Metadata {
        name: String,
        value: String,
        comments: Vec<String>,
    },
}

/// Collects suite-level settings as the populator commits them.
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettingSection {
    pub entries: Vec<SettingEntry>,
    pub diagnostics: Vec<Diagnostic>,
}

impl SettingSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed documentation, if any.
    pub fn documentation(&self) -> Option<&str> {
        self.entries.iter().find_map(|entry| match entry {
            SettingEntry::Documentation { value, .. } => Some(value.as_str()),
            _ => None,
        })
    }
}

/// Lookup key: lowercased with inner whitespace collapsed, so settings
/// match however they are written in the source.
fn canonical(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl DiagnosticSink for SettingSection {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

impl SettingTable for SettingSection {
    fn setting_kind(&self, name: &str) -> Option<SettingKind> {
        match canonical(name).as_str() {
            "documentation" => Some(SettingKind::Documentation),
            "metadata" => Some(SettingKind::ListValued),
            "suite setup" | "suite teardown" | "test setup" | "test teardown"
            | "test timeout" | "force tags" | "default tags" | "library" | "resource"
            | "variables" => Some(SettingKind::Plain),
            _ => None,
        }
    }

    fn set_setting(&mut self, name: &str, value: Vec<String>, comments: Vec<String>) {
        self.entries.push(SettingEntry::Setting {
            name: name.to_string(),
            value,
            comments,
        });
    }

    fn set_documentation(&mut self, _name: &str, value: String, comments: Vec<String>) {
        self.entries
            .push(SettingEntry::Documentation { value, comments });
    }

    fn add_list_entry(
        &mut self,
        _name: &str,
        entry_name: String,
        value: String,
        comments: Vec<String>,
    ) {
        self.entries.push(SettingEntry::Metadata {
            name: entry_name,
            value,
            comments,
        });
    }
}
