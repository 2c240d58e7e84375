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

//! Row-folding populators.
//!
//! A populator consumes parsed rows one at a time and commits finished
//! values into a table trait. There is no lookahead: each populator decides
//! from the current row alone whether it continues the pending entry or
//! starts a new one. Containers hold at most one active child populator and
//! always finalize it before replacing it.
//!
//! Feed rows with [`Populator::add`]; at end of input call
//! [`Populator::populate`] once to flush the last pending entry.

mod case;
mod for_loop;
mod property;
mod table;

pub use case::CasePopulator;
pub use for_loop::ForLoopPopulator;
pub use property::{
    DocumentationPopulator, MetadataPopulator, SettingPopulator, StepPopulator,
    VariablePopulator,
};
pub use table::{
    CaseTablePopulator, KeywordTablePopulator, SettingTablePopulator, TestTablePopulator,
    VariableTablePopulator,
};

use crate::row::Row;

/// Incremental row consumer writing into a table.
pub trait Populator {
    /// The table trait this populator commits into.
    type Table: ?Sized;

    /// Fold one row into the pending state.
    fn add(&mut self, table: &mut Self::Table, row: Row);

    /// Flush the pending state into the table.
    fn populate(&mut self, table: &mut Self::Table);
}

#[cfg(test)]
pub(crate) mod recording {
    //! A table that records every commit, shared by the populator tests.

    use crate::diagnostic::{Diagnostic, DiagnosticSink};
    use crate::row::Row;
    use crate::sink::{CaseTable, SettingKind, SettingTable, VariableTable};

    pub fn row(cells: &[&str]) -> Row {
        Row::new(cells.iter().copied())
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Event {
        Diagnostic(String),
        StartCase(String),
        SetSetting(String, Vec<String>, Vec<String>),
        SetDocumentation(String, String, Vec<String>),
        AddListEntry(String, String, String, Vec<String>),
        AddVariable(String, Vec<String>, Vec<String>),
        AddStep(Vec<String>, Vec<String>),
        StartForLoop(Vec<String>, Vec<String>),
        AddLoopStep(Vec<String>, Vec<String>),
    }

    #[derive(Debug, Default)]
    pub struct RecordingTable {
        pub events: Vec<Event>,
    }

    impl RecordingTable {
        pub fn new() -> Self {
            Self::default()
        }
    }

    fn kind_of(name: &str) -> Option<SettingKind> {
        match name.to_lowercase().as_str() {
            "documentation" => Some(SettingKind::Documentation),
            "metadata" => Some(SettingKind::ListValued),
            "setup" | "teardown" | "tags" | "timeout" | "template" | "arguments"
            | "suite setup" | "suite teardown" | "force tags" | "default tags" | "library" => {
                Some(SettingKind::Plain)
            }
            _ => None,
        }
    }

    impl DiagnosticSink for RecordingTable {
        fn report(&mut self, diagnostic: Diagnostic) {
            self.events
                .push(Event::Diagnostic(diagnostic.message().to_string()));
        }
    }

    impl SettingTable for RecordingTable {
        fn setting_kind(&self, name: &str) -> Option<SettingKind> {
            kind_of(name)
        }

        fn set_setting(&mut self, name: &str, value: Vec<String>, comments: Vec<String>) {
            self.events
                .push(Event::SetSetting(name.to_string(), value, comments));
        }

        fn set_documentation(&mut self, name: &str, value: String, comments: Vec<String>) {
            self.events
                .push(Event::SetDocumentation(name.to_string(), value, comments));
        }

        fn add_list_entry(
            &mut self,
            name: &str,
            entry_name: String,
            value: String,
            comments: Vec<String>,
        ) {
            self.events.push(Event::AddListEntry(
                name.to_string(),
                entry_name,
                value,
                comments,
            ));
        }
    }

    impl VariableTable for RecordingTable {
        fn add_variable(&mut self, name: String, value: Vec<String>, comments: Vec<String>) {
            self.events.push(Event::AddVariable(name, value, comments));
        }
    }

    impl CaseTable for RecordingTable {
        fn start_case(&mut self, name: &str) {
            self.events.push(Event::StartCase(name.to_string()));
        }

        fn setting_kind(&self, name: &str) -> Option<SettingKind> {
            kind_of(name)
        }

        fn set_setting(&mut self, name: &str, value: Vec<String>, comments: Vec<String>) {
            self.events
                .push(Event::SetSetting(name.to_string(), value, comments));
        }

        fn set_documentation(&mut self, name: &str, value: String, comments: Vec<String>) {
            self.events
                .push(Event::SetDocumentation(name.to_string(), value, comments));
        }

        fn add_step(&mut self, cells: Vec<String>, comments: Vec<String>) {
            self.events.push(Event::AddStep(cells, comments));
        }

        fn start_for_loop(&mut self, declaration: Vec<String>, comments: Vec<String>) {
            self.events.push(Event::StartForLoop(declaration, comments));
        }

        fn add_loop_step(&mut self, cells: Vec<String>, comments: Vec<String>) {
            self.events.push(Event::AddLoopStep(cells, comments));
        }
    }
}
