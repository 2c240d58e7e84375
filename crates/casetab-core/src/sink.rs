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

//! Table traits the populators commit finished values into.
//!
//! The domain model implements these; the populators stay agnostic of how
//! settings, variables and cases are actually stored. All commit methods
//! are infallible by design: a table accepts whatever the populators hand
//! it and records problems through its [`DiagnosticSink`].

use crate::diagnostic::DiagnosticSink;

/// How a recognized setting accumulates and commits its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SettingKind {
    /// Cell-list value committed as-is (setup, tags, timeout, ...).
    Plain,
    /// Free text joined across rows with escape-aware line breaks.
    Documentation,
    /// Named entries appended per row (suite metadata).
    ListValued,
}

/// A settings table (the `*** Settings ***` section of a file).
pub trait SettingTable: DiagnosticSink {
    /// Kind of the named setting, or `None` when the name is unknown.
    ///
    /// Lookup is expected to tolerate the name as written in the source
    /// (case and inner whitespace included).
    fn setting_kind(&self, name: &str) -> Option<SettingKind>;

    /// Commit a plain setting value.
    fn set_setting(&mut self, name: &str, value: Vec<String>, comments: Vec<String>);

    /// Commit a joined documentation value.
    fn set_documentation(&mut self, name: &str, value: String, comments: Vec<String>);

    /// Commit one entry of a list-valued setting.
    fn add_list_entry(
        &mut self,
        name: &str,
        entry_name: String,
        value: String,
        comments: Vec<String>,
    );
}

/// A variables table.
pub trait VariableTable: DiagnosticSink {
    fn add_variable(&mut self, name: String, value: Vec<String>, comments: Vec<String>);
}

/// A table of test cases or user keywords.
///
/// Entity-level commits apply to the most recently started case; loop-step
/// commits apply to the most recently started for-loop of that case.
pub trait CaseTable: DiagnosticSink {
    /// Begin a new test case or keyword with the given name.
    fn start_case(&mut self, name: &str);

    /// Kind of the named case-level setting, or `None` when unknown.
    fn setting_kind(&self, name: &str) -> Option<SettingKind>;

    /// Commit a plain case-level setting.
    fn set_setting(&mut self, name: &str, value: Vec<String>, comments: Vec<String>);

    /// Commit the case documentation.
    fn set_documentation(&mut self, name: &str, value: String, comments: Vec<String>);

    /// Commit one step of the case body.
    fn add_step(&mut self, cells: Vec<String>, comments: Vec<String>);

    /// Begin a for-loop in the case body.
    fn start_for_loop(&mut self, declaration: Vec<String>, comments: Vec<String>);

    /// Commit one step of the current for-loop body.
    fn add_loop_step(&mut self, cells: Vec<String>, comments: Vec<String>);
}
