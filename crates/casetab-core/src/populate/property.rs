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

//! Property populators: accumulate one value across rows.
//!
//! Each populator gathers the cells of one logical entry (a variable, a
//! setting, a documentation string, a metadata entry or a step) until its
//! owner finalizes it with `finish()` and commits the result into the
//! table. Comment cells of every row are aggregated alongside the value.

use crate::comments::Comments;
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::row::{Row, CONTINUATION_MARKER};

/// Cell-list accumulation shared by the variable and setting populators.
///
/// The first data row contributes the cells after its head (the head is the
/// variable or setting name); continuation rows contribute their payload.
#[derive(Debug, Default)]
struct ValueAccumulator {
    value: Vec<String>,
    comments: Comments,
    data_added: bool,
}

impl ValueAccumulator {
    fn append(&mut self, row: &Row) {
        let cells = if self.data_added { row.data() } else { row.tail() };
        self.value.extend(cells.iter().cloned());
        self.data_added = true;
    }
}

// ==================== Variable ====================

/// Accumulates one variable definition. The name is fixed at construction
/// from the defining row's head and never re-derived.
#[derive(Debug)]
pub struct VariablePopulator {
    name: String,
    state: ValueAccumulator,
}

impl VariablePopulator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: ValueAccumulator::default(),
        }
    }

    pub fn add<S: DiagnosticSink + ?Sized>(&mut self, sink: &mut S, row: &Row) {
        if !row.is_commented() {
            if row.is_bare_continuation() {
                sink.report(Diagnostic::deprecated_continuation("'Variables' section"));
            }
            self.state.append(row);
        }
        self.state.comments.add(row);
    }

    /// The variable always commits, even with an empty value.
    pub fn finish(self) -> (String, Vec<String>, Vec<String>) {
        (self.name, self.state.value, self.state.comments.into_value())
    }
}

// ==================== Setting ====================

/// Accumulates one plain setting value.
#[derive(Debug)]
pub struct SettingPopulator {
    name: String,
    state: ValueAccumulator,
}

impl SettingPopulator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: ValueAccumulator::default(),
        }
    }

    pub fn add<S: DiagnosticSink + ?Sized>(&mut self, sink: &mut S, row: &Row) {
        if !row.is_commented() {
            if row.is_bare_continuation() {
                let location = format!("'{}' setting", self.name);
                sink.report(Diagnostic::deprecated_continuation(&location));
            }
            self.state.append(row);
        }
        self.state.comments.add(row);
    }

    pub fn finish(self) -> (String, Vec<String>, Vec<String>) {
        (self.name, self.state.value, self.state.comments.into_value())
    }
}

// ==================== Documentation ====================

/// Accumulates free documentation text across rows.
///
/// Fragments are collected per row and concatenated at commit time; the
/// joiner between rows depends on how the previous fragment ends (see
/// [`eol_escape_joiner`]).
#[derive(Debug)]
pub struct DocumentationPopulator {
    name: String,
    value: Vec<String>,
    comments: Comments,
}

impl DocumentationPopulator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Vec::new(),
            comments: Comments::new(),
        }
    }

    pub fn add(&mut self, row: &Row) {
        if !row.is_commented() {
            self.append(row);
        }
        self.comments.add(row);
    }

    fn append(&mut self, row: &Row) {
        let data = row.data();
        if data.first().map(String::as_str) == Some(CONTINUATION_MARKER) {
            // A marker surviving inside the payload is kept verbatim,
            // preceded by an explicit line break and with no re-spacing.
            let mut fragment = String::from("\\n");
            for cell in data {
                fragment.push_str(cell);
            }
            self.value.push(fragment);
        } else {
            let dedented = row.dedent();
            push_joined_fragment(&mut self.value, dedented.data().join(" "));
        }
    }

    pub fn finish(self) -> (String, String, Vec<String>) {
        (self.name, self.value.concat(), self.comments.into_value())
    }
}

// ==================== Metadata ====================

/// Accumulates one list-valued entry: the first dedented cell names the
/// entry, the rest joins like documentation.
#[derive(Debug)]
pub struct MetadataPopulator {
    list_name: String,
    entry_name: Option<String>,
    value: Vec<String>,
    comments: Comments,
}

impl MetadataPopulator {
    pub fn new(list_name: impl Into<String>) -> Self {
        Self {
            list_name: list_name.into(),
            entry_name: None,
            value: Vec::new(),
            comments: Comments::new(),
        }
    }

    pub fn add(&mut self, row: &Row) {
        if !row.is_commented() {
            self.append(row);
        }
        self.comments.add(row);
    }

    fn append(&mut self, row: &Row) {
        let dedented = row.dedent();
        let data = dedented.data();
        let rest = if self.entry_name.is_none() {
            self.entry_name = Some(data.first().cloned().unwrap_or_default());
            data.get(1..).unwrap_or(&[])
        } else {
            data
        };
        push_joined_fragment(&mut self.value, rest.join(" "));
    }

    pub fn finish(self) -> (String, String, String, Vec<String>) {
        (
            self.list_name,
            self.entry_name.unwrap_or_default(),
            self.value.concat(),
            self.comments.into_value(),
        )
    }
}

// ==================== Step ====================

/// Accumulates the cells of one step.
#[derive(Debug, Default)]
pub struct StepPopulator {
    value: Vec<String>,
    comments: Comments,
}

impl StepPopulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<S: DiagnosticSink + ?Sized>(&mut self, sink: &mut S, row: &Row) {
        if !row.is_commented() {
            if row.is_bare_continuation() {
                sink.report(Diagnostic::deprecated_continuation(""));
            }
            self.value.extend(row.data().iter().cloned());
        }
        self.comments.add(row);
    }

    /// `None` when the step gathered neither cells nor comments.
    pub fn finish(self) -> Option<(Vec<String>, Vec<String>)> {
        if self.value.is_empty() && self.comments.is_empty() {
            None
        } else {
            Some((self.value, self.comments.into_value()))
        }
    }
}

// ==================== Row joining ====================

fn push_joined_fragment(value: &mut Vec<String>, text: String) {
    if let Some(joiner) = row_joiner(value) {
        value.push(joiner.to_string());
    }
    value.push(text);
}

fn row_joiner(value: &[String]) -> Option<&'static str> {
    let empty = value.is_empty() || (value.len() == 1 && value[0].is_empty());
    if empty {
        return None;
    }
    value.last().and_then(|last| eol_escape_joiner(last))
}

/// Classify the escape run at the end of the previous fragment.
///
/// An even run of backslashes (or none) leaves the line break unescaped, so
/// the rows join with a literal `\n`. An odd run escapes the break and the
/// rows join with a space. An odd run followed by `n` means the fragment
/// already ends in an escaped newline and no joiner is added.
fn eol_escape_joiner(last: &str) -> Option<&'static str> {
    let (stem, ends_with_n) = match last.strip_suffix('n') {
        Some(stem) => (stem, true),
        None => (last, false),
    };
    let escapes = stem.len() - stem.trim_end_matches('\\').len();
    if escapes % 2 == 0 {
        Some("\\n")
    } else if !ends_with_n {
        Some(" ")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::populate::recording::{row, Event, RecordingTable};

    // ==================== Variable populator tests ====================

    #[test]
    fn test_variable_value_spans_rows() {
        let mut table = RecordingTable::new();
        let mut populator = VariablePopulator::new("@{LIST}");
        populator.add(&mut table, &row(&["@{LIST}", "a", "b"]));
        populator.add(&mut table, &row(&["...", "c"]));
        let (name, value, comments) = populator.finish();
        assert_eq!(name, "@{LIST}");
        assert_eq!(value, ["a", "b", "c"]);
        assert!(comments.is_empty());
    }

    #[test]
    fn test_variable_commits_even_when_empty() {
        let mut table = RecordingTable::new();
        let mut populator = VariablePopulator::new("${EMPTY_VAR}");
        populator.add(&mut table, &row(&["${EMPTY_VAR}"]));
        let (name, value, _) = populator.finish();
        assert_eq!(name, "${EMPTY_VAR}");
        assert!(value.is_empty());
    }

    #[test]
    fn test_variable_bare_continuation_is_deprecated() {
        let mut table = RecordingTable::new();
        let mut populator = VariablePopulator::new("${X}");
        populator.add(&mut table, &row(&["${X}", "1"]));
        populator.add(&mut table, &row(&["..."]));
        let (_, value, _) = populator.finish();
        assert_eq!(value, ["1"]);
        assert_eq!(
            table.events,
            [Event::Diagnostic(
                "In 'Variables' section: Ignoring lines with only continuation \
                 marker '...' is deprecated."
                    .to_string()
            )]
        );
    }

    #[test]
    fn test_variable_collects_comments() {
        let mut table = RecordingTable::new();
        let mut populator = VariablePopulator::new("${X}");
        populator.add(&mut table, &row(&["${X}", "1", "# first"]));
        populator.add(&mut table, &row(&["# standalone"]));
        let (_, value, comments) = populator.finish();
        assert_eq!(value, ["1"]);
        assert_eq!(comments, ["# first", "# standalone"]);
    }

    // ==================== Setting populator tests ====================

    #[test]
    fn test_setting_value_spans_rows() {
        let mut table = RecordingTable::new();
        let mut populator = SettingPopulator::new("Force Tags");
        populator.add(&mut table, &row(&["Force Tags", "smoke"]));
        populator.add(&mut table, &row(&["...", "regression"]));
        let (name, value, _) = populator.finish();
        assert_eq!(name, "Force Tags");
        assert_eq!(value, ["smoke", "regression"]);
    }

    #[test]
    fn test_setting_bare_continuation_names_the_setting() {
        let mut table = RecordingTable::new();
        let mut populator = SettingPopulator::new("Force Tags");
        populator.add(&mut table, &row(&["Force Tags", "smoke"]));
        populator.add(&mut table, &row(&["..."]));
        assert_eq!(
            table.events,
            [Event::Diagnostic(
                "In 'Force Tags' setting: Ignoring lines with only continuation \
                 marker '...' is deprecated."
                    .to_string()
            )]
        );
    }

    #[test]
    fn test_setting_marker_never_reaches_value() {
        let mut table = RecordingTable::new();
        let mut populator = SettingPopulator::new("Default Tags");
        populator.add(&mut table, &row(&["Default Tags", "a"]));
        populator.add(&mut table, &row(&["", "...", "b"]));
        let (_, value, _) = populator.finish();
        assert_eq!(value, ["a", "b"]);
    }

    // ==================== Documentation populator tests ====================

    fn doc_value(rows: &[&[&str]]) -> String {
        let mut populator = DocumentationPopulator::new("Documentation");
        for cells in rows {
            populator.add(&row(cells));
        }
        populator.finish().1
    }

    #[test]
    fn test_doc_single_row_joins_cells_with_spaces() {
        let value = doc_value(&[&["Documentation", "first", "second"]]);
        assert_eq!(value, "first second");
    }

    #[test]
    fn test_doc_rows_join_with_literal_newline() {
        let value = doc_value(&[
            &["Documentation", "first line"],
            &["...", "second line"],
        ]);
        assert_eq!(value, "first line\\nsecond line");
    }

    #[test]
    fn test_doc_odd_escape_joins_with_space() {
        let value = doc_value(&[&["Documentation", "first\\"], &["...", "second"]]);
        assert_eq!(value, "first\\ second");
    }

    #[test]
    fn test_doc_escaped_newline_needs_no_joiner() {
        let value = doc_value(&[&["Documentation", "first\\n"], &["...", "second"]]);
        assert_eq!(value, "first\\nsecond");
    }

    #[test]
    fn test_doc_even_escape_run_joins_with_newline() {
        let value = doc_value(&[&["Documentation", "first\\\\"], &["...", "second"]]);
        assert_eq!(value, "first\\\\\\nsecond");
    }

    #[test]
    fn test_doc_even_escape_run_before_n_joins_with_newline() {
        let value = doc_value(&[&["Documentation", "first\\\\n"], &["...", "second"]]);
        assert_eq!(value, "first\\\\n\\nsecond");
    }

    #[test]
    fn test_doc_plain_trailing_n_is_not_an_escape() {
        let value = doc_value(&[&["Documentation", "line one"], &["...", "two"]]);
        assert_eq!(value, "line one\\ntwo");
    }

    #[test]
    fn test_doc_empty_first_row_takes_no_joiner() {
        let value = doc_value(&[&["Documentation"], &["...", "text"]]);
        assert_eq!(value, "text");
    }

    #[test]
    fn test_doc_marker_in_payload_kept_verbatim() {
        let value = doc_value(&[
            &["Documentation", "first"],
            &["...", "...", "more"],
        ]);
        assert_eq!(value, "first\\n...more");
    }

    #[test]
    fn test_doc_comment_rows_contribute_comments_only() {
        let mut populator = DocumentationPopulator::new("Documentation");
        populator.add(&row(&["Documentation", "text"]));
        populator.add(&row(&["# note"]));
        let (name, value, comments) = populator.finish();
        assert_eq!(name, "Documentation");
        assert_eq!(value, "text");
        assert_eq!(comments, ["# note"]);
    }

    // ==================== Metadata populator tests ====================

    #[test]
    fn test_metadata_first_cell_names_the_entry() {
        let mut populator = MetadataPopulator::new("Metadata");
        populator.add(&row(&["Metadata", "Version", "1.0"]));
        let (list, name, value, _) = populator.finish();
        assert_eq!(list, "Metadata");
        assert_eq!(name, "Version");
        assert_eq!(value, "1.0");
    }

    #[test]
    fn test_metadata_name_captured_once() {
        let mut populator = MetadataPopulator::new("Metadata");
        populator.add(&row(&["Metadata", "Version", "1.0"]));
        populator.add(&row(&["...", "patched"]));
        let (_, name, value, _) = populator.finish();
        assert_eq!(name, "Version");
        assert_eq!(value, "1.0\\npatched");
    }

    #[test]
    fn test_metadata_empty_entry_name() {
        let mut populator = MetadataPopulator::new("Metadata");
        populator.add(&row(&["Metadata"]));
        let (_, name, value, _) = populator.finish();
        assert_eq!(name, "");
        assert_eq!(value, "");
    }

    // ==================== Step populator tests ====================

    #[test]
    fn test_step_extends_with_payload_every_row() {
        let mut table = RecordingTable::new();
        let mut populator = StepPopulator::new();
        populator.add(&mut table, &row(&["Log Many", "a"]));
        populator.add(&mut table, &row(&["", "...", "b", "c"]));
        let (cells, comments) = populator.finish().unwrap();
        assert_eq!(cells, ["Log Many", "a", "b", "c"]);
        assert!(comments.is_empty());
    }

    #[test]
    fn test_step_without_content_commits_nothing() {
        let populator = StepPopulator::new();
        assert!(populator.finish().is_none());
    }

    #[test]
    fn test_step_with_only_comments_still_commits() {
        let mut table = RecordingTable::new();
        let mut populator = StepPopulator::new();
        populator.add(&mut table, &row(&["# lone comment"]));
        let (cells, comments) = populator.finish().unwrap();
        assert!(cells.is_empty());
        assert_eq!(comments, ["# lone comment"]);
    }

    #[test]
    fn test_step_bare_continuation_is_deprecated_without_location() {
        let mut table = RecordingTable::new();
        let mut populator = StepPopulator::new();
        populator.add(&mut table, &row(&["Log", "x"]));
        populator.add(&mut table, &row(&["..."]));
        let (cells, _) = populator.finish().unwrap();
        assert_eq!(cells, ["Log", "x"]);
        assert_eq!(
            table.events,
            [Event::Diagnostic(
                "Ignoring lines with only continuation marker '...' is deprecated."
                    .to_string()
            )]
        );
    }

    // ==================== Joiner classification tests ====================

    #[test]
    fn test_joiner_no_escapes() {
        assert_eq!(eol_escape_joiner("plain"), Some("\\n"));
    }

    #[test]
    fn test_joiner_trailing_n_without_escape() {
        assert_eq!(eol_escape_joiner("plan"), Some("\\n"));
    }

    #[test]
    fn test_joiner_single_escape() {
        assert_eq!(eol_escape_joiner("text\\"), Some(" "));
    }

    #[test]
    fn test_joiner_escaped_newline() {
        assert_eq!(eol_escape_joiner("text\\n"), None);
    }

    #[test]
    fn test_joiner_double_escape() {
        assert_eq!(eol_escape_joiner("text\\\\"), Some("\\n"));
    }

    #[test]
    fn test_joiner_triple_escape_with_n() {
        assert_eq!(eol_escape_joiner("text\\\\\\n"), None);
    }

    #[test]
    fn test_joiner_empty_fragment() {
        assert_eq!(eol_escape_joiner(""), Some("\\n"));
    }
}
