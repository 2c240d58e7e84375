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

//! Parsed table rows.
//!
//! A [`Row`] is one physical line of a table, already split into cells by
//! the tokenizer. Construction classifies the cells into value cells and
//! trailing comment cells and normalizes whitespace, so the populators can
//! query structural facts (continuing, indented, commented) without
//! re-scanning text.

/// Marker cell that continues the previous logical row.
pub const CONTINUATION_MARKER: &str = "...";

/// One parsed table row: value cells plus trailing comment cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    cells: Vec<String>,
    comments: Vec<String>,
}

impl Row {
    /// Build a row from raw cell strings.
    ///
    /// Runs of whitespace inside a cell collapse to a single space. The
    /// first cell starting with `#` begins the comment cells; everything
    /// after it is a comment cell too. Trailing empty value cells are
    /// purged, and a cell holding a single backslash counts as empty.
    pub fn new<I>(raw_cells: I) -> Row
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut cells: Vec<String> = Vec::new();
        let mut comments: Vec<String> = Vec::new();
        for raw in raw_cells {
            let cell = collapse_whitespace(raw.as_ref());
            if !comments.is_empty() || cell.starts_with('#') {
                comments.push(cell);
            } else {
                cells.push(cell);
            }
        }
        while cells.last().map(String::as_str) == Some("") {
            cells.pop();
        }
        for cell in &mut cells {
            if cell == "\\" {
                cell.clear();
            }
        }
        Row { cells, comments }
    }

    /// The value cells, comments excluded.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// The comment cells.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// First value cell, or `""` for an indented row.
    pub fn head(&self) -> &str {
        self.cells.first().map(String::as_str).unwrap_or("")
    }

    /// Value cells after the head.
    pub fn tail(&self) -> &[String] {
        self.cells.get(1..).unwrap_or(&[])
    }

    /// The payload cells of the row.
    ///
    /// For a continuing row this is the cells after the first continuation
    /// marker, which keeps the marker itself out of accumulated values.
    pub fn data(&self) -> &[String] {
        match self.continuation_index() {
            Some(index) => &self.cells[index + 1..],
            None => &self.cells,
        }
    }

    /// True when the first non-empty value cell is the continuation marker.
    pub fn is_continuing(&self) -> bool {
        self.continuation_index().is_some()
    }

    /// True when the row starts with an empty cell.
    pub fn is_indented(&self) -> bool {
        self.head().is_empty()
    }

    /// True when the row carries comments and no value cells.
    pub fn is_commented(&self) -> bool {
        self.cells.is_empty() && !self.comments.is_empty()
    }

    /// True when the row carries neither value cells nor comments.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && self.comments.is_empty()
    }

    /// True when the value cells are exactly one bare continuation marker.
    pub fn is_bare_continuation(&self) -> bool {
        self.cells.len() == 1 && self.cells[0] == CONTINUATION_MARKER
    }

    /// True when the head opens a for-loop declaration.
    ///
    /// `FOR` matches exactly; the legacy colon forms (`:FOR`, `: FOR`,
    /// `::for`, ...) match case-insensitively once colons and spaces are
    /// stripped.
    pub fn starts_for_loop(&self) -> bool {
        let head = self.head();
        if !head.starts_with(':') {
            return head == "FOR";
        }
        let stripped: String = head.chars().filter(|c| *c != ':' && *c != ' ').collect();
        stripped.to_uppercase() == "FOR"
    }

    /// True when the head is a bracketed setting name like `[Tags]`.
    pub fn starts_setting(&self) -> bool {
        let head = self.head();
        head.starts_with('[') && head.ends_with(']') && head.len() >= 2
    }

    /// The name inside a bracketed setting head, trimmed.
    pub fn setting_name(&self) -> Option<&str> {
        if !self.starts_setting() {
            return None;
        }
        let head = self.head();
        Some(head[1..head.len() - 1].trim())
    }

    /// A copy of the row with the first value cell dropped, comments kept.
    pub fn dedent(&self) -> Row {
        Row {
            cells: self.cells.get(1..).unwrap_or(&[]).to_vec(),
            comments: self.comments.clone(),
        }
    }

    fn continuation_index(&self) -> Option<usize> {
        for (index, cell) in self.cells.iter().enumerate() {
            if cell == CONTINUATION_MARKER {
                return Some(index);
            }
            if !cell.is_empty() {
                return None;
            }
        }
        None
    }
}

fn collapse_whitespace(cell: &str) -> String {
    cell.split_whitespace().collect::<Vec<_>>().join(" ")
}
