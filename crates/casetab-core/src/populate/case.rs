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

//! Entity populator for one test case or user keyword.

use crate::populate::property::{DocumentationPopulator, SettingPopulator, StepPopulator};
use crate::populate::{ForLoopPopulator, Populator};
use crate::row::{Row, CONTINUATION_MARKER};
use crate::sink::{CaseTable, SettingKind};

/// The single active child of a case populator.
#[derive(Debug, Default)]
enum Child {
    /// No child: rows addressed to it are swallowed.
    #[default]
    None,
    Step(StepPopulator),
    Setting(SettingPopulator),
    Doc(DocumentationPopulator),
    For(ForLoopPopulator),
}

impl Child {
    fn is_active(&self) -> bool {
        !matches!(self, Child::None)
    }

    fn is_for_loop(&self) -> bool {
        matches!(self, Child::For(_))
    }
}

/// Folds the rows of one test case or user keyword into the table.
///
/// The first row names the entity; every row after that is dedented and
/// routed to a child populator: a bracketed head selects a setting, a
/// `FOR` head opens a loop, anything else is a step. Documentation may
/// continue over `...` rows, tracked with a flag so a bare marker head
/// keeps feeding the documentation instead of opening a step.
#[derive(Debug, Default)]
pub struct CasePopulator {
    started: bool,
    in_documentation: bool,
    child: Child,
}

impl CasePopulator {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle_data_row(&mut self, table: &mut (dyn CaseTable + 'static), row: Row) {
        if row.is_commented() && !self.child.is_active() {
            // Standalone comment between entries: a one-shot step.
            let mut step = StepPopulator::new();
            step.add(table, &row);
            if let Some((cells, comments)) = step.finish() {
                table.add_step(cells, comments);
            }
            return;
        }
        let mut reprocess = true;
        while reprocess {
            reprocess = false;
            if self.continues(&row) {
                self.forward(table, &row);
                return;
            }
            if self.child.is_for_loop() {
                // The row closed the loop; reconsider it from scratch.
                self.finalize_child(table);
                reprocess = true;
                continue;
            }
            self.finalize_child(table);
            self.child = self.select_child(table, &row);
            self.forward(table, &row);
        }
    }

    fn continues(&self, row: &Row) -> bool {
        (row.is_continuing() && self.child.is_active())
            || (self.child.is_for_loop() && row.is_indented())
    }

    fn forward(&mut self, table: &mut (dyn CaseTable + 'static), row: &Row) {
        match &mut self.child {
            Child::None => {}
            Child::Step(populator) => populator.add(table, row),
            Child::Setting(populator) => populator.add(table, row),
            Child::Doc(populator) => populator.add(row),
            Child::For(populator) => populator.add(table, row.clone()),
        }
    }

    fn select_child(&mut self, table: &dyn CaseTable, row: &Row) -> Child {
        let is_setting = row.starts_setting();
        if is_setting || self.in_documentation {
            let continued_doc = self.in_documentation && row.head() == CONTINUATION_MARKER;
            if !continued_doc {
                self.in_documentation = false;
            }
            if !is_setting && !self.in_documentation {
                return Child::Step(StepPopulator::new());
            }
            let resolved = if continued_doc {
                table
                    .setting_kind("Documentation")
                    .map(|kind| ("Documentation".to_string(), kind))
            } else {
                row.setting_name().and_then(|name| {
                    table.setting_kind(name).map(|kind| (name.to_string(), kind))
                })
            };
            let Some((name, kind)) = resolved else {
                self.in_documentation = false;
                return Child::None;
            };
            if kind == SettingKind::Documentation {
                self.in_documentation = true;
                return Child::Doc(DocumentationPopulator::new(name));
            }
            self.in_documentation = false;
            return Child::Setting(SettingPopulator::new(name));
        }
        self.in_documentation = false;
        if row.starts_for_loop() {
            Child::For(ForLoopPopulator::new())
        } else {
            Child::Step(StepPopulator::new())
        }
    }

    fn finalize_child(&mut self, table: &mut (dyn CaseTable + 'static)) {
        match std::mem::take(&mut self.child) {
            Child::None => {}
            Child::Step(populator) => {
                if let Some((cells, comments)) = populator.finish() {
                    table.add_step(cells, comments);
                }
            }
            Child::Setting(populator) => {
                let (name, value, comments) = populator.finish();
                table.set_setting(&name, value, comments);
            }
            Child::Doc(populator) => {
                let (name, value, comments) = populator.finish();
                table.set_documentation(&name, value, comments);
            }
            Child::For(mut populator) => populator.populate(table),
        }
    }
}

impl Populator for CasePopulator {
    type Table = dyn CaseTable;

    fn add(&mut self, table: &mut (dyn CaseTable + 'static), row: Row) {
        if !self.started {
            table.start_case(row.head());
            self.started = true;
        }
        let dedented = row.dedent();
        if dedented.is_empty() {
            return;
        }
        self.handle_data_row(table, dedented);
    }

    fn populate(&mut self, table: &mut (dyn CaseTable + 'static)) {
        self.finalize_child(table);
    }
}
