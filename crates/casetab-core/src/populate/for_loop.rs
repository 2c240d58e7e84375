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

//! For-loop populator: declaration first, then body steps.

use crate::populate::property::StepPopulator;
use crate::populate::Populator;
use crate::row::Row;
use crate::sink::CaseTable;

/// Folds a for-loop into the table in two phases.
///
/// Declaration rows (the `FOR` row and its continuations) accumulate until
/// the first body row arrives, at which point the loop is started in the
/// table exactly once. Body rows then feed step populators; each
/// non-continuing row finalizes the previous body step.
#[derive(Debug, Default)]
pub struct ForLoopPopulator {
    started: bool,
    declaration: Vec<String>,
    declaration_comments: Vec<String>,
    body: Option<StepPopulator>,
}

impl ForLoopPopulator {
    pub fn new() -> Self {
        Self::default()
    }

    fn start(&mut self, table: &mut (dyn CaseTable + 'static)) {
        self.started = true;
        table.start_for_loop(
            std::mem::take(&mut self.declaration),
            std::mem::take(&mut self.declaration_comments),
        );
    }

    fn finalize_body(&mut self, table: &mut (dyn CaseTable + 'static)) {
        if let Some(body) = self.body.take() {
            if let Some((cells, comments)) = body.finish() {
                table.add_loop_step(cells, comments);
            }
        }
    }
}

impl Populator for ForLoopPopulator {
    type Table = dyn CaseTable;

    fn add(&mut self, table: &mut (dyn CaseTable + 'static), row: Row) {
        if !self.started {
            if row.starts_for_loop() || row.is_continuing() {
                let dedented = row.dedent();
                self.declaration.extend(dedented.data().iter().cloned());
                self.declaration_comments
                    .extend(row.comments().iter().cloned());
                return;
            }
            self.start(table);
        }
        if !row.is_continuing() {
            self.finalize_body(table);
            self.body = Some(StepPopulator::new());
        }
        if let Some(body) = &mut self.body {
            body.add(table, &row);
        }
    }

    fn populate(&mut self, table: &mut (dyn CaseTable + 'static)) {
        if !self.started {
            self.start(table);
        }
        self.finalize_body(table);
    }
}
