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

//! Top-level populators, one per table kind.
//!
//! These are the entry points of the crate: the host feeds every row of a
//! table into the matching populator and calls `populate()` once at the
//! end of the table.

use crate::populate::property::{
    DocumentationPopulator, MetadataPopulator, SettingPopulator, VariablePopulator,
};
use crate::populate::{CasePopulator, Populator};
use crate::row::{Row, CONTINUATION_MARKER};
use crate::sink::{CaseTable, SettingKind, SettingTable, VariableTable};

// ==================== Settings table ====================

#[derive(Debug, Default)]
enum SettingChild {
    #[default]
    None,
    Plain(SettingPopulator),
    Doc(DocumentationPopulator),
    Meta(MetadataPopulator),
}

/// Populates a settings table row by row.
///
/// Each non-continuing row selects a child from its head: documentation
/// and metadata get their joining populators, recognized plain settings a
/// cell-list populator, and unknown or empty heads an inert child that
/// swallows the rows. A bare `...` head re-attaches to the documentation.
#[derive(Debug, Default)]
pub struct SettingTablePopulator {
    child: SettingChild,
}

impl SettingTablePopulator {
    pub fn new() -> Self {
        Self::default()
    }

    fn select_child(&self, table: &dyn SettingTable, row: &Row) -> SettingChild {
        let head = row.head();
        let name = if head == CONTINUATION_MARKER {
            "Documentation"
        } else if head.is_empty() {
            return SettingChild::None;
        } else {
            head
        };
        match table.setting_kind(name) {
            None => SettingChild::None,
            Some(SettingKind::Documentation) => {
                SettingChild::Doc(DocumentationPopulator::new(name))
            }
            Some(SettingKind::ListValued) => SettingChild::Meta(MetadataPopulator::new(name)),
            Some(SettingKind::Plain) => SettingChild::Plain(SettingPopulator::new(name)),
        }
    }

    fn finalize_child(&mut self, table: &mut (dyn SettingTable + 'static)) {
        match std::mem::take(&mut self.child) {
            SettingChild::None => {}
            SettingChild::Plain(populator) => {
                let (name, value, comments) = populator.finish();
                table.set_setting(&name, value, comments);
            }
            SettingChild::Doc(populator) => {
                let (name, value, comments) = populator.finish();
                table.set_documentation(&name, value, comments);
            }
            SettingChild::Meta(populator) => {
                let (list_name, entry_name, value, comments) = populator.finish();
                table.add_list_entry(&list_name, entry_name, value, comments);
            }
        }
    }
}

impl Populator for SettingTablePopulator {
    type Table = dyn SettingTable;

    fn add(&mut self, table: &mut (dyn SettingTable + 'static), row: Row) {
        let continues = row.is_continuing() && !matches!(self.child, SettingChild::None);
        if !continues {
            self.finalize_child(table);
            self.child = self.select_child(table, &row);
        }
        match &mut self.child {
            SettingChild::None => {}
            SettingChild::Plain(populator) => populator.add(table, &row),
            SettingChild::Doc(populator) => populator.add(&row),
            SettingChild::Meta(populator) => populator.add(&row),
        }
    }

    fn populate(&mut self, table: &mut (dyn SettingTable + 'static)) {
        self.finalize_child(table);
    }
}

// ==================== Variables table ====================

/// Populates a variables table. Every non-continuing row starts a new
/// variable named by the row's head.
#[derive(Debug, Default)]
pub struct VariableTablePopulator {
    child: Option<VariablePopulator>,
}

impl VariableTablePopulator {
    pub fn new() -> Self {
        Self::default()
    }

    fn finalize_child(&mut self, table: &mut (dyn VariableTable + 'static)) {
        if let Some(populator) = self.child.take() {
            let (name, value, comments) = populator.finish();
            table.add_variable(name, value, comments);
        }
    }
}

impl Populator for VariableTablePopulator {
    type Table = dyn VariableTable;

    fn add(&mut self, table: &mut (dyn VariableTable + 'static), row: Row) {
        let continues = row.is_continuing() && self.child.is_some();
        if !continues {
            self.finalize_child(table);
            self.child = Some(VariablePopulator::new(row.head()));
        }
        if let Some(populator) = &mut self.child {
            populator.add(table, &row);
        }
    }

    fn populate(&mut self, table: &mut (dyn VariableTable + 'static)) {
        self.finalize_child(table);
    }
}

// ==================== Case tables ====================

/// Populates a table of test cases or user keywords.
///
/// A new entity starts on every non-indented, non-commented row; indented
/// rows feed the current entity and comment rows are forwarded to it (or
/// dropped between entities). Which entity kind is created is up to the
/// [`CaseTable`] implementation.
#[derive(Debug, Default)]
pub struct CaseTablePopulator {
    child: Option<CasePopulator>,
}

/// Populator for the test case table.
pub type TestTablePopulator = CaseTablePopulator;
/// Populator for the user keyword table.
pub type KeywordTablePopulator = CaseTablePopulator;

impl CaseTablePopulator {
    pub fn new() -> Self {
        Self::default()
    }

    fn finalize_child(&mut self, table: &mut (dyn CaseTable + 'static)) {
        if let Some(mut populator) = self.child.take() {
            populator.populate(table);
        }
    }
}

impl Populator for CaseTablePopulator {
    type Table = dyn CaseTable;

    fn add(&mut self, table: &mut (dyn CaseTable + 'static), row: Row) {
        let continues = (row.is_indented() && self.child.is_some()) || row.is_commented();
        if !continues {
            self.finalize_child(table);
            self.child = Some(CasePopulator::new());
        }
        if let Some(populator) = &mut self.child {
            populator.add(table, row);
        }
    }

    fn populate(&mut self, table: &mut (dyn CaseTable + 'static)) {
        self.finalize_child(table);
    }
}
