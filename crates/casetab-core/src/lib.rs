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

//! Row-to-model populators for tabular test specification data.
//!
//! Input arrives as parsed [`Row`]s, one physical table line each. The
//! populators fold those rows incrementally into a domain model supplied
//! through the table traits in [`sink`]: settings, variables, test cases
//! and keywords with their steps, for-loops and documentation. Row
//! continuation (`...`), comment interleaving and escape-aware multi-line
//! joining are handled here so the model never sees them.
//!
//! # Usage
//!
//! One populator per table: feed every row with [`Populator::add`] and
//! flush with [`Populator::populate`] at the end of the table.
//!
//! ```
//! use casetab_core::{Populator, Row, SettingTablePopulator};
//! # use casetab_core::{Diagnostic, DiagnosticSink, SettingKind, SettingTable};
//! # #[derive(Default)]
//! # struct Section { docs: Vec<String> }
//! # impl DiagnosticSink for Section {
//! #     fn report(&mut self, _diagnostic: Diagnostic) {}
//! # }
//! # impl SettingTable for Section {
//! #     fn setting_kind(&self, name: &str) -> Option<SettingKind> {
//! #         (name == "Documentation").then_some(SettingKind::Documentation)
//! #     }
//! #     fn set_setting(&mut self, _: &str, _: Vec<String>, _: Vec<String>) {}
//! #     fn set_documentation(&mut self, _: &str, value: String, _: Vec<String>) {
//! #         self.docs.push(value);
//! #     }
//! #     fn add_list_entry(&mut self, _: &str, _: String, _: String, _: Vec<String>) {}
//! # }
//!
//! let mut section = Section::default();
//! let mut populator = SettingTablePopulator::new();
//! populator.add(&mut section, Row::new(["Documentation", "First line."]));
//! populator.add(&mut section, Row::new(["...", "Second line."]));
//! populator.populate(&mut section);
//! assert_eq!(section.docs, ["First line.\\nSecond line."]);
//! ```

mod comments;
mod diagnostic;
pub mod populate;
mod row;
mod sink;

pub use comments::Comments;
pub use diagnostic::{Diagnostic, DiagnosticSink, Severity};
pub use populate::{
    CasePopulator, CaseTablePopulator, DocumentationPopulator, ForLoopPopulator,
    KeywordTablePopulator, MetadataPopulator, Populator, SettingPopulator,
    SettingTablePopulator, StepPopulator, TestTablePopulator, VariablePopulator,
    VariableTablePopulator,
};
pub use row::{Row, CONTINUATION_MARKER};
pub use sink::{CaseTable, SettingKind, SettingTable, VariableTable};
