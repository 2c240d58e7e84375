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

//! Reference document model for the CaseTab populators.
//!
//! The sections here implement the table traits of `casetab-core` with
//! plain owned data, collecting entries in source order and diagnostics
//! per section. Hosts with their own document model can implement the
//! traits directly instead.

mod cases;
mod settings;
mod variables;

pub use cases::{
    BodyItem, CaseSetting, ForLoop, KeywordSection, Step, TestCase, TestCaseSection,
    UserKeyword,
};
pub use settings::{SettingEntry, SettingSection};
pub use variables::{Variable, VariableSection};
