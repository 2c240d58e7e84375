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

//! Test case and user keyword sections.

use casetab_core::{CaseTable, Diagnostic, DiagnosticSink, SettingKind};

/// One step of a case or loop body.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub cells: Vec<String>,
    pub comments: Vec<String>,
}

/// A for-loop with its declaration and body steps.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForLoop {
    pub declaration: Vec<String>,
    pub comments: Vec<String>,
    pub steps: Vec<Step>,
}

/// One item of a case body, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BodyItem {
    Step(Step),
    ForLoop(ForLoop),
}

/// A committed case-level setting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaseSetting {
    Documentation {
        value: String,
        comments: Vec<String>,
    },
    Setting {
        name: String,
        value: Vec<String>,
        comments: Vec<String>,
    },
}

/// A test case.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestCase {
    pub name: String,
    pub settings: Vec<CaseSetting>,
    pub body: Vec<BodyItem>,
}

/// A user keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserKeyword {
    pub name: String,
    pub settings: Vec<CaseSetting>,
    pub body: Vec<BodyItem>,
}

fn canonical(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn push_setting(settings: &mut Vec<CaseSetting>, name: &str, value: Vec<String>, comments: Vec<String>) {
    settings.push(CaseSetting::Setting {
        name: name.to_string(),
        value,
        comments,
    });
}

fn push_loop_step(body: &mut [BodyItem], cells: Vec<String>, comments: Vec<String>) {
    let last_loop = body
        .iter_mut()
        .rev()
        .find_map(|item| match item {
            BodyItem::ForLoop(for_loop) => Some(for_loop),
            BodyItem::Step(_) => None,
        });
    if let Some(for_loop) = last_loop {
        for_loop.steps.push(Step { cells, comments });
    }
}

/// Collects test cases as the populator commits them.
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestCaseSection {
    pub cases: Vec<TestCase>,
    pub diagnostics: Vec<Diagnostic>,
}

impl TestCaseSection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for TestCaseSection {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

impl CaseTable for TestCaseSection {
    fn start_case(&mut self, name: &str) {
        self.cases.push(TestCase {
            name: name.to_string(),
            settings: Vec::new(),
            body: Vec::new(),
        });
    }

    fn setting_kind(&self, name: &str) -> Option<SettingKind> {
        match canonical(name).as_str() {
            "documentation" => Some(SettingKind::Documentation),
            "setup" | "teardown" | "tags" | "timeout" | "template" => Some(SettingKind::Plain),
            _ => None,
        }
    }

    fn set_setting(&mut self, name: &str, value: Vec<String>, comments: Vec<String>) {
        if let Some(case) = self.cases.last_mut() {
            push_setting(&mut case.settings, name, value, comments);
        }
    }

    fn set_documentation(&mut self, _name: &str, value: String, comments: Vec<String>) {
        if let Some(case) = self.cases.last_mut() {
            case.settings
                .push(CaseSetting::Documentation { value, comments });
        }
    }

    fn add_step(&mut self, cells: Vec<String>, comments: Vec<String>) {
        if let Some(case) = self.cases.last_mut() {
            case.body.push(BodyItem::Step(Step { cells, comments }));
        }
    }

    fn start_for_loop(&mut self, declaration: Vec<String>, comments: Vec<String>) {
        if let Some(case) = self.cases.last_mut() {
            case.body.push(BodyItem::ForLoop(ForLoop {
                declaration,
                comments,
                steps: Vec::new(),
            }));
        }
    }

    fn add_loop_step(&mut self, cells: Vec<String>, comments: Vec<String>) {
        if let Some(case) = self.cases.last_mut() {
            push_loop_step(&mut case.body, cells, comments);
        }
    }
}

/// Collects user keywords as the populator commits them.
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeywordSection {
    pub keywords: Vec<UserKeyword>,
    pub diagnostics: Vec<Diagnostic>,
}

impl KeywordSection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for KeywordSection {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

impl CaseTable for KeywordSection {
    fn start_case(&mut self, name: &str) {
        self.keywords.push(UserKeyword {
            name: name.to_string(),
            settings: Vec::new(),
            body: Vec::new(),
        });
    }

    fn setting_kind(&self, name: &str) -> Option<SettingKind> {
        match canonical(name).as_str() {
            "documentation" => Some(SettingKind::Documentation),
            "arguments" | "teardown" | "timeout" | "return" => Some(SettingKind::Plain),
            _ => None,
        }
    }

    fn set_setting(&mut self, name: &str, value: Vec<String>, comments: Vec<String>) {
        if let Some(keyword) = self.keywords.last_mut() {
            push_setting(&mut keyword.settings, name, value, comments);
        }
    }

    fn set_documentation(&mut self, _name: &str, value: String, comments: Vec<String>) {
        if let Some(keyword) = self.keywords.last_mut() {
            keyword
                .settings
                .push(CaseSetting::Documentation { value, comments });
        }
    }

    fn add_step(&mut self, cells: Vec<String>, comments: Vec<String>) {
        if let Some(keyword) = self.keywords.last_mut() {
            keyword.body.push(BodyItem::Step(Step { cells, comments }));
        }
    }

    fn start_for_loop(&mut self, declaration: Vec<String>, comments: Vec<String>) {
        if let Some(keyword) = self.keywords.last_mut() {
            keyword.body.push(BodyItem::ForLoop(ForLoop {
                declaration,
                comments,
                steps: Vec::new(),
            }));
        }
    }

    fn add_loop_step(&mut self, cells: Vec<String>, comments: Vec<String>) {
        if let Some(keyword) = self.keywords.last_mut() {
            push_loop_step(&mut keyword.body, cells, comments);
        }
    }
}
