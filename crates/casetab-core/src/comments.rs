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

//! Comment aggregation across the rows of one logical entry.

use crate::row::Row;

/// Collects the comment cells of every row fed to a populator, so they can
/// be attached to the value when it is committed.
#[derive(Debug, Clone, Default)]
pub struct Comments {
    comments: Vec<String>,
}

impl Comments {
    pub fn new() -> Comments {
        Comments::default()
    }

    /// Append the comment cells of `row`, trimmed.
    pub fn add(&mut self, row: &Row) {
        self.comments
            .extend(row.comments().iter().map(|c| c.trim().to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn value(&self) -> &[String] {
        &self.comments
    }

    /// Consume the aggregator, yielding the collected comments.
    pub fn into_value(self) -> Vec<String> {
        self.comments
    }
}
