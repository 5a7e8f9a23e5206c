// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::types::assignment::Assignment;

/// A fully loaded course. Only [`crate::builder::CourseBuilder`] creates
/// these, so a `Course` always has every assignment merged.
#[derive(Clone, Debug, PartialEq)]
pub struct Course {
    id: String,
    name: String,
    assignments: Vec<Assignment>,
}

impl Course {
    pub(crate) fn new(id: String, name: String, assignments: Vec<Assignment>) -> Self {
        Self {
            id,
            name,
            assignments,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assignments in platform display order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }
}
