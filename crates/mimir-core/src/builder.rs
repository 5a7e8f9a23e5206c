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

use std::collections::HashMap;
use std::collections::HashSet;

use crate::error::ErrorKind;
use crate::error::Fallible;
use crate::error::fail;
use crate::parser::CourseListing;
use crate::types::assignment::Assignment;
use crate::types::assignment::AssignmentId;
use crate::types::assignment::AssignmentSummary;
use crate::types::block::ContentBlock;
use crate::types::course::Course;

/// Accumulates a course in two phases: first the assignment summaries from
/// the course listing, then the content of each assignment. Details may be
/// attached in any order; [`CourseBuilder::build`] always emits assignments in
/// summary order.
pub struct CourseBuilder {
    id: String,
    name: String,
    summaries: Vec<AssignmentSummary>,
    ids: HashSet<AssignmentId>,
    details: HashMap<AssignmentId, Vec<ContentBlock>>,
}

impl CourseBuilder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            summaries: Vec::new(),
            ids: HashSet::new(),
            details: HashMap::new(),
        }
    }

    pub fn from_listing(listing: CourseListing) -> Fallible<Self> {
        let mut builder = Self::new(listing.id, listing.name);
        for summary in listing.assignments {
            builder.add_summary(summary)?;
        }
        Ok(builder)
    }

    pub fn add_summary(&mut self, summary: AssignmentSummary) -> Fallible<()> {
        if !self.ids.insert(summary.id.clone()) {
            return fail(
                ErrorKind::Parse,
                format!(
                    "Course '{}' lists assignment '{}' more than once.",
                    self.id, summary.id
                ),
            );
        }
        self.summaries.push(summary);
        Ok(())
    }

    pub fn summaries(&self) -> &[AssignmentSummary] {
        &self.summaries
    }

    /// Attach the content of a listed assignment.
    pub fn attach(&mut self, id: &str, content: Vec<ContentBlock>) -> Fallible<()> {
        if !self.ids.contains(id) {
            return fail(
                ErrorKind::Parse,
                format!("Assignment '{id}' is not listed in course '{}'.", self.id),
            );
        }
        if self.details.insert(id.to_string(), content).is_some() {
            return fail(
                ErrorKind::Parse,
                format!("Content for assignment '{id}' was attached twice."),
            );
        }
        Ok(())
    }

    /// Merge summaries and details into a [`Course`]. Fails if any listed
    /// assignment has no content attached.
    pub fn build(mut self) -> Fallible<Course> {
        let mut assignments = Vec::with_capacity(self.summaries.len());
        for summary in self.summaries {
            let Some(content) = self.details.remove(&summary.id) else {
                return fail(
                    ErrorKind::Parse,
                    format!("Assignment '{}' has no content attached.", summary.id),
                );
            };
            assignments.push(Assignment::new(summary, content));
        }
        Ok(Course::new(self.id, self.name, assignments))
    }
}
