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

use std::collections::HashSet;

use serde::Deserialize;

use crate::types::block::ContentBlock;
use crate::types::code_path::CodePath;
use crate::types::timestamp::Timestamp;

pub type AssignmentId = String;

/// Assignment metadata as listed in the course payload, before the detail
/// payload has been fetched.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AssignmentSummary {
    pub id: AssignmentId,
    pub name: String,
    #[serde(rename = "openDate", default)]
    pub open_date: Option<Timestamp>,
}

/// A fully loaded assignment.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    id: AssignmentId,
    name: String,
    open_date: Option<Timestamp>,
    content: Vec<ContentBlock>,
    /// Effective path of every code block, aligned with `content`.
    code_paths: Vec<Option<CodePath>>,
}

/// A code block together with the path it is written to.
#[derive(Debug, PartialEq)]
pub struct CodeFile<'a> {
    pub path: &'a CodePath,
    pub text: &'a str,
}

impl Assignment {
    /// Merge a summary with the content from the detail payload. Identity,
    /// name and open date always come from the summary.
    pub fn new(summary: AssignmentSummary, content: Vec<ContentBlock>) -> Self {
        let code_paths = resolve_code_paths(&content);
        Self {
            id: summary.id,
            name: summary.name,
            open_date: summary.open_date,
            content,
            code_paths,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn open_date(&self) -> Option<Timestamp> {
        self.open_date
    }

    pub fn content(&self) -> &[ContentBlock] {
        &self.content
    }

    /// Every block paired with its effective code path (`None` for anything
    /// that is not a code block).
    pub fn blocks(&self) -> impl Iterator<Item = (&ContentBlock, Option<&CodePath>)> {
        self.content
            .iter()
            .zip(self.code_paths.iter().map(Option::as_ref))
    }

    /// The code blocks of this assignment, in content order.
    pub fn code_files(&self) -> Vec<CodeFile<'_>> {
        self.blocks()
            .filter_map(|(block, path)| match (block, path) {
                (ContentBlock::Code { text, .. }, Some(path)) => Some(CodeFile { path, text }),
                _ => None,
            })
            .collect()
    }
}

/// Assign every code block a path. Undeclared paths are synthesized from the
/// block's position; paths that collide with an earlier block get a numeric
/// suffix.
fn resolve_code_paths(content: &[ContentBlock]) -> Vec<Option<CodePath>> {
    let mut claimed = ClaimedPaths::default();
    content
        .iter()
        .enumerate()
        .map(|(idx, block)| match block {
            ContentBlock::Code { path, .. } => {
                let base = path
                    .clone()
                    .unwrap_or_else(|| CodePath::synthesized(idx + 1));
                let mut n = 1;
                let mut candidate = base.clone();
                while let Some(segment) = claimed.conflict(&candidate) {
                    n += 1;
                    candidate = base.with_suffix_at(segment, n);
                }
                claimed.claim(&candidate);
                Some(candidate)
            }
            _ => None,
        })
        .collect()
}

/// Files and directories already used by earlier code blocks. Keys are
/// lowercased so case-insensitive filesystems see no collisions either.
#[derive(Default)]
struct ClaimedPaths {
    files: HashSet<String>,
    dirs: HashSet<String>,
}

impl ClaimedPaths {
    /// Index of the segment of `path` that clashes with an earlier claim: a
    /// directory of `path` that is already a file, or `path` itself being
    /// an existing file or directory.
    fn conflict(&self, path: &CodePath) -> Option<usize> {
        let ancestors = path.ancestors();
        if let Some(idx) = ancestors
            .iter()
            .position(|dir| self.files.contains(&dir.to_lowercase()))
        {
            return Some(idx);
        }
        let key = path.to_string().to_lowercase();
        if self.files.contains(&key) || self.dirs.contains(&key) {
            return Some(ancestors.len());
        }
        None
    }

    fn claim(&mut self, path: &CodePath) {
        self.files.insert(path.to_string().to_lowercase());
        self.dirs
            .extend(path.ancestors().iter().map(|dir| dir.to_lowercase()));
    }
}
