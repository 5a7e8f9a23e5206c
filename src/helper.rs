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

//! Test fixtures.

use std::path::Path;
use std::path::PathBuf;

use mimir_core::Assignment;
use mimir_core::AssignmentSummary;
use mimir_core::CodePath;
use mimir_core::ContentBlock;
use mimir_core::Course;
use mimir_core::CourseBuilder;
use mimir_core::Fallible;
use tempfile::TempDir;
use tempfile::tempdir;
use walkdir::WalkDir;

pub fn create_tmp_directory() -> Fallible<TempDir> {
    Ok(tempdir()?)
}

pub fn summary(id: &str, name: &str) -> AssignmentSummary {
    AssignmentSummary {
        id: id.to_string(),
        name: name.to_string(),
        open_date: None,
    }
}

pub fn assignment(id: &str, name: &str, content: Vec<ContentBlock>) -> Assignment {
    Assignment::new(summary(id, name), content)
}

pub fn code_block(path: Option<&str>, text: &str) -> ContentBlock {
    ContentBlock::Code {
        path: path.map(|p| CodePath::new(None, p).unwrap()),
        text: text.to_string(),
    }
}

/// A course whose assignments have the given names and no content.
pub fn course(id: &str, name: &str, assignment_names: &[&str]) -> Course {
    let mut builder = CourseBuilder::new(id, name);
    for (idx, assignment_name) in assignment_names.iter().enumerate() {
        let assignment_id = format!("a{}", idx + 1);
        builder
            .add_summary(summary(&assignment_id, assignment_name))
            .unwrap();
        builder.attach(&assignment_id, vec![]).unwrap();
    }
    builder.build().unwrap()
}

/// Two assignments with the same name; the first has one code file.
pub fn example_course() -> Course {
    let mut builder = CourseBuilder::new("c1", "Intro");
    builder.add_summary(summary("a1", "HW 1")).unwrap();
    builder.add_summary(summary("a2", "HW 1")).unwrap();
    builder
        .attach("a1", vec![code_block(Some("main.py"), "print(1)")])
        .unwrap();
    builder.attach("a2", vec![]).unwrap();
    builder.build().unwrap()
}

/// Every file under `root`, relative to it, sorted.
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

/// The `href` of every `<a>` element, in document order.
pub fn hrefs(html: &str) -> Vec<String> {
    const OPEN: &str = "<a href=\"";
    let mut links = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(OPEN) {
        rest = &rest[start + OPEN.len()..];
        let end = rest.find('"').unwrap();
        links.push(rest[..end].to_string());
        rest = &rest[end..];
    }
    links
}
