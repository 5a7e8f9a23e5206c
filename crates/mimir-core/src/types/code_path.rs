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

use std::fmt::Display;
use std::fmt::Formatter;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// A relative path for a code file inside an assignment's output directory.
///
/// Declared paths come from untrusted payloads, so they are normalized on
/// construction: root and prefix components are dropped (the platform uses
/// `/src/main.py` to mean "`src/main.py` in the project"), `.` components are
/// skipped and `..` components are rejected outright.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodePath {
    segments: Vec<String>,
}

/// Errors that can occur when building a [`CodePath`].
#[derive(Debug, PartialEq)]
pub enum CodePathError {
    /// Nothing is left once the path is normalized.
    Empty,
    /// Path contains parent (`..`) components.
    ParentComponent,
    /// Path is not valid Unicode.
    NotUnicode,
}

impl Display for CodePathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CodePathError::Empty => write!(f, "path is empty"),
            CodePathError::ParentComponent => write!(f, "path contains '..'"),
            CodePathError::NotUnicode => write!(f, "path is not valid Unicode"),
        }
    }
}

impl CodePath {
    /// Build a path from an optional directory and a file name.
    pub fn new(directory: Option<&str>, filename: &str) -> Result<Self, CodePathError> {
        let mut segments = Vec::new();
        if let Some(directory) = directory {
            push_segments(&mut segments, directory)?;
        }
        push_segments(&mut segments, filename)?;
        if segments.is_empty() {
            return Err(CodePathError::Empty);
        }
        Ok(Self { segments })
    }

    /// The path used for a code block that declares none. `position` is the
    /// 1-based position of the block in its assignment.
    pub fn synthesized(position: usize) -> Self {
        Self {
            segments: vec![format!("code_{position}.txt")],
        }
    }

    /// A sibling of this path with `_{n}` inserted before the extension:
    /// `src/main.py` becomes `src/main_2.py`.
    pub fn with_suffix(&self, n: usize) -> Self {
        self.with_suffix_at(self.segments.len().saturating_sub(1), n)
    }

    /// Like [`CodePath::with_suffix`], but for the segment at `idx`. A
    /// directory segment gets `_{n}` appended: `src/main.py` becomes
    /// `src_2/main.py` for `idx == 0`.
    pub fn with_suffix_at(&self, idx: usize, n: usize) -> Self {
        let last = self.segments.len().saturating_sub(1);
        let mut segments = self.segments.clone();
        if let Some(segment) = segments.get_mut(idx) {
            *segment = if idx == last {
                suffixed_file_name(segment, n)
            } else {
                format!("{segment}_{n}")
            };
        }
        Self { segments }
    }

    /// The directories this path lives in, outermost first: `a/b/c.rs` has
    /// `a` and `a/b`.
    pub fn ancestors(&self) -> Vec<String> {
        (1..self.segments.len())
            .map(|len| self.segments[..len].join("/"))
            .collect()
    }

    pub fn file_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// The path relative to the assignment's output directory.
    pub fn to_path_buf(&self) -> PathBuf {
        self.segments.iter().collect()
    }
}

fn push_segments(segments: &mut Vec<String>, raw: &str) -> Result<(), CodePathError> {
    for component in Path::new(raw).components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            Component::ParentDir => return Err(CodePathError::ParentComponent),
            Component::Normal(s) => {
                let s = s.to_str().ok_or(CodePathError::NotUnicode)?;
                segments.push(s.to_string());
            }
        }
    }
    Ok(())
}

fn suffixed_file_name(name: &str, n: usize) -> String {
    match name.rfind('.') {
        Some(dot) if dot > 0 => format!("{}_{n}{}", &name[..dot], &name[dot..]),
        _ => format!("{name}_{n}"),
    }
}

impl Display for CodePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}
