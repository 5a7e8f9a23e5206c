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

//! Parsing of the platform's JSON payloads.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::assignment::AssignmentSummary;
use crate::types::block::ContentBlock;
use crate::types::code_path::CodePath;
use crate::types::code_path::CodePathError;

/// The course-level payload: course identity and its assignment listing.
#[derive(Debug, Deserialize)]
pub struct CourseListing {
    pub id: String,
    pub name: String,
    #[serde(alias = "courseAssignments", default)]
    pub assignments: Vec<AssignmentSummary>,
}

/// The assignment-level payload. Elements of `content` are kept as raw JSON
/// until their `type` is known.
#[derive(Debug, Deserialize)]
struct AssignmentDetail {
    content: Vec<Value>,
}

#[derive(Deserialize)]
struct TextFields {
    #[serde(alias = "content")]
    text: String,
}

#[derive(Deserialize)]
struct CodeFields {
    directory: Option<String>,
    filename: Option<String>,
    path: Option<String>,
    #[serde(alias = "content", alias = "code")]
    text: String,
}

#[derive(Deserialize)]
struct ImageFields {
    #[serde(alias = "src")]
    url: String,
    alt: Option<String>,
}

pub fn parse_course_listing(json: &str) -> Fallible<CourseListing> {
    serde_json::from_str(json)
        .map_err(|e| ErrorReport::parse(format!("Malformed course payload: {e}")))
}

/// Parse an assignment payload into its content blocks, in payload order.
pub fn parse_assignment_content(json: &str) -> Fallible<Vec<ContentBlock>> {
    let detail: AssignmentDetail = serde_json::from_str(json)
        .map_err(|e| ErrorReport::parse(format!("Malformed assignment payload: {e}")))?;
    detail
        .content
        .into_iter()
        .enumerate()
        .map(|(idx, value)| parse_block(idx + 1, value))
        .collect()
}

fn parse_block(position: usize, value: Value) -> Fallible<ContentBlock> {
    let kind: Option<String> = value
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_string);
    match kind.as_deref().map(str::to_ascii_lowercase).as_deref() {
        Some("text") => {
            let fields: TextFields = block_fields(position, "text", value)?;
            Ok(ContentBlock::Text { text: fields.text })
        }
        Some("code") => {
            let fields: CodeFields = block_fields(position, "code", value)?;
            let path = declared_path(&fields)
                .map_err(|e| ErrorReport::parse(format!("Code block {position}: {e}.")))?;
            Ok(ContentBlock::Code {
                path,
                text: fields.text,
            })
        }
        Some("image") => {
            let fields: ImageFields = block_fields(position, "image", value)?;
            Ok(ContentBlock::Image {
                url: fields.url,
                alt: fields.alt,
            })
        }
        _ => Ok(ContentBlock::Unknown {
            kind,
            raw: value.to_string(),
        }),
    }
}

fn block_fields<T: DeserializeOwned>(position: usize, kind: &str, value: Value) -> Fallible<T> {
    serde_json::from_value(value)
        .map_err(|e| ErrorReport::parse(format!("Malformed {kind} block at position {position}: {e}")))
}

/// A code block declares its file either as `directory` + `filename` or as a
/// single `path`. A blank declaration counts as no declaration.
fn declared_path(fields: &CodeFields) -> Result<Option<CodePath>, CodePathError> {
    let result = match (&fields.filename, &fields.path) {
        (Some(filename), _) if !filename.trim().is_empty() => {
            CodePath::new(fields.directory.as_deref(), filename)
        }
        (_, Some(path)) if !path.trim().is_empty() => CodePath::new(None, path),
        _ => return Ok(None),
    };
    match result {
        Ok(path) => Ok(Some(path)),
        Err(CodePathError::Empty) => Ok(None),
        Err(e) => Err(e),
    }
}
