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

use crate::types::code_path::CodePath;

/// One piece of assignment content.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentBlock {
    /// Prose. Markdown with inline HTML allowed.
    Text { text: String },
    /// A source file. `path` is `None` when the payload declares no file name.
    Code {
        path: Option<CodePath>,
        text: String,
    },
    /// An embedded image.
    Image { url: String, alt: Option<String> },
    /// A block whose type the parser does not recognize. It is kept verbatim
    /// so that it can still be shown, escaped, in the rendered output.
    Unknown { kind: Option<String>, raw: String },
}
