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

//! mimir-core: Core library for mimir-downloader.
//!
//! This library holds everything that does not touch the network or render
//! HTML:
//! - The course model (courses, assignments, content blocks)
//! - Parsing of course and assignment JSON payloads
//! - Two-phase course construction
//! - File name sanitization and disambiguation

pub mod builder;
pub mod error;
pub mod names;
pub mod parser;
pub mod types;

// Re-exports for convenience
pub use builder::CourseBuilder;
pub use error::{ErrorKind, ErrorReport, Fallible, fail};
pub use parser::{CourseListing, parse_assignment_content, parse_course_listing};
pub use types::assignment::{Assignment, AssignmentSummary, CodeFile};
pub use types::block::ContentBlock;
pub use types::code_path::CodePath;
pub use types::course::Course;
pub use types::timestamp::Timestamp;
