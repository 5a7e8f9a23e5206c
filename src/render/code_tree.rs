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

use std::path::PathBuf;

use mimir_core::Assignment;
use mimir_core::Fallible;

use crate::write::output::OutputContext;

/// Write the code blocks of an assignment as files under the context root,
/// each at its declared or synthesized path. Other blocks are skipped.
///
/// Files already written stay in place if a later one fails.
pub fn write_code_tree(assignment: &Assignment, ctx: &OutputContext) -> Fallible<Vec<PathBuf>> {
    let mut written = Vec::new();
    for file in assignment.code_files() {
        written.push(ctx.write_file(&file.path.to_path_buf(), file.text)?);
    }
    log::debug!(
        "Wrote {} code file(s) for '{}'",
        written.len(),
        assignment.name()
    );
    Ok(written)
}
