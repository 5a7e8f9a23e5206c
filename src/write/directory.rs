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
use mimir_core::Course;
use mimir_core::Fallible;
use mimir_core::names::unique_names;

use crate::render::code_tree::write_code_tree;
use crate::write::output::OutputContext;

/// Write the code of every assignment into its own subdirectory. Assignments
/// without code still get an (empty) directory.
pub fn write_code_directory(course: &Course, ctx: &OutputContext) -> Fallible<Vec<PathBuf>> {
    ctx.ensure_root()?;
    let dir_names = unique_names(course.assignments().iter().map(Assignment::name), &[]);
    let mut written = Vec::new();
    for (assignment, dir_name) in course.assignments().iter().zip(&dir_names) {
        let sub = ctx.child(dir_name);
        sub.ensure_root()?;
        written.extend(write_code_tree(assignment, &sub)?);
    }
    log::info!(
        "Wrote {} code file(s) for {} assignment(s) to {}",
        written.len(),
        course.assignments().len(),
        ctx.root().display()
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;

    use mimir_core::ContentBlock;
    use mimir_core::CourseBuilder;
    use mimir_core::ErrorKind;

    use super::*;
    use crate::helper::code_block;
    use crate::helper::create_tmp_directory;
    use crate::helper::example_course;
    use crate::helper::list_files;
    use crate::helper::summary;

    #[test]
    fn test_example_course() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let ctx = OutputContext::new(dir.path(), false);
        let written = write_code_directory(&example_course(), &ctx)?;
        assert_eq!(written, vec![dir.path().join("HW_1").join("main.py")]);
        assert_eq!(read_to_string(dir.path().join("HW_1/main.py"))?, "print(1)");
        assert!(dir.path().join("HW_1_2").is_dir());
        assert_eq!(std::fs::read_dir(dir.path().join("HW_1_2"))?.count(), 0);
        assert_eq!(list_files(dir.path()), vec![PathBuf::from("HW_1/main.py")]);
        Ok(())
    }

    #[test]
    fn test_files_match_code_blocks() -> Fallible<()> {
        let mut builder = CourseBuilder::new("c1", "Systems");
        builder.add_summary(summary("a1", "Lab 1"))?;
        builder.add_summary(summary("a2", "Lab 2"))?;
        builder.attach(
            "a1",
            vec![
                ContentBlock::Text {
                    text: "Write a shell.".to_string(),
                },
                code_block(Some("shell.c"), "int main() {}"),
                code_block(None, "notes"),
                ContentBlock::Unknown {
                    kind: Some("rubric".to_string()),
                    raw: "{}".to_string(),
                },
            ],
        )?;
        builder.attach(
            "a2",
            vec![
                ContentBlock::Image {
                    url: "diagram.png".to_string(),
                    alt: None,
                },
                code_block(Some("shell.c"), "v1"),
                code_block(Some("shell.c"), "v2"),
            ],
        )?;
        let course = builder.build()?;

        let dir = create_tmp_directory()?;
        write_code_directory(&course, &OutputContext::new(dir.path(), false))?;
        assert_eq!(
            list_files(dir.path()),
            vec![
                PathBuf::from("Lab_1/code_3.txt"),
                PathBuf::from("Lab_1/shell.c"),
                PathBuf::from("Lab_2/shell.c"),
                PathBuf::from("Lab_2/shell_2.c"),
            ]
        );
        assert_eq!(read_to_string(dir.path().join("Lab_2/shell_2.c"))?, "v2");
        Ok(())
    }

    #[test]
    fn test_existing_subdirectory_is_fine() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        std::fs::create_dir_all(dir.path().join("HW_1_2"))?;
        let ctx = OutputContext::new(dir.path(), false);
        write_code_directory(&example_course(), &ctx)?;
        Ok(())
    }

    #[test]
    fn test_overwrite_law() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        std::fs::create_dir_all(dir.path().join("HW_1"))?;
        std::fs::write(dir.path().join("HW_1/main.py"), "old")?;

        let err = write_code_directory(&example_course(), &OutputContext::new(dir.path(), false))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overwrite);
        assert_eq!(read_to_string(dir.path().join("HW_1/main.py"))?, "old");

        write_code_directory(&example_course(), &OutputContext::new(dir.path(), true))?;
        assert_eq!(read_to_string(dir.path().join("HW_1/main.py"))?, "print(1)");
        Ok(())
    }
}
