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

use std::path::Path;
use std::path::PathBuf;

use maud::Markup;
use maud::html;
use mimir_core::Assignment;
use mimir_core::Course;
use mimir_core::Fallible;
use mimir_core::names::unique_names;

use crate::render::fragment::render_fragment;
use crate::render::template::page_template;
use crate::write::output::OutputContext;
use crate::write::url_escape;

const INDEX_NAME: &str = "index";
const INDEX_FILE: &str = "index.html";

/// Write a small website: `index.html` linking to one page per assignment.
///
/// Returns the files written, index first.
pub fn write_multi_file(course: &Course, ctx: &OutputContext) -> Fallible<Vec<PathBuf>> {
    ctx.ensure_root()?;
    let file_names: Vec<String> = unique_names(
        course.assignments().iter().map(Assignment::name),
        &[INDEX_NAME],
    )
    .into_iter()
    .map(|name| format!("{name}.html"))
    .collect();

    let mut written = Vec::with_capacity(file_names.len() + 1);
    let index = index_page(course, &file_names);
    written.push(ctx.write_file(
        Path::new(INDEX_FILE),
        &index.into_string(),
    )?);

    for (assignment, file_name) in course.assignments().iter().zip(&file_names) {
        let page = assignment_page(course, assignment);
        written.push(ctx.write_file(Path::new(file_name), &page.into_string())?);
    }
    log::info!(
        "Wrote {} page(s) to {}",
        written.len(),
        ctx.root().display()
    );
    Ok(written)
}

fn index_page(course: &Course, file_names: &[String]) -> Markup {
    let body = html! {
        h1 { (course.name()) }
        ol class="assignments" {
            @for (assignment, file_name) in course.assignments().iter().zip(file_names) {
                li { a href=(url_escape(file_name)) { (assignment.name()) } }
            }
        }
    };
    page_template(course.name(), body)
}

fn assignment_page(course: &Course, assignment: &Assignment) -> Markup {
    let body = html! {
        nav class="back" {
            a href=(INDEX_FILE) { "← " (course.name()) }
        }
        (render_fragment(assignment))
    };
    page_template(assignment.name(), body)
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;

    use mimir_core::ErrorKind;
    use percent_encoding::percent_decode_str;

    use super::*;
    use crate::helper::course;
    use crate::helper::create_tmp_directory;
    use crate::helper::example_course;
    use crate::helper::hrefs;
    use crate::helper::list_files;

    #[test]
    fn test_one_page_per_assignment_plus_index() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let ctx = OutputContext::new(dir.path(), false);
        let course = example_course();
        let written = write_multi_file(&course, &ctx)?;
        assert_eq!(written.len(), course.assignments().len() + 1);
        assert_eq!(written[0], dir.path().join("index.html"));
        assert_eq!(
            list_files(dir.path()),
            vec![
                PathBuf::from("HW_1.html"),
                PathBuf::from("HW_1_2.html"),
                PathBuf::from("index.html"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_index_links_resolve() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let ctx = OutputContext::new(dir.path(), false);
        let course = course(
            "c1",
            "Intro",
            &["Übung 1", "HW 1", "HW 1", "index", "Lab: pointers?"],
        );
        write_multi_file(&course, &ctx)?;
        let index = read_to_string(dir.path().join("index.html"))?;
        let links = hrefs(&index);
        assert_eq!(links.len(), 5);
        for link in &links {
            let decoded = percent_decode_str(link).decode_utf8().unwrap();
            assert!(
                dir.path().join(decoded.as_ref()).is_file(),
                "dangling link {link}"
            );
        }
        // Links follow course order.
        assert_eq!(
            links,
            vec![
                "%C3%9Cbung_1.html",
                "HW_1.html",
                "HW_1_2.html",
                "index_2.html",
                "Lab__pointers.html"
            ]
        );
        Ok(())
    }

    #[test]
    fn test_assignment_page_contents() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let ctx = OutputContext::new(dir.path(), false);
        write_multi_file(&example_course(), &ctx)?;
        let page = read_to_string(dir.path().join("HW_1.html"))?;
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>HW 1</title>"));
        assert!(page.contains("<a href=\"index.html\">← Intro</a>"));
        assert!(page.contains("<figcaption>main.py</figcaption>"));
        assert!(page.contains("print(1)"));
        Ok(())
    }

    #[test]
    fn test_empty_course() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let ctx = OutputContext::new(dir.path().join("site"), false);
        let written = write_multi_file(&course("c1", "Empty", &[]), &ctx)?;
        assert_eq!(written, vec![dir.path().join("site/index.html")]);
        Ok(())
    }

    #[test]
    fn test_overwrite_forbidden() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        std::fs::write(dir.path().join("HW_1_2.html"), "keep me")?;
        let ctx = OutputContext::new(dir.path(), false);
        let err = write_multi_file(&example_course(), &ctx).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overwrite);
        assert_eq!(read_to_string(dir.path().join("HW_1_2.html"))?, "keep me");
        // Earlier files are not rolled back.
        assert!(dir.path().join("index.html").is_file());
        assert!(dir.path().join("HW_1.html").is_file());
        Ok(())
    }

    #[test]
    fn test_overwrite_allowed_matches_fresh_render() -> Fallible<()> {
        let fresh = create_tmp_directory()?;
        write_multi_file(&example_course(), &OutputContext::new(fresh.path(), false))?;

        let dir = create_tmp_directory()?;
        std::fs::write(dir.path().join("index.html"), "stale")?;
        write_multi_file(&example_course(), &OutputContext::new(dir.path(), true))?;
        assert_eq!(
            read_to_string(dir.path().join("index.html"))?,
            read_to_string(fresh.path().join("index.html"))?
        );
        Ok(())
    }

    #[test]
    fn test_repeated_runs_are_stable() -> Fallible<()> {
        let first = create_tmp_directory()?;
        let second = create_tmp_directory()?;
        write_multi_file(&example_course(), &OutputContext::new(first.path(), false))?;
        write_multi_file(&example_course(), &OutputContext::new(second.path(), false))?;
        assert_eq!(list_files(first.path()), list_files(second.path()));
        Ok(())
    }
}
