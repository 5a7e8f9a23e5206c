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

use std::fs::create_dir_all;
use std::path::Path;

use maud::Markup;
use maud::html;
use mimir_core::Assignment;
use mimir_core::Course;
use mimir_core::Fallible;
use mimir_core::names::unique_names;

use crate::render::fragment::render_fragment;
use crate::render::template::page_template;
use crate::write::output::write_file;
use crate::write::url_escape;

/// Write the whole course as one HTML document: a table of contents, then
/// every assignment in course order behind an anchor the contents link to.
pub fn write_single_file(course: &Course, target: &Path, overwrite: bool) -> Fallible<()> {
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    let page = course_page(course);
    write_file(target, &page.into_string(), overwrite)?;
    log::info!(
        "Wrote {} assignment(s) to {}",
        course.assignments().len(),
        target.display()
    );
    Ok(())
}

fn course_page(course: &Course) -> Markup {
    let anchors = unique_names(course.assignments().iter().map(Assignment::name), &[]);
    let body = html! {
        h1 { (course.name()) }
        nav class="toc" {
            ol {
                @for (assignment, anchor) in course.assignments().iter().zip(&anchors) {
                    li { a href=(format!("#{}", url_escape(anchor))) { (assignment.name()) } }
                }
            }
        }
        @for (assignment, anchor) in course.assignments().iter().zip(&anchors) {
            a id=(anchor) class="anchor" {}
            (render_fragment(assignment))
        }
    };
    page_template(course.name(), body)
}
