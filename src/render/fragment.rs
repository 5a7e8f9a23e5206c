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

use maud::Markup;
use maud::PreEscaped;
use maud::html;
use mimir_core::Assignment;
use mimir_core::CodePath;
use mimir_core::ContentBlock;

use crate::render::markdown::markdown_to_html;

/// Render an assignment as an embeddable fragment: a heading followed by each
/// block in order. No document shell; callers compose fragments into pages.
pub fn render_fragment(assignment: &Assignment) -> Markup {
    html! {
        section class="assignment" {
            h1 { (assignment.name()) }
            @if let Some(date) = assignment.open_date() {
                p class="open-date" {
                    "Opens "
                    time datetime=(date.to_string()) { (date.human()) }
                }
            }
            @for (block, path) in assignment.blocks() {
                (render_block(block, path))
            }
        }
    }
}

fn render_block(block: &ContentBlock, path: Option<&CodePath>) -> Markup {
    match block {
        ContentBlock::Text { text } => html! {
            div class="text" { (PreEscaped(markdown_to_html(text))) }
        },
        ContentBlock::Code { text, .. } => html! {
            figure class="code" {
                @if let Some(path) = path {
                    figcaption { (path.to_string()) }
                }
                pre { code class=[path.and_then(language_class)] { (text) } }
            }
        },
        ContentBlock::Image { url, alt } => html! {
            figure class="image" {
                img src=(url) alt=(alt.as_deref().unwrap_or_default());
            }
        },
        ContentBlock::Unknown { kind, raw } => {
            log::warn!(
                "Rendering unrecognized block type {} as raw text",
                kind.as_deref().unwrap_or("(none)")
            );
            html! {
                div class="unknown" {
                    @if let Some(kind) = kind {
                        p class="unknown-kind" { "Unsupported block: " code { (kind) } }
                    }
                    pre { (raw) }
                }
            }
        }
    }
}

/// highlight.js class for a code file, from its extension.
fn language_class(path: &CodePath) -> Option<String> {
    let name = path.file_name();
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(format!("language-{}", ext.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use mimir_core::Timestamp;

    use super::*;
    use crate::helper::assignment;
    use crate::helper::code_block;

    #[test]
    fn test_heading_and_blocks_in_order() {
        let a = assignment(
            "a1",
            "HW 1",
            vec![
                ContentBlock::Text {
                    text: "First paragraph.".to_string(),
                },
                code_block(Some("main.py"), "print(1)"),
                ContentBlock::Image {
                    url: "https://example.com/fig.png".to_string(),
                    alt: Some("figure".to_string()),
                },
                ContentBlock::Text {
                    text: "Last paragraph.".to_string(),
                },
            ],
        );
        let html = render_fragment(&a).into_string();
        assert!(html.starts_with("<section class=\"assignment\"><h1>HW 1</h1>"));
        let first = html.find("<p>First paragraph.</p>").unwrap();
        let code = html.find("<figcaption>main.py</figcaption>").unwrap();
        let image = html
            .find("<img src=\"https://example.com/fig.png\" alt=\"figure\">")
            .unwrap();
        let last = html.find("<p>Last paragraph.</p>").unwrap();
        assert!(first < code && code < image && image < last);
    }

    #[test]
    fn test_no_document_shell() {
        let a = assignment("a1", "HW 1", vec![]);
        let html = render_fragment(&a).into_string();
        assert!(!html.contains("<html"));
        assert!(!html.contains("<body"));
        assert!(!html.contains("DOCTYPE"));
    }

    #[test]
    fn test_code_is_escaped_with_language() {
        let a = assignment(
            "a1",
            "HW",
            vec![code_block(Some("main.c"), "#include <stdio.h>")],
        );
        let html = render_fragment(&a).into_string();
        assert!(html.contains(
            "<pre><code class=\"language-c\">#include &lt;stdio.h&gt;</code></pre>"
        ));
    }

    #[test]
    fn test_synthesized_caption() {
        let a = assignment(
            "a1",
            "HW",
            vec![
                ContentBlock::Text {
                    text: "x".to_string(),
                },
                code_block(None, "data"),
            ],
        );
        let html = render_fragment(&a).into_string();
        assert!(html.contains("<figcaption>code_2.txt</figcaption>"));
        assert!(html.contains("<code class=\"language-txt\">data</code>"));
    }

    #[test]
    fn test_no_language_without_extension() {
        let a = assignment("a1", "HW", vec![code_block(Some("Makefile"), "all:")]);
        let html = render_fragment(&a).into_string();
        assert!(html.contains("<pre><code>all:</code></pre>"));
    }

    #[test]
    fn test_unknown_is_escaped() {
        let a = assignment(
            "a1",
            "HW",
            vec![ContentBlock::Unknown {
                kind: Some("quiz".to_string()),
                raw: r#"{"type":"quiz","q":"<b>?</b>"}"#.to_string(),
            }],
        );
        let html = render_fragment(&a).into_string();
        assert!(html.contains("<code>quiz</code>"));
        assert!(html.contains("&lt;b&gt;?&lt;/b&gt;"));
        assert!(!html.contains("<b>?</b>"));
    }

    #[test]
    fn test_name_is_escaped() {
        let a = assignment("a1", "Templates <T>", vec![]);
        let html = render_fragment(&a).into_string();
        assert!(html.contains("<h1>Templates &lt;T&gt;</h1>"));
    }

    #[test]
    fn test_open_date() {
        let mut summary = crate::helper::summary("a1", "HW");
        summary.open_date = Some(Timestamp::try_from("2019-01-15T05:00:00Z".to_string()).unwrap());
        let a = Assignment::new(summary, vec![]);
        let html = render_fragment(&a).into_string();
        assert!(html.contains(
            "<time datetime=\"2019-01-15T05:00:00.000Z\">2019-01-15 05:00 UTC</time>"
        ));
    }
}
