use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

#[derive(Debug, Clone, PartialEq)]
struct Section {
    title: String,
    body_html: String,
}

fn to_html(markdown: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let mut out = String::new();
    html::push_html(&mut out, Parser::new_ext(markdown, opts));
    out
}

/// Split on `## ` headings. Text before the first heading is the intro.
fn split_sections(source: &str) -> (String, Vec<Section>) {
    let mut intro = String::new();
    let mut sections = Vec::new();
    let mut current: Option<(String, String)> = None;

    for line in source.lines() {
        if let Some(title) = line.strip_prefix("## ") {
            if let Some((title, body)) = current.take() {
                sections.push(Section { title, body_html: to_html(&body) });
            }
            current = Some((title.trim().to_string(), String::new()));
        } else {
            let target = match current.as_mut() {
                Some((_, body)) => body,
                None => &mut intro,
            };
            target.push_str(line);
            target.push('\n');
        }
    }
    if let Some((title, body)) = current {
        sections.push(Section { title, body_html: to_html(&body) });
    }

    (to_html(&intro), sections)
}

/// Static page written in markdown, with `##` sections folded into an accordion.
#[component]
pub fn MarkdownPage(source: &'static str, children: Element) -> Element {
    let parsed = use_hook(|| split_sections(source));
    let mut expanded = use_signal::<Option<usize>>(|| None);

    let (intro_html, sections) = &parsed;

    rsx! {
        div { class: "markdown-page",
            div { class: "markdown-content", dangerous_inner_html: "{intro_html}" }
            for (i, section) in sections.iter().enumerate() {
                div { key: "{i}", class: "accordion-section",
                    div {
                        class: "accordion-header",
                        onclick: move |_| {
                            if expanded() == Some(i) {
                                expanded.set(None);
                            } else {
                                expanded.set(Some(i));
                            }
                        },
                        span { class: "accordion-chevron",
                            if expanded() == Some(i) { "▾" } else { "▸" }
                        }
                        "{section.title}"
                    }
                    if expanded() == Some(i) {
                        div {
                            class: "accordion-body markdown-content",
                            dangerous_inner_html: "{section.body_html}"
                        }
                    }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}
