use std::collections::HashSet;

use scraper::{Html, Node};

const VOID_ELEMENTS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Strips markup from free text, keeping only an allow-list of bare tags.
///
/// Allowed elements survive without their attributes. Any other element is
/// removed but its text is kept. Text is re-escaped on the way out.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    allowed_tags: HashSet<String>,
}

enum Visit<'a, N> {
    Node(N),
    Close(&'a str),
}

impl Sanitizer {
    pub fn new<S: AsRef<str>>(allowed_tags: &[S]) -> Self {
        Self {
            allowed_tags: allowed_tags
                .iter()
                .map(|tag| tag.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn allows(&self, tag: &str) -> bool {
        self.allowed_tags.contains(tag)
    }

    pub fn clean(&self, input: &str) -> String {
        let fragment = Html::parse_fragment(input);
        let mut output = String::with_capacity(input.len());

        let mut stack = Vec::new();
        for child in fragment.root_element().children().rev() {
            stack.push(Visit::Node(child));
        }

        while let Some(visit) = stack.pop() {
            let node = match visit {
                Visit::Close(name) => {
                    push_close_tag(&mut output, name);
                    continue;
                }
                Visit::Node(node) => node,
            };

            match node.value() {
                Node::Text(text) => push_escaped(&mut output, text),
                Node::Element(element) => {
                    let name = element.name();
                    if self.allows(name) {
                        push_open_tag(&mut output, name);
                        if !is_void(name) {
                            stack.push(Visit::Close(name));
                        }
                    }
                    for child in node.children().rev() {
                        stack.push(Visit::Node(child));
                    }
                }
                // Template contents live in a fragment under the template element.
                Node::Fragment => {
                    for child in node.children().rev() {
                        stack.push(Visit::Node(child));
                    }
                }
                _ => {}
            }
        }

        output
    }
}

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

fn push_open_tag(output: &mut String, name: &str) {
    output.push('<');
    output.push_str(name);
    output.push('>');
}

fn push_close_tag(output: &mut String, name: &str) {
    output.push_str("</");
    output.push_str(name);
    output.push('>');
}

fn push_escaped(output: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(ch),
        }
    }
}
