//! Logic-less template rendering over JSON slot data.
//!
//! Supported tags:
//!
//! | Tag | Meaning |
//! |-----|---------|
//! | `{{name}}` | HTML-escaped value |
//! | `{{{name}}}`, `{{& name}}` | raw value |
//! | `{{#name}}...{{/name}}` | iterate arrays, enter objects, show on truthy values |
//! | `{{^name}}...{{/name}}` | show when the value is falsy or missing |
//! | `{{! comment}}` | dropped |
//!
//! Names may be dotted (`folder.path`) and `.` is the current value. Lookups
//! inside a section fall back to enclosing contexts, so row templates can
//! reach view-level slots such as `{{dialogId}}`.

use serde_json::Value;

use crate::error::TemplateError;

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Text(String),
    Value { name: String, escape: bool },
    Section {
        name: String,
        inverted: bool,
        children: Vec<Node>,
    },
}

/// A parsed template, ready to render any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    name: String,
    nodes: Vec<Node>,
}

struct OpenSection {
    name: String,
    inverted: bool,
    siblings: Vec<Node>,
}

impl Template {
    /// Parse `source`. `name` is only used in error messages and lookups.
    pub fn parse(name: &str, source: &str) -> Result<Self, TemplateError> {
        let mut stack: Vec<OpenSection> = Vec::new();
        let mut nodes: Vec<Node> = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find("{{") {
            if start > 0 {
                nodes.push(Node::Text(rest[..start].to_string()));
            }

            let tag_offset = offset + start;
            let after_open = &rest[start + 2..];
            let (raw_tag, triple, consumed) = if let Some(inner) = after_open.strip_prefix('{') {
                let end = inner.find("}}}").ok_or_else(|| TemplateError::UnclosedTag {
                    template: name.to_string(),
                    offset: tag_offset,
                })?;
                (&inner[..end], true, start + 2 + 1 + end + 3)
            } else {
                let end = after_open.find("}}").ok_or_else(|| TemplateError::UnclosedTag {
                    template: name.to_string(),
                    offset: tag_offset,
                })?;
                (&after_open[..end], false, start + 2 + end + 2)
            };

            let tag = raw_tag.trim();
            if tag.is_empty() {
                return Err(TemplateError::EmptyTag {
                    template: name.to_string(),
                    offset: tag_offset,
                });
            }

            if triple {
                nodes.push(Node::Value {
                    name: tag.to_string(),
                    escape: false,
                });
            } else {
                let mut chars = tag.chars();
                let sigil = chars.next();
                let body = chars.as_str().trim();
                match sigil {
                    Some('!') => {}
                    Some('&') => nodes.push(Node::Value {
                        name: body.to_string(),
                        escape: false,
                    }),
                    Some('#') | Some('^') => {
                        stack.push(OpenSection {
                            name: body.to_string(),
                            inverted: sigil == Some('^'),
                            siblings: std::mem::take(&mut nodes),
                        });
                    }
                    Some('/') => {
                        let open = stack.pop().ok_or_else(|| TemplateError::UnexpectedClose {
                            template: name.to_string(),
                            name: body.to_string(),
                        })?;
                        if open.name != body {
                            return Err(TemplateError::MismatchedSection {
                                template: name.to_string(),
                                expected: open.name,
                                found: body.to_string(),
                            });
                        }
                        let children = std::mem::replace(&mut nodes, open.siblings);
                        nodes.push(Node::Section {
                            name: open.name,
                            inverted: open.inverted,
                            children,
                        });
                    }
                    _ => nodes.push(Node::Value {
                        name: tag.to_string(),
                        escape: true,
                    }),
                }
            }

            rest = &rest[consumed..];
            offset += consumed;
        }

        if !rest.is_empty() {
            nodes.push(Node::Text(rest.to_string()));
        }

        if let Some(open) = stack.pop() {
            return Err(TemplateError::UnclosedSection {
                template: name.to_string(),
                name: open.name,
            });
        }

        Ok(Self {
            name: name.to_string(),
            nodes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render against `data`. Missing names render as empty text.
    pub fn render(&self, data: &Value) -> String {
        let mut out = String::new();
        let mut stack = vec![data];
        render_nodes(&self.nodes, &mut stack, &mut out);
        out
    }
}

fn render_nodes<'v>(nodes: &[Node], stack: &mut Vec<&'v Value>, out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Value { name, escape } => {
                if let Some(value) = lookup(stack, name) {
                    let text = stringify(value);
                    if *escape {
                        escape_html_into(&text, out);
                    } else {
                        out.push_str(&text);
                    }
                }
            }
            Node::Section {
                name,
                inverted,
                children,
            } => {
                let value = lookup(stack, name);
                let truthy = value.map(is_truthy).unwrap_or(false);
                if *inverted {
                    if !truthy {
                        render_nodes(children, stack, out);
                    }
                    continue;
                }
                match value {
                    Some(Value::Array(items)) => {
                        for item in items {
                            stack.push(item);
                            render_nodes(children, stack, out);
                            stack.pop();
                        }
                    }
                    Some(value) if truthy => {
                        stack.push(value);
                        render_nodes(children, stack, out);
                        stack.pop();
                    }
                    _ => {}
                }
            }
        }
    }
}

fn lookup<'a>(stack: &[&'a Value], name: &str) -> Option<&'a Value> {
    if name == "." {
        return stack.last().copied();
    }

    let mut parts = name.split('.');
    let first = parts.next()?;
    let mut current = stack
        .iter()
        .rev()
        .find_map(|ctx| ctx.as_object().and_then(|obj| obj.get(first)))?;

    for part in parts {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}

/// Null, false, empty strings and empty arrays are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Number(_) | Value::Object(_) => true,
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_html_into(text, &mut out);
    out
}

fn escape_html_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
