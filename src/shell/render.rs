//! Boxed, width-aware text layout for the terminal.

use colored::{ColoredString, Colorize};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

static ANSI_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1B\[[0-?]*[ -/]*[@-~]").expect("Invalid regex pattern"));

pub fn orange(text: &str) -> ColoredString {
    text.truecolor(255, 175, 0)
}

pub fn violet(text: &str) -> ColoredString {
    text.truecolor(95, 0, 255)
}

pub fn grey(text: &str) -> ColoredString {
    text.truecolor(88, 88, 88)
}

/// Each character of `text` in the next color of the rainbow.
pub fn rainbow(text: &str) -> String {
    let paint: [fn(&str) -> ColoredString; 7] = [
        |s| s.red(),
        orange,
        |s| s.yellow(),
        |s| s.green(),
        |s| s.cyan(),
        |s| s.blue(),
        violet,
    ];

    text.chars()
        .zip(paint.iter().cycle())
        .map(|(c, paint)| paint(&c.to_string()).to_string())
        .collect()
}

pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(text, "")
}

/// Columns `text` occupies once escape sequences are removed.
pub fn visible_width(text: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(text).as_ref())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxLine {
    pub text: String,
    pub align: Align,
}

impl BoxLine {
    pub fn left(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: Align::Left,
        }
    }

    pub fn center(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: Align::Center,
        }
    }

    pub fn blank() -> Self {
        Self::center("")
    }
}

/// Pad `text` with spaces to `width` visible columns.
pub fn fill(text: &str, width: usize, align: Align) -> String {
    let padding = width.saturating_sub(visible_width(text));
    match align {
        Align::Left => format!("{text}{}", " ".repeat(padding)),
        Align::Center => {
            let left = padding / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(padding - left))
        }
    }
}

/// Split into alternating runs of spaces and non-spaces.
fn chunks(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_space = None;

    for (i, c) in text.char_indices() {
        let is_space = c == ' ';
        if in_space.is_some_and(|prev| prev != is_space) {
            chunks.push(&text[start..i]);
            start = i;
        }
        in_space = Some(is_space);
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}

/// Greedy word wrap on visible width.
///
/// Spaces at a break are dropped. A single word wider than `width` gets a
/// line of its own and is not split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    if visible_width(text) <= width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for chunk in chunks(text) {
        let chunk_width = visible_width(chunk);
        if current_width + chunk_width <= width {
            current.push_str(chunk);
            current_width += chunk_width;
            continue;
        }

        let is_space = chunk.starts_with(' ');
        if current_width > 0 {
            lines.push(current.trim_end().to_string());
            current.clear();
            current_width = 0;
        }
        if !is_space {
            current.push_str(chunk);
            current_width = chunk_width;
        }
    }

    if current_width > 0 || lines.is_empty() {
        lines.push(current.trim_end().to_string());
    }
    lines
}

/// [`wrap`] with every line prefixed by `indent`, which counts toward `width`.
pub fn wrap_indented(text: &str, width: usize, indent: &str) -> Vec<String> {
    wrap(text, width.saturating_sub(indent.len()))
        .into_iter()
        .map(|line| format!("{indent}{line}"))
        .collect()
}

/// Draw `lines` inside a cyan frame exactly `width` columns wide.
pub fn boxed(lines: &[BoxLine], width: usize) -> String {
    let inner = width.saturating_sub(4);
    let border = format!("+{}+", "-".repeat(width.saturating_sub(2)))
        .cyan()
        .to_string();

    let mut out = vec![border.clone()];
    for line in lines {
        for wrapped in wrap(&line.text, inner) {
            out.push(format!(
                "{}{}{}",
                "| ".cyan(),
                fill(&wrapped, inner, line.align),
                " |".cyan()
            ));
        }
    }
    out.push(border);
    out.join("\n")
}

/// Indented `key: value` listing of a YAML document.
pub fn yaml_tree(value: &serde_yaml::Value) -> String {
    let mut out = String::new();
    match value {
        serde_yaml::Value::Mapping(map) => write_mapping(map, 0, &mut out),
        serde_yaml::Value::Sequence(items) => write_sequence(items, 0, &mut out),
        other => {
            out.push_str(&scalar_text(other));
            out.push('\n');
        }
    }
    out
}

fn write_mapping(map: &serde_yaml::Mapping, indent: usize, out: &mut String) {
    let pad = " ".repeat(indent);
    for (key, value) in map {
        let key = scalar_text(key);
        match value {
            serde_yaml::Value::Mapping(nested) if !nested.is_empty() => {
                out.push_str(&format!("{pad}{key}:\n"));
                write_mapping(nested, indent + 4, out);
            }
            serde_yaml::Value::Sequence(items) if !items.is_empty() => {
                out.push_str(&format!("{pad}{key}:\n"));
                write_sequence(items, indent + 4, out);
            }
            other => out.push_str(&format!("{pad}{key}: {}\n", scalar_text(other))),
        }
    }
}

fn write_sequence(items: &[serde_yaml::Value], indent: usize, out: &mut String) {
    let pad = " ".repeat(indent);
    for item in items {
        match item {
            serde_yaml::Value::Mapping(map) if !map.is_empty() => {
                // Render two columns deeper, then put the dash in front of the first key.
                let mut nested = String::new();
                write_mapping(map, indent + 2, &mut nested);
                out.push_str(&format!("{pad}- {}", &nested[indent + 2..]));
            }
            serde_yaml::Value::Sequence(inner) if !inner.is_empty() => {
                out.push_str(&format!("{pad}-\n"));
                write_sequence(inner, indent + 4, out);
            }
            other => out.push_str(&format!("{pad}- {}\n", scalar_text(other))),
        }
    }
}

fn scalar_text(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Mapping(map) if map.is_empty() => "{}".to_string(),
        serde_yaml::Value::Sequence(items) if items.is_empty() => "[]".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
