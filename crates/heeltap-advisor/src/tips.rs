//! Light rendering of generated tips.
//!
//! Not a Markdown parser: lines are classified by their first characters and
//! lose at most one leading marker.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// How a tip line should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Line began with `#`.
    Heading,
    /// Line began with `-` or `<digit>.`; drawn indented.
    ListItem,
    Paragraph,
}

/// One rendered line of advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipLine {
    pub kind: LineKind,
    pub text: String,
}

fn list_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(-|\d\.)").expect("static regex"))
}

fn leading_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[#*-]\s?").expect("static regex"))
}

/// Classify a single line.
pub fn classify(line: &str) -> LineKind {
    if line.starts_with('#') {
        LineKind::Heading
    } else if list_marker().is_match(line) {
        LineKind::ListItem
    } else {
        LineKind::Paragraph
    }
}

/// Split generated text into styled lines.
pub fn render_tips(text: &str) -> Vec<TipLine> {
    text.split('\n')
        .map(|line| TipLine {
            kind: classify(line),
            text: leading_token().replace(line, "").into_owned(),
        })
        .collect()
}
