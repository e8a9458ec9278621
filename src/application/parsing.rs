//! # Instruction Parsing
//!
//! Turns one line of free text into planned tool calls. Intent is a
//! prioritized list of keyword rules; the first rule whose keywords appear in
//! the lowercased input builds the plan, and later rules are not consulted.
//! Matching is by substring, so "showcase" counts as "show".

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::types::ToolCall;

pub const LIST_KEYWORDS: &[&str] = &["list", "show", "files", "what", "display"];
pub const CREATE_KEYWORDS: &[&str] = &["create", "make", "new", "write"];

/// Filename used when the instruction does not name one.
pub const DEFAULT_FILENAME: &str = "new_file.txt";

// "file called notes.txt", "files named 'a.md'", "file x"
static FILENAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:file|files?)\s+(?:called|named|path)?\s*["']?([^"'\s]+)["']?"#)
        .expect("filename pattern")
});

// "with hello world", "containing 'abc'." - stops at end of input or first period
static CONTENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:with|content|containing)\s+["']?(.+?)["']?(?:\s*$|\.)"#)
        .expect("content pattern")
});

/// One interpretation rule: fires when any keyword is a substring of the
/// lowercased instruction.
pub struct Rule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub build: fn(&str) -> Vec<ToolCall>,
}

impl Rule {
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Rules in priority order.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule {
            name: "list",
            keywords: LIST_KEYWORDS,
            build: |_| vec![ToolCall::list_files()],
        },
        Rule {
            name: "create",
            keywords: CREATE_KEYWORDS,
            build: |input| vec![build_create_call(input)],
        },
    ]
}

/// Maps instructions to tool calls using an ordered rule list.
pub struct Interpreter {
    rules: Vec<Rule>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl Interpreter {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Plan the calls for `input`. Unrecognized input yields an empty plan.
    pub fn interpret(&self, input: &str) -> Vec<ToolCall> {
        let lowered = input.to_lowercase();
        match self.rules.iter().find(|rule| rule.matches(&lowered)) {
            Some(rule) => {
                tracing::debug!("Instruction matched rule '{}'", rule.name);
                (rule.build)(input)
            }
            None => {
                tracing::debug!("Instruction matched no rule");
                Vec::new()
            }
        }
    }
}

/// Convenience wrapper over the default rule set.
pub fn parse_instruction(input: &str) -> Vec<ToolCall> {
    Interpreter::default().interpret(input)
}

pub fn extract_filename(input: &str) -> Option<String> {
    FILENAME_REGEX
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn extract_content(input: &str) -> Option<String> {
    CONTENT_REGEX
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|content| !content.is_empty())
}

fn build_create_call(input: &str) -> ToolCall {
    let filename = extract_filename(input).unwrap_or_else(|| DEFAULT_FILENAME.to_string());
    let content = extract_content(input).unwrap_or_else(|| input.to_string());
    ToolCall::create_file(filename, content)
}
