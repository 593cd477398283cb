//! JavaScript syntax highlighting rendered on the server.
//!
//! Output uses Prism's `token <kind>` class names so existing Prism themes
//! apply unchanged. The scanner is a single left-to-right regex pass; it does
//! not attempt to tell regex literals from division.

use std::fmt::Write;

use once_cell::sync::Lazy;
use regex::Regex;
use strum_macros::IntoStaticStr;
use utils::html::escape;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?P<comment>//[^\n]*|/\*[\s\S]*?\*/)",
        r#"|(?P<string>'(?:\\.|[^'\\\n])*'|"(?:\\.|[^"\\\n])*")"#,
        r"|(?P<template>`(?:\\[\s\S]|[^`\\])*`)",
        r"|(?P<number>\b\d+(?:\.\d+)?\b)",
        r"|(?P<word>[A-Za-z_$][\w$]*)",
        r"|(?P<operator>=>|\.\.\.|[-+*/%=!<>&|?:]+)",
        r"|(?P<punctuation>[{}\[\];(),.])",
    ))
    .expect("token regex is valid")
});

const KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "default",
    "delete", "do", "else", "export", "extends", "finally", "for", "from", "function", "if",
    "import", "in", "instanceof", "let", "new", "of", "return", "static", "super", "switch",
    "this", "throw", "try", "typeof", "var", "void", "while", "yield",
];

const LITERALS: &[&str] = &["true", "false", "null", "undefined"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum TokenKind {
    Comment,
    String,
    TemplateString,
    Number,
    Keyword,
    Boolean,
    Function,
    ClassName,
    Operator,
    Punctuation,
}

impl TokenKind {
    pub fn class_name(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub start: usize,
}

/// Classified tokens in source order; plain identifiers and whitespace are
/// left out
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    TOKEN_RE
        .captures_iter(source)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let kind = if caps.name("comment").is_some() {
                TokenKind::Comment
            } else if caps.name("string").is_some() {
                TokenKind::String
            } else if caps.name("template").is_some() {
                TokenKind::TemplateString
            } else if caps.name("number").is_some() {
                TokenKind::Number
            } else if caps.name("word").is_some() {
                classify_word(whole.as_str(), &source[whole.end()..])?
            } else if caps.name("operator").is_some() {
                TokenKind::Operator
            } else {
                TokenKind::Punctuation
            };
            Some(Token {
                kind,
                text: whole.as_str(),
                start: whole.start(),
            })
        })
        .collect()
}

fn classify_word(word: &str, rest: &str) -> Option<TokenKind> {
    if KEYWORDS.contains(&word) {
        Some(TokenKind::Keyword)
    } else if LITERALS.contains(&word) {
        Some(TokenKind::Boolean)
    } else if rest.trim_start().starts_with('(') {
        Some(TokenKind::Function)
    } else if word.starts_with(|c: char| c.is_ascii_uppercase()) {
        Some(TokenKind::ClassName)
    } else {
        None
    }
}

/// Escaped HTML for `source` with every classified token wrapped in a span
pub fn highlight_html(source: &str) -> String {
    let mut html = String::with_capacity(source.len() * 2);
    let mut cursor = 0;
    for token in tokenize(source) {
        html.push_str(&escape(&source[cursor..token.start]));
        let _ = write!(
            html,
            r#"<span class="token {}">{}</span>"#,
            token.kind.class_name(),
            escape(token.text)
        );
        cursor = token.start + token.text.len();
    }
    html.push_str(&escape(&source[cursor..]));
    html
}
