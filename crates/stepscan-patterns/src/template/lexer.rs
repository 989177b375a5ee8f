//! Template lexer converting title templates into literal and placeholder tokens.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::errors::TemplateError;

/// Largest alignment width or format precision a placeholder may request.
///
/// `format!` rejects widths and precisions beyond `u16::MAX` at runtime.
pub(crate) const MAX_FORMAT_WIDTH: u64 = 0xFFFF;

#[expect(
    clippy::expect_used,
    reason = "the token grammar is a constant and must compile"
)]
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\{\{|\}\}",
        r"|\{(?P<index>\d+)(?:,(?P<align>-?\d+))?(?::(?P<format>[^{}]*))?\}",
        r"|(?P<malformed>\{[^{}]*\})",
        r"|(?P<stray>[{}])",
    ))
    .expect("title template token regex must compile")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlaceholderSpec {
    pub index: usize,
    pub alignment: Option<i64>,
    pub format: Option<String>,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Literal(String),
    Placeholder(PlaceholderSpec),
}

pub(crate) fn lex_template(template: &str) -> Result<Vec<Token>, TemplateError> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut last = 0;

    for caps in TOKEN.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        literal.push_str(template.get(last..whole.start()).unwrap_or_default());
        last = whole.end();

        match whole.as_str() {
            "{{" => literal.push('{'),
            "}}" => literal.push('}'),
            _ => {
                let spec = placeholder_from(&caps, whole.start())?;
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(Token::Placeholder(spec));
            }
        }
    }

    literal.push_str(template.get(last..).unwrap_or_default());
    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    Ok(tokens)
}

fn placeholder_from(caps: &Captures<'_>, position: usize) -> Result<PlaceholderSpec, TemplateError> {
    if let Some(stray) = caps.name("stray") {
        return Err(TemplateError::UnbalancedBrace {
            brace: stray.as_str().chars().next().unwrap_or('{'),
            position,
        });
    }
    let malformed = || TemplateError::MalformedPlaceholder {
        placeholder: caps.get(0).map_or_else(String::new, |m| m.as_str().to_owned()),
        position,
    };
    if caps.name("malformed").is_some() {
        return Err(malformed());
    }
    let index = caps
        .name("index")
        .and_then(|m| m.as_str().parse::<usize>().ok())
        .ok_or_else(malformed)?;
    let alignment = caps
        .name("align")
        .map(|m| m.as_str().parse::<i64>().map_err(|_| malformed()))
        .transpose()?;
    if alignment.is_some_and(|width| width.unsigned_abs() > MAX_FORMAT_WIDTH) {
        return Err(malformed());
    }
    let format = caps
        .name("format")
        .map(|m| m.as_str().to_owned())
        .filter(|format| !format.is_empty());
    if format.as_deref().is_some_and(precision_too_large) {
        return Err(malformed());
    }
    Ok(PlaceholderSpec {
        index,
        alignment,
        format,
        position,
    })
}

/// Numeric `F`/`D` specifiers whose precision `format!` cannot honour.
fn precision_too_large(format: &str) -> bool {
    let mut chars = format.chars();
    let numeric = chars
        .next()
        .is_some_and(|kind| matches!(kind.to_ascii_uppercase(), 'F' | 'D'));
    let digits = chars.as_str();
    numeric
        && !digits.is_empty()
        && digits.bytes().all(|byte| byte.is_ascii_digit())
        && !digits
            .parse::<u64>()
            .is_ok_and(|precision| precision <= MAX_FORMAT_WIDTH)
}
