//! Positional title templates.
//!
//! Argument variants may carry a display template using composite positional
//! syntax: `{index}`, `{index,alignment}`, `{index:format}` or
//! `{index,alignment:format}`, with `{{` and `}}` as literal braces. The
//! arguments are flattened before formatting so nested groups address their
//! items by position.

mod lexer;
mod render;

use crate::arg::{StepArg, flatten_args};
use crate::errors::TemplateError;

use lexer::{Token, lex_template};

/// Render `template` with the flattened `args`.
///
/// # Errors
/// Returns [`TemplateError`] when the template contains unbalanced braces, a
/// malformed placeholder, or a placeholder index beyond the flattened
/// argument count.
///
/// # Examples
/// ```
/// use stepscan_patterns::{StepArg, format_template};
///
/// let title = format_template("the total is {0}", &[StepArg::from(19.99)])
///     .expect("template is valid");
/// assert_eq!(title, "the total is 19.99");
///
/// let nested = vec![StepArg::from(vec![3, 4])];
/// assert_eq!(
///     format_template("{1} of {0}", &nested).expect("template is valid"),
///     "4 of 3"
/// );
/// ```
pub fn format_template(template: &str, args: &[StepArg]) -> Result<String, TemplateError> {
    let flat = flatten_args(args);
    let mut rendered = String::with_capacity(template.len());
    for token in lex_template(template)? {
        match token {
            Token::Literal(text) => rendered.push_str(&text),
            Token::Placeholder(spec) => {
                let value = flat
                    .get(spec.index)
                    .ok_or(TemplateError::IndexOutOfRange {
                        index: spec.index,
                        available: flat.len(),
                        position: spec.position,
                    })?;
                let text = render::render_value(value, spec.format.as_deref());
                rendered.push_str(&render::align(text, spec.alignment));
            }
        }
    }
    Ok(rendered)
}

/// Join the flattened `args` with `", "`.
///
/// # Examples
/// ```
/// use stepscan_patterns::{StepArg, join_args};
///
/// let args = vec![StepArg::from(1), StepArg::from(vec!["a", "b"])];
/// assert_eq!(join_args(&args), "1, a, b");
/// ```
#[must_use]
pub fn join_args(args: &[StepArg]) -> String {
    flatten_args(args)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
