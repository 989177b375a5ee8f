//! Error types shared by the template formatting modules.

use thiserror::Error;

/// Errors surfaced while rendering a positional title template.
///
/// Positions are zero-based byte offsets into the template text.
///
/// # Examples
/// ```
/// use stepscan_patterns::{TemplateError, format_template};
///
/// let err = format_template("total is {1}", &[]).unwrap_err();
/// assert_eq!(
///     err,
///     TemplateError::IndexOutOfRange { index: 1, available: 0, position: 9 }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TemplateError {
    /// A brace that neither opens a placeholder nor is doubled as a literal.
    #[error("unbalanced '{brace}' in title template at byte {position} (zero-based)")]
    UnbalancedBrace {
        /// The offending brace character.
        brace: char,
        /// Byte offset of the brace.
        position: usize,
    },
    /// A braced segment that is not a valid `{index[,alignment][:format]}`.
    #[error("malformed placeholder `{placeholder}` in title template at byte {position} (zero-based)")]
    MalformedPlaceholder {
        /// The placeholder text including braces.
        placeholder: String,
        /// Byte offset of the opening brace.
        position: usize,
    },
    /// A placeholder refers to an argument that was not supplied.
    #[error(
        "placeholder {{{index}}} at byte {position} (zero-based) refers past the {available} supplied argument(s)"
    )]
    IndexOutOfRange {
        /// Zero-based argument index named by the placeholder.
        index: usize,
        /// Number of flattened arguments available.
        available: usize,
        /// Byte offset of the opening brace.
        position: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_unbalanced_brace() {
        let err = TemplateError::UnbalancedBrace {
            brace: '}',
            position: 4,
        };
        assert_eq!(
            err.to_string(),
            "unbalanced '}' in title template at byte 4 (zero-based)"
        );
    }

    #[test]
    fn formats_malformed_placeholder() {
        let err = TemplateError::MalformedPlaceholder {
            placeholder: "{name}".into(),
            position: 0,
        };
        assert_eq!(
            err.to_string(),
            "malformed placeholder `{name}` in title template at byte 0 (zero-based)"
        );
    }

    #[test]
    fn formats_index_out_of_range() {
        let err = TemplateError::IndexOutOfRange {
            index: 2,
            available: 1,
            position: 7,
        };
        assert_eq!(
            err.to_string(),
            "placeholder {2} at byte 7 (zero-based) refers past the 1 supplied argument(s)"
        );
    }
}
