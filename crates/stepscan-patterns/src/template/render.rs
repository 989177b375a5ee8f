//! Value rendering for template placeholders.

use crate::arg::StepArg;

/// Render a value honouring a numeric format specifier.
///
/// `F<n>` renders fixed decimals (two when `n` is omitted) and `D<n>` pads
/// integers with zeros to `n` digits. Other specifiers, and specifiers that do
/// not apply to the value, fall back to the plain rendering.
pub(super) fn render_value(value: &StepArg, format: Option<&str>) -> String {
    let Some((kind, precision)) = format.and_then(parse_format) else {
        return value.to_string();
    };
    match (kind, value) {
        ('F', StepArg::Float(number)) => {
            format!("{number:.prec$}", prec = precision.unwrap_or(2))
        }
        ('F', StepArg::Int(_) | StepArg::UInt(_)) => {
            let decimals = precision.unwrap_or(2);
            if decimals == 0 {
                value.to_string()
            } else {
                format!("{value}.{}", "0".repeat(decimals))
            }
        }
        ('D', StepArg::Int(number)) => {
            let digits = precision.unwrap_or(0);
            let padded = format!("{:0>digits$}", number.unsigned_abs());
            if number.is_negative() {
                format!("-{padded}")
            } else {
                padded
            }
        }
        ('D', StepArg::UInt(number)) => format!("{number:0>digits$}", digits = precision.unwrap_or(0)),
        _ => value.to_string(),
    }
}

fn parse_format(format: &str) -> Option<(char, Option<usize>)> {
    let mut chars = format.chars();
    let kind = chars.next()?.to_ascii_uppercase();
    let rest = chars.as_str();
    let precision = if rest.is_empty() {
        None
    } else {
        Some(rest.parse::<usize>().ok()?)
    };
    matches!(kind, 'F' | 'D').then_some((kind, precision))
}

/// Pad `text` to the alignment width: right-aligned for positive widths,
/// left-aligned for negative ones.
pub(super) fn align(text: String, alignment: Option<i64>) -> String {
    let Some(alignment) = alignment else {
        return text;
    };
    let Ok(width) = usize::try_from(alignment.unsigned_abs()) else {
        return text;
    };
    if alignment.is_negative() {
        format!("{text:<width$}")
    } else {
        format!("{text:>width$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(StepArg::from(1.23456), Some("F3"), "1.235")]
    #[case(StepArg::from(1.5), Some("f"), "1.50")]
    #[case(StepArg::from(4), Some("F1"), "4.0")]
    #[case(StepArg::from(4), Some("F0"), "4")]
    #[case(StepArg::from(-42), Some("D5"), "-00042")]
    #[case(StepArg::from(42_u32), Some("d4"), "0042")]
    #[case(StepArg::from("text"), Some("D4"), "text")]
    #[case(StepArg::from(3), Some("X8"), "3")]
    #[case(StepArg::from(3), Some("Fabc"), "3")]
    #[case(StepArg::from(3), None, "3")]
    fn renders_format_specifiers(
        #[case] value: StepArg,
        #[case] format: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(render_value(&value, format), expected);
    }

    #[rstest]
    #[case("ab", Some(4), "  ab")]
    #[case("ab", Some(-4), "ab  ")]
    #[case("abcdef", Some(3), "abcdef")]
    #[case("ab", None, "ab")]
    fn aligns_text(#[case] text: &str, #[case] alignment: Option<i64>, #[case] expected: &str) {
        assert_eq!(align(text.to_owned(), alignment), expected);
    }
}
