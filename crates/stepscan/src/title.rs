//! Step title derivation.
//!
//! Plain methods are named from their identifier: the identifier is split
//! into words, the convention keyword is removed, the remaining words are
//! humanized, and the caller's [`TitleTransform`] is applied. Argument
//! variants then either render their template or append their arguments.
//!
//! Self-describing methods are invoked once and the first text item they
//! yield becomes the title; see [`describe`].

use std::panic::{AssertUnwindSafe, catch_unwind};

use stepscan_patterns::{
    StepArg, TemplateError, format_template, humanize, join_args, split_words,
};
use stepscan_policy::{Convention, TitleTransform};

use crate::error::StepError;
use crate::method::{ArgumentVariant, DescribeFn, SharedScenario, TextProducer};
use crate::panic::panic_message;

/// Derive the base title of a method from its name.
///
/// When removing the convention keyword leaves no words, the whole
/// identifier is humanized instead.
///
/// # Examples
///
/// ```
/// use stepscan::{Convention, TitleTransform, name_title};
///
/// let title = name_title(
///     &Convention::prefix("Given"),
///     "GivenAUserWithBalance",
///     &TitleTransform::identity(),
/// );
/// assert_eq!(title, "A user with balance");
/// ```
#[must_use]
pub fn name_title(convention: &Convention, method_name: &str, transform: &TitleTransform) -> String {
    let words = split_words(method_name);
    let stripped = convention.strip(&words);
    let kept = if stripped.is_empty() {
        words.as_slice()
    } else {
        stripped
    };
    transform.apply(&humanize(kept))
}

/// Combine a base title with an optional argument variant.
///
/// A template is rendered verbatim with the flattened arguments. Without a
/// template, the arguments are appended to `base` joined by `", "`.
///
/// # Errors
///
/// Returns [`TemplateError`] when the variant's template is malformed or
/// refers to a missing argument.
///
/// # Examples
///
/// ```
/// use stepscan::{ArgumentVariant, step_args, variant_title};
///
/// let appended = ArgumentVariant::new(step_args![42]);
/// assert_eq!(
///     variant_title("The order is complete", Some(&appended)).unwrap(),
///     "The order is complete 42"
/// );
///
/// let templated = ArgumentVariant::new(step_args![19.99]).with_template("the total is {0}");
/// assert_eq!(variant_title("Total", Some(&templated)).unwrap(), "the total is 19.99");
/// ```
pub fn variant_title(base: &str, variant: Option<&ArgumentVariant>) -> Result<String, TemplateError> {
    let Some(variant) = variant else {
        return Ok(base.to_owned());
    };
    if let Some(template) = variant.template() {
        return format_template(template, variant.args());
    }
    if variant.is_empty() {
        return Ok(base.to_owned());
    }
    Ok(format!("{base} {}", join_args(variant.args())))
}

/// Outcome of invoking a self-describing method for its title.
#[derive(Debug)]
pub(crate) struct SelfDescription {
    /// First text item, or `None` when the producer was empty.
    pub(crate) title: Option<String>,
    /// The producer, already advanced past the title.
    pub(crate) rest: TextProducer,
}

/// Invoke a self-describing body once and pull its first item.
///
/// Panics raised by the body or by the first pull are caught and reported as
/// [`StepError::Panic`].
pub(crate) fn describe<S>(
    target: &SharedScenario<S>,
    body: &DescribeFn<S>,
    args: &[StepArg],
) -> Result<SelfDescription, StepError> {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let mut producer = body(target, args);
        let first = producer.next();
        (first, producer)
    }));
    match outcome {
        Err(payload) => Err(StepError::Panic {
            message: panic_message(payload.as_ref()),
        }),
        Ok((Some(Err(error)), _)) => Err(error),
        Ok((Some(Ok(title)), rest)) => Ok(SelfDescription {
            title: Some(title),
            rest,
        }),
        Ok((None, rest)) => Ok(SelfDescription { title: None, rest }),
    }
}
