//! Error types raised while scanning methods and executing steps.

use std::error::Error as StdError;

use stepscan_patterns::TemplateError;
use thiserror::Error;

/// A fault raised by a scenario method.
///
/// Step bodies return this type from plain invocations and yield it from
/// self-describing text producers. The scanner never interprets execution
/// faults: [`ExecutionStep::execute`](crate::ExecutionStep::execute) hands
/// them back to the runner exactly as the method produced them.
///
/// # Examples
///
/// ```
/// use stepscan::StepError;
///
/// let err = StepError::failed("balance was 10, expected 20");
/// assert_eq!(err.to_string(), "balance was 10, expected 20");
/// assert!(!err.is_panic());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StepError {
    /// The method reported a failure with a message.
    #[error("{message}")]
    Failed {
        /// Human-readable failure description.
        message: String,
    },
    /// The method panicked.
    #[error("step panicked: {message}")]
    Panic {
        /// Rendered panic payload.
        message: String,
    },
    /// Any other error produced by the method.
    #[error(transparent)]
    Other(#[from] Box<dyn StdError + Send + Sync>),
}

impl StepError {
    /// Build a [`StepError::Failed`] from a message.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Returns `true` when the error records a panic.
    #[must_use]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panic { .. })
    }
}

/// Errors that abort the scan of a single method.
///
/// Scan errors signal an authoring problem in the scenario rather than a
/// failing step, so they are raised before any step for the method is
/// returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScanError {
    /// A self-describing method faulted before yielding its title.
    #[error("failed to derive the title of step method `{method}`: {source}")]
    TitleDerivationFailed {
        /// Name of the method whose title could not be established.
        method: String,
        /// Fault raised by the method or its text producer.
        #[source]
        source: StepError,
    },
    /// An argument variant declared a title template that cannot be rendered.
    #[error("invalid title template on step method `{method}`: {source}")]
    InvalidTemplate {
        /// Name of the method declaring the template.
        method: String,
        /// Template problem.
        #[source]
        source: TemplateError,
    },
}

impl ScanError {
    /// Name of the method whose scan was aborted.
    #[must_use]
    pub fn method_name(&self) -> &str {
        match self {
            Self::TitleDerivationFailed { method, .. } | Self::InvalidTemplate { method, .. } => {
                method
            }
        }
    }
}
