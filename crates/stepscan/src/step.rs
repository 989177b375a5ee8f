//! Executable step descriptors produced by the scanner.

use std::fmt;

use stepscan_policy::{ExecutionOrder, StepMatcher};

use crate::action::StepAction;
use crate::error::StepError;

/// A named, executable unit of scenario behaviour.
///
/// Steps are immutable once built. The action runs only when
/// [`execute`](Self::execute) is called, and any fault it raises is returned
/// as-is.
pub struct ExecutionStep {
    title: String,
    method_name: String,
    asserts: bool,
    execution_order: ExecutionOrder,
    should_report: bool,
    action: Box<dyn StepAction>,
}

impl ExecutionStep {
    /// Build a step carrying the metadata of `matcher`.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        method_name: impl Into<String>,
        matcher: &StepMatcher,
        action: Box<dyn StepAction>,
    ) -> Self {
        Self {
            title: title.into(),
            method_name: method_name.into(),
            asserts: matcher.asserts(),
            execution_order: matcher.execution_order(),
            should_report: matcher.should_report(),
            action,
        }
    }

    /// Human-readable step text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Identifier of the method the step was scanned from.
    #[must_use]
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Whether the step verifies an outcome.
    #[must_use]
    pub const fn asserts(&self) -> bool {
        self.asserts
    }

    /// Category rank used to sequence step groups.
    #[must_use]
    pub const fn execution_order(&self) -> ExecutionOrder {
        self.execution_order
    }

    /// Integer form of [`execution_order`](Self::execution_order).
    #[must_use]
    pub const fn execution_rank(&self) -> u8 {
        self.execution_order.rank()
    }

    /// Whether reports should list the step.
    #[must_use]
    pub const fn should_report(&self) -> bool {
        self.should_report
    }

    /// Run the step.
    ///
    /// # Errors
    ///
    /// Returns the fault raised by the underlying method unchanged.
    pub fn execute(&self) -> Result<(), StepError> {
        self.action.invoke()
    }

    /// The deferred invocation backing the step.
    #[must_use]
    pub fn action(&self) -> &dyn StepAction {
        self.action.as_ref()
    }
}

impl fmt::Debug for ExecutionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionStep")
            .field("title", &self.title)
            .field("method_name", &self.method_name)
            .field("asserts", &self.asserts)
            .field("execution_order", &self.execution_order)
            .field("should_report", &self.should_report)
            .finish_non_exhaustive()
    }
}
