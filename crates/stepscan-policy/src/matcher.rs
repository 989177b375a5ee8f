//! Step matcher policy records and the default Given/When/Then family.

use crate::convention::Convention;
use crate::order::ExecutionOrder;

/// Policy deciding whether a method belongs to a step category.
///
/// A matcher pairs a [`Convention`] with the metadata every step of the
/// category carries: whether it asserts, its [`ExecutionOrder`], and whether a
/// report should list it. Matchers are immutable and may be shared across
/// threads.
///
/// # Examples
///
/// ```
/// use stepscan_policy::{Convention, ExecutionOrder, StepMatcher};
///
/// let then = StepMatcher::new(Convention::prefix("Then"), true, ExecutionOrder::Assertion);
/// assert!(then.is_method_of_interest("ThenTheOrderIsComplete"));
/// assert!(then.asserts());
/// assert!(then.should_report());
/// ```
#[derive(Clone, Debug)]
pub struct StepMatcher {
    convention: Convention,
    asserts: bool,
    execution_order: ExecutionOrder,
    should_report: bool,
}

impl StepMatcher {
    /// Create a matcher whose steps are reported.
    #[must_use]
    pub const fn new(convention: Convention, asserts: bool, execution_order: ExecutionOrder) -> Self {
        Self {
            convention,
            asserts,
            execution_order,
            should_report: true,
        }
    }

    /// Create a matcher whose steps run but are left out of reports.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepscan_policy::{Convention, ExecutionOrder, StepMatcher};
    ///
    /// let teardown = StepMatcher::unreported(
    ///     Convention::prefix("TearDown"),
    ///     false,
    ///     ExecutionOrder::TearDown,
    /// );
    /// assert!(!teardown.should_report());
    /// ```
    #[must_use]
    pub const fn unreported(
        convention: Convention,
        asserts: bool,
        execution_order: ExecutionOrder,
    ) -> Self {
        Self {
            convention,
            asserts,
            execution_order,
            should_report: false,
        }
    }

    /// Returns `true` when `name` follows this matcher's convention.
    #[must_use]
    pub fn is_method_of_interest(&self, name: &str) -> bool {
        self.convention.matches(name)
    }

    /// The naming convention.
    #[must_use]
    pub const fn convention(&self) -> &Convention {
        &self.convention
    }

    /// Whether matched steps assert outcomes.
    #[must_use]
    pub const fn asserts(&self) -> bool {
        self.asserts
    }

    /// The execution order rank of matched steps.
    #[must_use]
    pub const fn execution_order(&self) -> ExecutionOrder {
        self.execution_order
    }

    /// Whether matched steps appear in reports.
    #[must_use]
    pub const fn should_report(&self) -> bool {
        self.should_report
    }
}

/// Return the conventional Given/When/Then matchers in priority order.
///
/// `AndGiven` and `AndWhen` precede the bare `And` so the more specific
/// continuations win. Only `Then` and `And` assert; every step is reported.
/// Setup and teardown style names (`...Context`, `Setup...`, `TearDown...`)
/// match none of these matchers.
///
/// # Examples
///
/// ```
/// use stepscan_policy::{ExecutionOrder, default_matchers, find_matcher};
///
/// let matchers = default_matchers();
/// let matched = find_matcher(&matchers, "AndGivenAnEmptyCart").expect("matches AndGiven");
/// assert_eq!(matched.execution_order(), ExecutionOrder::ConsecutiveSetupState);
/// assert!(find_matcher(&matchers, "EstablishContext").is_none());
/// ```
#[must_use]
pub fn default_matchers() -> Vec<StepMatcher> {
    vec![
        StepMatcher::new(Convention::prefix("Given"), false, ExecutionOrder::SetupState),
        StepMatcher::new(
            Convention::prefix("AndGiven"),
            false,
            ExecutionOrder::ConsecutiveSetupState,
        ),
        StepMatcher::new(Convention::prefix("When"), false, ExecutionOrder::Transition),
        StepMatcher::new(
            Convention::prefix("AndWhen"),
            false,
            ExecutionOrder::ConsecutiveTransition,
        ),
        StepMatcher::new(Convention::prefix("Then"), true, ExecutionOrder::Assertion),
        StepMatcher::new(
            Convention::prefix("And"),
            true,
            ExecutionOrder::ConsecutiveAssertion,
        ),
    ]
}

/// Return the first matcher in `matchers` interested in `name`.
#[must_use]
pub fn find_matcher<'m>(matchers: &'m [StepMatcher], name: &str) -> Option<&'m StepMatcher> {
    matchers
        .iter()
        .find(|matcher| matcher.is_method_of_interest(name))
}
